//! 粒子发射器
//!
//! 发射器持有粒子群与按优先级排序的行为列表，驱动每帧更新：
//! 钳制时间步长，按优先级顺序将行为应用到每个存活粒子，
//! 最后回收死亡粒子。

use std::sync::atomic::{AtomicU64, Ordering};

use log::{debug, trace};

use crate::config::ParticlesConfig;
use crate::particles::actions::{Action, ActionId};
use crate::particles::counter::Counter;
use crate::particles::particle::{Particle, ParticleId};

static NEXT_EMITTER_ID: AtomicU64 = AtomicU64::new(1);

/// 发射器的进程内唯一标识
///
/// 在多个发射器之间共享的行为类型以此为键区分各发射器的状态。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EmitterId(u64);

/// 发射器级上下文
///
/// 传入行为的生命周期钩子与 [`Action::update`] 的只读上下文。
/// 与行为列表、粒子列表分离存放，使得行为在可变借用粒子的同时
/// 仍能读取发射器参数。
#[derive(Debug)]
pub struct EmitterState {
    id: EmitterId,
    /// 单帧时长上限（时间单位），`update` 的入参超过该值时被钳制，
    /// 防止异常大的帧间隔（如卡顿后）破坏积分类行为的稳定性
    pub maximum_frame_time: f32,
    running: bool,
}

impl EmitterState {
    fn new(maximum_frame_time: f32) -> Self {
        Self {
            id: EmitterId(NEXT_EMITTER_ID.fetch_add(1, Ordering::Relaxed)),
            maximum_frame_time,
            running: false,
        }
    }

    /// 所属发射器的标识
    pub fn id(&self) -> EmitterId {
        self.id
    }

    /// 发射器是否在运行中
    pub fn is_running(&self) -> bool {
        self.running
    }
}

/// 行为槽：优先级在插入时读取一次并缓存
struct ActionSlot {
    id: ActionId,
    priority: i32,
    action: Box<dyn Action>,
}

/// 粒子发射器
///
/// 独占持有自己的行为列表与粒子列表，二者都不对外暴露可变引用。
/// `update` 每帧由宿主调用一次，期间不可重入（`&mut self` 已在
/// 类型上排除）。
pub struct Emitter {
    state: EmitterState,
    counter: Option<Box<dyn Counter>>,
    actions: Vec<ActionSlot>,
    particles: Vec<Particle>,
    next_action_id: u64,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Emitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Emitter")
            .field("id", &self.state.id)
            .field("running", &self.state.running)
            .field("actions", &self.actions.len())
            .field("particles", &self.particles.len())
            .finish()
    }
}

impl Emitter {
    /// 默认单帧时长上限
    pub const DEFAULT_MAXIMUM_FRAME_TIME: f32 = 0.1;

    /// 创建空发射器：无粒子、无行为、零计数器
    pub fn new() -> Self {
        Self {
            state: EmitterState::new(Self::DEFAULT_MAXIMUM_FRAME_TIME),
            counter: None,
            actions: Vec::new(),
            particles: Vec::new(),
            next_action_id: 1,
        }
    }

    /// 按配置创建发射器
    pub fn with_config(config: &ParticlesConfig) -> Self {
        Self {
            state: EmitterState::new(config.maximum_frame_time),
            counter: None,
            actions: Vec::new(),
            particles: Vec::with_capacity(config.particle_capacity),
            next_action_id: 1,
        }
    }

    /// 发射器标识
    pub fn id(&self) -> EmitterId {
        self.state.id()
    }

    /// 发射器级上下文
    pub fn state(&self) -> &EmitterState {
        &self.state
    }

    /// 是否在运行中
    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// 单帧时长上限
    pub fn maximum_frame_time(&self) -> f32 {
        self.state.maximum_frame_time
    }

    /// 设置单帧时长上限
    pub fn set_maximum_frame_time(&mut self, value: f32) {
        self.state.maximum_frame_time = value;
    }

    // ========================================================================
    // 计数器
    // ========================================================================

    /// 当前计数器
    pub fn counter(&self) -> Option<&dyn Counter> {
        self.counter.as_deref()
    }

    /// 挂接生成策略；发射器运行中则立即通知其启动
    pub fn set_counter(&mut self, mut counter: Box<dyn Counter>) {
        if self.state.running {
            counter.start_emitter(self);
        }
        self.counter = Some(counter);
    }

    /// 启动发射器并通知计数器
    pub fn start(&mut self) {
        self.state.running = true;
        if let Some(mut counter) = self.counter.take() {
            counter.start_emitter(self);
            self.counter = Some(counter);
        }
    }

    /// 停止发射器
    pub fn stop(&mut self) {
        self.state.running = false;
    }

    // ========================================================================
    // 行为列表：始终保持优先级非递增
    // ========================================================================

    /// 插入行为并触发其 added 钩子
    ///
    /// 优先级此刻读取一次并缓存。线性扫描找到第一个优先级严格
    /// 更低的槽位插入其前，即新行为排在所有优先级不低于它的
    /// 现有行为之后。同优先级的相对顺序不作保证。
    pub fn add_action(&mut self, action: Box<dyn Action>) -> ActionId {
        let priority = action.priority();
        let id = ActionId(self.next_action_id);
        self.next_action_id += 1;

        let index = self
            .actions
            .iter()
            .position(|slot| slot.priority < priority)
            .unwrap_or(self.actions.len());
        self.actions.insert(
            index,
            ActionSlot {
                id,
                priority,
                action,
            },
        );
        debug!(
            "emitter {:?}: action {:?} added at priority {}",
            self.state.id, id, priority
        );

        let slot = &mut self.actions[index];
        slot.action.added_to_emitter(&mut self.state);
        id
    }

    /// 按身份移除行为，触发其 removed 钩子并归还所有权
    ///
    /// 不在列表中时静默返回 `None`。要在插入后更改行为的优先级，
    /// 先移除拿回所有权，再重新 [`add_action`](Self::add_action)。
    pub fn remove_action(&mut self, id: ActionId) -> Option<Box<dyn Action>> {
        let index = self.actions.iter().position(|slot| slot.id == id)?;
        let mut slot = self.actions.remove(index);
        slot.action.removed_from_emitter(&mut self.state);
        debug!("emitter {:?}: action {:?} removed", self.state.id, id);
        Some(slot.action)
    }

    /// 行为是否在列表中
    pub fn has_action(&self, id: ActionId) -> bool {
        self.actions.iter().any(|slot| slot.id == id)
    }

    /// 行为数量
    pub fn action_count(&self) -> usize {
        self.actions.len()
    }

    /// 整表替换行为列表
    ///
    /// 依存储顺序逐个移除旧行为并触发 removed 钩子，新列表按
    /// 优先级降序排序后依最终顺序触发 added 钩子。每个旧行为
    /// 恰好收到一次移除通知，每个新行为恰好收到一次加入通知。
    /// 返回的 ID 与最终存储顺序一致。
    pub fn set_actions(&mut self, actions: Vec<Box<dyn Action>>) -> Vec<ActionId> {
        for mut slot in std::mem::take(&mut self.actions) {
            slot.action.removed_from_emitter(&mut self.state);
        }

        let mut slots: Vec<ActionSlot> = actions
            .into_iter()
            .map(|action| {
                let priority = action.priority();
                let id = ActionId(self.next_action_id);
                self.next_action_id += 1;
                ActionSlot {
                    id,
                    priority,
                    action,
                }
            })
            .collect();
        slots.sort_by(|a, b| b.priority.cmp(&a.priority));

        let ids: Vec<ActionId> = slots.iter().map(|slot| slot.id).collect();
        self.actions = slots;
        for slot in &mut self.actions {
            slot.action.added_to_emitter(&mut self.state);
        }
        debug!(
            "emitter {:?}: action list replaced, {} actions",
            self.state.id,
            self.actions.len()
        );
        ids
    }

    // ========================================================================
    // 粒子群
    // ========================================================================

    /// 存活粒子的只读视图
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// 粒子数量
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// 追加单个粒子，不改变已有粒子的顺序
    pub fn add_particle(&mut self, particle: Particle) {
        self.particles.push(particle);
    }

    /// 逐个追加粒子，保持传入顺序
    pub fn add_particles(&mut self, particles: Vec<Particle>) {
        self.particles.extend(particles);
    }

    /// 按身份移除粒子，返回是否找到
    pub fn remove_particle(&mut self, id: ParticleId) -> bool {
        match self.particles.iter().position(|p| p.id() == id) {
            Some(index) => {
                self.particles.remove(index);
                true
            }
            None => false,
        }
    }

    /// 逐个移除粒子，不在群中的 ID 静默跳过
    pub fn remove_particles(&mut self, ids: &[ParticleId]) {
        for &id in ids {
            self.remove_particle(id);
        }
    }

    /// 立即清空粒子群（硬移除，不经过死亡标记）
    pub fn kill_all_particles(&mut self) {
        self.particles.clear();
    }

    /// 整体替换粒子群：清空后逐个加入
    pub fn set_particles(&mut self, particles: Vec<Particle>) {
        self.kill_all_particles();
        self.add_particles(particles);
    }

    // ========================================================================
    // 帧更新
    // ========================================================================

    /// 推进一帧
    ///
    /// 1. 将 `time` 钳制到 [`maximum_frame_time`](Self::maximum_frame_time)；
    /// 2. 无存活粒子时直接返回，行为不被调用；
    /// 3. 外层按优先级遍历行为，内层按列表顺序遍历粒子——
    ///    所有粒子先收到行为 A 的效果，之后才有粒子收到行为 B 的
    ///    效果（A 优先级高于 B）；
    /// 4. 行为阶段只能标记死亡，结构性删除集中在帧末的一次
    ///    压缩遍历中完成，幸存粒子顺序与身份不变。
    pub fn update(&mut self, time: f32) {
        let time = time.min(self.state.maximum_frame_time);

        if self.particles.is_empty() {
            return;
        }

        for slot in &mut self.actions {
            for particle in &mut self.particles {
                slot.action.update(&self.state, particle, time);
            }
        }

        let before = self.particles.len();
        self.particles.retain(|particle| !particle.is_dead());
        let reaped = before - self.particles.len();
        if reaped > 0 {
            trace!(
                "emitter {:?}: reaped {} dead particles, {} alive",
                self.state.id,
                reaped,
                self.particles.len()
            );
        }
    }
}

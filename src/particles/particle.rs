//! 粒子数据记录
//!
//! 粒子是纯数据结构，由外部生成器创建，交由发射器管理。
//! 行为（Action）每帧修改粒子状态，发射器在帧末回收死亡粒子。

use glam::Vec2;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PARTICLE_ID: AtomicU64 = AtomicU64::new(1);

/// 粒子的不透明身份句柄
///
/// 每个粒子在创建时获得进程内唯一的 ID，用于按身份（而非按值）
/// 从发射器中移除粒子。克隆粒子会复制 ID。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ParticleId(u64);

/// 单个粒子
///
/// 位置与速度是公开字段，供行为直接读写；死亡标记是私有的，
/// 只能通过 [`Particle::kill`] 置位，一旦置位不可复活。
#[derive(Debug, Clone)]
pub struct Particle {
    /// 位置（像素）
    pub position: Vec2,
    /// 速度（像素/时间单位）
    pub velocity: Vec2,
    id: ParticleId,
    is_dead: bool,
}

impl Default for Particle {
    fn default() -> Self {
        Self::new(Vec2::ZERO, Vec2::ZERO)
    }
}

impl Particle {
    /// 创建一个新粒子并分配唯一 ID
    pub fn new(position: Vec2, velocity: Vec2) -> Self {
        Self {
            position,
            velocity,
            id: ParticleId(NEXT_PARTICLE_ID.fetch_add(1, Ordering::Relaxed)),
            is_dead: false,
        }
    }

    /// 粒子的身份句柄
    pub fn id(&self) -> ParticleId {
        self.id
    }

    /// 标记粒子死亡，帧末由发射器回收
    pub fn kill(&mut self) {
        self.is_dead = true;
    }

    /// 粒子是否已标记死亡
    pub fn is_dead(&self) -> bool {
        self.is_dead
    }

    /// 当前速率（速度向量的模）
    pub fn speed(&self) -> f32 {
        self.velocity.length()
    }
}

//! 粒子行为（Action）
//!
//! Action 是按优先级排序的行为单元，发射器每帧按优先级从高到低
//! 依次将每个 Action 应用到所有存活粒子上。
//!
//! ## 优先级约定
//!
//! 数值越大越先执行。加速度类行为习惯使用较高优先级，
//! 速度钳制类行为（如 [`SpeedLimit`]）使用负优先级，
//! 以便在本帧所有速度修改完成之后再执行。
//!
//! 优先级在插入发射器时读取一次并缓存；插入之后修改 Action
//! 自身的优先级概念不会触发重排，需要先移除再重新加入
//! （[`Emitter::remove_action`] 会归还 Action 的所有权）。
//!
//! [`Emitter::remove_action`]: crate::particles::Emitter::remove_action
//! [`SpeedLimit`]: speed_limit::SpeedLimit

pub mod speed_limit;

pub use speed_limit::SpeedLimit;

use crate::particles::emitter::EmitterState;
use crate::particles::particle::Particle;

/// Action 在发射器内的不透明身份句柄
///
/// 由 [`Emitter::add_action`] 返回，用于按身份检测与移除。
///
/// [`Emitter::add_action`]: crate::particles::Emitter::add_action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub(crate) u64);

/// 粒子行为接口
///
/// 一个 Action 实例同一时刻只属于一个发射器。需要在多个发射器间
/// 共享状态的行为类型应以 [`EmitterState::id`] 为键管理各发射器
/// 的独立状态，生命周期钩子为此传入发射器状态。
///
/// `Send + Sync` 约束来自 ECS 集成：发射器管理器是 `bevy_ecs`
/// 资源，其中的 Action 必须可跨线程移动。
pub trait Action: Send + Sync {
    /// 执行优先级，越大越先执行
    ///
    /// 只在插入发射器时读取一次。
    fn priority(&self) -> i32 {
        0
    }

    /// 加入发射器时调用，恰好一次
    fn added_to_emitter(&mut self, _emitter: &mut EmitterState) {}

    /// 离开发射器时调用，恰好一次（显式移除或整表替换都会触发）
    fn removed_from_emitter(&mut self, _emitter: &mut EmitterState) {}

    /// 对单个粒子应用本帧效果
    ///
    /// `time` 为钳制后的本帧时长（秒）。实现只能修改传入的粒子，
    /// 不能对发射器的粒子集合做结构性增删——签名上也无从做到，
    /// 粒子的增删由发射器在帧末统一完成。
    fn update(&mut self, emitter: &EmitterState, particle: &mut Particle, time: f32);
}

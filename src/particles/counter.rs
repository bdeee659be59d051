//! 生成策略接口边界
//!
//! 生成速率策略本身在本 crate 范围之外，这里只定义发射器依赖的
//! 最小接口：发射器启动（或在运行中更换计数器）时的通知调用。

use crate::particles::emitter::Emitter;

/// 粒子生成策略
///
/// 具体策略负责创建粒子并通过 [`Emitter::add_particle`] 交给
/// 发射器；本 crate 只约定启动通知这一个调用点。
pub trait Counter: Send + Sync {
    /// 发射器启动时调用；若计数器在发射器运行期间被挂接，
    /// 挂接当即调用
    fn start_emitter(&mut self, emitter: &mut Emitter);
}

/// 不生成任何粒子的默认计数器
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroCounter;

impl Counter for ZeroCounter {
    fn start_emitter(&mut self, _emitter: &mut Emitter) {}
}

//! 速度钳制行为
//!
//! 将粒子速率限制在最大值以下或最小值以上。

#[cfg(test)]
use glam::Vec2;

use crate::particles::actions::Action;
use crate::particles::emitter::EmitterState;
use crate::particles::particle::Particle;

/// 限制粒子的最大或最小速率
///
/// 固定优先级为 [`SpeedLimit::PRIORITY`]（-5），保证在本帧所有
/// 加速度类行为执行完毕之后才进行钳制。
///
/// ```
/// use glam::Vec2;
/// use particle_engine::particles::{Emitter, Particle, SpeedLimit};
///
/// let mut emitter = Emitter::new();
/// emitter.add_action(Box::new(SpeedLimit::maximum(2.0)));
/// emitter.add_particle(Particle::new(Vec2::ZERO, Vec2::new(3.0, 4.0)));
/// emitter.update(0.016);
/// assert!((emitter.particles()[0].speed() - 2.0).abs() < 1e-6);
/// ```
#[derive(Debug, Clone)]
pub struct SpeedLimit {
    limit: f32,
    limit_sq: f32,
    is_minimum: bool,
}

impl Default for SpeedLimit {
    fn default() -> Self {
        Self::maximum(f32::MAX)
    }
}

impl SpeedLimit {
    /// 执行优先级：在加速度类行为之后
    pub const PRIORITY: i32 = -5;

    /// 创建最大速率限制：超速粒子减速到 `limit`
    pub fn maximum(limit: f32) -> Self {
        Self {
            limit,
            limit_sq: limit * limit,
            is_minimum: false,
        }
    }

    /// 创建最小速率限制：低速粒子加速到 `limit`
    pub fn minimum(limit: f32) -> Self {
        Self {
            limit,
            limit_sq: limit * limit,
            is_minimum: true,
        }
    }

    /// 速率限制值
    pub fn limit(&self) -> f32 {
        self.limit
    }

    /// 修改速率限制值，同步重算缓存的平方值
    pub fn set_limit(&mut self, limit: f32) {
        self.limit = limit;
        self.limit_sq = limit * limit;
    }

    /// 是否为最小速率限制
    pub fn is_minimum(&self) -> bool {
        self.is_minimum
    }

    /// 切换最大/最小模式
    pub fn set_is_minimum(&mut self, is_minimum: bool) {
        self.is_minimum = is_minimum;
    }
}

impl Action for SpeedLimit {
    fn priority(&self) -> i32 {
        Self::PRIORITY
    }

    /// 比较粒子速率平方与限制值平方，越界时等比缩放速度向量
    ///
    /// 速率恰好等于限制值时不做任何改写。静止粒子（速率为零）
    /// 没有方向可言，即使设置了最小速率限制也保持不变——
    /// 绝不向粒子状态写入 NaN 或无穷。
    fn update(&mut self, _emitter: &EmitterState, particle: &mut Particle, _time: f32) {
        let speed_sq = particle.velocity.length_squared();
        let out_of_range = if self.is_minimum {
            speed_sq < self.limit_sq
        } else {
            speed_sq > self.limit_sq
        };
        if out_of_range && speed_sq > 0.0 {
            let scale = self.limit / speed_sq.sqrt();
            particle.velocity *= scale;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particles::Emitter;

    fn run_once(action: SpeedLimit, velocity: Vec2) -> Particle {
        let mut emitter = Emitter::new();
        emitter.add_action(Box::new(action));
        emitter.add_particle(Particle::new(Vec2::ZERO, velocity));
        emitter.update(0.016);
        emitter.particles()[0].clone()
    }

    #[test]
    fn test_maximum_clamps_fast_particle() {
        // 速度 (3,4)，速率 5，限制 2
        let p = run_once(SpeedLimit::maximum(2.0), Vec2::new(3.0, 4.0));
        assert!((p.speed() - 2.0).abs() < 1e-6);
        // 方向不变：缩放后仍与原向量平行
        assert!(p.velocity.perp_dot(Vec2::new(3.0, 4.0)).abs() < 1e-6);
    }

    #[test]
    fn test_minimum_boosts_slow_particle() {
        let p = run_once(SpeedLimit::minimum(5.0), Vec2::new(0.6, 0.8));
        assert!((p.speed() - 5.0).abs() < 1e-5);
        assert!(p.velocity.perp_dot(Vec2::new(0.6, 0.8)).abs() < 1e-5);
    }

    #[test]
    fn test_exactly_at_limit_is_untouched() {
        // 恰好在限制值上：要求严格不改写，按位相等
        let v = Vec2::new(3.0, 4.0);
        let p = run_once(SpeedLimit::maximum(5.0), v);
        assert_eq!(p.velocity, v);
        let p = run_once(SpeedLimit::minimum(5.0), v);
        assert_eq!(p.velocity, v);
    }

    #[test]
    fn test_stationary_particle_with_minimum_limit() {
        // 静止粒子没有方向，最小速率限制保持不变，绝不产生 NaN
        let p = run_once(SpeedLimit::minimum(5.0), Vec2::ZERO);
        assert_eq!(p.velocity, Vec2::ZERO);
        assert!(p.velocity.x.is_finite() && p.velocity.y.is_finite());
    }

    #[test]
    fn test_set_limit_recomputes_cache() {
        let mut action = SpeedLimit::maximum(100.0);
        action.set_limit(2.0);
        let mut emitter = Emitter::new();
        emitter.add_action(Box::new(action));
        emitter.add_particle(Particle::new(Vec2::ZERO, Vec2::new(3.0, 4.0)));
        emitter.update(0.016);
        assert!((emitter.particles()[0].speed() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_is_effectively_unbounded() {
        let p = run_once(SpeedLimit::default(), Vec2::new(1e6, -1e6));
        assert_eq!(p.velocity, Vec2::new(1e6, -1e6));
    }
}

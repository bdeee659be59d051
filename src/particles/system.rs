//! 粒子系统管理器
//!
//! 管理多个发射器，提供统一的更新接口与 ECS 集成。

use bevy_ecs::prelude::*;

use crate::particles::emitter::{Emitter, EmitterId};

/// 粒子系统管理器
///
/// 持有多个发射器并统一驱动更新。作为 `bevy_ecs` 资源挂入宿主
/// 的 ECS 世界，由 [`particle_update_system`] 每帧调用。
#[derive(Resource)]
pub struct ParticleSystemManager {
    /// 发射器列表
    emitters: Vec<Emitter>,
    /// 最大发射器数
    max_emitters: usize,
}

impl ParticleSystemManager {
    /// 创建新的管理器
    pub fn new(max_emitters: usize) -> Self {
        Self {
            emitters: Vec::with_capacity(max_emitters),
            max_emitters,
        }
    }

    /// 接管一个发射器，返回其 ID；超出容量上限时原样退还
    pub fn add_emitter(&mut self, emitter: Emitter) -> Result<EmitterId, Emitter> {
        if self.emitters.len() >= self.max_emitters {
            return Err(emitter);
        }
        let id = emitter.id();
        self.emitters.push(emitter);
        Ok(id)
    }

    /// 按 ID 获取发射器
    pub fn get(&self, id: EmitterId) -> Option<&Emitter> {
        self.emitters.iter().find(|e| e.id() == id)
    }

    /// 按 ID 获取发射器（可变引用）
    pub fn get_mut(&mut self, id: EmitterId) -> Option<&mut Emitter> {
        self.emitters.iter_mut().find(|e| e.id() == id)
    }

    /// 移除发射器并归还所有权；不存在时返回 `None`
    pub fn remove_emitter(&mut self, id: EmitterId) -> Option<Emitter> {
        let index = self.emitters.iter().position(|e| e.id() == id)?;
        Some(self.emitters.remove(index))
    }

    /// 当前发射器数量
    pub fn emitter_count(&self) -> usize {
        self.emitters.len()
    }

    /// 清空所有发射器
    pub fn clear(&mut self) {
        self.emitters.clear();
    }

    /// 推进所有发射器一帧
    pub fn update_all(&mut self, delta_time: f32) {
        for emitter in &mut self.emitters {
            emitter.update(delta_time);
        }
    }
}

impl Default for ParticleSystemManager {
    fn default() -> Self {
        Self::new(64)
    }
}

// ============================================================================
// ECS 系统
// ============================================================================

/// 帧时间资源
#[derive(Resource)]
pub struct Time {
    /// 本帧时长（秒）
    pub delta_seconds: f32,
    /// 累计运行时间（秒）
    pub elapsed_seconds: f64,
}

impl Default for Time {
    fn default() -> Self {
        Self {
            delta_seconds: 0.0,
            elapsed_seconds: 0.0,
        }
    }
}

/// 粒子更新系统
///
/// 每帧驱动管理器中的全部发射器。
pub fn particle_update_system(time: Res<Time>, mut manager: ResMut<ParticleSystemManager>) {
    manager.update_all(time.delta_seconds);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manager_capacity() {
        let mut manager = ParticleSystemManager::new(1);
        assert_eq!(manager.emitter_count(), 0);

        assert!(manager.add_emitter(Emitter::new()).is_ok());
        // 超出上限：发射器被退还
        assert!(manager.add_emitter(Emitter::new()).is_err());
        assert_eq!(manager.emitter_count(), 1);
    }

    #[test]
    fn test_manager_ids_stable_across_removal() {
        let mut manager = ParticleSystemManager::default();
        let a = manager.add_emitter(Emitter::new()).unwrap();
        let b = manager.add_emitter(Emitter::new()).unwrap();

        assert!(manager.remove_emitter(a).is_some());
        // a 移除后 b 的 ID 仍然有效
        assert!(manager.get(b).is_some());
        assert!(manager.get(a).is_none());
        assert!(manager.remove_emitter(a).is_none());
    }

    #[test]
    fn test_update_all_reaches_every_emitter() {
        use crate::particles::particle::Particle;
        use crate::particles::SpeedLimit;
        use glam::Vec2;

        let mut manager = ParticleSystemManager::default();
        let mut ids = Vec::new();
        for _ in 0..2 {
            let mut emitter = Emitter::new();
            emitter.add_action(Box::new(SpeedLimit::maximum(1.0)));
            emitter.add_particle(Particle::new(Vec2::ZERO, Vec2::new(3.0, 4.0)));
            ids.push(manager.add_emitter(emitter).unwrap());
        }

        manager.update_all(0.016);
        for id in ids {
            let emitter = manager.get(id).unwrap();
            assert!((emitter.particles()[0].speed() - 1.0).abs() < 1e-6);
        }
    }
}

//! 粒子模拟核心模块
//!
//! CPU 侧逐帧粒子模拟：行为（Action）按优先级组成流水线，
//! 每帧依次作用于发射器持有的全部存活粒子。
//!
//! ## 架构设计
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                 Emitter::update(time)                    │
//! ├─────────────────────────────────────────────────────────┤
//! │  1. 钳制时间步长（maximum_frame_time，默认 0.1）          │
//! │                                                          │
//! │  2. 行为流水线（优先级从高到低）                           │
//! │     for action in actions:                               │
//! │         for particle in particles:                       │
//! │             action.update(state, particle, time)         │
//! │     —— 所有粒子看到相同的行为顺序                          │
//! │                                                          │
//! │  3. 回收（标记-压缩）                                     │
//! │     行为阶段只标记死亡，帧末一次压缩遍历移除，             │
//! │     幸存粒子顺序与身份不变                                │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 使用示例
//!
//! ```
//! use glam::Vec2;
//! use particle_engine::particles::{Emitter, Particle, SpeedLimit};
//!
//! let mut emitter = Emitter::new();
//! emitter.add_action(Box::new(SpeedLimit::maximum(10.0)));
//! emitter.add_particle(Particle::new(Vec2::ZERO, Vec2::new(30.0, 40.0)));
//!
//! // 宿主每帧调用一次
//! emitter.update(0.016);
//! assert!(emitter.particles()[0].speed() <= 10.0);
//! ```

pub mod actions;
pub mod counter;
pub mod emitter;
pub mod particle;
pub mod system;

pub use actions::{Action, ActionId, SpeedLimit};
pub use counter::{Counter, ZeroCounter};
pub use emitter::{Emitter, EmitterId, EmitterState};
pub use particle::{Particle, ParticleId};
pub use system::{particle_update_system, ParticleSystemManager, Time};

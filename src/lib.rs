//! # Particle Engine
//!
//! A per-frame particle simulation core built with Rust.
//!
//! ## Features
//!
//! - **Action Pipeline**: priority-ordered behaviors applied to every live
//!   particle each frame, with a clean attach/detach lifecycle protocol
//! - **Deterministic Frame Step**: clamped time step, fixed action ordering
//!   and a mark-then-compact reap pass at end of frame
//! - **ECS Integration**: a `bevy_ecs` resource and system drive all
//!   emitters from the host's schedule
//! - **Configuration**: TOML-based tuning of frame clamping and capacities
//!
//! ## Architecture Design
//!
//! This crate follows the **Anemic Domain Model (贫血模型)** pattern:
//! - **State**: pure data structures (`Particle`, `EmitterState`)
//! - **Behavior**: `Action` trait objects applying per-particle logic
//! - **System**: `particle_update_system` for ECS orchestration
//!
//! ### Example
//!
//! ```
//! use glam::Vec2;
//! use particle_engine::particles::{Emitter, Particle, SpeedLimit};
//!
//! let mut emitter = Emitter::new();
//! emitter.add_action(Box::new(SpeedLimit::maximum(5.0)));
//! emitter.add_particle(Particle::new(Vec2::ZERO, Vec2::new(6.0, 8.0)));
//! emitter.update(1.0 / 60.0);
//! ```
//!
//! ## Modules
//!
//! - [`particles`]: emitters, particles, actions and the ECS glue
//! - [`config`]: configuration system

/// Particle simulation core: emitters, particles, actions
pub mod particles;
/// Configuration system
pub mod config;

pub use config::{ConfigError, ConfigResult, ParticlesConfig};
pub use particles::{
    Action, ActionId, Counter, Emitter, EmitterId, EmitterState, Particle, ParticleId,
    ParticleSystemManager, SpeedLimit, ZeroCounter,
};

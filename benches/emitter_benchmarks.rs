//! 发射器性能基准测试
//!
//! 测试帧更新、行为插入等操作的性能

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use particle_engine::particles::{Action, Emitter, EmitterState, Particle, SpeedLimit};

/// 按速度推进位置的基准行为
struct Drift;

impl Action for Drift {
    fn priority(&self) -> i32 {
        10
    }

    fn update(&mut self, _emitter: &EmitterState, particle: &mut Particle, time: f32) {
        particle.position += particle.velocity * time;
    }
}

fn scattered_particles(count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| {
            let velocity = Vec2::new(
                rand::random::<f32>() * 40.0 - 20.0,
                rand::random::<f32>() * 40.0 - 20.0,
            );
            Particle::new(Vec2::ZERO, velocity)
        })
        .collect()
}

fn bench_emitter_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("emitter_update");

    for particle_count in [10, 100, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(particle_count),
            particle_count,
            |b, &count| {
                let mut emitter = Emitter::new();
                emitter.add_action(Box::new(Drift));
                emitter.add_action(Box::new(SpeedLimit::maximum(10.0)));
                emitter.add_particles(scattered_particles(count));

                b.iter(|| {
                    emitter.update(black_box(0.016));
                });
            },
        );
    }

    group.finish();
}

fn bench_action_insertion(c: &mut Criterion) {
    /// 固定优先级的空行为
    struct Stub(i32);

    impl Action for Stub {
        fn priority(&self) -> i32 {
            self.0
        }

        fn update(&mut self, _emitter: &EmitterState, _particle: &mut Particle, _time: f32) {}
    }

    let mut group = c.benchmark_group("action_insertion");

    for action_count in [10, 100].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(action_count),
            action_count,
            |b, &count| {
                b.iter(|| {
                    let mut emitter = Emitter::new();
                    for i in 0..count {
                        emitter.add_action(Box::new(Stub((i % 17) - 8)));
                    }
                    black_box(emitter.action_count())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_emitter_update, bench_action_insertion);
criterion_main!(benches);

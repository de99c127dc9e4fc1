//! Randomized pool/active-set conservation checks
//!
//! Drives the spawner through arbitrary operation sequences and checks that
//! the pooled and active instance counts always sum to capacity, whatever
//! order spawns, taps, ticks and clears arrive in.

use glam::Vec2;
use proptest::prelude::*;

use asteroid_rain::SpawnConfig;
use asteroid_rain::sim::{AsteroidSpawner, NullEvents, SpawnParams};

#[derive(Debug, Clone)]
enum Op {
    /// Spawn with drawn parameters (may legitimately hit PoolExhausted)
    SpawnRandom,
    /// Spawn a large asteroid high above the boundary
    SpawnLarge,
    /// Tap the nth active asteroid, wrapping
    Tap(usize),
    /// Tap an id that was never allocated
    TapStale,
    /// Advance one frame
    Tick,
    /// Advance far enough to drive everything past the boundary
    TickLong,
    ClearAll,
    Disable,
    Enable,
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => Just(Op::SpawnRandom),
        2 => Just(Op::SpawnLarge),
        3 => any::<usize>().prop_map(Op::Tap),
        1 => Just(Op::TapStale),
        3 => Just(Op::Tick),
        1 => Just(Op::TickLong),
        1 => Just(Op::ClearAll),
        1 => Just(Op::Disable),
        1 => Just(Op::Enable),
    ]
}

fn check_conserved(spawner: &AsteroidSpawner) {
    assert_eq!(
        spawner.free_count() + spawner.active_count(),
        spawner.capacity(),
        "pool + active must always equal capacity"
    );
}

proptest! {
    #[test]
    fn conservation_under_arbitrary_ops(
        seed in any::<u64>(),
        ops in prop::collection::vec(op_strategy(), 1..120),
    ) {
        let config = SpawnConfig {
            pool_capacity: 8,
            ..Default::default()
        };
        let capacity = config.pool_capacity;
        let mut spawner =
            AsteroidSpawner::new(config, seed, Box::new(NullEvents)).unwrap();
        let mut now = 0.0f32;
        spawner.set_enabled(true, now);

        for op in ops {
            match op {
                Op::SpawnRandom => {
                    let _ = spawner.spawn_random();
                }
                Op::SpawnLarge => {
                    let _ = spawner.spawn(SpawnParams {
                        size: 2,
                        pos: Vec2::new(0.0, 100.0),
                        vel: Vec2::new(0.0, -1.0),
                        rot_vel: 0.5,
                        sprite: 0,
                    });
                }
                Op::Tap(n) => {
                    let ids: Vec<u32> = spawner.asteroids().map(|r| r.id).collect();
                    if !ids.is_empty() {
                        // Splits can exhaust the pool; conservation must
                        // survive the error path too
                        let _ = spawner.on_interaction(ids[n % ids.len()]);
                    }
                }
                Op::TapStale => {
                    let stale = capacity as u32 + 17;
                    prop_assert!(spawner.on_interaction(stale).is_err());
                }
                Op::Tick => {
                    now += 1.0 / 60.0;
                    spawner.tick(1.0 / 60.0, now).ok();
                }
                Op::TickLong => {
                    now += 500.0;
                    spawner.tick(500.0, now).ok();
                }
                Op::ClearAll => spawner.clear_all(),
                Op::Disable => spawner.set_enabled(false, now),
                Op::Enable => spawner.set_enabled(true, now),
            }
            check_conserved(&spawner);
            prop_assert!(spawner.active_count() <= capacity);
        }
    }

    #[test]
    fn split_children_inherit_motion(
        x in -2.0f32..2.0,
        vy in -3.0f32..-1.0,
        rot in -3.0f32..3.0,
    ) {
        let config = SpawnConfig::default();
        let offset = config.split_offset;
        let mut spawner = AsteroidSpawner::new(config, 1, Box::new(NullEvents)).unwrap();

        let pos = Vec2::new(x, 2.0);
        let vel = Vec2::new(0.0, vy);
        let id = spawner
            .spawn(SpawnParams { size: 2, pos, vel, rot_vel: rot, sprite: 2 })
            .unwrap();
        spawner.on_interaction(id).unwrap();

        let children: Vec<_> = spawner.asteroids().collect();
        prop_assert_eq!(children.len(), 2);
        let mut xs: Vec<f32> = children.iter().map(|c| c.pos.x).collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        prop_assert_eq!(xs, vec![pos.x - offset, pos.x + offset]);
        for child in children {
            prop_assert_eq!(child.size, 1);
            prop_assert_eq!(child.vel, vel);
            prop_assert_eq!(child.rot_vel, rot);
            prop_assert_eq!(child.sprite, 2);
        }
    }
}

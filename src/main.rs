//! Headless autoplay demo
//!
//! Runs one match at a fixed timestep with a bot that taps a random active
//! asteroid every few frames. Useful for eyeballing balance via `RUST_LOG`
//! output without a renderer attached.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use asteroid_rain::consts::{GAME_DURATION, SIM_DT};
use asteroid_rain::{Game, GameMode, SimError, SpawnConfig};

/// Frames between bot taps (~5 taps per second at 60 Hz)
const TAP_INTERVAL: u32 = 12;

fn main() -> Result<(), SimError> {
    env_logger::init();

    let seed: u64 = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or(0xA57E);
    log::info!("seed {seed}");

    let config = SpawnConfig::default();
    let particles = config.explosion_particles;
    let mut game = Game::new(config, GAME_DURATION, seed)?;
    let mut bot = Pcg32::seed_from_u64(seed ^ 1);

    let mut now = 0.0f32;
    game.start(now);

    let mut frame = 0u32;
    while game.mode() == GameMode::Playing {
        now += SIM_DT;
        frame += 1;
        game.update(SIM_DT, now)?;

        if frame % TAP_INTERVAL == 0 {
            let ids: Vec<u32> = game.spawner.asteroids().map(|r| r.id).collect();
            if !ids.is_empty() {
                let id = ids[bot.random_range(0..ids.len())];
                game.tap(id)?;
            }
        }

        for fx in game.drain_fx() {
            log::debug!(
                "boom at ({:.2}, {:.2}): emit {} particles",
                fx.pos.x,
                fx.pos.y,
                particles
            );
        }
    }

    println!(
        "match over after {:.1}s: score {}, lives {}",
        now,
        game.score(),
        game.lives()
    );
    Ok(())
}

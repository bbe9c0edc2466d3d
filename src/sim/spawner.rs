//! Obstacle spawning with speed-scaled frequency

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::obstacle::{Obstacle, ObstacleKind};
use super::state::Playfield;
use crate::consts::{FLOATING_CLEARANCE, MIN_SPAWN_INTERVAL};
use crate::settings::Tuning;

/// Frames until the next spawn for a given game speed
///
/// Faster games spawn more often, floored at `MIN_SPAWN_INTERVAL` so the
/// spacing never becomes impossible. Fractional frames round up.
pub fn spawn_interval(base_interval: u32, spawn_speed_factor: f32, game_speed: f32) -> u32 {
    let frames = (base_interval as f32 - game_speed * spawn_speed_factor).ceil();
    frames.max(MIN_SPAWN_INTERVAL as f32) as u32
}

/// Countdown-driven obstacle generator
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Frames until the next spawn
    pub countdown: i64,
    pub base_interval: u32,
    spawn_speed_factor: f32,
    min_size: u32,
    max_size: u32,
    floating_chance: f64,
    rng: Pcg32,
}

impl Spawner {
    pub fn new(tuning: &Tuning, seed: u64) -> Self {
        Self {
            countdown: tuning.spawn_interval as i64,
            base_interval: tuning.spawn_interval,
            spawn_speed_factor: tuning.spawn_speed_factor,
            min_size: tuning.obstacle_min_size,
            max_size: tuning.obstacle_max_size.max(tuning.obstacle_min_size),
            floating_chance: tuning.floating_chance.clamp(0.0, 1.0),
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    /// Count down one frame, returning a new obstacle when the timer fires
    ///
    /// Returned obstacles carry ID 0.
    pub fn advance(
        &mut self,
        game_speed: f32,
        playfield: Playfield,
        avatar_height: f32,
    ) -> Option<Obstacle> {
        self.countdown -= 1;
        if self.countdown > 0 {
            return None;
        }

        let obstacle = self.spawn(game_speed, playfield, avatar_height);
        self.countdown =
            spawn_interval(self.base_interval, self.spawn_speed_factor, game_speed) as i64;
        Some(obstacle)
    }

    fn spawn(&mut self, game_speed: f32, playfield: Playfield, avatar_height: f32) -> Obstacle {
        let size = self.rng.random_range(self.min_size..=self.max_size) as f32;
        let kind = if self.floating_chance > 0.0 && self.rng.random_bool(self.floating_chance) {
            ObstacleKind::Floating
        } else {
            ObstacleKind::Ground
        };

        let mut pos = Vec2::new(playfield.width + size, playfield.height - size);
        if kind == ObstacleKind::Floating {
            pos.y -= avatar_height - FLOATING_CLEARANCE;
        }

        let color = format!("#{:06x}", self.rng.random_range(0..=0xff_ffffu32));
        // The run assigns the real ID when it takes ownership
        Obstacle {
            id: 0,
            kind,
            pos,
            size: Vec2::splat(size),
            dx: -game_speed,
            color,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    const FIELD: Playfield = Playfield {
        width: 800.0,
        height: 400.0,
    };

    #[test]
    fn test_interval_scales_with_speed() {
        assert_eq!(spawn_interval(200, 8.0, 0.0), 200);
        assert_eq!(spawn_interval(200, 8.0, 3.0), 176);
        // 200 - 3.003 * 8 = 175.976, rounds up
        assert_eq!(spawn_interval(200, 8.0, 3.003), 176);
        assert_eq!(spawn_interval(200, 8.0, 17.5), 60);
        assert_eq!(spawn_interval(200, 8.0, 1000.0), 60);
    }

    #[test]
    fn test_first_spawn_after_base_interval() {
        let mut spawner = Spawner::new(&Tuning::default(), 7);
        for _ in 0..SPAWN_INTERVAL - 1 {
            assert!(spawner.advance(3.0, FIELD, AVATAR_SIZE).is_none());
        }
        let obstacle = spawner.advance(3.0, FIELD, AVATAR_SIZE).unwrap();
        let size = obstacle.size.x;
        assert_eq!(obstacle.size.y, size);
        assert!((OBSTACLE_MIN_SIZE as f32..=OBSTACLE_MAX_SIZE as f32).contains(&size));
        assert_eq!(obstacle.pos, Vec2::new(FIELD.width + size, FIELD.height - size));
        assert_eq!(obstacle.dx, -3.0);
        assert_eq!(obstacle.kind, ObstacleKind::Ground);
        assert_eq!(spawner.countdown, 176);
    }

    #[test]
    fn test_same_seed_same_obstacles() {
        let mut a = Spawner::new(&Tuning::default(), 42);
        let mut b = Spawner::new(&Tuning::default(), 42);
        for _ in 0..2000 {
            let oa = a.advance(3.0, FIELD, AVATAR_SIZE);
            let ob = b.advance(3.0, FIELD, AVATAR_SIZE);
            assert_eq!(oa.map(|o| (o.size, o.color)), ob.map(|o| (o.size, o.color)));
        }
    }

    #[test]
    fn test_floating_obstacles_raised() {
        let tuning = Tuning {
            floating_chance: 1.0,
            ..Default::default()
        };
        let mut spawner = Spawner::new(&tuning, 3);
        spawner.countdown = 1;
        let obstacle = spawner.advance(3.0, FIELD, AVATAR_SIZE).unwrap();
        assert_eq!(obstacle.kind, ObstacleKind::Floating);
        let expected_y = FIELD.height - obstacle.size.y - (AVATAR_SIZE - FLOATING_CLEARANCE);
        assert_eq!(obstacle.pos.y, expected_y);
    }

    proptest! {
        #[test]
        fn prop_interval_never_below_floor(speed in 0.0f32..1.0e6, base in 0u32..1000) {
            prop_assert!(spawn_interval(base, SPAWN_SPEED_FACTOR, speed) >= MIN_SPAWN_INTERVAL);
        }

        #[test]
        fn prop_sizes_in_range(seed in any::<u64>()) {
            let mut spawner = Spawner::new(&Tuning::default(), seed);
            for _ in 0..20 {
                spawner.countdown = 1;
                let o = spawner.advance(3.0, FIELD, AVATAR_SIZE).unwrap();
                prop_assert!(o.size.x >= 20.0 && o.size.x <= 70.0);
                prop_assert_eq!(o.size.x.fract(), 0.0);
            }
        }
    }
}

//! Interval-gated opponent spawning

use rand::Rng;

use super::state::Opponent;
use crate::tuning::Tuning;

/// Counts ticks and releases one opponent every `interval` ticks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    pub timer: u32,
    pub interval: u32,
}

impl Spawner {
    pub fn new(interval: u32) -> Self {
        Self { timer: 0, interval }
    }

    /// Advance the timer by one tick, spawning when it reaches the interval
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) -> Option<Opponent> {
        self.timer += 1;
        if self.timer >= self.interval {
            self.timer = 0;
            Some(spawn_opponent(rng, tuning))
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        self.timer = 0;
    }
}

/// Create an opponent at a random road position above the visible area
pub fn spawn_opponent<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Opponent {
    let min_x = tuning.road_left();
    let max_x = tuning.road_right() - tuning.opponent_width;
    let x = if max_x > min_x {
        rng.random_range(min_x..max_x)
    } else {
        min_x
    };

    let speed = if tuning.opponent_max_speed > tuning.opponent_min_speed {
        rng.random_range(tuning.opponent_min_speed..tuning.opponent_max_speed)
    } else {
        tuning.opponent_min_speed
    };

    Opponent::new(x, tuning.opponent_start_y, speed, tuning)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_spawns_every_interval() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(1);
        let mut spawner = Spawner::new(100);

        for _ in 0..99 {
            assert!(spawner.tick(&mut rng, &tuning).is_none());
        }
        assert!(spawner.tick(&mut rng, &tuning).is_some());
        assert_eq!(spawner.timer, 0);

        let spawned = (0..1000)
            .filter(|_| spawner.tick(&mut rng, &tuning).is_some())
            .count();
        assert_eq!(spawned, 10);
    }

    #[test]
    fn test_interval_of_one_spawns_every_tick() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(2);
        let mut spawner = Spawner::new(1);
        assert!(spawner.tick(&mut rng, &tuning).is_some());
        assert!(spawner.tick(&mut rng, &tuning).is_some());
    }

    #[test]
    fn test_spawn_within_bounds() {
        let tuning = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(3);

        for _ in 0..500 {
            let opponent = spawn_opponent(&mut rng, &tuning);
            assert!(opponent.pos.x >= tuning.road_left());
            assert!(opponent.pos.x <= tuning.road_right() - tuning.opponent_width);
            assert!(opponent.speed >= 2.5 && opponent.speed < 5.5);
            assert_eq!(opponent.pos.y, -50.0);
        }
    }

    #[test]
    fn test_spawn_on_road_as_wide_as_car() {
        let tuning = Tuning {
            canvas_width: 60.0,
            ..Tuning::default()
        };
        let mut rng = Pcg32::seed_from_u64(4);
        let opponent = spawn_opponent(&mut rng, &tuning);
        assert_eq!(opponent.pos.x, tuning.road_left());
    }

    #[test]
    fn test_same_seed_same_opponents() {
        let tuning = Tuning::default();
        let mut a = Pcg32::seed_from_u64(99);
        let mut b = Pcg32::seed_from_u64(99);
        for _ in 0..10 {
            assert_eq!(
                spawn_opponent(&mut a, &tuning),
                spawn_opponent(&mut b, &tuning)
            );
        }
    }
}

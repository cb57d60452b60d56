//! Game state and core simulation types
//!
//! Everything the tick mutates lives in `GameState`, so a run can be driven
//! and inspected without a browser.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Rect;
use super::spawner::Spawner;
use super::tick::TickInput;
use crate::consts::OPPONENT_COLOR;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Accepting ticks
    Running,
    /// Frozen after a crash, waiting for retry
    GameOver,
}

/// Notable things that happened during a tick
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    /// A new opponent entered the road
    Spawned { x: f32, speed: f32 },
    /// An opponent left the bottom of the screen
    Passed { score: u64 },
    /// The player hit an opponent; emitted once per run
    Crashed { score: u64 },
}

/// The player's car
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Horizontal pixels per tick
    pub speed: f32,
}

impl Player {
    pub fn new(tuning: &Tuning) -> Self {
        let (x, y) = tuning.player_start();
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(tuning.player_width, tuning.player_height),
            speed: tuning.player_speed,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Apply held direction keys. Both held cancel out.
    pub fn steer(&mut self, input: &TickInput) {
        if input.left {
            self.pos.x -= self.speed;
        }
        if input.right {
            self.pos.x += self.speed;
        }
    }

    /// Keep the car on the road. The lower bound is applied first, so the
    /// upper bound wins if the road is narrower than the car.
    pub fn clamp_to_road(&mut self, road_left: f32, road_right: f32) {
        self.pos.x = self.pos.x.max(road_left);
        self.pos.x = self.pos.x.min(road_right - self.size.x);
    }

    /// Move back to the start position
    pub fn reset(&mut self, tuning: &Tuning) {
        let (x, y) = tuning.player_start();
        self.pos = Vec2::new(x, y);
    }
}

/// An oncoming car
#[derive(Debug, Clone, PartialEq)]
pub struct Opponent {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
    /// Downward pixels per tick
    pub speed: f32,
    pub color: [f32; 4],
}

impl Opponent {
    pub fn new(x: f32, y: f32, speed: f32, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(tuning.opponent_width, tuning.opponent_height),
            speed,
            color: OPPONENT_COLOR,
        }
    }

    pub fn with_color(mut self, color: [f32; 4]) -> Self {
        self.color = color;
        self
    }

    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }

    /// Move down by `speed`. Returns true once the top edge is below the canvas.
    pub fn advance(&mut self, canvas_height: f32) -> bool {
        self.pos.y += self.speed;
        self.pos.y > canvas_height
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        self.rect().overlaps(&player.rect())
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Balance and layout this run was started with
    pub tuning: Tuning,
    /// Run seed for reproducibility
    pub seed: u64,
    /// Placement/speed RNG, reseeded on reset
    pub(crate) rng: Pcg32,
    pub player: Player,
    /// Active opponents in spawn order
    pub opponents: Vec<Opponent>,
    pub score: u64,
    pub spawner: Spawner,
    pub phase: GamePhase,
    /// Ticks simulated since the last reset
    pub time_ticks: u64,
}

impl GameState {
    /// Create a new game state with the given tuning and seed
    pub fn new(tuning: Tuning, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            player: Player::new(&tuning),
            opponents: Vec::new(),
            score: 0,
            spawner: Spawner::new(tuning.spawn_interval),
            phase: GamePhase::Running,
            time_ticks: 0,
            tuning,
        }
    }

    /// Start a fresh run, whatever the current phase
    pub fn reset(&mut self, seed: u64) {
        self.seed = seed;
        self.rng = Pcg32::seed_from_u64(seed);
        self.player.reset(&self.tuning);
        self.opponents.clear();
        self.score = 0;
        self.spawner.reset();
        self.phase = GamePhase::Running;
        self.time_ticks = 0;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_player_starts_centered_near_bottom() {
        let player = Player::new(&Tuning::default());
        assert_eq!(player.pos, Vec2::new(185.0, 530.0));
        assert_eq!(player.size, Vec2::new(30.0, 50.0));
        assert_eq!(player.speed, 5.0);
    }

    #[test]
    fn test_steer_both_directions_cancel() {
        let mut player = Player::new(&Tuning::default());
        let start = player.pos.x;
        player.steer(&TickInput {
            left: true,
            right: true,
        });
        assert_eq!(player.pos.x, start);

        player.steer(&TickInput {
            left: true,
            right: false,
        });
        assert_eq!(player.pos.x, start - 5.0);
    }

    #[test]
    fn test_clamp_upper_bound_wins_on_narrow_road() {
        let mut player = Player::new(&Tuning::default());
        player.size.x = 60.0;
        player.pos.x = 0.0;
        // Road is 40 wide, car is 60 wide
        player.clamp_to_road(100.0, 140.0);
        assert_eq!(player.pos.x, 80.0);
    }

    #[test]
    fn test_opponent_advance() {
        let tuning = Tuning::default();
        let mut opponent = Opponent::new(150.0, 590.0, 4.0, &tuning);
        assert!(!opponent.advance(600.0));
        assert_eq!(opponent.pos.y, 594.0);

        opponent.speed = 6.0;
        // Exactly at the edge is still on screen
        assert!(!opponent.advance(600.0));
        assert!(opponent.advance(600.0));
        assert_eq!(opponent.pos.y, 606.0);
    }

    #[test]
    fn test_opponent_collides_with_player() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.pos = Vec2::new(100.0, 100.0);

        let hit = Opponent::new(110.0, 120.0, 3.0, &tuning);
        assert!(hit.collides_with(&player));

        let miss = Opponent::new(200.0, 100.0, 3.0, &tuning);
        assert!(!miss.collides_with(&player));
    }

    #[test]
    fn test_opponent_default_color() {
        let opponent = Opponent::new(0.0, 0.0, 1.0, &Tuning::default());
        assert_eq!(opponent.color, OPPONENT_COLOR);
        let opponent = opponent.with_color([0.0, 1.0, 0.0, 1.0]);
        assert_eq!(opponent.color, [0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_reset_from_any_state() {
        let tuning = Tuning::default();
        let mut state = GameState::new(tuning.clone(), 7);
        state.player.pos.x = 110.0;
        state.opponents.push(Opponent::new(150.0, 10.0, 3.0, &tuning));
        state.score = 90;
        state.spawner.timer = 42;
        state.phase = GamePhase::GameOver;
        state.time_ticks = 1234;

        state.reset(8);

        assert!(state.opponents.is_empty());
        assert_eq!(state.score, 0);
        assert_eq!(state.spawner.timer, 0);
        assert_eq!(state.phase, GamePhase::Running);
        assert_eq!(state.player.pos, Vec2::new(185.0, 530.0));
        assert_eq!(state.time_ticks, 0);
        assert_eq!(state.seed, 8);
    }

    proptest! {
        #[test]
        fn advance_adds_speed(y in -100.0f32..700.0, speed in 0.0f32..10.0) {
            let mut opponent = Opponent::new(150.0, y, speed, &Tuning::default());
            let off_screen = opponent.advance(600.0);
            prop_assert_eq!(opponent.pos.y, y + speed);
            prop_assert_eq!(off_screen, y + speed > 600.0);
        }

        #[test]
        fn clamp_keeps_player_on_road(x in -100_000.0f32..100_000.0) {
            let tuning = Tuning::default();
            let mut player = Player::new(&tuning);
            player.pos.x = x;
            player.clamp_to_road(tuning.road_left(), tuning.road_right());
            prop_assert!(player.pos.x >= tuning.road_left());
            prop_assert!(player.pos.x <= tuning.road_right() - player.size.x);
        }
    }
}

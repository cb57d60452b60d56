//! Scene projection: game state to draw calls
//!
//! Pure read of the state. Draw order matches the on-screen layering:
//! road, opponents, player, score, then the game-over overlay.

use glam::Vec2;

use super::vertex::colors;
use super::{Surface, TextAlign, TextStyle};
use crate::sim::{GameState, Opponent, Rect};

/// Width of the road boundary lines
pub const ROAD_EDGE_WIDTH: f32 = 5.0;
/// Baseline position of the running score
pub const SCORE_POS: Vec2 = Vec2::new(10.0, 30.0);

const SCORE_STYLE: TextStyle = TextStyle {
    size_px: 20.0,
    align: TextAlign::Left,
    color: colors::SCORE_TEXT,
};
const TITLE_STYLE: TextStyle = TextStyle {
    size_px: 40.0,
    align: TextAlign::Center,
    color: colors::OVERLAY_TEXT,
};
const FINAL_SCORE_STYLE: TextStyle = TextStyle {
    size_px: 20.0,
    align: TextAlign::Center,
    color: colors::OVERLAY_TEXT,
};

impl Opponent {
    /// Paint this car as a filled rectangle in its own color
    pub fn draw<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.fill_rect(self.rect(), self.color);
    }
}

/// Draw one frame of the game
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let tuning = &state.tuning;
    let (width, height) = (tuning.canvas_width, tuning.canvas_height);
    let (road_left, road_right) = (tuning.road_left(), tuning.road_right());

    surface.clear(width, height);

    // Road and its edges
    surface.fill_rect(
        Rect::new(road_left, 0.0, tuning.road_width(), height),
        colors::ROAD,
    );
    for x in [road_left, road_right] {
        surface.stroke_line(
            Vec2::new(x, 0.0),
            Vec2::new(x, height),
            ROAD_EDGE_WIDTH,
            colors::ROAD_EDGE,
        );
    }

    for opponent in &state.opponents {
        opponent.draw(surface);
    }

    surface.fill_rect(state.player.rect(), colors::PLAYER);

    surface.fill_text(&format!("Score: {}", state.score), SCORE_POS, SCORE_STYLE);

    if !state.is_running() {
        surface.fill_rect(Rect::new(0.0, 0.0, width, height), colors::OVERLAY);

        let center = Vec2::new(width / 2.0, height / 2.0);
        surface.fill_text("GAME OVER", center - Vec2::new(0.0, 40.0), TITLE_STYLE);
        surface.fill_text(
            &format!("Final Score: {}", state.score),
            center,
            FINAL_SCORE_STYLE,
        );
    }
}

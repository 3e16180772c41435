//! Render requests
//!
//! A snapshot of everything the display needs for one frame. Renderers draw it
//! in order: clear, cup, balls, score text, then present.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::collision::CupRect;
use super::state::{GameState, Rgb};
use crate::config::GameConfig;

/// A ball as the display sees it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BallSprite {
    pub pos: Vec2,
    pub radius: f32,
    pub color: Rgb,
}

/// One complete frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub background: Rgb,
    pub cup: CupRect,
    pub cup_color: Rgb,
    pub balls: Vec<BallSprite>,
    pub score: u32,
    pub score_text: String,
    pub text_color: Rgb,
}

impl RenderRequest {
    /// Capture the current state for drawing
    pub fn capture(state: &GameState, config: &GameConfig) -> Self {
        Self {
            background: config.background,
            cup: cup_rect(state, config),
            cup_color: config.cup_color,
            balls: state
                .balls
                .iter()
                .map(|b| BallSprite {
                    pos: b.pos,
                    radius: b.radius,
                    color: b.color,
                })
                .collect(),
            score: state.score,
            score_text: score_label(state.score),
            text_color: config.text_color,
        }
    }
}

/// The cup's rectangle at its current position
pub fn cup_rect(state: &GameState, config: &GameConfig) -> CupRect {
    CupRect::new(
        state.cup_position as f32,
        state.cup_y() as f32,
        config.cup_width as f32,
        config.cup_height as f32,
    )
}

/// Score text as shown in the top-left corner
pub fn score_label(score: u32) -> String {
    format!("SCORE: {:03}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_label_pads() {
        assert_eq!(score_label(0), "SCORE: 000");
        assert_eq!(score_label(42), "SCORE: 042");
        assert_eq!(score_label(1234), "SCORE: 1234");
    }

    #[test]
    fn test_capture_copies_balls_in_order() {
        let config = GameConfig::default();
        let mut state = GameState::new(&config, 0);
        state.push_ball(Vec2::new(50.0, 10.0), 10.0, Rgb(0, 255, 0));
        state.push_ball(Vec2::new(60.0, 20.0), 10.0, Rgb(0, 255, 0));
        state.score = 3;

        let frame = RenderRequest::capture(&state, &config);
        assert_eq!(frame.balls.len(), 2);
        assert_eq!(frame.balls[0].pos, Vec2::new(50.0, 10.0));
        assert_eq!(frame.balls[1].pos, Vec2::new(60.0, 20.0));
        assert_eq!(frame.cup, CupRect::new(120.0, 220.0, 30.0, 20.0));
        assert_eq!(frame.score_text, "SCORE: 003");
        assert_eq!(frame.background, Rgb(40, 40, 40));
    }
}

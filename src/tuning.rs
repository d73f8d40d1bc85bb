//! Data-driven design constants
//!
//! Every number the simulation uses lives here so a host can load a JSON
//! file instead of recompiling. Missing fields fall back to the defaults in
//! [`crate::consts`].

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Errors from loading or validating a tuning file
#[derive(Debug, thiserror::Error)]
pub enum TuningError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid tuning value `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

/// Simulation constants for one session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    pub arena_width: f32,
    pub arena_height: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,

    pub ball_radius: f32,
    /// Launch velocity (pixels/tick)
    pub ball_start_velocity: Vec2,
    /// Launch height above the floor
    pub ball_start_lift: f32,

    /// Lateral spin factor on paddle contact
    pub paddle_english: f32,

    pub brick_rows: usize,
    pub brick_cols: usize,
    pub brick_height: f32,
    pub brick_padding: f32,
    pub brick_top_offset: f32,

    pub points_per_brick: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: ARENA_WIDTH,
            arena_height: ARENA_HEIGHT,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            ball_radius: BALL_RADIUS,
            ball_start_velocity: Vec2::new(BALL_START_DX, BALL_START_DY),
            ball_start_lift: BALL_START_LIFT,
            paddle_english: PADDLE_ENGLISH,
            brick_rows: BRICK_ROWS,
            brick_cols: BRICK_COLS,
            brick_height: BRICK_HEIGHT,
            brick_padding: BRICK_PADDING,
            brick_top_offset: BRICK_TOP_OFFSET,
            points_per_brick: POINTS_PER_BRICK,
        }
    }
}

impl Tuning {
    /// Parse and validate tuning from a JSON document
    pub fn from_json(json: &str) -> Result<Self, TuningError> {
        let tuning: Tuning = serde_json::from_str(json)?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load and validate tuning from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, TuningError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let tuning = Self::from_json(&json)?;
        log::info!("Loaded tuning from {}", path.display());
        Ok(tuning)
    }

    /// Width of a single brick: equal division with padding on both ends
    pub fn brick_width(&self) -> f32 {
        let cols = self.brick_cols as f32;
        (self.arena_width - (cols + 1.0) * self.brick_padding) / cols
    }

    /// Rightmost legal paddle position (left edge)
    #[inline]
    pub fn paddle_max_x(&self) -> f32 {
        self.arena_width - self.paddle_width
    }

    /// Reject values the simulation cannot run with
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width),
            ("arena_height", self.arena_height),
            ("paddle_width", self.paddle_width),
            ("paddle_height", self.paddle_height),
            ("ball_radius", self.ball_radius),
            ("brick_height", self.brick_height),
        ];
        for (field, value) in positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(field, format!("must be a positive number, got {value}")));
            }
        }

        let non_negative = [
            ("ball_start_lift", self.ball_start_lift),
            ("brick_padding", self.brick_padding),
            ("brick_top_offset", self.brick_top_offset),
        ];
        for (field, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(invalid(field, format!("must be zero or positive, got {value}")));
            }
        }

        if !self.ball_start_velocity.is_finite() {
            return Err(invalid("ball_start_velocity", "must be finite".to_string()));
        }
        if !self.paddle_english.is_finite() {
            return Err(invalid("paddle_english", "must be finite".to_string()));
        }
        if self.brick_rows == 0 {
            return Err(invalid("brick_rows", "must be at least 1".to_string()));
        }
        if self.brick_cols == 0 {
            return Err(invalid("brick_cols", "must be at least 1".to_string()));
        }
        if self.paddle_width > self.arena_width {
            return Err(invalid(
                "paddle_width",
                format!("{} exceeds arena width {}", self.paddle_width, self.arena_width),
            ));
        }
        // Clearing the whole grid must fit in the u32 score
        let max_score = self
            .brick_rows
            .checked_mul(self.brick_cols)
            .and_then(|bricks| u32::try_from(bricks).ok())
            .and_then(|bricks| bricks.checked_mul(self.points_per_brick));
        if max_score.is_none() {
            return Err(invalid(
                "points_per_brick",
                format!(
                    "{} points across {}x{} bricks overflows the score",
                    self.points_per_brick, self.brick_rows, self.brick_cols
                ),
            ));
        }
        if self.brick_width() <= 0.0 {
            return Err(invalid(
                "brick_padding",
                format!(
                    "{} columns with padding {} leave no room for bricks",
                    self.brick_cols, self.brick_padding
                ),
            ));
        }
        Ok(())
    }
}

fn invalid(field: &'static str, reason: String) -> TuningError {
    TuningError::Invalid { field, reason }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let tuning = Tuning::default();
        assert!(tuning.validate().is_ok());
        // (800 - 9 * 10) / 8
        assert!((tuning.brick_width() - 88.75).abs() < 0.001);
        assert_eq!(tuning.paddle_max_x(), 700.0);
    }

    #[test]
    fn test_partial_json_falls_back_to_defaults() {
        let tuning = Tuning::from_json(r#"{ "brick_rows": 3, "paddle_width": 120.0 }"#).unwrap();
        assert_eq!(tuning.brick_rows, 3);
        assert_eq!(tuning.paddle_width, 120.0);
        assert_eq!(tuning.arena_width, ARENA_WIDTH);
        assert_eq!(tuning.brick_cols, BRICK_COLS);
    }

    #[test]
    fn test_rejects_paddle_wider_than_arena() {
        let err = Tuning::from_json(r#"{ "paddle_width": 900.0 }"#).unwrap_err();
        assert!(matches!(
            err,
            TuningError::Invalid {
                field: "paddle_width",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_zero_columns() {
        let err = Tuning::from_json(r#"{ "brick_cols": 0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "brick_cols", .. }));
    }

    #[test]
    fn test_rejects_overpadded_grid() {
        let err = Tuning::from_json(r#"{ "brick_padding": 100.0 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "brick_padding", .. }));
    }

    #[test]
    fn test_rejects_score_overflow() {
        let err = Tuning::from_json(r#"{ "points_per_brick": 4294967295 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "points_per_brick", .. }));

        // 40 bricks * 107374182 = 4294967280 still fits
        assert!(Tuning::from_json(r#"{ "points_per_brick": 107374182 }"#).is_ok());
        let err = Tuning::from_json(r#"{ "points_per_brick": 107374183 }"#).unwrap_err();
        assert!(matches!(err, TuningError::Invalid { field: "points_per_brick", .. }));
    }

    #[test]
    fn test_malformed_json() {
        let err = Tuning::from_json("{ not json").unwrap_err();
        assert!(matches!(err, TuningError::Json(_)));
        assert!(err.to_string().starts_with("JSON error"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Tuning::load("/definitely/not/here/tuning.json").unwrap_err();
        assert!(matches!(err, TuningError::Io(_)));
    }
}

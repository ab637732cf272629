//! JSON configuration for a board and the panel showing it.
//!
//! ```
//! use dot_matrix::config::DisplayConfig;
//!
//! let config = DisplayConfig::from_json(r#"{
//!     "board": { "letter_spacing": 2, "padding": [1, 0] },
//!     "panel": { "viewport_width": 24, "interval_ms": 80 }
//! }"#).unwrap();
//! let board = config.board.build().unwrap();
//! assert_eq!(board.letter_spacing(), 2);
//! ```

use std::time::Duration;

use dot_matrix_core::{Board, Frame, Panel, Result, Scroll, SideScroll, VerticalScroll};
use serde::{Deserialize, Serialize};

use crate::{CoreError, Error};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub board: BoardConfig,
    pub panel: PanelConfig,
}

impl DisplayConfig {
    pub fn from_json(json: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Spacing and padding of a [Board].
///
/// Values are signed so that a bad configuration is reported by
/// [BoardConfig::build] rather than by the JSON parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub letter_spacing: i64,
    /// `[all]`, `[vertical, horizontal]` or `[top, right, bottom, left]`.
    pub padding: Vec<i64>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            letter_spacing: 1,
            padding: vec![0],
        }
    }
}

impl BoardConfig {
    /// An empty board with the configured spacing and padding.
    pub fn build<'d>(&self) -> Result<Board<'d>> {
        Board::try_with_spacing(self.letter_spacing, &self.padding)
    }
}

/// The axis a panel scrolls along.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Horizontal,
    Vertical,
}

impl Scroll for Direction {
    fn frame_size(&self, board: &Board<'_>, viewport: usize) -> (usize, usize) {
        match self {
            Direction::Horizontal => SideScroll.frame_size(board, viewport),
            Direction::Vertical => VerticalScroll.frame_size(board, viewport),
        }
    }

    fn index_upper_bound(&self, board: &Board<'_>) -> Result<usize> {
        match self {
            Direction::Horizontal => SideScroll.index_upper_bound(board),
            Direction::Vertical => VerticalScroll.index_upper_bound(board),
        }
    }

    fn generate_display(
        &self,
        board: &Board<'_>,
        offset: usize,
        frame: &mut Frame,
    ) -> Result<()> {
        match self {
            Direction::Horizontal => SideScroll.generate_display(board, offset, frame),
            Direction::Vertical => VerticalScroll.generate_display(board, offset, frame),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Columns shown by a horizontal panel, rows by a vertical one.
    pub viewport_width: i64,
    pub interval_ms: u64,
    pub direction: Direction,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            viewport_width: 32,
            interval_ms: 100,
            direction: Direction::Horizontal,
        }
    }
}

impl PanelConfig {
    pub fn viewport(&self) -> Result<usize> {
        match usize::try_from(self.viewport_width) {
            Ok(viewport) if viewport > 0 => Ok(viewport),
            _ => Err(CoreError::InvalidConfig(format!(
                "viewport width must be positive ({})",
                self.viewport_width
            ))),
        }
    }

    /// The time between two ticks.
    pub fn interval(&self) -> Result<Duration> {
        if self.interval_ms == 0 {
            return Err(CoreError::InvalidConfig(
                "tick interval must be at least 1ms".to_string(),
            ));
        }
        Ok(Duration::from_millis(self.interval_ms))
    }

    /// A stopped panel over `board` scrolling in the configured direction.
    pub fn build<'a, 'd>(&self, board: &'a Board<'d>) -> Result<Panel<'a, 'd, Direction>> {
        Panel::new(board, self.direction, self.viewport()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_use_defaults() {
        let config = DisplayConfig::from_json("{}").unwrap();
        assert_eq!(config, DisplayConfig::default());

        let board = config.board.build().unwrap();
        assert_eq!(board.letter_spacing(), 1);
        assert_eq!(board.padding(), dot_matrix_core::Padding::default());
        assert_eq!(config.panel.interval().unwrap(), Duration::from_millis(100));
    }

    #[test]
    fn rejects_negative_and_empty_settings() {
        let config = DisplayConfig::from_json(
            r#"{ "board": { "letter_spacing": -1 }, "panel": { "viewport_width": 0, "interval_ms": 0 } }"#,
        )
        .unwrap();

        assert!(matches!(config.board.build(), Err(CoreError::InvalidConfig(_))));
        assert!(matches!(config.panel.viewport(), Err(CoreError::InvalidConfig(_))));
        assert!(matches!(config.panel.interval(), Err(CoreError::InvalidConfig(_))));

        let padding = BoardConfig {
            letter_spacing: 0,
            padding: vec![1, 2, 3],
        };
        assert!(padding.build().is_err());
    }

    #[test]
    fn rejects_settings_too_large_for_the_board() {
        let config = DisplayConfig::from_json(
            r#"{ "board": { "letter_spacing": 9223372036854775807, "padding": [9223372036854775807] } }"#,
        )
        .unwrap();
        assert!(matches!(config.board.build(), Err(CoreError::InvalidConfig(_))));

        let padding = BoardConfig {
            letter_spacing: 1,
            padding: vec![0, crate::MAX_CONFIGURED_CELLS as i64 + 1],
        };
        assert!(matches!(padding.build(), Err(CoreError::InvalidConfig(_))));
    }

    #[test]
    fn reports_malformed_json() {
        assert!(matches!(
            DisplayConfig::from_json(r#"{ "board": { "padding": "wide" } }"#),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn vertical_direction_builds_a_vertical_panel() {
        let config = DisplayConfig::from_json(
            r#"{ "panel": { "viewport_width": 4, "direction": "vertical" } }"#,
        )
        .unwrap();
        let characters = dot_matrix_alphabet::dictionary().unwrap();
        let mut board = config.board.build().unwrap();
        board.load("ab", &characters).unwrap();

        let panel = config.panel.build(&board).unwrap();
        assert_eq!(panel.frame().rows(), 4);
        assert_eq!(panel.frame().columns(), board.width());
    }
}

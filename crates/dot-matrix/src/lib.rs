//! `dot-matrix` is a library for turning text into a scrolling banner on an
//! LED-style dot-matrix display.
//!
//! Text is looked up in a [CharacterDictionary] (the built-in alphabet from
//! [dot_matrix_alphabet], glyphs loaded with [load_alphabet], or your own),
//! laid out on a [Board] and sampled by a [Panel] that moves a fixed-size
//! viewport across it. Each frame goes to a [Renderer]: the bundled
//! [AsciiRenderer] and [SvgRenderer], or any `FnMut(&Frame)`.
//!
//! ```
//! use dot_matrix::{Board, Padding, Panel, alphabet};
//!
//! let dictionary = alphabet::dictionary().unwrap();
//! let mut board = Board::new(1, Padding::uniform(1));
//! board.load("Hi [heart]", &dictionary).unwrap();
//!
//! let mut panel = Panel::side_scrolling(&board, 16).unwrap();
//! panel.play();
//! panel.tick(&mut |frame: &dot_matrix::Frame| assert_eq!(frame.columns(), 16)).unwrap();
//! ```
//!
//! Animation on a timer is provided by [animate], driven by tokio.

mod animate;
pub mod config;
mod error;
mod render;

pub use animate::animate;
pub use dot_matrix_alphabet as alphabet;
pub use dot_matrix_core::{
    AlphabetSchema, Bit, BitArray, Board, Character, CharacterDictionary, CharacterSchema,
    Command, ESCAPE_MARKER, Frame, MAX_CONFIGURED_CELLS, Malformed, Padding, Panel, Renderer, RunState, Scroll,
    SideScroll, SideScrollingPanel, VerticalScroll, VerticalScrollingPanel,
};
pub use error::{CoreError, Error};
pub use render::ascii::{AsciiRenderer, frame_to_ascii};
#[cfg(feature = "svg")]
pub use render::svg::{SvgRenderer, SvgStyle, frame_to_svg};

/// Parse glyph data in the JSON alphabet schema into [Character]s.
///
/// ```
/// let json = r#"{ "height": 1, "characters": [
///     { "patterns": ["*"], "output": [1, 0, 1], "width": 3 }
/// ] }"#;
/// let characters = dot_matrix::load_alphabet(json).unwrap();
/// assert_eq!(characters[0].width(), 3);
/// ```
pub fn load_alphabet(json: &str) -> Result<Vec<Character>, Error> {
    let schema: AlphabetSchema = serde_json::from_str(json)?;
    let characters = schema.into_characters()?;
    tracing::debug!(glyphs = characters.len(), "loaded alphabet");
    Ok(characters)
}

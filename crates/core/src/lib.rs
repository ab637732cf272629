#![no_std]

//! `dot-matrix-core` provides the layout and animation primitives for the
//! `dot-matrix` crate.
//!
//! Text is resolved against a [CharacterDictionary] into a sequence of
//! [Character] glyphs, composed by a [Board] into one addressable bit
//! surface, and sampled by a [Panel] into successive [Frame]s which are
//! handed to a [Renderer].
//!
//! ```
//! use dot_matrix_core::{BitArray, Board, Character, CharacterDictionary, Padding};
//!
//! let bar = Character::new(["i", "I"], BitArray::try_from(&[1u8, 1, 1][..]).unwrap(), 1).unwrap();
//! let dictionary = CharacterDictionary::new([vec![bar]]);
//!
//! let mut board = Board::new(1, Padding::uniform(1));
//! board.load("ii", &dictionary).unwrap();
//! assert_eq!(board.width(), 5);
//! assert_eq!(board.height(), 5);
//! ```

extern crate alloc;
#[cfg(test)]
extern crate std;

mod bit_array;
mod board;
mod character;
mod dictionary;
mod error;
mod frame;
mod panel;
#[cfg(feature = "serde")]
mod schema;

pub use bit_array::{Bit, BitArray};
pub use board::{Board, ESCAPE_MARKER, MAX_CONFIGURED_CELLS, Padding};
pub use character::Character;
pub use dictionary::CharacterDictionary;
pub use error::{Error, Malformed, Result};
pub use frame::{Frame, Renderer};
pub use panel::{
    Command, Panel, RunState, Scroll, SideScroll, SideScrollingPanel, VerticalScroll,
    VerticalScrollingPanel,
};
#[cfg(feature = "serde")]
pub use schema::{AlphabetSchema, CharacterSchema};

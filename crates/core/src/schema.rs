//! Serde definitions for glyph data kept outside the binary.

use alloc::{string::String, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::{BitArray, Character, Error, Result};

/// A set of glyphs sharing one height.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlphabetSchema {
    pub height: usize,
    pub characters: Vec<CharacterSchema>,
}

/// One glyph: its patterns, `height * width` row-major pixels and width.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterSchema {
    pub patterns: Vec<String>,
    pub output: Vec<u8>,
    pub width: usize,
}

impl AlphabetSchema {
    /// Validate every glyph against the declared height and build them.
    pub fn into_characters(self) -> Result<Vec<Character>> {
        let height = self.height;
        self.characters
            .into_iter()
            .map(|character| {
                let expected = height.checked_mul(character.width);
                if expected != Some(character.output.len()) {
                    return Err(Error::InvalidGlyph {
                        len: character.output.len(),
                        width: character.width,
                    });
                }
                let bitmap = BitArray::try_from(&character.output[..])?;
                Character::new(character.patterns, bitmap, character.width)
            })
            .collect()
    }
}

impl From<&Character> for CharacterSchema {
    fn from(character: &Character) -> Self {
        Self {
            patterns: character.patterns().to_vec(),
            output: character.bitmap().iter().collect(),
            width: character.width(),
        }
    }
}

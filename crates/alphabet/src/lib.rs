#![no_std]

//! `dot-matrix-alphabet` provides the built-in glyph set for the
//! `dot-matrix` crate.
//!
//! Every glyph is [HEIGHT] pixels tall. Letters answer to both their lower and
//! upper case pattern, and a few symbols are available as bracketed patterns
//! such as `[heart]` and `[smiley]`.

extern crate alloc;

use alloc::vec::Vec;
use dot_matrix_core::{BitArray, Character, CharacterDictionary, Result};

struct GlyphData {
    patterns: &'static [&'static str],
    width: usize,
    bits: &'static [u8],
}

include!(concat!(env!("OUT_DIR"), "/alphabet.rs"));

/// Build owned [Character]s for every glyph of the built-in alphabet.
pub fn characters() -> Result<Vec<Character>> {
    ALPHABET
        .iter()
        .map(|glyph| {
            let bitmap = BitArray::try_from(glyph.bits)?;
            Character::new(glyph.patterns.iter().copied(), bitmap, glyph.width)
        })
        .collect()
}

/// A dictionary holding the built-in alphabet as its only group.
pub fn dictionary() -> Result<CharacterDictionary> {
    Ok(CharacterDictionary::new([characters()?]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_glyph_has_the_alphabet_height() {
        let characters = characters().unwrap();
        assert_eq!(characters.len(), ALPHABET.len());
        assert!(characters.iter().all(|c| c.height() == HEIGHT));
    }

    #[test]
    fn letters_answer_to_both_cases() {
        let dictionary = dictionary().unwrap();
        for (lower, upper) in ('a'..='z').zip('A'..='Z') {
            let lower = dictionary.find(lower.encode_utf8(&mut [0; 4])).unwrap();
            let upper = dictionary.find(upper.encode_utf8(&mut [0; 4])).unwrap();
            assert!(core::ptr::eq(lower, upper));
        }
    }

    #[test]
    fn covers_digits_punctuation_and_symbols() {
        let dictionary = dictionary().unwrap();
        for token in [
            "0", "9", " ", ".", ",", "!", "?", "-", ":", "'", "/", "(", ")", "[", "]", "~",
            "[heart]", "[smiley]", "[:)]",
        ] {
            assert!(dictionary.find(token).is_ok(), "missing {token:?}");
        }
        assert_eq!(dictionary.find("[heart]").unwrap().width(), 7);
    }
}

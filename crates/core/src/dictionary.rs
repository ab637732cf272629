use alloc::{string::ToString, vec::Vec};

use crate::{Character, Error, Result};

/// An ordered collection of glyph groups.
///
/// Lookup scans the groups in the order they were supplied, and each group in
/// order, returning the first glyph that declares the token. An earlier group
/// therefore takes precedence over a later one for the same pattern, and a
/// later group can only fill in patterns the earlier ones lack.
#[derive(Debug, Clone, Default)]
pub struct CharacterDictionary {
    groups: Vec<Vec<Character>>,
}

impl CharacterDictionary {
    pub fn new<I>(groups: I) -> Self
    where
        I: IntoIterator<Item = Vec<Character>>,
    {
        Self {
            groups: groups.into_iter().collect(),
        }
    }

    /// Append a group with the lowest precedence.
    pub fn push_group(&mut self, group: Vec<Character>) {
        self.groups.push(group);
    }

    pub fn groups(&self) -> &[Vec<Character>] {
        &self.groups
    }

    /// Resolve a token to the first glyph declaring it as a pattern.
    pub fn find(&self, token: &str) -> Result<&Character> {
        self.groups
            .iter()
            .flatten()
            .find(|character| character.matches(token))
            .ok_or_else(|| Error::GlyphNotFound(token.to_string()))
    }
}

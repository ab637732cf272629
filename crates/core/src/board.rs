use alloc::{
    format,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use crate::{Bit, Character, CharacterDictionary, Error, Malformed, Result};

/// Marker that makes the following character a literal single-character token.
pub const ESCAPE_MARKER: char = '~';

/// Largest spacing or padding accepted from configuration, which keeps the
/// board geometry sums far from overflowing.
pub const MAX_CONFIGURED_CELLS: usize = u16::MAX as usize;

const BRACKET_OPEN: char = '[';
const BRACKET_CLOSE: char = ']';

/// Blank space around the glyphs of a [Board], in pixels.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub struct Padding {
    pub top: usize,
    pub right: usize,
    pub bottom: usize,
    pub left: usize,
}

impl Padding {
    pub const fn new(top: usize, right: usize, bottom: usize, left: usize) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// The same padding on all four sides.
    pub const fn uniform(all: usize) -> Self {
        Self::new(all, all, all, all)
    }

    pub const fn symmetric(vertical: usize, horizontal: usize) -> Self {
        Self::new(vertical, horizontal, vertical, horizontal)
    }

    pub const fn horizontal(&self) -> usize {
        self.left + self.right
    }

    pub const fn vertical(&self) -> usize {
        self.top + self.bottom
    }
}

/// Accepts the one, two or four value forms: `[all]`, `[vertical, horizontal]`
/// or `[top, right, bottom, left]`.
impl TryFrom<&[i64]> for Padding {
    type Error = Error;

    fn try_from(values: &[i64]) -> Result<Self> {
        let mut sides = [0usize; 4];
        for (side, &value) in sides.iter_mut().zip(values) {
            *side = configured_cells("padding", value)?;
        }

        match values.len() {
            1 => Ok(Self::uniform(sides[0])),
            2 => Ok(Self::symmetric(sides[0], sides[1])),
            4 => Ok(Self::new(sides[0], sides[1], sides[2], sides[3])),
            len => Err(Error::InvalidConfig(format!(
                "padding takes 1, 2 or 4 values, got {len}"
            ))),
        }
    }
}

/// Lays out a sequence of glyphs into one addressable bit surface.
///
/// The glyphs are borrowed from the [CharacterDictionary] they were resolved
/// against, so reloading a board never copies pixel data. Glyphs shorter than
/// the tallest one are aligned to the top and padded with blank rows below.
///
/// Width and height are recomputed on every call; cache them when sampling
/// in a tight loop.
#[derive(Debug, Clone)]
pub struct Board<'d> {
    characters: Vec<&'d Character>,
    letter_spacing: usize,
    padding: Padding,
    input: String,
}

impl Default for Board<'_> {
    fn default() -> Self {
        Self::new(1, Padding::default())
    }
}

impl<'d> Board<'d> {
    pub fn new(letter_spacing: usize, padding: Padding) -> Self {
        Self {
            characters: Vec::new(),
            letter_spacing,
            padding,
            input: String::new(),
        }
    }

    /// Build a board from signed settings, as read from configuration.
    pub fn try_with_spacing(letter_spacing: i64, padding: &[i64]) -> Result<Self> {
        let letter_spacing = configured_cells("letter spacing", letter_spacing)?;

        Ok(Self::new(letter_spacing, Padding::try_from(padding)?))
    }

    pub fn letter_spacing(&self) -> usize {
        self.letter_spacing
    }

    pub fn set_letter_spacing(&mut self, letter_spacing: usize) {
        self.letter_spacing = letter_spacing;
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    /// The glyphs resolved by the last successful [Board::load].
    pub fn characters(&self) -> &[&'d Character] {
        &self.characters
    }

    /// The input of the last successful [Board::load].
    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn len(&self) -> usize {
        self.characters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.characters.is_empty()
    }

    /// Total width: horizontal padding, the spacing between glyphs and the
    /// glyphs themselves.
    pub fn width(&self) -> usize {
        self.padding.horizontal()
            + self.letter_spacing * self.characters.len().saturating_sub(1)
            + self.characters.iter().map(|c| c.width()).sum::<usize>()
    }

    /// Total height: vertical padding plus the tallest glyph.
    pub fn height(&self) -> usize {
        self.padding.vertical() + self.glyph_height()
    }

    fn glyph_height(&self) -> usize {
        self.characters
            .iter()
            .map(|c| c.height())
            .max()
            .unwrap_or(0)
    }

    /// Tokenize `input`, resolve every token against `dictionary` and replace
    /// the glyphs on the board.
    ///
    /// Tokens are single characters, except that [ESCAPE_MARKER] turns the
    /// character after it into a literal token and an unescaped `[` starts a
    /// token running up to and including the next `]`. On failure the board
    /// keeps its previous glyphs and input.
    pub fn load(&mut self, input: &str, dictionary: &'d CharacterDictionary) -> Result<()> {
        let characters = tokenize(input)
            .and_then(|tokens| {
                tokens
                    .into_iter()
                    .map(|token| dictionary.find(token))
                    .collect::<Result<Vec<_>>>()
            })
            .inspect_err(|error| tracing::warn!(input, %error, "failed to load board"))?;

        tracing::debug!(input, glyphs = characters.len(), "loaded board");
        self.characters = characters;
        self.input = input.to_string();

        Ok(())
    }

    /// The column at `index`, wrapping around the board's width.
    ///
    /// Fails with [Error::OutOfRange] only when the board has no width.
    pub fn get_column_at_index(&self, index: usize) -> Result<Vec<Bit>> {
        let width = self.width();
        if width == 0 {
            return Err(Error::OutOfRange { index, len: 0 });
        }

        let height = self.height();
        let index = index % width;

        if index < self.padding.left || index >= width - self.padding.right {
            return Ok(vec![0; height]);
        }

        let mut start = self.padding.left;
        for character in &self.characters {
            let end = start + character.width();
            if index < end {
                let mut column = Vec::with_capacity(height);
                column.resize(self.padding.top, 0);
                column.extend(character.get_column(index - start)?);
                // bottom padding, plus the shortfall of a short glyph
                column.resize(height, 0);
                return Ok(column);
            }

            start = end + self.letter_spacing;
            if index < start {
                return Ok(vec![0; height]);
            }
        }

        Ok(vec![0; height])
    }

    /// The row at `index`, wrapping around the board's height.
    ///
    /// Fails with [Error::OutOfRange] only when the board has no height.
    pub fn get_row_at_index(&self, index: usize) -> Result<Vec<Bit>> {
        let height = self.height();
        if height == 0 {
            return Err(Error::OutOfRange { index, len: 0 });
        }

        let width = self.width();
        let index = index % height;

        if index < self.padding.top || index >= height - self.padding.bottom {
            return Ok(vec![0; width]);
        }

        let y = index - self.padding.top;
        let mut row = Vec::with_capacity(width);
        row.resize(self.padding.left, 0);

        for (i, character) in self.characters.iter().enumerate() {
            if i > 0 {
                row.resize(row.len() + self.letter_spacing, 0);
            }
            if y < character.height() {
                row.extend(character.get_row(y)?);
            } else {
                row.resize(row.len() + character.width(), 0);
            }
        }

        row.resize(width, 0);
        Ok(row)
    }
}

/// Check a signed configuration value lies in `0..=MAX_CONFIGURED_CELLS`.
fn configured_cells(name: &str, value: i64) -> Result<usize> {
    match usize::try_from(value) {
        Ok(cells) if cells <= MAX_CONFIGURED_CELLS => Ok(cells),
        Ok(_) => Err(Error::InvalidConfig(format!(
            "{name} cannot exceed {MAX_CONFIGURED_CELLS} ({value})"
        ))),
        Err(_) => Err(Error::InvalidConfig(format!(
            "{name} cannot be negative ({value})"
        ))),
    }
}

/// Split `input` into dictionary lookup tokens, borrowing from the input.
fn tokenize(input: &str) -> Result<Vec<&str>> {
    let mut tokens = Vec::new();
    let mut chars = input.char_indices();

    while let Some((start, c)) = chars.next() {
        match c {
            ESCAPE_MARKER => {
                let (position, literal) = chars.next().ok_or(Error::MalformedInput {
                    position: start,
                    kind: Malformed::TrailingEscape,
                })?;
                tokens.push(&input[position..position + literal.len_utf8()]);
            }
            BRACKET_OPEN => {
                let end = chars
                    .by_ref()
                    .find(|&(_, c)| c == BRACKET_CLOSE)
                    .map(|(position, _)| position + BRACKET_CLOSE.len_utf8())
                    .ok_or(Error::MalformedInput {
                        position: start,
                        kind: Malformed::UnclosedBracket,
                    })?;
                tokens.push(&input[start..end]);
            }
            _ => tokens.push(&input[start..start + c.len_utf8()]),
        }
    }

    Ok(tokens)
}

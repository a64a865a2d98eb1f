//! Density palettes
//!
//! A palette is an ordered ramp of glyphs running from the sparsest (drawn for
//! the darkest blocks) to the densest (drawn for the brightest blocks).

use std::fmt;
use std::str::FromStr;

use crate::luma::{LUMA_MAX, scale};

/// Reference ramp, sparsest to densest
pub const DENSITY: &str = " .,-=+:;cba!?0123456789$W#@Ñ";

/// Errors raised when building a [`Palette`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaletteError {
    #[error("palette must contain at least one glyph")]
    Empty,

    #[error("palette glyph at position {position} is a line break")]
    ContainsLineBreak { position: usize },
}

/// An ordered, non-empty ramp of density glyphs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    glyphs: Vec<char>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            glyphs: DENSITY.chars().collect(),
        }
    }
}

impl Palette {
    /// Build a palette from glyphs ordered sparsest to densest
    pub fn new<I>(glyphs: I) -> Result<Self, PaletteError>
    where
        I: IntoIterator<Item = char>,
    {
        let glyphs: Vec<char> = glyphs.into_iter().collect();

        if glyphs.is_empty() {
            return Err(PaletteError::Empty);
        }
        if let Some(position) = glyphs.iter().position(|&c| c == '\n') {
            return Err(PaletteError::ContainsLineBreak { position });
        }

        Ok(Self { glyphs })
    }

    /// Number of glyphs in the ramp
    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    /// Always false: a palette holds at least one glyph
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    /// All glyphs, sparsest first
    pub fn glyphs(&self) -> &[char] {
        &self.glyphs
    }

    /// Glyph at `index`, clamped to the densest glyph
    ///
    /// Indices come from [`Palette::index_for`] or from a caller walking the
    /// ramp directly.
    pub fn glyph(&self, index: usize) -> char {
        self.glyphs[index.min(self.glyphs.len() - 1)]
    }

    /// Palette index for an averaged luma value
    ///
    /// Luma is scaled from the full 16-bit range (not the observed range of
    /// any particular image) onto `0..len`, truncating. With `invert` the
    /// index is mirrored to `len - 1 - index`.
    pub fn index_for(&self, luma: u32, invert: bool) -> usize {
        let last = self.glyphs.len() - 1;
        let index: usize = scale(luma, 0, LUMA_MAX, 0, last);

        if invert { last - index } else { index }
    }

    /// Glyph for an averaged luma value
    pub fn glyph_for(&self, luma: u32, invert: bool) -> char {
        self.glyphs[self.index_for(luma, invert)]
    }

    /// The same glyphs ordered densest to sparsest
    pub fn reversed(&self) -> Self {
        Self {
            glyphs: self.glyphs.iter().rev().copied().collect(),
        }
    }
}

impl FromStr for Palette {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s.chars())
    }
}

impl fmt::Display for Palette {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.glyphs.iter().try_for_each(|c| write!(f, "{c}"))
    }
}

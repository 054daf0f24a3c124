//! Case folding, applied once per name per lookup.

use crate::distance::char_distance;

/// A lower-cased name kept both as text (for containment checks) and as
/// characters (for distance and windowing).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldedName {
    text: String,
    chars: Vec<char>,
}

impl FoldedName {
    pub fn new(raw: &str) -> Self {
        let text = raw.to_lowercase();
        let chars = text.chars().collect();
        Self { text, chars }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Length in characters.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn distance(&self, other: &FoldedName) -> usize {
        char_distance(&self.chars, &other.chars)
    }

    pub fn contains(&self, other: &FoldedName) -> bool {
        self.text.contains(other.text.as_str())
    }

    /// Every contiguous run of `width` characters, sliding by one. Empty when
    /// the name is shorter than `width` or `width` is 0.
    pub fn windows(&self, width: usize) -> impl Iterator<Item = &[char]> {
        let slices = if width == 0 { None } else { Some(self.chars.windows(width)) };
        slices.into_iter().flatten()
    }
}

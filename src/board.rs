//! Playing field and its shortcuts (snakes and ladders).

use crate::error::BoardError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

/// Smallest allowed board width and height.
pub const MIN_DIMENSION: usize = 2;

/// Whether a shortcut moves the player back or forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShortcutKind {
    Snake,
    Ladder,
}

impl fmt::Display for ShortcutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Snake => f.write_str("snake"),
            Self::Ladder => f.write_str("ladder"),
        }
    }
}

/// A directed edge between two cells, written `src-dst` (1-based cells).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Shortcut {
    pub src: usize,
    pub dst: usize,
}

impl Shortcut {
    pub fn new(src: usize, dst: usize) -> Self {
        Self { src, dst }
    }

    /// Snakes lead to a lower cell, ladders to a higher one.
    pub fn kind(&self) -> ShortcutKind {
        if self.src > self.dst {
            ShortcutKind::Snake
        } else {
            ShortcutKind::Ladder
        }
    }

    fn touches(&self, other: &Shortcut) -> bool {
        self.src == other.src
            || self.src == other.dst
            || self.dst == other.src
            || self.dst == other.dst
    }
}

impl fmt::Display for Shortcut {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.src, self.dst)
    }
}

impl FromStr for Shortcut {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || BoardError::InvalidShortcut(s.to_string());
        let (src, dst) = s.trim().split_once('-').ok_or_else(invalid)?;
        let src: usize = src.trim().parse().map_err(|_| invalid())?;
        let dst: usize = dst.trim().parse().map_err(|_| invalid())?;
        if src == 0 || dst == 0 {
            return Err(invalid());
        }
        Ok(Self { src, dst })
    }
}

impl TryFrom<String> for Shortcut {
    type Error = BoardError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Shortcut> for String {
    fn from(shortcut: Shortcut) -> Self {
        shortcut.to_string()
    }
}

/// Board of `cell_count` cells numbered `1..=cell_count`.
///
/// Shortcuts are kept in ascending order of their start cell, which gives
/// every shortcut a stable index used for usage counters and statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cell_count: usize,
    shortcuts: Vec<Shortcut>,
    // start cell -> index into `shortcuts`
    index_of: HashMap<usize, usize>,
}

impl Board {
    /// Build a `width` x `height` board.
    pub fn with_dimensions(
        width: usize,
        height: usize,
        shortcuts: &[Shortcut],
    ) -> Result<Self, BoardError> {
        if width < MIN_DIMENSION || height < MIN_DIMENSION {
            return Err(BoardError::InvalidDimensions { width, height });
        }
        let cell_count = width
            .checked_mul(height)
            .ok_or(BoardError::InvalidDimensions { width, height })?;
        Self::build(cell_count, shortcuts)
    }

    /// Validate `shortcuts` against a board of `cell_count` cells and build the lookup table.
    pub fn build(cell_count: usize, shortcuts: &[Shortcut]) -> Result<Self, BoardError> {
        for (i, shortcut) in shortcuts.iter().enumerate() {
            let in_range = |cell: usize| (1..=cell_count).contains(&cell);
            if !in_range(shortcut.src) || !in_range(shortcut.dst) {
                return Err(BoardError::OutOfRange {
                    shortcut: *shortcut,
                    cell_count,
                });
            }
            if shortcut.src == shortcut.dst {
                return Err(BoardError::SelfLoop(*shortcut));
            }
            if shortcut.src == cell_count || shortcut.dst == cell_count {
                return Err(BoardError::EndsOnLastCell(*shortcut));
            }
            if let Some(other) = shortcuts[..i].iter().find(|o| shortcut.touches(o)) {
                return Err(BoardError::OverlappingShortcut {
                    shortcut: *shortcut,
                    other: *other,
                });
            }
        }

        let mut sorted = shortcuts.to_vec();
        sorted.sort_by_key(|s| s.src);
        let index_of = sorted
            .iter()
            .enumerate()
            .map(|(idx, shortcut)| (shortcut.src, idx))
            .collect();

        Ok(Self {
            cell_count,
            shortcuts: sorted,
            index_of,
        })
    }

    pub fn cell_count(&self) -> usize {
        self.cell_count
    }

    /// All shortcuts in index order.
    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    pub fn shortcut_count(&self) -> usize {
        self.shortcuts.len()
    }

    /// Shortcut starting at `cell`, as `(index, destination)`.
    pub fn shortcut_at(&self, cell: usize) -> Option<(usize, usize)> {
        let idx = *self.index_of.get(&cell)?;
        Some((idx, self.shortcuts[idx].dst))
    }
}

use std::fmt;

/// Declared length of the data a cursor is allowed to read.
///
/// `Unbounded` replaces the old "all bits set" length sentinel, so a real
/// buffer of any size can never be mistaken for an unbounded one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Extent {
    Bounded(usize),
    Unbounded,
}

impl Extent {
    /// The declared byte count, if there is one.
    pub fn limit(self) -> Option<usize> {
        match self {
            Self::Bounded(len) => Some(len),
            Self::Unbounded => None,
        }
    }

    /// `true` when `end` lies within the declared length (`end <= len`).
    /// Always `true` for `Unbounded`.
    pub fn admits_end(self, end: usize) -> bool {
        match self {
            Self::Bounded(len) => end <= len,
            Self::Unbounded => true,
        }
    }

    /// `true` when `target` is a position `seek`/`skip` may land on
    /// (`target < len`). Always `true` for `Unbounded`.
    pub fn admits_position(self, target: usize) -> bool {
        match self {
            Self::Bounded(len) => target < len,
            Self::Unbounded => true,
        }
    }
}

impl fmt::Display for Extent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extent::Bounded(len) => write!(f, "{}", len),
            Extent::Unbounded => write!(f, "unbounded"),
        }
    }
}

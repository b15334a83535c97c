//! The [`Node`] type: one grid cell and its [`Flags`].

use std::ops::{BitAnd, BitOr};

use crate::geom::Point;

// ---------------------------------------------------------------------------
// Flags
// ---------------------------------------------------------------------------

/// Bitmask of per-node state. The bit layout is also the wire encoding of a
/// cell: bit 0 visited, bit 1 wall, bit 2 start, bit 3 end.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Flags(pub u8);

impl Flags {
    pub const NONE: Self = Self(0);
    pub const VISITED: Self = Self(1 << 0);
    pub const WALL: Self = Self(1 << 1);
    pub const START: Self = Self(1 << 2);
    pub const END: Self = Self(1 << 3);

    /// Whether every bit of `other` is set in `self`.
    #[inline]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Set or clear the bits of `other`.
    #[inline]
    pub fn set(&mut self, other: Self, on: bool) {
        if on {
            self.0 |= other.0;
        } else {
            self.0 &= !other.0;
        }
    }
}

impl BitOr for Flags {
    type Output = Self;
    #[inline]
    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitAnd for Flags {
    type Output = Self;
    #[inline]
    fn bitand(self, rhs: Self) -> Self {
        Self(self.0 & rhs.0)
    }
}

// ---------------------------------------------------------------------------
// Node
// ---------------------------------------------------------------------------

/// A grid cell: its coordinates plus visited/wall/start/end flags.
///
/// Nodes live in the [`Grid`](crate::Grid) arena. Copies of a node are value
/// snapshots; they never alias the live cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Node {
    pub pos: Point,
    pub flags: Flags,
}

impl Node {
    /// A node at `pos` with no flags set.
    #[inline]
    pub const fn new(pos: Point) -> Self {
        Self {
            pos,
            flags: Flags::NONE,
        }
    }

    /// Set the flags (builder).
    #[inline]
    pub const fn with_flags(mut self, flags: Flags) -> Self {
        self.flags = flags;
        self
    }

    #[inline]
    pub const fn is_visited(self) -> bool {
        self.flags.contains(Flags::VISITED)
    }

    #[inline]
    pub const fn is_wall(self) -> bool {
        self.flags.contains(Flags::WALL)
    }

    #[inline]
    pub const fn is_start(self) -> bool {
        self.flags.contains(Flags::START)
    }

    #[inline]
    pub const fn is_end(self) -> bool {
        self.flags.contains(Flags::END)
    }

    /// The node's flag byte (see [`Flags`] for the bit layout).
    #[inline]
    pub const fn bits(self) -> u8 {
        self.flags.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_bits_match_wire_layout() {
        let n = Node::new(Point::new(1, 2)).with_flags(Flags::VISITED | Flags::END);
        assert_eq!(n.bits(), 0b1001);
        assert!(n.is_visited());
        assert!(n.is_end());
        assert!(!n.is_wall());
        assert!(!n.is_start());
    }

    #[test]
    fn flags_set_and_clear() {
        let mut f = Flags::NONE;
        f.set(Flags::WALL, true);
        f.set(Flags::START, true);
        assert_eq!(f, Flags::WALL | Flags::START);
        f.set(Flags::WALL, false);
        assert_eq!(f, Flags::START);
        assert_eq!(f & Flags::WALL, Flags::NONE);
    }
}

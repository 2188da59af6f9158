//! Board sizes.
//!
//! Every board is a rectangle whose outermost row and column on each side are
//! wall, so the playable interior is `(width - 2) * (height - 2)` cells. The
//! classic 32x24 game is the [Classic] alias of [Fixed], which carries its size
//! in the type. [Custom] keeps the size as data and is what the tests and
//! benches use for small boards, like a 5x4 board with a six cell interior
//! that a snake can fill in a handful of moves.

use core::fmt::Debug;
use std::hash::Hash;

/// Width and height of a board in cells, walls included
pub trait Dimensions: Debug + Copy + Hash {
    /// builds the size from a width and a height
    fn from_dimensions(width: u8, height: u8) -> Self;

    /// cells per row
    fn width(&self) -> u8;

    /// number of rows
    fn height(&self) -> u8;
}

/// A size fixed at compile time. Asking for any other size is a debug assertion
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Fixed<const W: u8, const H: u8>;

impl<const W: u8, const H: u8> Dimensions for Fixed<W, H> {
    fn width(&self) -> u8 {
        W
    }

    fn height(&self) -> u8 {
        H
    }

    fn from_dimensions(width: u8, height: u8) -> Self {
        debug_assert_eq!(width, W);
        debug_assert_eq!(height, H);

        Self
    }
}

/// Alias for a [Fixed] board at the 32x24 size of the classic game
pub type Classic = Fixed<32, 24>;

/// A size chosen at runtime
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Custom {
    width: u8,
    height: u8,
}

impl Dimensions for Custom {
    fn width(&self) -> u8 {
        self.width
    }

    fn height(&self) -> u8 {
        self.height
    }

    fn from_dimensions(width: u8, height: u8) -> Self {
        Self { width, height }
    }
}

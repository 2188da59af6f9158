use std::convert::TryFrom;
use std::fmt::Display;

/// Wrapper type for numbers to allow for shrinking board sizes
pub trait CellNum:
    std::fmt::Debug + Copy + Clone + PartialEq + Eq + std::hash::Hash + Ord + Display + 'static
{
    /// converts this cellnum to a usize
    fn as_usize(&self) -> usize;
    /// makes a cellnum from an i64, None if it doesn't fit
    fn try_from_i64(i: i64) -> Option<Self>;
    /// makes a cellnum from an usize, None if it doesn't fit
    fn try_from_usize(i: usize) -> Option<Self>;
}

impl CellNum for u8 {
    fn as_usize(&self) -> usize {
        *self as usize
    }

    fn try_from_i64(i: i64) -> Option<Self> {
        u8::try_from(i).ok()
    }

    fn try_from_usize(i: usize) -> Option<Self> {
        u8::try_from(i).ok()
    }
}
impl CellNum for u16 {
    fn as_usize(&self) -> usize {
        *self as usize
    }

    fn try_from_i64(i: i64) -> Option<Self> {
        u16::try_from(i).ok()
    }

    fn try_from_usize(i: usize) -> Option<Self> {
        u16::try_from(i).ok()
    }
}

use num_traits::{AsPrimitive, PrimInt, Unsigned};

pub mod macros;

/// Trait for types which can act as indices within an array (or an array-like structure).
pub trait ArrayIndex:
    PrimInt
    + Unsigned
    + AsPrimitive<usize>
    + std::fmt::Debug
    + std::fmt::Display
    + std::hash::Hash
    + Send
    + Sync
    + 'static
{
    /// Convert an array position into an index, if it fits.
    #[inline]
    fn from_position(pos: usize) -> Option<Self> {
        <Self as num_traits::NumCast>::from(pos)
    }

    /// The array position of this index.
    #[inline]
    fn position(self) -> usize {
        self.as_()
    }
}
impl<P> ArrayIndex for P where
    P: PrimInt
        + Unsigned
        + AsPrimitive<usize>
        + std::fmt::Debug
        + std::fmt::Display
        + std::hash::Hash
        + Send
        + Sync
        + 'static
{
}

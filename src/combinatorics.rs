mod bit_tuple_gen;
mod choose_gen;
#[cfg(test)]
mod comb;
mod gray_gen;
mod perm_gen;
mod radix_gen;

pub use bit_tuple_gen::BitTupleGen;
pub use choose_gen::ChooseGen;
pub use gray_gen::GrayGen;
pub use perm_gen::PermGen;
pub use radix_gen::RadixGen;

use num_traits::{NumCast, PrimInt};

use crate::InvalidParameter;

/// A lazy, forward-only, single-pass enumeration of a combinatorial family.
///
/// A generator is positioned at the first element of its family as soon as it
/// is constructed. Items are lent out of the generator's own state, so the
/// borrow checker rejects holding on to one across an `advance`.
pub trait Generator {
    type Item<'a>
    where
        Self: 'a;

    /// Whether `current` refers to an element, i.e. the family is not exhausted.
    fn has_next(&self) -> bool;

    /// The current element.
    ///
    /// # Panics
    ///
    /// If the generator is exhausted.
    fn current(&self) -> Self::Item<'_>;

    /// Moves to the next element, or marks the generator exhausted if the
    /// current element was the last one.
    ///
    /// # Panics
    ///
    /// If the generator is already exhausted.
    fn advance(&mut self);

    /// Adapts the generator to the pull-based [`LendingIterator`] protocol.
    fn lending(self) -> Lending<Self>
    where
        Self: Sized,
    {
        Lending {
            inner: self,
            started: false,
        }
    }
}

/// An iterator whose items may borrow from the iterator itself.
pub trait LendingIterator {
    type Item<'a>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>>;

    /// Drains the iterator, returning how many items it yielded.
    fn count_remaining(mut self) -> usize
    where
        Self: Sized,
    {
        let mut count = 0;
        while self.next().is_some() {
            count += 1;
        }
        count
    }
}

/// A [`Generator`] driven through [`LendingIterator::next`]. The first call
/// yields the initial element; every later call advances first.
#[derive(Debug, Clone)]
pub struct Lending<G> {
    inner: G,
    started: bool,
}

impl<G> Lending<G> {
    pub fn get_ref(&self) -> &G {
        &self.inner
    }

    pub fn into_inner(self) -> G {
        self.inner
    }
}

impl<G: Generator> LendingIterator for Lending<G> {
    type Item<'a>
        = G::Item<'a>
    where
        Self: 'a;

    fn next(&mut self) -> Option<Self::Item<'_>> {
        if !self.started {
            self.started = true;
        } else if self.inner.has_next() {
            self.inner.advance();
        }

        if self.inner.has_next() {
            Some(self.inner.current())
        } else {
            None
        }
    }
}

/// Number of value bits in `T`; the sign bit of signed types is excluded.
fn value_bits<T: PrimInt>() -> u32 {
    T::max_value().count_ones()
}

/// Total number of bits in `T`, sign bit included.
fn type_bits<T: PrimInt>() -> u32 {
    T::zero().count_zeros()
}

fn check_width(width: u32, capacity: u32) -> Result<u32, InvalidParameter> {
    if width > capacity {
        return Err(InvalidParameter::WidthTooLarge { width, capacity });
    }
    Ok(capacity)
}

fn cast<T: PrimInt>(value: usize) -> Result<T, InvalidParameter> {
    <T as NumCast>::from(value).ok_or(InvalidParameter::Unrepresentable { value })
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_value_bits() {
        assert_eq!(value_bits::<u8>(), 8);
        assert_eq!(value_bits::<i8>(), 7);
        assert_eq!(value_bits::<u64>(), 64);
        assert_eq!(value_bits::<i128>(), 127);
    }

    #[test]
    fn test_type_bits() {
        assert_eq!(type_bits::<u8>(), 8);
        assert_eq!(type_bits::<i8>(), 8);
        assert_eq!(type_bits::<i128>(), 128);
    }

    #[test]
    fn test_check_width() {
        assert_eq!(check_width(16, value_bits::<u16>()), Ok(16));
        assert_eq!(check_width(16, type_bits::<i16>()), Ok(16));
        assert_eq!(
            check_width(16, value_bits::<i16>()),
            Err(InvalidParameter::WidthTooLarge {
                width: 16,
                capacity: 15
            })
        );
    }

    #[test]
    fn test_cast() {
        assert_eq!(cast::<u8>(255), Ok(255u8));
        assert_eq!(
            cast::<u8>(256),
            Err(InvalidParameter::Unrepresentable { value: 256 })
        );
        assert_eq!(
            cast::<i8>(128),
            Err(InvalidParameter::Unrepresentable { value: 128 })
        );
    }

    #[test]
    fn test_lending_yields_initial_element_first() {
        let mut bits = BitTupleGen::<u8>::new(1).unwrap().lending();
        assert_eq!(bits.next(), Some(0));
        assert_eq!(bits.next(), Some(1));
        assert_eq!(bits.next(), None);
        assert_eq!(bits.next(), None);
        assert!(!bits.get_ref().has_next());
    }

    #[test]
    fn test_count_remaining() {
        let perms = PermGen::<u8>::new(5).unwrap().lending();
        assert_eq!(perms.count_remaining(), 120);
    }
}

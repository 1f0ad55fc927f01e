use log::{debug, trace};
use num_traits::PrimInt;

use super::{Generator, check_width, value_bits};
use crate::InvalidParameter;

/// All `width`-bit tuples in binary counting order, i.e. `0..2^width`. Bit `i`
/// of the current value is element `i` of the tuple.
#[derive(Debug, Clone)]
pub struct BitTupleGen<T> {
    width: u32,
    last: T,
    value: T,
    exhausted: bool,
}

impl<T: PrimInt> BitTupleGen<T> {
    pub fn new(width: u32) -> Result<BitTupleGen<T>, InvalidParameter> {
        let capacity = check_width(width, value_bits::<T>())?;
        let last = if width == 0 {
            T::zero()
        } else {
            T::max_value() >> (capacity - width) as usize
        };
        debug!("BitTupleGen: width {width}");
        Ok(BitTupleGen {
            width,
            last,
            value: T::zero(),
            exhausted: false,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    /// Element `i` of the current tuple.
    pub fn bit(&self, i: u32) -> bool {
        assert!(i < self.width, "bit {i} out of range for width {}", self.width);
        (self.current() >> i as usize) & T::one() == T::one()
    }
}

impl<T: PrimInt> Generator for BitTupleGen<T> {
    type Item<'a>
        = T
    where
        Self: 'a;

    fn has_next(&self) -> bool {
        !self.exhausted
    }

    fn current(&self) -> T {
        assert!(!self.exhausted, "BitTupleGen is exhausted");
        self.value
    }

    fn advance(&mut self) {
        assert!(!self.exhausted, "BitTupleGen advanced past its last tuple");
        if self.value == self.last {
            trace!("BitTupleGen: exhausted at width {}", self.width);
            self.exhausted = true;
        } else {
            self.value = self.value + T::one();
        }
    }
}

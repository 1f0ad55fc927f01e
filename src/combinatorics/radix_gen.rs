use log::{debug, trace};
use num_traits::PrimInt;

use super::Generator;
use crate::InvalidParameter;

/// All digit vectors `t` with `0 <= t[i] <= radii[i]`, in odometer order: the
/// last digit moves fastest and carries leftward.
#[derive(Debug, Clone)]
pub struct RadixGen<T> {
    radii: Vec<T>,
    digits: Vec<T>,
    exhausted: bool,
}

impl<T: PrimInt> RadixGen<T> {
    /// `radii[i]` is the largest value digit `i` takes, so position `i`
    /// cycles through `radii[i] + 1` values.
    pub fn new(radii: impl Into<Vec<T>>) -> Result<RadixGen<T>, InvalidParameter> {
        let radii = radii.into();
        if radii.is_empty() {
            return Err(InvalidParameter::EmptyRadix);
        }
        if let Some(position) = radii.iter().position(|&r| r < T::zero()) {
            return Err(InvalidParameter::NegativeRadix { position });
        }
        debug!("RadixGen: {} digits", radii.len());
        Ok(RadixGen {
            digits: vec![T::zero(); radii.len()],
            radii,
            exhausted: false,
        })
    }

    pub fn radii(&self) -> &[T] {
        &self.radii
    }
}

impl<T: PrimInt> Generator for RadixGen<T> {
    type Item<'a>
        = &'a [T]
    where
        Self: 'a;

    fn has_next(&self) -> bool {
        !self.exhausted
    }

    fn current(&self) -> &[T] {
        assert!(!self.exhausted, "RadixGen is exhausted");
        &self.digits
    }

    fn advance(&mut self) {
        assert!(!self.exhausted, "RadixGen advanced past its last tuple");
        let Self {
            ref radii,
            ref mut digits,
            ..
        } = *self;

        let last = digits.len() - 1;
        if digits[last] < radii[last] {
            digits[last] = digits[last] + T::one();
            return;
        }

        for j in (0..last).rev() {
            digits[j + 1] = T::zero();
            if digits[j] < radii[j] {
                digits[j] = digits[j] + T::one();
                return;
            }
        }

        trace!("RadixGen: exhausted {} digits", radii.len());
        self.exhausted = true;
    }
}

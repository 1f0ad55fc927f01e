use log::{debug, trace};
use num_traits::PrimInt;

use super::{Generator, check_width, type_bits};
use crate::InvalidParameter;

/// All `width`-bit patterns in binary reflected Gray code order, starting at 0.
/// Consecutive values differ in exactly one bit. The width may cover the whole
/// of `T`, sign bit included.
///
/// Uses the loopless focus-pointer method of Bitner, Ehrlich and Reingold,
/// "Efficient generation of the binary reflected Gray code and its
/// applications" (CACM 19.9, 1976): each advance does constant work.
#[derive(Debug, Clone)]
pub struct GrayGen<T> {
    value: T,
    /// Focus pointers `f[0..=width]`; `f[0]` is the next bit to flip.
    focus: Box<[u32]>,
    last_flip: Option<u32>,
    exhausted: bool,
}

impl<T: PrimInt> GrayGen<T> {
    pub fn new(width: u32) -> Result<GrayGen<T>, InvalidParameter> {
        check_width(width, type_bits::<T>())?;
        debug!("GrayGen: width {width}");
        Ok(GrayGen {
            value: T::zero(),
            focus: (0..=width).collect(),
            last_flip: None,
            exhausted: false,
        })
    }

    pub fn width(&self) -> u32 {
        (self.focus.len() - 1) as u32
    }

    /// The bit flipped by the last advance, or `None` at the initial value.
    pub fn last_flip(&self) -> Option<u32> {
        self.last_flip
    }
}

impl<T: PrimInt> Generator for GrayGen<T> {
    type Item<'a>
        = T
    where
        Self: 'a;

    fn has_next(&self) -> bool {
        !self.exhausted
    }

    fn current(&self) -> T {
        assert!(!self.exhausted, "GrayGen is exhausted");
        self.value
    }

    fn advance(&mut self) {
        assert!(!self.exhausted, "GrayGen advanced past its last value");

        let j = self.focus[0];
        if j == self.width() {
            trace!("GrayGen: exhausted at width {j}");
            self.exhausted = true;
            return;
        }

        let f = &mut self.focus;
        let i = j as usize;
        f[0] = 0;
        f[i] = f[i + 1];
        f[i + 1] = j + 1;

        self.value = self.value ^ (T::one() << i);
        self.last_flip = Some(j);
    }
}

use log::{debug, trace};
use num_traits::PrimInt;

use super::{Generator, cast};
use crate::InvalidParameter;

/// All `k`-subsets of `{0, ..., n-1}` as strictly increasing sequences, in
/// lexicographic order (Knuth, TAOCP 4A, Algorithm T).
#[derive(Debug, Clone)]
pub struct ChooseGen<T> {
    n: usize,
    /// `n - 1`, the largest value the last position may hold.
    top: T,
    choices: Vec<T>,
    changed_from: usize,
    exhausted: bool,
}

impl<T: PrimInt> ChooseGen<T> {
    /// Requires `1 <= k < n`, and `n - 1` must fit in `T`.
    pub fn new(n: usize, k: usize) -> Result<ChooseGen<T>, InvalidParameter> {
        if k == 0 || k >= n {
            return Err(InvalidParameter::SubsetSize { n, k });
        }
        let top = cast(n - 1)?;
        let choices = (0..k).map(cast).collect::<Result<Vec<T>, _>>()?;
        debug!("ChooseGen: {k} of {n}");
        Ok(ChooseGen {
            n,
            top,
            choices,
            changed_from: 0,
            exhausted: false,
        })
    }

    pub fn universe(&self) -> usize {
        self.n
    }

    pub fn size(&self) -> usize {
        self.choices.len()
    }

    /// Leftmost position rewritten by the last advance; everything before it
    /// is unchanged.
    pub fn changed_from(&self) -> usize {
        self.changed_from
    }
}

impl<T: PrimInt> Generator for ChooseGen<T> {
    type Item<'a>
        = &'a [T]
    where
        Self: 'a;

    fn has_next(&self) -> bool {
        !self.exhausted
    }

    fn current(&self) -> &[T] {
        assert!(!self.exhausted, "ChooseGen is exhausted");
        &self.choices
    }

    fn advance(&mut self) {
        assert!(!self.exhausted, "ChooseGen advanced past its last subset");
        let Self {
            n,
            top,
            ref mut choices,
            ..
        } = *self;
        let k = choices.len();

        // Position i may hold at most n - k + i.
        let mut end = k;
        let mut max = top;
        while end > 0 && choices[end - 1] >= max {
            end -= 1;
            max = max - T::one();
        }

        if end == 0 {
            trace!("ChooseGen: exhausted {k} of {n}");
            self.exhausted = true;
            return;
        }

        let j = end - 1;
        choices[j] = choices[j] + T::one();
        for i in end..k {
            choices[i] = choices[i - 1] + T::one();
        }
        self.changed_from = j;
    }
}

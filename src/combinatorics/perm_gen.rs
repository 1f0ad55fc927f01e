use log::{debug, trace};
use num_traits::PrimInt;

use super::{Generator, cast};
use crate::InvalidParameter;

/// All permutations of `{0, ..., n-1}` in lexicographic order, from the
/// identity to the fully descending arrangement.
#[derive(Debug, Clone)]
pub struct PermGen<T> {
    perm: Vec<T>,
    changed_suffix: usize,
    exhausted: bool,
}

impl<T: PrimInt> PermGen<T> {
    pub fn new(n: usize) -> Result<PermGen<T>, InvalidParameter> {
        let perm = (0..n).map(cast).collect::<Result<Vec<T>, _>>()?;
        debug!("PermGen: {n} elements");
        Ok(PermGen {
            perm,
            changed_suffix: n,
            exhausted: false,
        })
    }

    pub fn len(&self) -> usize {
        self.perm.len()
    }

    pub fn is_empty(&self) -> bool {
        self.perm.is_empty()
    }

    /// How many trailing positions the last advance rewrote. The leading
    /// `len() - changed_suffix()` elements are the same as before.
    pub fn changed_suffix(&self) -> usize {
        self.changed_suffix
    }
}

impl<T: PrimInt> Generator for PermGen<T> {
    type Item<'a>
        = &'a [T]
    where
        Self: 'a;

    fn has_next(&self) -> bool {
        !self.exhausted
    }

    fn current(&self) -> &[T] {
        assert!(!self.exhausted, "PermGen is exhausted");
        &self.perm
    }

    fn advance(&mut self) {
        assert!(!self.exhausted, "PermGen advanced past its last permutation");
        let perm = &mut self.perm;

        // Find the longest non-increasing suffix perm[i..].
        let mut i = perm.len();
        while i >= 2 && perm[i - 2] > perm[i - 1] {
            i -= 1;
        }
        if i <= 1 {
            trace!("PermGen: exhausted {} elements", perm.len());
            self.exhausted = true;
            return;
        }
        let pivot = i - 2;

        let mut j = perm.len() - 1;
        while perm[j] < perm[pivot] {
            j -= 1;
        }

        perm.swap(pivot, j);
        perm[pivot + 1..].reverse();
        self.changed_suffix = perm.len() - pivot;
    }
}

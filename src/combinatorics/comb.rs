/// Binomial coefficient `C(n, k)` by the multiplicative formula; every
/// partial product is itself a binomial, so the division is exact.
pub fn binomial(n: usize, k: usize) -> usize {
    assert!(k <= n);
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

pub fn fact(n: usize) -> usize {
    (1..=n).product()
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_binomial() {
        assert_eq!(binomial(0, 0), 1);
        assert_eq!(binomial(1, 1), 1);
        assert_eq!(binomial(3, 1), 3);
        assert_eq!(binomial(4, 2), 6);
        assert_eq!(binomial(5, 3), 10);
        assert_eq!(binomial(10, 4), 210);
        assert_eq!(binomial(11, 10), 11);
    }

    #[test]
    fn test_pascal_rule() {
        for n in 1..12 {
            for k in 1..n {
                assert_eq!(binomial(n, k), binomial(n - 1, k - 1) + binomial(n - 1, k));
            }
        }
    }

    #[test]
    fn test_fact() {
        assert_eq!(fact(0), 1);
        assert_eq!(fact(1), 1);
        assert_eq!(fact(3), 6);
        assert_eq!(fact(7), 5040);
    }
}

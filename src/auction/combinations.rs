/// Combinatorial iterator over all k-element index sets drawn from `0..n`.
///
/// Yields each of the C(n, k) combinations exactly once as ascending index
/// vectors, in lexicographic order:
/// `(0,1) (0,2) (0,3) (1,2) (1,3) (2,3)` for `n = 4, k = 2`.
///
/// # Construction
///
/// Created from `(n, k)`. Asking for `k = 0` or `k > n` yields nothing; the
/// empty bundle is never a candidate move.
///
/// # Performance
///
/// - Memory: O(k), only the current combination is stored
/// - Time per `.next()`: O(k)
pub struct Combinations {
    n: usize,
    next: Option<Vec<usize>>,
}

impl Combinations {
    /// Total number of combinations, C(n, k), or `None` if it overflows `usize`.
    pub fn combinations(n: usize, k: usize) -> Option<usize> {
        if k > n {
            return Some(0);
        }
        (0..k.min(n - k))
            .try_fold(1u128, |x, i| Some(x.checked_mul((n - i) as u128)? / (i + 1) as u128))
            .and_then(|x| usize::try_from(x).ok())
    }
    /// Lexicographic successor, or `None` once the last combination is reached.
    fn advance(&self, current: &[usize]) -> Option<Vec<usize>> {
        let k = current.len();
        let i = (0..k).rev().find(|&i| current[i] < self.n - k + i)?;
        let mut next = current.to_vec();
        next[i] += 1;
        for j in i + 1..k {
            next[j] = next[j - 1] + 1;
        }
        Some(next)
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;
    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;
        self.next = self.advance(&current);
        Some(current)
    }
}

/// n and k are fixed at construction
impl From<(usize, usize)> for Combinations {
    fn from((n, k): (usize, usize)) -> Self {
        Self {
            n,
            next: match k == 0 || k > n {
                true => None,
                false => Some((0..k).collect()),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn n_choose_0() {
        assert_eq!(Combinations::from((6, 0)).count(), 0);
    }
    #[test]
    fn n_choose_1() {
        let all = Combinations::from((4, 1)).collect::<Vec<_>>();
        assert_eq!(all, vec![vec![0], vec![1], vec![2], vec![3]]);
    }
    #[test]
    fn n_choose_n() {
        let all = Combinations::from((5, 5)).collect::<Vec<_>>();
        assert_eq!(all, vec![vec![0, 1, 2, 3, 4]]);
    }
    #[test]
    fn n_choose_more_than_n() {
        assert_eq!(Combinations::from((3, 4)).count(), 0);
        assert_eq!(Combinations::combinations(3, 4), Some(0));
    }
    #[test]
    fn lexicographic() {
        let all = Combinations::from((4, 2)).collect::<Vec<_>>();
        assert_eq!(
            all,
            vec![
                vec![0, 1],
                vec![0, 2],
                vec![0, 3],
                vec![1, 2],
                vec![1, 3],
                vec![2, 3],
            ]
        );
    }
    #[test]
    fn counts_match_binomial() {
        for n in 0..=10 {
            for k in 1..=n {
                assert_eq!(
                    Some(Combinations::from((n, k)).count()),
                    Combinations::combinations(n, k)
                );
            }
        }
    }
    #[test]
    fn binomial_without_overflow() {
        assert_eq!(Combinations::combinations(64, 32), Some(1832624140942590534));
        assert_eq!(Combinations::combinations(1000, 999), Some(1000));
        assert_eq!(Combinations::combinations(68, 34), None);
        assert_eq!(Combinations::combinations(5, 0), Some(1));
    }
    #[test]
    fn all_sizes_cover_power_set() {
        let n = 6;
        let total = (1..=n)
            .map(|k| Combinations::from((n, k)).count())
            .sum::<usize>();
        assert_eq!(total, (1 << n) - 1);
    }
}

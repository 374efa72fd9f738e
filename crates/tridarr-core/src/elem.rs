//! Element type and the coordinate → value rule.
//!
//! Every element is `2^i · 3^j · 5^k`. Arithmetic is exact modular
//! arithmetic over [`Elem`]: products that exceed `u64::MAX` wrap, they
//! are neither saturated nor checked.

use crate::dims::Coord;

/// Scalar stored in every cell of the grid.
pub type Elem = u64;

/// Prime bases for the i, j and k axes respectively.
pub const BASES: [Elem; 3] = [2, 3, 5];

/// Raise `base` to `exp` by exponentiation by squaring, wrapping on overflow.
///
/// `elem_pow(b, 0)` is 1 for every `b`, including 0.
pub fn elem_pow(mut base: Elem, mut exp: usize) -> Elem {
    let mut result: Elem = 1;
    loop {
        if exp & 1 == 1 {
            result = result.wrapping_mul(base);
        }
        exp >>= 1;
        if exp == 0 {
            return result;
        }
        base = base.wrapping_mul(base);
    }
}

/// Value stored at `coord`: `2^i · 3^j · 5^k` modulo 2^64.
pub fn element_value(coord: Coord) -> Elem {
    let [a, b, c] = BASES;
    elem_pow(a, coord.i)
        .wrapping_mul(elem_pow(b, coord.j))
        .wrapping_mul(elem_pow(c, coord.k))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn naive_pow(base: Elem, exp: usize) -> Elem {
        (0..exp).fold(1, |acc: Elem, _| acc.wrapping_mul(base))
    }

    #[test]
    fn zero_exponent_is_one() {
        assert_eq!(elem_pow(2, 0), 1);
        assert_eq!(elem_pow(0, 0), 1);
        assert_eq!(elem_pow(Elem::MAX, 0), 1);
    }

    #[test]
    fn small_powers_are_exact() {
        assert_eq!(elem_pow(2, 10), 1024);
        assert_eq!(elem_pow(3, 5), 243);
        assert_eq!(elem_pow(5, 3), 125);
        assert_eq!(elem_pow(3, 40), 12_157_665_459_056_928_801);
    }

    #[test]
    fn largest_exact_power_of_two() {
        assert_eq!(elem_pow(2, 63), 1 << 63);
    }

    #[test]
    fn power_of_two_wraps_to_zero_at_64() {
        assert_eq!(elem_pow(2, 64), 0);
        assert_eq!(elem_pow(2, 1000), 0);
    }

    #[test]
    fn overflowing_power_matches_modular_product() {
        assert_eq!(elem_pow(3, 41), naive_pow(3, 41));
        assert_eq!(elem_pow(5, 100), naive_pow(5, 100));
    }

    #[test]
    fn element_value_examples() {
        assert_eq!(element_value(Coord::new(0, 0, 0)), 1);
        assert_eq!(element_value(Coord::new(1, 1, 1)), 30);
        assert_eq!(element_value(Coord::new(1, 0, 1)), 10);
        assert_eq!(element_value(Coord::new(3, 2, 1)), 8 * 9 * 5);
    }

    #[test]
    fn element_value_wraps_instead_of_panicking() {
        let v = element_value(Coord::new(70, 50, 40));
        let expected = naive_pow(2, 70)
            .wrapping_mul(naive_pow(3, 50))
            .wrapping_mul(naive_pow(5, 40));
        assert_eq!(v, expected);
    }

    #[cfg(not(miri))]
    mod proptests {
        use super::*;
        use proptest::prelude::*;
        use std::collections::HashSet;

        proptest! {
            #[test]
            fn squaring_matches_repeated_multiplication(
                base in any::<u64>(),
                exp in 0usize..300,
            ) {
                prop_assert_eq!(elem_pow(base, exp), naive_pow(base, exp));
            }

            #[test]
            fn values_are_distinct_below_overflow(
                x in 1usize..8,
                y in 1usize..8,
                z in 1usize..8,
            ) {
                // 2^7 · 3^7 · 5^7 fits comfortably in a u64.
                let mut seen = HashSet::new();
                for i in 0..x {
                    for j in 0..y {
                        for k in 0..z {
                            prop_assert!(seen.insert(element_value(Coord::new(i, j, k))));
                        }
                    }
                }
                prop_assert_eq!(seen.len(), x * y * z);
            }
        }
    }
}

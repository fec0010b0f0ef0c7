//! Test-generation macros for the shared prefix-sum contract.
//!
//! All three structures promise identical observable behavior; the macro
//! below stamps the contract suite out once per structure so the suites
//! cannot drift apart.

/// Generates the shared behavioral test suite for a structure implementing
/// [`PrefixSums`](crate::PrefixSums).
///
/// Invoke with the structure's type name; a `mod <type>_contract` containing
/// the full suite is emitted in place:
///
/// ```ignore
/// fenwick::prefix_sums_contract_tests!(FenwickTree);
/// ```
///
/// Every call in the generated suite is dispatched through the trait, so the
/// suite also proves the trait impl delegates correctly.
#[macro_export]
macro_rules! prefix_sums_contract_tests {
    ($structure:ident) => {
        ::paste::paste! {
            mod [<$structure:snake _contract>] {
                use $crate::{$structure, PrefixSums};

                fn fresh(size: usize) -> impl PrefixSums {
                    $structure::new(size).unwrap()
                }

                #[test]
                fn scattered_updates_produce_expected_sums() {
                    let mut s = fresh(5);
                    s.update(0, 5);
                    s.update(2, 3);
                    s.update(4, 1);

                    assert_eq!(s.prefix_sum(0), 5);
                    assert_eq!(s.prefix_sum(1), 5);
                    assert_eq!(s.prefix_sum(2), 8);
                    assert_eq!(s.prefix_sum(3), 8);
                    assert_eq!(s.prefix_sum(4), 9);
                    assert_eq!(s.range_sum(1, 3), 3);
                }

                #[test]
                fn zero_delta_changes_nothing() {
                    let mut s = fresh(6);
                    s.update(1, 7);
                    s.update(4, -2);

                    let before: Vec<i64> = (0..6).map(|i| s.prefix_sum(i)).collect();
                    for i in 0..6 {
                        s.update(i, 0);
                    }
                    let after: Vec<i64> = (0..6).map(|i| s.prefix_sum(i)).collect();

                    assert_eq!(before, after);
                }

                #[test]
                fn empty_prefix_is_always_zero() {
                    let mut s = fresh(4);
                    assert_eq!(s.sum_first(0), 0);

                    s.update(0, 11);
                    s.update(3, -4);
                    assert_eq!(s.sum_first(0), 0);
                }

                #[test]
                fn inverted_range_is_zero_not_an_error() {
                    let mut s = fresh(4);
                    s.update(2, 9);
                    assert_eq!(s.range_sum(3, 2), 0);
                    assert_eq!(s.range_sum(1, 0), 0);
                }

                #[test]
                fn range_sum_matches_prefix_difference() {
                    let mut s = fresh(7);
                    for (i, delta) in [(0, 3), (1, -1), (3, 8), (5, 2), (6, -6)] {
                        s.update(i, delta);
                    }

                    for low in 0..7 {
                        for high in low..7 {
                            let by_prefix = if low == 0 {
                                s.prefix_sum(high)
                            } else {
                                s.prefix_sum(high) - s.prefix_sum(low - 1)
                            };
                            assert_eq!(s.range_sum(low, high), by_prefix);
                        }
                    }
                }

                #[test]
                fn deltas_are_signed_and_additive() {
                    let mut s = fresh(3);
                    s.update(1, 10);
                    s.update(1, -25);
                    s.update(1, 5);
                    assert_eq!(s.prefix_sum(2), -10);
                }

                #[test]
                #[should_panic(expected = "out of range")]
                fn out_of_range_update_panics() {
                    let mut s = fresh(4);
                    s.update(4, 1);
                }

                #[test]
                #[should_panic(expected = "out of range")]
                fn out_of_range_query_panics() {
                    let s = fresh(4);
                    s.prefix_sum(4);
                }
            }
        }
    };
}

//! Digit-preference summaries comparing observed counts to the uniform
//! baseline.

use crate::dataset::VALUE_SPAN;
use crate::fmt::fmt_f64_fixed;
use crate::freq::ValueCounts;

/// Ratio above which a row is emphasized as strongly over-represented.
pub const STRONG_OVER: f64 = 4.0;
/// Ratio below which a row is emphasized as strongly under-represented.
pub const STRONG_UNDER: f64 = 0.2;

/// Value-group predicates behind the two summary tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GroupRule {
    /// Values divisible by the given modulus.
    MultipleOf(u8),
    /// Values whose final decimal digit equals the given digit.
    EndsWith(u8),
}

impl GroupRule {
    pub fn matches(self, value: u8) -> bool {
        match self {
            // A zero modulus matches nothing rather than dividing by zero.
            GroupRule::MultipleOf(n) => n != 0 && value % n == 0,
            GroupRule::EndsWith(digit) => value % 10 == digit,
        }
    }

    /// Row heading in the summary tables.
    pub fn label(self) -> String {
        match self {
            GroupRule::MultipleOf(n) => n.to_string(),
            GroupRule::EndsWith(digit) => digit.to_string(),
        }
    }
}

fn group_total<F: Fn(u8) -> bool>(counts: &ValueCounts, matches: &F) -> u64 {
    (0..VALUE_SPAN as u8)
        .filter(|&value| matches(value))
        .map(|value| counts.get(value) as u64)
        .sum()
}

/// Ratio of observed to uniformly-expected counts over the values a
/// predicate selects. A predicate matching no expected count divides by
/// zero; the non-finite result flows through to formatting unchanged.
pub fn preference_ratio<F: Fn(u8) -> bool>(
    matches: F,
    actual: &ValueCounts,
    expected: &ValueCounts,
) -> f64 {
    let actual_total = group_total(actual, &matches);
    let expected_total = group_total(expected, &matches);
    actual_total as f64 / expected_total as f64
}

/// One summary-table row: a value group and how strongly the models favor it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PreferenceRow {
    pub rule: GroupRule,
    /// Observed count summed over the group.
    pub actual: u64,
    /// Uniform-baseline count summed over the group.
    pub expected: u64,
    pub ratio: f64,
}

impl PreferenceRow {
    pub fn new(rule: GroupRule, actual: u64, expected: u64) -> Self {
        PreferenceRow {
            rule,
            actual,
            expected,
            ratio: actual as f64 / expected as f64,
        }
    }

    pub fn strongly_over(&self) -> bool {
        self.ratio > STRONG_OVER
    }

    pub fn strongly_under(&self) -> bool {
        self.ratio < STRONG_UNDER
    }

    /// "2.4x more" above parity, "1.3x less" at or below it.
    pub fn phrase(&self) -> String {
        if self.ratio > 1.0 {
            format!("{}x more", fmt_f64_fixed(self.ratio, 1))
        } else {
            format!("{}x less", fmt_f64_fixed(1.0 / self.ratio, 1))
        }
    }
}

fn rule_row(rule: GroupRule, actual: &ValueCounts, expected: &ValueCounts) -> PreferenceRow {
    let matches = |value| rule.matches(value);
    PreferenceRow::new(
        rule,
        group_total(actual, &matches),
        group_total(expected, &matches),
    )
}

/// Rows for the multiples table, modulus 2 through 11.
pub fn multiples_rows(actual: &ValueCounts, expected: &ValueCounts) -> Vec<PreferenceRow> {
    (2..=11)
        .map(|n| rule_row(GroupRule::MultipleOf(n), actual, expected))
        .collect()
}

/// Rows for the final-digit table, digits 0 through 9.
pub fn ends_with_rows(actual: &ValueCounts, expected: &ValueCounts) -> Vec<PreferenceRow> {
    (0..=9)
        .map(|digit| rule_row(GroupRule::EndsWith(digit), actual, expected))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts_from(pairs: &[(u8, u32)]) -> ValueCounts {
        let mut counts = ValueCounts::default();
        for &(value, count) in pairs {
            for _ in 0..count {
                counts.record(value);
            }
        }
        counts
    }

    #[test]
    fn multiple_of_matches_expected_values() {
        let rule = GroupRule::MultipleOf(7);
        let matched: Vec<u8> = (0..100).filter(|&v| rule.matches(v)).collect();
        assert_eq!(matched, vec![0, 7, 14, 21, 28, 35, 42, 49, 56, 63, 70, 77, 84, 91, 98]);
    }

    #[test]
    fn zero_modulus_matches_nothing() {
        assert!(!GroupRule::MultipleOf(0).matches(0));
        assert!(!GroupRule::MultipleOf(0).matches(50));
    }

    #[test]
    fn ends_with_matches_final_digit() {
        let rule = GroupRule::EndsWith(3);
        assert!(rule.matches(3));
        assert!(rule.matches(43));
        assert!(rule.matches(93));
        assert!(!rule.matches(30));
    }

    #[test]
    fn always_true_predicate_gives_ratio_one() {
        // Different distributions, same total: parity must be exact.
        let actual = counts_from(&[(3, 100)]);
        let expected = counts_from(&[(0, 25), (10, 25), (50, 25), (99, 25)]);
        let ratio = preference_ratio(|_| true, &actual, &expected);
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn ratio_divides_group_totals() {
        let actual = counts_from(&[(0, 10), (5, 5)]);
        let expected = counts_from(&[(0, 2), (5, 2)]);
        let ratio = preference_ratio(|v| GroupRule::MultipleOf(5).matches(v), &actual, &expected);
        assert_eq!(ratio, 15.0 / 4.0);
    }

    #[test]
    fn empty_expected_group_yields_non_finite_ratio() {
        let actual = counts_from(&[(7, 3)]);
        let expected = ValueCounts::default();
        let ratio = preference_ratio(|v| v == 7, &actual, &expected);
        assert!(ratio.is_infinite());
        let row = PreferenceRow::new(GroupRule::EndsWith(7), 3, 0);
        assert!(row.ratio.is_infinite());
        assert_eq!(row.phrase(), "Infx more");
    }

    #[test]
    fn emphasis_thresholds_are_strict() {
        let rule = GroupRule::MultipleOf(2);
        let at_over = PreferenceRow::new(rule, 4, 1);
        assert_eq!(at_over.ratio, 4.0);
        assert!(!at_over.strongly_over());
        let past_over = PreferenceRow::new(rule, 40_001, 10_000);
        assert!(past_over.strongly_over());

        let at_under = PreferenceRow::new(rule, 1, 5);
        assert_eq!(at_under.ratio, 0.2);
        assert!(!at_under.strongly_under());
        let past_under = PreferenceRow::new(rule, 1_999, 10_000);
        assert!(past_under.strongly_under());
    }

    #[test]
    fn phrase_inverts_ratios_at_or_below_parity() {
        let rule = GroupRule::EndsWith(0);
        assert_eq!(PreferenceRow::new(rule, 24, 10).phrase(), "2.4x more");
        assert_eq!(PreferenceRow::new(rule, 1, 5).phrase(), "5.0x less");
        assert_eq!(PreferenceRow::new(rule, 10, 10).phrase(), "1.0x less");
    }

    #[test]
    fn table_builders_cover_their_rule_ranges() {
        let mut uniform = ValueCounts::default();
        for value in 0..VALUE_SPAN as u8 {
            uniform.record(value);
        }
        let multiples = multiples_rows(&uniform, &uniform);
        assert_eq!(multiples.len(), 10);
        assert_eq!(multiples[0].rule, GroupRule::MultipleOf(2));
        assert_eq!(multiples[0].actual, 50);
        assert_eq!(multiples[0].expected, 50);
        assert_eq!(multiples[9].rule, GroupRule::MultipleOf(11));

        let digits = ends_with_rows(&uniform, &uniform);
        assert_eq!(digits.len(), 10);
        assert_eq!(digits[0].rule, GroupRule::EndsWith(0));
        assert_eq!(digits[9].rule, GroupRule::EndsWith(9));
        // Identical inputs sit exactly at parity.
        assert!(digits.iter().all(|row| row.ratio == 1.0));
    }
}

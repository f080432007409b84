//! Half-open date ranges.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use hotelier_core::{DomainError, DomainResult, ValueObject};

/// A stay `[check_in, check_out)`: the checkout day itself is free for the
/// next guest to check in.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawDateRange")]
pub struct DateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl ValueObject for DateRange {}

#[derive(Deserialize)]
struct RawDateRange {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl TryFrom<RawDateRange> for DateRange {
    type Error = DomainError;

    fn try_from(raw: RawDateRange) -> Result<Self, Self::Error> {
        DateRange::new(raw.check_in, raw.check_out)
    }
}

impl DateRange {
    /// Build a range; `check_out` must be strictly after `check_in`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> DomainResult<Self> {
        if check_out <= check_in {
            return Err(DomainError::validation("check_out must be after check_in"));
        }
        Ok(Self { check_in, check_out })
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Two half-open ranges overlap iff neither ends before the other starts.
    ///
    /// `a_end == b_start` is NOT an overlap (same-day turnover).
    pub fn overlaps(&self, other: &DateRange) -> bool {
        !(self.check_out <= other.check_in || self.check_in >= other.check_out)
    }
}

impl core::fmt::Display for DateRange {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {})", self.check_in, self.check_out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn range(a: u32, b: u32) -> DateRange {
        DateRange::new(day(a), day(b)).unwrap()
    }

    #[test]
    fn rejects_empty_and_inverted_ranges() {
        assert!(matches!(DateRange::new(day(10), day(10)), Err(DomainError::Validation(_))));
        assert!(matches!(DateRange::new(day(12), day(10)), Err(DomainError::Validation(_))));
        assert_eq!(range(10, 12).nights(), 2);
    }

    #[test]
    fn partial_overlap_is_detected() {
        assert!(range(10, 12).overlaps(&range(11, 13)));
        assert!(range(11, 13).overlaps(&range(10, 12)));
    }

    #[test]
    fn containment_is_overlap() {
        assert!(range(10, 20).overlaps(&range(12, 13)));
        assert!(range(12, 13).overlaps(&range(10, 20)));
        assert!(range(10, 12).overlaps(&range(10, 12)));
    }

    #[test]
    fn back_to_back_stays_do_not_overlap() {
        assert!(!range(10, 12).overlaps(&range(12, 14)));
        assert!(!range(12, 14).overlaps(&range(10, 12)));
    }

    #[test]
    fn deserialization_enforces_ordering() {
        let ok: DateRange =
            serde_json::from_str(r#"{"check_in":"2024-01-10","check_out":"2024-01-12"}"#).unwrap();
        assert_eq!(ok, range(10, 12));
        assert!(
            serde_json::from_str::<DateRange>(r#"{"check_in":"2024-01-12","check_out":"2024-01-10"}"#)
                .is_err()
        );
    }

    fn arb_range() -> impl Strategy<Value = DateRange> {
        (1u32..28, 1u32..5).prop_map(|(start, len)| range(start, (start + len).min(31)))
    }

    proptest! {
        #[test]
        fn overlap_is_symmetric(a in arb_range(), b in arb_range()) {
            prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
        }

        /// Overlap holds exactly when the two stays share at least one night.
        #[test]
        fn overlap_means_a_shared_night(a in arb_range(), b in arb_range()) {
            let shared = a
                .check_in()
                .iter_days()
                .take_while(|d| *d < a.check_out())
                .any(|night| night >= b.check_in() && night < b.check_out());
            prop_assert_eq!(a.overlaps(&b), shared);
        }
    }
}

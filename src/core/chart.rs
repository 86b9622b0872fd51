//! Y-axis layout for the revenue chart.
//!
//! Gridlines sit every $1K from a rounded-up top bound down to zero.

use crate::core::models::{RevenueSample, YAxis};
use crate::error::{DashfmtError, Result};

/// Distance between two gridlines, in whole currency units.
pub const AXIS_STEP: i64 = 1_000;

/// Compute the y-axis labels for a revenue series.
///
/// `top_label` is the highest amount rounded up to a multiple of
/// [`AXIS_STEP`], never below zero. Labels run from `top_label` down to
/// `$0K` inclusive, one per step, so a large top bound means a long list.
/// Sample order does not matter.
///
/// # Errors
///
/// Returns [`DashfmtError::EmptyRevenue`] for an empty series, which has no
/// highest record to round, and [`DashfmtError::RevenueOutOfRange`] when the
/// rounded top would not fit in an `i64`.
///
/// ```
/// use dashfmt::core::chart::generate_y_axis;
/// use dashfmt::core::models::RevenueSample;
///
/// let axis = generate_y_axis(&[
///     RevenueSample::new("Jan", 2000),
///     RevenueSample::new("Feb", 2300),
/// ])
/// .unwrap();
/// assert_eq!(axis.top_label, 3000);
/// assert_eq!(axis.y_axis_labels, ["$3K", "$2K", "$1K", "$0K"]);
/// ```
pub fn generate_y_axis(revenue: &[RevenueSample]) -> Result<YAxis> {
    let highest_record = revenue
        .iter()
        .map(|sample| sample.amount)
        .max()
        .ok_or(DashfmtError::EmptyRevenue)?;

    let top_label = round_up_to_step(highest_record.max(0))
        .ok_or(DashfmtError::RevenueOutOfRange(highest_record))?;
    let y_axis_labels = (0..=top_label / AXIS_STEP)
        .rev()
        .map(|thousands| format!("${thousands}K"))
        .collect();

    tracing::debug!(
        samples = revenue.len(),
        highest_record,
        top_label,
        "Generated y-axis"
    );

    Ok(YAxis {
        y_axis_labels,
        top_label,
    })
}

/// Round a non-negative value up to the next multiple of [`AXIS_STEP`].
fn round_up_to_step(value: i64) -> Option<i64> {
    let steps = value / AXIS_STEP + i64::from(value % AXIS_STEP != 0);
    steps.checked_mul(AXIS_STEP)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_test_revenue as series, sample_revenue};

    #[test]
    fn rounds_highest_record_up() {
        let axis = generate_y_axis(&series(&[1200, 4801, 300])).unwrap();
        assert_eq!(axis.top_label, 5000);
        assert_eq!(axis.y_axis_labels, ["$5K", "$4K", "$3K", "$2K", "$1K", "$0K"]);
    }

    #[test]
    fn exact_multiple_is_unchanged() {
        let axis = generate_y_axis(&series(&[5000, 10])).unwrap();
        assert_eq!(axis.top_label, 5000);
        assert_eq!(axis.y_axis_labels.first().map(String::as_str), Some("$5K"));
    }

    #[test]
    fn all_zero_series_has_single_label() {
        let axis = generate_y_axis(&series(&[0, 0, 0])).unwrap();
        assert_eq!(axis.top_label, 0);
        assert_eq!(axis.y_axis_labels, ["$0K"]);
    }

    #[test]
    fn negative_series_clamps_to_zero() {
        let axis = generate_y_axis(&series(&[-1500, -20])).unwrap();
        assert_eq!(axis.top_label, 0);
        assert_eq!(axis.y_axis_labels, ["$0K"]);
    }

    #[test]
    fn order_of_samples_does_not_matter() {
        let forward = generate_y_axis(&series(&[100, 2500, 900])).unwrap();
        let backward = generate_y_axis(&series(&[900, 2500, 100])).unwrap();
        assert_eq!(forward, backward);
    }

    #[test]
    fn empty_series_is_rejected() {
        assert!(matches!(
            generate_y_axis(&[]),
            Err(DashfmtError::EmptyRevenue)
        ));
    }

    #[test]
    fn top_bound_past_i64_is_rejected() {
        assert!(matches!(
            generate_y_axis(&series(&[10, i64::MAX])),
            Err(DashfmtError::RevenueOutOfRange(i64::MAX))
        ));
        assert_eq!(round_up_to_step(i64::MAX - 807), Some(i64::MAX - 807));
        assert_eq!(round_up_to_step(i64::MAX - 806), None);
    }

    #[test]
    fn repeated_calls_agree() {
        let revenue = sample_revenue();
        let first = generate_y_axis(&revenue).unwrap();
        let second = generate_y_axis(&revenue).unwrap();
        assert_eq!(first, second);
        assert_eq!(revenue, sample_revenue());
    }

    #[test]
    fn label_count_and_order_hold_for_dashboard_data() {
        let revenue = sample_revenue();
        let axis = generate_y_axis(&revenue).unwrap();

        let highest = revenue.iter().map(|s| s.amount).max().unwrap();
        assert_eq!(axis.top_label, 5000);
        assert!(axis.top_label >= highest);
        assert!(axis.top_label - highest < AXIS_STEP);

        let expected_len = usize::try_from(axis.top_label / AXIS_STEP).unwrap() + 1;
        assert_eq!(axis.y_axis_labels.len(), expected_len);
        assert_eq!(axis.y_axis_labels.last().map(String::as_str), Some("$0K"));
    }

    #[test]
    fn top_label_property_over_many_maxima() {
        for highest in (0..20_000).step_by(137) {
            let axis = generate_y_axis(&series(&[highest / 2, highest])).unwrap();
            assert_eq!(axis.top_label % AXIS_STEP, 0);
            assert!(axis.top_label >= highest);
            assert!(axis.top_label - highest < AXIS_STEP);
            assert_eq!(
                axis.y_axis_labels.len(),
                usize::try_from(axis.top_label / AXIS_STEP).unwrap() + 1
            );
        }
    }
}

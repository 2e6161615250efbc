// File: crates/chart-core/src/axis.rs
// Summary: Axis label selection and formatting (month labels on X, min/mid/max on Y).

use crate::scale::ValueDomain;
use crate::series::parse_month;

/// Number of date labels the X axis aims for.
pub const TARGET_X_LABELS: usize = 5;

/// Which of the axis's three value labels a [`YLabel`] is.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YLabelKind {
    Min,
    Mid,
    Max,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct YLabel {
    pub kind: YLabelKind,
    pub value: f64,
}

/// Sample indices that get an X axis label: every `max(1, n / 5)`th index
/// starting from 0. Short series label every sample.
pub fn x_label_indices(count: usize) -> Vec<usize> {
    let step = (count / TARGET_X_LABELS).max(1);
    (0..count).step_by(step).collect()
}

/// Short month/year label, e.g. `2023-01` -> `Jan 2023`. Labels that are not
/// valid months are returned unchanged.
pub fn format_month_label(date: &str) -> String {
    match parse_month(date) {
        Some(d) => d.format("%b %Y").to_string(),
        None => date.to_string(),
    }
}

/// The three Y labels, bottom to top: rounded min, midpoint, rounded max.
pub fn y_labels(domain: &ValueDomain) -> [YLabel; 3] {
    [
        YLabel { kind: YLabelKind::Min, value: domain.min },
        YLabel { kind: YLabelKind::Mid, value: domain.midpoint() },
        YLabel { kind: YLabelKind::Max, value: domain.max },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn twelve_samples_label_every_other_index() {
        assert_eq!(x_label_indices(12), vec![0, 2, 4, 6, 8, 10]);
    }

    #[test]
    fn exact_multiples_give_five_labels() {
        assert_eq!(x_label_indices(10), vec![0, 2, 4, 6, 8]);
        assert_eq!(x_label_indices(25), vec![0, 5, 10, 15, 20]);
    }

    #[test]
    fn short_series_label_every_sample() {
        assert_eq!(x_label_indices(0), Vec::<usize>::new());
        assert_eq!(x_label_indices(1), vec![0]);
        assert_eq!(x_label_indices(4), vec![0, 1, 2, 3]);
    }

    #[test]
    fn month_labels_are_short_form() {
        assert_eq!(format_month_label("2023-01"), "Jan 2023");
        assert_eq!(format_month_label("1999-12"), "Dec 1999");
        assert_eq!(format_month_label("2023-13"), "2023-13");
    }

    #[test]
    fn y_labels_are_min_mid_max() {
        let labels = y_labels(&ValueDomain { min: 40.0, max: 50.0 });
        let values: Vec<f64> = labels.iter().map(|l| l.value).collect();
        assert_eq!(values, [40.0, 45.0, 50.0]);
        assert_eq!(labels[0].kind, YLabelKind::Min);
        assert_eq!(labels[2].kind, YLabelKind::Max);
    }
}

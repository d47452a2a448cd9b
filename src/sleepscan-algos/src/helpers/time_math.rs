use std::collections::BTreeMap;

use chrono::TimeDelta;

pub fn mean_deltas(durations: &[TimeDelta]) -> TimeDelta {
    if durations.is_empty() {
        TimeDelta::default()
    } else {
        durations.iter().sum::<TimeDelta>() / durations.len() as i32
    }
}

/// Middle value; for an even count, the mean of the two middle values.
pub fn median_deltas(durations: &[TimeDelta]) -> TimeDelta {
    if durations.is_empty() {
        return TimeDelta::default();
    }

    let mut sorted = durations.to_vec();
    sorted.sort_unstable();

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        (sorted[mid - 1] + sorted[mid]) / 2
    } else {
        sorted[mid]
    }
}

/// Sample standard deviation (ddof = 1). Undefined below two values.
pub fn sample_std_dev_delta(durations: &[TimeDelta], mean: TimeDelta) -> Option<TimeDelta> {
    if durations.len() < 2 {
        return None;
    }

    let mean = seconds(mean);
    let sum_sq = durations
        .iter()
        .map(|x| (seconds(*x) - mean).powi(2))
        .sum::<f64>();
    let std = (sum_sq / (durations.len() - 1) as f64).sqrt();

    Some(TimeDelta::milliseconds((std * 1000.0).round() as i64))
}

pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0_f64
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}

/// Most frequent value; ties go to the smallest value.
pub fn mode_smallest(values: &[u32]) -> Option<u32> {
    let mut counts = BTreeMap::new();
    for value in values {
        *counts.entry(*value).or_insert(0_usize) += 1;
    }

    // BTreeMap iterates ascending and max_by_key keeps the last maximum,
    // so walk it in reverse to land on the smallest tied key.
    counts
        .into_iter()
        .rev()
        .max_by_key(|(_, count)| *count)
        .map(|(value, _)| value)
}

fn seconds(delta: TimeDelta) -> f64 {
    delta.num_milliseconds() as f64 / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_deltas_empty() {
        assert_eq!(mean_deltas(&[]), TimeDelta::default());
    }

    #[test]
    fn mean_deltas_basic() {
        let durations = vec![TimeDelta::hours(6), TimeDelta::hours(10)];
        assert_eq!(mean_deltas(&durations), TimeDelta::hours(8));
    }

    #[test]
    fn median_odd_count() {
        let durations = vec![
            TimeDelta::hours(9),
            TimeDelta::hours(6),
            TimeDelta::hours(7),
        ];
        assert_eq!(median_deltas(&durations), TimeDelta::hours(7));
    }

    #[test]
    fn median_even_count_averages_middle() {
        let durations = vec![
            TimeDelta::hours(8),
            TimeDelta::hours(6),
            TimeDelta::hours(7),
            TimeDelta::hours(10),
        ];
        assert_eq!(median_deltas(&durations), TimeDelta::minutes(7 * 60 + 30));
    }

    #[test]
    fn sample_std_needs_two_values() {
        assert_eq!(sample_std_dev_delta(&[], TimeDelta::zero()), None);
        let d = TimeDelta::hours(8);
        assert_eq!(sample_std_dev_delta(&[d], d), None);
    }

    #[test]
    fn sample_std_uses_n_minus_one() {
        // 6h and 10h: deviations of 2h each, sum of squares 8h², / (2 - 1) -> sqrt = 2.828h
        let durations = vec![TimeDelta::hours(6), TimeDelta::hours(10)];
        let std = sample_std_dev_delta(&durations, TimeDelta::hours(8)).unwrap();
        let expected = (8.0_f64).sqrt() * 3600.0;
        assert!((std.num_milliseconds() as f64 / 1000.0 - expected).abs() < 0.001);
    }

    #[test]
    fn sample_std_zero_variance() {
        let d = TimeDelta::hours(8);
        assert_eq!(sample_std_dev_delta(&[d, d, d], d), Some(TimeDelta::zero()));
    }

    #[test]
    fn mean_empty() {
        assert_eq!(mean(&[]), 0.0);
    }

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[2.0, 4.0, 6.0]), 4.0);
    }

    #[test]
    fn mode_prefers_smallest_on_tie() {
        assert_eq!(mode_smallest(&[3, 3, 5, 5]), Some(3));
        assert_eq!(mode_smallest(&[5, 5, 3, 3]), Some(3));
        assert_eq!(mode_smallest(&[23, 1, 23, 1, 0]), Some(1));
    }

    #[test]
    fn mode_single_winner() {
        assert_eq!(mode_smallest(&[2, 7, 7, 1]), Some(7));
    }

    #[test]
    fn mode_empty() {
        assert_eq!(mode_smallest(&[]), None);
    }
}

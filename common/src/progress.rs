/// Raw completion percentage `current / target * 100`, unclamped.
///
/// A zero (or negative) target has no meaningful ratio: it reads as complete
/// once anything has accumulated, and as not started otherwise.
pub fn progress_ratio(current: f64, target: f64) -> f64 {
    if target <= 0.0 {
        return if current > 0.0 { 100.0 } else { 0.0 };
    }
    current / target * 100.0
}

/// Percentage suitable for a bar width: always within `[0, 100]`.
pub fn fill_percent(current: f64, target: f64) -> f64 {
    let raw = progress_ratio(current, target);
    if raw.is_nan() {
        return 0.0;
    }
    raw.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_aging_progress() {
        let p = fill_percent(3.0, 180.0);
        assert!((p - 1.6666666).abs() < 1e-6);
    }

    #[test]
    fn test_fill_matches_clamped_ratio() {
        let pairs: [(f64, f64); 6] = [
            (0.0, 10.0),
            (5.0, 10.0),
            (10.0, 10.0),
            (250.0, 180.0),
            (-4.0, 10.0),
            (1.0, 0.001),
        ];
        for (current, target) in pairs {
            let expected = (current / target * 100.0).clamp(0.0, 100.0);
            assert_eq!(fill_percent(current, target), expected);
        }
    }

    #[test]
    fn test_overdue_never_exceeds_full() {
        assert_eq!(fill_percent(400.0, 180.0), 100.0);
        assert!(progress_ratio(400.0, 180.0) > 100.0);
    }

    #[test]
    fn test_zero_target_guard() {
        assert_eq!(fill_percent(0.0, 0.0), 0.0);
        assert_eq!(fill_percent(3.0, 0.0), 100.0);
    }

    #[test]
    fn test_nan_renders_empty() {
        assert_eq!(fill_percent(f64::NAN, 10.0), 0.0);
        assert_eq!(fill_percent(f64::INFINITY, 10.0), 100.0);
    }
}

//! Number formatting and table subsampling shared by the renderers.

/// Upper bound on rows shown in the summary table.
pub const MAX_TABLE_ROWS: usize = 20;

/// Formats `value` with a fixed number of decimals.
pub fn fixed(value: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, value)
}

/// `0.873` -> `"87.3%"`
pub fn percentage(ratio: f64) -> String {
    format!("{:.1}%", ratio * 100.0)
}

/// Formats a value the way the backend echoes it: shortest representation,
/// integral values without a trailing `.0`.
pub fn plain(value: f64) -> String {
    if value.fract() == 0.0 && value.is_finite() {
        format!("{}", value as i64)
    } else {
        format!("{}", value)
    }
}

/// Stride that keeps at most [`MAX_TABLE_ROWS`] rows. Returns `None` for an empty series.
pub fn table_stride(len: usize) -> Option<usize> {
    if len == 0 {
        None
    } else {
        Some(len.div_ceil(MAX_TABLE_ROWS))
    }
}

/// Every stride-th element, starting with the first one.
pub fn subsample<T>(items: &[T]) -> Vec<&T> {
    match table_stride(items.len()) {
        Some(stride) => items.iter().step_by(stride).collect(),
        None => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_percentage_one_decimal() {
        assert_eq!(percentage(0.873), "87.3%");
        assert_eq!(percentage(1.0), "100.0%");
        assert_eq!(percentage(0.0), "0.0%");
    }

    #[test]
    fn test_plain_drops_integral_fraction() {
        assert_eq!(plain(5.0), "5");
        assert_eq!(plain(-2.5), "-2.5");
        assert_eq!(plain(3.5), "3.5");
    }

    #[test]
    fn test_stride_for_empty_series() {
        assert_eq!(table_stride(0), None);
        assert!(subsample::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_subsample_47_samples() {
        let items: Vec<usize> = (0..47).collect();
        assert_eq!(table_stride(47), Some(3));

        let rows = subsample(&items);
        assert_eq!(rows.len(), 16);
        assert_eq!(*rows[0], 0);
        assert_eq!(*rows[15], 45);
    }

    #[test]
    fn test_row_count_bounded_for_all_lengths() {
        for len in 1..=500usize {
            let items: Vec<usize> = (0..len).collect();
            let stride = len.div_ceil(MAX_TABLE_ROWS);
            let rows = subsample(&items);
            assert_eq!(rows.len(), len.div_ceil(stride), "len {}", len);
            assert!(rows.len() <= MAX_TABLE_ROWS, "len {}", len);
        }
    }

    #[test]
    fn test_fixed_decimals() {
        assert_eq!(fixed(0.5, 6), "0.500000");
        assert_eq!(fixed(-4.98765, 3), "-4.988");
    }
}

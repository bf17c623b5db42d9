// File: crates/chart-core/src/grid.rs
// Summary: Tick level layout helpers.

/// `steps` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    match steps {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (steps as f64 - 1.0);
            (0..steps).map(|i| start + step * i as f64).collect()
        }
    }
}

/// Stride that keeps at most `max_labels` of `n` ticks labelled.
pub fn label_stride(n: usize, max_labels: usize) -> usize {
    if max_labels == 0 || n <= max_labels {
        1
    } else {
        n.div_ceil(max_labels)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_includes_both_ends() {
        assert_eq!(linspace(0.0, 10.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0]);
        assert_eq!(linspace(3.0, 9.0, 1), vec![3.0]);
    }

    #[test]
    fn stride_caps_label_count() {
        assert_eq!(label_stride(10, 24), 1);
        assert_eq!(label_stride(24, 24), 1);
        assert_eq!(label_stride(25, 24), 2);
        assert_eq!(label_stride(100, 24), 5);
        assert!(100usize.div_ceil(label_stride(100, 24)) <= 24);
    }
}

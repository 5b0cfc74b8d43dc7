//! Numeric helpers shared by the canvas and the demos.

/// Round to the nearest integer, ties to the even neighbour (`0.5 -> 0`,
/// `1.5 -> 2`, `2.5 -> 2`). Infinities and NaN are returned unchanged.
pub fn round_half_to_even(x: f64) -> f64 {
    x.round_ties_even()
}

/// Count `values` into `bins` equally wide bins between their minimum and maximum.
///
/// Returns the counts and the `bins + 1` bin edges; bin `i` covers
/// `[edges[i], edges[i + 1])` except for the last bin, which also holds the
/// maximum. Empty input spans `0..1`. Zero bins yields no counts.
pub fn hist(values: &[f64], bins: usize) -> (Vec<usize>, Vec<f64>) {
    let finite = || values.iter().copied().filter(|v| v.is_finite());
    let xmin = finite().reduce(f64::min).unwrap_or(0.0);
    let xmax = finite().reduce(f64::max).unwrap_or(1.0);
    if bins == 0 {
        return (Vec::new(), vec![xmin]);
    }

    let width = (xmax - xmin) / bins as f64;
    let mut counts = vec![0; bins];
    for v in finite() {
        let idx = if width > 0.0 {
            (((v - xmin) / width).floor() as usize).min(bins - 1)
        } else {
            0
        };
        counts[idx] += 1;
    }

    let edges = (0..=bins).map(|i| xmin + i as f64 * width).collect();
    (counts, edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_to_even() {
        assert_eq!(round_half_to_even(0.5), 0.0);
        assert_eq!(round_half_to_even(1.5), 2.0);
        assert_eq!(round_half_to_even(2.5), 2.0);
        assert_eq!(round_half_to_even(-0.5), 0.0);
        assert_eq!(round_half_to_even(-1.5), -2.0);
        assert_eq!(round_half_to_even(2.4), 2.0);
        assert_eq!(round_half_to_even(2.6), 3.0);
        assert!(round_half_to_even(f64::NAN).is_nan());
        assert_eq!(round_half_to_even(f64::INFINITY), f64::INFINITY);
    }

    #[test]
    fn test_hist() {
        let (counts, edges) = hist(&[0.0, 1.0, 2.0, 3.0, 4.0], 4);
        assert_eq!(counts, vec![1, 1, 1, 2]);
        assert_eq!(edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn test_hist_degenerate() {
        let (counts, edges) = hist(&[], 2);
        assert_eq!(counts, vec![0, 0]);
        assert_eq!(edges, vec![0.0, 0.5, 1.0]);

        let (counts, _) = hist(&[3.0, 3.0, 3.0], 3);
        assert_eq!(counts, vec![3, 0, 0]);

        let (counts, _) = hist(&[1.0, f64::NAN, 2.0], 1);
        assert_eq!(counts, vec![2]);
    }
}

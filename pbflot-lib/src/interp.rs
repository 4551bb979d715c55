/// Where `x` falls relative to a strictly increasing key column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bracket {
    /// `x` is at or beyond an edge, or hits a key exactly: use that row as is.
    Row(usize),
    /// `x` lies strictly between `keys[lo]` and `keys[lo + 1]`.
    Between { lo: usize, weight: f64 },
}

/// Locate `x` in `xp`, clamping at both edges.
///
/// `xp` must be non-empty and strictly increasing. NaN resolves to the
/// first row.
pub fn locate(x: f64, xp: &[f64]) -> Bracket {
    let last = xp.len() - 1;
    if x <= xp[0] {
        return Bracket::Row(0);
    }
    if x >= xp[last] {
        return Bracket::Row(last);
    }

    let idx = xp.partition_point(|&v| v < x);
    if idx == 0 {
        return Bracket::Row(0);
    }
    if xp[idx] == x {
        return Bracket::Row(idx);
    }

    let lo = idx - 1;
    // Halved so spans wider than f64::MAX stay finite.
    let span = xp[idx] / 2.0 - xp[lo] / 2.0;
    Bracket::Between {
        lo,
        weight: (x / 2.0 - xp[lo] / 2.0) / span,
    }
}

/// `a + t * (b - a)`.
#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + t * (b - a)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locate_exact_key() {
        let xp = [0.0, 25.0, 50.0];
        assert_eq!(locate(25.0, &xp), Bracket::Row(1));
    }

    #[test]
    fn test_locate_single_point() {
        let xp = [7.5];
        assert_eq!(locate(-3.0, &xp), Bracket::Row(0));
        assert_eq!(locate(7.5, &xp), Bracket::Row(0));
        assert_eq!(locate(100.0, &xp), Bracket::Row(0));
    }

    #[test]
    fn test_locate_nan_is_first_row() {
        let xp = [0.0, 1.0, 2.0];
        assert_eq!(locate(f64::NAN, &xp), Bracket::Row(0));
    }

    #[test]
    fn test_locate_weight() {
        let xp = [0.0, 50.0, 100.0];
        match locate(75.0, &xp) {
            Bracket::Between { lo, weight } => {
                assert_eq!(lo, 1);
                assert!((weight - 0.5).abs() < 1e-12);
            }
            other => panic!("expected interior bracket, got {other:?}"),
        }
    }

    #[test]
    fn test_locate_weight_on_extreme_span() {
        let xp = [-1e308, 1e308];
        match locate(0.0, &xp) {
            Bracket::Between { lo, weight } => {
                assert_eq!(lo, 0);
                assert_eq!(weight, 0.5);
            }
            other => panic!("expected interior bracket, got {other:?}"),
        }
    }

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(10.0, 20.0, 0.0), 10.0);
        assert_eq!(lerp(10.0, 20.0, 0.25), 12.5);
        assert_eq!(lerp(-1.0, -2.0, 1.0), -2.0);
    }
}

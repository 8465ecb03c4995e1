//! Zero-crossing predicate and octave folding.

/// True when the signal crosses zero between two consecutive samples.
///
/// Opposite signs always count. A step away from an exact zero counts too,
/// while a step onto zero does not, so a waveform passing through an exact
/// zero sample is counted once rather than twice.
#[inline]
pub fn is_zero_crossing(last: f32, next: f32) -> bool {
    if last == next {
        return false;
    }

    if last < 0.0 {
        next > 0.0
    } else if last > 0.0 {
        next < 0.0
    } else {
        next != 0.0
    }
}

/// Fold a frequency by octaves towards 1 Hz (the 1V/oct control-voltage
/// reference).
///
/// Frequencies above 1 Hz are halved until they drop to 1 or below, so the
/// result lands in `(0.5, 1.0]`. Sub-hertz values are doubled until they reach
/// at least 1, landing in `[1.0, 2.0)`. Zero, negative and non-finite inputs
/// return 0.
pub fn octave_fold(hertz: f32) -> f32 {
    if !hertz.is_finite() || hertz <= 0.0 {
        return 0.0;
    }

    let mut result = hertz;
    if result < 1.0 {
        while result < 1.0 {
            result *= 2.0;
        }
    } else {
        while result > 1.0 {
            result /= 2.0;
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_changes_are_crossings() {
        assert!(is_zero_crossing(-0.5, 0.5));
        assert!(is_zero_crossing(0.5, -0.5));
        assert!(is_zero_crossing(0.0, 0.1));
        assert!(is_zero_crossing(0.0, -0.1));
    }

    #[test]
    fn same_sign_and_identical_values_are_not_crossings() {
        assert!(!is_zero_crossing(0.2, 0.7));
        assert!(!is_zero_crossing(-0.2, -0.7));
        assert!(!is_zero_crossing(0.0, 0.0));
        assert!(!is_zero_crossing(0.3, 0.3));
        assert!(!is_zero_crossing(0.3, 0.0));
    }

    #[test]
    fn folds_into_unit_octave() {
        assert_eq!(octave_fold(1.0), 1.0);
        assert_eq!(octave_fold(256.0), 1.0);
        assert_eq!(octave_fold(440.0), 440.0 / 512.0);
        assert_eq!(octave_fold(0.25), 1.0);
        assert_eq!(octave_fold(0.3), 1.2);
    }

    #[test]
    fn non_positive_input_folds_to_zero() {
        assert_eq!(octave_fold(0.0), 0.0);
        assert_eq!(octave_fold(-12.0), 0.0);
        assert_eq!(octave_fold(f32::NAN), 0.0);
        assert_eq!(octave_fold(f32::INFINITY), 0.0);
    }
}

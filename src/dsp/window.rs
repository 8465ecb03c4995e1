use std::f32::consts::TAU;

/// Fill `coefficients` with a symmetric Hamming window.
///
/// ```text
/// w[i] = 0.54 - 0.46 * cos(2 * pi * i / (n - 1))
/// ```
///
/// Tapering the block edges keeps a non-integer number of periods from
/// smearing energy across the whole spectrum (leakage). Empty and one-point
/// windows are left flat at 1.0.
pub fn hamming(coefficients: &mut [f32]) {
    let n = coefficients.len();
    if n <= 1 {
        coefficients.fill(1.0);
        return;
    }

    let denom = (n - 1) as f32;
    for (i, c) in coefficients.iter_mut().enumerate() {
        *c = 0.54 - 0.46 * (TAU * i as f32 / denom).cos();
    }
}

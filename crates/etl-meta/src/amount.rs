/// Stroops in one whole unit of an asset.
pub const STROOPS_PER_UNIT: i64 = 10_000_000;

/// Convert an amount in stroops, the smallest unit, to whole units.
///
/// The result is the `f64` nearest to `stroops / 10^7`, rounded once.
pub fn stroops_to_real(stroops: i64) -> f64 {
    let magnitude = stroops.unsigned_abs();
    if magnitude == 0 {
        return 0.0;
    }

    // Left-align the magnitude in 128 bits so the integer quotient carries far
    // more precision than an f64 mantissa.
    let shift = magnitude.leading_zeros() + 63;
    let scaled = u128::from(magnitude) << shift;
    let divisor = STROOPS_PER_UNIT as u128;
    let quotient = scaled / divisor;
    // A nonzero remainder must not round like an exact tie.
    let sticky = u128::from(scaled % divisor != 0);

    let real = (quotient | sticky) as f64 * pow2_neg(shift);
    if stroops < 0 {
        -real
    } else {
        real
    }
}

/// Exactly `2^-exp`, for `exp` well inside the normal exponent range.
fn pow2_neg(exp: u32) -> f64 {
    f64::from_bits(u64::from(1023 - exp) << 52)
}

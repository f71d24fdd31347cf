use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{ log, Env, I256 };

use crate::{ constants::BPS_DENOMINATOR, error::{ BasketResult, ErrorCode }, validate };

/// Returns `floor(amount * numerator / denominator)`.
pub fn get_proportion(
    env: &Env,
    amount: i128,
    numerator: i128,
    denominator: i128
) -> BasketResult<i128> {
    mul_div_floor(env, amount, numerator, denominator)
}

/// `floor(x * y / denominator)`. When `x * y` leaves i128 the product is widened to
/// the host's 256-bit integers, so only a quotient outside i128 fails.
pub fn mul_div_floor(env: &Env, x: i128, y: i128, denominator: i128) -> BasketResult<i128> {
    validate!(env, denominator != 0, ErrorCode::MathError, "proportion with zero denominator")?;

    if let Some(result) = x.fixed_mul_floor(y, denominator) {
        return Ok(result);
    }

    // I256 division truncates, which is the floor only for non-negative operands
    validate!(
        env,
        x >= 0 && y >= 0 && denominator > 0,
        ErrorCode::MathError,
        "Math error: wide proportion with negative operand"
    )?;

    I256::from_i128(env, x)
        .mul(&I256::from_i128(env, y))
        .div(&I256::from_i128(env, denominator))
        .to_i128()
        .ok_or_else(|| {
            log!(env, "Math error: {} * {} / {} overflowed", x, y, denominator);
            ErrorCode::MathError
        })
}

/// Portion of `amount` represented by `bps` parts-per-10000, rounded down.
pub fn bps_of(env: &Env, amount: i128, bps: u32) -> BasketResult<i128> {
    get_proportion(env, amount, bps as i128, BPS_DENOMINATOR as i128)
}

/// Slippage floor for a quoted output: `expected * (10000 - buffer) / 10000`.
pub fn apply_buffer(env: &Env, expected_output: i128, buffer_bps: u32) -> BasketResult<i128> {
    validate!(
        env,
        buffer_bps <= BPS_DENOMINATOR,
        ErrorCode::InvalidBuffer,
        "buffer {} exceeds 10000 bps",
        buffer_bps
    )?;

    bps_of(env, expected_output, BPS_DENOMINATOR - buffer_bps)
}

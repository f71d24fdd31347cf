use num_integer::Integer;
use soroban_sdk::{ log, Env };

use crate::{
    constants::{
        BPS_DENOMINATOR,
        BPS_TO_SCALAR_18,
        MIN_RETENTION_FACTOR,
        MONTH_IN_SECONDS,
        SCALAR_18,
    },
    error::{ BasketResult, ErrorCode },
    math::{ proportion::mul_div_floor, safe_math::SafeMath },
    validate,
};

/// Result of an accrual over whole elapsed months.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Accrual {
    pub months: u64,
    pub fee_shares: i128,
}

/// Whole months between `last_accrued_ts` and `now` and the seconds carried forward.
pub fn months_elapsed(last_accrued_ts: u64, now: u64) -> (u64, u64) {
    now.saturating_sub(last_accrued_ts).div_mod_floor(&MONTH_IN_SECONDS)
}

/// Per-month retention factor `1 - fee` at SCALAR_18.
pub fn retention_factor(env: &Env, monthly_fee_bps: u32) -> BasketResult<i128> {
    validate!(
        env,
        monthly_fee_bps < BPS_DENOMINATOR,
        ErrorCode::FeeTooHigh,
        "monthly fee {} leaves nothing to retain",
        monthly_fee_bps
    )?;

    SCALAR_18.safe_sub((monthly_fee_bps as i128).safe_mul(BPS_TO_SCALAR_18, env)?, env)
}

/// `retention ^ months` at SCALAR_18 by repeated squaring, clamped from below at
/// `MIN_RETENTION_FACTOR`. Every product rounds down and multiplying by a factor `<= 1`
/// never increases the value, so the result is non-increasing in `months`.
pub fn compound_retention(env: &Env, retention: i128, months: u64) -> BasketResult<i128> {
    validate!(
        env,
        retention > 0 && retention <= SCALAR_18,
        ErrorCode::MathError,
        "retention factor {} out of range",
        retention
    )?;

    let mut result = SCALAR_18;
    let mut base = retention;
    let mut exp = months;

    while exp > 0 {
        if exp & 1 == 1 {
            result = fixed_mul(env, result, base)?;
            if result < MIN_RETENTION_FACTOR {
                log!(env, "Retention underflow after {} months, clamping", months);
                return Ok(MIN_RETENTION_FACTOR);
            }
        }
        exp >>= 1;
        if exp > 0 {
            base = fixed_mul(env, base, base)?;
        }
    }

    Ok(result.max(MIN_RETENTION_FACTOR))
}

/// Shares to mint to the fee beneficiary so the post-fee supply equals `supply / r^m`.
///
/// Each pre-existing share then claims exactly `r^m` of what it claimed before.
pub fn calculate_fee_shares(
    env: &Env,
    supply: i128,
    monthly_fee_bps: u32,
    months: u64
) -> BasketResult<i128> {
    if months == 0 || supply == 0 || monthly_fee_bps == 0 {
        return Ok(0);
    }

    let retention = retention_factor(env, monthly_fee_bps)?;
    let compounded = compound_retention(env, retention, months)?;

    let diluted_supply = mul_div_floor(env, supply, SCALAR_18, compounded)?;

    diluted_supply.safe_sub(supply, env)
}

/// Accrues whole months since `last_accrued_ts`. Returns the accrual and the new
/// accrual timestamp, which only advances by whole months.
pub fn accrue(
    env: &Env,
    supply: i128,
    monthly_fee_bps: u32,
    last_accrued_ts: u64,
    now: u64
) -> BasketResult<(Accrual, u64)> {
    let (months, _carried) = months_elapsed(last_accrued_ts, now);
    if months == 0 {
        return Ok((Accrual::default(), last_accrued_ts));
    }

    let fee_shares = calculate_fee_shares(env, supply, monthly_fee_bps, months)?;
    let advanced = months.safe_mul(MONTH_IN_SECONDS, env)?;
    let next_accrued_ts = last_accrued_ts.safe_add(advanced, env)?;

    Ok((Accrual { months, fee_shares }, next_accrued_ts))
}

fn fixed_mul(env: &Env, a: i128, b: i128) -> BasketResult<i128> {
    mul_div_floor(env, a, b, SCALAR_18)
}

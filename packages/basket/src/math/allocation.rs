use soroban_sdk::{ Env, Vec };

use crate::{
    error::{ BasketResult, ErrorCode },
    math::{ proportion::bps_of, safe_math::SafeMath },
    validate,
};

/// Splits `remaining` across `weights` (parts-per-10000).
///
/// Every entry but the last is `floor(remaining * weight / 10000)`; the last entry takes
/// `remaining - sum(previous)` so the truncation dust lands on the final asset and the
/// returned amounts always sum to `remaining`. Weights are not required to sum to 10000,
/// but a split whose leading entries already exceed `remaining` is rejected.
pub fn split_by_weights(env: &Env, remaining: i128, weights: &Vec<u32>) -> BasketResult<Vec<i128>> {
    validate!(env, !weights.is_empty(), ErrorCode::EmptyAssets)?;
    validate!(env, remaining >= 0, ErrorCode::InvalidAmount, "negative split amount {}", remaining)?;

    let last = weights.len() - 1;
    let mut inputs: Vec<i128> = Vec::new(env);
    let mut allocated: i128 = 0;

    for (i, weight) in weights.iter().enumerate() {
        let input = if (i as u32) < last {
            bps_of(env, remaining, weight)?
        } else {
            remaining.safe_sub(allocated, env)?
        };

        validate!(
            env,
            input >= 0,
            ErrorCode::SpendExceedsDeposit,
            "weights allocate {} of {}",
            allocated,
            remaining
        )?;

        allocated = allocated.safe_add(input, env)?;
        inputs.push_back(input);
    }

    Ok(inputs)
}

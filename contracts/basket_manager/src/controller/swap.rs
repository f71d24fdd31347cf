use basket::{
    error::{ BasketResult, ErrorCode },
    interface::ExchangeAdapterClient,
    math::{ allocation::split_by_weights, proportion::apply_buffer, safe_math::SafeMath },
    validate,
};
use soroban_sdk::{ log, vec, Address, Env, Vec };

use crate::{ controller::token, storage::{ BasketParams, Config } };

pub struct SwapOutcome {
    /// Asset amounts credited to the manager, parallel to the basket's assets
    pub received: Vec<i128>,
    /// Base currency handed to the exchange
    pub spent: i128,
}

/// Splits `remaining` base currency across the basket's assets by weight and buys each
/// one through the exchange adapter. The base token itself is held without a swap.
pub fn split_and_swap(
    env: &Env,
    config: &Config,
    params: &BasketParams,
    remaining: i128,
    deadline: u64
) -> BasketResult<SwapOutcome> {
    let inputs = split_by_weights(env, remaining, &params.weights)?;
    let adapter = ExchangeAdapterClient::new(env, &config.exchange_adapter);
    let this = env.current_contract_address();

    let mut received = Vec::new(env);
    let mut spent: i128 = 0;

    for (i, asset) in params.assets.iter().enumerate() {
        let input = inputs.get_unchecked(i as u32);

        if input == 0 {
            received.push_back(0);
            continue;
        }

        if asset == config.base_token {
            received.push_back(input);
            spent = spent.safe_add(input, env)?;
            continue;
        }

        let path = vec![env, config.base_token.clone(), asset.clone()];
        let expected = quote(env, &adapter, input, &path)?;
        let min_out = apply_buffer(env, expected, params.buffer_bps)?;

        token::send(env, &config.base_token, &config.exchange_adapter, input)?;

        let amount_out = match adapter.try_swap(&input, &path, &this, &min_out, &deadline) {
            Ok(Ok(amount_out)) => amount_out,
            _ => {
                log!(env, "Basket Manager: swap into asset {} failed", i as u32);
                return Err(ErrorCode::SwapFailed);
            }
        };
        validate!(
            env,
            amount_out >= min_out,
            ErrorCode::SlippageExceeded,
            "swap returned {} below floor {}",
            amount_out,
            min_out
        )?;

        received.push_back(amount_out);
        spent = spent.safe_add(input, env)?;
    }

    validate!(
        env,
        spent <= remaining,
        ErrorCode::SpendExceedsDeposit,
        "spent {} of {}",
        spent,
        remaining
    )?;

    Ok(SwapOutcome { received, spent })
}

pub fn quote(
    env: &Env,
    adapter: &ExchangeAdapterClient,
    amount_in: i128,
    path: &Vec<Address>
) -> BasketResult<i128> {
    match adapter.try_quote(&amount_in, path) {
        Ok(Ok(amount_out)) => Ok(amount_out),
        _ => {
            log!(env, "Basket Manager: quote for {} failed", amount_in);
            Err(ErrorCode::QuoteFailed)
        }
    }
}

use basket::{
    constants::{ BPS_DENOMINATOR, MAX_BASKET_ASSETS, MAX_BUFFER_BPS, SHARE_DECIMALS },
    error::{ BasketResult, ErrorCode },
    math::{ proportion::bps_of, safe_math::SafeMath },
    validate,
};
use soroban_sdk::{ Address, Env };
use soroban_token_sdk::metadata::TokenMetadata;

use crate::{
    access::ensure_whitelisted,
    controller::{ ledger, swap, token },
    events::BasketEvents,
    guard::{ self, GuardKey },
    ledger::ShareLedger,
    storage::{
        get_config,
        get_registry,
        save_basket,
        save_ledger,
        save_registry,
        BasketConfig,
        BasketParams,
        Config,
    },
};

pub fn validate_creation(
    env: &Env,
    config: &Config,
    params: &BasketParams,
    deadline: u64,
    deposit_amount: i128
) -> BasketResult {
    validate!(
        env,
        deposit_amount >= config.min_creation_amount,
        ErrorCode::InsufficientDeposit,
        "deposit {} below minimum {}",
        deposit_amount,
        config.min_creation_amount
    )?;
    validate!(env, deposit_amount > 0, ErrorCode::InvalidAmount, "deposit must be positive")?;
    validate!(
        env,
        params.buffer_bps > 0 && params.buffer_bps < MAX_BUFFER_BPS,
        ErrorCode::InvalidBuffer,
        "buffer {} outside (0, 5000)",
        params.buffer_bps
    )?;
    validate!(
        env,
        deadline > env.ledger().timestamp(),
        ErrorCode::DeadlineExpired,
        "deadline {} already passed",
        deadline
    )?;
    validate!(env, params.name.len() > 0, ErrorCode::EmptyName)?;
    validate!(env, params.symbol.len() > 0, ErrorCode::EmptySymbol)?;
    validate!(env, params.uri.len() > 0, ErrorCode::EmptyUri)?;
    validate!(env, params.id.len() > 0, ErrorCode::EmptyId)?;
    validate!(env, !params.assets.is_empty(), ErrorCode::EmptyAssets)?;
    validate!(
        env,
        params.assets.len() == params.weights.len(),
        ErrorCode::LengthMismatch,
        "{} assets with {} weights",
        params.assets.len(),
        params.weights.len()
    )?;
    validate!(
        env,
        params.assets.len() <= MAX_BASKET_ASSETS,
        ErrorCode::TooManyAssets,
        "{} assets exceed the limit",
        params.assets.len()
    )?;

    for weight in params.weights.iter() {
        validate!(
            env,
            weight > 0 && weight <= BPS_DENOMINATOR,
            ErrorCode::InvalidWeight,
            "weight {} outside (0, 10000]",
            weight
        )?;
    }

    Ok(())
}

/// Creates a basket: charges the creation fee, buys the constituents, mints the bootstrap
/// supply to `sender` and appends the basket to the registry. Returns the basket id.
pub fn create_basket(
    env: &Env,
    sender: Address,
    params: BasketParams,
    deadline: u64,
    deposit_amount: i128
) -> BasketResult<u32> {
    let config = get_config(env)?;

    ensure_whitelisted(env, &sender, &config)?;
    validate_creation(env, &config, &params, deadline, deposit_amount)?;

    let mut registry = get_registry(env)?;
    let basket_id = registry.len();

    guard::lock(env, GuardKey::Registry)?;
    guard::lock(env, GuardKey::Basket(basket_id))?;

    let fee_amount = bps_of(env, deposit_amount, config.fees.creation_fee_bps)?;
    let remaining = deposit_amount.safe_sub(fee_amount, env)?;

    token::receive(env, &config.base_token, &sender, deposit_amount)?;
    token::send(env, &config.base_token, &config.fees.fee_collector, fee_amount)?;

    let now = env.ledger().timestamp();
    let basket = BasketConfig {
        basket_id,
        share_metadata: TokenMetadata {
            decimal: SHARE_DECIMALS,
            name: params.name.clone(),
            symbol: params.symbol.clone(),
        },
        params,
        creator: sender.clone(),
        created_ts: now,
    };
    let mut share_ledger = ShareLedger::new(
        env,
        basket.params.assets.len(),
        now,
        config.fees.management_fee_bps,
        config.fees.fee_collector.clone()
    );

    save_basket(env, &basket);
    registry.push_back(basket_id);
    save_registry(env, &registry);

    let outcome = swap::split_and_swap(env, &config, &basket.params, remaining, deadline)?;

    // zero while the split hands the dust to the last asset
    let refund = remaining.safe_sub(outcome.spent, env)?;
    if refund > 0 {
        token::send(env, &config.base_token, &sender, refund)?;
        BasketEvents::refund(env, basket_id, sender.clone(), refund);
    }

    ledger::mint(
        env,
        &config,
        basket_id,
        &basket.params.assets,
        &mut share_ledger,
        &sender,
        &outcome.received
    )?;
    save_ledger(env, basket_id, &share_ledger);

    guard::unlock(env, GuardKey::Basket(basket_id));
    guard::unlock(env, GuardKey::Registry);

    BasketEvents::basket_created(
        env,
        basket_id,
        sender,
        basket.params.name,
        basket.params.symbol,
        remaining,
        basket.params.buffer_bps,
        basket.params.id,
        basket.params.description,
        fee_amount
    );

    Ok(basket_id)
}

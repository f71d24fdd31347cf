use basket::{
    error::{ BasketResult, ErrorCode },
    math::{ proportion::bps_of, safe_math::SafeMath },
    validate,
};
use soroban_sdk::{ Address, Env, Vec };

use crate::{
    access::ensure_whitelisted,
    controller::{ ledger, swap, token },
    events::BasketEvents,
    guard::{ with_lock, GuardKey },
    storage::{ get_basket, get_config, get_ledger, read_shares, save_ledger },
};

/// Buys into an existing basket with base currency, splitting and swapping like creation.
pub fn contribute(
    env: &Env,
    sender: Address,
    basket_id: u32,
    amount: i128,
    deadline: u64
) -> BasketResult<i128> {
    let config = get_config(env)?;
    ensure_whitelisted(env, &sender, &config)?;

    validate!(env, amount > 0, ErrorCode::InvalidAmount, "contribution must be positive")?;
    validate!(
        env,
        deadline > env.ledger().timestamp(),
        ErrorCode::DeadlineExpired,
        "deadline {} already passed",
        deadline
    )?;

    let basket = get_basket(env, basket_id)?;

    with_lock(env, GuardKey::Basket(basket_id), || {
        let mut share_ledger = get_ledger(env, basket_id)?;

        let fee_amount = bps_of(env, amount, config.fees.contribution_fee_bps)?;
        let remaining = amount.safe_sub(fee_amount, env)?;

        token::receive(env, &config.base_token, &sender, amount)?;
        token::send(env, &config.base_token, &config.fees.fee_collector, fee_amount)?;

        let outcome = swap::split_and_swap(env, &config, &basket.params, remaining, deadline)?;

        let refund = remaining.safe_sub(outcome.spent, env)?;
        if refund > 0 {
            token::send(env, &config.base_token, &sender, refund)?;
            BasketEvents::refund(env, basket_id, sender.clone(), refund);
        }

        let shares = ledger::mint(
            env,
            &config,
            basket_id,
            &basket.params.assets,
            &mut share_ledger,
            &sender,
            &outcome.received
        )?;
        validate!(env, shares > 0, ErrorCode::InsufficientDeposit, "contribution too small for a share")?;

        save_ledger(env, basket_id, &share_ledger);

        BasketEvents::contribute(env, basket_id, sender.clone(), outcome.received, shares, fee_amount);

        Ok(shares)
    })
}

/// Buys into an existing basket by depositing every constituent directly.
pub fn contribute_in_kind(
    env: &Env,
    sender: Address,
    basket_id: u32,
    amounts: Vec<i128>
) -> BasketResult<i128> {
    let config = get_config(env)?;
    ensure_whitelisted(env, &sender, &config)?;

    let basket = get_basket(env, basket_id)?;
    let assets = &basket.params.assets;

    validate!(
        env,
        amounts.len() == assets.len(),
        ErrorCode::LengthMismatch,
        "{} amounts for {} assets",
        amounts.len(),
        assets.len()
    )?;
    let mut total: i128 = 0;
    for amount in amounts.iter() {
        validate!(env, amount >= 0, ErrorCode::InvalidAmount, "negative contribution")?;
        total = total.safe_add(amount, env)?;
    }
    validate!(env, total > 0, ErrorCode::InvalidAmount, "empty contribution")?;

    with_lock(env, GuardKey::Basket(basket_id), || {
        let mut share_ledger = get_ledger(env, basket_id)?;

        let mut net_amounts = Vec::new(env);
        let mut fee_total: i128 = 0;
        for (i, asset) in assets.iter().enumerate() {
            let amount = amounts.get_unchecked(i as u32);
            let fee_amount = bps_of(env, amount, config.fees.contribution_fee_bps)?;

            token::receive(env, &asset, &sender, amount)?;
            token::send(env, &asset, &config.fees.fee_collector, fee_amount)?;

            net_amounts.push_back(amount.safe_sub(fee_amount, env)?);
            fee_total = fee_total.safe_add(fee_amount, env)?;
        }

        let shares = ledger::mint(
            env,
            &config,
            basket_id,
            assets,
            &mut share_ledger,
            &sender,
            &net_amounts
        )?;
        validate!(env, shares > 0, ErrorCode::InsufficientDeposit, "contribution too small for a share")?;

        save_ledger(env, basket_id, &share_ledger);

        BasketEvents::contribute(env, basket_id, sender.clone(), net_amounts, shares, fee_total);

        Ok(shares)
    })
}

/// Redeems `shares` for the underlying assets. The shares move to the manager first and
/// are burned there. Returns the amounts paid to `sender` after the withdrawal fee.
pub fn withdraw(env: &Env, sender: Address, basket_id: u32, shares: i128) -> BasketResult<Vec<i128>> {
    let config = get_config(env)?;
    ensure_whitelisted(env, &sender, &config)?;

    validate!(env, shares > 0, ErrorCode::InvalidAmount, "withdrawal must be positive")?;
    validate!(
        env,
        shares >= config.min_redemption_shares,
        ErrorCode::BelowMinimumRedemption,
        "{} shares below minimum {}",
        shares,
        config.min_redemption_shares
    )?;

    let basket = get_basket(env, basket_id)?;

    with_lock(env, GuardKey::Basket(basket_id), || {
        let mut share_ledger = get_ledger(env, basket_id)?;

        let balance = read_shares(env, basket_id, &sender);
        validate!(
            env,
            balance >= shares,
            ErrorCode::InsufficientLiquidity,
            "holder has {} shares, asked {}",
            balance,
            shares
        )?;
        ledger::move_shares(env, basket_id, &sender, &env.current_contract_address(), shares)?;

        let released = ledger::burn(env, basket_id, &mut share_ledger, shares)?;
        save_ledger(env, basket_id, &share_ledger);

        let mut paid = Vec::new(env);
        let mut fees = Vec::new(env);
        for (i, asset) in basket.params.assets.iter().enumerate() {
            let amount = released.get_unchecked(i as u32);
            let fee_amount = bps_of(env, amount, config.fees.withdrawal_fee_bps)?;
            let net_amount = amount.safe_sub(fee_amount, env)?;

            token::send(env, &asset, &config.fees.fee_collector, fee_amount)?;
            token::send(env, &asset, &sender, net_amount)?;

            paid.push_back(net_amount);
            fees.push_back(fee_amount);
        }

        BasketEvents::withdraw(env, basket_id, sender.clone(), shares, paid.clone(), fees);

        Ok(paid)
    })
}

pub fn accrue_fees(env: &Env, basket_id: u32) -> BasketResult<i128> {
    get_basket(env, basket_id)?;

    with_lock(env, GuardKey::Basket(basket_id), || {
        let mut share_ledger = get_ledger(env, basket_id)?;
        let fee_shares = ledger::accrue(env, basket_id, &mut share_ledger)?;
        save_ledger(env, basket_id, &share_ledger);
        Ok(fee_shares)
    })
}

pub fn transfer_shares(
    env: &Env,
    from: Address,
    to: Address,
    basket_id: u32,
    amount: i128
) -> BasketResult {
    validate!(env, amount > 0, ErrorCode::InvalidAmount, "transfer must be positive")?;
    get_basket(env, basket_id)?;

    with_lock(env, GuardKey::Basket(basket_id), || {
        ledger::move_shares(env, basket_id, &from, &to, amount)?;
        BasketEvents::shares_transfer(env, basket_id, from.clone(), to.clone(), amount);
        Ok(())
    })
}

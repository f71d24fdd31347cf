use basket::{
    error::{ BasketResult, ErrorCode },
    interface::ExchangeAdapterClient,
    math::safe_math::SafeMath,
    validate,
};
use soroban_sdk::{ vec, Address, Env, Vec };

use crate::{
    controller::swap::quote,
    events::BasketEvents,
    ledger::ShareLedger,
    storage::{ read_shares, write_shares, Config },
};

pub fn credit_shares(env: &Env, basket_id: u32, holder: &Address, amount: i128) -> BasketResult {
    let balance = read_shares(env, basket_id, holder);
    write_shares(env, basket_id, holder, balance.safe_add(amount, env)?);
    Ok(())
}

pub fn debit_shares(env: &Env, basket_id: u32, holder: &Address, amount: i128) -> BasketResult {
    let balance = read_shares(env, basket_id, holder);
    validate!(
        env,
        balance >= amount,
        ErrorCode::InsufficientShares,
        "balance {} below {}",
        balance,
        amount
    )?;
    write_shares(env, basket_id, holder, balance - amount);
    Ok(())
}

pub fn move_shares(
    env: &Env,
    basket_id: u32,
    from: &Address,
    to: &Address,
    amount: i128
) -> BasketResult {
    debit_shares(env, basket_id, from, amount)?;
    credit_shares(env, basket_id, to, amount)
}

/// Runs fee accrual on `ledger` and credits any fee shares to its recipient.
pub fn accrue(env: &Env, basket_id: u32, ledger: &mut ShareLedger) -> BasketResult<i128> {
    let accrual = ledger.accrue(env, env.ledger().timestamp())?;

    if accrual.fee_shares > 0 {
        credit_shares(env, basket_id, &ledger.fee_recipient, accrual.fee_shares)?;
        BasketEvents::fees_accrued(
            env,
            basket_id,
            ledger.fee_recipient.clone(),
            accrual.months,
            accrual.fee_shares,
            ledger.supply
        );
    }

    Ok(accrual.fee_shares)
}

/// Value of `amounts` of `assets` in base currency. The base token counts at face value.
pub fn value_in_base(
    env: &Env,
    config: &Config,
    assets: &Vec<Address>,
    amounts: &Vec<i128>
) -> BasketResult<i128> {
    let adapter = ExchangeAdapterClient::new(env, &config.exchange_adapter);
    let mut total: i128 = 0;

    for (i, asset) in assets.iter().enumerate() {
        let amount = amounts.get(i as u32).unwrap_or(0);
        if amount == 0 {
            continue;
        }

        let value = if asset == config.base_token {
            amount
        } else {
            quote(env, &adapter, amount, &vec![env, asset, config.base_token.clone()])?
        };
        total = total.safe_add(value, env)?;
    }

    Ok(total)
}

/// Accrues, prices the deposit against the pre-mint reserves, then adds `amounts` to the
/// reserves and credits the issued shares to `recipient`.
pub fn mint(
    env: &Env,
    config: &Config,
    basket_id: u32,
    assets: &Vec<Address>,
    ledger: &mut ShareLedger,
    recipient: &Address,
    amounts: &Vec<i128>
) -> BasketResult<i128> {
    validate!(
        env,
        amounts.len() == ledger.reserves.len(),
        ErrorCode::LengthMismatch,
        "mint has {} amounts for {} reserves",
        amounts.len(),
        ledger.reserves.len()
    )?;

    accrue(env, basket_id, ledger)?;

    // an empty ledger issues the bootstrap amount whatever the deposit is worth
    let (deposit_value, reserve_value) = if ledger.supply == 0 {
        (0, 0)
    } else {
        (value_in_base(env, config, assets, amounts)?, value_in_base(env, config, assets, &ledger.reserves)?)
    };

    let shares = ledger.shares_for_deposit(env, deposit_value, reserve_value)?;
    ledger.deposit(env, amounts, shares)?;
    credit_shares(env, basket_id, recipient, shares)?;

    Ok(shares)
}

/// Burns `shares` the manager holds on the basket's behalf and returns the released
/// reserves. Transfers out are left to the caller.
pub fn burn(env: &Env, basket_id: u32, ledger: &mut ShareLedger, shares: i128) -> BasketResult<Vec<i128>> {
    let this = env.current_contract_address();
    let held = read_shares(env, basket_id, &this);
    validate!(
        env,
        shares > 0 && held >= shares,
        ErrorCode::InsufficientLiquidity,
        "burn of {} with {} placed",
        shares,
        held
    )?;

    accrue(env, basket_id, ledger)?;

    let released = ledger.withdraw(env, shares)?;
    write_shares(env, basket_id, &this, held - shares);

    Ok(released)
}

use basket::{
    constants::{ MAX_MANAGEMENT_FEE_BPS, MAX_PLATFORM_FEE_BPS },
    error::{ BasketResult, ErrorCode },
    validate,
};
use soroban_sdk::{ Address, Env };

use crate::{
    access::AdminContext,
    events::BasketEvents,
    guard::{ with_lock, GuardKey },
    storage::{ get_config, save_config, set_whitelisted, PlatformFeeConfig, Role },
};

pub fn validate_fees(env: &Env, fees: &PlatformFeeConfig) -> BasketResult {
    validate!(
        env,
        fees.creation_fee_bps <= MAX_PLATFORM_FEE_BPS,
        ErrorCode::FeeTooHigh,
        "creation fee {} above ceiling",
        fees.creation_fee_bps
    )?;
    validate!(
        env,
        fees.contribution_fee_bps <= MAX_PLATFORM_FEE_BPS,
        ErrorCode::FeeTooHigh,
        "contribution fee {} above ceiling",
        fees.contribution_fee_bps
    )?;
    validate!(
        env,
        fees.withdrawal_fee_bps <= MAX_PLATFORM_FEE_BPS,
        ErrorCode::FeeTooHigh,
        "withdrawal fee {} above ceiling",
        fees.withdrawal_fee_bps
    )?;
    validate!(
        env,
        fees.management_fee_bps <= MAX_MANAGEMENT_FEE_BPS,
        ErrorCode::FeeTooHigh,
        "management fee {} above ceiling",
        fees.management_fee_bps
    )
}

/// New rates apply to later operations. Existing baskets keep the management fee they
/// were created with.
pub fn update_fees(env: &Env, sender: Address, fees: PlatformFeeConfig) -> BasketResult {
    let mut config = get_config(env)?;
    let ctx = AdminContext::authorize(env, sender, Role::FeeManager, &config)?;

    validate_fees(env, &fees)?;
    config.fees = fees.clone();
    save_config(env, &config);

    BasketEvents::fees_updated(env, ctx.sender, fees);

    Ok(())
}

pub fn update_config(
    env: &Env,
    sender: Address,
    exchange_adapter: Option<Address>,
    min_creation_amount: Option<i128>,
    min_redemption_shares: Option<i128>,
    whitelist_only: Option<bool>
) -> BasketResult {
    let mut config = get_config(env)?;
    let ctx = AdminContext::authorize(env, sender, Role::Admin, &config)?;

    if let Some(exchange_adapter) = exchange_adapter {
        config.exchange_adapter = exchange_adapter;
    }

    if let Some(min_creation_amount) = min_creation_amount {
        validate!(env, min_creation_amount >= 0, ErrorCode::InvalidAmount)?;
        config.min_creation_amount = min_creation_amount;
    }

    if let Some(min_redemption_shares) = min_redemption_shares {
        validate!(env, min_redemption_shares >= 0, ErrorCode::InvalidAmount)?;
        config.min_redemption_shares = min_redemption_shares;
    }

    if let Some(whitelist_only) = whitelist_only {
        config.whitelist_only = whitelist_only;
    }

    save_config(env, &config);

    BasketEvents::config_updated(
        env,
        ctx.sender,
        config.exchange_adapter,
        config.min_creation_amount,
        config.min_redemption_shares,
        config.whitelist_only
    );

    Ok(())
}

/// Reassigns `role` to `account`. Only the admin may do this, including handing over the
/// admin role itself.
pub fn update_role(env: &Env, sender: Address, role: Role, account: Address) -> BasketResult {
    let mut config = get_config(env)?;
    AdminContext::authorize(env, sender, Role::Admin, &config)?;

    match role {
        Role::Admin => {
            config.admin = account.clone();
        }
        Role::FeeManager => {
            config.fee_manager = account.clone();
        }
        Role::WhitelistManager => {
            config.whitelist_manager = account.clone();
        }
    }
    save_config(env, &config);

    BasketEvents::role_updated(env, role, account);

    Ok(())
}

pub fn update_whitelist(env: &Env, sender: Address, account: Address, listed: bool) -> BasketResult {
    let config = get_config(env)?;
    AdminContext::authorize(env, sender, Role::WhitelistManager, &config)?;

    with_lock(env, GuardKey::Whitelist, || {
        set_whitelisted(env, &account, listed);
        BasketEvents::whitelist_updated(env, account.clone(), listed);
        Ok(())
    })
}

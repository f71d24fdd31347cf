use basket::{
    constants::{
        BALANCE_BUMP_AMOUNT,
        BALANCE_LIFETIME_THRESHOLD,
        PERSISTENT_BUMP_AMOUNT,
        PERSISTENT_LIFETIME_THRESHOLD,
    },
    error::{ BasketResult, ErrorCode },
};
use soroban_sdk::{ contracttype, log, Address, Env, String, Vec };
use soroban_token_sdk::metadata::TokenMetadata;

use crate::{ guard::GuardKey, ledger::ShareLedger };

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Config,
    Initialized,
    Version,
    Registry,
    Basket(u32),
    Ledger(u32),
    Shares(u32, Address),
    Whitelisted(Address),
    Lock(GuardKey),
}

// ################################################################
//                             Config
// ################################################################

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Role {
    Admin,
    FeeManager,
    WhitelistManager,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PlatformFeeConfig {
    pub creation_fee_bps: u32,
    pub contribution_fee_bps: u32,
    pub withdrawal_fee_bps: u32,
    /// Monthly dilution rate snapshotted into each new basket
    pub management_fee_bps: u32,
    pub fee_collector: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub fee_manager: Address,
    pub whitelist_manager: Address,
    /// Currency deposits are made in and holdings are valued in
    pub base_token: Address,
    pub exchange_adapter: Address,
    pub fees: PlatformFeeConfig,
    pub min_creation_amount: i128,
    pub min_redemption_shares: i128,
    pub whitelist_only: bool,
}

// ################################################################
//                             Baskets
// ################################################################

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasketParams {
    pub name: String,
    pub symbol: String,
    pub assets: Vec<Address>,
    /// Parts-per-10000, parallel to `assets`
    pub weights: Vec<u32>,
    pub uri: String,
    /// Slippage tolerance applied to every creation swap
    pub buffer_bps: u32,
    pub id: String,
    pub description: String,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BasketConfig {
    pub basket_id: u32,
    pub params: BasketParams,
    pub creator: Address,
    pub created_ts: u64,
    pub share_metadata: TokenMetadata,
}

pub fn save_config(env: &Env, config: &Config) {
    env.storage().persistent().set(&DataKey::Config, config);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_config(env: &Env) -> BasketResult<Config> {
    let config = env
        .storage()
        .persistent()
        .get(&DataKey::Config)
        .ok_or_else(|| {
            log!(env, "Basket Manager: config not set");
            ErrorCode::NotInitialized
        })?;

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Config, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(config)
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().get(&DataKey::Initialized).unwrap_or(false)
}

pub fn set_initialized(env: &Env) {
    env.storage().persistent().set(&DataKey::Initialized, &true);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Initialized, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_version(env: &Env) -> u32 {
    env.storage().persistent().get(&DataKey::Version).unwrap_or(0)
}

pub fn save_version(env: &Env, version: u32) {
    env.storage().persistent().set(&DataKey::Version, &version);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Version, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

// ################################################################
//                             Registry
// ################################################################

pub fn has_registry(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Registry)
}

pub fn get_registry(env: &Env) -> BasketResult<Vec<u32>> {
    let registry = env
        .storage()
        .persistent()
        .get(&DataKey::Registry)
        .ok_or_else(|| {
            log!(env, "Basket Manager: registry not found");
            ErrorCode::NotInitialized
        })?;

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Registry, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(registry)
}

pub fn save_registry(env: &Env, registry: &Vec<u32>) {
    env.storage().persistent().set(&DataKey::Registry, registry);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Registry, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn save_basket(env: &Env, basket: &BasketConfig) {
    let key = DataKey::Basket(basket.basket_id);
    env.storage().persistent().set(&key, basket);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_basket(env: &Env, basket_id: u32) -> BasketResult<BasketConfig> {
    let key = DataKey::Basket(basket_id);
    let basket = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or_else(|| {
            log!(env, "Basket Manager: basket {} not found", basket_id);
            ErrorCode::BasketNotFound
        })?;

    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(basket)
}

// ################################################################
//                             Ledgers
// ################################################################

pub fn save_ledger(env: &Env, basket_id: u32, ledger: &ShareLedger) {
    let key = DataKey::Ledger(basket_id);
    env.storage().persistent().set(&key, ledger);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_ledger(env: &Env, basket_id: u32) -> BasketResult<ShareLedger> {
    let key = DataKey::Ledger(basket_id);
    let ledger = env
        .storage()
        .persistent()
        .get(&key)
        .ok_or_else(|| {
            log!(env, "Basket Manager: ledger {} not found", basket_id);
            ErrorCode::BasketNotFound
        })?;

    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(ledger)
}

pub fn read_shares(env: &Env, basket_id: u32, holder: &Address) -> i128 {
    let key = DataKey::Shares(basket_id, holder.clone());
    if let Some(balance) = env.storage().persistent().get::<DataKey, i128>(&key) {
        env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
        balance
    } else {
        0
    }
}

pub fn write_shares(env: &Env, basket_id: u32, holder: &Address, amount: i128) {
    let key = DataKey::Shares(basket_id, holder.clone());
    if amount == 0 {
        env.storage().persistent().remove(&key);
        return;
    }
    env.storage().persistent().set(&key, &amount);
    env.storage().persistent().extend_ttl(&key, BALANCE_LIFETIME_THRESHOLD, BALANCE_BUMP_AMOUNT);
}

// ################################################################
//                             Whitelist
// ################################################################

pub fn is_whitelisted(env: &Env, account: &Address) -> bool {
    let key = DataKey::Whitelisted(account.clone());
    let listed = env.storage().persistent().has(&key);
    if listed {
        env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    listed
}

pub fn set_whitelisted(env: &Env, account: &Address, listed: bool) {
    let key = DataKey::Whitelisted(account.clone());
    if listed {
        env.storage().persistent().set(&key, &true);
        env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    } else {
        env.storage().persistent().remove(&key);
    }
}

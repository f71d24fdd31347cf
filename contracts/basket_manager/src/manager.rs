use basket::error::ErrorCode;
use soroban_sdk::{ Address, BytesN, Env, Vec };

use crate::{
    ledger::ShareLedger,
    storage::{ BasketConfig, BasketParams, Config, PlatformFeeConfig, Role },
};

pub trait BasketManagerTrait {
    /// Sets the platform configuration. The admin starts out holding the fee and
    /// whitelist manager roles.
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        base_token: Address,
        exchange_adapter: Address,
        fees: PlatformFeeConfig,
        min_creation_amount: i128,
        min_redemption_shares: i128
    ) -> Result<(), ErrorCode>;

    // ################################################################
    //                             USER
    // ################################################################

    fn create_basket(
        env: Env,
        sender: Address,
        params: BasketParams,
        deadline: u64,
        deposit_amount: i128
    ) -> Result<u32, ErrorCode>;

    fn contribute(
        env: Env,
        sender: Address,
        basket_id: u32,
        amount: i128,
        deadline: u64
    ) -> Result<i128, ErrorCode>;

    fn contribute_in_kind(
        env: Env,
        sender: Address,
        basket_id: u32,
        amounts: Vec<i128>
    ) -> Result<i128, ErrorCode>;

    fn withdraw(
        env: Env,
        sender: Address,
        basket_id: u32,
        shares: i128
    ) -> Result<Vec<i128>, ErrorCode>;

    fn transfer_shares(
        env: Env,
        from: Address,
        to: Address,
        basket_id: u32,
        amount: i128
    ) -> Result<(), ErrorCode>;

    /// Mints any management fee owed for whole elapsed months. Safe to call repeatedly.
    fn accrue_fees(env: Env, basket_id: u32) -> Result<i128, ErrorCode>;

    // ################################################################
    //                             ADMIN
    // ################################################################

    fn update_fees(env: Env, sender: Address, fees: PlatformFeeConfig) -> Result<(), ErrorCode>;

    fn update_config(
        env: Env,
        sender: Address,
        exchange_adapter: Option<Address>,
        min_creation_amount: Option<i128>,
        min_redemption_shares: Option<i128>,
        whitelist_only: Option<bool>
    ) -> Result<(), ErrorCode>;

    fn update_role(env: Env, sender: Address, role: Role, account: Address) -> Result<(), ErrorCode>;

    fn update_whitelist(
        env: Env,
        sender: Address,
        account: Address,
        listed: bool
    ) -> Result<(), ErrorCode>;

    fn upgrade(env: Env, sender: Address, wasm_hash: BytesN<32>) -> Result<(), ErrorCode>;

    fn migrate(env: Env, sender: Address) -> Result<u32, ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn query_config(env: Env) -> Result<Config, ErrorCode>;

    fn query_baskets(env: Env) -> Result<Vec<u32>, ErrorCode>;

    fn query_basket_count(env: Env) -> Result<u32, ErrorCode>;

    fn query_basket_at(env: Env, index: u32) -> Result<BasketConfig, ErrorCode>;

    fn query_basket(env: Env, basket_id: u32) -> Result<BasketConfig, ErrorCode>;

    fn query_ledger(env: Env, basket_id: u32) -> Result<ShareLedger, ErrorCode>;

    fn query_share_balance(env: Env, basket_id: u32, holder: Address) -> i128;

    /// Assets `shares` would redeem for now, including fees owed but not yet accrued.
    fn query_share_value(env: Env, basket_id: u32, shares: i128) -> Result<Vec<i128>, ErrorCode>;

    /// Reserves valued in base currency through the exchange adapter.
    fn query_total_value(env: Env, basket_id: u32) -> Result<i128, ErrorCode>;

    fn query_is_whitelisted(env: Env, account: Address) -> bool;

    fn version(env: Env) -> u32;
}

use basket::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD },
    error::ErrorCode,
    validate,
};
use soroban_sdk::{ contract, contractimpl, contractmeta, log, Address, BytesN, Env, Vec };

use crate::{
    controller::{ admin, creation, ledger, liquidity },
    events::BasketEvents,
    guard::{ ensure_unlocked, GuardKey },
    ledger::ShareLedger,
    manager::BasketManagerTrait,
    migration::{ self, CURRENT_VERSION },
    storage::{
        get_basket,
        get_config,
        get_ledger,
        get_registry,
        get_version,
        is_initialized,
        is_whitelisted,
        read_shares,
        save_config,
        save_registry,
        save_version,
        set_initialized,
        BasketConfig,
        BasketParams,
        Config,
        PlatformFeeConfig,
        Role,
    },
};

contractmeta!(
    key = "Description",
    val = "Creates multi-asset baskets and keeps their share ledgers"
);

#[contract]
pub struct BasketManager;

#[contractimpl]
impl BasketManagerTrait for BasketManager {
    #[allow(clippy::too_many_arguments)]
    fn initialize(
        env: Env,
        admin: Address,
        base_token: Address,
        exchange_adapter: Address,
        fees: PlatformFeeConfig,
        min_creation_amount: i128,
        min_redemption_shares: i128
    ) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Basket Manager: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }

        admin::validate_fees(&env, &fees)?;
        validate!(&env, min_creation_amount >= 0, ErrorCode::InvalidAmount)?;
        validate!(&env, min_redemption_shares >= 0, ErrorCode::InvalidAmount)?;

        set_initialized(&env);

        save_config(&env, &Config {
            admin: admin.clone(),
            fee_manager: admin.clone(),
            whitelist_manager: admin.clone(),
            base_token: base_token.clone(),
            exchange_adapter: exchange_adapter.clone(),
            fees,
            min_creation_amount,
            min_redemption_shares,
            whitelist_only: false,
        });
        save_registry(&env, &Vec::new(&env));
        save_version(&env, CURRENT_VERSION);

        BasketEvents::initialize(&env, admin, base_token, exchange_adapter);

        Ok(())
    }

    // ################################################################
    //                             USER
    // ################################################################

    fn create_basket(
        env: Env,
        sender: Address,
        params: BasketParams,
        deadline: u64,
        deposit_amount: i128
    ) -> Result<u32, ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        creation::create_basket(&env, sender, params, deadline, deposit_amount)
    }

    fn contribute(
        env: Env,
        sender: Address,
        basket_id: u32,
        amount: i128,
        deadline: u64
    ) -> Result<i128, ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        liquidity::contribute(&env, sender, basket_id, amount, deadline)
    }

    fn contribute_in_kind(
        env: Env,
        sender: Address,
        basket_id: u32,
        amounts: Vec<i128>
    ) -> Result<i128, ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        liquidity::contribute_in_kind(&env, sender, basket_id, amounts)
    }

    fn withdraw(
        env: Env,
        sender: Address,
        basket_id: u32,
        shares: i128
    ) -> Result<Vec<i128>, ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        liquidity::withdraw(&env, sender, basket_id, shares)
    }

    fn transfer_shares(
        env: Env,
        from: Address,
        to: Address,
        basket_id: u32,
        amount: i128
    ) -> Result<(), ErrorCode> {
        from.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        liquidity::transfer_shares(&env, from, to, basket_id, amount)
    }

    fn accrue_fees(env: Env, basket_id: u32) -> Result<i128, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        liquidity::accrue_fees(&env, basket_id)
    }

    // ################################################################
    //                             ADMIN
    // ################################################################

    fn update_fees(env: Env, sender: Address, fees: PlatformFeeConfig) -> Result<(), ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        admin::update_fees(&env, sender, fees)
    }

    fn update_config(
        env: Env,
        sender: Address,
        exchange_adapter: Option<Address>,
        min_creation_amount: Option<i128>,
        min_redemption_shares: Option<i128>,
        whitelist_only: Option<bool>
    ) -> Result<(), ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        admin::update_config(
            &env,
            sender,
            exchange_adapter,
            min_creation_amount,
            min_redemption_shares,
            whitelist_only
        )
    }

    fn update_role(env: Env, sender: Address, role: Role, account: Address) -> Result<(), ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        admin::update_role(&env, sender, role, account)
    }

    fn update_whitelist(
        env: Env,
        sender: Address,
        account: Address,
        listed: bool
    ) -> Result<(), ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        admin::update_whitelist(&env, sender, account, listed)
    }

    fn upgrade(env: Env, sender: Address, wasm_hash: BytesN<32>) -> Result<(), ErrorCode> {
        migration::upgrade(&env, sender, wasm_hash)
    }

    fn migrate(env: Env, sender: Address) -> Result<u32, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        migration::migrate(&env, sender)
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn query_config(env: Env) -> Result<Config, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_config(&env)
    }

    fn query_baskets(env: Env) -> Result<Vec<u32>, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_registry(&env)
    }

    fn query_basket_count(env: Env) -> Result<u32, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        Ok(get_registry(&env)?.len())
    }

    fn query_basket_at(env: Env, index: u32) -> Result<BasketConfig, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let basket_id = get_registry(&env)?
            .get(index)
            .ok_or_else(|| {
                log!(&env, "Basket Manager: no basket at position {}", index);
                ErrorCode::BasketNotFound
            })?;

        get_basket(&env, basket_id)
    }

    fn query_basket(env: Env, basket_id: u32) -> Result<BasketConfig, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_basket(&env, basket_id)
    }

    fn query_ledger(env: Env, basket_id: u32) -> Result<ShareLedger, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_ledger(&env, basket_id)
    }

    fn query_share_balance(env: Env, basket_id: u32, holder: Address) -> i128 {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        read_shares(&env, basket_id, &holder)
    }

    fn query_share_value(env: Env, basket_id: u32, shares: i128) -> Result<Vec<i128>, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ensure_unlocked(&env, GuardKey::Basket(basket_id))?;

        // pending dilution is applied to a copy only
        let mut share_ledger = get_ledger(&env, basket_id)?;
        share_ledger.accrue(&env, env.ledger().timestamp())?;

        share_ledger.value_of_shares(&env, shares)
    }

    fn query_total_value(env: Env, basket_id: u32) -> Result<i128, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        ensure_unlocked(&env, GuardKey::Basket(basket_id))?;

        let config = get_config(&env)?;
        let basket = get_basket(&env, basket_id)?;
        let share_ledger = get_ledger(&env, basket_id)?;

        ledger::value_in_base(&env, &config, &basket.params.assets, &share_ledger.reserves)
    }

    fn query_is_whitelisted(env: Env, account: Address) -> bool {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        is_whitelisted(&env, &account)
    }

    fn version(env: Env) -> u32 {
        get_version(&env)
    }
}

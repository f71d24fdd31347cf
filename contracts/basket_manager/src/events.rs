use soroban_sdk::{ Address, BytesN, Env, String, Symbol, Vec };

use crate::storage::{ PlatformFeeConfig, Role };

pub struct BasketEvents {}

impl BasketEvents {
    /// Emitted once when the manager is initialized
    ///
    /// - topics - `["initialize", admin: Address]`
    /// - data - `[base_token: Address, exchange_adapter: Address]`
    pub fn initialize(env: &Env, admin: Address, base_token: Address, exchange_adapter: Address) {
        let topics = (Symbol::new(env, "initialize"), admin);
        env.events().publish(topics, (base_token, exchange_adapter));
    }

    /// Emitted when a basket is created and its bootstrap shares are minted
    ///
    /// - topics - `["basket_created", basket_id: u32, creator: Address]`
    /// - data - `[name: String, symbol: String, net_amount: i128, buffer_bps: u32, id: String, description: String, fee_amount: i128]`
    #[allow(clippy::too_many_arguments)]
    pub fn basket_created(
        env: &Env,
        basket_id: u32,
        creator: Address,
        name: String,
        symbol: String,
        net_amount: i128,
        buffer_bps: u32,
        id: String,
        description: String,
        fee_amount: i128
    ) {
        let topics = (Symbol::new(env, "basket_created"), basket_id, creator);
        env.events().publish(topics, (
            name,
            symbol,
            net_amount,
            buffer_bps,
            id,
            description,
            fee_amount,
        ));
    }

    /// Emitted when shares are minted against new reserves
    ///
    /// - topics - `["contribute", basket_id: u32, recipient: Address]`
    /// - data - `[amounts: Vec<i128>, shares: i128, fee_amount: i128]`
    pub fn contribute(
        env: &Env,
        basket_id: u32,
        recipient: Address,
        amounts: Vec<i128>,
        shares: i128,
        fee_amount: i128
    ) {
        let topics = (Symbol::new(env, "contribute"), basket_id, recipient);
        env.events().publish(topics, (amounts, shares, fee_amount));
    }

    /// Emitted when shares are burned for their reserves
    ///
    /// - topics - `["withdraw", basket_id: u32, recipient: Address]`
    /// - data - `[shares: i128, released: Vec<i128>, fees: Vec<i128>]`
    pub fn withdraw(
        env: &Env,
        basket_id: u32,
        recipient: Address,
        shares: i128,
        released: Vec<i128>,
        fees: Vec<i128>
    ) {
        let topics = (Symbol::new(env, "withdraw"), basket_id, recipient);
        env.events().publish(topics, (shares, released, fees));
    }

    /// Emitted when management fee shares are minted
    ///
    /// - topics - `["fees_accrued", basket_id: u32, recipient: Address]`
    /// - data - `[months: u64, fee_shares: i128, supply: i128]`
    pub fn fees_accrued(
        env: &Env,
        basket_id: u32,
        recipient: Address,
        months: u64,
        fee_shares: i128,
        supply: i128
    ) {
        let topics = (Symbol::new(env, "fees_accrued"), basket_id, recipient);
        env.events().publish(topics, (months, fee_shares, supply));
    }

    /// Emitted when unspent base currency is returned after the creation or contribution swaps
    ///
    /// - topics - `["refund", basket_id: u32, recipient: Address]`
    /// - data - `[amount: i128]`
    pub fn refund(env: &Env, basket_id: u32, recipient: Address, amount: i128) {
        let topics = (Symbol::new(env, "refund"), basket_id, recipient);
        env.events().publish(topics, amount);
    }

    /// - topics - `["shares_transfer", basket_id: u32, from: Address, to: Address]`
    /// - data - `[amount: i128]`
    pub fn shares_transfer(env: &Env, basket_id: u32, from: Address, to: Address, amount: i128) {
        let topics = (Symbol::new(env, "shares_transfer"), basket_id, from, to);
        env.events().publish(topics, amount);
    }

    /// - topics - `["fees_updated", sender: Address]`
    /// - data - `[fees: PlatformFeeConfig]`
    pub fn fees_updated(env: &Env, sender: Address, fees: PlatformFeeConfig) {
        let topics = (Symbol::new(env, "fees_updated"), sender);
        env.events().publish(topics, fees);
    }

    /// - topics - `["config_updated", sender: Address]`
    /// - data - `[exchange_adapter: Address, min_creation_amount: i128, min_redemption_shares: i128, whitelist_only: bool]`
    pub fn config_updated(
        env: &Env,
        sender: Address,
        exchange_adapter: Address,
        min_creation_amount: i128,
        min_redemption_shares: i128,
        whitelist_only: bool
    ) {
        let topics = (Symbol::new(env, "config_updated"), sender);
        env.events().publish(topics, (
            exchange_adapter,
            min_creation_amount,
            min_redemption_shares,
            whitelist_only,
        ));
    }

    /// - topics - `["role_updated", role: Role]`
    /// - data - `[account: Address]`
    pub fn role_updated(env: &Env, role: Role, account: Address) {
        let topics = (Symbol::new(env, "role_updated"), role);
        env.events().publish(topics, account);
    }

    /// - topics - `["whitelist_updated", account: Address]`
    /// - data - `[listed: bool]`
    pub fn whitelist_updated(env: &Env, account: Address, listed: bool) {
        let topics = (Symbol::new(env, "whitelist_updated"), account);
        env.events().publish(topics, listed);
    }

    /// - topics - `["upgraded"]`
    /// - data - `[wasm_hash: BytesN<32>]`
    pub fn upgraded(env: &Env, wasm_hash: BytesN<32>) {
        let topics = (Symbol::new(env, "upgraded"),);
        env.events().publish(topics, wasm_hash);
    }

    /// - topics - `["migrated"]`
    /// - data - `[from_version: u32, to_version: u32]`
    pub fn migrated(env: &Env, from_version: u32, to_version: u32) {
        let topics = (Symbol::new(env, "migrated"),);
        env.events().publish(topics, (from_version, to_version));
    }
}

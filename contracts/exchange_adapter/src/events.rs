use soroban_sdk::{ Address, Env, Symbol };

pub struct ExchangeEvents {}

impl ExchangeEvents {
    /// Emitted once when the venue is initialized
    ///
    /// - topics - `["initialize"]`
    /// - data - `[admin: Address]`
    pub fn initialize(env: &Env, admin: Address) {
        let topics = (Symbol::new(env, "initialize"),);
        env.events().publish(topics, admin);
    }

    /// Emitted when the admin sets a pair price
    ///
    /// - topics - `["rate_updated", from: Address, to: Address]`
    /// - data - `[rate: i128]`
    pub fn rate_updated(env: &Env, from: Address, to: Address, rate: i128) {
        let topics = (Symbol::new(env, "rate_updated"), from, to);
        env.events().publish(topics, rate);
    }

    /// - topics - `["admin_updated"]`
    /// - data - `[old: Address, new: Address]`
    pub fn admin_updated(env: &Env, old: Address, new: Address) {
        let topics = (Symbol::new(env, "admin_updated"),);
        env.events().publish(topics, (old, new));
    }

    /// Emitted on every executed swap
    ///
    /// - topics - `["swap", token_in: Address, token_out: Address]`
    /// - data - `[recipient: Address, amount_in: i128, amount_out: i128]`
    pub fn swap(
        env: &Env,
        token_in: Address,
        token_out: Address,
        recipient: Address,
        amount_in: i128,
        amount_out: i128
    ) {
        let topics = (Symbol::new(env, "swap"), token_in, token_out);
        env.events().publish(topics, (recipient, amount_in, amount_out));
    }
}

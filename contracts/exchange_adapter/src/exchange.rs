use basket::error::ErrorCode;
use soroban_sdk::{ Address, Env };

/// Administration of the fixed-rate venue. Pricing goes through
/// `basket::interface::ExchangeAdapterInterface`.
pub trait FixedRateExchangeTrait {
    fn initialize(env: Env, admin: Address) -> Result<(), ErrorCode>;

    /// Sets the price of one unit of `from` in units of `to`, scaled by 10^7.
    fn set_rate(env: Env, sender: Address, from: Address, to: Address, rate: i128) -> Result<(), ErrorCode>;

    fn update_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), ErrorCode>;

    // ################################################################
    //                             Queries
    // ################################################################

    fn query_rate(env: Env, from: Address, to: Address) -> Option<i128>;

    fn query_admin(env: Env) -> Result<Address, ErrorCode>;
}

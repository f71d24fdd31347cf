use basket::{
    constants::{ INSTANCE_BUMP_AMOUNT, INSTANCE_LIFETIME_THRESHOLD, SCALAR_7 },
    error::{ BasketResult, ErrorCode },
    interface::ExchangeAdapterInterface,
    validate,
};
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::{ contract, contractimpl, contractmeta, log, token, Address, Env, Vec };

use crate::{
    events::ExchangeEvents,
    exchange::FixedRateExchangeTrait,
    storage::{ get_admin, get_rate, is_initialized, save_admin, save_rate },
};

contractmeta!(
    key = "Description",
    val = "Fixed-rate exchange adapter used to fill basket swaps"
);

#[contract]
pub struct FixedRateExchange;

#[contractimpl]
impl FixedRateExchangeTrait for FixedRateExchange {
    fn initialize(env: Env, admin: Address) -> Result<(), ErrorCode> {
        if is_initialized(&env) {
            log!(&env, "Exchange: Initialize: initializing contract twice is not allowed");
            return Err(ErrorCode::AlreadyInitialized);
        }

        save_admin(&env, &admin);

        ExchangeEvents::initialize(&env, admin);

        Ok(())
    }

    fn set_rate(
        env: Env,
        sender: Address,
        from: Address,
        to: Address,
        rate: i128
    ) -> Result<(), ErrorCode> {
        sender.require_auth();
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        is_admin(&env, &sender)?;
        validate!(&env, rate > 0, ErrorCode::InvalidAmount, "rate must be positive")?;

        save_rate(&env, &from, &to, rate);

        ExchangeEvents::rate_updated(&env, from, to, rate);

        Ok(())
    }

    fn update_admin(env: Env, sender: Address, new_admin: Address) -> Result<(), ErrorCode> {
        sender.require_auth();

        is_admin(&env, &sender)?;
        save_admin(&env, &new_admin);

        ExchangeEvents::admin_updated(&env, sender, new_admin);

        Ok(())
    }

    // ################################################################
    //                             Queries
    // ################################################################

    fn query_rate(env: Env, from: Address, to: Address) -> Option<i128> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        get_rate(&env, &from, &to)
    }

    fn query_admin(env: Env) -> Result<Address, ErrorCode> {
        get_admin(&env)
    }
}

#[contractimpl]
impl ExchangeAdapterInterface for FixedRateExchange {
    fn quote(env: Env, amount_in: i128, path: Vec<Address>) -> Result<i128, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
        quote_path(&env, amount_in, &path)
    }

    fn swap(
        env: Env,
        amount_in: i128,
        path: Vec<Address>,
        recipient: Address,
        min_out: i128,
        deadline: u64
    ) -> Result<i128, ErrorCode> {
        env.storage().instance().extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);

        let now = env.ledger().timestamp();
        validate!(
            &env,
            now <= deadline,
            ErrorCode::DeadlineExpired,
            "Exchange: swap deadline {} passed at {}",
            deadline,
            now
        )?;
        validate!(&env, amount_in > 0, ErrorCode::InvalidAmount, "swap amount must be positive")?;

        let amount_out = quote_path(&env, amount_in, &path)?;
        validate!(
            &env,
            amount_out >= min_out,
            ErrorCode::SlippageExceeded,
            "Exchange: output {} below minimum {}",
            amount_out,
            min_out
        )?;

        // path is validated by quote_path
        let token_in = path.first_unchecked();
        let token_out = path.last_unchecked();

        if amount_out > 0 {
            let paid = token::Client
                ::new(&env, &token_out)
                .try_transfer(&env.current_contract_address(), &recipient, &amount_out);
            if !matches!(paid, Ok(Ok(()))) {
                log!(&env, "Exchange: not enough liquidity to pay {}", amount_out);
                return Err(ErrorCode::InsufficientLiquidity);
            }
        }

        ExchangeEvents::swap(&env, token_in, token_out, recipient, amount_in, amount_out);

        Ok(amount_out)
    }
}

fn is_admin(env: &Env, sender: &Address) -> BasketResult {
    let admin = get_admin(env)?;
    validate!(env, admin == *sender, ErrorCode::NotAuthorized, "Exchange: sender is not the admin")
}

/// Output of `amount_in` carried across every hop of `path`, rounding down at each hop.
fn quote_path(env: &Env, amount_in: i128, path: &Vec<Address>) -> BasketResult<i128> {
    validate!(env, path.len() >= 2, ErrorCode::InvalidPath, "Exchange: path needs two tokens")?;
    validate!(env, amount_in >= 0, ErrorCode::InvalidAmount, "Exchange: negative amount")?;

    let mut amount = amount_in;
    for i in 1..path.len() {
        let from = path.get_unchecked(i - 1);
        let to = path.get_unchecked(i);

        let rate = get_rate(env, &from, &to).ok_or_else(|| {
            log!(env, "Exchange: no rate for hop {}", i);
            ErrorCode::RateNotSet
        })?;

        amount = amount.fixed_mul_floor(rate, SCALAR_7).ok_or_else(|| {
            log!(env, "Exchange: quote overflow at hop {}", i);
            ErrorCode::MathError
        })?;
    }

    Ok(amount)
}

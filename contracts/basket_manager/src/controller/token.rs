use basket::{ error::{ BasketResult, ErrorCode }, validate };
use soroban_sdk::{ log, token, Address, Env };

/// Moves `amount` of `token_address` from `from` to `to`. Zero amounts are skipped.
pub fn transfer(
    env: &Env,
    token_address: &Address,
    from: &Address,
    to: &Address,
    amount: i128
) -> BasketResult {
    validate!(env, amount >= 0, ErrorCode::InvalidAmount, "negative transfer amount")?;
    if amount == 0 {
        return Ok(());
    }

    match token::Client::new(env, token_address).try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "Basket Manager: transfer of {} failed", amount);
            Err(ErrorCode::TransferFailed)
        }
    }
}

/// Pulls `amount` from `from` into the manager.
pub fn receive(env: &Env, token_address: &Address, from: &Address, amount: i128) -> BasketResult {
    transfer(env, token_address, from, &env.current_contract_address(), amount)
}

/// Pays `amount` held by the manager to `to`.
pub fn send(env: &Env, token_address: &Address, to: &Address, amount: i128) -> BasketResult {
    transfer(env, token_address, &env.current_contract_address(), to, amount)
}

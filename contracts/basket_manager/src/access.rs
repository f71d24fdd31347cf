use basket::error::{ BasketResult, ErrorCode };
use soroban_sdk::{ log, Address, Env };

use crate::storage::{ is_whitelisted, Config, Role };

/// Proof that `sender` authorized the call and holds the requested role. Administrative setters take
/// one instead of reading ambient caller state.
pub struct AdminContext {
    pub sender: Address,
}

impl AdminContext {
    pub fn authorize(env: &Env, sender: Address, role: Role, config: &Config) -> BasketResult<Self> {
        sender.require_auth();

        if !has_role(&sender, role, config) {
            log!(env, "Basket Manager: sender lacks role {}", role);
            return Err(ErrorCode::NotAuthorized);
        }

        Ok(AdminContext { sender })
    }
}

/// The admin holds every role.
pub fn has_role(account: &Address, role: Role, config: &Config) -> bool {
    if *account == config.admin {
        return true;
    }

    match role {
        Role::Admin => false,
        Role::FeeManager => *account == config.fee_manager,
        Role::WhitelistManager => *account == config.whitelist_manager,
    }
}

/// Gate for user-facing operations while the whitelist-only mode is on.
pub fn ensure_whitelisted(env: &Env, account: &Address, config: &Config) -> BasketResult {
    if config.whitelist_only && !is_whitelisted(env, account) {
        log!(env, "Basket Manager: {} is not whitelisted", account.clone());
        return Err(ErrorCode::NotWhitelisted);
    }
    Ok(())
}

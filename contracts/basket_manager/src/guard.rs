use basket::error::{ BasketResult, ErrorCode };
use soroban_sdk::{ contracttype, log, Env };

use crate::storage::DataKey;

/// Scope a mutating operation holds exclusively while it runs.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GuardKey {
    /// Basket list appends
    Registry,
    /// Whitelist membership writes
    Whitelist,
    /// One basket's ledger
    Basket(u32),
}

pub fn is_locked(env: &Env, key: GuardKey) -> bool {
    env.storage().instance().get::<DataKey, bool>(&DataKey::Lock(key)).unwrap_or(false)
}

/// Fails with `ReentrantCall` while `key` is held, for reads that must not observe a
/// ledger mid-update.
pub fn ensure_unlocked(env: &Env, key: GuardKey) -> BasketResult {
    if is_locked(env, key) {
        log!(env, "Basket Manager: reentrant call on {}", key);
        return Err(ErrorCode::ReentrantCall);
    }
    Ok(())
}

pub fn lock(env: &Env, key: GuardKey) -> BasketResult {
    ensure_unlocked(env, key)?;
    env.storage().instance().set(&DataKey::Lock(key), &true);
    Ok(())
}

pub fn unlock(env: &Env, key: GuardKey) {
    env.storage().instance().remove(&DataKey::Lock(key));
}

/// Runs `f` holding `key`. An `Err` aborts the invocation and the host discards every
/// write made under the lock, the lock itself included.
pub fn with_lock<T>(env: &Env, key: GuardKey, f: impl FnOnce() -> BasketResult<T>) -> BasketResult<T> {
    lock(env, key)?;
    let result = f()?;
    unlock(env, key);
    Ok(result)
}

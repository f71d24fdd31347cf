use basket::{ error::{ BasketResult, ErrorCode }, validate };
use soroban_sdk::{ Address, BytesN, Env, Vec };

use crate::{
    access::AdminContext,
    events::BasketEvents,
    storage::{ get_config, get_version, has_registry, save_registry, save_version, Role },
};

/// Storage layout version written by this build.
pub const CURRENT_VERSION: u32 = 1;

/// Replaces the contract code in place. Storage is kept, so a layout change must be
/// followed by `migrate`.
pub fn upgrade(env: &Env, sender: Address, wasm_hash: BytesN<32>) -> BasketResult {
    let config = get_config(env)?;
    AdminContext::authorize(env, sender, Role::Admin, &config)?;

    env.deployer().update_current_contract_wasm(wasm_hash.clone());

    BasketEvents::upgraded(env, wasm_hash);

    Ok(())
}

/// Brings stored state from the recorded version up to `CURRENT_VERSION`, one step at a
/// time. Returns the new version.
pub fn migrate(env: &Env, sender: Address) -> BasketResult<u32> {
    let config = get_config(env)?;
    AdminContext::authorize(env, sender, Role::Admin, &config)?;

    let from_version = get_version(env);
    validate!(
        env,
        from_version < CURRENT_VERSION,
        ErrorCode::AlreadyMigrated,
        "storage already at version {}",
        from_version
    )?;

    // 0 -> 1: the registry became an explicit record
    if from_version < 1 && !has_registry(env) {
        save_registry(env, &Vec::new(env));
    }

    save_version(env, CURRENT_VERSION);

    BasketEvents::migrated(env, from_version, CURRENT_VERSION);

    Ok(CURRENT_VERSION)
}

use basket::{
    constants::{ PERSISTENT_BUMP_AMOUNT, PERSISTENT_LIFETIME_THRESHOLD },
    error::{ BasketResult, ErrorCode },
};
use soroban_sdk::{ contracttype, log, Address, Env };

#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    Admin,
    Rate(Address, Address),
}

pub fn is_initialized(env: &Env) -> bool {
    env.storage().persistent().has(&DataKey::Admin)
}

pub fn save_admin(env: &Env, admin: &Address) {
    env.storage().persistent().set(&DataKey::Admin, admin);
    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Admin, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_admin(env: &Env) -> BasketResult<Address> {
    let admin = env
        .storage()
        .persistent()
        .get(&DataKey::Admin)
        .ok_or_else(|| {
            log!(env, "Exchange: admin not set");
            ErrorCode::NotAuthorized
        })?;

    env.storage()
        .persistent()
        .extend_ttl(&DataKey::Admin, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);

    Ok(admin)
}

pub fn save_rate(env: &Env, from: &Address, to: &Address, rate: i128) {
    let key = DataKey::Rate(from.clone(), to.clone());
    env.storage().persistent().set(&key, &rate);
    env.storage().persistent().extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
}

pub fn get_rate(env: &Env, from: &Address, to: &Address) -> Option<i128> {
    let key = DataKey::Rate(from.clone(), to.clone());
    let rate = env.storage().persistent().get::<DataKey, i128>(&key);
    if rate.is_some() {
        env.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_LIFETIME_THRESHOLD, PERSISTENT_BUMP_AMOUNT);
    }
    rate
}

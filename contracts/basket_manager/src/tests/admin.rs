use basket::error::ErrorCode;
use pretty_assertions::assert_eq;
use soroban_sdk::{
    testutils::{ Address as _, Events },
    vec,
    Address,
    BytesN,
    IntoVal,
    Symbol,
    Vec,
};

use super::setup::{ default_fees, Fixture, MIN_CREATION_AMOUNT };
use crate::{
    contract::{ BasketManager, BasketManagerClient },
    migration::CURRENT_VERSION,
    storage::{ Config, DataKey, Role },
};

#[test]
fn initialize_stores_config() {
    let fixture = Fixture::new();

    assert_eq!(
        fixture.manager.query_config(),
        Config {
            admin: fixture.admin.clone(),
            fee_manager: fixture.admin.clone(),
            whitelist_manager: fixture.admin.clone(),
            base_token: fixture.base.address.clone(),
            exchange_adapter: fixture.exchange.address.clone(),
            fees: default_fees(&fixture.fee_collector),
            min_creation_amount: MIN_CREATION_AMOUNT,
            min_redemption_shares: 1,
            whitelist_only: false,
        }
    );
    assert_eq!(fixture.manager.query_baskets(), Vec::new(&fixture.env));
    assert_eq!(fixture.manager.version(), CURRENT_VERSION);
}

#[test]
fn initialize_twice_fails() {
    let fixture = Fixture::new();

    assert_eq!(
        fixture.manager.try_initialize(
            &fixture.admin,
            &fixture.base.address,
            &fixture.exchange.address,
            &default_fees(&fixture.fee_collector),
            &0,
            &0
        ),
        Err(Ok(ErrorCode::AlreadyInitialized))
    );
}

#[test]
fn initialize_rejects_fees_above_ceiling() {
    let fixture = Fixture::new();
    let env = &fixture.env;
    let manager = BasketManagerClient::new(env, &env.register(BasketManager, ()));

    let mut fees = default_fees(&fixture.fee_collector);
    fees.creation_fee_bps = 101;

    assert_eq!(
        manager.try_initialize(
            &fixture.admin,
            &fixture.base.address,
            &fixture.exchange.address,
            &fees,
            &0,
            &0
        ),
        Err(Ok(ErrorCode::FeeTooHigh))
    );
    assert_eq!(manager.try_query_config(), Err(Ok(ErrorCode::NotInitialized)));
}

#[test]
fn fee_updates_respect_roles_and_ceilings() {
    let fixture = Fixture::new();
    let manager = &fixture.manager;
    let fee_manager = Address::generate(&fixture.env);
    let mut fees = default_fees(&fixture.fee_collector);

    assert_eq!(manager.try_update_fees(&fee_manager, &fees), Err(Ok(ErrorCode::NotAuthorized)));

    manager.update_role(&fixture.admin, &Role::FeeManager, &fee_manager);

    fees.withdrawal_fee_bps = 100;
    manager.update_fees(&fee_manager, &fees);
    assert_eq!(manager.query_config().fees.withdrawal_fee_bps, 100);

    fees.contribution_fee_bps = 101;
    assert_eq!(manager.try_update_fees(&fee_manager, &fees), Err(Ok(ErrorCode::FeeTooHigh)));

    fees.contribution_fee_bps = 0;
    fees.management_fee_bps = 51;
    assert_eq!(manager.try_update_fees(&fee_manager, &fees), Err(Ok(ErrorCode::FeeTooHigh)));

    // fee manager cannot touch anything else
    assert_eq!(
        manager.try_update_config(&fee_manager, &None, &Some(0), &None, &None),
        Err(Ok(ErrorCode::NotAuthorized))
    );
}

#[test]
fn update_config_sets_only_given_fields() {
    let fixture = Fixture::new();
    let manager = &fixture.manager;
    let new_exchange = Address::generate(&fixture.env);

    manager.update_config(&fixture.admin, &Some(new_exchange.clone()), &Some(5), &None, &None);

    let env = &fixture.env;
    let published = env.events().all().last().unwrap();
    assert_eq!(
        vec![env, published],
        vec![
            env,
            (
                manager.address.clone(),
                (Symbol::new(env, "config_updated"), fixture.admin.clone()).into_val(env),
                (new_exchange.clone(), 5_i128, 1_i128, false).into_val(env),
            )
        ]
    );

    let config = manager.query_config();
    assert_eq!(config.exchange_adapter, new_exchange);
    assert_eq!(config.min_creation_amount, 5);
    assert_eq!(config.min_redemption_shares, 1);
    assert!(!config.whitelist_only);

    assert_eq!(
        manager.try_update_config(&fixture.admin, &None, &Some(-1), &None, &None),
        Err(Ok(ErrorCode::InvalidAmount))
    );
}

#[test]
fn admin_handover() {
    let fixture = Fixture::new();
    let manager = &fixture.manager;
    let new_admin = Address::generate(&fixture.env);

    assert_eq!(
        manager.try_update_role(&new_admin, &Role::Admin, &new_admin),
        Err(Ok(ErrorCode::NotAuthorized))
    );

    manager.update_role(&fixture.admin, &Role::Admin, &new_admin);

    assert_eq!(manager.query_config().admin, new_admin);
    assert_eq!(
        manager.try_update_config(&fixture.admin, &None, &None, &None, &Some(true)),
        Err(Ok(ErrorCode::NotAuthorized))
    );
    manager.update_config(&new_admin, &None, &None, &None, &Some(true));
    assert!(manager.query_config().whitelist_only);
}

#[test]
fn whitelist_manager_edits_whitelist() {
    let fixture = Fixture::new();
    let manager = &fixture.manager;
    let env = &fixture.env;
    let whitelist_manager = Address::generate(env);
    let account = Address::generate(env);

    assert_eq!(
        manager.try_update_whitelist(&whitelist_manager, &account, &true),
        Err(Ok(ErrorCode::NotAuthorized))
    );

    manager.update_role(&fixture.admin, &Role::WhitelistManager, &whitelist_manager);
    manager.update_whitelist(&whitelist_manager, &account, &true);
    assert!(manager.query_is_whitelisted(&account));

    manager.update_whitelist(&whitelist_manager, &account, &false);
    assert!(!manager.query_is_whitelisted(&account));
}

#[test]
fn migrate_is_refused_when_current() {
    let fixture = Fixture::new();

    assert_eq!(fixture.manager.try_migrate(&fixture.admin), Err(Ok(ErrorCode::AlreadyMigrated)));
}

#[test]
fn migrate_from_unversioned_storage() {
    let fixture = Fixture::new();
    let env = &fixture.env;
    let manager = &fixture.manager;

    env.as_contract(&manager.address, || {
        env.storage().persistent().remove(&DataKey::Version);
        env.storage().persistent().remove(&DataKey::Registry);
    });
    assert_eq!(manager.version(), 0);
    assert_eq!(manager.try_query_baskets(), Err(Ok(ErrorCode::NotInitialized)));

    let stranger = Address::generate(env);
    assert_eq!(manager.try_migrate(&stranger), Err(Ok(ErrorCode::NotAuthorized)));

    assert_eq!(manager.migrate(&fixture.admin), CURRENT_VERSION);
    assert_eq!(manager.version(), CURRENT_VERSION);
    assert_eq!(manager.query_baskets(), Vec::new(env));
    assert_eq!(fixture.create_default_basket(), 0);
}

#[test]
fn upgrade_requires_admin() {
    let fixture = Fixture::new();
    let stranger = Address::generate(&fixture.env);
    let wasm_hash = BytesN::from_array(&fixture.env, &[7u8; 32]);

    assert_eq!(
        fixture.manager.try_upgrade(&stranger, &wasm_hash),
        Err(Ok(ErrorCode::NotAuthorized))
    );
}

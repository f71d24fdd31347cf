use basket::{ constants::{ INITIAL_SHARE_SUPPLY, SHARE_DECIMALS }, error::ErrorCode };
use pretty_assertions::assert_eq;
use soroban_sdk::{ testutils::Address as _, vec, Address, String, Vec };
use test_case::test_case;

use super::setup::{ basket_params, create_token, Fixture, DEPOSIT, START_TS, USER_FUNDS };

#[test]
fn create_basket_splits_deposit_by_weight() {
    let fixture = Fixture::new();
    let manager = &fixture.manager;
    let env = &fixture.env;

    let basket_id = fixture.create_default_basket();
    assert_eq!(basket_id, 0);

    // 0.5% creation fee on 1.0 unit
    assert_eq!(fixture.base.balance(&fixture.fee_collector), 50_000);
    assert_eq!(fixture.base.balance(&fixture.user), USER_FUNDS - DEPOSIT);
    assert_eq!(fixture.base.balance(&manager.address), 0);

    // 5_970_000 buys 2x, 3_980_000 buys 0.5x
    assert_eq!(fixture.asset0.balance(&manager.address), 11_940_000);
    assert_eq!(fixture.asset1.balance(&manager.address), 1_990_000);

    let ledger = manager.query_ledger(&basket_id);
    assert_eq!(ledger.supply, INITIAL_SHARE_SUPPLY);
    assert_eq!(ledger.reserves, vec![env, 11_940_000, 1_990_000]);
    assert_eq!(ledger.last_accrued_ts, START_TS);
    assert_eq!(ledger.management_fee_bps, 50);
    assert_eq!(ledger.fee_recipient, fixture.fee_collector);
    assert_eq!(ledger.total_fee_shares, 0);

    assert_eq!(manager.query_share_balance(&basket_id, &fixture.user), INITIAL_SHARE_SUPPLY);
    assert_eq!(manager.query_baskets(), vec![env, 0]);
    assert_eq!(manager.query_basket_count(), 1);

    let basket = manager.query_basket(&basket_id);
    assert_eq!(basket.basket_id, 0);
    assert_eq!(basket.creator, fixture.user);
    assert_eq!(basket.created_ts, START_TS);
    assert_eq!(basket.params, fixture.default_params());
    assert_eq!(basket.share_metadata.decimal, SHARE_DECIMALS);
    assert_eq!(basket.share_metadata.symbol, String::from_str(env, "BLUE"));
    assert_eq!(manager.query_basket_at(&0), basket);
}

#[test]
fn base_token_constituent_is_held_without_swap() {
    let fixture = Fixture::new();
    let env = &fixture.env;

    let params = basket_params(
        env,
        vec![env, fixture.base.address.clone(), fixture.asset0.address.clone()],
        vec![env, 5_000, 5_000]
    );
    let basket_id = fixture.manager.create_basket(&fixture.user, &params, &fixture.deadline(), &DEPOSIT);

    let ledger = fixture.manager.query_ledger(&basket_id);
    assert_eq!(ledger.reserves, vec![env, 4_975_000, 9_950_000]);
    assert_eq!(fixture.base.balance(&fixture.manager.address), 4_975_000);
    assert_eq!(fixture.manager.query_total_value(&basket_id), 9_950_000);
}

#[test]
fn rounding_dust_goes_to_last_asset() {
    let fixture = Fixture::new();
    let env = &fixture.env;

    let params = basket_params(
        env,
        vec![
            env,
            fixture.base.address.clone(),
            fixture.asset0.address.clone(),
            fixture.asset1.address.clone()
        ],
        vec![env, 3_333, 3_333, 3_334]
    );
    // 9_999_999 in, 49_999 fee, 9_950_000 to split
    fixture.manager.create_basket(&fixture.user, &params, &fixture.deadline(), &9_999_999);

    let ledger = fixture.manager.query_ledger(&0);
    // 3_316_335 + 3_316_335 + 3_317_330 == 9_950_000
    assert_eq!(ledger.reserves, vec![env, 3_316_335, 6_632_670, 1_658_665]);
    assert_eq!(fixture.base.balance(&fixture.fee_collector), 49_999);
}

#[test]
fn creation_fee_of_zero_skips_collector() {
    let fixture = Fixture::new();
    let mut fees = fixture.manager.query_config().fees;
    fees.creation_fee_bps = 0;
    fixture.manager.update_fees(&fixture.admin, &fees);

    fixture.create_default_basket();

    assert_eq!(fixture.base.balance(&fixture.fee_collector), 0);
    assert_eq!(fixture.asset0.balance(&fixture.manager.address), 12_000_000);
    assert_eq!(fixture.asset1.balance(&fixture.manager.address), 2_000_000);
}

#[test]
fn creation_validation_errors() {
    let fixture = Fixture::new();
    let env = &fixture.env;
    let manager = &fixture.manager;
    let user = &fixture.user;
    let deadline = fixture.deadline();

    let params = fixture.default_params();
    assert_eq!(
        manager.try_create_basket(user, &params, &deadline, &999_999),
        Err(Ok(ErrorCode::InsufficientDeposit))
    );

    assert_eq!(
        manager.try_create_basket(user, &params, &START_TS, &DEPOSIT),
        Err(Ok(ErrorCode::DeadlineExpired))
    );

    let empty = String::from_str(env, "");
    let mut no_name = fixture.default_params();
    no_name.name = empty.clone();
    assert_eq!(
        manager.try_create_basket(user, &no_name, &deadline, &DEPOSIT),
        Err(Ok(ErrorCode::EmptyName))
    );
    let mut no_symbol = fixture.default_params();
    no_symbol.symbol = empty.clone();
    assert_eq!(
        manager.try_create_basket(user, &no_symbol, &deadline, &DEPOSIT),
        Err(Ok(ErrorCode::EmptySymbol))
    );
    let mut no_uri = fixture.default_params();
    no_uri.uri = empty.clone();
    assert_eq!(
        manager.try_create_basket(user, &no_uri, &deadline, &DEPOSIT),
        Err(Ok(ErrorCode::EmptyUri))
    );
    let mut no_id = fixture.default_params();
    no_id.id = empty;
    assert_eq!(
        manager.try_create_basket(user, &no_id, &deadline, &DEPOSIT),
        Err(Ok(ErrorCode::EmptyId))
    );

    let no_assets = basket_params(env, Vec::new(env), Vec::new(env));
    assert_eq!(
        manager.try_create_basket(user, &no_assets, &deadline, &DEPOSIT),
        Err(Ok(ErrorCode::EmptyAssets))
    );

    let mut mismatch = fixture.default_params();
    mismatch.weights = vec![env, 10_000];
    assert_eq!(
        manager.try_create_basket(user, &mismatch, &deadline, &DEPOSIT),
        Err(Ok(ErrorCode::LengthMismatch))
    );

    let mut assets = Vec::new(env);
    let mut weights = Vec::new(env);
    for _ in 0..11 {
        assets.push_back(Address::generate(env));
        weights.push_back(900);
    }
    assert_eq!(
        manager.try_create_basket(user, &basket_params(env, assets, weights), &deadline, &DEPOSIT),
        Err(Ok(ErrorCode::TooManyAssets))
    );

    assert_eq!(manager.query_basket_count(), 0);
    assert_eq!(fixture.base.balance(user), USER_FUNDS);
}

#[test_case(0 ; "zero")]
#[test_case(5_000 ; "half")]
#[test_case(7_500 ; "above half")]
fn create_basket_rejects_buffer(buffer_bps: u32) {
    let fixture = Fixture::new();
    let mut params = fixture.default_params();
    params.buffer_bps = buffer_bps;

    assert_eq!(
        fixture.manager.try_create_basket(&fixture.user, &params, &fixture.deadline(), &DEPOSIT),
        Err(Ok(ErrorCode::InvalidBuffer))
    );
}

#[test_case(0 ; "zero weight")]
#[test_case(10_001 ; "above denominator")]
fn create_basket_rejects_weight(bad_weight: u32) {
    let fixture = Fixture::new();
    let mut params = fixture.default_params();
    params.weights = vec![&fixture.env, bad_weight, 4_000];

    assert_eq!(
        fixture.manager.try_create_basket(&fixture.user, &params, &fixture.deadline(), &DEPOSIT),
        Err(Ok(ErrorCode::InvalidWeight))
    );
}

#[test]
fn over_allocated_weights_abort_creation() {
    let fixture = Fixture::new();
    let env = &fixture.env;

    let mut params = fixture.default_params();
    params.weights = vec![env, 8_000, 8_000];

    assert_eq!(
        fixture.manager.try_create_basket(&fixture.user, &params, &fixture.deadline(), &DEPOSIT),
        Err(Ok(ErrorCode::SpendExceedsDeposit))
    );
    assert_eq!(fixture.manager.query_basket_count(), 0);
    assert_eq!(fixture.base.balance(&fixture.user), USER_FUNDS);
    assert_eq!(fixture.base.balance(&fixture.fee_collector), 0);
}

#[test]
fn failed_swap_rolls_back_everything() {
    let fixture = Fixture::new();
    let env = &fixture.env;

    // priced but the exchange holds none of it
    let (dry, _) = create_token(env, &fixture.admin);
    fixture.exchange.set_rate(&fixture.admin, &fixture.base.address, &dry.address, &10_000_000);

    let params = basket_params(
        env,
        vec![env, fixture.asset0.address.clone(), dry.address.clone()],
        vec![env, 5_000, 5_000]
    );

    assert_eq!(
        fixture.manager.try_create_basket(&fixture.user, &params, &fixture.deadline(), &DEPOSIT),
        Err(Ok(ErrorCode::SwapFailed))
    );
    assert_eq!(fixture.manager.query_basket_count(), 0);
    assert_eq!(fixture.base.balance(&fixture.user), USER_FUNDS);
    assert_eq!(fixture.asset0.balance(&fixture.manager.address), 0);
    assert_eq!(fixture.manager.try_query_basket(&0), Err(Ok(ErrorCode::BasketNotFound)));
}

#[test]
fn unpriced_asset_fails_quote() {
    let fixture = Fixture::new();
    let env = &fixture.env;
    let (unpriced, _) = create_token(env, &fixture.admin);

    let params = basket_params(
        env,
        vec![env, fixture.asset0.address.clone(), unpriced.address.clone()],
        vec![env, 5_000, 5_000]
    );

    assert_eq!(
        fixture.manager.try_create_basket(&fixture.user, &params, &fixture.deadline(), &DEPOSIT),
        Err(Ok(ErrorCode::QuoteFailed))
    );
}

#[test]
fn creator_without_funds_fails_transfer() {
    let fixture = Fixture::new();
    let broke = Address::generate(&fixture.env);

    assert_eq!(
        fixture.manager.try_create_basket(
            &broke,
            &fixture.default_params(),
            &fixture.deadline(),
            &DEPOSIT
        ),
        Err(Ok(ErrorCode::TransferFailed))
    );
}

#[test]
fn registry_is_append_only_and_indexable() {
    let fixture = Fixture::new();
    let manager = &fixture.manager;

    assert_eq!(fixture.create_default_basket(), 0);
    assert_eq!(fixture.create_default_basket(), 1);
    assert_eq!(fixture.create_default_basket(), 2);

    assert_eq!(manager.query_baskets(), vec![&fixture.env, 0, 1, 2]);
    assert_eq!(manager.query_basket_at(&1).basket_id, 1);
    assert_eq!(manager.try_query_basket_at(&3), Err(Ok(ErrorCode::BasketNotFound)));

    // every basket keeps its own ledger
    assert_eq!(manager.query_ledger(&2).supply, INITIAL_SHARE_SUPPLY);
    assert_eq!(manager.query_share_balance(&1, &fixture.user), INITIAL_SHARE_SUPPLY);
}

#[test]
fn whitelist_only_gates_creation() {
    let fixture = Fixture::new();
    let manager = &fixture.manager;

    manager.update_config(&fixture.admin, &None, &None, &None, &Some(true));

    assert_eq!(
        manager.try_create_basket(
            &fixture.user,
            &fixture.default_params(),
            &fixture.deadline(),
            &DEPOSIT
        ),
        Err(Ok(ErrorCode::NotWhitelisted))
    );

    manager.update_whitelist(&fixture.admin, &fixture.user, &true);
    assert_eq!(fixture.create_default_basket(), 0);
}

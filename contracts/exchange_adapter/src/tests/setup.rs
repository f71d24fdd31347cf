use soroban_sdk::{ testutils::Address as _, token, Address, Env };

use crate::contract::{ FixedRateExchange, FixedRateExchangeClient };

pub fn deploy_exchange<'a>(env: &Env, admin: &Address) -> FixedRateExchangeClient<'a> {
    let exchange = FixedRateExchangeClient::new(env, &env.register(FixedRateExchange, ()));
    exchange.initialize(admin);
    exchange
}

pub fn create_token<'a>(
    env: &Env,
    admin: &Address
) -> (token::Client<'a>, token::StellarAssetClient<'a>) {
    let sac = env.register_stellar_asset_contract_v2(admin.clone());
    (token::Client::new(env, &sac.address()), token::StellarAssetClient::new(env, &sac.address()))
}

pub struct Fixture<'a> {
    pub env: Env,
    pub admin: Address,
    pub exchange: FixedRateExchangeClient<'a>,
    pub base: token::Client<'a>,
    pub base_admin: token::StellarAssetClient<'a>,
    pub asset: token::Client<'a>,
    pub asset_admin: token::StellarAssetClient<'a>,
}

impl<'a> Fixture<'a> {
    pub fn new() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let exchange = deploy_exchange(&env, &admin);
        let (base, base_admin) = create_token(&env, &admin);
        let (asset, asset_admin) = create_token(&env, &admin);

        Fixture { env, admin, exchange, base, base_admin, asset, asset_admin }
    }
}

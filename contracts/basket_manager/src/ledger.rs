use basket::{
    constants::INITIAL_SHARE_SUPPLY,
    error::{ BasketResult, ErrorCode },
    math::{ fee_accrual::{ self, Accrual }, proportion::get_proportion, safe_math::SafeMath },
    validate,
};
use soroban_sdk::{ contracttype, Address, Env, Vec };

/// Per-basket share accounting. `reserves` is parallel to the basket's asset list.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ShareLedger {
    pub supply: i128,
    pub reserves: Vec<i128>,
    pub last_accrued_ts: u64,
    /// Monthly dilution rate, fixed at creation
    pub management_fee_bps: u32,
    pub fee_recipient: Address,
    /// Lifetime fee shares minted to `fee_recipient`
    pub total_fee_shares: i128,
}

impl ShareLedger {
    pub fn new(
        env: &Env,
        asset_count: u32,
        now: u64,
        management_fee_bps: u32,
        fee_recipient: Address
    ) -> Self {
        let mut reserves = Vec::new(env);
        for _ in 0..asset_count {
            reserves.push_back(0);
        }

        ShareLedger {
            supply: 0,
            reserves,
            last_accrued_ts: now,
            management_fee_bps,
            fee_recipient,
            total_fee_shares: 0,
        }
    }

    /// Dilutes the supply by the compounding monthly fee for every whole month since the
    /// last accrual. The caller credits `fee_shares` to `fee_recipient`.
    pub fn accrue(&mut self, env: &Env, now: u64) -> BasketResult<Accrual> {
        let (accrual, next_accrued_ts) = fee_accrual::accrue(
            env,
            self.supply,
            self.management_fee_bps,
            self.last_accrued_ts,
            now
        )?;

        self.last_accrued_ts = next_accrued_ts;
        if accrual.fee_shares > 0 {
            self.supply = self.supply.safe_add(accrual.fee_shares, env)?;
            self.total_fee_shares = self.total_fee_shares.safe_add(accrual.fee_shares, env)?;
        }

        Ok(accrual)
    }

    /// Shares issued for a deposit worth `deposit_value` against reserves worth
    /// `reserve_value`, both in base currency. An empty or valueless ledger issues the
    /// bootstrap amount.
    pub fn shares_for_deposit(
        &self,
        env: &Env,
        deposit_value: i128,
        reserve_value: i128
    ) -> BasketResult<i128> {
        if self.supply == 0 || reserve_value == 0 {
            return Ok(INITIAL_SHARE_SUPPLY);
        }

        get_proportion(env, deposit_value, self.supply, reserve_value)
    }

    /// Adds `amounts` to the reserves and `shares` to the supply.
    pub fn deposit(&mut self, env: &Env, amounts: &Vec<i128>, shares: i128) -> BasketResult {
        validate!(
            env,
            amounts.len() == self.reserves.len(),
            ErrorCode::LengthMismatch,
            "deposit has {} amounts for {} reserves",
            amounts.len(),
            self.reserves.len()
        )?;

        for (i, amount) in amounts.iter().enumerate() {
            validate!(env, amount >= 0, ErrorCode::InvalidAmount, "negative deposit amount")?;
            let i = i as u32;
            let reserve = self.reserves.get_unchecked(i).safe_add(amount, env)?;
            self.reserves.set(i, reserve);
        }

        self.supply = self.supply.safe_add(shares, env)?;

        Ok(())
    }

    /// Removes `shares` from the supply and returns the floor-rounded proportional amount
    /// of every reserve. Rounding remainders stay in the reserves.
    pub fn withdraw(&mut self, env: &Env, shares: i128) -> BasketResult<Vec<i128>> {
        validate!(env, shares > 0, ErrorCode::InvalidAmount, "burn amount must be positive")?;
        validate!(
            env,
            shares <= self.supply,
            ErrorCode::InsufficientLiquidity,
            "burn of {} exceeds supply {}",
            shares,
            self.supply
        )?;

        let mut released = Vec::new(env);
        for (i, reserve) in self.reserves.iter().enumerate() {
            let amount = get_proportion(env, shares, reserve, self.supply)?;
            self.reserves.set(i as u32, reserve.safe_sub(amount, env)?);
            released.push_back(amount);
        }

        self.supply = self.supply.safe_sub(shares, env)?;

        Ok(released)
    }

    /// Reserves a holding of `shares` is currently redeemable for, without mutating.
    pub fn value_of_shares(&self, env: &Env, shares: i128) -> BasketResult<Vec<i128>> {
        validate!(env, shares >= 0, ErrorCode::InvalidAmount, "negative share amount")?;

        let mut amounts = Vec::new(env);
        for reserve in self.reserves.iter() {
            let amount = if self.supply == 0 {
                0
            } else {
                get_proportion(env, shares.min(self.supply), reserve, self.supply)?
            };
            amounts.push_back(amount);
        }

        Ok(amounts)
    }
}

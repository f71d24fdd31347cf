pub mod admin;
pub mod creation;
pub mod ledger;
pub mod liquidity;
pub mod swap;
pub mod token;

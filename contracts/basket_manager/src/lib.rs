#![no_std]

mod access;
mod contract;
mod controller;
mod events;
mod guard;
mod ledger;
mod manager;
mod migration;
mod storage;

pub use contract::{ BasketManager, BasketManagerClient };
pub use guard::GuardKey;
pub use ledger::ShareLedger;
pub use storage::{ BasketConfig, BasketParams, Config, PlatformFeeConfig, Role };

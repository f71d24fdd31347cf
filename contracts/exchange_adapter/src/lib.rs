#![no_std]

mod contract;
mod events;
mod exchange;
mod storage;

pub use contract::{ FixedRateExchange, FixedRateExchangeClient };

#[cfg(test)]
mod tests;

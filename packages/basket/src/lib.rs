#![no_std]

pub mod constants;
pub mod error;
pub mod interface;
pub mod macros;
pub mod math;

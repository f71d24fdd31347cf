pub mod allocation;
pub mod fee_accrual;
pub mod proportion;
pub mod safe_math;

// Storage rent
pub const DAY_IN_LEDGERS: u32 = 17280;

pub const INSTANCE_BUMP_AMOUNT: u32 = 7 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const PERSISTENT_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

pub const BALANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const BALANCE_LIFETIME_THRESHOLD: u32 = BALANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;

// Time
pub const ONE_DAY: u64 = 86_400;
pub const MONTH_IN_SECONDS: u64 = 30 * ONE_DAY;

// Percentages are parts-per-10000
pub const BPS_DENOMINATOR: u32 = 10_000;
pub const MAX_BUFFER_BPS: u32 = 5_000;
pub const MAX_PLATFORM_FEE_BPS: u32 = 100;
pub const MAX_MANAGEMENT_FEE_BPS: u32 = 50;

// Fixed point
pub const SCALAR_18: i128 = 1_000_000_000_000_000_000;
pub const SCALAR_7: i128 = 10_000_000;
/// scale of one bps expressed at SCALAR_18
pub const BPS_TO_SCALAR_18: i128 = SCALAR_18 / BPS_DENOMINATOR as i128;
/// Lower bound applied to the compounded retention factor, 10^-6 at SCALAR_18.
/// Keeps the fee formula away from a division by a near-zero factor.
pub const MIN_RETENTION_FACTOR: i128 = 1_000_000_000_000;

// Shares
pub const SHARE_DECIMALS: u32 = 7;
/// Shares issued on the first mint into an empty ledger (100 shares)
pub const INITIAL_SHARE_SUPPLY: i128 = 100 * SCALAR_7;

pub const MAX_BASKET_ASSETS: u32 = 10;

use soroban_sdk::contracterror;

pub type BasketResult<T = ()> = core::result::Result<T, ErrorCode>;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ErrorCode {
    // Validation
    AlreadyInitialized = 1,
    NotAuthorized = 2,
    InvalidAmount = 3,
    InvalidBuffer = 4,
    DeadlineExpired = 5,
    EmptyName = 6,
    EmptySymbol = 7,
    EmptyUri = 8,
    EmptyId = 9,
    EmptyAssets = 10,
    LengthMismatch = 11,
    TooManyAssets = 12,
    InvalidWeight = 13,
    BasketNotFound = 14,
    InvalidPath = 15,
    NotInitialized = 16,

    // Financial
    InsufficientDeposit = 20,
    InsufficientLiquidity = 21,
    SpendExceedsDeposit = 22,
    FeeTooHigh = 23,
    BelowMinimumRedemption = 24,
    SlippageExceeded = 25,
    InsufficientShares = 26,

    // Transfers and external calls
    TransferFailed = 30,
    SwapFailed = 31,
    QuoteFailed = 32,

    // Concurrency
    ReentrantCall = 40,

    // Math
    MathError = 50,

    // Access
    NotWhitelisted = 60,

    // Exchange adapter
    RateNotSet = 70,

    // Versioning
    AlreadyMigrated = 80,
}

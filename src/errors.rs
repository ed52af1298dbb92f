use soroban_sdk::contracterror;

/// Custom error types for the vesting vault contract
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum VestingError {
    // Validation errors (1000-1099)
    InvalidBeneficiary = 1000,
    InvalidAmount = 1001,
    InvalidPercent = 1002,
    InvalidTimeline = 1003,
    LengthMismatch = 1004,
    EmptyBatch = 1005,
    InvalidRecoveryAccount = 1006,

    // Authorization errors (1100-1199)
    NotAdmin = 1100,

    // State errors (1200-1299)
    NoSchedules = 1200,
    NothingToClaim = 1201,
    NothingToWithdraw = 1202,
    ScheduleLimitExceeded = 1203,
    ScheduleNotFound = 1204,

    // Guard and arithmetic errors (1300-1399)
    OperationNotAllowed = 1300,
    MathOverflow = 1301,
    NotInitialized = 1302,
}

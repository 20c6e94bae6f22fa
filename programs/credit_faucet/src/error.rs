use anchor_lang::prelude::*;

#[error_code]
pub enum FaucetError {
    // Access control errors
    #[msg("Caller lacks the required role")]
    Unauthorized,

    // Eligibility errors, in the order they are checked
    #[msg("Faucet is paused")]
    FaucetPaused,
    #[msg("Cooldown has not elapsed since the last claim")]
    CooldownActive,
    #[msg("Lifetime claim limit reached")]
    LifetimeLimitReached,
    #[msg("Remaining allowance is below the claim amount")]
    InsufficientAllowance,

    // Input validation errors
    #[msg("Invalid argument")]
    InvalidArgument,
    #[msg("Ledger does not match the distributor's ledger")]
    LedgerMismatch,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

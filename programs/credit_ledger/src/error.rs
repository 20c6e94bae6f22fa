use anchor_lang::prelude::*;

#[error_code]
pub enum CreditLedgerError {
    // Access control errors
    #[msg("Caller lacks the required role")]
    Unauthorized,

    // Supply errors
    #[msg("Issuance would exceed the supply cap")]
    CapExceeded,
    #[msg("Insufficient balance for this transfer")]
    InsufficientBalance,

    // Input validation errors
    #[msg("Invalid argument")]
    InvalidArgument,

    // System level errors
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow,
}

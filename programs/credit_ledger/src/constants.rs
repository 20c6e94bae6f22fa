use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * PDA seeds used by the credit ledger program.
 */

#[constant]
/// Seed for ledger PDA derivation
/// - Used in: ["ledger", owner]
/// - One ledger per owner
pub const LEDGER_SEED: &str = "ledger";

/// Seed for balance PDA derivation
/// - Used in: ["balance", ledger_key, holder_key]
/// - One balance account per (ledger, holder) pair
pub const BALANCE_SEED: &str = "balance";

/// Source identity recorded in `Transfer` events for newly issued credit
pub const MINT_ORIGIN: Pubkey = Pubkey::new_from_array([0; 32]);

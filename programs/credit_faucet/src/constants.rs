use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * Reference faucet parameters and PDA seeds used by the credit faucet program.
 */

/// ===== REFERENCE PARAMETERS =====

/// Credit issued by one successful claim
#[constant]
pub const DEFAULT_CLAIM_AMOUNT: u64 = 10;

/// Minimum time between two claims of the same identity (1 day)
/// - Value: 24 hours * 60 minutes * 60 seconds = 86,400 seconds
#[constant]
pub const DEFAULT_COOLDOWN: i64 = 24 * 60 * 60;

/// Maximum cumulative credit a single identity may ever claim
#[constant]
pub const DEFAULT_LIFETIME_CAP: u64 = 100;

/// ===== PDA SEED CONSTANTS =====

/// Seed for distributor PDA derivation
/// - Used in: ["distributor", ledger]
/// - One distributor per ledger; the PDA is the ledger's registered issuer
#[constant]
pub const DISTRIBUTOR_SEED: &str = "distributor";

/// Seed for claim record PDA derivation
/// - Used in: ["claim", distributor_key, claimant_key]
/// - Tracks cooldown and lifetime total for each (distributor, claimant) pair
#[constant]
pub const CLAIM_SEED: &str = "claim";

use anchor_lang::prelude::*;

declare_id!("ArJKCrG2Xg9n86ZCLZLyjt2qVXUymrJuQxKVpQWMwdie");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;
use state::{ClaimPhase, FaucetParams};

/**
 * Credit Faucet Program
 *
 * A rate-limited distributor handing out a scarce credit issued by the credit
 * ledger program. Three limits are enforced at once: a per-identity cooldown,
 * a per-identity lifetime cap, and the ledger's global supply cap.
 *
 * Key Features:
 * - Fixed claim amount per successful claim
 * - Per-identity cooldown between claims
 * - Per-identity lifetime cap
 * - Owner kill-switch (pause) that leaves claim records untouched
 * - Distinct error per failed guard so clients can branch on the reason
 * - Read-only queries returning eligibility, allowance and remaining cooldown
 *
 * Architecture:
 * - Distributor PDA: Stores claim configuration and the pause flag; registered
 *   as the ledger's issuer and signs issue calls
 * - Claim Record PDAs: Track last claim time and cumulative amount per identity
 *
 * Workflow:
 * 1. Ledger owner creates the faucet for their ledger
 * 2. Ledger owner registers the distributor PDA as the ledger issuer
 * 3. Users request claims; each claim is recorded then issued on the ledger
 * 4. Owner may pause and resume claims at any time
 */
#[program]
pub mod credit_faucet {
    use super::*;

    /**
     * Creates a new faucet bound to a ledger
     *
     * @param ctx - Account context containing distributor, ledger and owner accounts
     * @param params - Claim amount, cooldown and lifetime cap
     *
     * Access Control: Ledger owner only
     */
    pub fn initialize_faucet(ctx: Context<InitializeFaucet>, params: FaucetParams) -> Result<()> {
        handle_initialize_faucet(ctx, params)
    }

    /**
     * Claims the fixed credit amount for the signer
     *
     * @param ctx - Account context containing distributor, claim record and ledger accounts
     * @return Amount of credit issued
     *
     * Access Control: Any signer satisfying the claim rules
     */
    pub fn request_claim(ctx: Context<RequestClaim>) -> Result<u64> {
        handle_request_claim(ctx)
    }

    /**
     * Pauses or resumes claims
     *
     * @param ctx - Account context containing distributor and owner accounts
     * @param paused - New value of the pause flag
     *
     * Access Control: Owner only
     */
    pub fn set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
        handle_set_paused(ctx, paused)
    }

    /// Whether the identity could claim right now
    pub fn can_claim(ctx: Context<ClaimView>, identity: Pubkey) -> Result<bool> {
        handle_can_claim(ctx, identity)
    }

    /// Amount the identity may still claim over its lifetime
    pub fn remaining_allowance(ctx: Context<ClaimView>, identity: Pubkey) -> Result<u64> {
        handle_remaining_allowance(ctx, identity)
    }

    /// Seconds before the identity may claim again
    pub fn time_until_next_claim(ctx: Context<ClaimView>, identity: Pubkey) -> Result<i64> {
        handle_time_until_next_claim(ctx, identity)
    }

    /// Current claim phase of the identity
    pub fn claim_phase(ctx: Context<ClaimView>, identity: Pubkey) -> Result<ClaimPhase> {
        handle_claim_phase(ctx, identity)
    }

    /// Whether claims are currently paused
    pub fn is_paused(ctx: Context<PauseView>) -> Result<bool> {
        handle_is_paused(ctx)
    }
}

use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::state::*;
use credit_ledger::state::LedgerState;

/**
 * Account context for read-only claim queries
 *
 * The claim record may not exist yet; a missing record reads as an identity
 * that never claimed.
 */
#[derive(Accounts)]
#[instruction(identity: Pubkey)]
pub struct ClaimView<'info> {
    /// The distributor to query
    pub distributor: Account<'info, Distributor>,

    /// The ledger the distributor issues on
    #[account(address = distributor.ledger @ FaucetError::LedgerMismatch)]
    pub ledger: Account<'info, LedgerState>,

    /// Claim record of the identity
    /// - Derived from: ["claim", distributor_key, identity]
    /// CHECK: Address is fixed by seeds; contents are validated before use
    #[account(
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), identity.as_ref()],
        bump
    )]
    pub claim_record: UncheckedAccount<'info>,
}

impl<'info> ClaimView<'info> {
    fn load_record(&self, identity: Pubkey) -> Result<ClaimRecord> {
        ClaimRecord::load_or_default(&self.claim_record, &identity)
    }
}

/// Account context for reading the pause flag
#[derive(Accounts)]
pub struct PauseView<'info> {
    /// The distributor to query
    pub distributor: Account<'info, Distributor>,
}

/// Whether `request_claim` would succeed for the identity right now,
/// including the ledger accepting the issuance
pub fn handle_can_claim(ctx: Context<ClaimView>, identity: Pubkey) -> Result<bool> {
    let now = Clock::get()?.unix_timestamp;
    let record = ctx.accounts.load_record(identity)?;
    let distributor = &ctx.accounts.distributor;
    Ok(distributor.can_claim(&distributor.key(), &ctx.accounts.ledger, &record, now))
}

pub fn handle_remaining_allowance(ctx: Context<ClaimView>, identity: Pubkey) -> Result<u64> {
    let record = ctx.accounts.load_record(identity)?;
    Ok(ctx.accounts.distributor.remaining_allowance(&record))
}

pub fn handle_time_until_next_claim(ctx: Context<ClaimView>, identity: Pubkey) -> Result<i64> {
    let now = Clock::get()?.unix_timestamp;
    let record = ctx.accounts.load_record(identity)?;
    Ok(ctx.accounts.distributor.time_until_next_claim(&record, now))
}

pub fn handle_claim_phase(ctx: Context<ClaimView>, identity: Pubkey) -> Result<ClaimPhase> {
    let now = Clock::get()?.unix_timestamp;
    let record = ctx.accounts.load_record(identity)?;
    Ok(ctx.accounts.distributor.claim_phase(&record, now))
}

pub fn handle_is_paused(ctx: Context<PauseView>) -> Result<bool> {
    Ok(ctx.accounts.distributor.paused)
}

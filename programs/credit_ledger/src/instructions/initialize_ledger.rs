use anchor_lang::prelude::*;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a new credit ledger
 *
 * Creates the ledger PDA for the signing owner with a fixed supply cap.
 * No issuer is registered yet, so nothing can be issued until the owner
 * calls set_issuer.
 *
 * Access Control: Any signer, who becomes the owner
 */
#[derive(Accounts)]
pub struct InitializeLedger<'info> {
    /// The ledger account (PDA)
    /// - Derived from: ["ledger", owner]
    #[account(
        init,
        payer = owner,
        space = LedgerState::LEN,
        seeds = [LEDGER_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub ledger: Account<'info, LedgerState>,

    /// The owner of the ledger
    /// - Pays for account creation
    /// - Can register the issuer
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates a new credit ledger
 *
 * @param ctx - The account context containing ledger and owner accounts
 * @param supply_cap - Maximum cumulative amount the ledger may ever issue
 */
pub fn handle_initialize_ledger(ctx: Context<InitializeLedger>, supply_cap: u64) -> Result<()> {
    require!(supply_cap > 0, CreditLedgerError::InvalidArgument);

    let ledger = &mut ctx.accounts.ledger;
    ledger.bump = ctx.bumps.ledger;
    ledger.owner = ctx.accounts.owner.key();
    ledger.supply_cap = supply_cap;
    // Note: issuer and total_supply use default values

    msg!("Ledger {} created with supply cap {}", ledger.key(), supply_cap);

    emit!(LedgerInitialized {
        ledger: ledger.key(),
        owner: ledger.owner,
        supply_cap,
    });

    Ok(())
}

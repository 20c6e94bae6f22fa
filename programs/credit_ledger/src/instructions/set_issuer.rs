use anchor_lang::prelude::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for registering the issuer
 *
 * Records the sole identity permitted to call issue. Calling it again
 * replaces the previous issuer.
 *
 * Access Control: Owner only
 */
#[derive(Accounts)]
pub struct SetIssuer<'info> {
    /// The ledger account to update
    #[account(mut)]
    pub ledger: Account<'info, LedgerState>,

    /// The owner of the ledger
    /// - Must match the owner stored in the ledger state
    pub owner: Signer<'info>,
}

/**
 * Sets the issuer of the ledger
 *
 * @param ctx - The account context containing ledger and owner accounts
 * @param issuer - Identity allowed to issue credit from now on
 *
 * Validation Rules:
 * - The issuer cannot be the default (all zero) key
 */
pub fn handle_set_issuer(ctx: Context<SetIssuer>, issuer: Pubkey) -> Result<()> {
    let ledger = &mut ctx.accounts.ledger;
    ledger.set_issuer(&ctx.accounts.owner.key(), issuer)?;

    msg!("Ledger {} issuer set to {}", ledger.key(), issuer);

    emit!(IssuerUpdated {
        ledger: ledger.key(),
        issuer,
    });

    Ok(())
}

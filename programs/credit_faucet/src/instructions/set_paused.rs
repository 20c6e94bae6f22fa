use anchor_lang::prelude::*;
use crate::state::*;
use crate::event::*;

/**
 * Account context for pausing or resuming claims
 *
 * Pausing does not touch any claim record; it only blocks new claims.
 *
 * Access Control: Only the owner can pause or resume
 */
#[event_cpi]
#[derive(Accounts)]
pub struct SetPaused<'info> {
    /// The distributor account to update
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// The owner of the distributor
    /// - Must match the owner stored in the distributor state
    pub owner: Signer<'info>,
}

/**
 * Sets the pause flag
 *
 * @param ctx - The account context containing distributor and owner accounts
 * @param paused - New value of the flag
 *
 * PausedChanged is emitted on every successful call, even when the value
 * does not change.
 */
pub fn handle_set_paused(ctx: Context<SetPaused>, paused: bool) -> Result<()> {
    let distributor = &mut ctx.accounts.distributor;
    distributor.set_paused(&ctx.accounts.owner.key(), paused)?;

    msg!("Faucet {} paused: {}", distributor.key(), paused);

    emit_cpi!(PausedChanged {
        distributor: distributor.key(),
        paused,
    });

    Ok(())
}

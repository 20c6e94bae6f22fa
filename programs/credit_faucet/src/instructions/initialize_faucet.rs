use anchor_lang::prelude::*;
use credit_ledger::state::LedgerState;
use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;

/**
 * Account context for creating a new faucet
 *
 * Creates the distributor PDA bound to one ledger. The ledger owner then
 * registers the distributor PDA as the ledger's issuer, after which claims
 * can be served.
 *
 * Access Control: Ledger owner only
 */
#[event_cpi]
#[derive(Accounts)]
pub struct InitializeFaucet<'info> {
    /// The main distributor account (PDA)
    /// - Stores claim configuration and pause flag
    /// - Derived from: ["distributor", ledger]
    #[account(
        init,
        payer = owner,
        space = Distributor::LEN,
        seeds = [DISTRIBUTOR_SEED.as_bytes(), ledger.key().as_ref()],
        bump
    )]
    pub distributor: Account<'info, Distributor>,

    /// The ledger this faucet will issue from
    /// - Must be owned by the credit ledger program
    #[account(constraint = ledger.owner == owner.key() @ FaucetError::Unauthorized)]
    pub ledger: Account<'info, LedgerState>,

    /// The owner of the faucet, who must also own the ledger
    #[account(mut)]
    pub owner: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Creates a new faucet
 *
 * @param ctx - The account context containing distributor, ledger and owner accounts
 * @param params - Claim amount, cooldown and lifetime cap
 *
 * Validation Rules:
 * - claim_amount must be non-zero
 * - cooldown must not be negative
 * - lifetime_cap must be at least claim_amount
 */
pub fn handle_initialize_faucet(ctx: Context<InitializeFaucet>, params: FaucetParams) -> Result<()> {
    let owner = ctx.accounts.owner.key();
    let ledger = ctx.accounts.ledger.key();

    let distributor = &mut ctx.accounts.distributor;
    distributor.configure(owner, ledger, ctx.bumps.distributor, &params)?;
    // Note: paused and total_distributed use default values

    msg!(
        "Faucet {} on ledger {}: {} per claim, cooldown {}s, lifetime cap {}",
        distributor.key(),
        ledger,
        params.claim_amount,
        params.cooldown,
        params.lifetime_cap
    );

    emit_cpi!(FaucetInitialized {
        distributor: distributor.key(),
        owner,
        ledger,
        claim_amount: params.claim_amount,
        cooldown: params.cooldown,
        lifetime_cap: params.lifetime_cap,
    });

    Ok(())
}

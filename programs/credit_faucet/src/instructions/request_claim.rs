use anchor_lang::prelude::*;
use anchor_lang::AccountsExit;
use credit_ledger::program::CreditLedger;
use crate::constants::*;
use crate::event::*;
use crate::state::*;
use crate::utils::issue_credit;

/**
 * Account context for claiming credit
 *
 * The claimant asks the faucet for its fixed claim amount. The faucet checks
 * its own rules, records the claim, and then has the ledger issue the credit.
 * The ledger enforces the supply cap on its own; if it refuses, the whole
 * transaction fails and the recorded claim is discarded with it.
 *
 * Access Control: Any signer
 */
#[event_cpi]
#[derive(Accounts)]
pub struct RequestClaim<'info> {
    /// The distributor account containing claim configuration
    /// - Will be modified to update total_distributed
    /// - Signs the issue call as the ledger's issuer
    #[account(mut)]
    pub distributor: Account<'info, Distributor>,

    /// Claim record for this claimant
    /// - Tracks last claim time and cumulative amount
    /// - Derived from: ["claim", distributor_key, claimant_key]
    #[account(
        init_if_needed,
        payer = claimant,
        space = ClaimRecord::LEN,
        seeds = [CLAIM_SEED.as_bytes(), distributor.key().as_ref(), claimant.key().as_ref()],
        bump
    )]
    pub claim_record: Account<'info, ClaimRecord>,

    /// The ledger the distributor is bound to
    /// CHECK: Checked against the distributor in the handler; contents validated by the ledger program
    #[account(mut)]
    pub ledger: UncheckedAccount<'info>,

    /// The claimant's balance on the ledger
    /// CHECK: Derived, created and validated by the ledger program
    #[account(mut)]
    pub claimant_balance: UncheckedAccount<'info>,

    /// The claimant requesting credit
    /// - Must sign the transaction
    /// - Pays for the claim record and balance accounts on first claim
    #[account(mut)]
    pub claimant: Signer<'info>,

    /// Credit ledger program
    pub ledger_program: Program<'info, CreditLedger>,

    /// System program for account creation
    pub system_program: Program<'info, System>,
}

/**
 * Processes a claim request
 *
 * @param ctx - The account context containing all required accounts
 * @return Amount of credit issued
 *
 * Validation Process (first failure wins):
 * 0. Ledger account is the one the distributor is bound to
 * 1. Faucet is not paused
 * 2. Cooldown since the last claim has elapsed
 * 3. Lifetime cap not yet reached
 * 4. Remaining allowance covers the claim amount
 */
pub fn handle_request_claim(ctx: Context<RequestClaim>) -> Result<u64> {
    let now = Clock::get()?.unix_timestamp;
    let claimant = ctx.accounts.claimant.key();

    // ===== VALIDATION AND EFFECTS PHASE =====

    let distributor = &mut ctx.accounts.distributor;
    distributor.check_ledger(&ctx.accounts.ledger.key())?;
    let claim_record = &mut ctx.accounts.claim_record;
    let amount = distributor.commit_claim(&claimant, claim_record, now)?;
    let total_claimed = claim_record.total_claimed;

    // Persist claim state before handing control to the ledger
    ctx.accounts.claim_record.exit(&crate::ID)?;
    ctx.accounts.distributor.exit(&crate::ID)?;

    // ===== INTERACTIONS PHASE (Issue credit) =====

    let ledger_key = ctx.accounts.distributor.ledger;
    let distributor_bump = ctx.accounts.distributor.bump;
    let distributor_key = ctx.accounts.distributor.key();

    let seeds = &[
        DISTRIBUTOR_SEED.as_bytes(),
        ledger_key.as_ref(),
        &[distributor_bump],
    ];
    let signer = &[&seeds[..]];

    issue_credit(
        ctx.accounts.ledger_program.to_account_info(),
        ctx.accounts.ledger.to_account_info(),
        ctx.accounts.claimant_balance.to_account_info(),
        ctx.accounts.claimant.to_account_info(),
        ctx.accounts.distributor.to_account_info(),
        ctx.accounts.claimant.to_account_info(),
        ctx.accounts.system_program.to_account_info(),
        amount,
        signer,
    )?;

    msg!("Claimed {} for {} ({} total)", amount, claimant, total_claimed);

    emit_cpi!(Claimed {
        distributor: distributor_key,
        claimant,
        amount,
        timestamp: now,
        total_claimed,
    });

    Ok(amount)
}

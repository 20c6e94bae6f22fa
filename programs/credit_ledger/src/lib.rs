use anchor_lang::prelude::*;

declare_id!("63nFXoNesps2XyToZoLCBq5Pwk455ofvCU5G6SYcS6RK");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;


use instructions::*;

/**
 * Credit Ledger Program
 *
 * Owns the supply accounting of a scarce fungible credit. New credit can only be
 * created by a single registered issuer and never beyond a fixed supply cap.
 *
 * Key Features:
 * - Global supply cap enforced on every issuance, independently of the issuer
 * - Single issuer capability, registered and replaceable by the owner
 * - Per-holder balance accounts created lazily on first credit
 * - Holder-to-holder transfers that keep the sum of balances equal to the supply
 *
 * Architecture:
 * - Ledger PDA: Stores owner, issuer, supply cap and total supply
 * - Balance PDAs: Store the credit held by each identity
 *
 * Workflow:
 * 1. Owner creates the ledger with a supply cap
 * 2. Owner registers the issuer (e.g. a distributor PDA)
 * 3. Issuer issues credit to recipients, usually through CPI
 * 4. Holders read or transfer their balances
 */
#[program]
pub mod credit_ledger {
    use super::*;

    /**
     * Creates a new credit ledger
     *
     * @param ctx - Account context containing ledger and owner accounts
     * @param supply_cap - Maximum cumulative amount the ledger may ever issue
     *
     * Access Control: Any signer, who becomes the owner
     */
    pub fn initialize_ledger(ctx: Context<InitializeLedger>, supply_cap: u64) -> Result<()> {
        handle_initialize_ledger(ctx, supply_cap)
    }

    /**
     * Registers the sole identity allowed to issue credit
     *
     * @param ctx - Account context containing ledger and owner accounts
     * @param issuer - New issuer, replacing any previous one
     *
     * Access Control: Owner only
     */
    pub fn set_issuer(ctx: Context<SetIssuer>, issuer: Pubkey) -> Result<()> {
        handle_set_issuer(ctx, issuer)
    }

    /**
     * Issues new credit to a recipient
     *
     * @param ctx - Account context containing ledger, balance, issuer and payer accounts
     * @param amount - Amount of credit to create
     *
     * Access Control: Registered issuer only
     */
    pub fn issue(ctx: Context<Issue>, amount: u64) -> Result<()> {
        handle_issue(ctx, amount)
    }

    /**
     * Moves credit from the signing holder to another identity
     *
     * @param ctx - Account context containing both balances
     * @param amount - Amount of credit to move
     *
     * Access Control: Holder only
     */
    pub fn transfer(ctx: Context<TransferCredit>, amount: u64) -> Result<()> {
        handle_transfer(ctx, amount)
    }

    /**
     * Returns the balance of an identity
     *
     * @param ctx - Account context containing ledger and balance accounts
     * @param identity - Identity to read
     */
    pub fn balance_of(ctx: Context<BalanceOf>, identity: Pubkey) -> Result<u64> {
        handle_balance_of(ctx, identity)
    }
}

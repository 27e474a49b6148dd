use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::events::ClaimTransferred;
use crate::state::{ClaimBalance, ClaimKind, ClaimLedger, OptionInstance};
use crate::utils::pda::CLAIM_SEED;

/// Accounts for moving writer or exerciser claims between holders
///
/// The recipient's balance account is created on first receipt, paid for by
/// the sender.
#[derive(Accounts)]
pub struct TransferClaim<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    pub option: Box<Account<'info, OptionInstance>>,

    #[account(
        constraint = ledger.instance == option.key() @ ErrorCode::InvalidLedger
    )]
    pub ledger: Box<Account<'info, ClaimLedger>>,

    #[account(
        mut,
        seeds = [CLAIM_SEED, ledger.key().as_ref(), holder.key().as_ref()],
        bump = from_claim.bump
    )]
    pub from_claim: Box<Account<'info, ClaimBalance>>,

    /// CHECK: only used as the identity of the new holder
    #[account(
        constraint = recipient.key() != holder.key() @ ErrorCode::InvalidRecipient,
        constraint = recipient.key() != Pubkey::default() @ ErrorCode::InvalidRecipient,
    )]
    pub recipient: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = holder,
        space = 8 + ClaimBalance::INIT_SPACE,
        seeds = [CLAIM_SEED, ledger.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub to_claim: Box<Account<'info, ClaimBalance>>,

    pub system_program: Program<'info, System>,
}

pub fn handler(mut ctx: Context<TransferClaim>, kind: ClaimKind, amount: u64) -> Result<()> {
    let option_key = ctx.accounts.option.key();
    let ledger_key = ctx.accounts.ledger.key();
    let from = ctx.accounts.holder.key();
    let to = ctx.accounts.recipient.key();

    let accounts = &mut ctx.accounts;
    accounts.to_claim.bind(ledger_key, to, ctx.bumps.to_claim);

    accounts.option.transfer_claim(
        &option_key,
        kind,
        &accounts.ledger,
        &mut accounts.from_claim,
        &mut accounts.to_claim,
        amount,
    )?;

    msg!("Transferred {} {} claims from {} to {}", amount, kind.suffix(), from, to);
    emit!(ClaimTransferred {
        instance: option_key,
        kind,
        from,
        to,
        amount,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::ErrorCode;
use crate::events::PositionUnwound;
use crate::state::{ClaimBalance, ClaimLeg, ClaimLedger, Custody, OptionInstance};
use crate::utils::{pda::CLAIM_SEED, transfer::release};

#[derive(Accounts)]
pub struct Unwind<'info> {
    #[account(mut)]
    pub holder: Signer<'info>,

    #[account(mut)]
    pub option: Box<Account<'info, OptionInstance>>,

    #[account(
        mut,
        constraint = writer_ledger.key() == option.writer_ledger @ ErrorCode::InvalidLedger
    )]
    pub writer_ledger: Box<Account<'info, ClaimLedger>>,

    #[account(
        mut,
        constraint = exerciser_ledger.key() == option.exerciser_ledger @ ErrorCode::InvalidLedger
    )]
    pub exerciser_ledger: Box<Account<'info, ClaimLedger>>,

    #[account(
        mut,
        seeds = [CLAIM_SEED, writer_ledger.key().as_ref(), holder.key().as_ref()],
        bump = writer_claim.bump
    )]
    pub writer_claim: Box<Account<'info, ClaimBalance>>,

    #[account(
        mut,
        seeds = [CLAIM_SEED, exerciser_ledger.key().as_ref(), holder.key().as_ref()],
        bump = exerciser_claim.bump
    )]
    pub exerciser_claim: Box<Account<'info, ClaimBalance>>,

    #[account(
        constraint = base_mint.key() == option.base_mint @ ErrorCode::InvalidMint
    )]
    pub base_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        constraint = base_vault.key() == option.base_vault @ ErrorCode::InvalidVault
    )]
    pub base_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, token::mint = base_mint)]
    pub holder_base_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Burns a matched pair of writer and exerciser claims and returns the
/// collateral 1:1 before expiration
pub fn handler(mut ctx: Context<Unwind>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let option_key = ctx.accounts.option.key();

    let accounts = &mut ctx.accounts;
    let custody = Custody {
        base: accounts.base_vault.amount,
        ..Custody::default()
    };

    let base_out = accounts.option.unwind(
        &option_key,
        ClaimLeg {
            ledger: &mut accounts.writer_ledger,
            balance: &mut accounts.writer_claim,
        },
        ClaimLeg {
            ledger: &mut accounts.exerciser_ledger,
            balance: &mut accounts.exerciser_claim,
        },
        amount,
        now,
        custody,
    )?;

    release(
        &accounts.token_program,
        &accounts.base_mint,
        &accounts.base_vault,
        &accounts.holder_base_account,
        &accounts.option,
        base_out,
    )?;

    msg!("Unwound {} options. Total unwound: {}", amount, accounts.option.total_unwound);
    emit!(PositionUnwound {
        instance: option_key,
        holder: accounts.holder.key(),
        amount,
    });

    Ok(())
}

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::ErrorCode;
use crate::events::OptionWritten;
use crate::state::{ClaimBalance, ClaimLeg, ClaimLedger, OptionInstance};
use crate::utils::{pda::CLAIM_SEED, transfer::deposit};

#[derive(Accounts)]
pub struct WriteOption<'info> {
    #[account(mut)]
    pub writer: Signer<'info>,

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
        init_if_needed,
        payer = writer,
        space = 8 + ClaimBalance::INIT_SPACE,
        seeds = [CLAIM_SEED, writer_ledger.key().as_ref(), writer.key().as_ref()],
        bump
    )]
    pub writer_claim: Box<Account<'info, ClaimBalance>>,

    #[account(
        init_if_needed,
        payer = writer,
        space = 8 + ClaimBalance::INIT_SPACE,
        seeds = [CLAIM_SEED, exerciser_ledger.key().as_ref(), writer.key().as_ref()],
        bump
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

    /// Writer's base token account (collateral source)
    #[account(
        mut,
        token::mint = base_mint,
        token::authority = writer,
    )]
    pub writer_base_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

/// Locks base collateral and mints matching writer and exerciser claims
pub fn handler(mut ctx: Context<WriteOption>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let option_key = ctx.accounts.option.key();
    let writer_key = ctx.accounts.writer.key();

    let accounts = &mut ctx.accounts;
    accounts
        .writer_claim
        .bind(accounts.writer_ledger.key(), writer_key, ctx.bumps.writer_claim);
    accounts
        .exerciser_claim
        .bind(accounts.exerciser_ledger.key(), writer_key, ctx.bumps.exerciser_claim);

    accounts.option.write(
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
    )?;

    deposit(
        &accounts.token_program,
        &accounts.base_mint,
        &accounts.writer_base_account,
        &accounts.base_vault,
        &accounts.writer,
        amount,
    )?;

    msg!(
        "Wrote {} options. Total written: {}",
        amount,
        accounts.option.total_written
    );
    emit!(OptionWritten {
        instance: option_key,
        writer: writer_key,
        amount,
    });

    Ok(())
}

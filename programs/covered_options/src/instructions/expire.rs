use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::ErrorCode;
use crate::events::OptionExpired;
use crate::state::{ClaimBalance, ClaimLeg, ClaimLedger, Custody, OptionInstance};
use crate::utils::{pda::CLAIM_SEED, transfer::release};

#[derive(Accounts)]
pub struct Expire<'info> {
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
        seeds = [CLAIM_SEED, writer_ledger.key().as_ref(), writer.key().as_ref()],
        bump = writer_claim.bump
    )]
    pub writer_claim: Box<Account<'info, ClaimBalance>>,

    #[account(
        constraint = base_mint.key() == option.base_mint @ ErrorCode::InvalidMint
    )]
    pub base_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        constraint = quote_mint.key() == option.quote_mint @ ErrorCode::InvalidMint
    )]
    pub quote_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        constraint = base_vault.key() == option.base_vault @ ErrorCode::InvalidVault
    )]
    pub base_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        constraint = quote_vault.key() == option.quote_vault @ ErrorCode::InvalidVault
    )]
    pub quote_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, token::mint = base_mint)]
    pub writer_base_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut, token::mint = quote_mint)]
    pub writer_quote_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Burns writer claims after expiration for a pro-rata share of base and
/// quote custody
pub fn handler(mut ctx: Context<Expire>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let option_key = ctx.accounts.option.key();

    let accounts = &mut ctx.accounts;
    let custody = Custody {
        base: accounts.base_vault.amount,
        quote: accounts.quote_vault.amount,
    };

    let settlement = accounts.option.expire(
        &option_key,
        ClaimLeg {
            ledger: &mut accounts.writer_ledger,
            balance: &mut accounts.writer_claim,
        },
        amount,
        now,
        custody,
    )?;

    release(
        &accounts.token_program,
        &accounts.base_mint,
        &accounts.base_vault,
        &accounts.writer_base_account,
        &accounts.option,
        settlement.base_out,
    )?;
    release(
        &accounts.token_program,
        &accounts.quote_mint,
        &accounts.quote_vault,
        &accounts.writer_quote_account,
        &accounts.option,
        settlement.quote_out,
    )?;

    msg!(
        "Expired {} writer claims. Base: {}, quote: {}",
        amount,
        settlement.base_out,
        settlement.quote_out
    );
    emit!(OptionExpired {
        instance: option_key,
        writer: accounts.writer.key(),
        amount,
        base_out: settlement.base_out,
        quote_out: settlement.quote_out,
    });

    Ok(())
}

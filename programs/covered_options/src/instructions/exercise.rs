use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::ErrorCode;
use crate::events::OptionExercised;
use crate::state::{ClaimBalance, ClaimLeg, ClaimLedger, Custody, OptionInstance};
use crate::utils::{
    pda::CLAIM_SEED,
    transfer::{deposit, release},
};

#[derive(Accounts)]
pub struct Exercise<'info> {
    #[account(mut)]
    pub exerciser: Signer<'info>,

    #[account(mut)]
    pub option: Box<Account<'info, OptionInstance>>,

    #[account(
        mut,
        constraint = exerciser_ledger.key() == option.exerciser_ledger @ ErrorCode::InvalidLedger
    )]
    pub exerciser_ledger: Box<Account<'info, ClaimLedger>>,

    #[account(
        mut,
        seeds = [CLAIM_SEED, exerciser_ledger.key().as_ref(), exerciser.key().as_ref()],
        bump = exerciser_claim.bump
    )]
    pub exerciser_claim: Box<Account<'info, ClaimBalance>>,

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

    /// Receives the released base asset
    #[account(mut, token::mint = base_mint)]
    pub exerciser_base_account: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Pays the quote asset
    #[account(
        mut,
        token::mint = quote_mint,
        token::authority = exerciser,
    )]
    pub exerciser_quote_account: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
}

/// Burns exerciser claims, pulls quote at the conversion rate into custody and
/// releases the same amount of base to the exerciser
pub fn handler(mut ctx: Context<Exercise>, amount: u64) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let option_key = ctx.accounts.option.key();

    let accounts = &mut ctx.accounts;
    let custody = Custody {
        base: accounts.base_vault.amount,
        quote: accounts.quote_vault.amount,
    };

    let settlement = accounts.option.exercise(
        &option_key,
        ClaimLeg {
            ledger: &mut accounts.exerciser_ledger,
            balance: &mut accounts.exerciser_claim,
        },
        amount,
        now,
        custody,
    )?;

    // 1. Quote from the exerciser into custody
    deposit(
        &accounts.token_program,
        &accounts.quote_mint,
        &accounts.exerciser_quote_account,
        &accounts.quote_vault,
        &accounts.exerciser,
        settlement.quote_in,
    )?;

    // 2. Base out of custody (OptionInstance PDA signs)
    release(
        &accounts.token_program,
        &accounts.base_mint,
        &accounts.base_vault,
        &accounts.exerciser_base_account,
        &accounts.option,
        settlement.base_out,
    )?;

    msg!(
        "Exercised {} options. Quote paid: {}. Total exercised: {}",
        amount,
        settlement.quote_in,
        accounts.option.total_exercised
    );
    emit!(OptionExercised {
        instance: option_key,
        exerciser: accounts.exerciser.key(),
        amount,
        quote_paid: settlement.quote_in,
    });

    Ok(())
}

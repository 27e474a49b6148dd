use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

use crate::errors::ErrorCode;
use crate::events::OptionCreated;
use crate::state::{ClaimKind, ClaimLedger, IndexSide, OptionInstance, OptionRecord, Registry};
use crate::utils::{
    accounts::append_to_symbol_index,
    pda::*,
    symbol::resolve_symbol,
    validation::{validate_conversion_rate, validate_distinct_assets, validate_expiration, MAX_SYMBOL_LEN},
};

/// Accounts for deploying a new option instance through the registry
///
/// The instance, record, ledgers and vaults are all created here. Symbol
/// indexes are created on first use and grown afterwards, so they are taken
/// unchecked and verified by seeds only.
#[derive(Accounts)]
#[instruction(
    conversion_rate: u128,
    expiration_time: i64,
    base_symbol: String,
    quote_symbol: String,
)]
pub struct CreateOption<'info> {
    // Symbols seed the index PDAs below; bound them before any derivation
    #[account(
        mut,
        constraint = base_symbol.len() <= MAX_SYMBOL_LEN @ ErrorCode::SymbolTooLong,
        constraint = quote_symbol.len() <= MAX_SYMBOL_LEN @ ErrorCode::SymbolTooLong,
    )]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [REGISTRY_SEED],
        bump = registry.bump
    )]
    pub registry: Box<Account<'info, Registry>>,

    #[account(
        init,
        payer = creator,
        space = 8 + OptionInstance::INIT_SPACE,
        seeds = [
            OPTION_SEED,
            registry.key().as_ref(),
            registry.count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub option: Box<Account<'info, OptionInstance>>,

    #[account(
        init,
        payer = creator,
        space = 8 + OptionRecord::INIT_SPACE,
        seeds = [
            RECORD_SEED,
            registry.key().as_ref(),
            registry.count.to_le_bytes().as_ref()
        ],
        bump
    )]
    pub record: Box<Account<'info, OptionRecord>>,

    #[account(
        init,
        payer = creator,
        space = 8 + ClaimLedger::INIT_SPACE,
        seeds = [WRITER_LEDGER_SEED, option.key().as_ref()],
        bump
    )]
    pub writer_ledger: Box<Account<'info, ClaimLedger>>,

    #[account(
        init,
        payer = creator,
        space = 8 + ClaimLedger::INIT_SPACE,
        seeds = [EXERCISER_LEDGER_SEED, option.key().as_ref()],
        bump
    )]
    pub exerciser_ledger: Box<Account<'info, ClaimLedger>>,

    #[account(mint::token_program = token_program)]
    pub base_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(mint::token_program = token_program)]
    pub quote_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Base custody (owned by the option PDA)
    #[account(
        init,
        payer = creator,
        seeds = [BASE_VAULT_SEED, option.key().as_ref()],
        bump,
        token::mint = base_mint,
        token::authority = option,
        token::token_program = token_program,
    )]
    pub base_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Quote custody, filled by exercises (owned by the option PDA)
    #[account(
        init,
        payer = creator,
        seeds = [QUOTE_VAULT_SEED, option.key().as_ref()],
        bump,
        token::mint = quote_mint,
        token::authority = option,
        token::token_program = token_program,
    )]
    pub quote_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// CHECK: SymbolIndex PDA, created or grown in the handler
    #[account(
        mut,
        seeds = [BASE_INDEX_SEED, base_symbol.as_bytes()],
        bump
    )]
    pub base_index: UncheckedAccount<'info>,

    /// CHECK: SymbolIndex PDA, created or grown in the handler
    #[account(
        mut,
        seeds = [QUOTE_INDEX_SEED, quote_symbol.as_bytes()],
        bump
    )]
    pub quote_index: UncheckedAccount<'info>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<CreateOption>,
    conversion_rate: u128,
    expiration_time: i64,
    base_symbol: String,
    quote_symbol: String,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    validate_conversion_rate(conversion_rate)?;
    validate_expiration(expiration_time, now)?;
    validate_distinct_assets(&ctx.accounts.base_mint.key(), &ctx.accounts.quote_mint.key())?;

    // Symbols come from the mints themselves; the arguments only name the index PDAs
    let base_symbol = resolve_symbol(&ctx.accounts.base_mint.to_account_info(), &base_symbol)?;
    let quote_symbol = resolve_symbol(&ctx.accounts.quote_mint.to_account_info(), &quote_symbol)?;

    let registry_key = ctx.accounts.registry.key();
    let id = ctx.accounts.registry.next_id()?;
    let option_key = ctx.accounts.option.key();

    let option = &mut ctx.accounts.option;
    option.registry = registry_key;
    option.id = id;
    option.base_mint = ctx.accounts.base_mint.key();
    option.quote_mint = ctx.accounts.quote_mint.key();
    option.conversion_rate = conversion_rate;
    option.expiration_time = expiration_time;
    option.bump = ctx.bumps.option;
    option.writer_ledger = ctx.accounts.writer_ledger.key();
    option.exerciser_ledger = ctx.accounts.exerciser_ledger.key();
    option.base_vault = ctx.accounts.base_vault.key();
    option.quote_vault = ctx.accounts.quote_vault.key();
    option.total_written = 0;
    option.total_exercised = 0;
    option.total_expired = 0;
    option.total_unwound = 0;

    for (ledger, kind, bump) in [
        (&mut ctx.accounts.writer_ledger, ClaimKind::Writer, ctx.bumps.writer_ledger),
        (&mut ctx.accounts.exerciser_ledger, ClaimKind::Exerciser, ctx.bumps.exerciser_ledger),
    ] {
        ledger.instance = option_key;
        ledger.kind = kind;
        ledger.name = ClaimLedger::name_for(&base_symbol, &quote_symbol, expiration_time, kind);
        ledger.total_supply = 0;
        ledger.bump = bump;
    }

    let record = &mut ctx.accounts.record;
    record.registry = registry_key;
    record.id = id;
    record.instance = option_key;
    record.base_mint = ctx.accounts.base_mint.key();
    record.quote_mint = ctx.accounts.quote_mint.key();
    record.base_symbol = base_symbol.clone();
    record.quote_symbol = quote_symbol.clone();
    record.conversion_rate = conversion_rate;
    record.expiration_time = expiration_time;
    record.bump = ctx.bumps.record;

    append_to_symbol_index(
        &ctx.accounts.base_index.to_account_info(),
        IndexSide::Base,
        &base_symbol,
        ctx.bumps.base_index,
        id,
        &ctx.accounts.creator,
        &ctx.accounts.system_program,
    )?;
    append_to_symbol_index(
        &ctx.accounts.quote_index.to_account_info(),
        IndexSide::Quote,
        &quote_symbol,
        ctx.bumps.quote_index,
        id,
        &ctx.accounts.creator,
        &ctx.accounts.system_program,
    )?;

    msg!(
        "Created option {}: {} -> {} at rate {} expiring {}",
        id,
        base_symbol,
        quote_symbol,
        conversion_rate,
        expiration_time
    );
    msg!("Writer ledger: {}", ctx.accounts.writer_ledger.name);
    msg!("Exerciser ledger: {}", ctx.accounts.exerciser_ledger.name);

    emit!(OptionCreated {
        id,
        instance: option_key,
        base_symbol,
        quote_symbol,
        conversion_rate,
        expiration_time,
    });

    Ok(())
}

use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::state::{
    records_for_symbol, ClaimBalance, ClaimKind, ClaimLedger, IndexSide, OptionInstance,
    OptionRecord, Registry, SymbolIndex,
};
use crate::utils::{accounts::load_program_account, pda::*};

// Read-only instructions. Clients call them through transaction simulation
// and read the result from return data.

#[derive(Accounts)]
pub struct RegistryView<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,
}

pub fn count(ctx: Context<RegistryView>) -> Result<u64> {
    Ok(ctx.accounts.registry.count)
}

#[derive(Accounts)]
#[instruction(id: u64)]
pub struct RecordView<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    /// CHECK: may not exist; checked against the registry count first
    #[account(
        seeds = [RECORD_SEED, registry.key().as_ref(), id.to_le_bytes().as_ref()],
        bump
    )]
    pub record: UncheckedAccount<'info>,
}

pub fn info_at(ctx: Context<RecordView>, id: u64) -> Result<OptionRecord> {
    ctx.accounts.registry.check_id(id)?;
    load_program_account::<OptionRecord>(&ctx.accounts.record)?
        .ok_or_else(|| error!(ErrorCode::NotFound))
}

/// Symbol index lookup
///
/// Remaining accounts: the `OptionRecord`s for index positions
/// `[offset, offset + n)`, in order.
#[derive(Accounts)]
pub struct SymbolView<'info> {
    #[account(seeds = [REGISTRY_SEED], bump = registry.bump)]
    pub registry: Account<'info, Registry>,

    /// CHECK: SymbolIndex PDA for the requested side and symbol, or an empty
    /// address when the symbol was never indexed; derived in the handler
    pub index: UncheckedAccount<'info>,
}

pub fn records_by_symbol(
    ctx: Context<SymbolView>,
    side: IndexSide,
    symbol: String,
    offset: u32,
) -> Result<Vec<OptionRecord>> {
    let registry_key = ctx.accounts.registry.key();
    let records = ctx
        .remaining_accounts
        .iter()
        .map(|info| -> Result<OptionRecord> {
            let record = load_program_account::<OptionRecord>(info)?
                .ok_or_else(|| error!(ErrorCode::IndexMismatch))?;
            require_keys_eq!(record.registry, registry_key, ErrorCode::IndexMismatch);
            Ok(record)
        })
        .collect::<Result<Vec<_>>>()?;

    // An oversized symbol was never indexed
    let index = match SymbolIndex::address(side, &symbol) {
        Some(expected) => {
            require_keys_eq!(ctx.accounts.index.key(), expected, ErrorCode::IndexMismatch);
            load_program_account::<SymbolIndex>(&ctx.accounts.index)?
        }
        None => None,
    };
    records_for_symbol(index.as_ref(), offset as usize, &records)
}

#[derive(Accounts)]
#[instruction(holder: Pubkey)]
pub struct ClaimBalanceView<'info> {
    pub option: Account<'info, OptionInstance>,

    #[account(
        constraint = ledger.instance == option.key() @ ErrorCode::InvalidLedger
    )]
    pub ledger: Account<'info, ClaimLedger>,

    /// CHECK: absent until the holder first receives claims
    #[account(
        seeds = [CLAIM_SEED, ledger.key().as_ref(), holder.as_ref()],
        bump
    )]
    pub balance: UncheckedAccount<'info>,
}

pub fn claim_balance(ctx: Context<ClaimBalanceView>, kind: ClaimKind, _holder: Pubkey) -> Result<u64> {
    let ledger = &ctx.accounts.ledger;
    require_keys_eq!(
        ctx.accounts.option.ledger_for(kind),
        ledger.key(),
        ErrorCode::InvalidLedger
    );

    let balance = load_program_account::<ClaimBalance>(&ctx.accounts.balance)?;
    Ok(ClaimLedger::balance_of(balance.as_ref()))
}

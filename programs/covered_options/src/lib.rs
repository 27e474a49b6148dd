use anchor_lang::prelude::*;

use instructions::*;
use state::{ClaimKind, IndexSide, OptionRecord};

pub mod errors;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

declare_id!("DKAwrQE6pzyV7j9waZLcSqMoJ23UCvBDLtv4Xo88HwPX");

#[program]
pub mod covered_options {
    use super::*;

    /// InitializeRegistry: creates the singleton option registry
    pub fn initialize_registry(ctx: Context<InitializeRegistry>) -> Result<()> {
        instructions::initialize_registry::handler(ctx)
    }

    /// CreateOption: deploys an instance with its claim ledgers and vaults and indexes it by symbol
    pub fn create_option(
        ctx: Context<CreateOption>,
        conversion_rate: u128,
        expiration_time: i64,
        base_symbol: String,
        quote_symbol: String,
    ) -> Result<()> {
        instructions::create_option::handler(ctx, conversion_rate, expiration_time, base_symbol, quote_symbol)
    }

    /// Write: lock base collateral → mint writer + exerciser claims 1:1
    pub fn write_option(ctx: Context<WriteOption>, amount: u64) -> Result<()> {
        instructions::write_option::handler(ctx, amount)
    }

    /// TransferWriterClaim: move writer claims to another holder
    pub fn transfer_writer_claim(ctx: Context<TransferClaim>, amount: u64) -> Result<()> {
        instructions::transfer_claim::handler(ctx, ClaimKind::Writer, amount)
    }

    /// TransferExerciserClaim: move exerciser claims to another holder
    pub fn transfer_exerciser_claim(ctx: Context<TransferClaim>, amount: u64) -> Result<()> {
        instructions::transfer_claim::handler(ctx, ClaimKind::Exerciser, amount)
    }

    /// Exercise: burn exerciser claims, pay quote → receive base
    pub fn exercise(ctx: Context<Exercise>, amount: u64) -> Result<()> {
        instructions::exercise::handler(ctx, amount)
    }

    /// Expire: post-expiry pro-rata of base + quote custody by burning writer claims
    pub fn expire(ctx: Context<Expire>, amount: u64) -> Result<()> {
        instructions::expire::handler(ctx, amount)
    }

    /// Unwind: burn both claims to reclaim base 1:1 before expiry
    pub fn unwind(ctx: Context<Unwind>, amount: u64) -> Result<()> {
        instructions::unwind::handler(ctx, amount)
    }

    /// Count: number of options created (return data)
    pub fn count(ctx: Context<RegistryView>) -> Result<u64> {
        instructions::queries::count(ctx)
    }

    /// InfoAt: the registry record for an id (return data)
    pub fn info_at(ctx: Context<RecordView>, id: u64) -> Result<OptionRecord> {
        instructions::queries::info_at(ctx, id)
    }

    /// RecordsByBaseSymbol: one page of records sharing a base symbol (return data)
    pub fn records_by_base_symbol(
        ctx: Context<SymbolView>,
        symbol: String,
        offset: u32,
    ) -> Result<Vec<OptionRecord>> {
        instructions::queries::records_by_symbol(ctx, IndexSide::Base, symbol, offset)
    }

    /// RecordsByQuoteSymbol: one page of records sharing a quote symbol (return data)
    pub fn records_by_quote_symbol(
        ctx: Context<SymbolView>,
        symbol: String,
        offset: u32,
    ) -> Result<Vec<OptionRecord>> {
        instructions::queries::records_by_symbol(ctx, IndexSide::Quote, symbol, offset)
    }

    /// WriterClaimBalance: a holder's writer claims, zero if never held (return data)
    pub fn writer_claim_balance(ctx: Context<ClaimBalanceView>, holder: Pubkey) -> Result<u64> {
        instructions::queries::claim_balance(ctx, ClaimKind::Writer, holder)
    }

    /// ExerciserClaimBalance: a holder's exerciser claims, zero if never held (return data)
    pub fn exerciser_claim_balance(ctx: Context<ClaimBalanceView>, holder: Pubkey) -> Result<u64> {
        instructions::queries::claim_balance(ctx, ClaimKind::Exerciser, holder)
    }
}

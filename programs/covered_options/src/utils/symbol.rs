use anchor_lang::prelude::*;
use anchor_spl::token_2022::spl_token_2022::{
    extension::{BaseStateWithExtensions, StateWithExtensions},
    state::Mint as MintState,
};
use anchor_spl::token_2022_extensions::spl_token_metadata_interface::state::TokenMetadata;

use crate::errors::ErrorCode;
use crate::utils::validation::validate_symbol;

/// Reads the asset symbol from a mint's embedded Token-2022 metadata
///
/// Mints without the metadata extension (including classic SPL Token mints)
/// have no on-chain symbol and are rejected with `SymbolUnavailable`.
pub fn symbol_from_mint_data(data: &[u8]) -> Result<String> {
    let mint = StateWithExtensions::<MintState>::unpack(data)
        .map_err(|_| error!(ErrorCode::SymbolUnavailable))?;
    let metadata = mint
        .get_variable_len_extension::<TokenMetadata>()
        .map_err(|_| error!(ErrorCode::SymbolUnavailable))?;

    validate_symbol(&metadata.symbol)?;
    Ok(metadata.symbol)
}

/// Symbol of the mint whose account data is `data`; must equal `expected`
pub fn check_symbol(data: &[u8], expected: &str) -> Result<String> {
    let symbol = symbol_from_mint_data(data)?;
    require!(symbol == expected, ErrorCode::SymbolMismatch);
    Ok(symbol)
}

pub fn resolve_symbol(mint: &AccountInfo, expected: &str) -> Result<String> {
    let data = mint.try_borrow_data()?;
    check_symbol(&data, expected)
}

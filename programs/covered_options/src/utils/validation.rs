use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Longest asset symbol the registry indexes (Metaplex/Token-2022 convention)
pub const MAX_SYMBOL_LEN: usize = 10;

/// Validates that an amount is greater than zero
pub fn validate_amount(amount: u64) -> Result<()> {
    require!(amount > 0, ErrorCode::InvalidAmount);
    Ok(())
}

/// Validates that expiration is in the future
pub fn validate_expiration(expiration: i64, now: i64) -> Result<()> {
    require!(expiration > now, ErrorCode::ExpirationInPast);
    Ok(())
}

/// Validates that the conversion rate is non-zero
pub fn validate_conversion_rate(conversion_rate: u128) -> Result<()> {
    require!(conversion_rate > 0, ErrorCode::InvalidConversionRate);
    Ok(())
}

/// Validates that option has not expired (for pre-expiry operations)
pub fn validate_not_expired(expiration: i64, now: i64) -> Result<()> {
    require!(now < expiration, ErrorCode::Expired);
    Ok(())
}

/// Validates that option has expired (for post-expiry operations)
pub fn validate_expired(expiration: i64, now: i64) -> Result<()> {
    require!(now >= expiration, ErrorCode::NotYetExpired);
    Ok(())
}

/// Validates sufficient custody for a release from a vault
pub fn validate_custody(custody: u64, required: u64) -> Result<()> {
    require!(custody >= required, ErrorCode::InsufficientCustody);
    Ok(())
}

/// Validates that a paying token account can fund a pull transfer
pub fn validate_funding(balance: u64, required: u64) -> Result<()> {
    require!(balance >= required, ErrorCode::TransferFailed);
    Ok(())
}

/// Validates that an option pairs two different assets
pub fn validate_distinct_assets(base_mint: &Pubkey, quote_mint: &Pubkey) -> Result<()> {
    require_keys_neq!(*base_mint, *quote_mint, ErrorCode::IdenticalAssets);
    Ok(())
}

pub fn validate_symbol(symbol: &str) -> Result<()> {
    require!(!symbol.is_empty(), ErrorCode::SymbolUnavailable);
    require!(symbol.len() <= MAX_SYMBOL_LEN, ErrorCode::SymbolTooLong);
    Ok(())
}

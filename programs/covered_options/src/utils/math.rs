use anchor_lang::prelude::*;
use crate::errors::ErrorCode;

/// Fixed-point scale of `conversion_rate` (1.0 == 10^18)
pub const RATE_SCALE: u128 = 1_000_000_000_000_000_000;

/// Calculates the quote payment owed for exercising `amount` base units
/// Formula: (amount × conversion_rate) / 10^18, rounded down
///
/// Example: 10 base units at a rate of 0.5 (5 × 10^17) = 5 quote units
pub fn calculate_quote_due(amount: u64, conversion_rate: u128) -> Result<u64> {
    let due = (amount as u128)
        .checked_mul(conversion_rate)
        .ok_or(ErrorCode::MathOverflow)?
        .checked_div(RATE_SCALE)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(due).map_err(|_| error!(ErrorCode::MathOverflow))
}

/// Calculates pro-rata share using u128 for intermediate calculations
/// payout = (custody × claim_amount) / claim_supply
///
/// Returns 0 if custody is 0 (nothing to distribute)
/// Errors if claim_supply is 0
pub fn calculate_pro_rata_share(custody: u64, claim_amount: u64, claim_supply: u64) -> Result<u64> {
    require!(claim_supply > 0, ErrorCode::InsufficientBalance);

    if custody == 0 {
        return Ok(0);
    }

    let numerator = (custody as u128)
        .checked_mul(claim_amount as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    let payout = numerator
        .checked_div(claim_supply as u128)
        .ok_or(ErrorCode::MathOverflow)?;

    u64::try_from(payout).map_err(|_| error!(ErrorCode::MathOverflow))
}

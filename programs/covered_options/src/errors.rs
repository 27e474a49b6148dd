use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Claim balance is lower than the requested amount")]
    InsufficientBalance,

    #[msg("Asset transfer rejected: payer balance does not cover the amount")]
    TransferFailed,

    #[msg("Only the owning option instance may mutate this claim ledger")]
    Unauthorized,

    #[msg("Option has expired")]
    Expired,

    #[msg("Option has not expired yet")]
    NotYetExpired,

    #[msg("No option record at this id")]
    NotFound,

    #[msg("Claims cannot be transferred to this recipient")]
    InvalidRecipient,

    #[msg("Option custody holds less than the requested amount")]
    InsufficientCustody,

    #[msg("Amount must be greater than zero")]
    InvalidAmount,

    #[msg("Math operation overflow")]
    MathOverflow,

    // Creation parameters
    #[msg("Expiration must be in the future")]
    ExpirationInPast,

    #[msg("Conversion rate must be greater than zero")]
    InvalidConversionRate,

    #[msg("Base and quote assets must be different mints")]
    IdenticalAssets,

    #[msg("Mint carries no token metadata symbol")]
    SymbolUnavailable,

    #[msg("Asset symbol is too long")]
    SymbolTooLong,

    #[msg("Supplied symbol does not match the mint metadata")]
    SymbolMismatch,

    // Account wiring
    #[msg("Mint does not belong to this option")]
    InvalidMint,

    #[msg("Vault does not belong to this option")]
    InvalidVault,

    #[msg("Claim ledger does not belong to this option or has the wrong kind")]
    InvalidLedger,

    // Registry queries
    #[msg("Record accounts do not match the symbol index")]
    IndexMismatch,

    #[msg("Too many records requested in one page")]
    PageTooLarge,
}

#[cfg(test)]
pub(crate) fn assert_error<T: std::fmt::Debug>(result: Result<T>, expected: ErrorCode) {
    let expected_code = expected as u32 + anchor_lang::error::ERROR_CODE_OFFSET;
    match result {
        Err(anchor_lang::error::Error::AnchorError(err)) => {
            assert_eq!(
                err.error_code_number, expected_code,
                "expected {}, got {}",
                expected_code, err.error_name
            );
        }
        other => panic!("expected error {}, got {:?}", expected_code, other),
    }
}

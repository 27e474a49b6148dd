use anchor_lang::prelude::*;

use crate::state::ClaimKind;

#[event]
pub struct OptionCreated {
    pub id: u64,
    pub instance: Pubkey,
    pub base_symbol: String,
    pub quote_symbol: String,
    pub conversion_rate: u128,
    pub expiration_time: i64,
}

#[event]
pub struct OptionWritten {
    pub instance: Pubkey,
    pub writer: Pubkey,
    pub amount: u64,
}

#[event]
pub struct ClaimTransferred {
    pub instance: Pubkey,
    pub kind: ClaimKind,
    pub from: Pubkey,
    pub to: Pubkey,
    pub amount: u64,
}

#[event]
pub struct OptionExercised {
    pub instance: Pubkey,
    pub exerciser: Pubkey,
    pub amount: u64,
    pub quote_paid: u64,
}

/// Writer claims settled against custody after expiration
#[event]
pub struct OptionExpired {
    pub instance: Pubkey,
    pub writer: Pubkey,
    pub amount: u64,
    pub base_out: u64,
    pub quote_out: u64,
}

#[event]
pub struct PositionUnwound {
    pub instance: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
}

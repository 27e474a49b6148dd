use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::state::claim_ledger::{ClaimBalance, ClaimKind, ClaimLedger};
use crate::utils::{
    math::{calculate_pro_rata_share, calculate_quote_due},
    validation::{validate_amount, validate_custody, validate_expired, validate_not_expired},
};

/// Settlement state for one (base, quote, conversion rate, expiration) series
///
/// PDA Seeds: "option", registry, id (little endian)
///
/// Stored Data:
/// - Immutable series parameters and the addresses created with the series
///   (claim ledgers, custody vaults)
/// - Running totals used to check claim supply against custody
///
/// The phase (Active / Expired) is never stored; every operation derives it
/// from the clock it is handed.
#[account]
#[derive(InitSpace)]
pub struct OptionInstance {
    // === SERIES PARAMETERS ===
    pub registry: Pubkey,
    pub id: u64,
    pub base_mint: Pubkey,
    pub quote_mint: Pubkey,
    pub conversion_rate: u128,        // quote per base, scaled by 10^18
    pub expiration_time: i64,
    pub bump: u8,

    // === DERIVED ADDRESSES ===
    pub writer_ledger: Pubkey,
    pub exerciser_ledger: Pubkey,
    pub base_vault: Pubkey,
    pub quote_vault: Pubkey,

    // === RUNTIME DATA ===
    pub total_written: u64,
    pub total_exercised: u64,
    pub total_expired: u64,
    pub total_unwound: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Active,
    Expired,
}

impl Phase {
    pub fn at(now: i64, expiration_time: i64) -> Phase {
        if now < expiration_time {
            Phase::Active
        } else {
            Phase::Expired
        }
    }
}

/// Vault balances observed at the start of an operation
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Custody {
    pub base: u64,
    pub quote: u64,
}

/// A claim ledger together with one holder's balance on it
pub struct ClaimLeg<'a> {
    pub ledger: &'a mut ClaimLedger,
    pub balance: &'a mut ClaimBalance,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExerciseSettlement {
    /// Quote pulled from the exerciser into the quote vault
    pub quote_in: u64,
    /// Base released from the base vault to the exerciser
    pub base_out: u64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpirySettlement {
    pub base_out: u64,
    pub quote_out: u64,
}

impl OptionInstance {
    pub fn phase(&self, now: i64) -> Phase {
        Phase::at(now, self.expiration_time)
    }

    pub fn ledger_for(&self, kind: ClaimKind) -> Pubkey {
        match kind {
            ClaimKind::Writer => self.writer_ledger,
            ClaimKind::Exerciser => self.exerciser_ledger,
        }
    }

    /// Writer claims that have not been reclaimed or unwound
    pub fn outstanding_writer_claims(&self) -> u64 {
        self.total_written
            .saturating_sub(self.total_expired)
            .saturating_sub(self.total_unwound)
    }

    /// Exerciser claims that have not been exercised or unwound
    pub fn outstanding_exerciser_claims(&self) -> u64 {
        self.total_written
            .saturating_sub(self.total_exercised)
            .saturating_sub(self.total_unwound)
    }

    fn check_leg(&self, leg: &ClaimLeg, kind: ClaimKind) -> Result<()> {
        require!(leg.ledger.kind == kind, ErrorCode::InvalidLedger);
        Ok(())
    }

    fn check_balance(leg: &ClaimLeg, amount: u64) -> Result<()> {
        require!(leg.balance.amount >= amount, ErrorCode::InsufficientBalance);
        Ok(())
    }

    /// Locks `amount` of base collateral: mints `amount` of both claims to the writer.
    /// The caller moves the collateral into the base vault.
    pub fn write(
        &mut self,
        instance_key: &Pubkey,
        writer: ClaimLeg,
        exerciser: ClaimLeg,
        amount: u64,
        now: i64,
    ) -> Result<()> {
        validate_not_expired(self.expiration_time, now)?;
        validate_amount(amount)?;
        self.check_leg(&writer, ClaimKind::Writer)?;
        self.check_leg(&exerciser, ClaimKind::Exerciser)?;

        let total_written = self
            .total_written
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        writer.ledger.mint(instance_key, writer.balance, amount)?;
        exerciser.ledger.mint(instance_key, exerciser.balance, amount)?;
        self.total_written = total_written;
        Ok(())
    }

    /// Reassigns claims between holders; custody is untouched
    pub fn transfer_claim(
        &self,
        instance_key: &Pubkey,
        kind: ClaimKind,
        ledger: &ClaimLedger,
        from: &mut ClaimBalance,
        to: &mut ClaimBalance,
        amount: u64,
    ) -> Result<()> {
        require!(ledger.kind == kind, ErrorCode::InvalidLedger);
        ledger.transfer(instance_key, from, to, amount)
    }

    /// Burns `amount` exerciser claims in exchange for `amount` base at the
    /// fixed conversion rate. Writer claims are untouched.
    pub fn exercise(
        &mut self,
        instance_key: &Pubkey,
        exerciser: ClaimLeg,
        amount: u64,
        now: i64,
        custody: Custody,
    ) -> Result<ExerciseSettlement> {
        validate_not_expired(self.expiration_time, now)?;
        validate_amount(amount)?;
        self.check_leg(&exerciser, ClaimKind::Exerciser)?;

        let quote_in = calculate_quote_due(amount, self.conversion_rate)?;
        // Dust exercises would release base for free
        require!(quote_in > 0, ErrorCode::InvalidAmount);

        let total_exercised = self
            .total_exercised
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Self::check_balance(&exerciser, amount)?;
        validate_custody(custody.base, amount)?;

        exerciser.ledger.burn(instance_key, exerciser.balance, amount)?;
        self.total_exercised = total_exercised;

        Ok(ExerciseSettlement { quote_in, base_out: amount })
    }

    /// Burns `amount` writer claims after expiration and pays their pro-rata
    /// share of both custody vaults. Without prior exercises this is exactly
    /// `amount` base.
    pub fn expire(
        &mut self,
        instance_key: &Pubkey,
        writer: ClaimLeg,
        amount: u64,
        now: i64,
        custody: Custody,
    ) -> Result<ExpirySettlement> {
        validate_expired(self.expiration_time, now)?;
        validate_amount(amount)?;
        self.check_leg(&writer, ClaimKind::Writer)?;

        let supply = writer.ledger.total_supply;
        let total_expired = self
            .total_expired
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Self::check_balance(&writer, amount)?;

        let base_out = calculate_pro_rata_share(custody.base, amount, supply)?;
        let quote_out = calculate_pro_rata_share(custody.quote, amount, supply)?;
        // Claims too small to carry any share would be burned for nothing
        require!(base_out > 0 || quote_out > 0, ErrorCode::InvalidAmount);
        validate_custody(custody.base, base_out)?;

        writer.ledger.burn(instance_key, writer.balance, amount)?;
        self.total_expired = total_expired;

        Ok(ExpirySettlement { base_out, quote_out })
    }

    /// Burns matched writer and exerciser claims from one holder and returns
    /// the covered collateral 1:1. Only while Active.
    pub fn unwind(
        &mut self,
        instance_key: &Pubkey,
        writer: ClaimLeg,
        exerciser: ClaimLeg,
        amount: u64,
        now: i64,
        custody: Custody,
    ) -> Result<u64> {
        validate_not_expired(self.expiration_time, now)?;
        validate_amount(amount)?;
        self.check_leg(&writer, ClaimKind::Writer)?;
        self.check_leg(&exerciser, ClaimKind::Exerciser)?;

        let total_unwound = self
            .total_unwound
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;

        Self::check_balance(&writer, amount)?;
        Self::check_balance(&exerciser, amount)?;
        validate_custody(custody.base, amount)?;

        writer.ledger.burn(instance_key, writer.balance, amount)?;
        exerciser.ledger.burn(instance_key, exerciser.balance, amount)?;
        self.total_unwound = total_unwound;

        Ok(amount)
    }
}

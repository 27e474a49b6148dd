use anchor_lang::prelude::*;

use crate::errors::ErrorCode;
use crate::utils::validation::validate_amount;

/// Which right a claim ledger tracks
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum ClaimKind {
    /// Reclaims custody after expiration
    Writer,
    /// Redeems base asset for quote asset before expiration
    Exerciser,
}

impl ClaimKind {
    pub fn suffix(&self) -> &'static str {
        match self {
            ClaimKind::Writer => "Writer",
            ClaimKind::Exerciser => "Exerciser",
        }
    }
}

/// Fungible ledger for one class of claim on an option instance
///
/// PDA Seeds: "writer_ledger" | "exerciser_ledger", option instance
///
/// Balances live in per-holder `ClaimBalance` accounts. Only the owning
/// instance may mint, burn or move them; every mutation takes the caller's
/// authority and compares it with `instance`.
#[account]
#[derive(InitSpace)]
pub struct ClaimLedger {
    pub instance: Pubkey,
    pub kind: ClaimKind,
    // "BASE-QUOTE-<expiration>-Exerciser" with 10-char symbols fits in 64
    #[max_len(64)]
    pub name: String,
    pub total_supply: u64,
    pub bump: u8,
}

/// One holder's balance on a claim ledger
///
/// PDA Seeds: "claim", ledger, holder
#[account]
#[derive(InitSpace)]
pub struct ClaimBalance {
    pub ledger: Pubkey,
    pub holder: Pubkey,
    pub amount: u64,
    pub bump: u8,
}

impl ClaimBalance {
    /// Fills in identity fields on a freshly created balance account
    pub fn bind(&mut self, ledger: Pubkey, holder: Pubkey, bump: u8) {
        if self.ledger == Pubkey::default() {
            self.ledger = ledger;
            self.holder = holder;
            self.bump = bump;
        }
    }
}

impl ClaimLedger {
    pub fn name_for(base_symbol: &str, quote_symbol: &str, expiration: i64, kind: ClaimKind) -> String {
        format!("{}-{}-{}-{}", base_symbol, quote_symbol, expiration, kind.suffix())
    }

    pub fn balance_of(balance: Option<&ClaimBalance>) -> u64 {
        balance.map_or(0, |b| b.amount)
    }

    fn authorize(&self, authority: &Pubkey) -> Result<()> {
        require_keys_eq!(*authority, self.instance, ErrorCode::Unauthorized);
        Ok(())
    }

    pub fn mint(&mut self, authority: &Pubkey, holder: &mut ClaimBalance, amount: u64) -> Result<()> {
        self.authorize(authority)?;
        validate_amount(amount)?;

        let balance = holder.amount.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;
        let supply = self.total_supply.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;

        holder.amount = balance;
        self.total_supply = supply;
        Ok(())
    }

    pub fn burn(&mut self, authority: &Pubkey, holder: &mut ClaimBalance, amount: u64) -> Result<()> {
        self.authorize(authority)?;
        validate_amount(amount)?;
        require!(holder.amount >= amount, ErrorCode::InsufficientBalance);

        holder.amount -= amount;
        self.total_supply = self
            .total_supply
            .checked_sub(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    pub fn transfer(
        &self,
        authority: &Pubkey,
        from: &mut ClaimBalance,
        to: &mut ClaimBalance,
        amount: u64,
    ) -> Result<()> {
        self.authorize(authority)?;
        validate_amount(amount)?;
        require!(
            to.holder != Pubkey::default() && to.holder != from.holder && to.holder != self.instance,
            ErrorCode::InvalidRecipient
        );
        require!(from.amount >= amount, ErrorCode::InsufficientBalance);

        let credited = to.amount.checked_add(amount).ok_or(ErrorCode::MathOverflow)?;
        from.amount -= amount;
        to.amount = credited;
        Ok(())
    }
}

use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self as token, Mint, TokenAccount, TokenInterface};

use crate::state::OptionInstance;
use crate::utils::{pda::option_signer_seeds, validation::validate_funding};

/// Pulls `amount` from a user's token account into an option vault
/// The signer must own `from`; no allowance is involved.
pub fn deposit<'info>(
    token_program: &Interface<'info, TokenInterface>,
    mint: &InterfaceAccount<'info, Mint>,
    from: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    authority: &Signer<'info>,
    amount: u64,
) -> Result<()> {
    validate_funding(from.amount, amount)?;

    token::transfer_checked(
        CpiContext::new(
            token_program.to_account_info(),
            token::TransferChecked {
                from: from.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: authority.to_account_info(),
            },
        ),
        amount,
        mint.decimals,
    )
}

/// Releases `amount` from an option vault (OptionInstance PDA signs)
pub fn release<'info>(
    token_program: &Interface<'info, TokenInterface>,
    mint: &InterfaceAccount<'info, Mint>,
    vault: &InterfaceAccount<'info, TokenAccount>,
    to: &InterfaceAccount<'info, TokenAccount>,
    option: &Account<'info, OptionInstance>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let id_bytes = option.id.to_le_bytes();
    let bump_bytes = [option.bump];
    let seeds = option_signer_seeds(option.registry.as_ref(), &id_bytes, &bump_bytes);
    let signer_seeds: &[&[&[u8]]] = &[&seeds];

    token::transfer_checked(
        CpiContext::new_with_signer(
            token_program.to_account_info(),
            token::TransferChecked {
                from: vault.to_account_info(),
                mint: mint.to_account_info(),
                to: to.to_account_info(),
                authority: option.to_account_info(),
            },
            signer_seeds,
        ),
        amount,
        mint.decimals,
    )
}

use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::errors::ErrorCode;
use crate::state::{IndexSide, SymbolIndex};

/// Deserializes an optional program account
///
/// Returns `None` while the address is still a bare system account (never
/// created, possibly pre-funded). Anything else must be owned by this program.
pub fn load_program_account<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner == &system_program::ID && info.data_is_empty() {
        return Ok(None);
    }
    if info.owner != &T::owner() {
        return Err(anchor_lang::error::ErrorCode::AccountOwnedByWrongProgram.into());
    }

    let data = info.try_borrow_data()?;
    T::try_deserialize(&mut &data[..]).map(Some)
}

/// Appends `id` to the symbol index PDA at `index`, creating the account on
/// first use and growing it (rent paid by `payer`) afterwards
pub fn append_to_symbol_index<'info>(
    index: &AccountInfo<'info>,
    side: IndexSide,
    symbol: &str,
    bump: u8,
    id: u64,
    payer: &Signer<'info>,
    system: &Program<'info, System>,
) -> Result<()> {
    let mut state = load_program_account::<SymbolIndex>(index)?
        .unwrap_or_else(|| SymbolIndex::new(side, symbol, bump));
    require!(state.side == side && state.symbol == symbol, ErrorCode::IndexMismatch);
    state.append(id)?;

    let space = SymbolIndex::space(state.ids.len());
    let required = Rent::get()?.minimum_balance(space);
    let shortfall = required.saturating_sub(index.lamports());

    let bump_bytes = [bump];
    let seeds: &[&[u8]] = &[side.seed(), symbol.as_bytes(), &bump_bytes];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    if index.owner == &crate::ID {
        if shortfall > 0 {
            fund(index, payer, system, shortfall)?;
        }
        #[allow(deprecated)]
        index.realloc(space, false)?;
    } else if index.lamports() == 0 {
        system_program::create_account(
            CpiContext::new_with_signer(
                system.to_account_info(),
                system_program::CreateAccount {
                    from: payer.to_account_info(),
                    to: index.clone(),
                },
                signer_seeds,
            ),
            required,
            space as u64,
            &crate::ID,
        )?;
    } else {
        // Someone sent lamports to the address first; create_account would fail
        if shortfall > 0 {
            fund(index, payer, system, shortfall)?;
        }
        system_program::allocate(
            CpiContext::new_with_signer(
                system.to_account_info(),
                system_program::Allocate { account_to_allocate: index.clone() },
                signer_seeds,
            ),
            space as u64,
        )?;
        system_program::assign(
            CpiContext::new_with_signer(
                system.to_account_info(),
                system_program::Assign { account_to_assign: index.clone() },
                signer_seeds,
            ),
            &crate::ID,
        )?;
    }

    let mut data = index.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    state.try_serialize(&mut writer)?;

    msg!("Indexed option {} under {:?} symbol {}", id, side, symbol);
    Ok(())
}

fn fund<'info>(
    to: &AccountInfo<'info>,
    payer: &Signer<'info>,
    system: &Program<'info, System>,
    lamports: u64,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system.to_account_info(),
            system_program::Transfer {
                from: payer.to_account_info(),
                to: to.clone(),
            },
        ),
        lamports,
    )
}

use anchor_lang::prelude::*;

use crate::state::Registry;
use crate::utils::pda::REGISTRY_SEED;

#[derive(Accounts)]
pub struct InitializeRegistry<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = authority,
        space = 8 + Registry::INIT_SPACE,
        seeds = [REGISTRY_SEED],
        bump
    )]
    pub registry: Account<'info, Registry>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<InitializeRegistry>) -> Result<()> {
    let registry = &mut ctx.accounts.registry;
    registry.authority = ctx.accounts.authority.key();
    registry.count = 0;
    registry.bump = ctx.bumps.registry;

    msg!("Option registry initialized at {}", registry.key());
    Ok(())
}

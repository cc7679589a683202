// Micro-Grants DAO Program
//
// Account layer for name-addressed DAOs. Every DAO owns two PDAs derived from
// its name: the DAO record (["dao", name]) and its Treasury (["treasury", name]).
//
// Instructions:
// - create_dao: allocate and initialize both records atomically
// - verify_dao: re-check the DAO -> Treasury link and stored invariants

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod initializer;
pub mod instructions;
pub mod name;
pub mod pda;
pub mod state;

pub use instructions::*;
pub use errors::*;
pub use state::*;

declare_id!("B3soWfYRTR2R4J9oDdky11nz5m1k92sizz9TcW2jaGps");

#[program]
pub mod micro_grants {
    use super::*;

    // Create a DAO and its treasury from a name
    // Rejects taken or oversized names and payers short of rent
    pub fn create_dao(
        ctx: Context<CreateDao>,
        governance_token_mint: Pubkey,
        dao_name: String,
    ) -> Result<()> {
        ctx.accounts.create_dao(governance_token_mint, dao_name)
    }

    // Verify a DAO's linkage and stored invariants without modifying anything
    pub fn verify_dao(ctx: Context<VerifyDao>, dao_name: String) -> Result<()> {
        ctx.accounts.verify_dao(dao_name)
    }
}

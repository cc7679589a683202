use anchor_lang::prelude::*;

use crate::{constants::*, errors::DaoError, pda::verify_address};

// Treasury account
// PDA seeds: ["treasury", dao_name]
// Holds no back-reference to its DAO; the DAO is found by re-deriving from the name.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct Treasury {
    // Governance token this treasury tracks
    pub treasury_mint: Pubkey,

    // Starts at 0
    pub balance: u64,

    // PDA bump seed for this account (independent of the DAO bump)
    pub bump: u8,
}

impl Treasury {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + Treasury::INIT_SPACE;

    pub fn new(treasury_mint: Pubkey, bump: u8) -> Self {
        Self {
            treasury_mint,
            balance: 0,
            bump,
        }
    }

    pub fn check_invariants(
        &self,
        address: &Pubkey,
        name_seed: &[u8],
        program_id: &Pubkey,
    ) -> Result<()> {
        require!(
            verify_address(TREASURY_SEED, name_seed, self.bump, program_id, address),
            DaoError::InvalidTreasuryAddress
        );
        Ok(())
    }
}

const _: () = assert!(Treasury::SPACE == 49);

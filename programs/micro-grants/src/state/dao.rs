use anchor_lang::prelude::*;

use crate::{
    constants::*,
    errors::DaoError,
    name::{decode_name, name_seed, EncodedName},
    pda::verify_address,
};

// DAO account
// PDA seeds: ["dao", dao_name]
// Fixed layout: the name is a zero-padded buffer, not a String, so the
// account never needs to grow.
#[account]
#[derive(InitSpace, Debug, PartialEq, Eq)]
pub struct DaoAccount {
    // Identity allowed to administer the DAO (permission reference only)
    pub authority: Pubkey,

    // Treasury PDA, written once at creation
    pub treasury: Pubkey,

    // Zero-padded UTF-8 name
    pub dao_name: [u8; MAX_DAO_NAME_LENGTH],

    // Proposals created so far. Starts at 0 and never decreases.
    pub proposal_count: u64,

    // PDA bump seed for this account
    pub bump: u8,
}

impl DaoAccount {
    pub const SPACE: usize = ANCHOR_DISCRIMINATOR + DaoAccount::INIT_SPACE;

    pub fn new(authority: Pubkey, treasury: Pubkey, dao_name: EncodedName, bump: u8) -> Self {
        Self {
            authority,
            treasury,
            dao_name,
            proposal_count: 0,
            bump,
        }
    }

    pub fn name(&self) -> Result<String> {
        decode_name(&self.dao_name)
    }

    pub fn name_seed(&self) -> &[u8] {
        name_seed(&self.dao_name)
    }

    // Load-time invariants
    // The stored name must decode and, with the stored bump, reproduce `address`.
    pub fn check_invariants(&self, address: &Pubkey, program_id: &Pubkey) -> Result<()> {
        self.name()?;
        require!(
            verify_address(DAO_SEED, self.name_seed(), self.bump, program_id, address),
            DaoError::InvalidDaoAddress
        );
        Ok(())
    }
}

const _: () = assert!(DaoAccount::SPACE == 113);

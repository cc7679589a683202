// Deterministic Address Derivation
//
// DAO and Treasury records sit at program-derived addresses:
//   DAO:      ["dao", name_bytes]
//   Treasury: ["treasury", name_bytes]
// where name_bytes is the unpadded name. Any client holding the name and the
// program id can re-locate both records without a registry.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::DaoError};

// Find the canonical address and bump for a tag + name
// Scans bumps from 255 downward and returns the first off-curve hit.
pub fn find_address(tag: &[u8], name_seed: &[u8], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    Pubkey::try_find_program_address(&[tag, name_seed], program_id)
        .ok_or_else(|| error!(DaoError::NoValidAddressFound))
}

pub fn find_dao_address(name_seed: &[u8], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    find_address(DAO_SEED, name_seed, program_id)
}

pub fn find_treasury_address(name_seed: &[u8], program_id: &Pubkey) -> Result<(Pubkey, u8)> {
    find_address(TREASURY_SEED, name_seed, program_id)
}

// Re-create an address from a stored bump and compare it to `expected`
// No search: a stored bump either reproduces the address or the record is bad.
pub fn verify_address(
    tag: &[u8],
    name_seed: &[u8],
    bump: u8,
    program_id: &Pubkey,
    expected: &Pubkey,
) -> bool {
    Pubkey::create_program_address(&[tag, name_seed, &[bump]], program_id)
        .map(|address| &address == expected)
        .unwrap_or(false)
}

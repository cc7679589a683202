// DAO Name Codec
//
// Names live on chain in a fixed 32-byte, zero-padded buffer so the DAO
// record keeps a constant size. The unpadded prefix doubles as the PDA seed.

use anchor_lang::prelude::*;

use crate::{constants::MAX_DAO_NAME_LENGTH, errors::DaoError};

pub type EncodedName = [u8; MAX_DAO_NAME_LENGTH];

// Encode a name into its stored form
// Rejects oversized names instead of truncating them, and rejects names that
// could not survive the trip back through decode_name (empty, or holding NUL).
pub fn encode_name(name: &str) -> Result<EncodedName> {
    let bytes = name.as_bytes();

    require!(bytes.len() <= MAX_DAO_NAME_LENGTH, DaoError::NameTooLong);
    require!(!bytes.is_empty(), DaoError::InvalidDaoName);
    require!(!bytes.contains(&0), DaoError::InvalidDaoName);

    let mut encoded = [0u8; MAX_DAO_NAME_LENGTH];
    encoded[..bytes.len()].copy_from_slice(bytes);
    Ok(encoded)
}

// Decode a stored buffer back into the name it was encoded from
pub fn decode_name(encoded: &EncodedName) -> Result<String> {
    let seed = name_seed(encoded);
    require!(!seed.is_empty(), DaoError::InvalidDaoName);

    std::str::from_utf8(seed)
        .map(str::to_owned)
        .map_err(|_| error!(DaoError::InvalidDaoName))
}

// Significant bytes of a stored name (padding stripped)
pub fn name_seed(encoded: &EncodedName) -> &[u8] {
    let len = encoded
        .iter()
        .rposition(|byte| *byte != 0)
        .map_or(0, |last| last + 1);
    &encoded[..len]
}

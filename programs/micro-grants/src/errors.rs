use anchor_lang::prelude::*;

#[error_code]
pub enum DaoError {
    // Name validation errors
    #[msg("DAO name is too long - maximum is 32 bytes")]
    NameTooLong,

    #[msg("DAO name must be non-empty UTF-8 without NUL bytes")]
    InvalidDaoName,

    // Allocation errors
    #[msg("Derived address is already in use - DAO name is taken")]
    AddressAlreadyInUse,

    #[msg("Payer cannot cover the rent-exempt reserve for the DAO accounts")]
    InsufficientFunds,

    #[msg("No bump produced a valid program address")]
    NoValidAddressFound,

    // Account validation errors
    #[msg("DAO account does not match the address derived from its name")]
    InvalidDaoAddress,

    #[msg("Treasury account does not match the address derived from its name")]
    InvalidTreasuryAddress,

    #[msg("Governance token mint account does not match the mint argument")]
    InvalidTokenMint,

    #[msg("DAO record is not linked to this treasury")]
    TreasuryMismatch,

    #[msg("Stored DAO name does not match the requested name")]
    NameMismatch,

    // Arithmetic errors
    #[msg("Math overflow occurred")]
    MathOverflow,
}

// Numeric code carried by an Anchor error, for asserting on failures in tests
#[cfg(test)]
pub(crate) fn error_number(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(e) => {
            panic!("expected an Anchor error, got {:?}", e)
        }
    }
}

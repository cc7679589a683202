use anchor_lang::prelude::*;

pub const ANCHOR_DISCRIMINATOR: usize = 8;

// Seeds for PDA derivation: ["dao", dao_name]
#[constant]
pub const DAO_SEED: &[u8] = b"dao";

// Seeds for PDA derivation: ["treasury", dao_name]
#[constant]
pub const TREASURY_SEED: &[u8] = b"treasury";

// Width of the stored name buffer. Also the largest seed the runtime accepts.
pub const MAX_DAO_NAME_LENGTH: usize = 32;

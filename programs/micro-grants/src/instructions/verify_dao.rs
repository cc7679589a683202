use anchor_lang::prelude::*;

use crate::{errors::*, name::*, state::*};

// Read-only check that a DAO and its Treasury still satisfy their creation
// invariants: correct owner and discriminator (via Account), the DAO links to
// this treasury, the stored name matches, and both bumps reproduce the addresses.
#[derive(Accounts)]
pub struct VerifyDao<'info> {
    #[account(has_one = treasury @ DaoError::TreasuryMismatch)]
    pub dao: Account<'info, DaoAccount>,

    pub treasury: Account<'info, Treasury>,
}

impl<'info> VerifyDao<'info> {
    pub fn verify_dao(&self, dao_name: String) -> Result<()> {
        let encoded = encode_name(&dao_name)?;
        require!(self.dao.dao_name == encoded, DaoError::NameMismatch);

        self.dao.check_invariants(&self.dao.key(), &crate::ID)?;
        self.treasury
            .check_invariants(&self.treasury.key(), self.dao.name_seed(), &crate::ID)?;

        msg!(
            "DAO '{}' at {} linked to treasury {}",
            dao_name,
            self.dao.key(),
            self.treasury.key()
        );
        Ok(())
    }
}

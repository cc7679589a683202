use anchor_lang::prelude::*;
use anchor_spl::token::Mint;

use crate::{constants::*, errors::*, initializer::*, name::*, pda::*, state::*};

// Create DAO Instruction
//
// Creates the DAO record and its Treasury record in one unit:
// - Both addresses are PDAs of the DAO name, so a name can only be taken once
// - Treasury is allocated first and the DAO record points at it
// - Authority signs and pays the rent-exempt reserve for both

#[derive(Accounts)]
#[instruction(governance_token_mint: Pubkey)]
pub struct CreateDao<'info> {
    // DAO administrator and payer
    #[account(mut)]
    pub authority: Signer<'info>,

    // DAO account PDA
    // Seeds: ["dao", dao_name]
    /// CHECK: compared against the address derived from dao_name, then allocated here
    #[account(mut)]
    pub dao: UncheckedAccount<'info>,

    // Treasury account PDA
    // Seeds: ["treasury", dao_name]
    /// CHECK: compared against the address derived from dao_name, then allocated here
    #[account(mut)]
    pub treasury: UncheckedAccount<'info>,

    // Governance token the treasury will track
    #[account(address = governance_token_mint @ DaoError::InvalidTokenMint)]
    pub governance_token_mint_account: Account<'info, Mint>,

    pub system_program: Program<'info, System>,
}

impl<'info> CreateDao<'info> {
    pub fn create_dao(&mut self, governance_token_mint: Pubkey, dao_name: String) -> Result<()> {
        // 1. Name validation
        // Oversized names fail here instead of as a seed-length error in the runtime
        let encoded = encode_name(&dao_name)?;
        let seed = name_seed(&encoded);

        // 2. Address derivation
        // The supplied accounts must be exactly the PDAs of this name
        let (dao_address, dao_bump) = find_dao_address(seed, &crate::ID)?;
        let (treasury_address, treasury_bump) = find_treasury_address(seed, &crate::ID)?;

        require_keys_eq!(self.dao.key(), dao_address, DaoError::InvalidDaoAddress);
        require_keys_eq!(
            self.treasury.key(),
            treasury_address,
            DaoError::InvalidTreasuryAddress
        );

        // 3. Reserve both accounts before touching either
        let rent = Rent::get()?;
        let payer = self.authority.to_account_info();
        let system_program = self.system_program.to_account_info();
        let dao_info = self.dao.to_account_info();
        let treasury_info = self.treasury.to_account_info();

        let reservations = [
            Reservation::prepare(&treasury_info, Treasury::SPACE, &rent)?,
            Reservation::prepare(&dao_info, DaoAccount::SPACE, &rent)?,
        ];
        let total = reserve(&payer, &reservations)?;
        let [treasury_reservation, dao_reservation] = &reservations;

        // 4. Treasury first, so the DAO can link to an existing record
        allocate_account(
            treasury_reservation,
            &payer,
            &system_program,
            &crate::ID,
            &[TREASURY_SEED, seed, &[treasury_bump]],
        )?;
        write_record(
            &treasury_info,
            &Treasury::new(governance_token_mint, treasury_bump),
        )?;

        // 5. DAO record, linked to the treasury
        allocate_account(
            dao_reservation,
            &payer,
            &system_program,
            &crate::ID,
            &[DAO_SEED, seed, &[dao_bump]],
        )?;
        write_record(
            &dao_info,
            &DaoAccount::new(self.authority.key(), treasury_address, encoded, dao_bump),
        )?;

        msg!("DAO '{}' created at {} (bump {})", dao_name, dao_address, dao_bump);
        msg!(
            "Treasury created at {} (bump {}) for mint {}",
            treasury_address,
            treasury_bump,
            governance_token_mint
        );
        msg!("Rent reserved: {} lamports", total);

        Ok(())
    }
}

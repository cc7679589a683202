// Account Initializer
//
// Two phases so that a DAO never exists without its Treasury:
//   1. reserve:  every target is vacant and the payer covers the total cost
//   2. allocate: system-program CPIs signed with each target's PDA seeds
// Nothing is allocated until every check in phase 1 passes; a failure after
// that aborts the transaction and the runtime discards all writes.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{
    allocate, assign, create_account, transfer, Allocate, Assign, CreateAccount, Transfer,
};

use crate::errors::DaoError;

// A target counts as vacant while it is system-owned with no data.
// Bare lamports (e.g. someone pre-funding the PDA) do not make it occupied.
pub fn is_vacant(owner: &Pubkey, data_len: usize) -> bool {
    data_len == 0 && owner == &System::id()
}

// Lamports still owed to make `space` bytes rent-exempt
pub fn storage_cost(rent: &Rent, current_lamports: u64, space: usize) -> u64 {
    rent.minimum_balance(space).saturating_sub(current_lamports)
}

pub fn total_cost(costs: impl IntoIterator<Item = u64>) -> Result<u64> {
    costs.into_iter().try_fold(0u64, |total, cost| {
        total
            .checked_add(cost)
            .ok_or_else(|| error!(DaoError::MathOverflow))
    })
}

pub struct Reservation<'a, 'info> {
    pub target: &'a AccountInfo<'info>,
    pub space: usize,
    pub cost: u64,
}

impl<'a, 'info> Reservation<'a, 'info> {
    pub fn prepare(target: &'a AccountInfo<'info>, space: usize, rent: &Rent) -> Result<Self> {
        require!(
            is_vacant(target.owner, target.data_len()),
            DaoError::AddressAlreadyInUse
        );

        Ok(Self {
            target,
            space,
            cost: storage_cost(rent, target.lamports(), space),
        })
    }
}

// Phase 1: confirm the payer can fund every reservation at once
pub fn reserve(payer: &AccountInfo, reservations: &[Reservation<'_, '_>]) -> Result<u64> {
    let total = total_cost(reservations.iter().map(|reservation| reservation.cost))?;
    require!(payer.lamports() >= total, DaoError::InsufficientFunds);
    Ok(total)
}

// Phase 2: create the account at exactly `space` zeroed bytes, owned by `owner`
pub fn allocate_account<'info>(
    reservation: &Reservation<'_, 'info>,
    payer: &AccountInfo<'info>,
    system_program: &AccountInfo<'info>,
    owner: &Pubkey,
    signer_seeds: &[&[u8]],
) -> Result<()> {
    let target = reservation.target;
    let signer = &[signer_seeds];

    if target.lamports() == 0 {
        return create_account(
            CpiContext::new(
                system_program.clone(),
                CreateAccount {
                    from: payer.clone(),
                    to: target.clone(),
                },
            )
            .with_signer(signer),
            reservation.cost,
            reservation.space as u64,
            owner,
        );
    }

    // create_account refuses targets that already hold lamports,
    // so top up, allocate and assign separately
    if reservation.cost > 0 {
        transfer(
            CpiContext::new(
                system_program.clone(),
                Transfer {
                    from: payer.clone(),
                    to: target.clone(),
                },
            ),
            reservation.cost,
        )?;
    }

    allocate(
        CpiContext::new(
            system_program.clone(),
            Allocate {
                account_to_allocate: target.clone(),
            },
        )
        .with_signer(signer),
        reservation.space as u64,
    )?;

    assign(
        CpiContext::new(
            system_program.clone(),
            Assign {
                account_to_assign: target.clone(),
            },
        )
        .with_signer(signer),
        owner,
    )
}

// Serialize discriminator + fields into a freshly allocated account
pub fn write_record<T: AccountSerialize>(target: &AccountInfo, record: &T) -> Result<()> {
    let mut data = target.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data;
    record.try_serialize(&mut writer)
}

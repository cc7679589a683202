// Test utilities for the micro-grants program

#![allow(dead_code)]

use std::path::PathBuf;

use anchor_lang::AccountDeserialize;
use litesvm::{types::TransactionResult, LiteSVM};
use litesvm_token::CreateMint;
use micro_grants::{DaoAccount, Treasury};
use sha2::{Digest, Sha256};
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use solana_system_interface::program::ID as system_program;

// Program ID matching declare_id!
pub const PROGRAM_ID: Pubkey = Pubkey::new_from_array(micro_grants::ID.to_bytes());

// PDA Seeds (written out by hand: clients must reproduce them byte for byte)
pub const DAO: &[u8] = b"dao";
pub const TREASURY: &[u8] = b"treasury";

// Token decimals
pub const DECIMALS: u8 = 6;

// Record sizes including the 8-byte discriminator
pub const DAO_ACCOUNT_SIZE: usize = 8 + 32 + 32 + 32 + 8 + 1;
pub const TREASURY_ACCOUNT_SIZE: usize = 8 + 32 + 8 + 1;

// ======================== HELPERS ========================

/// Build Anchor instruction discriminator (first 8 bytes of sha256("global:method_name"))
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash.to_bytes()[..8]);
    discriminator
}

/// Build Anchor account discriminator (first 8 bytes of sha256("account:TypeName"))
pub fn account_discriminator(type_name: &str) -> [u8; 8] {
    let mut hasher = Sha256::new();
    hasher.update(format!("account:{}", type_name).as_bytes());
    let result = hasher.finalize();
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&result[..8]);
    discriminator
}

/// Setup LiteSVM with the micro-grants program
/// Panics when the program has not been built with `anchor build`.
pub fn setup_svm() -> LiteSVM {
    let so_path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../../target/deploy/micro_grants.so");

    let program_bytes = std::fs::read(&so_path).unwrap_or_else(|e| {
        panic!(
            "{} could not be read ({}) - run `anchor build` first",
            so_path.display(),
            e
        )
    });

    let mut svm = LiteSVM::new();
    svm.add_program(PROGRAM_ID, &program_bytes);
    svm
}

/// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

/// Create a governance token mint owned by `authority`
pub fn create_mint(svm: &mut LiteSVM, authority: &Keypair) -> Pubkey {
    CreateMint::new(svm, authority)
        .authority(&authority.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Mint creation should succeed")
}

/// Derive DAO PDA: ["dao", dao_name]
pub fn derive_dao_pda(dao_name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[DAO, dao_name.as_bytes()], &PROGRAM_ID)
}

/// Derive treasury PDA: ["treasury", dao_name]
pub fn derive_treasury_pda(dao_name: &str) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[TREASURY, dao_name.as_bytes()], &PROGRAM_ID)
}

/// Borsh string: u32 LE length + bytes
fn push_string(data: &mut Vec<u8>, value: &str) {
    data.extend_from_slice(&(value.len() as u32).to_le_bytes());
    data.extend_from_slice(value.as_bytes());
}

/// Build create_dao instruction with explicit DAO/treasury accounts
pub fn build_create_dao_ix_with_accounts(
    authority: &Pubkey,
    dao: &Pubkey,
    treasury: &Pubkey,
    mint_account: &Pubkey,
    governance_token_mint: &Pubkey,
    dao_name: &str,
) -> Instruction {
    let mut data = anchor_discriminator("create_dao").to_vec();
    data.extend_from_slice(governance_token_mint.as_ref());
    push_string(&mut data, dao_name);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(*dao, false),
            AccountMeta::new(*treasury, false),
            AccountMeta::new_readonly(*mint_account, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

/// Build create_dao instruction with the PDAs derived from the name
pub fn build_create_dao_ix(
    authority: &Pubkey,
    governance_token_mint: &Pubkey,
    dao_name: &str,
) -> Instruction {
    let (dao, _) = derive_dao_pda(dao_name);
    let (treasury, _) = derive_treasury_pda(dao_name);
    build_create_dao_ix_with_accounts(
        authority,
        &dao,
        &treasury,
        governance_token_mint,
        governance_token_mint,
        dao_name,
    )
}

/// Build verify_dao instruction
pub fn build_verify_dao_ix(dao: &Pubkey, treasury: &Pubkey, dao_name: &str) -> Instruction {
    let mut data = anchor_discriminator("verify_dao").to_vec();
    push_string(&mut data, dao_name);

    Instruction {
        program_id: PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*dao, false),
            AccountMeta::new_readonly(*treasury, false),
        ],
        data,
    }
}

/// Sign with `signer` as fee payer and send
pub fn send_ix(svm: &mut LiteSVM, ix: Instruction, signer: &Keypair) -> TransactionResult {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&signer.pubkey()),
        &[signer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
}

/// Assert the transaction failed with the named program error
pub fn assert_program_error(result: TransactionResult, error_name: &str) {
    match result {
        Ok(_) => panic!("Expected {} but the transaction succeeded", error_name),
        Err(failed) => {
            let found = failed
                .meta
                .logs
                .iter()
                .any(|log| log.contains(&format!("Error Code: {}", error_name)));
            assert!(
                found,
                "Expected {} in logs, got {:?} / {:?}",
                error_name, failed.err, failed.meta.logs
            );
            println!("[Verify] Rejected with {}", error_name);
        }
    }
}

/// Read and deserialize a DAO record
pub fn fetch_dao(svm: &LiteSVM, dao: &Pubkey) -> DaoAccount {
    let account = svm.get_account(dao).expect("DAO account should exist");
    DaoAccount::try_deserialize(&mut account.data.as_slice())
        .expect("DAO account should deserialize")
}

/// Read and deserialize a Treasury record
pub fn fetch_treasury(svm: &LiteSVM, treasury: &Pubkey) -> Treasury {
    let account = svm
        .get_account(treasury)
        .expect("Treasury account should exist");
    Treasury::try_deserialize(&mut account.data.as_slice())
        .expect("Treasury account should deserialize")
}

/// Convert a key read from program state into an SDK key
pub fn sdk_pubkey(key: anchor_lang::prelude::Pubkey) -> Pubkey {
    Pubkey::new_from_array(key.to_bytes())
}

/// Strip zero padding from a stored name
pub fn stored_name(dao: &DaoAccount) -> String {
    String::from_utf8(dao.dao_name.to_vec())
        .expect("Stored name should be UTF-8")
        .trim_end_matches('\0')
        .to_string()
}

use near_sdk::store::Vector;
use near_sdk::{env, near, AccountId, BorshStorageKey, NearToken, PanicOnDefault, Promise};

pub mod constants;
mod errors;
mod events;
mod guards;

mod admin;
mod enumeration;
mod issuance;


pub use constants::*;
pub use errors::RegistryError;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Owners,
}

#[near(serializers = [borsh, json])]
#[derive(Clone)]
pub struct RegistryMetadata {
    pub name: String,
    pub symbol: String,
}

impl Default for RegistryMetadata {
    fn default() -> Self {
        Self {
            name: "Issuance Registry".to_string(),
            symbol: "ISSUE".to_string(),
        }
    }
}

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/issuance-registry",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub owner_id: AccountId,
    pub metadata: RegistryMetadata,

    /// Public mint unit price in yoctoNEAR.
    pub price: u128,
    pub base_uri: String,
    pub provenance_hash: String,
    pub is_sale_active: bool,

    // Ledger invariant: token id `i` is index `i`; entries are insertion-only,
    // so `owners.len()` is the total supply and ids are dense with no gaps.
    pub(crate) owners: Vector<AccountId>,
    pub giveaway_count: u32,

    // Accounting invariant: equals all mint deposits received minus all
    // withdrawals; giveaways never touch it.
    pub sale_proceeds: u128,
}

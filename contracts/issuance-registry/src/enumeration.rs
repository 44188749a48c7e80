use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    pub fn total_supply(&self) -> u32 {
        self.owners.len()
    }

    /// `base_uri` concatenated with the token id. Fails for ids that have
    /// never been issued.
    #[handle_result]
    pub fn token_uri(&self, token_id: u64) -> Result<String, RegistryError> {
        if !self.token_exists(token_id) {
            return Err(RegistryError::token_not_found(token_id));
        }
        Ok(format!("{}{}", self.base_uri, token_id))
    }

    #[handle_result]
    pub fn owner_of(&self, token_id: u64) -> Result<&AccountId, RegistryError> {
        u32::try_from(token_id)
            .ok()
            .and_then(|index| self.owners.get(index))
            .ok_or_else(|| RegistryError::token_not_found(token_id))
    }

    /// The metadata gateway's validity check: `true` iff `token_id` has been
    /// issued.
    pub fn token_exists(&self, token_id: u64) -> bool {
        token_id < self.owners.len() as u64
    }

    /// Ascending ids held by `account_id`, derived by scanning the ledger.
    pub fn wallet_of_owner(&self, account_id: AccountId) -> Vec<u64> {
        self.owners
            .iter()
            .enumerate()
            .filter(|(_, owner_id)| **owner_id == account_id)
            .map(|(index, _)| index as u64)
            .collect()
    }

    pub fn get_price(&self) -> U128 {
        U128(self.price)
    }

    pub fn get_base_uri(&self) -> &str {
        &self.base_uri
    }

    pub fn get_provenance_hash(&self) -> &str {
        &self.provenance_hash
    }

    pub fn is_sale_active(&self) -> bool {
        self.is_sale_active
    }

    pub fn get_sale_proceeds(&self) -> U128 {
        U128(self.sale_proceeds)
    }

    pub fn get_max_tokens(&self) -> u32 {
        MAX_TOKENS
    }

    pub fn get_max_tokens_per_tx(&self) -> u32 {
        MAX_TOKENS_PER_TX
    }

    pub fn get_max_tokens_giveaways(&self) -> u32 {
        MAX_TOKENS_GIVEAWAYS
    }
}

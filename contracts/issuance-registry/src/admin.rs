use crate::*;
use near_sdk::json_types::U128;

#[near]
impl Contract {
    /// Deploys the registry with a unit price and metadata URI prefix.
    /// Sale starts inactive; the owner must toggle it before public minting.
    #[init]
    pub fn new(
        owner_id: AccountId,
        price: U128,
        base_uri: String,
        metadata: Option<RegistryMetadata>,
    ) -> Self {
        Self {
            owner_id,
            metadata: metadata.unwrap_or_default(),
            price: price.0,
            base_uri,
            provenance_hash: String::new(),
            is_sale_active: false,
            owners: Vector::new(StorageKey::Owners),
            giveaway_count: 0,
            sale_proceeds: 0,
        }
    }

    #[handle_result]
    pub fn set_price(&mut self, new_price: U128) -> Result<(), RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let old_price = self.price;
        self.price = new_price.0;
        events::emit_price_updated(&self.owner_id, old_price, self.price);
        Ok(())
    }

    #[handle_result]
    pub fn set_base_uri(&mut self, new_base_uri: String) -> Result<(), RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.base_uri = new_base_uri;
        events::emit_base_uri_updated(&self.owner_id, &self.base_uri);
        Ok(())
    }

    #[handle_result]
    pub fn set_provenance_hash(&mut self, new_hash: String) -> Result<(), RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.provenance_hash = new_hash;
        events::emit_provenance_hash_updated(&self.owner_id, &self.provenance_hash);
        Ok(())
    }

    #[handle_result]
    pub fn toggle_sale_status(&mut self) -> Result<(), RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        self.is_sale_active = !self.is_sale_active;
        events::emit_sale_status_toggled(&self.owner_id, self.is_sale_active);
        Ok(())
    }

    /// Transfers the accumulated mint proceeds to the owner. The counter is
    /// zeroed before the transfer promise is created, so a failed precondition
    /// can never leave funds marked as disbursed.
    #[handle_result]
    pub fn withdraw(&mut self) -> Result<Promise, RegistryError> {
        self.check_contract_owner(&env::predecessor_account_id())?;
        let amount = core::mem::take(&mut self.sale_proceeds);
        events::emit_withdrawal(&self.owner_id, amount);
        Ok(Promise::new(self.owner_id.clone()).transfer(NearToken::from_yoctonear(amount)))
    }

    pub fn get_owner(&self) -> &AccountId {
        &self.owner_id
    }

    pub fn get_metadata(&self) -> &RegistryMetadata {
        &self.metadata
    }
}

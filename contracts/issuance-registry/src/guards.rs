use crate::*;

impl Contract {
    pub(crate) fn check_contract_owner(
        &self,
        actor_id: &AccountId,
    ) -> Result<(), RegistryError> {
        if actor_id != &self.owner_id {
            return Err(RegistryError::only_owner());
        }
        Ok(())
    }
}

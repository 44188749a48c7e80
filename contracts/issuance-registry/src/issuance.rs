use crate::*;

#[near]
impl Contract {
    /// Public mint. The caller pays the attached deposit; any excess over
    /// `price * amount` is retained by the registry rather than refunded.
    #[payable]
    #[handle_result]
    pub fn mint(&mut self, amount: u32) -> Result<Vec<u64>, RegistryError> {
        let buyer_id = env::predecessor_account_id();
        let deposit = env::attached_deposit().as_yoctonear();
        self.mint_tokens(&buyer_id, amount, deposit)
    }

    /// Owner-only issuance from the reserved giveaway quota. No payment.
    #[handle_result]
    pub fn giveaway(
        &mut self,
        receiver_id: AccountId,
        amount: u32,
    ) -> Result<Vec<u64>, RegistryError> {
        let actor_id = env::predecessor_account_id();
        self.giveaway_tokens(&actor_id, &receiver_id, amount)
    }
}

impl Contract {
    pub(crate) fn mint_tokens(
        &mut self,
        buyer_id: &AccountId,
        amount: u32,
        deposit: u128,
    ) -> Result<Vec<u64>, RegistryError> {
        if !self.is_sale_active {
            return Err(RegistryError::SaleInactive("Sale is not active".into()));
        }
        if amount == 0 || amount > MAX_TOKENS_PER_TX {
            return Err(RegistryError::InvalidAmount(format!(
                "Mint amount must be between 1 and {}",
                MAX_TOKENS_PER_TX
            )));
        }
        let cost = self.price * amount as u128;
        if deposit < cost {
            return Err(RegistryError::InsufficientPayment(format!(
                "Attached deposit {} is below the required {}",
                deposit, cost
            )));
        }
        if self.total_supply() + amount > MAX_TOKENS {
            return Err(RegistryError::SupplyExceeded(format!(
                "Minting {} tokens would exceed the max supply of {}",
                amount, MAX_TOKENS
            )));
        }

        let token_ids = self.issue(buyer_id, amount);
        self.sale_proceeds += deposit;
        for token_id in &token_ids {
            events::emit_token_minted(buyer_id, *token_id, self.price);
        }
        Ok(token_ids)
    }

    pub(crate) fn giveaway_tokens(
        &mut self,
        actor_id: &AccountId,
        receiver_id: &AccountId,
        amount: u32,
    ) -> Result<Vec<u64>, RegistryError> {
        self.check_contract_owner(actor_id)?;
        if amount == 0 || amount > MAX_TOKENS_PER_TX {
            return Err(RegistryError::InvalidAmount(format!(
                "Giveaway amount must be between 1 and {}",
                MAX_TOKENS_PER_TX
            )));
        }
        // Cap rule: the giveaway quota counts against total supply, so public
        // mints consume giveaway slots as well. `giveaway_count` can never
        // exceed total supply, which keeps both counters under their caps.
        if self.total_supply() + amount > MAX_TOKENS_GIVEAWAYS {
            return Err(RegistryError::GiveawayCapExceeded(format!(
                "Giving away {} tokens would exceed the giveaway quota of {}",
                amount, MAX_TOKENS_GIVEAWAYS
            )));
        }

        let token_ids = self.issue(receiver_id, amount);
        self.giveaway_count += amount;
        for token_id in &token_ids {
            events::emit_token_given_away(actor_id, receiver_id, *token_id);
        }
        Ok(token_ids)
    }

    /// Appends `amount` entries for `receiver_id` and returns the fresh ids.
    /// Callers must have validated every precondition first; nothing after
    /// this point may fail.
    fn issue(&mut self, receiver_id: &AccountId, amount: u32) -> Vec<u64> {
        let start = self.owners.len() as u64;
        for _ in 0..amount {
            self.owners.push(receiver_id.clone());
        }
        (start..start + amount as u64).collect()
    }
}

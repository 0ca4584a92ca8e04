use crate::*;

#[near]
impl Contract {
    /// Pays the caller's whole pending balance. Not blocked by pause.
    #[handle_result]
    pub fn claim_rewards(&mut self) -> Result<Promise, RegistryError> {
        let account_id = env::predecessor_account_id();
        let amount = self.internal_claim_rewards(&account_id)?;
        Ok(Promise::new(account_id).transfer(NearToken::from_yoctonear(amount)))
    }

    pub fn get_pending_rewards(&self, account_id: AccountId) -> U128 {
        self.nodes
            .get(&account_id)
            .map(|node| node.pending_rewards)
            .unwrap_or(U128(0))
    }
}

impl Contract {
    pub(crate) fn internal_claim_rewards(
        &mut self,
        account_id: &AccountId,
    ) -> Result<u128, RegistryError> {
        let node = self
            .nodes
            .get(account_id)
            .ok_or_else(RegistryError::not_registered)?;
        let amount = node.pending_rewards.0;
        if amount == 0 {
            return Err(RegistryError::nothing_to_claim());
        }
        let available = self.available_balance();
        if available < amount {
            return Err(RegistryError::insufficient_contract_balance(amount, available));
        }

        if let Some(node) = self.nodes.get_mut(account_id) {
            node.pending_rewards = U128(0);
        }
        self.total_pending_rewards = self.total_pending_rewards.saturating_sub(amount);

        events::emit_rewards_claimed(account_id, amount);
        Ok(amount)
    }
}

use crate::*;

pub(crate) fn check_one_yocto() -> Result<(), RegistryError> {
    if env::attached_deposit().as_yoctonear() != ONE_YOCTO.as_yoctonear() {
        return Err(RegistryError::InsufficientFunds(
            "Requires attached deposit of exactly 1 yoctoNEAR".into(),
        ));
    }
    Ok(())
}

pub(crate) fn check_id(value: &str, what: &str, max_len: usize) -> Result<(), RegistryError> {
    if value.is_empty() || value.len() > max_len {
        return Err(RegistryError::InvalidInput(format!(
            "{} must be 1-{} bytes",
            what, max_len
        )));
    }
    Ok(())
}

impl Contract {
    pub(crate) fn check_admin(&self, actor_id: &AccountId) -> Result<(), RegistryError> {
        if actor_id != &self.admin_id {
            return Err(RegistryError::only("the registry admin"));
        }
        Ok(())
    }

    // The admin implicitly holds the challenger role.
    pub(crate) fn check_challenger(&self, actor_id: &AccountId) -> Result<(), RegistryError> {
        if actor_id != &self.admin_id && !self.challengers.contains(actor_id) {
            return Err(RegistryError::only("a challenger"));
        }
        Ok(())
    }

    pub(crate) fn check_not_paused(&self) -> Result<(), RegistryError> {
        if self.paused {
            return Err(RegistryError::ContractPaused);
        }
        Ok(())
    }

    /// Native balance the contract can pay out without touching the balance
    /// locked for its own storage.
    pub(crate) fn available_balance(&self) -> u128 {
        let storage_locked = env::storage_usage() as u128 * storage::storage_byte_cost();
        env::account_balance()
            .as_yoctonear()
            .saturating_sub(env::account_locked_balance().as_yoctonear())
            .saturating_sub(storage_locked)
    }
}

use crate::guards::check_one_yocto;
use crate::*;

#[near]
impl Contract {
    #[init]
    #[handle_result]
    pub fn new(
        admin_id: AccountId,
        config: Option<RegistryConfig>,
    ) -> Result<Self, RegistryError> {
        let config = config.unwrap_or_default();
        config.validate()?;
        let clock = PeriodClock::new(env::block_timestamp(), config.period_length_ns);
        Ok(Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            admin_id,
            paused: false,
            challengers: IterableSet::new(StorageKey::Challengers),
            storage_admins: IterableSet::new(StorageKey::StorageAdmins),
            config,
            clock,
            nodes: LookupMap::new(StorageKey::Nodes),
            node_index: Vector::new(StorageKey::NodeIndex),
            node_positions: LookupMap::new(StorageKey::NodePositions),
            provider_metadata: LookupMap::new(StorageKey::ProviderMetadata),
            challenges: LookupMap::new(StorageKey::Challenges),
            period_stats: LookupMap::new(StorageKey::PeriodStats),
            stats_periods: Vector::new(StorageKey::StatsPeriods),
            bookings: IterableMap::new(StorageKey::Bookings),
            total_allocated_capacity: 0,
            total_booked_capacity: 0,
            total_pending_rewards: 0,
            total_rewards_distributed: 0,
            total_challenges_issued: 0,
        })
    }

    #[payable]
    #[handle_result]
    pub fn transfer_admin(&mut self, new_admin: AccountId) -> Result<(), RegistryError> {
        check_one_yocto()?;
        self.check_admin(&env::predecessor_account_id())?;
        if new_admin == self.admin_id {
            return Err(RegistryError::InvalidInput(
                "New admin must differ from current admin".into(),
            ));
        }
        let old_admin = std::mem::replace(&mut self.admin_id, new_admin);
        events::emit_admin_transferred(&old_admin, &self.admin_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn add_challenger(&mut self, account_id: AccountId) -> Result<(), RegistryError> {
        check_one_yocto()?;
        self.check_admin(&env::predecessor_account_id())?;
        if !self.challengers.insert(account_id.clone()) {
            return Err(RegistryError::Conflict(format!(
                "{} is already a challenger",
                account_id
            )));
        }
        events::emit_challenger_added(&self.admin_id, &account_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn remove_challenger(&mut self, account_id: AccountId) -> Result<(), RegistryError> {
        check_one_yocto()?;
        self.check_admin(&env::predecessor_account_id())?;
        if !self.challengers.remove(&account_id) {
            return Err(RegistryError::NotFound(format!(
                "{} is not a challenger",
                account_id
            )));
        }
        events::emit_challenger_removed(&self.admin_id, &account_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn add_storage_admin(&mut self, account_id: AccountId) -> Result<(), RegistryError> {
        check_one_yocto()?;
        self.check_admin(&env::predecessor_account_id())?;
        if !self.storage_admins.insert(account_id.clone()) {
            return Err(RegistryError::Conflict(format!(
                "{} is already a storage admin",
                account_id
            )));
        }
        events::emit_storage_admin_added(&self.admin_id, &account_id);
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn remove_storage_admin(&mut self, account_id: AccountId) -> Result<(), RegistryError> {
        check_one_yocto()?;
        self.check_admin(&env::predecessor_account_id())?;
        if !self.storage_admins.remove(&account_id) {
            return Err(RegistryError::NotFound(format!(
                "{} is not a storage admin",
                account_id
            )));
        }
        events::emit_storage_admin_removed(&self.admin_id, &account_id);
        Ok(())
    }

    /// Replaces the whole config. A new period length takes effect from the
    /// start of the running period.
    #[payable]
    #[handle_result]
    pub fn update_config(&mut self, config: RegistryConfig) -> Result<(), RegistryError> {
        check_one_yocto()?;
        self.check_admin(&env::predecessor_account_id())?;
        config.validate()?;
        self.clock
            .reanchor(env::block_timestamp(), config.period_length_ns);
        self.config = config;
        events::emit_config_updated(&self.admin_id, &self.config, self.current_period());
        Ok(())
    }

    #[payable]
    #[handle_result]
    pub fn set_paused(&mut self, paused: bool) -> Result<(), RegistryError> {
        check_one_yocto()?;
        self.check_admin(&env::predecessor_account_id())?;
        if self.paused == paused {
            return Err(RegistryError::Conflict(format!(
                "Contract is already {}",
                if paused { "paused" } else { "unpaused" }
            )));
        }
        self.paused = paused;
        events::emit_pause_changed(&self.admin_id, paused);
        Ok(())
    }

    /// Tops up the balance rewards are paid from. Open to anyone.
    #[payable]
    #[handle_result]
    pub fn fund_contract(&mut self) -> Result<(), RegistryError> {
        let amount = env::attached_deposit().as_yoctonear();
        if amount == 0 {
            return Err(RegistryError::zero_amount());
        }
        events::emit_contract_funded(&env::predecessor_account_id(), amount);
        Ok(())
    }
}

use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContractStats {
    pub version: String,
    pub current_period: u64,
    pub active_nodes: u64,
    pub total_allocated_capacity: u64,
    pub total_booked_capacity: u64,
    pub uploader_count: u32,
    pub total_pending_rewards: U128,
    pub total_rewards_distributed: U128,
    pub total_challenges_issued: u64,
    pub paused: bool,
}

#[near]
impl Contract {
    pub fn get_config(&self) -> &RegistryConfig {
        &self.config
    }

    pub fn get_admin(&self) -> &AccountId {
        &self.admin_id
    }

    pub fn get_version(&self) -> &str {
        &self.version
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// The admin counts as a challenger.
    pub fn is_challenger(&self, account_id: AccountId) -> bool {
        account_id == self.admin_id || self.challengers.contains(&account_id)
    }

    pub fn get_challengers(&self) -> Vec<AccountId> {
        self.challengers.iter().cloned().collect()
    }

    pub fn get_storage_admins(&self) -> Vec<AccountId> {
        self.storage_admins.iter().cloned().collect()
    }

    pub fn get_contract_stats(&self) -> ContractStats {
        ContractStats {
            version: self.version.clone(),
            current_period: self.current_period(),
            active_nodes: self.node_index.len() as u64,
            total_allocated_capacity: self.total_allocated_capacity,
            total_booked_capacity: self.total_booked_capacity,
            uploader_count: self.bookings.len(),
            total_pending_rewards: U128(self.total_pending_rewards),
            total_rewards_distributed: U128(self.total_rewards_distributed),
            total_challenges_issued: self.total_challenges_issued,
            paused: self.paused,
        }
    }
}

use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn register_node(&mut self, capacity: u64) -> Result<(), RegistryError> {
        self.check_not_paused()?;
        let account_id = env::predecessor_account_id();
        self.internal_register_node(&account_id, capacity)
    }

    #[handle_result]
    pub fn update_allocation(&mut self, capacity: u64) -> Result<(), RegistryError> {
        self.check_not_paused()?;
        let account_id = env::predecessor_account_id();
        self.internal_update_allocation(&account_id, capacity)
    }

    #[handle_result]
    pub fn unregister_node(&mut self) -> Result<(), RegistryError> {
        self.check_not_paused()?;
        let account_id = env::predecessor_account_id();
        self.internal_unregister_node(&account_id)
    }

    /// Allowed for inactive nodes too; has no economic effect.
    #[handle_result]
    pub fn update_metadata(
        &mut self,
        endpoint: String,
        peer_addrs: Vec<String>,
    ) -> Result<(), RegistryError> {
        let account_id = env::predecessor_account_id();
        if !self.nodes.contains_key(&account_id) {
            return Err(RegistryError::not_registered());
        }
        validate_metadata(&endpoint, &peer_addrs)?;
        events::emit_metadata_updated(&account_id, &endpoint, &peer_addrs);
        self.provider_metadata
            .insert(account_id, ProviderMetadata { endpoint, peer_addrs });
        Ok(())
    }
}

impl Contract {
    pub(crate) fn internal_register_node(
        &mut self,
        account_id: &AccountId,
        capacity: u64,
    ) -> Result<(), RegistryError> {
        self.config.check_capacity(capacity)?;
        if self.nodes.contains_key(account_id) {
            return Err(RegistryError::already_registered());
        }
        let total = self
            .total_allocated_capacity
            .checked_add(capacity)
            .ok_or_else(|| RegistryError::overflow("Allocated capacity"))?;
        let position = self.node_index.len();

        let period = self.current_period();
        self.update_period_stats(period, |stats| {
            stats.total_capacity_stored = stats.total_capacity_stored.saturating_add(capacity);
            stats.active_nodes += 1;
        });

        self.nodes
            .insert(account_id.clone(), StorageNode::new(account_id.clone(), capacity, period));
        self.node_index.push(account_id.clone());
        self.node_positions.insert(account_id.clone(), position);
        self.total_allocated_capacity = total;

        events::emit_node_registered(account_id, capacity, period);
        Ok(())
    }

    pub(crate) fn internal_update_allocation(
        &mut self,
        account_id: &AccountId,
        capacity: u64,
    ) -> Result<(), RegistryError> {
        let node = self
            .nodes
            .get(account_id)
            .ok_or_else(RegistryError::not_registered)?;
        self.config.check_capacity(capacity)?;
        if !node.active {
            return Err(RegistryError::node_inactive(account_id));
        }
        let old_capacity = node.allocated_capacity;
        let total = (self.total_allocated_capacity - old_capacity)
            .checked_add(capacity)
            .ok_or_else(|| RegistryError::overflow("Allocated capacity"))?;

        let period = self.current_period();
        self.update_period_stats(period, |stats| {
            stats.total_capacity_stored = stats
                .total_capacity_stored
                .saturating_sub(old_capacity)
                .saturating_add(capacity);
        });

        if let Some(node) = self.nodes.get_mut(account_id) {
            node.allocated_capacity = capacity;
        }
        self.total_allocated_capacity = total;

        events::emit_allocation_updated(account_id, old_capacity, capacity, period);
        Ok(())
    }

    pub(crate) fn internal_unregister_node(
        &mut self,
        account_id: &AccountId,
    ) -> Result<(), RegistryError> {
        let node = self
            .nodes
            .get(account_id)
            .ok_or_else(RegistryError::not_registered)?;
        if !node.active {
            return Err(RegistryError::already_inactive());
        }
        let capacity = node.allocated_capacity;
        let position = *self.node_positions.get(account_id).ok_or_else(|| {
            RegistryError::InternalError(format!("{} missing from node index", account_id))
        })?;

        let period = self.current_period();
        self.update_period_stats(period, |stats| {
            stats.total_capacity_stored = stats.total_capacity_stored.saturating_sub(capacity);
            stats.active_nodes = stats.active_nodes.saturating_sub(1);
        });

        if let Some(node) = self.nodes.get_mut(account_id) {
            node.active = false;
        }
        self.remove_from_index(account_id, position);
        self.provider_metadata.remove(account_id);
        self.total_allocated_capacity -= capacity;

        events::emit_node_unregistered(account_id, capacity, period);
        Ok(())
    }

    // Swap-remove: the last entry takes over the vacated slot.
    fn remove_from_index(&mut self, account_id: &AccountId, position: u32) {
        self.node_index.swap_remove(position);
        self.node_positions.remove(account_id);
        if let Some(moved) = self.node_index.get(position).cloned() {
            self.node_positions.insert(moved, position);
        }
    }
}

fn validate_metadata(endpoint: &str, peer_addrs: &[String]) -> Result<(), RegistryError> {
    if endpoint.len() > MAX_ENDPOINT_LEN {
        return Err(RegistryError::InvalidInput(format!(
            "Endpoint exceeds {} bytes",
            MAX_ENDPOINT_LEN
        )));
    }
    if peer_addrs.len() > MAX_PEER_ADDRS {
        return Err(RegistryError::InvalidInput(format!(
            "Too many peer addresses (max {})",
            MAX_PEER_ADDRS
        )));
    }
    for addr in peer_addrs {
        crate::guards::check_id(addr, "Peer address", MAX_PEER_ADDR_LEN)?;
    }
    Ok(())
}

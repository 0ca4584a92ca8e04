use crate::*;

#[near]
impl Contract {
    pub fn get_node(&self, account_id: AccountId) -> Option<&StorageNode> {
        self.nodes.get(&account_id)
    }

    /// Empty metadata when the provider never published any.
    pub fn get_provider_metadata(&self, account_id: AccountId) -> ProviderMetadata {
        self.provider_metadata
            .get(&account_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Number of active nodes.
    pub fn get_node_count(&self) -> u64 {
        self.node_index.len() as u64
    }

    pub fn get_node_address_at(&self, index: u64) -> Option<AccountId> {
        let index = u32::try_from(index).ok()?;
        self.node_index.get(index).cloned()
    }

    pub fn get_registered_addresses(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<AccountId> {
        let start = usize::try_from(from_index.unwrap_or(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT))
            .unwrap_or(usize::MAX);

        self.node_index
            .iter()
            .skip(start)
            .take(limit)
            .cloned()
            .collect()
    }
}

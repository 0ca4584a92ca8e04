use crate::*;

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CapacityUsage {
    pub total_allocated: u64,
    pub total_booked: u64,
    pub available: u64,
}

#[near]
impl Contract {
    /// The gate an upload service consults before accepting a file.
    pub fn is_allowed_uploader(&self, account_id: AccountId) -> bool {
        self.storage_admins.contains(&account_id) || self.get_booked_capacity(account_id) > 0
    }

    pub fn is_storage_admin(&self, account_id: AccountId) -> bool {
        self.storage_admins.contains(&account_id)
    }

    pub fn get_booked_capacity(&self, account_id: AccountId) -> u64 {
        self.bookings.get(&account_id).copied().unwrap_or(0)
    }

    pub fn get_uploader_price_per_unit(&self) -> U128 {
        self.config.uploader_price_per_unit
    }

    pub fn get_capacity_usage(&self) -> CapacityUsage {
        CapacityUsage {
            total_allocated: self.total_allocated_capacity,
            total_booked: self.total_booked_capacity,
            available: self
                .total_allocated_capacity
                .saturating_sub(self.total_booked_capacity),
        }
    }

    pub fn get_uploaders(
        &self,
        from_index: Option<u64>,
        limit: Option<u64>,
    ) -> Vec<(AccountId, u64)> {
        let start = usize::try_from(from_index.unwrap_or(0)).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit.unwrap_or(DEFAULT_PAGE_LIMIT).min(MAX_PAGE_LIMIT))
            .unwrap_or(usize::MAX);

        self.bookings
            .iter()
            .skip(start)
            .take(limit)
            .map(|(account_id, booked)| (account_id.clone(), *booked))
            .collect()
    }

    pub fn get_uploader_count(&self) -> u32 {
        self.bookings.len()
    }
}

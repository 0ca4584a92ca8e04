use near_sdk::BorshStorageKey;
use near_sdk::near;

#[near]
#[derive(BorshStorageKey)]
pub enum StorageKey {
    Challengers,
    StorageAdmins,
    Nodes,
    NodeIndex,
    NodePositions,
    ProviderMetadata,
    Challenges,
    PeriodStats,
    StatsPeriods,
    Bookings,
}

#[inline]
pub(crate) fn storage_byte_cost() -> u128 {
    near_sdk::env::storage_byte_cost().as_yoctonear()
}

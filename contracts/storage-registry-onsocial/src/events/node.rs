use near_sdk::AccountId;

use super::NODE;
use super::builder::EventBuilder;

pub fn emit_node_registered(account_id: &AccountId, capacity: u64, period: u64) {
    EventBuilder::new(NODE, "node_registered", account_id)
        .field("account_id", account_id)
        .field("allocated_capacity", capacity)
        .field("period", period)
        .emit();
}

pub fn emit_allocation_updated(
    account_id: &AccountId,
    old_capacity: u64,
    new_capacity: u64,
    period: u64,
) {
    EventBuilder::new(NODE, "allocation_updated", account_id)
        .field("account_id", account_id)
        .field("old_capacity", old_capacity)
        .field("new_capacity", new_capacity)
        .field("period", period)
        .emit();
}

pub fn emit_node_unregistered(account_id: &AccountId, capacity: u64, period: u64) {
    EventBuilder::new(NODE, "node_unregistered", account_id)
        .field("account_id", account_id)
        .field("released_capacity", capacity)
        .field("period", period)
        .emit();
}

pub fn emit_metadata_updated(account_id: &AccountId, endpoint: &str, peer_addrs: &[String]) {
    EventBuilder::new(NODE, "metadata_updated", account_id)
        .field("account_id", account_id)
        .field("endpoint", endpoint)
        .field("peer_addrs", peer_addrs)
        .emit();
}

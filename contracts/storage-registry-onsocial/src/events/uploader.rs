use near_sdk::AccountId;

use super::UPLOADER;
use super::builder::EventBuilder;

pub fn emit_uploader_registered(
    account_id: &AccountId,
    amount_units: u64,
    booked_capacity: u64,
    paid: u128,
    refund: u128,
) {
    EventBuilder::new(UPLOADER, "uploader_registered", account_id)
        .field("account_id", account_id)
        .field("amount_units", amount_units)
        .field("booked_capacity", booked_capacity)
        .field("paid", paid)
        .field("refund", refund)
        .emit();
}

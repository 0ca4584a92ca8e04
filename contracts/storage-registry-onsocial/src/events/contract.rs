use near_sdk::AccountId;

use super::CONTRACT;
use super::builder::EventBuilder;
use crate::config::RegistryConfig;

pub fn emit_contract_upgraded(contract_id: &AccountId, old_version: &str, new_version: &str) {
    EventBuilder::new(CONTRACT, "contract_upgrade", contract_id)
        .field("old_version", old_version)
        .field("new_version", new_version)
        .emit();
}

pub fn emit_admin_transferred(old_admin: &AccountId, new_admin: &AccountId) {
    EventBuilder::new(CONTRACT, "admin_transferred", old_admin)
        .field("old_admin", old_admin)
        .field("new_admin", new_admin)
        .emit();
}

pub fn emit_challenger_added(admin_id: &AccountId, account_id: &AccountId) {
    EventBuilder::new(CONTRACT, "challenger_added", admin_id)
        .field("account_id", account_id)
        .emit();
}

pub fn emit_challenger_removed(admin_id: &AccountId, account_id: &AccountId) {
    EventBuilder::new(CONTRACT, "challenger_removed", admin_id)
        .field("account_id", account_id)
        .emit();
}

pub fn emit_storage_admin_added(admin_id: &AccountId, account_id: &AccountId) {
    EventBuilder::new(CONTRACT, "storage_admin_added", admin_id)
        .field("account_id", account_id)
        .emit();
}

pub fn emit_storage_admin_removed(admin_id: &AccountId, account_id: &AccountId) {
    EventBuilder::new(CONTRACT, "storage_admin_removed", admin_id)
        .field("account_id", account_id)
        .emit();
}

pub fn emit_config_updated(admin_id: &AccountId, config: &RegistryConfig, period: u64) {
    EventBuilder::new(CONTRACT, "config_updated", admin_id)
        .field("reward_per_unit_per_period", config.reward_per_unit_per_period)
        .field("min_allocated_capacity", config.min_allocated_capacity)
        .field("max_allocated_capacity", config.max_allocated_capacity)
        .field("challenge_timeout_ns", config.challenge_timeout_ns)
        .field("period_length_ns", config.period_length_ns)
        .field("uploader_price_per_unit", config.uploader_price_per_unit)
        .field("reward_eligibility", config.reward_eligibility.as_str())
        .field("proof_scheme", config.proof_scheme.as_str())
        .field("period", period)
        .emit();
}

pub fn emit_pause_changed(admin_id: &AccountId, paused: bool) {
    let operation = if paused { "paused" } else { "unpaused" };
    EventBuilder::new(CONTRACT, operation, admin_id)
        .field("paused", paused)
        .emit();
}

pub fn emit_contract_funded(funder: &AccountId, amount: u128) {
    EventBuilder::new(CONTRACT, "contract_funded", funder)
        .field("amount", amount)
        .emit();
}

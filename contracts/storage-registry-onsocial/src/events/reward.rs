use near_sdk::AccountId;

use super::REWARD;
use super::builder::EventBuilder;

pub fn emit_rewards_distributed(
    challenger: &AccountId,
    period: u64,
    rewarded: &[AccountId],
    total_distributed: u128,
) {
    EventBuilder::new(REWARD, "rewards_distributed", challenger)
        .field("period", period)
        .field("rewarded_nodes", rewarded)
        .field("total_distributed", total_distributed)
        .emit();
}

pub fn emit_rewards_claimed(account_id: &AccountId, amount: u128) {
    EventBuilder::new(REWARD, "rewards_claimed", account_id)
        .field("account_id", account_id)
        .field("amount", amount)
        .emit();
}

use near_sdk::json_types::U128;
use near_sdk::{AccountId, near};

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageNode {
    pub account_id: AccountId,
    pub allocated_capacity: u64,
    pub registered_period: u64,
    pub total_challenges: u64,
    pub passed_challenges: u64,
    pub pending_rewards: U128,
    /// `None` until the node receives its first challenge.
    pub last_challenged_period: Option<u64>,
    pub last_rewarded_period: Option<u64>,
    pub active: bool,
    // Counters scoped to `last_challenged_period`.
    pub period_challenges: u64,
    pub period_passed: u64,
}

impl StorageNode {
    pub(crate) fn new(account_id: AccountId, allocated_capacity: u64, period: u64) -> Self {
        Self {
            account_id,
            allocated_capacity,
            registered_period: period,
            total_challenges: 0,
            passed_challenges: 0,
            pending_rewards: U128(0),
            last_challenged_period: None,
            last_rewarded_period: None,
            active: true,
            period_challenges: 0,
            period_passed: 0,
        }
    }

    pub fn challenged_in(&self, period: u64) -> bool {
        self.last_challenged_period == Some(period)
    }

    pub fn has_clean_history(&self) -> bool {
        self.passed_challenges == self.total_challenges
    }

    pub fn has_clean_period(&self, period: u64) -> bool {
        self.challenged_in(period) && self.period_passed == self.period_challenges
    }

    pub(crate) fn record_challenge(&mut self, period: u64) {
        if !self.challenged_in(period) {
            self.last_challenged_period = Some(period);
            self.period_challenges = 0;
            self.period_passed = 0;
        }
        self.total_challenges += 1;
        self.period_challenges += 1;
    }

    /// `issued_period` is the period the answered challenge was issued in.
    pub(crate) fn record_pass(&mut self, issued_period: u64) {
        self.passed_challenges += 1;
        if self.challenged_in(issued_period) {
            self.period_passed += 1;
        }
    }
}

/// Off-chain reachability info published by a provider.
#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProviderMetadata {
    pub endpoint: String,
    pub peer_addrs: Vec<String>,
}

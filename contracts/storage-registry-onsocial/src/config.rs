use near_sdk::json_types::U128;
use near_sdk::near;

use crate::constants::*;
use crate::errors::RegistryError;

/// Which challenge history a node must have kept clean to earn a period's reward.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RewardEligibility {
    /// Every challenge the node ever received was passed.
    #[default]
    Lifetime,
    /// Every challenge issued to the node in the rewarded period was passed.
    PerPeriod,
}

impl RewardEligibility {
    pub fn as_str(self) -> &'static str {
        match self {
            RewardEligibility::Lifetime => "lifetime",
            RewardEligibility::PerPeriod => "per_period",
        }
    }
}

/// Proof-of-possession scheme applied by `submit_proof`.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProofScheme {
    /// Placeholder: any non-empty proof is accepted.
    #[default]
    NonEmpty,
}

impl ProofScheme {
    pub fn as_str(self) -> &'static str {
        match self {
            ProofScheme::NonEmpty => "non_empty",
        }
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegistryConfig {
    pub reward_per_unit_per_period: U128,
    pub min_allocated_capacity: u64,
    pub max_allocated_capacity: u64,
    pub challenge_timeout_ns: u64,
    pub period_length_ns: u64,
    pub uploader_price_per_unit: U128,
    #[serde(default)]
    pub reward_eligibility: RewardEligibility,
    #[serde(default)]
    pub proof_scheme: ProofScheme,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            reward_per_unit_per_period: U128(DEFAULT_REWARD_PER_UNIT_PER_PERIOD),
            min_allocated_capacity: DEFAULT_MIN_ALLOCATED_CAPACITY,
            max_allocated_capacity: DEFAULT_MAX_ALLOCATED_CAPACITY,
            challenge_timeout_ns: DEFAULT_CHALLENGE_TIMEOUT_NS,
            period_length_ns: DEFAULT_PERIOD_LENGTH_NS,
            uploader_price_per_unit: U128(DEFAULT_UPLOADER_PRICE_PER_UNIT),
            reward_eligibility: RewardEligibility::default(),
            proof_scheme: ProofScheme::default(),
        }
    }
}

impl RegistryConfig {
    pub fn validate(&self) -> Result<(), RegistryError> {
        if self.reward_per_unit_per_period.0 == 0
            || self.min_allocated_capacity == 0
            || self.max_allocated_capacity == 0
            || self.challenge_timeout_ns == 0
            || self.period_length_ns == 0
            || self.uploader_price_per_unit.0 == 0
        {
            return Err(RegistryError::InvalidInput(
                "Config values must be positive".into(),
            ));
        }
        if self.min_allocated_capacity > self.max_allocated_capacity {
            return Err(RegistryError::InvalidInput(format!(
                "min_allocated_capacity {} exceeds max_allocated_capacity {}",
                self.min_allocated_capacity, self.max_allocated_capacity
            )));
        }
        Ok(())
    }

    pub fn check_capacity(&self, capacity: u64) -> Result<(), RegistryError> {
        if capacity < self.min_allocated_capacity || capacity > self.max_allocated_capacity {
            return Err(RegistryError::out_of_range(
                capacity,
                self.min_allocated_capacity,
                self.max_allocated_capacity,
            ));
        }
        Ok(())
    }
}

//! OnSocial Storage Registry: storage provider lifecycle, proof-of-storage
//! challenges, per-period rewards and prepaid uploader bookings.

use near_sdk::json_types::U128;
use near_sdk::store::{IterableMap, IterableSet, LookupMap, Vector};
use near_sdk::{AccountId, Gas, NearToken, PanicOnDefault, Promise, env, near};

pub mod constants;
mod errors;
mod guards;

mod config;
mod events;
mod period;
mod storage;

mod challenge;
mod node;
mod rewards;
mod uploader;

mod admin;
mod upgrade;
mod views;

#[cfg(test)]
mod tests;

pub use challenge::{Challenge, ChallengeStatus, ChallengeView, NonEmptyProof, ProofVerifier};
pub use config::{ProofScheme, RegistryConfig, RewardEligibility};
pub use constants::*;
pub use errors::RegistryError;
pub use node::{ProviderMetadata, StorageNode};
pub use period::{PeriodClock, PeriodStats};
pub use storage::StorageKey;
pub use uploader::CapacityUsage;
pub use views::ContractStats;

#[near(
    contract_state,
    contract_metadata(
        version = "0.1.0",
        link = "https://github.com/OnSocial-Labs/onsocial-protocol",
        standard(standard = "nep297", version = "1.0.0"),
    )
)]
#[derive(PanicOnDefault)]
pub struct Contract {
    pub version: String,

    pub admin_id: AccountId,
    pub paused: bool,
    pub(crate) challengers: IterableSet<AccountId>,
    pub(crate) storage_admins: IterableSet<AccountId>,

    pub config: RegistryConfig,
    pub clock: PeriodClock,

    pub(crate) nodes: LookupMap<AccountId, StorageNode>,
    // Enumeration invariant: node_index holds exactly the active nodes; node_positions[a] is a's slot in it.
    pub(crate) node_index: Vector<AccountId>,
    pub(crate) node_positions: LookupMap<AccountId, u32>,
    pub(crate) provider_metadata: LookupMap<AccountId, ProviderMetadata>,

    pub(crate) challenges: LookupMap<String, Challenge>,
    pub(crate) period_stats: LookupMap<u64, PeriodStats>,
    // Ascending periods with a stored record; unwritten periods inherit from the nearest earlier one.
    pub(crate) stats_periods: Vector<u64>,

    pub(crate) bookings: IterableMap<AccountId, u64>,

    // Sum of allocated_capacity over active nodes.
    pub total_allocated_capacity: u64,
    pub total_booked_capacity: u64,
    // Outstanding liability: sum of pending_rewards over all nodes.
    pub total_pending_rewards: u128,
    pub total_rewards_distributed: u128,
    pub total_challenges_issued: u64,
}

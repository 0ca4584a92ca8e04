use near_sdk::json_types::U64;
use near_sdk::{AccountId, near};

#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChallengeStatus {
    Open,
    Passed,
    /// A proof was submitted and rejected by the verifier.
    Failed,
    /// No proof arrived before the deadline.
    Expired,
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Challenge {
    pub node_id: AccountId,
    pub chunk_id: String,
    pub nonce: u64,
    pub issued_period: u64,
    /// Absolute block timestamp (ns). Proofs are accepted up to and including it.
    pub deadline: u64,
    pub status: ChallengeStatus,
}

impl Challenge {
    pub fn is_resolved(&self) -> bool {
        self.status != ChallengeStatus::Open
    }

    pub fn is_expired_at(&self, now: u64) -> bool {
        !self.is_resolved() && now > self.deadline
    }
}

#[near(serializers = [json])]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChallengeView {
    pub challenge_id: String,
    pub node_id: AccountId,
    pub chunk_id: String,
    pub nonce: U64,
    pub issued_period: u64,
    pub deadline: U64,
    pub status: ChallengeStatus,
    pub resolved: bool,
    pub passed: bool,
}

impl ChallengeView {
    pub(crate) fn new(challenge_id: String, challenge: &Challenge) -> Self {
        Self {
            challenge_id,
            node_id: challenge.node_id.clone(),
            chunk_id: challenge.chunk_id.clone(),
            nonce: U64(challenge.nonce),
            issued_period: challenge.issued_period,
            deadline: U64(challenge.deadline),
            status: challenge.status,
            resolved: challenge.is_resolved(),
            passed: challenge.status == ChallengeStatus::Passed,
        }
    }
}

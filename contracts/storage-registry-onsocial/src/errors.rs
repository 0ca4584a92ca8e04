//! Typed error handling for the storage registry contract.
//!
//! Public methods return `Result<_, RegistryError>` under `#[handle_result]`.
//! An `Err` panics with the `Display` message, which aborts the receipt and
//! reverts every write made by the call.

use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub enum RegistryError {
    /// Out-of-range capacity, zero amounts, malformed ids.
    InvalidInput(String),
    /// Unknown node, challenge or account.
    NotFound(String),
    /// Already registered, resolved or distributed.
    Conflict(String),
    /// Caller lacks the required role or identity.
    Unauthorized(String),
    /// Deadline passed, or a deadline has not yet been reached.
    Timing(String),
    /// Payment too low, or the contract cannot cover a payout.
    InsufficientFunds(String),
    ContractPaused,
    /// Internal invariant violation (should never happen).
    InternalError(String),
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
            Self::Conflict(msg) => write!(f, "Conflict: {}", msg),
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::Timing(msg) => write!(f, "Timing: {}", msg),
            Self::InsufficientFunds(msg) => write!(f, "Insufficient funds: {}", msg),
            Self::ContractPaused => write!(f, "Contract is paused"),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

// ── Factory helpers for common errors ────────────────────────────────────────

impl RegistryError {
    pub fn out_of_range(capacity: u64, min: u64, max: u64) -> Self {
        Self::InvalidInput(format!(
            "OutOfRange: capacity {} outside [{}, {}]",
            capacity, min, max
        ))
    }
    pub fn zero_amount() -> Self {
        Self::InvalidInput("ZeroAmount: amount must be greater than zero".into())
    }
    pub fn already_registered() -> Self {
        Self::Conflict("AlreadyRegistered: caller already has a storage node".into())
    }
    pub fn not_registered() -> Self {
        Self::NotFound("NotRegistered: caller has no storage node".into())
    }
    pub fn already_inactive() -> Self {
        Self::Conflict("AlreadyInactive: storage node is already inactive".into())
    }
    pub fn node_not_found(account_id: &near_sdk::AccountId) -> Self {
        Self::NotFound(format!("NodeNotFound: {}", account_id))
    }
    pub fn node_inactive(account_id: &near_sdk::AccountId) -> Self {
        Self::Conflict(format!("NodeInactive: {}", account_id))
    }
    pub fn duplicate_challenge(challenge_id: &str) -> Self {
        Self::Conflict(format!("DuplicateChallenge: {}", challenge_id))
    }
    pub fn challenge_not_found(challenge_id: &str) -> Self {
        Self::NotFound(format!("ChallengeNotFound: {}", challenge_id))
    }
    pub fn already_resolved(challenge_id: &str) -> Self {
        Self::Conflict(format!("AlreadyResolved: {}", challenge_id))
    }
    pub fn wrong_caller() -> Self {
        Self::Unauthorized("WrongCaller: only the challenged node can submit a proof".into())
    }
    pub fn deadline_passed(challenge_id: &str) -> Self {
        Self::Timing(format!("DeadlinePassed: {}", challenge_id))
    }
    pub fn already_distributed(period: u64) -> Self {
        Self::Conflict(format!("AlreadyDistributed: period {}", period))
    }
    pub fn incomplete_challenge_coverage(account_id: &near_sdk::AccountId, period: u64) -> Self {
        Self::Conflict(format!(
            "IncompleteChallengeCoverage: {} not challenged in period {}",
            account_id, period
        ))
    }
    pub fn nothing_to_claim() -> Self {
        Self::Conflict("NothingToClaim: no pending rewards".into())
    }
    pub fn insufficient_contract_balance(required: u128, available: u128) -> Self {
        Self::InsufficientFunds(format!(
            "InsufficientContractBalance: required {}, available {}",
            required, available
        ))
    }
    pub fn underfunded_payment(required: u128, attached: u128) -> Self {
        Self::InsufficientFunds(format!(
            "UnderfundedPayment: required {}, attached {}",
            required, attached
        ))
    }
    pub fn insufficient_network_capacity(requested: u64, available: u64) -> Self {
        Self::Conflict(format!(
            "InsufficientNetworkCapacity: requested {}, available {}",
            requested, available
        ))
    }
    pub fn only(role: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", role))
    }
    pub fn overflow(what: &str) -> Self {
        Self::InternalError(format!("{} overflow", what))
    }
}

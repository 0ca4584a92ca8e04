use near_sdk::AccountId;

use super::CHALLENGE;
use super::builder::EventBuilder;
use crate::challenge::Challenge;

pub fn emit_challenge_issued(challenger: &AccountId, challenge_id: &str, challenge: &Challenge) {
    EventBuilder::new(CHALLENGE, "challenge_issued", challenger)
        .field("challenge_id", challenge_id)
        .field("node_id", &challenge.node_id)
        .field("chunk_id", &challenge.chunk_id)
        .field("nonce", challenge.nonce)
        .field("issued_period", challenge.issued_period)
        .field("deadline", challenge.deadline)
        .emit();
}

pub fn emit_proof_submitted(node_id: &AccountId, challenge_id: &str, passed: bool) {
    EventBuilder::new(CHALLENGE, "proof_submitted", node_id)
        .field("challenge_id", challenge_id)
        .field("node_id", node_id)
        .field("passed", passed)
        .emit();
}

pub fn emit_challenge_expired(caller: &AccountId, challenge_id: &str, node_id: &AccountId) {
    EventBuilder::new(CHALLENGE, "challenge_expired", caller)
        .field("challenge_id", challenge_id)
        .field("node_id", node_id)
        .emit();
}

use near_sdk::json_types::{Base64VecU8, U64};

use crate::guards::check_id;
use crate::*;

#[near]
impl Contract {
    #[handle_result]
    pub fn issue_challenge(
        &mut self,
        challenge_id: String,
        node_id: AccountId,
        chunk_id: String,
        nonce: U64,
    ) -> Result<(), RegistryError> {
        self.check_not_paused()?;
        let challenger = env::predecessor_account_id();
        self.check_challenger(&challenger)?;
        self.internal_issue_challenge(&challenger, challenge_id, node_id, chunk_id, nonce.0)
    }

    /// Returns whether the proof was accepted. A rejected proof still
    /// resolves the challenge, as `Failed`.
    #[handle_result]
    pub fn submit_proof(
        &mut self,
        challenge_id: String,
        proof: Base64VecU8,
    ) -> Result<bool, RegistryError> {
        self.check_not_paused()?;
        let verifier = self.config.proof_scheme.verifier();
        self.submit_proof_with(
            &env::predecessor_account_id(),
            &challenge_id,
            &proof.0,
            verifier.as_ref(),
        )
    }

    /// Open to anyone. Ids that are unknown, resolved or still within their
    /// deadline are skipped. Returns how many challenges were expired.
    #[handle_result]
    pub fn resolve_expired_challenges(
        &mut self,
        challenge_ids: Vec<String>,
    ) -> Result<u32, RegistryError> {
        self.check_not_paused()?;
        if challenge_ids.len() > MAX_RESOLVE_BATCH {
            return Err(RegistryError::InvalidInput(format!(
                "Too many challenge ids (max {})",
                MAX_RESOLVE_BATCH
            )));
        }
        let caller = env::predecessor_account_id();
        let now = env::block_timestamp();
        let mut expired = 0u32;
        for challenge_id in challenge_ids {
            let Some(challenge) = self.challenges.get_mut(&challenge_id) else {
                continue;
            };
            if !challenge.is_expired_at(now) {
                continue;
            }
            challenge.status = ChallengeStatus::Expired;
            events::emit_challenge_expired(&caller, &challenge_id, &challenge.node_id);
            expired += 1;
        }
        Ok(expired)
    }
}

impl Contract {
    pub(crate) fn internal_issue_challenge(
        &mut self,
        challenger: &AccountId,
        challenge_id: String,
        node_id: AccountId,
        chunk_id: String,
        nonce: u64,
    ) -> Result<(), RegistryError> {
        check_id(&challenge_id, "Challenge id", MAX_CHALLENGE_ID_LEN)?;
        check_id(&chunk_id, "Chunk id", MAX_CHUNK_ID_LEN)?;
        if self.challenges.contains_key(&challenge_id) {
            return Err(RegistryError::duplicate_challenge(&challenge_id));
        }
        let node = self
            .nodes
            .get(&node_id)
            .ok_or_else(|| RegistryError::node_not_found(&node_id))?;
        if !node.active {
            return Err(RegistryError::node_inactive(&node_id));
        }
        let now = env::block_timestamp();
        let deadline = now
            .checked_add(self.config.challenge_timeout_ns)
            .ok_or_else(|| RegistryError::overflow("Challenge deadline"))?;

        let period = self.current_period();
        self.update_period_stats(period, |stats| stats.challenges_issued += 1);

        if let Some(node) = self.nodes.get_mut(&node_id) {
            node.record_challenge(period);
        }
        let challenge = Challenge {
            node_id,
            chunk_id,
            nonce,
            issued_period: period,
            deadline,
            status: ChallengeStatus::Open,
        };
        events::emit_challenge_issued(challenger, &challenge_id, &challenge);
        self.challenges.insert(challenge_id, challenge);
        self.total_challenges_issued += 1;
        Ok(())
    }

    pub(crate) fn submit_proof_with(
        &mut self,
        caller: &AccountId,
        challenge_id: &str,
        proof: &[u8],
        verifier: &dyn ProofVerifier,
    ) -> Result<bool, RegistryError> {
        if proof.len() > MAX_PROOF_LEN {
            return Err(RegistryError::InvalidInput(format!(
                "Proof exceeds {} bytes",
                MAX_PROOF_LEN
            )));
        }
        let challenge = self
            .challenges
            .get(challenge_id)
            .ok_or_else(|| RegistryError::challenge_not_found(challenge_id))?;
        if challenge.is_resolved() {
            return Err(RegistryError::already_resolved(challenge_id));
        }
        if &challenge.node_id != caller {
            return Err(RegistryError::wrong_caller());
        }
        if env::block_timestamp() > challenge.deadline {
            return Err(RegistryError::deadline_passed(challenge_id));
        }

        let passed = verifier.verify(challenge, proof);
        let issued_period = challenge.issued_period;

        if passed {
            self.update_period_stats(issued_period, |stats| stats.challenges_passed += 1);
            if let Some(node) = self.nodes.get_mut(caller) {
                node.record_pass(issued_period);
            }
        }
        if let Some(challenge) = self.challenges.get_mut(challenge_id) {
            challenge.status = if passed {
                ChallengeStatus::Passed
            } else {
                ChallengeStatus::Failed
            };
        }

        events::emit_proof_submitted(caller, challenge_id, passed);
        Ok(passed)
    }
}

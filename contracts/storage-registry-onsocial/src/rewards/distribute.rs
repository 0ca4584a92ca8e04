use std::collections::HashSet;

use crate::*;

#[near]
impl Contract {
    /// Credits `allocated_capacity × reward_per_unit_per_period` to every
    /// eligible active candidate, once per period. Every active candidate
    /// must have been challenged in `period`. Unknown and inactive
    /// candidates are skipped; duplicates are credited once.
    #[handle_result]
    pub fn distribute_rewards(
        &mut self,
        period: u64,
        nodes: Vec<AccountId>,
    ) -> Result<U128, RegistryError> {
        self.check_not_paused()?;
        let challenger = env::predecessor_account_id();
        self.check_challenger(&challenger)?;
        self.internal_distribute_rewards(&challenger, period, nodes)
            .map(U128)
    }
}

impl Contract {
    pub(crate) fn internal_distribute_rewards(
        &mut self,
        challenger: &AccountId,
        period: u64,
        candidates: Vec<AccountId>,
    ) -> Result<u128, RegistryError> {
        let current = self.current_period();
        if period > current {
            return Err(RegistryError::InvalidInput(format!(
                "Period {} has not started (current period {})",
                period, current
            )));
        }
        if candidates.is_empty() {
            return Err(RegistryError::InvalidInput(
                "Candidate list must not be empty".into(),
            ));
        }
        if self.period_stats_or_seed(period).rewards_distributed {
            return Err(RegistryError::already_distributed(period));
        }

        let rate = self.config.reward_per_unit_per_period.0;
        let eligibility = self.config.reward_eligibility;
        let mut seen = HashSet::new();
        let mut credits: Vec<(AccountId, u128)> = Vec::new();
        let mut total: u128 = 0;

        for account_id in candidates {
            if !seen.insert(account_id.clone()) {
                continue;
            }
            let Some(node) = self.nodes.get(&account_id) else {
                continue;
            };
            if !node.active {
                continue;
            }
            if !node.challenged_in(period) {
                return Err(RegistryError::incomplete_challenge_coverage(
                    &account_id,
                    period,
                ));
            }
            let eligible = match eligibility {
                RewardEligibility::Lifetime => node.has_clean_history(),
                RewardEligibility::PerPeriod => node.has_clean_period(period),
            };
            if !eligible {
                continue;
            }
            let reward = (node.allocated_capacity as u128)
                .checked_mul(rate)
                .ok_or_else(|| RegistryError::overflow("Reward"))?;
            total = total
                .checked_add(reward)
                .ok_or_else(|| RegistryError::overflow("Reward total"))?;
            credits.push((account_id, reward));
        }

        let pending_total = self
            .total_pending_rewards
            .checked_add(total)
            .ok_or_else(|| RegistryError::overflow("Pending rewards"))?;
        let distributed_total = self
            .total_rewards_distributed
            .checked_add(total)
            .ok_or_else(|| RegistryError::overflow("Distributed rewards"))?;

        self.update_period_stats(period, |stats| {
            stats.total_rewards_distributed = U128(stats.total_rewards_distributed.0.saturating_add(total));
            stats.rewards_distributed = true;
        });
        for (account_id, reward) in &credits {
            if let Some(node) = self.nodes.get_mut(account_id) {
                node.pending_rewards = U128(node.pending_rewards.0.saturating_add(*reward));
                node.last_rewarded_period = Some(period);
            }
        }
        self.total_pending_rewards = pending_total;
        self.total_rewards_distributed = distributed_total;

        let rewarded: Vec<AccountId> = credits.into_iter().map(|(account_id, _)| account_id).collect();
        events::emit_rewards_distributed(challenger, period, &rewarded, total);
        Ok(total)
    }
}

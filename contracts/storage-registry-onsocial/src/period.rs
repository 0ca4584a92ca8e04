use crate::*;

/// Maps block time onto period numbers.
///
/// `period = anchor_period + (now - anchor_timestamp) / period_length_ns`.
/// Changing the length re-anchors at the start of the running period, so
/// period numbers never go backwards.
#[near(serializers = [borsh, json])]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodClock {
    pub anchor_period: u64,
    pub anchor_timestamp: u64,
    pub period_length_ns: u64,
}

impl PeriodClock {
    pub fn new(genesis_timestamp: u64, period_length_ns: u64) -> Self {
        Self {
            anchor_period: 0,
            anchor_timestamp: genesis_timestamp,
            period_length_ns,
        }
    }

    pub fn period_at(&self, timestamp: u64) -> u64 {
        let elapsed = timestamp.saturating_sub(self.anchor_timestamp);
        self.anchor_period + elapsed / self.period_length_ns
    }

    pub fn period_start(&self, period: u64) -> u64 {
        let offset = period.saturating_sub(self.anchor_period);
        self.anchor_timestamp
            .saturating_add(offset.saturating_mul(self.period_length_ns))
    }

    pub fn reanchor(&mut self, now: u64, period_length_ns: u64) {
        if period_length_ns == self.period_length_ns {
            return;
        }
        let current = self.period_at(now);
        self.anchor_timestamp = self.period_start(current);
        self.anchor_period = current;
        self.period_length_ns = period_length_ns;
    }
}

#[near(serializers = [borsh, json])]
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PeriodStats {
    pub total_capacity_stored: u64,
    pub total_rewards_distributed: U128,
    pub active_nodes: u64,
    pub challenges_issued: u64,
    pub challenges_passed: u64,
    /// Write-once latch set by reward distribution.
    pub rewards_distributed: bool,
}

impl Contract {
    pub(crate) fn current_period(&self) -> u64 {
        self.clock.period_at(env::block_timestamp())
    }

    /// Record for `period`, or the record it would be created with.
    /// An unwritten period inherits the capacity and node totals of the
    /// nearest earlier written period, so the answer does not depend on
    /// when it is asked.
    pub(crate) fn period_stats_or_seed(&self, period: u64) -> PeriodStats {
        if let Some(stats) = self.period_stats.get(&period) {
            return stats.clone();
        }
        match self.latest_stats_period_at(period) {
            Some(base) => self
                .period_stats
                .get(&base)
                .map(|stats| PeriodStats {
                    total_capacity_stored: stats.total_capacity_stored,
                    active_nodes: stats.active_nodes,
                    ..Default::default()
                })
                .unwrap_or_default(),
            None => PeriodStats::default(),
        }
    }

    // A record older than the last indexed period is left out of the index. Such a
    // record only arises from a distribution backfill, which keeps the carried totals.
    pub(crate) fn update_period_stats(&mut self, period: u64, apply: impl FnOnce(&mut PeriodStats)) {
        let mut stats = self.period_stats_or_seed(period);
        apply(&mut stats);
        let is_latest = match self.stats_periods.len() {
            0 => true,
            len => self.stats_periods.get(len - 1).is_some_and(|last| period > *last),
        };
        if is_latest {
            self.stats_periods.push(period);
        }
        self.period_stats.insert(period, stats);
    }

    /// Greatest indexed period `<= period`.
    fn latest_stats_period_at(&self, period: u64) -> Option<u64> {
        let (mut lo, mut hi) = (0u32, self.stats_periods.len());
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            match self.stats_periods.get(mid) {
                Some(p) if *p <= period => lo = mid + 1,
                _ => hi = mid,
            }
        }
        lo.checked_sub(1)
            .and_then(|index| self.stats_periods.get(index).copied())
    }
}

#[near]
impl Contract {
    pub fn get_current_period(&self) -> u64 {
        self.current_period()
    }

    pub fn get_period_clock(&self) -> &PeriodClock {
        &self.clock
    }

    pub fn get_period_stats(&self, period: u64) -> PeriodStats {
        self.period_stats_or_seed(period)
    }
}

use crate::tests::test_utils::*;
use crate::*;
use near_sdk::testing_env;

const HOUR: u64 = NANOS_PER_HOUR;

// --- PeriodClock ---

#[test]
fn clock_counts_whole_periods() {
    let clock = PeriodClock::new(1_000, 100);
    assert_eq!(clock.period_at(1_000), 0);
    assert_eq!(clock.period_at(1_099), 0);
    assert_eq!(clock.period_at(1_100), 1);
    assert_eq!(clock.period_at(1_550), 5);
    // Before genesis saturates to period 0.
    assert_eq!(clock.period_at(0), 0);
    assert_eq!(clock.period_start(5), 1_500);
}

#[test]
fn reanchor_keeps_numbering_monotonic() {
    let mut clock = PeriodClock::new(0, 100);
    clock.reanchor(350, 50);
    assert_eq!(clock.anchor_period, 3);
    assert_eq!(clock.anchor_timestamp, 300);
    assert_eq!(clock.period_at(350), 4);
    assert_eq!(clock.period_at(299), 3);
    assert_eq!(clock.period_at(400), 5);
}

#[test]
fn reanchor_same_length_is_noop() {
    let mut clock = PeriodClock::new(0, 100);
    clock.reanchor(350, 100);
    assert_eq!(clock, PeriodClock::new(0, 100));
}

#[test]
fn contract_period_follows_block_time() {
    let contract = new_contract();
    testing_env!(at_time(stranger(), HOUR - 1).build());
    assert_eq!(contract.get_current_period(), 0);
    testing_env!(at_time(stranger(), 3 * HOUR).build());
    assert_eq!(contract.get_current_period(), 3);
}

#[test]
fn period_length_change_reanchors() {
    let mut contract = new_contract();
    let mut ctx = at_time(owner(), HOUR + HOUR / 2);
    ctx.attached_deposit(NearToken::from_yoctonear(1));
    testing_env!(ctx.build());
    contract
        .update_config(RegistryConfig {
            period_length_ns: HOUR / 2,
            ..Default::default()
        })
        .unwrap();
    assert_eq!(contract.get_current_period(), 2);
    assert_eq!(contract.get_period_clock().anchor_period, 1);
    assert_eq!(contract.get_period_clock().anchor_timestamp, GENESIS + HOUR);
}

// --- PeriodStats ---

#[test]
fn stats_accumulate_registry_deltas() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);
    let stats = contract.get_period_stats(0);
    assert_eq!(stats.total_capacity_stored, 10);
    assert_eq!(stats.active_nodes, 1);

    testing_env!(at_time(node_b(), HOUR).build());
    // Unwritten running period is seeded from live totals.
    let seeded = contract.get_period_stats(1);
    assert_eq!(seeded.total_capacity_stored, 10);
    assert_eq!(seeded.active_nodes, 1);
    contract.register_node(5).unwrap();

    testing_env!(at_time(node_a(), HOUR).build());
    contract.unregister_node().unwrap();
    let stats = contract.get_period_stats(1);
    assert_eq!(stats.total_capacity_stored, 5);
    assert_eq!(stats.active_nodes, 1);

    // Earlier period is untouched.
    assert_eq!(contract.get_period_stats(0).total_capacity_stored, 10);
}

#[test]
fn unwritten_period_reads_the_same_whenever_asked() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);

    testing_env!(at_time(stranger(), HOUR).build());
    let while_running = contract.get_period_stats(1);
    testing_env!(at_time(stranger(), 2 * HOUR).build());
    let afterwards = contract.get_period_stats(1);
    testing_env!(at_time(stranger(), 9 * HOUR).build());
    let much_later = contract.get_period_stats(1);

    assert_eq!(while_running, afterwards);
    assert_eq!(afterwards, much_later);
    assert_eq!(much_later.total_capacity_stored, 10);
    assert_eq!(much_later.active_nodes, 1);
}

#[test]
fn unwritten_periods_inherit_nearest_earlier_record() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);
    testing_env!(at_time(node_b(), 3 * HOUR).build());
    contract.register_node(5).unwrap();
    issue_at(&mut contract, "c1", node_a(), 3 * HOUR);

    testing_env!(at_time(stranger(), 6 * HOUR).build());
    // Periods 1 and 2 carry period 0 forward.
    assert_eq!(contract.get_period_stats(2).total_capacity_stored, 10);
    assert_eq!(contract.get_period_stats(2).active_nodes, 1);
    // Periods after 3 carry period 3 forward, without its activity counters.
    let later = contract.get_period_stats(5);
    assert_eq!(later.total_capacity_stored, 15);
    assert_eq!(later.active_nodes, 2);
    assert_eq!(later.challenges_issued, 0);
    assert_eq!(contract.get_period_stats(3).challenges_issued, 1);
}

#[test]
fn periods_before_any_activity_are_empty() {
    let mut contract = new_contract();
    testing_env!(at_time(node_a(), 2 * HOUR).build());
    contract.register_node(10).unwrap();
    assert_eq!(contract.get_period_stats(0), PeriodStats::default());
    assert_eq!(contract.get_period_stats(1), PeriodStats::default());
    assert_eq!(contract.get_period_stats(2).total_capacity_stored, 10);
}

#[test]
fn backfilled_distribution_record_keeps_carried_totals() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);
    testing_env!(at_time(node_a(), 4 * HOUR).build());
    contract.unregister_node().unwrap();

    // Nothing active to cover in period 2, so it only gets the distribution latch.
    testing_env!(at_time(owner(), 5 * HOUR).build());
    contract.distribute_rewards(2, vec![node_a()]).unwrap();

    let stats = contract.get_period_stats(2);
    assert!(stats.rewards_distributed);
    assert_eq!(stats.total_capacity_stored, 10);
    assert_eq!(contract.get_period_stats(3).total_capacity_stored, 10);
    assert_eq!(contract.get_period_stats(5).total_capacity_stored, 0);
}

#[test]
fn stats_count_challenges_in_issue_period() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);
    issue(&mut contract, "c1", node_a());
    // Proof lands in the next period; it is still credited to period 0.
    issue_at(&mut contract, "c2", node_a(), HOUR - 1);
    prove_at(&mut contract, "c2", node_a(), HOUR);

    let stats = contract.get_period_stats(0);
    assert_eq!(stats.challenges_issued, 2);
    assert_eq!(stats.challenges_passed, 1);
    testing_env!(at_time(stranger(), HOUR).build());
    assert_eq!(contract.get_period_stats(1).challenges_passed, 0);
}

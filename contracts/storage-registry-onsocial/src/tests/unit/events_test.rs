use crate::tests::test_utils::*;
use crate::*;
use near_sdk::serde_json::{self, Value};
use near_sdk::test_utils::get_logs;
use near_sdk::testing_env;

fn parse_events() -> Vec<Value> {
    get_logs()
        .iter()
        .filter_map(|l| l.strip_prefix("EVENT_JSON:"))
        .map(|json| serde_json::from_str(json).unwrap())
        .collect()
}

fn single_event() -> Value {
    let mut events = parse_events();
    assert_eq!(events.len(), 1, "expected exactly one event");
    events.remove(0)
}

#[test]
fn node_registered_event_shape() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);

    let event = single_event();
    assert_eq!(event["standard"], "onsocial");
    assert_eq!(event["version"], "1.0.0");
    assert_eq!(event["event"], "NODE_UPDATE");
    let data = &event["data"][0];
    assert_eq!(data["operation"], "node_registered");
    assert_eq!(data["author"], node_a().as_str());
    assert_eq!(data["allocated_capacity"], "10");
    assert_eq!(data["period"], "0");
}

#[test]
fn challenge_events() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);
    issue(&mut contract, "c1", node_a());
    let event = single_event();
    assert_eq!(event["event"], "CHALLENGE_UPDATE");
    assert_eq!(event["data"][0]["operation"], "challenge_issued");
    assert_eq!(event["data"][0]["challenge_id"], "c1");
    assert_eq!(event["data"][0]["nonce"], "7");

    prove(&mut contract, "c1", node_a());
    let event = single_event();
    assert_eq!(event["data"][0]["operation"], "proof_submitted");
    assert_eq!(event["data"][0]["passed"], true);
}

#[test]
fn expiry_event_per_expired_challenge() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);
    issue(&mut contract, "c1", node_a());
    issue(&mut contract, "c2", node_a());
    testing_env!(at_time(stranger(), DEFAULT_CHALLENGE_TIMEOUT_NS + 1).build());
    contract
        .resolve_expired_challenges(vec!["c1".into(), "c2".into()])
        .unwrap();
    let events = parse_events();
    assert_eq!(events.len(), 2);
    assert!(events
        .iter()
        .all(|e| e["data"][0]["operation"] == "challenge_expired"));
    assert_eq!(events[0]["data"][0]["author"], stranger().as_str());
}

#[test]
fn rewards_distributed_event_lists_rewarded_nodes() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);
    issue(&mut contract, "c1", node_a());
    prove(&mut contract, "c1", node_a());
    testing_env!(context(owner()).build());
    contract.distribute_rewards(0, vec![node_a()]).unwrap();

    let event = single_event();
    assert_eq!(event["event"], "REWARD_UPDATE");
    let data = &event["data"][0];
    assert_eq!(data["operation"], "rewards_distributed");
    assert_eq!(data["rewarded_nodes"][0], node_a().as_str());
    assert_eq!(data["total_distributed"], "10000000");
}

#[test]
fn pause_events() {
    let mut contract = new_contract();
    pause(&mut contract);
    let event = single_event();
    assert_eq!(event["event"], "CONTRACT_UPDATE");
    assert_eq!(event["data"][0]["operation"], "paused");

    testing_env!(context_with_deposit(owner(), 1).build());
    contract.set_paused(false).unwrap();
    assert_eq!(single_event()["data"][0]["operation"], "unpaused");
}

#[test]
fn failed_call_emits_nothing() {
    let mut contract = new_contract();
    testing_env!(context(node_a()).build());
    assert!(contract.register_node(0).is_err());
    assert!(parse_events().is_empty());
}

#[test]
fn metadata_event_carries_peers() {
    let mut contract = new_contract();
    register(&mut contract, node_a(), 10);
    testing_env!(context(node_a()).build());
    contract
        .update_metadata("https://a".into(), vec!["/ip4/1.2.3.4".into()])
        .unwrap();
    let event = single_event();
    assert_eq!(event["data"][0]["operation"], "metadata_updated");
    assert_eq!(event["data"][0]["peer_addrs"][0], "/ip4/1.2.3.4");
}

#[test]
fn fund_contract_event() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(stranger(), 42).build());
    contract.fund_contract().unwrap();
    let event = single_event();
    assert_eq!(event["data"][0]["operation"], "contract_funded");
    assert_eq!(event["data"][0]["amount"], "42");
}

#[test]
fn config_updated_event_carries_policies() {
    let mut contract = new_contract();
    testing_env!(context_with_deposit(owner(), 1).build());
    contract
        .update_config(RegistryConfig {
            reward_eligibility: RewardEligibility::PerPeriod,
            ..RegistryConfig::default()
        })
        .unwrap();
    let event = single_event();
    let data = &event["data"][0];
    assert_eq!(data["operation"], "config_updated");
    assert_eq!(data["reward_eligibility"], "per_period");
    assert_eq!(data["proof_scheme"], "non_empty");
    assert_eq!(data["period"], "0");
}

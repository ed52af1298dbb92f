#![cfg(test)]
//! Tests for the claim engine: aggregation, idempotence, and payouts.

use crate::errors::VestingError;
use crate::{VestingVaultContract, VestingVaultContractClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::{token, Address, Env};

const ADMIN_BALANCE: i128 = 10_000_000;

fn setup() -> (
    Env,
    VestingVaultContractClient<'static>,
    Address,
    Address,
    token::Client<'static>,
) {
    let env = Env::default();
    env.mock_all_auths();

    let contract_id = env.register(VestingVaultContract, ());
    let client = VestingVaultContractClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let beneficiary = Address::generate(&env);
    let recovery = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_id = env
        .register_stellar_asset_contract_v2(token_admin)
        .address();
    let sac = token::StellarAssetClient::new(&env, &token_id);
    let token_client = token::Client::new(&env, &token_id);

    client.initialize(&admin, &token_id, &recovery);
    sac.mint(&admin, &ADMIN_BALANCE);

    (env, client, admin, beneficiary, token_client)
}

#[test]
fn test_claim_lifecycle_scenario() {
    let (env, client, admin, beneficiary, token_client) = setup();

    client.create_schedule(&admin, &beneficiary, &1_000i128, &10u32, &100u64, &1_100u64);

    // Before the cliff only the upfront portion is claimable.
    env.ledger().set_timestamp(50);
    assert_eq!(client.claimable(&beneficiary), 100);

    // Halfway through the ramp: 100 upfront + 450 accrued.
    env.ledger().set_timestamp(600);
    assert_eq!(client.claimable(&beneficiary), 550);
    let paid = client.claim(&beneficiary);
    assert_eq!(paid, 550);
    assert_eq!(token_client.balance(&beneficiary), 550);

    // At ramp end the remainder pays out and the totals sum exactly.
    env.ledger().set_timestamp(1_100);
    let paid = client.claim(&beneficiary);
    assert_eq!(paid, 450);
    assert_eq!(token_client.balance(&beneficiary), 1_000);
    assert_eq!(token_client.balance(&client.address), 0);
}

#[test]
fn test_claim_before_cliff_pays_upfront() {
    let (env, client, admin, beneficiary, token_client) = setup();

    client.create_schedule(&admin, &beneficiary, &1_000i128, &25u32, &500u64, &1_500u64);

    env.ledger().set_timestamp(10);
    let paid = client.claim(&beneficiary);
    assert_eq!(paid, 250);
    assert_eq!(token_client.balance(&beneficiary), 250);

    let stored = client.get_schedule(&beneficiary, &0u32);
    assert_eq!(stored.claimed_amount, 250);
}

#[test]
fn test_claim_twice_same_timestamp_fails_second() {
    let (env, client, admin, beneficiary, _token_client) = setup();

    client.create_schedule(&admin, &beneficiary, &1_000i128, &10u32, &100u64, &1_100u64);

    env.ledger().set_timestamp(600);
    client.claim(&beneficiary);

    let second = client.try_claim(&beneficiary);
    assert_eq!(second, Err(Ok(VestingError::NothingToClaim)));

    // The failed second claim changed nothing.
    let stored = client.get_schedule(&beneficiary, &0u32);
    assert_eq!(stored.claimed_amount, 550);
}

#[test]
fn test_claim_without_schedules_fails() {
    let (_env, client, _admin, beneficiary, _token_client) = setup();

    let result = client.try_claim(&beneficiary);
    assert_eq!(result, Err(Ok(VestingError::NoSchedules)));
}

#[test]
fn test_claim_fully_vested_schedule_then_nothing() {
    let (env, client, admin, beneficiary, _token_client) = setup();

    client.create_schedule(&admin, &beneficiary, &777i128, &0u32, &100u64, &200u64);

    env.ledger().set_timestamp(200);
    assert_eq!(client.claim(&beneficiary), 777);

    // Fully drained: even far in the future there is nothing left.
    env.ledger().set_timestamp(1_000_000);
    let result = client.try_claim(&beneficiary);
    assert_eq!(result, Err(Ok(VestingError::NothingToClaim)));
}

#[test]
fn test_claim_aggregates_across_schedules() {
    let (env, client, admin, beneficiary, token_client) = setup();

    client.create_schedule(&admin, &beneficiary, &1_000i128, &10u32, &100u64, &1_100u64);
    client.create_schedule(&admin, &beneficiary, &600i128, &50u32, &800u64, &1_800u64);
    client.create_schedule(&admin, &beneficiary, &400i128, &0u32, &2_000u64, &3_000u64);

    env.ledger().set_timestamp(600);
    // Schedule 0 mid-ramp: 550. Schedule 1 pre-cliff: upfront 300.
    // Schedule 2 pre-cliff with no upfront: 0.
    assert_eq!(client.claimable(&beneficiary), 850);

    let paid = client.claim(&beneficiary);
    assert_eq!(paid, 850);
    assert_eq!(token_client.balance(&beneficiary), 850);

    let schedules = client.get_schedules(&beneficiary);
    assert_eq!(schedules.get_unchecked(0).claimed_amount, 550);
    assert_eq!(schedules.get_unchecked(1).claimed_amount, 300);
    assert_eq!(schedules.get_unchecked(2).claimed_amount, 0);
}

#[test]
fn test_claim_total_matches_per_schedule_previews() {
    let (env, client, admin, beneficiary, _token_client) = setup();

    client.create_schedule(&admin, &beneficiary, &1_000i128, &10u32, &100u64, &1_100u64);
    client.create_schedule(&admin, &beneficiary, &999i128, &33u32, &50u64, &750u64);
    client.create_schedule(&admin, &beneficiary, &250i128, &100u32, &300u64, &400u64);

    env.ledger().set_timestamp(620);
    let now = env.ledger().timestamp();

    let mut expected: i128 = 0;
    for schedule in client.get_schedules(&beneficiary).iter() {
        expected += schedule.claimable_at(now).unwrap();
    }

    assert_eq!(client.claimable(&beneficiary), expected);
    assert_eq!(client.claim(&beneficiary), expected);
}

#[test]
fn test_claimable_unknown_beneficiary_is_zero() {
    let (env, client, _admin, _beneficiary, _token_client) = setup();

    let stranger = Address::generate(&env);
    assert_eq!(client.claimable(&stranger), 0);
}

#[test]
fn test_claimable_does_not_mutate() {
    let (env, client, admin, beneficiary, token_client) = setup();

    client.create_schedule(&admin, &beneficiary, &1_000i128, &10u32, &100u64, &1_100u64);

    env.ledger().set_timestamp(600);
    assert_eq!(client.claimable(&beneficiary), 550);
    assert_eq!(client.claimable(&beneficiary), 550);

    let stored = client.get_schedule(&beneficiary, &0u32);
    assert_eq!(stored.claimed_amount, 0);
    assert_eq!(token_client.balance(&beneficiary), 0);
}

#[test]
fn test_claims_only_touch_own_schedules() {
    let (env, client, admin, beneficiary, token_client) = setup();
    let other = Address::generate(&env);

    client.create_schedule(&admin, &beneficiary, &1_000i128, &10u32, &100u64, &1_100u64);
    client.create_schedule(&admin, &other, &2_000i128, &10u32, &100u64, &1_100u64);

    env.ledger().set_timestamp(1_100);
    assert_eq!(client.claim(&beneficiary), 1_000);
    assert_eq!(token_client.balance(&beneficiary), 1_000);

    // The other beneficiary's allocation is untouched.
    assert_eq!(client.claimable(&other), 2_000);
    let stored = client.get_schedule(&other, &0u32);
    assert_eq!(stored.claimed_amount, 0);
}

#[test]
fn test_interleaved_claims_sum_to_total() {
    let (env, client, admin, beneficiary, token_client) = setup();

    client.create_schedule(&admin, &beneficiary, &1_000i128, &10u32, &100u64, &1_100u64);

    let mut received: i128 = 0;
    for now in [50u64, 300, 301, 700, 1_099, 1_100, 5_000] {
        env.ledger().set_timestamp(now);
        if let Ok(Ok(paid)) = client.try_claim(&beneficiary) {
            received += paid;
        }
    }

    assert_eq!(received, 1_000);
    assert_eq!(token_client.balance(&beneficiary), 1_000);
}

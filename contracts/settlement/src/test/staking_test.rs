use soroban_sdk::token;

use crate::errors::Error;
use crate::rewards::SECONDS_PER_YEAR;
use crate::test::{advance_ledger, setup_test, REWARD_RATE_BPS, STARTING_BALANCE};

fn day_reward(principal: i128, seconds: u64) -> i128 {
    (principal * REWARD_RATE_BPS as i128 * seconds as i128) / (10_000 * SECONDS_PER_YEAR as i128)
}

#[test]
fn test_deposit_credits_ledger() {
    let (_env, client, _, _, _, seller, buyer) = setup_test();

    assert_eq!(client.balance_of(&seller), STARTING_BALANCE);
    assert_eq!(client.balance_of(&buyer), STARTING_BALANCE);
}

#[test]
fn test_withdraw_returns_tokens() {
    let (env, client, _, token_sac, _, seller, _) = setup_test();
    let token = token::TokenClient::new(&env, &token_sac.address);

    client.withdraw(&seller, &1_000_000_000);

    assert_eq!(client.balance_of(&seller), STARTING_BALANCE - 1_000_000_000);
    assert_eq!(token.balance(&seller), 1_000_000_000);
}

#[test]
fn test_withdraw_insufficient_funds() {
    let (_env, client, _, _, _, seller, _) = setup_test();

    let result = client.try_withdraw(&seller, &(STARTING_BALANCE + 1));
    assert_eq!(result, Err(Ok(Error::InsufficientFunds)));
    assert_eq!(client.balance_of(&seller), STARTING_BALANCE);
}

#[test]
fn test_transfer_moves_balance() {
    let (_env, client, _, _, _, seller, buyer) = setup_test();

    client.transfer(&seller, &buyer, &1_500_000_000);

    assert_eq!(client.balance_of(&seller), STARTING_BALANCE - 1_500_000_000);
    assert_eq!(client.balance_of(&buyer), STARTING_BALANCE + 1_500_000_000);
}

#[test]
fn test_failed_transfer_has_no_partial_effect() {
    let (_env, client, _, _, _, seller, buyer) = setup_test();

    let result = client.try_transfer(&seller, &buyer, &(STARTING_BALANCE + 1));
    assert_eq!(result, Err(Ok(Error::InsufficientFunds)));

    assert_eq!(client.balance_of(&seller), STARTING_BALANCE);
    assert_eq!(client.balance_of(&buyer), STARTING_BALANCE);
}

#[test]
fn test_stake_locks_liquid_balance() {
    let (_env, client, _, _, _, seller, _) = setup_test();

    client.stake(&seller, &1_000_000_000);

    assert_eq!(client.balance_of(&seller), STARTING_BALANCE - 1_000_000_000);
    let position = client.get_stake(&seller);
    assert_eq!(position.principal, 1_000_000_000);
    assert!(position.active);
}

#[test]
fn test_stake_more_than_liquid_rejected() {
    let (_env, client, _, _, _, seller, _) = setup_test();

    let result = client.try_stake(&seller, &(STARTING_BALANCE + 1));
    assert_eq!(result, Err(Ok(Error::InsufficientFunds)));
}

#[test]
fn test_second_stake_rejected() {
    let (_env, client, _, _, _, seller, _) = setup_test();

    client.stake(&seller, &1_000_000_000);
    let result = client.try_stake(&seller, &500_000_000);
    assert_eq!(result, Err(Ok(Error::AlreadyStaked)));
}

#[test]
fn test_unstake_without_position_rejected() {
    let (_env, client, _, _, _, _, buyer) = setup_test();

    let result = client.try_unstake(&buyer);
    assert_eq!(result, Err(Ok(Error::NoActiveStake)));
}

#[test]
fn test_rewards_accrue_over_one_day() {
    let (env, client, _, _, _, seller, _) = setup_test();

    client.stake(&seller, &1_000_000_000);
    advance_ledger(&env, 86_400);

    let expected = day_reward(1_000_000_000, 86_400);
    assert!(expected > 0);
    assert_eq!(client.pending_rewards(&seller), expected);

    let returned = client.unstake(&seller);
    assert_eq!(returned, 1_000_000_000 + expected);
    assert_eq!(client.balance_of(&seller), STARTING_BALANCE + expected);
}

#[test]
fn test_claim_resets_accrual() {
    let (env, client, _, _, _, seller, _) = setup_test();

    client.stake(&seller, &1_000_000_000);
    advance_ledger(&env, 86_400);

    let expected = day_reward(1_000_000_000, 86_400);
    assert_eq!(client.claim_rewards(&seller), expected);
    assert_eq!(
        client.balance_of(&seller),
        STARTING_BALANCE - 1_000_000_000 + expected
    );

    // Same timestamp: nothing further has accrued.
    assert_eq!(client.pending_rewards(&seller), 0);
    assert_eq!(client.claim_rewards(&seller), 0);
}

#[test]
fn test_claim_without_stake_rejected() {
    let (_env, client, _, _, _, _, buyer) = setup_test();

    let result = client.try_claim_rewards(&buyer);
    assert_eq!(result, Err(Ok(Error::NoActiveStake)));
}

#[test]
fn test_unstake_deactivates_position() {
    let (env, client, _, _, _, seller, _) = setup_test();

    client.stake(&seller, &1_000_000_000);
    advance_ledger(&env, 3_600);
    client.unstake(&seller);

    let position = client.get_stake(&seller);
    assert!(!position.active);

    let result = client.try_pending_rewards(&seller);
    assert_eq!(result, Err(Ok(Error::NoActiveStake)));
}

#[test]
fn test_restake_after_unstake() {
    let (env, client, _, _, _, seller, _) = setup_test();

    client.stake(&seller, &1_000_000_000);
    advance_ledger(&env, 3_600);
    client.unstake(&seller);

    client.stake(&seller, &2_000_000_000);
    let position = client.get_stake(&seller);
    assert_eq!(position.principal, 2_000_000_000);
    assert!(position.active);
}

#[test]
fn test_stake_claim_unstake_conserves_value() {
    let (env, client, _, _, _, seller, _) = setup_test();

    client.stake(&seller, &2_000_000_000);

    advance_ledger(&env, 3_600);
    let first = client.claim_rewards(&seller);
    assert_eq!(first, day_reward(2_000_000_000, 3_600));

    advance_ledger(&env, 7_200);
    let second_accrual = day_reward(2_000_000_000, 7_200);
    let returned = client.unstake(&seller);
    assert_eq!(returned, 2_000_000_000 + second_accrual);

    // Final liquid = initial − staked principal + principal + all rewards.
    assert_eq!(
        client.balance_of(&seller),
        STARTING_BALANCE + first + second_accrual
    );
}

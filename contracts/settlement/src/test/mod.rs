pub mod staking_test;

use soroban_sdk::{
    testutils::{Address as _, Ledger, LedgerInfo},
    token, Address, Env,
};
use tidemark_asset_registry::{
    AssetRef as RegistryAssetRef, AssetRegistry as RegistryContract,
    AssetRegistryClient as RegistryClient,
};

use crate::types::AssetRef;
use crate::{Settlement, SettlementClient};

pub const LISTING_FEE: i128 = 1_000_000;
pub const SALE_FEE_BPS: u32 = 250;
pub const REWARD_RATE_BPS: u32 = 1_000;
pub const STARTING_BALANCE: i128 = 5_000_000_000;

pub fn setup_test() -> (
    Env,
    SettlementClient<'static>,
    RegistryClient<'static>,
    token::StellarAssetClient<'static>,
    Address,
    Address,
    Address,
) {
    let env = Env::default();
    env.mock_all_auths();

    env.ledger().set(LedgerInfo {
        timestamp: 1000,
        protocol_version: 23,
        sequence_number: 1,
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });

    let registry_id = env.register(RegistryContract, ());
    let registry = RegistryClient::new(&env, &registry_id);

    let contract_id = env.register(Settlement, ());
    let client = SettlementClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let treasury = Address::generate(&env);
    let seller = Address::generate(&env);
    let buyer = Address::generate(&env);

    let token_admin = Address::generate(&env);
    let token_contract = env.register_stellar_asset_contract_v2(token_admin.clone());
    let token_sac = token::StellarAssetClient::new(&env, &token_contract.address());

    client.initialize(
        &admin,
        &treasury,
        &registry_id,
        &token_contract.address(),
        &LISTING_FEE,
        &SALE_FEE_BPS,
        &REWARD_RATE_BPS,
    );

    for account in [&seller, &buyer] {
        token_sac.mint(account, &STARTING_BALANCE);
        client.deposit(account, &STARTING_BALANCE);
    }

    (env, client, registry, token_sac, treasury, seller, buyer)
}

pub fn advance_ledger(env: &Env, seconds: u64) {
    env.ledger().set(LedgerInfo {
        timestamp: env.ledger().timestamp() + seconds,
        protocol_version: 23,
        sequence_number: env.ledger().sequence(),
        network_id: Default::default(),
        base_reserve: 10,
        min_temp_entry_ttl: 100,
        min_persistent_entry_ttl: 100,
        max_entry_ttl: 3110400,
    });
}

/// Generate an address holding `amount` in the custody ledger.
pub fn new_funded(
    env: &Env,
    client: &SettlementClient,
    token_sac: &token::StellarAssetClient,
    amount: i128,
) -> Address {
    let account = Address::generate(env);
    token_sac.mint(&account, &amount);
    client.deposit(&account, &amount);
    account
}

/// Mint asset `token_id` to `owner` and approve `operator` (normally the
/// settlement contract) to move it. Returns the settlement-side reference.
pub fn make_asset(
    registry: &RegistryClient,
    owner: &Address,
    operator: &Address,
    token_id: u64,
) -> AssetRef {
    let record = RegistryAssetRef {
        collection: 1,
        token_id,
    };
    registry.mint(owner, &record);
    registry.approve(owner, operator, &record);
    AssetRef {
        collection: 1,
        token_id,
    }
}

/// Registry-side reference for ownership assertions.
pub fn registry_asset(token_id: u64) -> RegistryAssetRef {
    RegistryAssetRef {
        collection: 1,
        token_id,
    }
}

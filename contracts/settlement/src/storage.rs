use soroban_sdk::{Address, Env, Vec};

use crate::types::{
    Account, Bid, Config, Listing, StorageKey, PERSISTENT_TTL_AMOUNT, PERSISTENT_TTL_THRESHOLD,
};

// ============================================================================
// INITIALIZATION STORAGE
// ============================================================================

/// Check if contract is initialized
pub fn is_initialized(e: &Env) -> bool {
    e.storage()
        .instance()
        .get::<_, bool>(&StorageKey::Initialized)
        .unwrap_or(false)
}

/// Mark contract as initialized
pub fn set_initialized(e: &Env) {
    e.storage().instance().set(&StorageKey::Initialized, &true);
}

// ============================================================================
// CONFIG STORAGE
// ============================================================================

/// Get protocol configuration
pub fn get_config(e: &Env) -> Option<Config> {
    let key = StorageKey::Config;
    let config = e.storage().persistent().get::<_, Config>(&key);
    if config.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    config
}

/// Set protocol configuration
pub fn set_config(e: &Env, config: &Config) {
    let key = StorageKey::Config;
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// ACCOUNT STORAGE
// ============================================================================

/// Get an account record. Absent records read as an empty account.
pub fn get_account(e: &Env, address: &Address) -> Account {
    let key = StorageKey::Account(address.clone());
    match e.storage().persistent().get::<_, Account>(&key) {
        Some(account) => {
            e.storage()
                .persistent()
                .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
            account
        }
        None => Account {
            liquid: 0,
            stake: None,
        },
    }
}

/// Set an account record
pub fn set_account(e: &Env, address: &Address, account: &Account) {
    let key = StorageKey::Account(address.clone());
    e.storage().persistent().set(&key, account);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

// ============================================================================
// LISTING STORAGE
// ============================================================================

/// Get listing by id
pub fn get_listing(e: &Env, listing_id: u64) -> Option<Listing> {
    let key = StorageKey::Listing(listing_id);
    let listing = e.storage().persistent().get::<_, Listing>(&key);
    if listing.is_some() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    listing
}

/// Set listing record
pub fn save_listing(e: &Env, listing: &Listing) {
    let key = StorageKey::Listing(listing.id);
    e.storage().persistent().set(&key, listing);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Assign the next listing id
pub fn next_listing_id(e: &Env) -> u64 {
    let key = StorageKey::ListingCounter;
    let id = e.storage().persistent().get::<_, u64>(&key).unwrap_or(0) + 1;
    e.storage().persistent().set(&key, &id);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    id
}

// ============================================================================
// REFUND STORAGE
// ============================================================================

/// Refundable balance owed to an outbid bidder for a listing
pub fn get_refund(e: &Env, listing_id: u64, bidder: &Address) -> i128 {
    let key = StorageKey::Refund(listing_id, bidder.clone());
    let amount = e.storage().persistent().get::<_, i128>(&key).unwrap_or(0);
    if amount > 0 {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    amount
}

/// Record a refundable balance
pub fn set_refund(e: &Env, listing_id: u64, bidder: &Address, amount: i128) {
    let key = StorageKey::Refund(listing_id, bidder.clone());
    e.storage().persistent().set(&key, &amount);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

/// Clear a refundable balance once paid out
pub fn remove_refund(e: &Env, listing_id: u64, bidder: &Address) {
    let key = StorageKey::Refund(listing_id, bidder.clone());
    e.storage().persistent().remove(&key);
}

// ============================================================================
// BID HISTORY STORAGE
// ============================================================================

/// Accepted bids for a listing, in arrival order
pub fn get_bid_history(e: &Env, listing_id: u64) -> Vec<Bid> {
    let key = StorageKey::BidHistory(listing_id);
    let history = e
        .storage()
        .persistent()
        .get::<_, Vec<Bid>>(&key)
        .unwrap_or(Vec::new(e));
    if !history.is_empty() {
        e.storage()
            .persistent()
            .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
    }
    history
}

/// Append an accepted bid to a listing's history
pub fn add_bid_to_history(e: &Env, listing_id: u64, bid: &Bid) {
    let key = StorageKey::BidHistory(listing_id);
    let mut history = get_bid_history(e, listing_id);
    history.push_back(bid.clone());
    e.storage().persistent().set(&key, &history);
    e.storage()
        .persistent()
        .extend_ttl(&key, PERSISTENT_TTL_THRESHOLD, PERSISTENT_TTL_AMOUNT);
}

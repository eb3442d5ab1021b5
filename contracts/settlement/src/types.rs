use soroban_sdk::{contracttype, Address};

/// Storage keys for the settlement contract.
#[contracttype]
#[derive(Clone)]
pub enum StorageKey {
    /// Initialization flag
    Initialized,
    /// Protocol configuration
    Config,
    /// Account record by address
    Account(Address),
    /// Listing record by id
    Listing(u64),
    /// Last assigned listing id
    ListingCounter,
    /// Refundable auction funds by (listing id, bidder)
    Refund(u64, Address),
    /// Bid history by listing id
    BidHistory(u64),
}

/// Protocol configuration
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Admin address with special privileges
    pub admin: Address,
    /// Destination of listing and sale fees
    pub treasury: Address,
    /// External registry holding asset ownership and approvals
    pub asset_registry: Address,
    /// Token backing deposits and withdrawals
    pub payment_token: Address,
    /// Flat fee charged on listing creation, forfeited on cancellation
    pub listing_fee: i128,
    /// Fee on auction settlement in basis points (100 = 1%)
    pub sale_fee_bps: u32,
    /// Annual staking reward rate in basis points
    pub reward_rate_bps: u32,
    /// Total number of listings ever created
    pub total_listings: u64,
    /// Timestamp of last configuration update
    pub updated_at: u64,
}

/// Fungible balance record. One per address; absent means zero.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Account {
    /// Freely spendable balance
    pub liquid: i128,
    /// Stake position, at most one per account
    pub stake: Option<StakePosition>,
}

/// A staked balance accruing time-based rewards.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakePosition {
    /// Amount locked out of the liquid balance
    pub principal: i128,
    /// Timestamp the position was opened
    pub start_time: u64,
    /// Timestamp rewards were last credited
    pub last_claim: u64,
    /// False once unstaked; the record is kept for history
    pub active: bool,
}

/// External identity of a unique asset. Opaque to the settlement engine,
/// which only compares it and passes it across the registry boundary.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub collection: u64,
    pub token_id: u64,
}

/// How a listing sells
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListingMode {
    /// Sold at the exact listed price
    Fixed = 0,
    /// English auction; listed price is the bid floor
    Auction = 1,
}

/// Listing lifecycle state
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ListingState {
    /// Asset is in custody and the listing accepts buyers/bids
    Active = 0,
    /// Settled; asset handed to the buyer or auction winner
    Sold = 1,
    /// Cancelled (by the seller, or a no-bid auction); asset returned
    Cancelled = 2,
}

/// An offer to sell one asset. The asset is held in contract custody while
/// the listing is active.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Listing {
    /// Unique listing identifier, assigned monotonically
    pub id: u64,
    /// Asset under custody
    pub asset: AssetRef,
    /// Address that listed the asset
    pub seller: Address,
    /// Sale price, or the starting price for auctions
    pub price: i128,
    /// Fixed sale or auction
    pub mode: ListingMode,
    /// Lifecycle state
    pub state: ListingState,
    /// Auction bookkeeping; `None` for fixed-price listings
    pub auction: Option<AuctionData>,
    /// Creation timestamp
    pub created_at: u64,
}

/// Live auction bookkeeping for an auction-mode listing.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionData {
    /// Currently winning bid amount, held in escrow
    pub highest_bid: i128,
    /// Currently winning bidder
    pub highest_bidder: Option<Address>,
    /// Bids are rejected from this timestamp on
    pub end_time: u64,
}

/// One accepted bid, kept for history.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Bid {
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Number of ledgers in a day (assuming ~5 second block time)
pub const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for persistent storage (90 days)
pub const PERSISTENT_TTL_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;

/// TTL threshold for persistent storage
pub const PERSISTENT_TTL_THRESHOLD: u32 = PERSISTENT_TTL_AMOUNT - DAY_IN_LEDGERS;

use soroban_sdk::{contractevent, Address};

/// Event emitted when the contract is initialized
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEventData {
    #[topic]
    pub admin: Address,
    pub listing_fee: i128,
    pub sale_fee_bps: u32,
    pub reward_rate_bps: u32,
}

/// Event emitted when tokens are deposited into the custody ledger
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositEventData {
    #[topic]
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when tokens leave the custody ledger
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawEventData {
    #[topic]
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted on an internal balance transfer
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransferEventData {
    #[topic]
    pub from: Address,
    #[topic]
    pub to: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when a stake position is opened
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct StakedEventData {
    #[topic]
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when accrued rewards are credited
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardsClaimedEventData {
    #[topic]
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when a stake position is closed
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct UnstakedEventData {
    #[topic]
    pub account: Address,
    pub principal: i128,
    pub rewards: i128,
    pub timestamp: u64,
}

/// Event emitted when a listing is created and the asset enters custody
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCreatedEventData {
    #[topic]
    pub listing_id: u64,
    #[topic]
    pub seller: Address,
    pub price: i128,
    pub timestamp: u64,
}

/// Event emitted when a listing is cancelled and the asset returned
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingCancelledEventData {
    #[topic]
    pub listing_id: u64,
    #[topic]
    pub seller: Address,
    pub timestamp: u64,
}

/// Event emitted when a bid is accepted
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BidPlacedEventData {
    #[topic]
    pub listing_id: u64,
    #[topic]
    pub bidder: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when an outbid amount is withdrawn
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RefundWithdrawnEventData {
    #[topic]
    pub listing_id: u64,
    #[topic]
    pub account: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when an auction is finalized. `winner` is `None` and
/// `amount` zero for a no-bid auction that was cancelled instead of settled.
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AuctionEndedEventData {
    #[topic]
    pub listing_id: u64,
    pub winner: Option<Address>,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when a fixed-price sale settles
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MarketSaleEventData {
    #[topic]
    pub listing_id: u64,
    #[topic]
    pub buyer: Address,
    pub amount: i128,
    pub timestamp: u64,
}

/// Event emitted when the admin changes the listing fee
#[contractevent]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListingFeeUpdatedEventData {
    #[topic]
    pub admin: Address,
    pub new_fee: i128,
}

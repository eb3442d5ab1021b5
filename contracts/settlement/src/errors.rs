use soroban_sdk::contracterror;

/// Error codes for the Tidemark settlement contract.
///
/// Every public operation is total: it returns either a success value or one
/// of these codes, and a failed invocation leaves all state untouched (the
/// host rolls back the ledger change of an erroring call).
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Contract has already been initialized
    AlreadyInitialized = 1,
    /// Contract has not been initialized
    NotInitialized = 2,
    /// Caller does not have required role or permissions
    Unauthorized = 3,
    /// Invalid input parameters provided
    InvalidInput = 4,
    /// Arithmetic overflow in amount calculation
    AmountOverflow = 5,
    /// Liquid balance is smaller than the requested amount
    InsufficientFunds = 6,
    /// Account already holds an active stake position
    AlreadyStaked = 7,
    /// Account has no active stake position
    NoActiveStake = 8,
    /// Supplied timestamp is earlier than the position's last claim
    ClockRegression = 9,
    /// Listing not found
    ListingNotFound = 10,
    /// Caller is not the listing's seller
    NotSeller = 11,
    /// Listing is no longer active
    NotActive = 12,
    /// Auction duration must be non-zero
    InvalidDuration = 13,
    /// Auction already holds a bid; cancellation must go through settlement
    AuctionHasBids = 14,
    /// Operation does not apply to this listing mode
    WrongMode = 15,
    /// Auction is not accepting bids
    AuctionNotActive = 16,
    /// Bid does not beat the current highest bid (or starting price)
    BidTooLow = 17,
    /// No refundable balance recorded for this account
    NothingToWithdraw = 18,
    /// Auction deadline has not passed yet
    AuctionNotEnded = 19,
    /// Auction has already been settled or cancelled
    AlreadySettled = 20,
    /// Payment does not match the listing price exactly
    PriceMismatch = 21,
    /// Account does not own the asset
    NotOwner = 22,
    /// Settlement contract is not approved to move the asset
    NotApproved = 23,
}

#![no_std]

mod errors;
mod events;
mod registry;
mod rewards;
mod storage;
mod types;

#[cfg(test)]
mod test;

use soroban_sdk::{contract, contractimpl, token, Address, Env, Vec};

use crate::errors::Error;
use crate::events::*;
use crate::registry::AssetRegistryClient;
use crate::storage::*;
use crate::types::*;

// ============================================================================
// Constants
// ============================================================================

/// Number of ledgers in a day (assuming ~5 second block time)
const DAY_IN_LEDGERS: u32 = 17280;

/// TTL extension amount for instance storage (30 days)
const INSTANCE_TTL_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;

/// TTL threshold before extending (29 days)
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_TTL_AMOUNT - DAY_IN_LEDGERS;

/// Maximum basis points for fee and reward rates
const MAX_RATE_BPS: u32 = 10000; // 100%

/// Page size ceiling for the active-listing projection
const MAX_PAGE_SIZE: u32 = 100;

// ============================================================================
// Contract
// ============================================================================

/// Tidemark settlement contract
///
/// A value-custody ledger fused with a marketplace settlement engine:
/// - fungible balances with deposit/withdraw/transfer
/// - time-based staking rewards
/// - fixed-price and auction listings over escrowed assets
/// - atomic exchange of currency and asset ownership on settlement
///
/// Asset ownership itself lives in an external registry contract consumed
/// through the [`registry`] client boundary. Every state transition commits
/// whole or not at all: an erroring invocation is rolled back by the host,
/// so no partial balance or escrow state is ever observable.
#[contract]
pub struct Settlement;

#[contractimpl]
impl Settlement {
    // ========================================================================
    // INITIALIZATION
    // ========================================================================

    /// Initialize the settlement contract.
    ///
    /// # Arguments
    /// * `admin` - Address with admin privileges
    /// * `treasury` - Destination of listing and sale fees
    /// * `asset_registry` - External ownership/approval registry
    /// * `payment_token` - Token backing deposits and withdrawals
    /// * `listing_fee` - Flat fee charged on listing creation
    /// * `sale_fee_bps` - Auction settlement fee in basis points
    /// * `reward_rate_bps` - Annual staking reward rate in basis points
    ///
    /// # Errors
    /// * `Error::AlreadyInitialized` - If the contract has already been initialized
    /// * `Error::InvalidInput` - If a rate exceeds 100% or the fee is negative
    pub fn initialize(
        e: &Env,
        admin: Address,
        treasury: Address,
        asset_registry: Address,
        payment_token: Address,
        listing_fee: i128,
        sale_fee_bps: u32,
        reward_rate_bps: u32,
    ) -> Result<(), Error> {
        admin.require_auth();

        if is_initialized(e) {
            return Err(Error::AlreadyInitialized);
        }

        if sale_fee_bps > MAX_RATE_BPS || reward_rate_bps > MAX_RATE_BPS || listing_fee < 0 {
            return Err(Error::InvalidInput);
        }

        let config = Config {
            admin: admin.clone(),
            treasury,
            asset_registry,
            payment_token,
            listing_fee,
            sale_fee_bps,
            reward_rate_bps,
            total_listings: 0,
            updated_at: e.ledger().timestamp(),
        };

        set_config(e, &config);
        set_initialized(e);
        Self::extend_instance_ttl(e);

        InitializedEventData {
            admin,
            listing_fee,
            sale_fee_bps,
            reward_rate_bps,
        }
        .publish(e);

        Ok(())
    }

    /// Get protocol configuration
    pub fn get_config(e: &Env) -> Result<Config, Error> {
        get_config(e).ok_or(Error::NotInitialized)
    }

    /// Update the flat listing fee (admin only)
    pub fn set_listing_fee(e: &Env, admin: Address, new_fee: i128) -> Result<(), Error> {
        admin.require_auth();

        let mut config = get_config(e).ok_or(Error::NotInitialized)?;

        if admin != config.admin {
            return Err(Error::Unauthorized);
        }

        if new_fee < 0 {
            return Err(Error::InvalidInput);
        }

        config.listing_fee = new_fee;
        config.updated_at = e.ledger().timestamp();
        set_config(e, &config);

        ListingFeeUpdatedEventData {
            admin: admin.clone(),
            new_fee,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // VALUE STORE
    // ========================================================================

    /// Deposit payment tokens into the custody ledger.
    ///
    /// Pulls `amount` of the configured token from `account` into the
    /// contract and credits the account's liquid balance.
    pub fn deposit(e: &Env, account: Address, amount: i128) -> Result<(), Error> {
        account.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if amount <= 0 {
            return Err(Error::InvalidInput);
        }

        let mut acct = get_account(e, &account);
        credit(&mut acct, amount)?;

        let token_client = token::Client::new(e, &config.payment_token);
        token_client.transfer(&account, &e.current_contract_address(), &amount);

        set_account(e, &account, &acct);

        DepositEventData {
            account: account.clone(),
            amount,
            timestamp: e.ledger().timestamp(),
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Withdraw payment tokens from the custody ledger.
    ///
    /// # Errors
    /// * `Error::InsufficientFunds` - If the liquid balance is below `amount`
    pub fn withdraw(e: &Env, account: Address, amount: i128) -> Result<(), Error> {
        account.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if amount <= 0 {
            return Err(Error::InvalidInput);
        }

        let mut acct = get_account(e, &account);
        debit(&mut acct, amount)?;

        let token_client = token::Client::new(e, &config.payment_token);
        token_client.transfer(&e.current_contract_address(), &account, &amount);

        set_account(e, &account, &acct);

        WithdrawEventData {
            account: account.clone(),
            amount,
            timestamp: e.ledger().timestamp(),
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Transfer liquid balance between two accounts. Debit and credit commit
    /// together; a failure on either side leaves both balances untouched.
    pub fn transfer(e: &Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        from.require_auth();

        if !is_initialized(e) {
            return Err(Error::NotInitialized);
        }

        if amount <= 0 {
            return Err(Error::InvalidInput);
        }

        let mut src = get_account(e, &from);
        debit(&mut src, amount)?;

        if from == to {
            credit(&mut src, amount)?;
            set_account(e, &from, &src);
        } else {
            let mut dst = get_account(e, &to);
            credit(&mut dst, amount)?;
            set_account(e, &from, &src);
            set_account(e, &to, &dst);
        }

        TransferEventData {
            from,
            to,
            amount,
            timestamp: e.ledger().timestamp(),
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Liquid balance of an account. Unknown accounts read as zero.
    pub fn balance_of(e: &Env, account: Address) -> i128 {
        get_account(e, &account).liquid
    }

    // ========================================================================
    // STAKING
    // ========================================================================

    /// Lock part of the liquid balance into a stake position.
    ///
    /// One position per account: staking again while a position is active
    /// fails with `Error::AlreadyStaked`.
    pub fn stake(e: &Env, account: Address, amount: i128) -> Result<(), Error> {
        account.require_auth();

        if !is_initialized(e) {
            return Err(Error::NotInitialized);
        }

        if amount <= 0 {
            return Err(Error::InvalidInput);
        }

        let mut acct = get_account(e, &account);

        if acct.stake.as_ref().is_some_and(|s| s.active) {
            return Err(Error::AlreadyStaked);
        }

        debit(&mut acct, amount)?;

        let now = e.ledger().timestamp();
        acct.stake = Some(StakePosition {
            principal: amount,
            start_time: now,
            last_claim: now,
            active: true,
        });
        set_account(e, &account, &acct);

        StakedEventData {
            account: account.clone(),
            amount,
            timestamp: now,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Credit accrued rewards to the liquid balance and reset the accrual
    /// clock. Calling twice at the same timestamp credits zero the second
    /// time. Returns the amount credited.
    pub fn claim_rewards(e: &Env, account: Address) -> Result<i128, Error> {
        account.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let mut acct = get_account(e, &account);
        let mut position = active_position(&acct)?;

        let now = e.ledger().timestamp();
        let amount = rewards::pending(position.principal, config.reward_rate_bps, position.last_claim, now)?;

        position.last_claim = now;
        acct.stake = Some(position);
        credit(&mut acct, amount)?;
        set_account(e, &account, &acct);

        RewardsClaimedEventData {
            account: account.clone(),
            amount,
            timestamp: now,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(amount)
    }

    /// Close the stake position: claim pending rewards, then return the
    /// principal to the liquid balance. Returns principal plus rewards.
    pub fn unstake(e: &Env, account: Address) -> Result<i128, Error> {
        account.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let mut acct = get_account(e, &account);
        let mut position = active_position(&acct)?;

        let now = e.ledger().timestamp();
        let accrued = rewards::pending(position.principal, config.reward_rate_bps, position.last_claim, now)?;
        let total = position
            .principal
            .checked_add(accrued)
            .ok_or(Error::AmountOverflow)?;

        credit(&mut acct, total)?;
        position.last_claim = now;
        position.active = false;
        let principal = position.principal;
        acct.stake = Some(position);
        set_account(e, &account, &acct);

        UnstakedEventData {
            account: account.clone(),
            principal,
            rewards: accrued,
            timestamp: now,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(total)
    }

    /// Stake position of an account, active or not.
    pub fn get_stake(e: &Env, account: Address) -> Result<StakePosition, Error> {
        get_account(e, &account).stake.ok_or(Error::NoActiveStake)
    }

    /// Rewards the active position would pay out if claimed now.
    pub fn pending_rewards(e: &Env, account: Address) -> Result<i128, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let acct = get_account(e, &account);
        let position = active_position(&acct)?;
        rewards::pending(
            position.principal,
            config.reward_rate_bps,
            position.last_claim,
            e.ledger().timestamp(),
        )
    }

    // ========================================================================
    // LISTINGS
    // ========================================================================

    /// List an asset for sale, moving it into contract custody.
    ///
    /// The seller must own the asset and have approved this contract in the
    /// registry. The flat listing fee moves from the seller's liquid balance
    /// to the treasury up front and is not returned on cancellation.
    ///
    /// # Arguments
    /// * `price` - Sale price, or the bid floor for auctions
    /// * `duration` - Auction length in seconds; ignored for fixed mode
    ///
    /// # Returns
    /// * The new listing id
    pub fn create_listing(
        e: &Env,
        seller: Address,
        asset: AssetRef,
        price: i128,
        mode: ListingMode,
        duration: u64,
    ) -> Result<u64, Error> {
        seller.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if price <= 0 {
            return Err(Error::InvalidInput);
        }

        let now = e.ledger().timestamp();
        let auction = match mode {
            ListingMode::Auction => {
                if duration == 0 {
                    return Err(Error::InvalidDuration);
                }
                let end_time = now.checked_add(duration).ok_or(Error::InvalidDuration)?;
                Some(AuctionData {
                    highest_bid: 0,
                    highest_bidder: None,
                    end_time,
                })
            }
            ListingMode::Fixed => None,
        };

        let contract = e.current_contract_address();
        let registry = AssetRegistryClient::new(e, &config.asset_registry);

        let owner = registry.owner_of(&asset).ok_or(Error::NotOwner)?;
        if owner != seller {
            return Err(Error::NotOwner);
        }
        if !registry.is_approved(&asset, &contract) {
            return Err(Error::NotApproved);
        }

        // Listing fee is charged up front and forfeited on cancellation.
        if config.listing_fee > 0 {
            let mut seller_acct = get_account(e, &seller);
            debit(&mut seller_acct, config.listing_fee)?;
            set_account(e, &seller, &seller_acct);

            let mut treasury_acct = get_account(e, &config.treasury);
            credit(&mut treasury_acct, config.listing_fee)?;
            set_account(e, &config.treasury, &treasury_acct);
        }

        // Custody moves before the listing goes live; a registry trap rolls
        // back the fee movement with the rest of the invocation.
        registry.transfer(&contract, &asset, &seller, &contract);

        let listing_id = next_listing_id(e);
        let listing = Listing {
            id: listing_id,
            asset,
            seller: seller.clone(),
            price,
            mode,
            state: ListingState::Active,
            auction,
            created_at: now,
        };
        save_listing(e, &listing);

        let mut updated_config = config;
        updated_config.total_listings += 1;
        updated_config.updated_at = now;
        set_config(e, &updated_config);

        ListingCreatedEventData {
            listing_id,
            seller,
            price,
            timestamp: now,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(listing_id)
    }

    /// Cancel an active listing and return the asset to the seller.
    ///
    /// An auction that already holds a bid cannot be cancelled; its escrow
    /// is only unwound through [`Settlement::end_auction`]. The listing fee
    /// is not refunded.
    pub fn cancel_listing(e: &Env, listing_id: u64, caller: Address) -> Result<(), Error> {
        caller.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let mut listing = get_listing(e, listing_id).ok_or(Error::ListingNotFound)?;

        if caller != listing.seller {
            return Err(Error::NotSeller);
        }
        if listing.state != ListingState::Active {
            return Err(Error::NotActive);
        }
        if let Some(auction) = &listing.auction {
            if auction.highest_bid > 0 {
                return Err(Error::AuctionHasBids);
            }
        }

        let contract = e.current_contract_address();
        let registry = AssetRegistryClient::new(e, &config.asset_registry);
        registry.transfer(&contract, &listing.asset, &contract, &listing.seller);

        listing.state = ListingState::Cancelled;
        save_listing(e, &listing);

        let now = e.ledger().timestamp();
        ListingCancelledEventData {
            listing_id,
            seller: listing.seller,
            timestamp: now,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Get a listing by id
    pub fn get_listing(e: &Env, listing_id: u64) -> Result<Listing, Error> {
        get_listing(e, listing_id).ok_or(Error::ListingNotFound)
    }

    /// Active listings in creation order (listing id ascending), paginated.
    ///
    /// Returns a copy-on-read snapshot: the returned page is decoupled from
    /// later mutations, and `offset` makes the projection restartable.
    ///
    /// # Arguments
    /// * `offset` - Number of active listings to skip
    /// * `limit` - Maximum results to return (1..=100)
    pub fn fetch_active_listings(e: &Env, offset: u32, limit: u32) -> Result<Vec<Listing>, Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;

        if limit == 0 || limit > MAX_PAGE_SIZE {
            return Err(Error::InvalidInput);
        }

        let mut results: Vec<Listing> = Vec::new(e);
        let mut seen = 0u32;

        for id in 1..=config.total_listings {
            if results.len() >= limit {
                break;
            }

            if let Some(listing) = get_listing(e, id) {
                if listing.state == ListingState::Active {
                    if seen >= offset {
                        results.push_back(listing);
                    }
                    seen += 1;
                }
            }
        }

        Ok(results)
    }

    // ========================================================================
    // AUCTION
    // ========================================================================

    /// Place a bid on an auction listing.
    ///
    /// The bid amount moves from the bidder's liquid balance into auction
    /// escrow. The previously winning bid, if any, becomes refundable to its
    /// bidder; it is never pushed back automatically, so a refund can never
    /// block acceptance of the new bid.
    ///
    /// # Errors
    /// * `Error::AuctionNotActive` - Listing left Active or the deadline passed
    /// * `Error::BidTooLow` - Bid is below the starting price or does not
    ///   strictly beat the current highest bid (ties lose)
    pub fn place_bid(e: &Env, listing_id: u64, bidder: Address, amount: i128) -> Result<(), Error> {
        bidder.require_auth();

        let mut listing = get_listing(e, listing_id).ok_or(Error::ListingNotFound)?;

        if listing.mode != ListingMode::Auction {
            return Err(Error::WrongMode);
        }
        let mut auction = listing.auction.clone().ok_or(Error::WrongMode)?;

        let now = e.ledger().timestamp();
        if listing.state != ListingState::Active || now >= auction.end_time {
            return Err(Error::AuctionNotActive);
        }

        if amount < listing.price || amount <= auction.highest_bid {
            return Err(Error::BidTooLow);
        }

        let mut bidder_acct = get_account(e, &bidder);
        debit(&mut bidder_acct, amount)?;

        if let Some(previous) = auction.highest_bidder.clone() {
            let owed = get_refund(e, listing_id, &previous)
                .checked_add(auction.highest_bid)
                .ok_or(Error::AmountOverflow)?;
            set_refund(e, listing_id, &previous, owed);
        }

        auction.highest_bid = amount;
        auction.highest_bidder = Some(bidder.clone());
        listing.auction = Some(auction);

        set_account(e, &bidder, &bidder_acct);
        save_listing(e, &listing);
        add_bid_to_history(
            e,
            listing_id,
            &Bid {
                bidder: bidder.clone(),
                amount,
                timestamp: now,
            },
        );

        BidPlacedEventData {
            listing_id,
            bidder,
            amount,
            timestamp: now,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    /// Pay out an outbid bidder's refundable balance. Returns the amount.
    pub fn withdraw_refund(e: &Env, listing_id: u64, account: Address) -> Result<i128, Error> {
        account.require_auth();

        if get_listing(e, listing_id).is_none() {
            return Err(Error::ListingNotFound);
        }

        let amount = get_refund(e, listing_id, &account);
        if amount == 0 {
            return Err(Error::NothingToWithdraw);
        }

        let mut acct = get_account(e, &account);
        credit(&mut acct, amount)?;
        remove_refund(e, listing_id, &account);
        set_account(e, &account, &acct);

        RefundWithdrawnEventData {
            listing_id,
            account,
            amount,
            timestamp: e.ledger().timestamp(),
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(amount)
    }

    /// Refundable balance an account holds against a listing's auction.
    pub fn get_refundable(e: &Env, listing_id: u64, account: Address) -> i128 {
        get_refund(e, listing_id, &account)
    }

    /// Accepted bids for a listing, in arrival order.
    pub fn get_bid_history(e: &Env, listing_id: u64) -> Result<Vec<Bid>, Error> {
        if get_listing(e, listing_id).is_none() {
            return Err(Error::ListingNotFound);
        }
        Ok(get_bid_history(e, listing_id))
    }

    /// Finalize an auction once its deadline has passed.
    ///
    /// Callable by anyone; the only guard is the deadline, so a seller
    /// cannot stall settlement. With no bids the asset returns to the seller
    /// and the listing is cancelled with no funds movement. Otherwise the
    /// asset goes to the winner, the sale fee to the treasury, and the
    /// remainder of the winning bid to the seller.
    ///
    /// # Errors
    /// * `Error::AuctionNotEnded` - Deadline has not passed
    /// * `Error::AlreadySettled` - Listing already left the Active state
    pub fn end_auction(e: &Env, listing_id: u64) -> Result<(), Error> {
        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let mut listing = get_listing(e, listing_id).ok_or(Error::ListingNotFound)?;

        if listing.mode != ListingMode::Auction {
            return Err(Error::WrongMode);
        }
        let auction = listing.auction.clone().ok_or(Error::WrongMode)?;

        if listing.state != ListingState::Active {
            return Err(Error::AlreadySettled);
        }

        let now = e.ledger().timestamp();
        if now < auction.end_time {
            return Err(Error::AuctionNotEnded);
        }

        let contract = e.current_contract_address();
        let registry = AssetRegistryClient::new(e, &config.asset_registry);

        let winner = match auction.highest_bidder.clone() {
            None => {
                // No bids: hand the asset back, no funds move.
                registry.transfer(&contract, &listing.asset, &contract, &listing.seller);
                listing.state = ListingState::Cancelled;
                save_listing(e, &listing);

                AuctionEndedEventData {
                    listing_id,
                    winner: None,
                    amount: 0,
                    timestamp: now,
                }
                .publish(e);

                Self::extend_instance_ttl(e);
                return Ok(());
            }
            Some(winner) => winner,
        };

        // Compute the full payout split before touching any state.
        let fee = sale_fee(auction.highest_bid, config.sale_fee_bps)?;
        let seller_amount = auction.highest_bid - fee;

        registry.transfer(&contract, &listing.asset, &contract, &winner);

        let mut seller_acct = get_account(e, &listing.seller);
        credit(&mut seller_acct, seller_amount)?;
        set_account(e, &listing.seller, &seller_acct);

        if fee > 0 {
            let mut treasury_acct = get_account(e, &config.treasury);
            credit(&mut treasury_acct, fee)?;
            set_account(e, &config.treasury, &treasury_acct);
        }

        listing.state = ListingState::Sold;
        save_listing(e, &listing);

        AuctionEndedEventData {
            listing_id,
            winner: Some(winner),
            amount: auction.highest_bid,
            timestamp: now,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // SETTLEMENT
    // ========================================================================

    /// Buy a fixed-price listing.
    ///
    /// Atomic bundle: the payment debits the buyer and credits the seller in
    /// full, the asset transfers to the buyer, and the listing leaves the
    /// active projection. The registry transfer is sequenced before the
    /// balance and status commits so a trap rolls the invocation back whole.
    ///
    /// # Errors
    /// * `Error::WrongMode` - Listing is an auction
    /// * `Error::PriceMismatch` - `payment` differs from the listing price
    /// * `Error::InsufficientFunds` - Buyer's liquid balance is short
    pub fn create_market_sale(
        e: &Env,
        listing_id: u64,
        buyer: Address,
        payment: i128,
    ) -> Result<(), Error> {
        buyer.require_auth();

        let config = get_config(e).ok_or(Error::NotInitialized)?;
        let mut listing = get_listing(e, listing_id).ok_or(Error::ListingNotFound)?;

        if listing.mode != ListingMode::Fixed {
            return Err(Error::WrongMode);
        }
        if listing.state != ListingState::Active {
            return Err(Error::NotActive);
        }
        if payment != listing.price {
            return Err(Error::PriceMismatch);
        }

        let mut buyer_acct = get_account(e, &buyer);
        debit(&mut buyer_acct, payment)?;

        let contract = e.current_contract_address();
        let registry = AssetRegistryClient::new(e, &config.asset_registry);
        registry.transfer(&contract, &listing.asset, &contract, &buyer);

        set_account(e, &buyer, &buyer_acct);

        let mut seller_acct = get_account(e, &listing.seller);
        credit(&mut seller_acct, payment)?;
        set_account(e, &listing.seller, &seller_acct);

        listing.state = ListingState::Sold;
        save_listing(e, &listing);

        let now = e.ledger().timestamp();
        MarketSaleEventData {
            listing_id,
            buyer,
            amount: payment,
            timestamp: now,
        }
        .publish(e);

        Self::extend_instance_ttl(e);
        Ok(())
    }

    // ========================================================================
    // INTERNAL HELPERS
    // ========================================================================

    /// Extend the TTL of instance storage.
    /// Called internally during state-changing operations.
    fn extend_instance_ttl(e: &Env) {
        e.storage()
            .instance()
            .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_AMOUNT);
    }
}

fn debit(account: &mut Account, amount: i128) -> Result<(), Error> {
    if account.liquid < amount {
        return Err(Error::InsufficientFunds);
    }
    account.liquid -= amount;
    Ok(())
}

fn credit(account: &mut Account, amount: i128) -> Result<(), Error> {
    account.liquid = account
        .liquid
        .checked_add(amount)
        .ok_or(Error::AmountOverflow)?;
    Ok(())
}

fn active_position(account: &Account) -> Result<StakePosition, Error> {
    match &account.stake {
        Some(position) if position.active => Ok(position.clone()),
        _ => Err(Error::NoActiveStake),
    }
}

fn sale_fee(amount: i128, fee_bps: u32) -> Result<i128, Error> {
    let fee = amount
        .checked_mul(fee_bps as i128)
        .ok_or(Error::AmountOverflow)?
        / rewards::BPS_DENOMINATOR;
    Ok(fee)
}

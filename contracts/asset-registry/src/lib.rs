#![no_std]

//! Minimal ownership and approval registry for unique assets.
//!
//! This is the external collaborator the settlement contract consumes at its
//! boundary: one owner record per asset, at most one approved operator per
//! asset. No metadata is stored; asset identity is the opaque
//! `(collection, token_id)` pair.

use soroban_sdk::{contract, contracterror, contractimpl, contracttype, Address, Env};

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Asset id has already been minted
    AlreadyMinted = 1,
    /// No owner record for this asset
    AssetNotFound = 2,
    /// Account is not the asset's owner
    NotOwner = 3,
    /// Spender is neither the owner nor an approved operator
    NotApproved = 4,
}

/// External identity of a unique asset: collection plus token id.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetRef {
    pub collection: u64,
    pub token_id: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Owner record by asset
    Owner(AssetRef),
    /// Approved operator by asset
    Approval(AssetRef),
}

#[contract]
pub struct AssetRegistry;

#[contractimpl]
impl AssetRegistry {
    /// Record `to` as the owner of a new asset.
    pub fn mint(env: Env, to: Address, asset: AssetRef) -> Result<(), Error> {
        if env
            .storage()
            .persistent()
            .has(&DataKey::Owner(asset.clone()))
        {
            return Err(Error::AlreadyMinted);
        }
        env.storage().persistent().set(&DataKey::Owner(asset), &to);
        Ok(())
    }

    /// Current owner of `asset`, if minted.
    pub fn owner_of(env: Env, asset: AssetRef) -> Option<Address> {
        env.storage().persistent().get(&DataKey::Owner(asset))
    }

    /// Grant `operator` the right to move `asset`. Only the current owner
    /// may approve; a new approval replaces the previous one.
    pub fn approve(env: Env, owner: Address, operator: Address, asset: AssetRef) -> Result<(), Error> {
        owner.require_auth();

        let current: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(asset.clone()))
            .ok_or(Error::AssetNotFound)?;
        if current != owner {
            return Err(Error::NotOwner);
        }

        env.storage()
            .persistent()
            .set(&DataKey::Approval(asset), &operator);
        Ok(())
    }

    /// Whether `operator` may move `asset` on the owner's behalf.
    pub fn is_approved(env: Env, asset: AssetRef, operator: Address) -> bool {
        env.storage()
            .persistent()
            .get::<_, Address>(&DataKey::Approval(asset))
            == Some(operator)
    }

    /// Move `asset` from `from` to `to`. `spender` must be `from` itself or
    /// the approved operator. The approval is cleared on transfer.
    pub fn transfer(
        env: Env,
        spender: Address,
        asset: AssetRef,
        from: Address,
        to: Address,
    ) -> Result<(), Error> {
        spender.require_auth();

        let owner: Address = env
            .storage()
            .persistent()
            .get(&DataKey::Owner(asset.clone()))
            .ok_or(Error::AssetNotFound)?;
        if owner != from {
            return Err(Error::NotOwner);
        }

        if spender != from {
            let approved = env
                .storage()
                .persistent()
                .get::<_, Address>(&DataKey::Approval(asset.clone()));
            if approved != Some(spender) {
                return Err(Error::NotApproved);
            }
        }

        env.storage()
            .persistent()
            .set(&DataKey::Owner(asset.clone()), &to);
        env.storage().persistent().remove(&DataKey::Approval(asset));
        Ok(())
    }
}

//! Asset registry boundary.
//!
//! Ownership and approval records for unique assets live in an external
//! registry contract. The settlement engine consumes it through this client
//! interface only: it checks the records it needs up front and moves custody
//! through `transfer`. A registry-side failure traps and rolls the whole
//! invocation back.

use soroban_sdk::{contractclient, Address, Env};

use crate::types::AssetRef;

#[contractclient(name = "AssetRegistryClient")]
pub trait AssetRegistry {
    /// Current owner of `asset`, if minted.
    fn owner_of(env: Env, asset: AssetRef) -> Option<Address>;

    /// Whether `operator` may move `asset` on the owner's behalf.
    fn is_approved(env: Env, asset: AssetRef, operator: Address) -> bool;

    /// Move `asset` from `from` to `to`. `spender` must be `from` itself or
    /// an operator approved for the asset.
    fn transfer(env: Env, spender: Address, asset: AssetRef, from: Address, to: Address);
}

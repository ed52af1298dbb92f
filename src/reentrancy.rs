//! Reentrancy guard for claim and recovery flows.
//!
//! Prevents intermediate re-entry into token-moving operations through a
//! cross-contract call. Uses a single process-wide lock in instance storage.
//! Soroban token transfers execute no recipient code, so this guard is
//! defense in depth on top of the mutate-then-transfer ordering in the claim
//! engine.

use crate::errors::VestingError;
use soroban_sdk::{symbol_short, Env};

/// Runs a closure with the claim/recovery reentrancy guard held.
///
/// At entry, if the lock is already set, returns `Err(OperationNotAllowed)`.
/// Otherwise sets the lock, runs `f`, then clears the lock on success or failure.
///
/// # Errors
/// * `VestingError::OperationNotAllowed` if called while another claim or
///   recovery operation is in progress (re-entrant call).
pub fn with_claim_guard<F, R>(env: &Env, f: F) -> Result<R, VestingError>
where
    F: FnOnce() -> Result<R, VestingError>,
{
    let key = symbol_short!("clm_lock");
    if env.storage().instance().get(&key).unwrap_or(false) {
        return Err(VestingError::OperationNotAllowed);
    }
    env.storage().instance().set(&key, &true);
    let result = f();
    env.storage().instance().set(&key, &false);
    result
}

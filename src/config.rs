//! Contract configuration: the vault token and the recovery account.
//!
//! Both are written during one-time initialization. The recovery account can
//! later be changed through an admin-gated setter; the token cannot (single
//! token for the life of the contract).

use crate::errors::VestingError;
use crate::events::emit_recovery_account_changed;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

/// Storage key for the vault token address
const TOKEN_KEY: Symbol = symbol_short!("token");

/// Storage key for the recovery account address
const RECOVERY_KEY: Symbol = symbol_short!("recovery");

pub struct ConfigStorage;

impl ConfigStorage {
    /// Set the vault token address. Only called from `initialize`.
    pub fn set_token(env: &Env, token: &Address) {
        env.storage().instance().set(&TOKEN_KEY, token);
    }

    /// Get the vault token address, if initialized.
    pub fn get_token(env: &Env) -> Option<Address> {
        env.storage().instance().get(&TOKEN_KEY)
    }

    /// Get the vault token address or fail with `NotInitialized`.
    pub fn require_token(env: &Env) -> Result<Address, VestingError> {
        Self::get_token(env).ok_or(VestingError::NotInitialized)
    }

    /// Set the recovery account.
    ///
    /// The contract's own address is rejected: swept funds must actually
    /// leave custody.
    ///
    /// # Errors
    /// * `VestingError::InvalidRecoveryAccount` if `account` is the contract itself
    pub fn set_recovery_account(env: &Env, account: &Address) -> Result<(), VestingError> {
        if *account == env.current_contract_address() {
            return Err(VestingError::InvalidRecoveryAccount);
        }
        env.storage().instance().set(&RECOVERY_KEY, account);
        emit_recovery_account_changed(env, account);
        Ok(())
    }

    /// Get the recovery account, if configured.
    pub fn get_recovery_account(env: &Env) -> Option<Address> {
        env.storage().instance().get(&RECOVERY_KEY)
    }

    /// Get the recovery account or fail with `NotInitialized`.
    pub fn require_recovery_account(env: &Env) -> Result<Address, VestingError> {
        Self::get_recovery_account(env).ok_or(VestingError::NotInitialized)
    }
}

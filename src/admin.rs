//! Admin role management for the vesting vault.
//!
//! A single admin address gates schedule creation, batch creation, recovery
//! sweeps, and recovery-account changes.
//!
//! # Security Model
//!
//! - Single admin address (MVP design)
//! - Admin can only be set once during initialization
//! - Admin can transfer role to another address
//! - All privileged operations require admin authorization
//!
//! # Storage Design
//!
//! Uses instance storage for:
//! - Admin address (single source of truth)
//! - Initialization flag (prevents re-initialization)

use crate::errors::VestingError;
use soroban_sdk::{symbol_short, Address, Env, Symbol};

/// Storage keys for admin management
pub const ADMIN_KEY: Symbol = symbol_short!("admin");
pub const ADMIN_INITIALIZED_KEY: Symbol = symbol_short!("adm_init");

/// Admin storage and management operations
pub struct AdminStorage;

impl AdminStorage {
    /// Initialize the admin address (can only be called once)
    ///
    /// # Returns
    /// * `Ok(())` if initialization succeeds
    /// * `Err(VestingError::OperationNotAllowed)` if admin was already set
    ///
    /// # Security
    /// - Auth is required by the `initialize` entrypoint
    /// - Can only be called once (checked via ADMIN_INITIALIZED_KEY)
    /// - Emits an admin-set event for transparency
    pub fn initialize(env: &Env, admin: &Address) -> Result<(), VestingError> {
        let is_initialized: bool = env
            .storage()
            .instance()
            .get(&ADMIN_INITIALIZED_KEY)
            .unwrap_or(false);

        if is_initialized {
            return Err(VestingError::OperationNotAllowed);
        }

        env.storage().instance().set(&ADMIN_KEY, admin);
        env.storage().instance().set(&ADMIN_INITIALIZED_KEY, &true);

        emit_admin_set(env, admin);

        Ok(())
    }

    /// Transfer the admin role to a new address
    ///
    /// # Returns
    /// * `Ok(())` if transfer succeeds
    /// * `Err(VestingError::NotAdmin)` if caller is not current admin
    ///
    /// # Security
    /// - Requires authorization from the current admin
    /// - Emits an admin-transferred event for the audit trail
    pub fn set_admin(
        env: &Env,
        current_admin: &Address,
        new_admin: &Address,
    ) -> Result<(), VestingError> {
        current_admin.require_auth();

        if !Self::is_admin(env, current_admin) {
            return Err(VestingError::NotAdmin);
        }

        env.storage().instance().set(&ADMIN_KEY, new_admin);

        emit_admin_transferred(env, current_admin, new_admin);

        Ok(())
    }

    /// Get the current admin address, if one has been initialized.
    pub fn get_admin(env: &Env) -> Option<Address> {
        env.storage().instance().get(&ADMIN_KEY)
    }

    /// Check if an address is the admin.
    pub fn is_admin(env: &Env, address: &Address) -> bool {
        if let Some(admin) = Self::get_admin(env) {
            admin == *address
        } else {
            false
        }
    }

    /// Require that an address is the admin (authorization helper)
    ///
    /// # Usage
    /// Use this helper in functions that require admin privileges:
    /// ```ignore
    /// AdminStorage::require_admin(&env, &caller)?;
    /// ```
    pub fn require_admin(env: &Env, address: &Address) -> Result<(), VestingError> {
        if !Self::is_admin(env, address) {
            return Err(VestingError::NotAdmin);
        }
        Ok(())
    }
}

/// Emit event when admin is first initialized
fn emit_admin_set(env: &Env, admin: &Address) {
    env.events().publish(
        (symbol_short!("adm_set"),),
        (admin.clone(), env.ledger().timestamp()),
    );
}

/// Emit event when admin role is transferred
fn emit_admin_transferred(env: &Env, old_admin: &Address, new_admin: &Address) {
    env.events().publish(
        (symbol_short!("adm_trf"),),
        (
            old_admin.clone(),
            new_admin.clone(),
            env.ledger().timestamp(),
        ),
    );
}

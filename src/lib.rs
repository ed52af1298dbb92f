#![no_std]
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};

mod admin;
mod config;
pub mod errors;
mod events;
mod payments;
mod recovery;
mod reentrancy;
pub mod schedule;
mod vesting;

#[cfg(test)]
mod test_claim;

use admin::AdminStorage;
use config::ConfigStorage;
use errors::VestingError;
use recovery::Recovery;
use reentrancy::with_claim_guard;
use schedule::{ScheduleStorage, VestingSchedule};
use vesting::Vesting;

#[contract]
pub struct VestingVaultContract;

#[contractimpl]
impl VestingVaultContract {
    // ============================================================================
    // Admin & Configuration Functions
    // ============================================================================

    /// Initialize the vault with its admin, vault token, and recovery
    /// account (one-time setup).
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        recovery_account: Address,
    ) -> Result<(), VestingError> {
        admin.require_auth();
        AdminStorage::initialize(&env, &admin)?;
        ConfigStorage::set_token(&env, &token);
        ConfigStorage::set_recovery_account(&env, &recovery_account)
    }

    /// Check if the vault has been initialized
    pub fn is_initialized(env: Env) -> bool {
        AdminStorage::get_admin(&env).is_some()
    }

    /// Transfer the admin role to a new address
    pub fn set_admin(
        env: Env,
        current_admin: Address,
        new_admin: Address,
    ) -> Result<(), VestingError> {
        AdminStorage::set_admin(&env, &current_admin, &new_admin)
    }

    /// Get the current admin address
    pub fn get_admin(env: Env) -> Option<Address> {
        AdminStorage::get_admin(&env)
    }

    /// Change the account that receives recovery sweeps (admin only)
    pub fn set_recovery_account(
        env: Env,
        admin: Address,
        account: Address,
    ) -> Result<(), VestingError> {
        admin.require_auth();
        AdminStorage::require_admin(&env, &admin)?;
        ConfigStorage::set_recovery_account(&env, &account)
    }

    /// Get the configured recovery account
    pub fn get_recovery_account(env: Env) -> Option<Address> {
        ConfigStorage::get_recovery_account(&env)
    }

    /// Get the vault token address
    pub fn get_token(env: Env) -> Option<Address> {
        ConfigStorage::get_token(&env)
    }

    // ============================================================================
    // Schedule Creation Functions
    // ============================================================================

    /// Create a vesting schedule for a beneficiary (admin only).
    ///
    /// Locks `total_amount` of the vault token in the contract.
    /// `upfront_percent` of it unlocks immediately; the rest unlocks
    /// linearly between `cliff_time` and `ramp_end`. Returns the index of
    /// the new schedule in the beneficiary's list.
    pub fn create_schedule(
        env: Env,
        admin: Address,
        beneficiary: Address,
        total_amount: i128,
        upfront_percent: u32,
        cliff_time: u64,
        ramp_end: u64,
    ) -> Result<u32, VestingError> {
        Vesting::create_schedule(
            &env,
            &admin,
            &beneficiary,
            total_amount,
            upfront_percent,
            cliff_time,
            ramp_end,
        )
    }

    /// Create vesting schedules for many beneficiaries at once (admin only).
    ///
    /// Inputs are parallel vectors of equal length. The batch is
    /// all-or-nothing: one invalid entry aborts the whole call with no
    /// schedule created and no tokens moved.
    pub fn create_schedule_batch(
        env: Env,
        admin: Address,
        beneficiaries: Vec<Address>,
        amounts: Vec<i128>,
        upfront_percents: Vec<u32>,
        cliff_times: Vec<u64>,
        ramp_ends: Vec<u64>,
    ) -> Result<Vec<u32>, VestingError> {
        Vesting::create_schedule_batch(
            &env,
            &admin,
            &beneficiaries,
            &amounts,
            &upfront_percents,
            &cliff_times,
            &ramp_ends,
        )
    }

    // ============================================================================
    // Claim Functions
    // ============================================================================

    /// Claim all currently unlocked tokens across the caller's schedules.
    /// Returns the total paid out.
    pub fn claim(env: Env, beneficiary: Address) -> Result<i128, VestingError> {
        with_claim_guard(&env, || Vesting::claim(&env, &beneficiary))
    }

    /// Preview what `claim` would pay out right now, without mutating
    /// anything. Returns 0 for beneficiaries with no schedules.
    pub fn claimable(env: Env, beneficiary: Address) -> Result<i128, VestingError> {
        Vesting::claimable(&env, &beneficiary)
    }

    // ============================================================================
    // Recovery Functions
    // ============================================================================

    /// Sweep a beneficiary's entire unclaimed balance to the recovery
    /// account (admin only). Deletes all of their schedules; irreversible.
    pub fn recover(env: Env, admin: Address, beneficiary: Address) -> Result<i128, VestingError> {
        with_claim_guard(&env, || Recovery::recover(&env, &admin, &beneficiary))
    }

    // ============================================================================
    // Query Functions
    // ============================================================================

    /// All schedules of a beneficiary, in creation order
    pub fn get_schedules(env: Env, beneficiary: Address) -> Vec<VestingSchedule> {
        ScheduleStorage::get(&env, &beneficiary)
    }

    /// A single schedule by index
    pub fn get_schedule(
        env: Env,
        beneficiary: Address,
        index: u32,
    ) -> Result<VestingSchedule, VestingError> {
        ScheduleStorage::get(&env, &beneficiary)
            .get(index)
            .ok_or(VestingError::ScheduleNotFound)
    }

    /// Number of schedules a beneficiary has
    pub fn get_schedule_count(env: Env, beneficiary: Address) -> u32 {
        ScheduleStorage::get(&env, &beneficiary).len()
    }
}

//! Administrative recovery sweep.
//!
//! Redirects a beneficiary's entire unclaimed balance (locked and unlocked
//! alike) to the configured recovery account and deletes their schedule
//! list. Irreversible: claim history for the beneficiary is destroyed.

use soroban_sdk::{Address, Env};

use crate::admin::AdminStorage;
use crate::config::ConfigStorage;
use crate::errors::VestingError;
use crate::events::emit_recovered;
use crate::payments::transfer_out;
use crate::schedule::ScheduleStorage;

pub struct Recovery;

impl Recovery {
    /// Sweep all unclaimed tokens of `beneficiary` to the recovery account.
    /// Returns the amount recovered.
    ///
    /// The schedule list is deleted before anything else happens, so a
    /// re-entrant claim cannot observe stale, still-claimable schedules.
    ///
    /// # Errors
    /// * `NotAdmin` if the caller is not the admin
    /// * `NoSchedules` if the beneficiary has none
    /// * `NothingToWithdraw` if everything was already claimed
    pub fn recover(
        env: &Env,
        admin: &Address,
        beneficiary: &Address,
    ) -> Result<i128, VestingError> {
        admin.require_auth();
        AdminStorage::require_admin(env, admin)?;

        let schedules = ScheduleStorage::get(env, beneficiary);
        if schedules.is_empty() {
            return Err(VestingError::NoSchedules);
        }

        let mut total_unclaimed: i128 = 0;
        for schedule in schedules.iter() {
            total_unclaimed = total_unclaimed
                .checked_add(schedule.unclaimed())
                .ok_or(VestingError::MathOverflow)?;
        }

        // Delete first: no claim can see these schedules again.
        ScheduleStorage::remove(env, beneficiary);

        if total_unclaimed == 0 {
            return Err(VestingError::NothingToWithdraw);
        }

        let token = ConfigStorage::require_token(env)?;
        let recovery_account = ConfigStorage::require_recovery_account(env)?;
        transfer_out(env, &token, &recovery_account, total_unclaimed);

        emit_recovered(env, beneficiary, &recovery_account, total_unclaimed);

        Ok(total_unclaimed)
    }
}

//! Schedule creation and the claim engine.
//!
//! Schedules lock tokens in the contract and release them as "upfront portion
//! at creation, then linear between cliff and ramp end". A beneficiary claims
//! across all of their schedules at once; bookkeeping is written to storage
//! before the payout transfer leaves the contract.

use soroban_sdk::{Address, Env, Vec};

use crate::admin::AdminStorage;
use crate::config::ConfigStorage;
use crate::errors::VestingError;
use crate::events::{emit_batch_created, emit_claimed, emit_schedule_created};
use crate::payments::{transfer_into, transfer_out};
use crate::schedule::{ScheduleStorage, VestingSchedule, MAX_SCHEDULES_PER_BENEFICIARY};

pub struct Vesting;

impl Vesting {
    /// Create a new vesting schedule for a beneficiary.
    ///
    /// Transfers `total_amount` of the vault token from the admin into
    /// contract custody, then appends the schedule to the beneficiary's
    /// list. Returns the index of the new schedule.
    ///
    /// `upfront_percent` of the total (floored) unlocks immediately; the
    /// rest unlocks linearly between `cliff_time` and `ramp_end`.
    ///
    /// # Errors
    /// * `NotAdmin` if the caller is not the admin
    /// * `InvalidBeneficiary` if the beneficiary is the contract itself
    /// * `InvalidAmount` if `total_amount <= 0`
    /// * `InvalidPercent` if `upfront_percent > 100`
    /// * `InvalidTimeline` if `cliff_time >= ramp_end`
    /// * `ScheduleLimitExceeded` at the per-beneficiary cap
    ///
    /// # Security
    /// - Requires admin authorization
    /// - Custody transfer precedes the append; a failed transfer aborts
    ///   before any schedule is recorded
    pub fn create_schedule(
        env: &Env,
        admin: &Address,
        beneficiary: &Address,
        total_amount: i128,
        upfront_percent: u32,
        cliff_time: u64,
        ramp_end: u64,
    ) -> Result<u32, VestingError> {
        admin.require_auth();
        AdminStorage::require_admin(env, admin)?;
        let token = ConfigStorage::require_token(env)?;

        let index = Self::append_schedule(
            env,
            admin,
            &token,
            beneficiary,
            total_amount,
            upfront_percent,
            cliff_time,
            ramp_end,
        )?;

        Ok(index)
    }

    /// Create schedules for many beneficiaries from parallel vectors.
    ///
    /// Per-entry validation is identical to `create_schedule`. Any failing
    /// entry errors the whole call, and the host rolls back every transfer
    /// and append already made, so the batch is all-or-nothing.
    ///
    /// # Errors
    /// * `LengthMismatch` if the input vectors differ in length
    /// * `EmptyBatch` if the vectors are empty
    /// * Everything `create_schedule` can fail with, per entry
    pub fn create_schedule_batch(
        env: &Env,
        admin: &Address,
        beneficiaries: &Vec<Address>,
        amounts: &Vec<i128>,
        upfront_percents: &Vec<u32>,
        cliff_times: &Vec<u64>,
        ramp_ends: &Vec<u64>,
    ) -> Result<Vec<u32>, VestingError> {
        admin.require_auth();
        AdminStorage::require_admin(env, admin)?;

        let len = beneficiaries.len();
        if amounts.len() != len
            || upfront_percents.len() != len
            || cliff_times.len() != len
            || ramp_ends.len() != len
        {
            return Err(VestingError::LengthMismatch);
        }
        if len == 0 {
            return Err(VestingError::EmptyBatch);
        }

        let token = ConfigStorage::require_token(env)?;
        let mut indexes = Vec::new(env);
        let mut total_committed: i128 = 0;

        for i in 0..len {
            let beneficiary = beneficiaries.get_unchecked(i);
            let amount = amounts.get_unchecked(i);

            let index = Self::append_schedule(
                env,
                admin,
                &token,
                &beneficiary,
                amount,
                upfront_percents.get_unchecked(i),
                cliff_times.get_unchecked(i),
                ramp_ends.get_unchecked(i),
            )?;

            total_committed = total_committed
                .checked_add(amount)
                .ok_or(VestingError::MathOverflow)?;
            indexes.push_back(index);
        }

        emit_batch_created(env, len, total_committed);

        Ok(indexes)
    }

    /// Validate, take custody, and append one schedule. Shared by the single
    /// and batch creation paths.
    #[allow(clippy::too_many_arguments)]
    fn append_schedule(
        env: &Env,
        admin: &Address,
        token: &Address,
        beneficiary: &Address,
        total_amount: i128,
        upfront_percent: u32,
        cliff_time: u64,
        ramp_end: u64,
    ) -> Result<u32, VestingError> {
        if *beneficiary == env.current_contract_address() {
            return Err(VestingError::InvalidBeneficiary);
        }
        if total_amount <= 0 {
            return Err(VestingError::InvalidAmount);
        }
        if upfront_percent > 100 {
            return Err(VestingError::InvalidPercent);
        }
        if cliff_time >= ramp_end {
            return Err(VestingError::InvalidTimeline);
        }

        let mut schedules = ScheduleStorage::get(env, beneficiary);
        if schedules.len() >= MAX_SCHEDULES_PER_BENEFICIARY {
            return Err(VestingError::ScheduleLimitExceeded);
        }

        let upfront_amount = total_amount
            .checked_mul(upfront_percent as i128)
            .ok_or(VestingError::MathOverflow)?
            / 100;

        // Custody before commit: a failed transfer aborts the invocation
        // with nothing recorded.
        transfer_into(env, token, admin, total_amount);

        let index = schedules.len();
        schedules.push_back(VestingSchedule {
            total_amount,
            claimed_amount: 0,
            upfront_amount,
            cliff_time,
            ramp_start: cliff_time,
            ramp_end,
        });
        ScheduleStorage::store(env, beneficiary, &schedules);

        emit_schedule_created(
            env,
            beneficiary,
            index,
            total_amount,
            upfront_amount,
            cliff_time,
            ramp_end,
        );

        Ok(index)
    }

    /// Claim everything currently unlocked across all of the beneficiary's
    /// schedules. Returns the total paid out.
    ///
    /// All `claimed_amount` updates are written to storage before the payout
    /// transfer, so a re-entrant call observes post-claim state and finds
    /// nothing further to claim even without the guard in lib.rs.
    ///
    /// # Errors
    /// * `NoSchedules` if the beneficiary has no schedules at all
    /// * `NothingToClaim` if nothing has unlocked since the last claim
    ///
    /// # Security
    /// - Requires beneficiary authorization; each caller claims only their
    ///   own schedules
    pub fn claim(env: &Env, beneficiary: &Address) -> Result<i128, VestingError> {
        beneficiary.require_auth();

        let mut schedules = ScheduleStorage::get(env, beneficiary);
        if schedules.is_empty() {
            return Err(VestingError::NoSchedules);
        }

        let now = env.ledger().timestamp();
        let mut total_paid: i128 = 0;

        for i in 0..schedules.len() {
            let mut schedule = schedules.get_unchecked(i);
            let due = schedule.claimable_at(now)?;
            if due > 0 {
                schedule.claimed_amount += due;
                schedules.set(i, schedule);
                total_paid = total_paid
                    .checked_add(due)
                    .ok_or(VestingError::MathOverflow)?;
            }
        }

        if total_paid == 0 {
            return Err(VestingError::NothingToClaim);
        }

        ScheduleStorage::store(env, beneficiary, &schedules);

        let token = ConfigStorage::require_token(env)?;
        transfer_out(env, &token, beneficiary, total_paid);

        emit_claimed(env, beneficiary, total_paid);

        Ok(total_paid)
    }

    /// Read-only counterpart of `claim`: the total currently unlocked but
    /// unclaimed across the beneficiary's schedules. Returns 0 for unknown
    /// beneficiaries.
    pub fn claimable(env: &Env, beneficiary: &Address) -> Result<i128, VestingError> {
        let schedules = ScheduleStorage::get(env, beneficiary);
        let now = env.ledger().timestamp();

        let mut total: i128 = 0;
        for schedule in schedules.iter() {
            total = total
                .checked_add(schedule.claimable_at(now)?)
                .ok_or(VestingError::MathOverflow)?;
        }
        Ok(total)
    }
}

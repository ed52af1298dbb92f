//! Vesting schedule records and per-beneficiary storage.
//!
//! Each beneficiary owns an append-only, insertion-ordered list of schedules.
//! Individual schedules are never removed; only the recovery sweep deletes a
//! beneficiary's whole list at once.

use crate::errors::VestingError;
use soroban_sdk::{contracttype, symbol_short, Address, Env, Symbol, Vec};

/// Hard cap on schedules per beneficiary, bounding the iteration cost of
/// claim and recovery.
pub const MAX_SCHEDULES_PER_BENEFICIARY: u32 = 100;

const SCHEDULES_KEY: Symbol = symbol_short!("vest");

/// One grant of tokens to one beneficiary with its own unlock timeline.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct VestingSchedule {
    /// Immutable total allocated to this schedule.
    pub total_amount: i128,
    /// Cumulative amount already paid out. Never exceeds `total_amount`.
    pub claimed_amount: i128,
    /// Portion unlocked immediately at creation.
    pub upfront_amount: i128,
    /// Before this timestamp only `upfront_amount` is obtainable.
    pub cliff_time: u64,
    /// Start of the linear-unlock interval. Equals `cliff_time`.
    pub ramp_start: u64,
    /// End of the linear-unlock interval; fully unlocked at or after this.
    pub ramp_end: u64,
}

impl VestingSchedule {
    /// Total amount unlocked at `now`, independent of what was claimed.
    ///
    /// Before the cliff only the upfront portion is unlocked. At or after
    /// `ramp_end` the full total is unlocked exactly, so the linear formula
    /// never leaves a rounding residue. Mid-ramp the locked portion accrues
    /// linearly with truncating division; the clamp to `total_amount` guards
    /// intermediate rounding.
    pub fn unlocked_at(&self, now: u64) -> Result<i128, VestingError> {
        if now < self.cliff_time {
            return Ok(self.upfront_amount);
        }
        if now >= self.ramp_end {
            return Ok(self.total_amount);
        }

        let linear_portion = self.total_amount - self.upfront_amount;
        let elapsed = (now - self.ramp_start) as i128;
        let duration = (self.ramp_end - self.ramp_start) as i128;
        let accrued = linear_portion
            .checked_mul(elapsed)
            .ok_or(VestingError::MathOverflow)?
            / duration;

        Ok((self.upfront_amount + accrued).min(self.total_amount))
    }

    /// Currently unlocked but unclaimed amount at `now`. Never negative,
    /// even if `claimed_amount` were somehow ahead of the unlock curve.
    pub fn claimable_at(&self, now: u64) -> Result<i128, VestingError> {
        let unlocked = self.unlocked_at(now)?;
        Ok((unlocked - self.claimed_amount).max(0))
    }

    /// Amount not yet paid out, unlocked or not.
    pub fn unclaimed(&self) -> i128 {
        self.total_amount - self.claimed_amount
    }
}

/// Persistent storage of beneficiary schedule lists.
pub struct ScheduleStorage;

impl ScheduleStorage {
    fn key(beneficiary: &Address) -> (Symbol, Address) {
        (SCHEDULES_KEY, beneficiary.clone())
    }

    /// All schedules of `beneficiary`, empty if none were ever created.
    pub fn get(env: &Env, beneficiary: &Address) -> Vec<VestingSchedule> {
        env.storage()
            .persistent()
            .get(&Self::key(beneficiary))
            .unwrap_or_else(|| Vec::new(env))
    }

    pub fn store(env: &Env, beneficiary: &Address, schedules: &Vec<VestingSchedule>) {
        env.storage()
            .persistent()
            .set(&Self::key(beneficiary), schedules);
    }

    /// Delete the beneficiary's entire schedule list. Recovery only.
    pub fn remove(env: &Env, beneficiary: &Address) {
        env.storage().persistent().remove(&Self::key(beneficiary));
    }
}

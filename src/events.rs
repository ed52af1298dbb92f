//! Contract event emission helpers.
//!
//! Events are consumed by off-chain observers and are not required for
//! correctness. Every state-changing operation emits one, carrying the
//! relevant identifiers, amounts, and the ledger timestamp.

use soroban_sdk::{symbol_short, Address, Env};

/// Emitted when a single vesting schedule is created.
pub fn emit_schedule_created(
    env: &Env,
    beneficiary: &Address,
    index: u32,
    total_amount: i128,
    upfront_amount: i128,
    cliff_time: u64,
    ramp_end: u64,
) {
    env.events().publish(
        (symbol_short!("vest_new"), beneficiary.clone()),
        (
            index,
            total_amount,
            upfront_amount,
            cliff_time,
            ramp_end,
            env.ledger().timestamp(),
        ),
    );
}

/// Emitted once per batch creation, after the per-schedule events.
pub fn emit_batch_created(env: &Env, count: u32, total_committed: i128) {
    env.events().publish(
        (symbol_short!("vest_bat"),),
        (count, total_committed, env.ledger().timestamp()),
    );
}

/// Emitted when a beneficiary claims unlocked tokens.
pub fn emit_claimed(env: &Env, beneficiary: &Address, total_paid: i128) {
    env.events().publish(
        (symbol_short!("vest_clm"), beneficiary.clone()),
        (total_paid, env.ledger().timestamp()),
    );
}

/// Emitted when the admin sweeps a beneficiary's unclaimed balance.
pub fn emit_recovered(
    env: &Env,
    beneficiary: &Address,
    recovery_account: &Address,
    amount: i128,
) {
    env.events().publish(
        (symbol_short!("vest_rcv"), beneficiary.clone()),
        (recovery_account.clone(), amount, env.ledger().timestamp()),
    );
}

/// Emitted when the recovery account is set or changed.
pub fn emit_recovery_account_changed(env: &Env, account: &Address) {
    env.events().publish(
        (symbol_short!("rcv_set"),),
        (account.clone(), env.ledger().timestamp()),
    );
}

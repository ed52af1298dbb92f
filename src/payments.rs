//! Token transfer plumbing.
//!
//! The vault holds a single token configured at initialization. Transfers go
//! through the standard token client; a failed transfer traps and aborts the
//! whole invocation, so no operation is ever partially applied.

use soroban_sdk::{token, Address, Env};

/// Move `amount` of `token_addr` from `from` into contract custody.
pub fn transfer_into(env: &Env, token_addr: &Address, from: &Address, amount: i128) {
    let contract = env.current_contract_address();
    token::Client::new(env, token_addr).transfer(from, &contract, &amount);
}

/// Pay `amount` of `token_addr` out of contract custody to `to`.
pub fn transfer_out(env: &Env, token_addr: &Address, to: &Address, amount: i128) {
    let contract = env.current_contract_address();
    token::Client::new(env, token_addr).transfer(&contract, to, &amount);
}

use soroban_sdk::{symbol_short, Address, Env, Symbol};

use crate::ledger::{PoolState, Position};

// ── Storage key constants ───────────────────────────────────────────────────

const INITIALIZED: Symbol = symbol_short!("INIT");
const TOKEN: Symbol = symbol_short!("TOKEN");
const POOL: Symbol = symbol_short!("POOL");

// Per-participant persistent storage uses tuple keys: (prefix, participant)
const POSITION: Symbol = symbol_short!("POS");

const INSTANCE_TTL_THRESHOLD: u32 = 5_184_000; // ~60 days
const INSTANCE_TTL_EXTEND_TO: u32 = 10_368_000; // ~120 days
const POSITION_TTL_THRESHOLD: u32 = 5_184_000;
const POSITION_TTL_EXTEND_TO: u32 = 10_368_000;

fn position_key(participant: &Address) -> (Symbol, Address) {
    (POSITION, participant.clone())
}

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

// ── Configuration ───────────────────────────────────────────────────────────

pub fn is_initialized(env: &Env) -> bool {
    env.storage().instance().has(&INITIALIZED)
}

pub fn set_initialized(env: &Env) {
    env.storage().instance().set(&INITIALIZED, &true);
}

pub fn set_token(env: &Env, token: &Address) {
    env.storage().instance().set(&TOKEN, token);
}

pub fn get_token(env: &Env) -> Option<Address> {
    env.storage().instance().get(&TOKEN)
}

// ── Ledger records ──────────────────────────────────────────────────────────

/// Load the pool aggregate. Absent means nothing has happened yet.
pub fn get_pool(env: &Env) -> PoolState {
    env.storage().instance().get(&POOL).unwrap_or_default()
}

pub fn set_pool(env: &Env, pool: &PoolState) {
    env.storage().instance().set(&POOL, pool);
    extend_instance_ttl(env);
}

/// Load a participant's position, defaulting to an empty one for addresses
/// that never deposited.
pub fn get_position(env: &Env, participant: &Address) -> Position {
    let key = position_key(participant);
    let position: Option<Position> = env.storage().persistent().get(&key);
    match position {
        Some(position) => {
            env.storage()
                .persistent()
                .extend_ttl(&key, POSITION_TTL_THRESHOLD, POSITION_TTL_EXTEND_TO);
            position
        }
        None => Position::default(),
    }
}

/// Persist a position. Zeroed positions are kept so the address stays known.
pub fn set_position(env: &Env, participant: &Address, position: &Position) {
    let key = position_key(participant);
    env.storage().persistent().set(&key, position);
    env.storage()
        .persistent()
        .extend_ttl(&key, POSITION_TTL_THRESHOLD, POSITION_TTL_EXTEND_TO);
}

/// Whether `participant` has ever held a position.
pub fn has_position(env: &Env, participant: &Address) -> bool {
    env.storage().persistent().has(&position_key(participant))
}

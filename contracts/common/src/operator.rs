use soroban_sdk::{symbol_short, Address, Env, Symbol};

const OPERATOR: Symbol = symbol_short!("OPERATOR");
const PENDING_OPERATOR: Symbol = symbol_short!("PEND_OPR");

const INSTANCE_TTL_THRESHOLD: u32 = 5_184_000; // ~60 days
const INSTANCE_TTL_EXTEND_TO: u32 = 10_368_000; // ~120 days

fn extend_instance_ttl(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

/// Records `operator` as the identity allowed to call operator-only functions.
pub fn set_operator(env: &Env, operator: &Address) {
    env.storage().instance().set(&OPERATOR, operator);
    extend_instance_ttl(env);
}

/// Returns the current operator, if one has been set.
pub fn get_operator(env: &Env) -> Option<Address> {
    env.storage().instance().get(&OPERATOR)
}

/// Returns whether `caller` is the current operator.
///
/// An unset operator matches nobody.
pub fn is_operator(env: &Env, caller: &Address) -> bool {
    match get_operator(env) {
        Some(operator) => operator == *caller,
        None => false,
    }
}

/// Stages `candidate` as the next operator. Overwrites any earlier proposal.
pub fn propose_operator(env: &Env, candidate: &Address) {
    env.storage().instance().set(&PENDING_OPERATOR, candidate);
    extend_instance_ttl(env);
}

/// Returns the staged operator, if a handover is in progress.
pub fn get_pending_operator(env: &Env) -> Option<Address> {
    env.storage().instance().get(&PENDING_OPERATOR)
}

/// Completes a handover started by [`propose_operator`].
///
/// Returns the previous operator on success, or `None` when `candidate` is
/// not the staged address (nothing is changed in that case).
pub fn accept_operator(env: &Env, candidate: &Address) -> Option<Address> {
    let pending = get_pending_operator(env)?;
    if pending != *candidate {
        return None;
    }

    let previous = get_operator(env)?;
    env.storage().instance().set(&OPERATOR, candidate);
    env.storage().instance().remove(&PENDING_OPERATOR);
    extend_instance_ttl(env);
    Some(previous)
}

/// Drops a staged handover, returning the address that had been proposed.
pub fn cancel_pending_operator(env: &Env) -> Option<Address> {
    let pending = get_pending_operator(env)?;
    env.storage().instance().remove(&PENDING_OPERATOR);
    Some(pending)
}

#[cfg(test)]
mod tests {
    extern crate std;
    use super::*;
    use soroban_sdk::{contract, testutils::Address as _};

    #[contract]
    pub struct Host;

    #[test]
    fn unset_operator_matches_nobody() {
        let env = Env::default();
        let host = env.register(Host, ());
        let anyone = Address::generate(&env);

        env.as_contract(&host, || {
            assert_eq!(get_operator(&env), None);
            assert!(!is_operator(&env, &anyone));
        });
    }

    #[test]
    fn handover_requires_the_staged_candidate() {
        let env = Env::default();
        let host = env.register(Host, ());
        let first = Address::generate(&env);
        let second = Address::generate(&env);
        let stranger = Address::generate(&env);

        env.as_contract(&host, || {
            set_operator(&env, &first);
            propose_operator(&env, &second);

            assert_eq!(accept_operator(&env, &stranger), None);
            assert!(is_operator(&env, &first));

            assert_eq!(accept_operator(&env, &second), Some(first.clone()));
            assert!(is_operator(&env, &second));
            assert!(!is_operator(&env, &first));
            assert_eq!(get_pending_operator(&env), None);
        });
    }

    #[test]
    fn cancel_clears_the_proposal() {
        let env = Env::default();
        let host = env.register(Host, ());
        let first = Address::generate(&env);
        let second = Address::generate(&env);

        env.as_contract(&host, || {
            set_operator(&env, &first);
            assert_eq!(cancel_pending_operator(&env), None);

            propose_operator(&env, &second);
            assert_eq!(cancel_pending_operator(&env), Some(second.clone()));
            assert_eq!(accept_operator(&env, &second), None);
            assert!(is_operator(&env, &first));
        });
    }
}

use soroban_sdk::{contracttype, symbol_short, Address, Env};

// ── Event payloads ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InitializedEvent {
    pub operator: Address,
    pub token: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositedEvent {
    pub participant: Address,
    pub amount: i128,
    pub principal: i128,
    pub total_deposited: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RewardInjectedEvent {
    pub operator: Address,
    pub amount: i128,
    pub total_deposited: i128,
    pub acc_reward_per_share: u128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawnEvent {
    pub participant: Address,
    /// Principal plus reward; what was transferred.
    pub amount: i128,
    pub principal: i128,
    pub reward: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OperatorTransferEvent {
    pub current: Address,
    pub candidate: Address,
}

// ── Publishers ──────────────────────────────────────────────────────────────

pub fn publish_initialized(env: &Env, operator: Address, token: Address) {
    env.events().publish(
        (symbol_short!("INIT"),),
        InitializedEvent { operator, token },
    );
}

pub fn publish_deposited(
    env: &Env,
    participant: Address,
    amount: i128,
    principal: i128,
    total_deposited: i128,
) {
    env.events().publish(
        (symbol_short!("DEPOSIT"), participant.clone()),
        DepositedEvent {
            participant,
            amount,
            principal,
            total_deposited,
        },
    );
}

pub fn publish_reward_injected(
    env: &Env,
    operator: Address,
    amount: i128,
    total_deposited: i128,
    acc_reward_per_share: u128,
) {
    env.events().publish(
        (symbol_short!("RWD_INJ"), operator.clone()),
        RewardInjectedEvent {
            operator,
            amount,
            total_deposited,
            acc_reward_per_share,
        },
    );
}

pub fn publish_withdrawn(
    env: &Env,
    participant: Address,
    amount: i128,
    principal: i128,
    reward: i128,
) {
    env.events().publish(
        (symbol_short!("WITHDRAW"), participant.clone()),
        WithdrawnEvent {
            participant,
            amount,
            principal,
            reward,
        },
    );
}

pub fn publish_operator_proposed(env: &Env, current: Address, candidate: Address) {
    env.events().publish(
        (symbol_short!("OPR_PROP"), current.clone()),
        OperatorTransferEvent { current, candidate },
    );
}

pub fn publish_operator_accepted(env: &Env, previous: Address, operator: Address) {
    env.events().publish(
        (symbol_short!("OPR_ACC"), operator.clone()),
        OperatorTransferEvent {
            current: previous,
            candidate: operator,
        },
    );
}

pub fn publish_operator_cancelled(env: &Env, current: Address, candidate: Address) {
    env.events().publish(
        (symbol_short!("OPR_CNCL"), current.clone()),
        OperatorTransferEvent { current, candidate },
    );
}

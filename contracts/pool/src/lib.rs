#![no_std]

pub mod events;
pub mod ledger;
pub mod rewards;
pub mod storage;

use common::operator;
use soroban_sdk::{contract, contractimpl, contracttype, log, token, Address, Env};

use ledger::PoolState;

// ── Contract errors ──────────────────────────────────────────────────────────

#[soroban_sdk::contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
#[repr(u32)]
pub enum ContractError {
    NotInitialized = 1,
    AlreadyInitialized = 2,
    Unauthorized = 3,
    ZeroAmount = 4,
    NoBalance = 5,
    EmptyPoolReward = 6,
    ArithmeticOverflow = 7,
    NoPendingOperator = 8,
    RewardTooSmall = 9,
}

// ── Public-facing types ──────────────────────────────────────────────────────

/// Snapshot of a participant's stake returned by `get_position`.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PositionInfo {
    pub principal: i128,
    pub pending_reward: i128,
}

// ── Contract ─────────────────────────────────────────────────────────────────

#[contract]
pub struct PoolLedgerContract;

#[contractimpl]
impl PoolLedgerContract {
    // ── Initialisation ──────────────────────────────────────────────────────

    /// Bootstrap the pool.
    ///
    /// * `operator` – the only identity allowed to inject rewards.
    /// * `token`    – SAC address of the asset deposited and paid out.
    pub fn initialize(env: Env, operator: Address, token: Address) -> Result<(), ContractError> {
        if storage::is_initialized(&env) {
            return Err(ContractError::AlreadyInitialized);
        }
        operator.require_auth();

        operator::set_operator(&env, &operator);
        storage::set_token(&env, &token);
        storage::set_pool(&env, &PoolState::default());
        storage::set_initialized(&env);

        events::publish_initialized(&env, operator, token);

        Ok(())
    }

    // ── Pool operations ─────────────────────────────────────────────────────

    /// Deposit `amount` pool tokens.
    ///
    /// The deposit only shares in rewards injected after this call.
    pub fn deposit(env: Env, participant: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();
        let units = to_units(amount)?;

        // 1. Run the engine on copies; nothing is written if it fails.
        let pool = storage::get_pool(&env);
        let position = storage::get_position(&env, &participant);
        let (pool, position) = pool.deposit(&position, units)?;
        let principal = to_tokens(position.principal)?;
        let total_deposited = to_tokens(pool.total_deposited)?;

        // 2. Pull tokens from the participant into the contract.
        Self::token_client(&env)?.transfer(&participant, &env.current_contract_address(), &amount);

        // 3. Commit.
        storage::set_position(&env, &participant, &position);
        storage::set_pool(&env, &pool);

        log!(&env, "deposit", participant, amount, total_deposited);
        events::publish_deposited(&env, participant, amount, principal, total_deposited);

        Ok(())
    }

    /// Distribute `amount` pool tokens across everyone currently deposited,
    /// pro rata to principal.
    ///
    /// Rejected with `EmptyPoolReward` when nobody is deposited, with
    /// `RewardTooSmall` when the amount would not move the per-share value,
    /// and with `ArithmeticOverflow` when the outstanding reward could no
    /// longer be settled.
    pub fn inject_reward(env: Env, operator: Address, amount: i128) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        operator.require_auth();
        Self::require_operator(&env, &operator)?;
        let units = to_units(amount)?;

        let pool = storage::get_pool(&env).inject_reward(units)?;
        let total_deposited = to_tokens(pool.total_deposited)?;

        Self::token_client(&env)?.transfer(&operator, &env.current_contract_address(), &amount);

        storage::set_pool(&env, &pool);

        log!(&env, "inject_reward", amount, pool.acc_reward_per_share);
        events::publish_reward_injected(
            &env,
            operator,
            amount,
            total_deposited,
            pool.acc_reward_per_share,
        );

        Ok(())
    }

    /// Withdraw the participant's whole position: principal plus every reward
    /// accrued while it was deposited. Returns the amount transferred.
    ///
    /// Fails with `NoBalance` if the participant has nothing deposited.
    pub fn withdraw(env: Env, participant: Address) -> Result<i128, ContractError> {
        Self::require_initialized(&env)?;
        participant.require_auth();

        let pool = storage::get_pool(&env);
        let position = storage::get_position(&env, &participant);
        let (pool, position, payout) = pool.withdraw(&position)?;
        let amount = to_tokens(payout.total()?)?;
        let principal = to_tokens(payout.principal)?;
        let reward = to_tokens(payout.reward)?;

        // Commit before transfer (checks-effects-interactions).
        storage::set_position(&env, &participant, &position);
        storage::set_pool(&env, &pool);

        Self::token_client(&env)?.transfer(&env.current_contract_address(), &participant, &amount);

        log!(&env, "withdraw", participant, amount, reward);
        events::publish_withdrawn(&env, participant, amount, principal, reward);

        Ok(amount)
    }

    // ── View functions ───────────────────────────────────────────────────────

    /// Return the participant's principal and what they would earn on top of
    /// it by withdrawing now.
    pub fn get_position(env: Env, participant: Address) -> Result<PositionInfo, ContractError> {
        let pool = storage::get_pool(&env);
        let position = storage::get_position(&env, &participant);

        Ok(PositionInfo {
            principal: to_tokens(position.principal)?,
            pending_reward: to_tokens(pool.pending_reward(&position)?)?,
        })
    }

    pub fn get_pending_reward(env: Env, participant: Address) -> Result<i128, ContractError> {
        let pool = storage::get_pool(&env);
        let position = storage::get_position(&env, &participant);
        to_tokens(pool.pending_reward(&position)?)
    }

    pub fn get_principal(env: Env, participant: Address) -> Result<i128, ContractError> {
        to_tokens(storage::get_position(&env, &participant).principal)
    }

    /// Return the sum of every participant's principal.
    pub fn get_total_deposited(env: Env) -> Result<i128, ContractError> {
        to_tokens(storage::get_pool(&env).total_deposited)
    }

    /// Return the raw pool aggregate, accumulator included.
    pub fn get_pool_state(env: Env) -> PoolState {
        storage::get_pool(&env)
    }

    /// Whether `participant` has ever deposited. Withdrawn positions stay known.
    pub fn has_position(env: Env, participant: Address) -> bool {
        storage::has_position(&env, &participant)
    }

    pub fn get_operator(env: Env) -> Result<Address, ContractError> {
        operator::get_operator(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        storage::get_token(&env).ok_or(ContractError::NotInitialized)
    }

    pub fn is_initialized(env: Env) -> bool {
        storage::is_initialized(&env)
    }

    /// Contract version
    pub fn version() -> u32 {
        1
    }

    // ── Operator transfer (two-step) ─────────────────────────────────────────

    /// Propose a new operator. Only the current operator can call this.
    /// The candidate must call `accept_operator` to complete the transfer.
    pub fn propose_operator(
        env: Env,
        current: Address,
        candidate: Address,
    ) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current.require_auth();
        Self::require_operator(&env, &current)?;

        operator::propose_operator(&env, &candidate);

        events::publish_operator_proposed(&env, current, candidate);

        Ok(())
    }

    /// Accept the pending operator transfer. Only the proposed candidate can
    /// call this.
    pub fn accept_operator(env: Env, candidate: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        candidate.require_auth();

        let pending =
            operator::get_pending_operator(&env).ok_or(ContractError::NoPendingOperator)?;
        if pending != candidate {
            return Err(ContractError::Unauthorized);
        }

        let previous =
            operator::accept_operator(&env, &candidate).ok_or(ContractError::NotInitialized)?;

        events::publish_operator_accepted(&env, previous, candidate);

        Ok(())
    }

    /// Cancel a pending operator transfer. Only the current operator can call
    /// this.
    pub fn cancel_operator_transfer(env: Env, current: Address) -> Result<(), ContractError> {
        Self::require_initialized(&env)?;
        current.require_auth();
        Self::require_operator(&env, &current)?;

        let candidate =
            operator::cancel_pending_operator(&env).ok_or(ContractError::NoPendingOperator)?;

        events::publish_operator_cancelled(&env, current, candidate);

        Ok(())
    }

    pub fn get_pending_operator(env: Env) -> Option<Address> {
        operator::get_pending_operator(&env)
    }

    // ── Internal helpers ─────────────────────────────────────────────────────

    fn require_initialized(env: &Env) -> Result<(), ContractError> {
        if !storage::is_initialized(env) {
            return Err(ContractError::NotInitialized);
        }
        Ok(())
    }

    fn require_operator(env: &Env, caller: &Address) -> Result<(), ContractError> {
        if !operator::is_operator(env, caller) {
            return Err(ContractError::Unauthorized);
        }
        Ok(())
    }

    fn token_client(env: &Env) -> Result<token::Client<'_>, ContractError> {
        let token = storage::get_token(env).ok_or(ContractError::NotInitialized)?;
        Ok(token::Client::new(env, &token))
    }
}

/// Token amounts arrive as `i128`; the ledger only deals in positive units.
fn to_units(amount: i128) -> Result<u128, ContractError> {
    if amount <= 0 {
        return Err(ContractError::ZeroAmount);
    }
    u128::try_from(amount).map_err(|_| ContractError::ZeroAmount)
}

fn to_tokens(units: u128) -> Result<i128, ContractError> {
    i128::try_from(units).map_err(|_| ContractError::ArithmeticOverflow)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

use soroban_sdk::contracttype;

use crate::rewards;
use crate::ContractError;

// ── Types ───────────────────────────────────────────────────────────────────

/// Aggregate state of the pool.
///
/// Every operation takes the current value by reference and hands back a
/// fresh one, so a failed call never leaves a half-applied record behind.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct PoolState {
    /// Sum of every participant's principal.
    pub total_deposited: u128,
    /// Cumulative reward per unit of principal, scaled by `PRECISION`.
    /// Never decreases.
    pub acc_reward_per_share: u128,
    /// Sum of every accepted reward injection.
    pub total_injected: u128,
    /// Sum of the reward portions paid out on withdrawal.
    pub total_paid: u128,
}

/// One participant's stake.
///
/// A position is created on first deposit and zeroed, not removed, on
/// withdrawal.
#[contracttype]
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Position {
    /// Deposited funds not yet withdrawn.
    pub principal: u128,
    /// Accumulator value already priced in at the last settlement.
    pub reward_debt: u128,
    /// Reward settled at earlier deposits, still scaled by `PRECISION`.
    pub accrued: u128,
}

/// What a withdrawal pays out.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Payout {
    pub principal: u128,
    pub reward: u128,
}

impl Payout {
    pub fn total(&self) -> Result<u128, ContractError> {
        self.principal
            .checked_add(self.reward)
            .ok_or(ContractError::ArithmeticOverflow)
    }
}

// ── Engine ──────────────────────────────────────────────────────────────────

impl PoolState {
    /// Add `amount` to `position`.
    ///
    /// Reward accrued on the existing principal is folded into `accrued`
    /// and the snapshot moves to the current accumulator, so the new funds
    /// claim nothing from injections that already happened.
    pub fn deposit(
        &self,
        position: &Position,
        amount: u128,
    ) -> Result<(PoolState, Position), ContractError> {
        if amount == 0 {
            return Err(ContractError::ZeroAmount);
        }

        let accrued = Self::settled(self.acc_reward_per_share, position)?;
        let principal = position
            .principal
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let total_deposited = self
            .total_deposited
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        let pool = PoolState {
            total_deposited,
            ..self.clone()
        };
        let position = Position {
            principal,
            reward_debt: self.acc_reward_per_share,
            accrued,
        };
        Ok((pool, position))
    }

    /// Credit `amount` to everyone currently in the pool, pro rata.
    ///
    /// O(1): only the accumulator moves. An empty pool has no recipients and
    /// the injection is rejected, as is one too small to move the per-share
    /// value at all.
    pub fn inject_reward(&self, amount: u128) -> Result<PoolState, ContractError> {
        if amount == 0 {
            return Err(ContractError::ZeroAmount);
        }
        if self.total_deposited == 0 {
            return Err(ContractError::EmptyPoolReward);
        }

        // Every position's scaled pending reward is bounded by the pool's
        // outstanding reward times PRECISION; refuse anything that would let
        // a later settlement overflow.
        let outstanding = self
            .undistributed()
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;
        if !rewards::settleable(outstanding) {
            return Err(ContractError::ArithmeticOverflow);
        }

        let acc_reward_per_share =
            rewards::accumulate(self.acc_reward_per_share, amount, self.total_deposited)
                .ok_or(ContractError::ArithmeticOverflow)?;
        if acc_reward_per_share == self.acc_reward_per_share {
            return Err(ContractError::RewardTooSmall);
        }
        let total_injected = self
            .total_injected
            .checked_add(amount)
            .ok_or(ContractError::ArithmeticOverflow)?;

        Ok(PoolState {
            acc_reward_per_share,
            total_injected,
            ..self.clone()
        })
    }

    /// Close out `position` entirely.
    ///
    /// The reward is truncated once, here, over everything accrued since the
    /// position was opened.
    pub fn withdraw(
        &self,
        position: &Position,
    ) -> Result<(PoolState, Position, Payout), ContractError> {
        if position.principal == 0 {
            return Err(ContractError::NoBalance);
        }

        let reward = self.pending_reward(position)?;
        let total_deposited = self
            .total_deposited
            .checked_sub(position.principal)
            .ok_or(ContractError::ArithmeticOverflow)?;
        let total_paid = self
            .total_paid
            .checked_add(reward)
            .ok_or(ContractError::ArithmeticOverflow)?;

        let pool = PoolState {
            total_deposited,
            total_paid,
            ..self.clone()
        };
        let payout = Payout {
            principal: position.principal,
            reward,
        };
        Ok((pool, Position::default(), payout))
    }

    /// Whole-unit reward `position` would receive if it withdrew now.
    pub fn pending_reward(&self, position: &Position) -> Result<u128, ContractError> {
        let scaled = Self::settled(self.acc_reward_per_share, position)?;
        Ok(rewards::truncate(scaled))
    }

    /// Reward the pool still holds: injected but not yet paid, dust included.
    pub fn undistributed(&self) -> u128 {
        self.total_injected.saturating_sub(self.total_paid)
    }

    fn settled(acc: u128, position: &Position) -> Result<u128, ContractError> {
        rewards::settle(position.principal, acc, position.reward_debt)
            .and_then(|fresh| position.accrued.checked_add(fresh))
            .ok_or(ContractError::ArithmeticOverflow)
    }
}

// ── Unit tests ──────────────────────────────────────────────────────────────

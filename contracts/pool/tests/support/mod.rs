//! Pure-engine model shared by the property tests.
#![allow(dead_code)]

use pool_ledger::ledger::{PoolState, Position};
use pool_ledger::ContractError;
use proptest_derive::Arbitrary;

pub const PARTICIPANTS: usize = 4;

#[derive(Clone, Debug, Arbitrary)]
pub enum Op {
    Deposit(
        #[proptest(strategy = "0usize..PARTICIPANTS")] usize,
        #[proptest(strategy = "1u128..1_000_000")] u128,
    ),
    Reward(#[proptest(strategy = "1u128..1_000_000")] u128),
    Withdraw(#[proptest(strategy = "0usize..PARTICIPANTS")] usize),
}

#[derive(Default)]
pub struct Book {
    pub pool: PoolState,
    pub positions: [Position; PARTICIPANTS],
    /// Everything that flowed into the pool: deposits and rewards.
    pub deposited: u128,
    /// Everything that flowed out on withdrawal.
    pub paid_out: u128,
}

impl Book {
    /// Run `op` against the engine. Returns the amount paid out, zero for
    /// anything but a withdrawal.
    pub fn apply(&mut self, op: &Op) -> Result<u128, ContractError> {
        match *op {
            Op::Deposit(who, amount) => {
                let (pool, position) = self.pool.deposit(&self.positions[who], amount)?;
                self.pool = pool;
                self.positions[who] = position;
                self.deposited += amount;
                Ok(0)
            }
            Op::Reward(amount) => {
                self.pool = self.pool.inject_reward(amount)?;
                self.deposited += amount;
                Ok(0)
            }
            Op::Withdraw(who) => {
                let (pool, position, payout) = self.pool.withdraw(&self.positions[who])?;
                self.pool = pool;
                self.positions[who] = position;
                let total = payout.total()?;
                self.paid_out += total;
                Ok(total)
            }
        }
    }

    pub fn principal_sum(&self) -> u128 {
        self.positions.iter().map(|p| p.principal).sum()
    }
}

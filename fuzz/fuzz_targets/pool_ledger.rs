#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use pool_ledger::{ContractError, PoolLedgerContract, PoolLedgerContractClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{token, Address, Env};

const PARTICIPANTS: usize = 3;
const FUNDS: i128 = 1_000_000_000_000;

#[derive(Arbitrary, Debug)]
enum Op {
    Deposit { who: u8, amount: u32 },
    Reward { amount: u32 },
    Withdraw { who: u8 },
}

fuzz_target!(|ops: Vec<Op>| {
    if ops.len() > 64 {
        return;
    }

    let env = Env::default();
    env.mock_all_auths();

    let issuer = Address::generate(&env);
    let sac = env.register_stellar_asset_contract_v2(issuer);
    let balance = token::Client::new(&env, &sac.address());
    let asset = token::StellarAssetClient::new(&env, &sac.address());

    let contract_id = env.register(PoolLedgerContract, ());
    let client = PoolLedgerContractClient::new(&env, &contract_id);

    let operator = Address::generate(&env);
    asset.mint(&operator, &FUNDS);
    client.initialize(&operator, &sac.address());

    let participants: Vec<Address> = (0..PARTICIPANTS)
        .map(|_| {
            let participant = Address::generate(&env);
            asset.mint(&participant, &FUNDS);
            participant
        })
        .collect();

    for op in ops {
        match op {
            Op::Deposit { who, amount } => {
                let participant = &participants[who as usize % PARTICIPANTS];
                let result = client.try_deposit(participant, &i128::from(amount));
                if amount == 0 {
                    assert_eq!(result, Err(Ok(ContractError::ZeroAmount)));
                }
            }
            Op::Reward { amount } => {
                let empty = client.get_total_deposited() == 0;
                let result = client.try_inject_reward(&operator, &i128::from(amount));
                if amount == 0 {
                    assert_eq!(result, Err(Ok(ContractError::ZeroAmount)));
                } else if empty {
                    assert_eq!(result, Err(Ok(ContractError::EmptyPoolReward)));
                } else {
                    assert!(result.is_ok());
                }
            }
            Op::Withdraw { who } => {
                let participant = &participants[who as usize % PARTICIPANTS];
                let principal = client.get_principal(participant);
                let pending = client.get_pending_reward(participant);
                match client.try_withdraw(participant) {
                    Ok(Ok(amount)) => assert_eq!(amount, principal + pending),
                    Err(Ok(err)) => {
                        assert_eq!(err, ContractError::NoBalance);
                        assert_eq!(principal, 0);
                    }
                    other => panic!("unexpected withdraw result: {:?}", other),
                }
            }
        }

        // Conservation: the pool holds every principal plus unpaid reward.
        let pool = client.get_pool_state();
        let principal_sum: i128 = participants.iter().map(|p| client.get_principal(p)).sum();
        assert_eq!(pool.total_deposited as i128, principal_sum);
        assert!(pool.total_paid <= pool.total_injected);
        assert_eq!(
            balance.balance(&contract_id),
            (pool.total_deposited + pool.undistributed()) as i128
        );
    }
});

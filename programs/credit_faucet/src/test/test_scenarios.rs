use anchor_lang::prelude::*;
use credit_ledger::error::CreditLedgerError;
use credit_ledger::state::{CreditBalance, LedgerState};
use std::collections::BTreeMap;
use crate::error::FaucetError;
use crate::state::{ClaimPhase, ClaimRecord, Distributor, FaucetParams};

const T0: i64 = 1_700_000_000;
const DAY: i64 = 86_400;

#[derive(Debug)]
enum ClaimFailure {
    Faucet(FaucetError),
    Ledger(CreditLedgerError),
}

/// Faucet and ledger state wired together the way request_claim runs them
/// inside one transaction: commit the claim, issue on the ledger, and discard
/// both if the ledger refuses.
struct World {
    owner: Pubkey,
    distributor_key: Pubkey,
    distributor: Distributor,
    records: BTreeMap<Pubkey, ClaimRecord>,
    ledger: LedgerState,
    balances: BTreeMap<Pubkey, CreditBalance>,
    claimed_events: Vec<(Pubkey, u64, i64)>,
    now: i64,
}

impl World {
    fn new(params: FaucetParams, supply_cap: u64) -> Self {
        let mut world = World::without_issuer(params, supply_cap);
        let (owner, distributor_key) = (world.owner, world.distributor_key);
        world.ledger.set_issuer(&owner, distributor_key).unwrap();
        world
    }

    /// Faucet whose distributor was never registered as the ledger's issuer
    fn without_issuer(params: FaucetParams, supply_cap: u64) -> Self {
        let owner = key(1);
        let ledger_key = key(2);
        let distributor_key = key(3);

        let ledger = LedgerState {
            owner,
            supply_cap,
            ..LedgerState::default()
        };

        let mut distributor = Distributor::default();
        distributor.configure(owner, ledger_key, 254, &params).unwrap();

        World {
            owner,
            distributor_key,
            distributor,
            records: BTreeMap::new(),
            ledger,
            balances: BTreeMap::new(),
            claimed_events: Vec::new(),
            now: T0,
        }
    }

    fn record(&self, who: Pubkey) -> ClaimRecord {
        self.records.get(&who).cloned().unwrap_or_default()
    }

    fn request_claim(&mut self, caller: Pubkey) -> core::result::Result<u64, ClaimFailure> {
        let distributor_before = self.distributor.clone();
        let mut record = self.record(caller);

        let amount = self
            .distributor
            .commit_claim(&caller, &mut record, self.now)
            .map_err(ClaimFailure::Faucet)?;
        let record_before = self.records.insert(caller, record.clone());

        let mut balance = self.balances.get(&caller).cloned().unwrap_or_default();
        match self.ledger.issue(&self.distributor_key, &mut balance, &caller, amount) {
            Ok(_) => {
                self.balances.insert(caller, balance);
                self.claimed_events.push((caller, amount, self.now));
                Ok(amount)
            }
            Err(err) => {
                self.distributor = distributor_before;
                match record_before {
                    Some(previous) => self.records.insert(caller, previous),
                    None => self.records.remove(&caller),
                };
                Err(ClaimFailure::Ledger(err))
            }
        }
    }

    fn can_claim(&self, who: Pubkey) -> bool {
        self.distributor
            .can_claim(&self.distributor_key, &self.ledger, &self.record(who), self.now)
    }

    fn balance_of(&self, who: Pubkey) -> u64 {
        self.balances.get(&who).map(|b| b.amount).unwrap_or(0)
    }

    fn advance(&mut self, seconds: i64) {
        self.now += seconds;
    }

    fn assert_invariants(&self) {
        for record in self.records.values() {
            assert!(record.total_claimed <= self.distributor.lifetime_cap);
        }
        assert!(self.ledger.total_supply <= self.ledger.supply_cap);
        let sum: u64 = self.balances.values().map(|b| b.amount).sum();
        assert_eq!(sum, self.ledger.total_supply);
    }
}

fn key(n: u8) -> Pubkey {
    Pubkey::new_from_array([n; 32])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference_world() -> World {
        World::new(FaucetParams::default(), 1_000_000)
    }

    #[test]
    fn test_first_claim() {
        let mut world = reference_world();
        let alice = key(10);

        assert!(world.can_claim(alice));

        let amount = world.request_claim(alice).unwrap();

        assert_eq!(amount, 10);
        assert_eq!(world.balance_of(alice), 10);
        assert_eq!(world.record(alice).total_claimed, 10);
        assert_eq!(world.distributor.time_until_next_claim(&world.record(alice), world.now), DAY);
        assert_eq!(world.claimed_events, vec![(alice, 10, T0)]);
        world.assert_invariants();
    }

    #[test]
    fn test_repeat_claim_during_cooldown() {
        let mut world = reference_world();
        let alice = key(10);
        world.request_claim(alice).unwrap();

        world.advance(DAY - 1);
        let result = world.request_claim(alice);

        assert!(matches!(result, Err(ClaimFailure::Faucet(FaucetError::CooldownActive))));
        assert_eq!(world.record(alice).total_claimed, 10);
        assert_eq!(world.record(alice).last_claim_at, T0);
        assert_eq!(world.balance_of(alice), 10);
        assert_eq!(world.claimed_events.len(), 1);
    }

    #[test]
    fn test_claims_until_lifetime_cap() {
        println!("=== Testing claims up to the lifetime cap ===");

        let mut world = reference_world();
        let alice = key(10);
        world.request_claim(alice).unwrap();

        for _ in 0..9 {
            world.advance(DAY);
            world.request_claim(alice).unwrap();
            world.assert_invariants();
        }

        let record = world.record(alice);
        assert_eq!(record.total_claimed, 100);
        assert_eq!(world.distributor.remaining_allowance(&record), 0);
        assert!(!world.can_claim(alice));

        world.advance(DAY);
        assert_eq!(world.distributor.claim_phase(&record, world.now), ClaimPhase::Exhausted);
        let result = world.request_claim(alice);
        assert!(matches!(
            result,
            Err(ClaimFailure::Faucet(FaucetError::LifetimeLimitReached))
        ));
        assert_eq!(world.balance_of(alice), 100);

        println!("Claims recorded: {}", world.claimed_events.len());
    }

    #[test]
    fn test_pause_gates_claims_without_touching_records() {
        let mut world = reference_world();
        let alice = key(10);
        let bob = key(11);
        world.request_claim(alice).unwrap();
        world.advance(DAY);
        let alice_before = world.record(alice);

        let owner = world.owner;
        world.distributor.set_paused(&owner, true).unwrap();

        assert!(!world.can_claim(alice));
        assert!(!world.can_claim(bob));
        assert!(matches!(
            world.request_claim(alice),
            Err(ClaimFailure::Faucet(FaucetError::FaucetPaused))
        ));
        assert!(matches!(
            world.request_claim(bob),
            Err(ClaimFailure::Faucet(FaucetError::FaucetPaused))
        ));
        assert_eq!(world.record(alice), alice_before);
        assert!(!world.records.contains_key(&bob));

        world.distributor.set_paused(&owner, false).unwrap();

        assert_eq!(world.record(alice), alice_before);
        assert!(world.can_claim(alice));
        assert!(world.can_claim(bob));
    }

    #[test]
    fn test_non_owner_admin_calls_are_unauthorized() {
        let mut world = reference_world();
        let mallory = key(66);

        let pause = world.distributor.set_paused(&mallory, true);
        assert!(matches!(pause, Err(FaucetError::Unauthorized)));
        assert!(!world.distributor.paused);

        let issuer = world.ledger.set_issuer(&mallory, mallory);
        assert!(matches!(issuer, Err(CreditLedgerError::Unauthorized)));
        assert_eq!(world.ledger.issuer, world.distributor_key);
        assert_eq!(world.ledger.total_supply, 0);
    }

    #[test]
    fn test_identities_are_isolated() {
        let mut world = reference_world();
        let alice = key(10);
        let bob = key(11);

        world.request_claim(alice).unwrap();
        world.advance(DAY / 2);

        // Alice cooling down does not affect Bob
        assert!(!world.can_claim(alice));
        assert!(world.can_claim(bob));
        world.request_claim(bob).unwrap();

        world.advance(DAY / 2);
        assert!(world.can_claim(alice));
        assert!(!world.can_claim(bob));

        assert_eq!(world.record(alice).last_claim_at, T0);
        assert_eq!(world.record(bob).last_claim_at, T0 + DAY / 2);
        assert_eq!(world.balance_of(alice), 10);
        assert_eq!(world.balance_of(bob), 10);
        world.assert_invariants();
    }

    #[test]
    fn test_ledger_cap_refusal_rolls_back_claim() {
        // Supply cap allows a single claim
        let mut world = World::new(FaucetParams::default(), 15);
        let alice = key(10);
        let bob = key(11);
        world.request_claim(alice).unwrap();

        let result = world.request_claim(bob);

        assert!(matches!(result, Err(ClaimFailure::Ledger(CreditLedgerError::CapExceeded))));
        assert!(!world.records.contains_key(&bob));
        assert_eq!(world.distributor.total_distributed, 10);
        assert_eq!(world.balance_of(bob), 0);
        assert_eq!(world.claimed_events.len(), 1);
        // The ledger would refuse Bob again, and the view says so
        assert!(world.distributor.check_claim(&world.record(bob), world.now).is_ok());
        assert!(!world.can_claim(bob));
        world.assert_invariants();
    }

    #[test]
    fn test_ledger_refusal_restores_existing_record() {
        let mut world = World::new(FaucetParams::default(), 15);
        let alice = key(10);
        world.request_claim(alice).unwrap();
        world.advance(DAY);
        let before = world.record(alice);

        let result = world.request_claim(alice);

        assert!(matches!(result, Err(ClaimFailure::Ledger(CreditLedgerError::CapExceeded))));
        assert_eq!(world.record(alice), before);
    }

    #[test]
    fn test_can_claim_is_idempotent() {
        let mut world = reference_world();
        let alice = key(10);
        world.request_claim(alice).unwrap();
        world.advance(DAY);

        let first = world.can_claim(alice);
        for _ in 0..5 {
            assert_eq!(world.can_claim(alice), first);
        }
        assert_eq!(world.record(alice).total_claimed, 10);
    }

    #[test]
    fn test_can_claim_agrees_with_request_claim() {
        let mut world = World::new(
            FaucetParams {
                claim_amount: 10,
                cooldown: 100,
                lifetime_cap: 45,
            },
            1_000,
        );
        let identities = [key(10), key(11), key(12)];
        let owner = world.owner;

        for step in 0..60i64 {
            let who = identities[(step % 3) as usize];
            if step % 17 == 16 {
                let paused = !world.distributor.paused;
                world.distributor.set_paused(&owner, paused).unwrap();
            }

            let predicted = world.can_claim(who);
            let before = world.record(who);
            let result = world.request_claim(who);
            assert_eq!(predicted, result.is_ok(), "step {}", step);

            let after = world.record(who);
            assert!(after.last_claim_at >= before.last_claim_at);
            assert!(after.total_claimed >= before.total_claimed);
            world.assert_invariants();

            world.advance(35);
        }
    }

    #[test]
    fn test_can_claim_false_when_distributor_is_not_issuer() {
        let mut world = World::without_issuer(FaucetParams::default(), 1_000_000);
        let alice = key(10);

        assert!(!world.can_claim(alice));
        let result = world.request_claim(alice);
        assert!(matches!(result, Err(ClaimFailure::Ledger(CreditLedgerError::Unauthorized))));
        assert!(!world.records.contains_key(&alice));
        assert_eq!(world.distributor.total_distributed, 0);

        let (owner, distributor_key) = (world.owner, world.distributor_key);
        world.ledger.set_issuer(&owner, distributor_key).unwrap();

        assert!(world.can_claim(alice));
        assert_eq!(world.request_claim(alice).unwrap(), 10);
        world.assert_invariants();
    }

    #[test]
    fn test_can_claim_agrees_with_request_claim_near_supply_cap() {
        // Room for exactly five claims of 10
        let mut world = World::new(
            FaucetParams {
                claim_amount: 10,
                cooldown: 100,
                lifetime_cap: 30,
            },
            55,
        );
        let identities = [key(10), key(11), key(12), key(13)];

        for step in 0..40i64 {
            let who = identities[(step % 4) as usize];

            let predicted = world.can_claim(who);
            let result = world.request_claim(who);
            assert_eq!(predicted, result.is_ok(), "step {}", step);
            world.assert_invariants();

            world.advance(30);
        }

        assert_eq!(world.ledger.total_supply, 50);
        assert_eq!(world.distributor.total_distributed, 50);
    }
}

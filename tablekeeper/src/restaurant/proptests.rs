//! Property-based tests for allocation and waitlist invariants.

use std::rc::Rc;

use super::{Restaurant, WaitlistPolicy};
use crate::reporter::NullReporter;
use crate::{Customer, RestaurantOptions};
use proptest::prelude::*;

const CUSTOMERS: usize = 6;

#[derive(Debug, Clone)]
enum Op {
    Reserve(usize),
    Release(u32),
    Drop(usize),
}

fn op(tables: u32) -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (0..CUSTOMERS).prop_map(Op::Reserve),
        2 => (0..=tables + 1).prop_map(Op::Release),
        1 => (0..CUSTOMERS).prop_map(Op::Drop),
    ]
}

fn scenario() -> impl Strategy<Value = (u32, Vec<Op>)> {
    (0u32..4).prop_flat_map(|tables| (Just(tables), prop::collection::vec(op(tables), 0..40)))
}

fn policy() -> impl Strategy<Value = WaitlistPolicy> {
    prop_oneof![Just(WaitlistPolicy::SkipStale), Just(WaitlistPolicy::HeadOnly)]
}

fn replay(policy: WaitlistPolicy, tables: u32, ops: &[Op]) -> Restaurant<NullReporter> {
    replay_holding(policy, tables, ops).0
}

/// Replays `ops` and also returns the handles still held by the caller.
fn replay_holding(
    policy: WaitlistPolicy,
    tables: u32,
    ops: &[Op],
) -> (Restaurant<NullReporter>, Vec<Rc<Customer>>) {
    let options = RestaurantOptions::new(tables).with_waitlist_policy(policy);
    let mut restaurant = Restaurant::with_options(options, NullReporter);
    let mut handles: Vec<Option<Rc<Customer>>> = (0..CUSTOMERS)
        .map(|i| Customer::shared(format!("c{i}")).ok())
        .collect();

    for op in ops {
        match *op {
            Op::Reserve(i) => {
                if let Some(customer) = &handles[i] {
                    restaurant.reserve_table(customer);
                }
            }
            Op::Release(n) => {
                let _ = restaurant.release_table(n);
            }
            Op::Drop(i) => handles[i] = None,
        }
    }
    (restaurant, handles.into_iter().flatten().collect())
}

proptest! {
    // Reserved tables and seatings are in one-to-one correspondence.
    #[test]
    fn seatings_match_reserved_tables(policy in policy(), (tables, ops) in scenario()) {
        let r = replay(policy, tables, &ops);
        let reserved = r.tables().iter().filter(|t| !t.is_available()).count();
        prop_assert_eq!(r.seatings().len(), reserved);
        for seating in r.seatings() {
            let table = r.table(seating.table().value());
            prop_assert!(table.is_some_and(|t| !t.is_available()));
        }
    }

    // Nobody is seated and waiting at once, and nobody waits twice.
    #[test]
    fn waiting_and_seated_are_disjoint(policy in policy(), (tables, ops) in scenario()) {
        let r = replay(policy, tables, &ops);
        let waiting = r.waiting_customers();
        for (index, customer) in waiting.iter().enumerate() {
            prop_assert!(!r.is_seated(customer));
            prop_assert!(waiting[index + 1..].iter().all(|c| !Rc::ptr_eq(c, customer)));
        }
    }

    // With stale entries skipped, a free table never coexists with a live waiter.
    #[test]
    fn free_table_implies_no_live_waiter((tables, ops) in scenario()) {
        let r = replay(WaitlistPolicy::SkipStale, tables, &ops);
        if r.available_count() > 0 {
            prop_assert!(r.waiting_customers().is_empty());
        }
    }

    // Whoever asks while a table is free gets one, waiting or not.
    #[test]
    fn free_table_always_seats_requester(
        policy in policy(),
        (tables, ops) in scenario(),
        pick in any::<prop::sample::Index>(),
    ) {
        let (mut r, held) = replay_holding(policy, tables, &ops);
        prop_assume!(r.available_count() > 0 && !held.is_empty());
        let customer = pick.get(&held);
        let was_seated = r.is_seated(customer);
        let available = r.available_count();

        prop_assert!(r.reserve_table(customer));
        prop_assert!(r.is_seated(customer));
        prop_assert!(!r.is_waiting(customer));
        let expected = if was_seated { available } else { available - 1 };
        prop_assert_eq!(r.available_count(), expected);
    }

    #[test]
    fn purge_leaves_only_live_entries(policy in policy(), (tables, ops) in scenario()) {
        let mut r = replay(policy, tables, &ops);
        let live = r.waiting_customers().len();
        let stale = r.waitlist_len() - live;
        prop_assert_eq!(r.purge_stale(), stale);
        prop_assert_eq!(r.waitlist_len(), live);
        prop_assert_eq!(r.snapshot().stale_entries, 0);
    }
}

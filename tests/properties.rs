//! Property-based tests for the reconciler.
//!
//! Random action sequences are applied the way the form applies them:
//! rejected actions are dropped and the session carries on. The invariants
//! below must hold after every step, in both modes.

use proptest::prelude::*;
use budget_setup::models::{CategoryList, Money, ReconcileMode, EXTRA_CATEGORY};
use budget_setup::services::{recompute_extra, reconcile, Action, BudgetState};

// =============================================================================
// Generators
// =============================================================================

/// One step of a session
#[derive(Debug, Clone)]
enum Step {
    Apply(Action),
    /// Delete the n-th row (modulo the row count) by its ID
    DeleteRow(usize),
}

fn arb_mode() -> impl Strategy<Value = ReconcileMode> {
    prop_oneof![Just(ReconcileMode::Strict), Just(ReconcileMode::Lenient)]
}

/// Mostly everyday amounts, with invalid and overflow-sized ones mixed in
fn arb_amount() -> impl Strategy<Value = Money> {
    prop_oneof![
        8 => (1i64..=200_000).prop_map(Money::from_cents),
        1 => (-1_000i64..=0).prop_map(Money::from_cents),
        1 => prop_oneof![
            Just(Money::from_cents(i64::MAX)),
            Just(Money::from_cents(i64::MAX / 2 + 1)),
            Just(Money::from_cents(i64::MAX - 1)),
        ],
    ]
}

/// A small pool so names collide and get overwritten
fn arb_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Food".to_string()),
        Just("Rent".to_string()),
        Just(" Rent ".to_string()),
        Just("Fun".to_string()),
        Just("rent".to_string()),
        Just(EXTRA_CATEGORY.to_string()),
        Just(String::new()),
        "[A-Z][a-z]{2,8}",
    ]
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        2 => arb_amount().prop_map(|a| Step::Apply(Action::SetTotal(a))),
        1 => arb_amount().prop_map(|a| Step::Apply(Action::LockBudget(a))),
        6 => (arb_name(), arb_amount())
            .prop_map(|(name, amount)| Step::Apply(Action::AddOrUpdate { name, amount })),
        1 => arb_name().prop_map(|n| Step::Apply(Action::DeleteNamed(n))),
        2 => any::<usize>().prop_map(Step::DeleteRow),
        1 => Just(Step::Apply(Action::Recompute)),
    ]
}

fn arb_steps() -> impl Strategy<Value = Vec<Step>> {
    proptest::collection::vec(arb_step(), 0..40)
}

// =============================================================================
// Helpers
// =============================================================================

fn to_action(state: &BudgetState, step: &Step) -> Option<Action> {
    match step {
        Step::Apply(action) => Some(action.clone()),
        Step::DeleteRow(n) => {
            let rows = state.categories.as_slice();
            if rows.is_empty() {
                None
            } else {
                Some(Action::Delete(rows[n % rows.len()].id))
            }
        }
    }
}

/// Apply every step, calling `check` with the state before and after
fn run(
    mode: ReconcileMode,
    steps: &[Step],
    mut check: impl FnMut(&BudgetState, &BudgetState),
) -> BudgetState {
    let mut state = BudgetState::new(mode);
    for step in steps {
        let Some(action) = to_action(&state, step) else {
            continue;
        };
        let next = match reconcile(&state, action) {
            Ok(next) => next,
            Err(_) => state.clone(),
        };
        check(&state, &next);
        state = next;
    }
    state
}

fn names(list: &CategoryList) -> Vec<String> {
    list.iter().map(|c| c.name.clone()).collect()
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// Names stay unique and `Extra`, when present, is the last row
    #[test]
    fn prop_unique_names_with_extra_last(mode in arb_mode(), steps in arb_steps()) {
        run(mode, &steps, |_, state| {
            let names = names(&state.categories);
            let mut deduped = names.clone();
            deduped.sort_unstable();
            deduped.dedup();
            assert_eq!(deduped.len(), names.len(), "duplicate names in {:?}", names);

            if let Some(pos) = names.iter().position(|n| n == EXTRA_CATEGORY) {
                assert_eq!(pos, names.len() - 1, "Extra not last in {:?}", names);
            }
        });
    }

    /// Surviving categories keep the order they were first added in
    #[test]
    fn prop_insertion_order_is_preserved(mode in arb_mode(), steps in arb_steps()) {
        let mut order: Vec<String> = Vec::new();
        run(mode, &steps, |_, state| {
            let current: Vec<String> = names(&state.categories)
                .into_iter()
                .filter(|n| n != EXTRA_CATEGORY)
                .collect();
            order.retain(|n| current.contains(n));
            for name in &current {
                if !order.contains(name) {
                    order.push(name.clone());
                }
            }
            assert_eq!(current, order);
        });
    }

    /// Recomputing `Extra` on a settled state changes nothing
    #[test]
    fn prop_recompute_is_idempotent(mode in arb_mode(), steps in arb_steps()) {
        run(mode, &steps, |_, state| {
            let once = recompute_extra(&state.categories, &state.budget, state.mode);
            let twice = recompute_extra(&once, &state.budget, state.mode);
            assert_eq!(once, twice);
            assert_eq!(once, state.categories);
        });
    }

    /// Strict allocations never exceed the budget and `Extra` fills the gap
    #[test]
    fn prop_strict_allocation_sums_to_budget(steps in arb_steps()) {
        run(ReconcileMode::Strict, &steps, |_, state| {
            let allocated = state.allocated();
            assert!(!allocated.is_negative());

            if !state.budget.is_set() {
                assert!(state.categories.extra().is_none());
                return;
            }

            assert!(allocated <= state.budget.amount);
            if state.budget.amount > allocated {
                assert_eq!(state.categories.total(), state.budget.amount);
            } else {
                assert!(state.categories.extra().is_none());
            }
        });
    }

    /// A locked budget never changes again
    #[test]
    fn prop_lock_is_one_way(mode in arb_mode(), steps in arb_steps()) {
        run(mode, &steps, |before, after| {
            if before.budget.locked {
                assert_eq!(before.budget, after.budget);
            }
        });
    }

    /// Every stored amount is positive and the list total never overflows
    #[test]
    fn prop_amounts_stay_positive_and_bounded(mode in arb_mode(), steps in arb_steps()) {
        run(mode, &steps, |_, state| {
            let mut total = Money::zero();
            for category in &state.categories {
                assert!(category.amount.is_positive(), "{} is not positive", category);
                total = total
                    .checked_add(category.amount)
                    .unwrap_or_else(|| panic!("total overflowed in {:?}", names(&state.categories)));
            }
        });
    }
}

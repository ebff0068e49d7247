//! End-to-end behavior of the reconciler through the public API

use budget_setup::display::table::{format_category_table, TableRow};
use budget_setup::models::{Money, ReconcileMode, TotalBudget, EXTRA_CATEGORY};
use budget_setup::services::{LockOutcome, Reconciler, Submission, SubmittedCategory};
use budget_setup::BudgetError;

fn units(n: i64) -> Money {
    Money::from_units(n)
}

fn strict(total: i64) -> Reconciler {
    let mut r = Reconciler::new(ReconcileMode::Strict);
    r.set_total_budget(units(total)).unwrap();
    r
}

fn entries(r: &Reconciler) -> Vec<(String, Money)> {
    r.categories()
        .iter()
        .map(|c| (c.name.clone(), c.amount))
        .collect()
}

#[test]
fn test_scenario_a_extra_appears_with_remainder() {
    let mut r = strict(500);
    r.add_or_update_category("Food", units(200)).unwrap();
    r.add_or_update_category("Rent", units(250)).unwrap();

    assert_eq!(
        entries(&r),
        vec![
            ("Food".to_string(), units(200)),
            ("Rent".to_string(), units(250)),
            (EXTRA_CATEGORY.to_string(), Money::from_cents(5000)),
        ]
    );
}

#[test]
fn test_scenario_b_ceiling_names_remaining_headroom() {
    let mut r = strict(500);
    r.add_or_update_category("Rent", units(400)).unwrap();
    r.add_or_update_category("Food", units(80)).unwrap();
    let before = r.state().clone();

    let err = r.add_or_update_category("Fun", units(30)).unwrap_err();
    assert_eq!(
        err,
        BudgetError::InsufficientBudget {
            amount: units(30),
            available: units(20),
        }
    );
    assert!(err.to_string().contains("Only $20.00 remaining."));
    // Rejected actions leave the state untouched
    assert_eq!(r.state(), &before);
}

#[test]
fn test_scenario_c_deleting_last_category_returns_everything_to_extra() {
    let mut r = strict(500);
    let food = r.add_or_update_category("Food", units(200)).unwrap();
    assert_eq!(
        entries(&r),
        vec![
            ("Food".to_string(), units(200)),
            (EXTRA_CATEGORY.to_string(), units(300)),
        ]
    );

    r.delete_category(food).unwrap();
    assert_eq!(entries(&r), vec![(EXTRA_CATEGORY.to_string(), units(500))]);
}

#[test]
fn test_scenario_d_second_lock_is_a_no_op() {
    let mut r = Reconciler::new(ReconcileMode::Strict);
    assert_eq!(r.lock_budget(units(400)).unwrap(), LockOutcome::Locked);
    assert_eq!(r.lock_budget(units(999)).unwrap(), LockOutcome::AlreadyLocked);

    assert_eq!(r.budget(), &TotalBudget { amount: units(400), locked: true });
    assert_eq!(r.set_total_budget(units(999)), Err(BudgetError::BudgetLocked));
}

#[test]
fn test_scenario_e_update_keeps_position() {
    let mut r = Reconciler::new(ReconcileMode::Strict);
    r.set_total_budget(units(1000)).unwrap();
    r.add_or_update_category("Food", units(300)).unwrap();
    r.add_or_update_category("Rent", units(200)).unwrap();
    r.add_or_update_category("Food", units(150)).unwrap();

    let names: Vec<_> = entries(&r).into_iter().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["Food", "Rent", EXTRA_CATEGORY]);
    assert_eq!(
        r.categories().find_by_name("Food").unwrap().amount,
        units(150)
    );
    assert_eq!(r.categories().iter().filter(|c| c.name == "Food").count(), 1);
}

#[test]
fn test_lenient_mode_has_no_ceiling_and_no_extra() {
    let mut r = Reconciler::new(ReconcileMode::Lenient);
    r.set_total_budget(units(100)).unwrap();
    r.add_or_update_category("Food", units(80)).unwrap();
    r.add_or_update_category("Rent", units(900)).unwrap();
    r.add_or_update_category(EXTRA_CATEGORY, units(5)).unwrap();

    assert_eq!(r.categories().len(), 3);
    assert_eq!(r.state().allocated(), units(985));

    // Extra is an ordinary entry here
    r.delete_category_named(EXTRA_CATEGORY).unwrap();
    assert_eq!(r.categories().len(), 2);
}

#[test]
fn test_table_projection_for_strict_session() {
    let mut r = strict(500);
    r.add_or_update_category("Food", units(200)).unwrap();
    let table = r.render_table();

    assert_eq!(table.rows.len(), 2);
    assert!(matches!(
        &table.rows[1],
        TableRow::Category { name, highlighted: true, .. } if name == EXTRA_CATEGORY
    ));
    assert_eq!(table.delete_targets().len(), 1);

    let text = format_category_table(&table, "$");
    assert!(text.contains("* Extra"));
    assert!(text.contains("(Auto)"));
    assert!(text.contains("$300.00"));
}

#[test]
fn test_submission_payload() {
    let mut r = strict(500);
    r.add_or_update_category("Food", Money::from_cents(12_050)).unwrap();

    let mut sink: Vec<Submission> = Vec::new();
    let submission = r.submit("500", &mut sink).unwrap();

    assert_eq!(sink.len(), 1);
    assert_eq!(submission.total_budget, "500");
    assert_eq!(
        submission.categories().unwrap(),
        vec![
            SubmittedCategory::new("Food", 120.5),
            SubmittedCategory::new(EXTRA_CATEGORY, 379.5),
        ]
    );

    let raw: serde_json::Value = serde_json::from_str(&submission.categories_json).unwrap();
    assert_eq!(raw[0]["category"], "Food");
    assert_eq!(raw[0]["amount"], 120.5);
}

#[test]
fn test_seeded_session_recomputes_extra() {
    let mut r = Reconciler::new(ReconcileMode::Strict);
    r.seed(&[
        SubmittedCategory::new("Food", 200.0),
        SubmittedCategory::new(EXTRA_CATEGORY, 999.0),
    ])
    .unwrap();
    assert!(r.categories().extra().is_none());

    r.set_total_budget(units(300)).unwrap();
    assert_eq!(r.categories().extra().unwrap().amount, units(100));
    assert_eq!(
        r.set_total_budget(units(150)),
        Err(BudgetError::BelowAllocated {
            total: units(150),
            allocated: units(200),
        })
    );
}

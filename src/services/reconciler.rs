//! Budget reconciler
//!
//! Keeps the category allocations consistent with the total budget. The core
//! is a pure transition function, [`reconcile`], that takes a state and an
//! action and returns the next state or a validation error. [`Reconciler`]
//! wraps a state for callers that want a mutable session object.
//!
//! In [`ReconcileMode::Strict`] the allocations may never exceed the total
//! budget and any unallocated remainder is held by the computed `Extra`
//! category. In [`ReconcileMode::Lenient`] both rules are switched off.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::display::table::{self, CategoryTable};
use crate::error::{BudgetError, BudgetResult};
use crate::models::category::CategoryValidationError;
use crate::models::{
    BudgetCategory, CategoryId, CategoryList, Money, ReconcileMode, TotalBudget, EXTRA_CATEGORY,
};

use super::submission::{FormSubmitter, SubmittedCategory, Submission};

/// Complete state of one budget-setup session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetState {
    pub mode: ReconcileMode,
    pub budget: TotalBudget,
    pub categories: CategoryList,
}

impl BudgetState {
    /// An empty session in the given mode
    pub fn new(mode: ReconcileMode) -> Self {
        Self {
            mode,
            budget: TotalBudget::default(),
            categories: CategoryList::new(),
        }
    }

    /// Sum of all allocations except `Extra`
    pub fn allocated(&self) -> Money {
        self.categories.allocated()
    }

    /// Budget left to allocate; zero while no budget is set
    pub fn remaining(&self) -> Money {
        if self.budget.is_set() {
            self.budget.amount - self.allocated()
        } else {
            Money::zero()
        }
    }
}

/// A state transition request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Change the total budget
    SetTotal(Money),
    /// Fix the total budget for the rest of the session
    LockBudget(Money),
    /// Allocate an amount to a category, replacing any previous allocation
    AddOrUpdate { name: String, amount: Money },
    /// Remove a category by identity
    Delete(CategoryId),
    /// Remove a category by name
    DeleteNamed(String),
    /// Recompute the derived `Extra` category
    Recompute,
}

/// Result of a lock request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LockOutcome {
    Locked,
    AlreadyLocked,
}

/// Apply an action to a state
///
/// The input state is never modified; on error nothing changes.
pub fn reconcile(state: &BudgetState, action: Action) -> BudgetResult<BudgetState> {
    let mut next = state.clone();

    match action {
        Action::SetTotal(amount) => {
            if state.budget.locked {
                return Err(BudgetError::BudgetLocked);
            }
            check_total(state, amount)?;
            next.budget.amount = amount;
        }

        Action::LockBudget(amount) => {
            if state.budget.locked {
                return Ok(next);
            }
            check_total(state, amount)?;
            next.budget = TotalBudget {
                amount,
                locked: true,
            };
        }

        Action::AddOrUpdate { name, amount } => {
            let name = name.trim();
            check_allocation(state, name, amount)?;
            next.categories.upsert(name, amount);
        }

        Action::Delete(id) => {
            let category = state
                .categories
                .get(id)
                .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;
            check_deletable(state, category)?;
            next.categories.remove(id);
        }

        Action::DeleteNamed(name) => {
            let category = state
                .categories
                .find_by_name(name.trim())
                .ok_or_else(|| BudgetError::category_not_found(name.trim()))?;
            check_deletable(state, category)?;
            next.categories.remove(category.id);
        }

        Action::Recompute => {}
    }

    next.categories = recompute_extra(&next.categories, &next.budget, next.mode);
    Ok(next)
}

/// Rebuild the `Extra` entry from the current allocations
///
/// Any existing `Extra` entry is dropped and, when a budget is set and at
/// least one cent is left over, a fresh one holding the remainder is
/// appended. Lenient mode returns the list unchanged.
pub fn recompute_extra(
    categories: &CategoryList,
    budget: &TotalBudget,
    mode: ReconcileMode,
) -> CategoryList {
    if !mode.is_strict() {
        return categories.clone();
    }

    let mut list = categories.clone();
    list.remove_extra();

    if budget.is_set() {
        let remaining = budget.amount - list.allocated();
        if remaining.is_positive() {
            list.insert(BudgetCategory::new(EXTRA_CATEGORY, remaining));
        }
    }

    // Keep the identity of an unchanged Extra entry stable across recomputes
    if let (Some(old), Some(new)) = (categories.extra(), list.extra()) {
        if old.amount == new.amount {
            let new_id = new.id;
            list.remove(new_id);
            list.insert(old.clone());
        }
    }

    list
}

fn check_total(state: &BudgetState, amount: Money) -> BudgetResult<()> {
    if !amount.is_positive() {
        return Err(BudgetError::InvalidTotal);
    }

    if state.mode.is_strict() {
        let allocated = state.allocated();
        if amount < allocated {
            return Err(BudgetError::BelowAllocated {
                total: amount,
                allocated,
            });
        }
    }

    Ok(())
}

fn check_allocation(state: &BudgetState, name: &str, amount: Money) -> BudgetResult<()> {
    BudgetCategory::new(name, amount)
        .validate()
        .map_err(|e| match e {
            CategoryValidationError::EmptyName => BudgetError::CategoryRequired,
            CategoryValidationError::NonPositiveAmount => BudgetError::InvalidAmount,
        })?;

    if state.mode.is_strict() && name == EXTRA_CATEGORY {
        return Err(BudgetError::ReservedCategory(name.to_string()));
    }

    let previous = state
        .categories
        .find_by_name(name)
        .map(|c| c.amount)
        .unwrap_or_default();

    // Strict mode derives Extra, so only the real allocations count there
    let base = if state.mode.is_strict() {
        state.allocated()
    } else {
        state.categories.total()
    };
    let committed = base - previous;
    let projected = committed
        .checked_add(amount)
        .ok_or(BudgetError::InvalidAmount)?;

    if state.mode.is_strict() && state.budget.is_set() && projected > state.budget.amount {
        return Err(BudgetError::InsufficientBudget {
            amount,
            available: state.budget.amount - committed,
        });
    }

    Ok(())
}

fn check_deletable(state: &BudgetState, category: &BudgetCategory) -> BudgetResult<()> {
    if state.mode.is_strict() && category.is_extra() {
        return Err(BudgetError::ReservedCategory(category.name.clone()));
    }
    Ok(())
}

/// A budget-setup session owning its [`BudgetState`]
#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    state: BudgetState,
}

impl Reconciler {
    /// Create an empty session
    pub fn new(mode: ReconcileMode) -> Self {
        Self {
            state: BudgetState::new(mode),
        }
    }

    /// Resume from an existing state
    pub fn from_state(state: BudgetState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &BudgetState {
        &self.state
    }

    pub fn mode(&self) -> ReconcileMode {
        self.state.mode
    }

    pub fn budget(&self) -> &TotalBudget {
        &self.state.budget
    }

    pub fn categories(&self) -> &CategoryList {
        &self.state.categories
    }

    /// Apply an action, replacing the state on success
    pub fn apply(&mut self, action: Action) -> BudgetResult<()> {
        debug!(?action, mode = %self.state.mode, "applying budget action");
        match reconcile(&self.state, action) {
            Ok(next) => {
                self.state = next;
                debug!(
                    budget = %self.state.budget,
                    allocated = %self.state.allocated(),
                    categories = self.state.categories.len(),
                    "budget state updated"
                );
                Ok(())
            }
            Err(e) => {
                info!(error = %e, "budget action rejected");
                Err(e)
            }
        }
    }

    /// Set the total budget
    pub fn set_total_budget(&mut self, amount: Money) -> BudgetResult<()> {
        self.apply(Action::SetTotal(amount))
    }

    /// Lock the total budget; a second lock is a no-op
    pub fn lock_budget(&mut self, amount: Money) -> BudgetResult<LockOutcome> {
        if self.state.budget.locked {
            debug!(budget = %self.state.budget, "budget already locked");
            return Ok(LockOutcome::AlreadyLocked);
        }
        self.apply(Action::LockBudget(amount))?;
        info!(amount = %amount, "total budget locked");
        Ok(LockOutcome::Locked)
    }

    /// Allocate an amount to a category, returning its ID
    pub fn add_or_update_category(&mut self, name: &str, amount: Money) -> BudgetResult<CategoryId> {
        self.apply(Action::AddOrUpdate {
            name: name.to_string(),
            amount,
        })?;
        self.state
            .categories
            .find_by_name(name.trim())
            .map(|c| c.id)
            .ok_or_else(|| BudgetError::category_not_found(name.trim()))
    }

    /// Remove a category by ID
    pub fn delete_category(&mut self, id: CategoryId) -> BudgetResult<BudgetCategory> {
        let removed = self
            .state
            .categories
            .get(id)
            .cloned()
            .ok_or_else(|| BudgetError::category_not_found(id.to_string()))?;
        self.apply(Action::Delete(id))?;
        Ok(removed)
    }

    /// Remove a category by name
    pub fn delete_category_named(&mut self, name: &str) -> BudgetResult<BudgetCategory> {
        let id = self
            .state
            .categories
            .find_by_name(name.trim())
            .map(|c| c.id)
            .ok_or_else(|| BudgetError::category_not_found(name.trim()))?;
        self.delete_category(id)
    }

    /// Recompute the derived `Extra` category
    pub fn recompute_extra(&mut self) {
        self.state.categories =
            recompute_extra(&self.state.categories, &self.state.budget, self.state.mode);
    }

    /// Project the current list into a table view
    pub fn render_table(&self) -> CategoryTable {
        table::project(&self.state.categories, self.state.mode)
    }

    /// Load previously submitted categories into an empty session
    ///
    /// In strict mode any `Extra` entry in the input is ignored since it is
    /// always derived.
    pub fn seed(&mut self, entries: &[SubmittedCategory]) -> BudgetResult<()> {
        let mut state = self.state.clone();
        for entry in entries {
            if state.mode.is_strict() && entry.category.trim() == EXTRA_CATEGORY {
                continue;
            }
            let amount = Money::from_decimal(entry.amount).ok_or(BudgetError::InvalidAmount)?;
            state = reconcile(
                &state,
                Action::AddOrUpdate {
                    name: entry.category.clone(),
                    amount,
                },
            )?;
        }
        info!(count = state.categories.len(), "seeded categories");
        self.state = state;
        Ok(())
    }

    /// Validate the session and build the submission payload
    ///
    /// `total_input` is the raw text of the total budget field. Unless the
    /// budget is locked the total is adopted first, so the payload always
    /// reflects the submitted figure.
    pub fn prepare_submission(&mut self, total_input: &str) -> BudgetResult<Submission> {
        let total_text = if self.state.budget.locked {
            format!("{:.2}", self.state.budget.amount.as_decimal())
        } else {
            let total = Money::parse(total_input).map_err(|_| BudgetError::InvalidTotal)?;
            if !total.is_positive() {
                return Err(BudgetError::InvalidTotal);
            }
            self.set_total_budget(total)?;
            total_input.trim().to_string()
        };

        if self.state.mode.is_strict() && self.state.budget.amount < self.state.allocated() {
            return Err(BudgetError::BelowAllocated {
                total: self.state.budget.amount,
                allocated: self.state.allocated(),
            });
        }

        Submission::new(&self.state.categories, total_text)
    }

    /// Validate, serialize and hand the session to a submitter
    pub fn submit(
        &mut self,
        total_input: &str,
        submitter: &mut dyn FormSubmitter,
    ) -> BudgetResult<Submission> {
        let submission = self.prepare_submission(total_input)?;
        submitter.submit(&submission)?;
        info!(
            categories = self.state.categories.len(),
            total = %self.state.budget.amount,
            "budget submitted"
        );
        Ok(submission)
    }
}

//! Budget category models
//!
//! A category is a named allocation of part of the total budget. Categories
//! live in an ordered list that keeps insertion order, except for the
//! reserved `Extra` entry which always sorts last.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::money::Money;

/// Name of the category that holds the unallocated remainder of the budget
pub const EXTRA_CATEGORY: &str = "Extra";

/// A budget category with its allocated amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BudgetCategory {
    /// Stable identity, unchanged when the amount is overwritten
    pub id: CategoryId,

    /// Category name (unique within a list, case-sensitive)
    pub name: String,

    /// Allocated amount
    pub amount: Money,
}

impl BudgetCategory {
    /// Create a new category
    pub fn new(name: impl Into<String>, amount: Money) -> Self {
        Self {
            id: CategoryId::new(),
            name: name.into(),
            amount,
        }
    }

    /// Whether this is the computed leftover entry
    pub fn is_extra(&self) -> bool {
        self.name == EXTRA_CATEGORY
    }

    /// Validate the category
    pub fn validate(&self) -> Result<(), CategoryValidationError> {
        if self.name.trim().is_empty() {
            return Err(CategoryValidationError::EmptyName);
        }

        if !self.amount.is_positive() {
            return Err(CategoryValidationError::NonPositiveAmount);
        }

        Ok(())
    }
}

impl fmt::Display for BudgetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.amount)
    }
}

/// Ordered list of categories with unique names
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryList {
    entries: Vec<BudgetCategory>,
}

impl CategoryList {
    /// Create an empty list
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BudgetCategory> {
        self.entries.iter()
    }

    pub fn as_slice(&self) -> &[BudgetCategory] {
        &self.entries
    }

    /// Get a category by ID
    pub fn get(&self, id: CategoryId) -> Option<&BudgetCategory> {
        self.entries.iter().find(|c| c.id == id)
    }

    /// Get a category by exact name
    pub fn find_by_name(&self, name: &str) -> Option<&BudgetCategory> {
        self.entries.iter().find(|c| c.name == name)
    }

    /// Get the computed leftover entry, if present
    pub fn extra(&self) -> Option<&BudgetCategory> {
        self.find_by_name(EXTRA_CATEGORY)
    }

    /// Sum of every amount except the leftover entry
    pub fn allocated(&self) -> Money {
        self.entries
            .iter()
            .filter(|c| !c.is_extra())
            .map(|c| c.amount)
            .sum()
    }

    /// Sum of every amount, leftover entry included
    pub fn total(&self) -> Money {
        self.entries.iter().map(|c| c.amount).sum()
    }

    /// Overwrite the amount of the category with this name, or append a new
    /// one
    ///
    /// An overwritten category keeps its position and ID. Returns the ID of
    /// the affected category and whether it already existed.
    pub fn upsert(&mut self, name: &str, amount: Money) -> (CategoryId, bool) {
        if let Some(existing) = self.entries.iter_mut().find(|c| c.name == name) {
            existing.amount = amount;
            return (existing.id, true);
        }

        let category = BudgetCategory::new(name, amount);
        let id = category.id;
        self.insert(category);
        (id, false)
    }

    /// Append a category, keeping a trailing `Extra` entry last
    pub fn insert(&mut self, category: BudgetCategory) {
        if !category.is_extra() {
            if let Some(pos) = self.entries.iter().position(|c| c.is_extra()) {
                self.entries.insert(pos, category);
                return;
            }
        }
        self.entries.push(category);
    }

    /// Remove a category by ID
    pub fn remove(&mut self, id: CategoryId) -> Option<BudgetCategory> {
        let pos = self.entries.iter().position(|c| c.id == id)?;
        Some(self.entries.remove(pos))
    }

    /// Remove every leftover entry
    pub fn remove_extra(&mut self) {
        self.entries.retain(|c| !c.is_extra());
    }
}

impl<'a> IntoIterator for &'a CategoryList {
    type Item = &'a BudgetCategory;
    type IntoIter = std::slice::Iter<'a, BudgetCategory>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Validation errors for categories
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryValidationError {
    EmptyName,
    NonPositiveAmount,
}

impl fmt::Display for CategoryValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "Category name cannot be empty"),
            Self::NonPositiveAmount => write!(f, "Category amount must be positive"),
        }
    }
}

impl std::error::Error for CategoryValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(list: &CategoryList) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn test_new_category() {
        let category = BudgetCategory::new("Rent", Money::from_units(900));
        assert_eq!(category.name, "Rent");
        assert_eq!(category.amount.cents(), 90000);
        assert!(!category.is_extra());
        assert!(BudgetCategory::new(EXTRA_CATEGORY, Money::from_units(1)).is_extra());
    }

    #[test]
    fn test_category_validation() {
        let mut category = BudgetCategory::new("Valid", Money::from_units(10));
        assert!(category.validate().is_ok());

        category.name = "  ".to_string();
        assert_eq!(category.validate(), Err(CategoryValidationError::EmptyName));

        category.name = "a".repeat(200);
        assert!(category.validate().is_ok());

        category.name = "Valid".to_string();
        category.amount = Money::zero();
        assert_eq!(
            category.validate(),
            Err(CategoryValidationError::NonPositiveAmount)
        );
    }

    #[test]
    fn test_upsert_overwrites_in_place() {
        let mut list = CategoryList::new();
        let (food, existed) = list.upsert("Food", Money::from_units(300));
        assert!(!existed);
        list.upsert("Rent", Money::from_units(200));

        let (again, existed) = list.upsert("Food", Money::from_units(150));
        assert!(existed);
        assert_eq!(again, food);
        assert_eq!(names(&list), vec!["Food", "Rent"]);
        assert_eq!(list.get(food).unwrap().amount, Money::from_units(150));
    }

    #[test]
    fn test_names_are_case_sensitive() {
        let mut list = CategoryList::new();
        list.upsert("food", Money::from_units(1));
        list.upsert("Food", Money::from_units(2));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_insert_keeps_extra_last() {
        let mut list = CategoryList::new();
        list.upsert("Food", Money::from_units(100));
        list.insert(BudgetCategory::new(EXTRA_CATEGORY, Money::from_units(50)));
        list.upsert("Rent", Money::from_units(100));

        assert_eq!(names(&list), vec!["Food", "Rent", "Extra"]);
    }

    #[test]
    fn test_sums() {
        let mut list = CategoryList::new();
        list.upsert("Food", Money::from_units(100));
        list.upsert("Rent", Money::from_cents(12050));
        list.insert(BudgetCategory::new(EXTRA_CATEGORY, Money::from_units(10)));

        assert_eq!(list.allocated(), Money::from_cents(22050));
        assert_eq!(list.total(), Money::from_cents(23050));
        assert_eq!(list.extra().unwrap().amount, Money::from_units(10));

        list.remove_extra();
        assert!(list.extra().is_none());
        assert_eq!(list.total(), list.allocated());
    }

    #[test]
    fn test_remove_by_id() {
        let mut list = CategoryList::new();
        let (food, _) = list.upsert("Food", Money::from_units(100));
        list.upsert("Rent", Money::from_units(100));

        let removed = list.remove(food).unwrap();
        assert_eq!(removed.name, "Food");
        assert!(list.remove(food).is_none());
        assert_eq!(names(&list), vec!["Rent"]);
    }

    #[test]
    fn test_serialization() {
        let mut list = CategoryList::new();
        list.upsert("Food", Money::from_units(100));
        let json = serde_json::to_string(&list).unwrap();
        let deserialized: CategoryList = serde_json::from_str(&json).unwrap();
        assert_eq!(list, deserialized);
    }
}

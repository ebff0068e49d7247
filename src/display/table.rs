//! Category table projection
//!
//! [`project`] turns a category list into a view description that front ends
//! draw as-is. Row actions refer to categories by ID, never by position.

use tabled::builder::Builder;
use tabled::settings::object::Columns;
use tabled::settings::{Alignment, Modify, Style};

use crate::models::{CategoryId, CategoryList, Money, ReconcileMode};

/// Placeholder text for an empty table
pub const EMPTY_TABLE_MESSAGE: &str = "No categories added yet";

/// Marker shown instead of a delete action on the computed row
pub const AUTO_MARKER: &str = "(Auto)";

/// What the action cell of a row does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    /// Remove the category with this ID
    Delete(CategoryId),
    /// Computed row; not interactive
    Auto,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Delete(_) => "Delete",
            Self::Auto => AUTO_MARKER,
        }
    }
}

/// One row of the category table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TableRow {
    /// Single centered row spanning the table
    Placeholder { message: &'static str },
    Category {
        id: CategoryId,
        name: String,
        amount: Money,
        /// Set on the computed `Extra` row
        highlighted: bool,
        action: RowAction,
    },
}

/// View description of the category list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryTable {
    pub rows: Vec<TableRow>,
}

impl CategoryTable {
    /// Whether the table shows only the placeholder
    pub fn is_placeholder(&self) -> bool {
        matches!(self.rows.as_slice(), [TableRow::Placeholder { .. }])
    }

    /// IDs reachable through a delete action, in row order
    pub fn delete_targets(&self) -> Vec<CategoryId> {
        self.rows
            .iter()
            .filter_map(|row| match row {
                TableRow::Category {
                    action: RowAction::Delete(id),
                    ..
                } => Some(*id),
                _ => None,
            })
            .collect()
    }
}

/// Project a category list into table rows
pub fn project(categories: &CategoryList, mode: ReconcileMode) -> CategoryTable {
    if categories.is_empty() {
        return CategoryTable {
            rows: vec![TableRow::Placeholder {
                message: EMPTY_TABLE_MESSAGE,
            }],
        };
    }

    let rows = categories
        .iter()
        .map(|c| {
            let computed = mode.is_strict() && c.is_extra();
            TableRow::Category {
                id: c.id,
                name: c.name.clone(),
                amount: c.amount,
                highlighted: computed,
                action: if computed {
                    RowAction::Auto
                } else {
                    RowAction::Delete(c.id)
                },
            }
        })
        .collect();

    CategoryTable { rows }
}

/// Render a table as text for terminal output
pub fn format_category_table(table: &CategoryTable, currency_symbol: &str) -> String {
    if table.is_placeholder() {
        let mut builder = Builder::default();
        builder.push_record([EMPTY_TABLE_MESSAGE]);
        let mut output = builder.build();
        output.with(Style::rounded()).with(Alignment::center());
        return output.to_string();
    }

    let mut builder = Builder::default();
    builder.push_record(["Category", "Amount", ""]);

    for row in &table.rows {
        if let TableRow::Category {
            name,
            amount,
            highlighted,
            action,
            ..
        } = row
        {
            let name = if *highlighted {
                format!("* {}", name)
            } else {
                name.clone()
            };
            builder.push_record([
                name,
                amount.format_with_symbol(currency_symbol),
                action.label().to_string(),
            ]);
        }
    }

    let mut output = builder.build();
    output
        .with(Style::rounded())
        .with(Modify::new(Columns::single(1)).with(Alignment::right()));
    output.to_string()
}

//! Budget submission payload and submitters
//!
//! A submission carries two form fields: the category list encoded as a JSON
//! array of `{category, amount}` objects, and the raw text of the total
//! budget input. Submitters hand the payload on to whatever consumes it.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{BudgetError, BudgetResult};
use crate::models::CategoryList;

/// One category as exchanged with the server
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedCategory {
    pub category: String,
    /// Decimal number of currency units
    pub amount: f64,
}

impl SubmittedCategory {
    pub fn new(category: impl Into<String>, amount: f64) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// The form fields produced on submit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    /// JSON array of [`SubmittedCategory`]
    pub categories_json: String,
    /// Raw total budget input
    pub total_budget: String,
}

impl Submission {
    /// Encode a category list into a submission
    pub fn new(categories: &CategoryList, total_budget: impl Into<String>) -> BudgetResult<Self> {
        let entries: Vec<SubmittedCategory> = categories
            .iter()
            .map(|c| SubmittedCategory::new(c.name.clone(), c.amount.as_decimal()))
            .collect();

        Ok(Self {
            categories_json: serde_json::to_string(&entries)?,
            total_budget: total_budget.into(),
        })
    }

    /// Decode the category field
    pub fn categories(&self) -> BudgetResult<Vec<SubmittedCategory>> {
        parse_categories(&self.categories_json)
    }
}

/// Parse a JSON array of submitted categories
pub fn parse_categories(json: &str) -> BudgetResult<Vec<SubmittedCategory>> {
    Ok(serde_json::from_str(json)?)
}

/// Load a JSON array of submitted categories from a file
pub fn load_categories(path: &Path) -> BudgetResult<Vec<SubmittedCategory>> {
    let contents = fs::read_to_string(path).map_err(|e| {
        BudgetError::Io(format!("Failed to read {}: {}", path.display(), e))
    })?;
    parse_categories(&contents)
}

/// Receives a validated submission
pub trait FormSubmitter {
    fn submit(&mut self, submission: &Submission) -> BudgetResult<()>;
}

/// Collects submissions in memory
impl FormSubmitter for Vec<Submission> {
    fn submit(&mut self, submission: &Submission) -> BudgetResult<()> {
        self.push(submission.clone());
        Ok(())
    }
}

/// Writes each submission as pretty JSON to a writer
pub struct WriterSubmitter<W: Write> {
    writer: W,
}

impl<W: Write> WriterSubmitter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> FormSubmitter for WriterSubmitter<W> {
    fn submit(&mut self, submission: &Submission) -> BudgetResult<()> {
        serde_json::to_writer_pretty(&mut self.writer, submission)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

/// Writes the latest submission to a file, replacing earlier ones
#[derive(Debug, Clone)]
pub struct FileSubmitter {
    path: PathBuf,
}

impl FileSubmitter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl FormSubmitter for FileSubmitter {
    fn submit(&mut self, submission: &Submission) -> BudgetResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let contents = serde_json::to_string_pretty(submission)?;
        fs::write(&self.path, contents).map_err(|e| {
            BudgetError::Io(format!("Failed to write {}: {}", self.path.display(), e))
        })?;
        Ok(())
    }
}

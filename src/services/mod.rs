//! Service layer for budget-setup
//!
//! The reconciler holds the allocation rules; the submission module turns a
//! reconciled session into the payload handed to the server.

pub mod reconciler;
pub mod submission;

pub use reconciler::{reconcile, recompute_extra, Action, BudgetState, LockOutcome, Reconciler};
pub use submission::{
    FileSubmitter, FormSubmitter, SubmittedCategory, Submission, WriterSubmitter,
};

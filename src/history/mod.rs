//! Undo/redo history for in-memory models.
//!
//! [`ModelHistory`] owns a model of any `Clone + PartialEq` type, records full
//! copies of it on request and rolls it back on undo.
//!
//! # Example
//!
//! ```
//! use tabula::history::ModelHistory;
//!
//! let mut history = ModelHistory::new(vec!["draft".to_string()]);
//!
//! history.get_mut().push("first edit".to_string());
//! history.save_snapshot("edit");
//!
//! history.get_mut().push("unsaved".to_string());
//! assert!(history.undo::<&str>(&[]));
//! assert_eq!(history.get().len(), 2);
//!
//! assert!(history.undo_all());
//! assert_eq!(history.get(), &["draft".to_string()]);
//! ```

mod snapshot;
mod tracker;

pub use snapshot::Snapshot;
pub use tracker::ModelHistory;

//! # Error Types
//!
//! Domain-specific error types for tally-core.
//!
//! Validation is the only fallible stage of the pipeline: once the catalog
//! and roster pass [`crate::validation::validate_inputs`], folding and
//! summary derivation are total functions. Fold-time anomalies (unresolved
//! references, non-positive quantities) are skipped, not surfaced, so they
//! have no error variant here.

use thiserror::Error;

// =============================================================================
// Validation Error
// =============================================================================

/// Catalog/roster validation failures.
///
/// Validation reports the **first** violation found and stops; callers must
/// not proceed to folding after receiving one of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An item has no `"regular"` price entry.
    ///
    /// Every item must carry a regular price: it is the fallback used when
    /// a buyer's tier has no dedicated entry.
    #[error("Item \"{item}\" does not have a regular price")]
    MissingRegularPrice { item: String },

    /// Two items in the catalog share a name.
    ///
    /// Item names are the keys transactions resolve against, so they must
    /// be unique.
    #[error("Duplicate item name found - \"{item}\"")]
    DuplicateItem { item: String },

    /// Two buyers in the roster share a name.
    #[error("Duplicate buyer name found - \"{buyer}\"")]
    DuplicateBuyer { buyer: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Unit Tests
// =============================================================================

//! # Error Types
//!
//! Domain-specific error types for stitchquote-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  stitchquote-core errors (this file)                                   │
//! │  ├── CoreError        - General domain errors                          │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  Persistence errors (external collaborator)                            │
//! │  └── storage failures - never originate in this crate                  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → caller (UI re-prompts the user)   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (the offending dimension, quantity)
//! 3. Errors are enum variants, never String
//! 4. Validation errors fire *before* any cost component runs; the engine
//!    never returns a partial breakdown
//!
//! The engine itself performs no retries, logging, or recovery: a typed
//! failure is returned to the immediate caller, which owns the user
//! interaction.

use thiserror::Error;

// =============================================================================
// Core Error
// =============================================================================

/// Core pricing-engine errors.
///
/// These represent business rule violations or bad caller input. They should
/// be caught and translated to user-friendly messages by the quoting UI.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested hoop catalog is empty.
    ///
    /// ## When This Occurs
    /// - A caller passes its own (misconfigured) catalog instead of
    ///   `standard_catalog()`
    #[error("hoop catalog is empty")]
    EmptyHoopCatalog,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when a design specification or quantity doesn't meet
/// requirements. Used for early validation before any costing runs; they are
/// user-facing (the caller re-prompts for corrected input), not system
/// faults.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// Design dimensions must be strictly positive finite centimeters.
    ///
    /// ## When This Occurs
    /// - Width or height entered as 0 or negative in the manual wizard
    /// - NaN/infinite dimensions from a corrupted analysis payload
    #[error("design dimensions must be positive: got {width_cm} x {height_cm} cm")]
    InvalidDimensions { width_cm: f64, height_cm: f64 },

    /// A design must have at least one color.
    #[error("color count must be at least 1")]
    NoColors,

    /// Quantity must be at least one piece.
    #[error("quantity must be at least 1: got {quantity}")]
    InvalidQuantity { quantity: u32 },

    /// Sublimation was requested for a design wider than the print roll.
    ///
    /// ## When This Occurs
    /// - The roll is 100 cm wide; a wider design cannot be laid out at all.
    ///   This is surfaced before any cost is produced, never silently
    ///   clamped.
    ///
    /// ## User Workflow
    /// ```text
    /// Manual wizard: width = 101, sublimation = yes
    ///      │
    ///      ▼
    /// SublimationTooWide { width_cm: 101.0, roll_width_cm: 100.0 }
    ///      │
    ///      ▼
    /// UI shows: "Design is wider than the 100 cm print roll"
    /// ```
    #[error("design width {width_cm} cm exceeds the {roll_width_cm} cm print roll")]
    SublimationTooWide { width_cm: f64, roll_width_cm: f64 },

    /// Invalid format (e.g., invalid UUID on a record key).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

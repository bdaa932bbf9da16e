//! # stitchquote-core: Pure Pricing Engine for StitchQuote
//!
//! This crate is the **heart** of the embroidery quoting tool. It turns a
//! design's physical parameters, a price-list snapshot and a quantity into
//! an itemized cost breakdown and a final quotation, as pure functions
//! with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     StitchQuote Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Quoting Frontend (TypeScript)                   │   │
//! │  │   Upload ──► Camera ──► Manual Wizard ──► History ──► Ticket   │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ stitchquote-core (THIS CRATE) ★                   │   │
//! │  │                                                                 │   │
//! │  │  ┌────────┐ ┌────────┐ ┌───────────┐ ┌─────────────┐ ┌───────┐│   │
//! │  │  │  hoop  │ │ stitch │ │ materials │ │ sublimation │ │ quote ││   │
//! │  │  │ select │ │estimate│ │ 4 costs   │ │ roll layout │ │ rules ││   │
//! │  │  └────────┘ └────────┘ └───────────┘ └─────────────┘ └───────┘│   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO IMAGE PROCESSING • PURE FUNCTIONS  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │   External collaborators: persistence backend (stores the      │   │
//! │  │   QuotationRecord), image analysis service (supplies stitch    │   │
//! │  │   counts), configuration subsystem (owns the price history)    │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`money`] - Money type with integer cents and commercial rounding
//! - [`config`] - Versioned price list (immutable snapshots, append-only)
//! - [`types`] - Domain types (DesignSpecification, CostBreakdown, ...)
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation, always before any costing
//! - [`hoop`] - Frame catalog and selection
//! - [`stitch`] - Billable stitch estimation
//! - [`materials`] - Stitching/backing/fabric/cutting components
//! - [`sublimation`] - Roll-layout print costing
//! - [`quote`] - Batch rule, volume discounts, final assembly
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: a quotation is a function of
//!    (design, config snapshot, quantity): same input, same output
//! 2. **No I/O**: storage, network and image work are FORBIDDEN here
//! 3. **Integer Money**: cents everywhere; floats are physical (cm) only
//!    and cross into money through one commercial-rounding boundary
//! 4. **Explicit Errors**: validation failures are typed, never strings
//!    or panics, and fire before any cost component runs
//!
//! ## Example Usage
//!
//! ```rust
//! use stitchquote_core::config::PricingConfig;
//! use stitchquote_core::hoop::standard_catalog;
//! use stitchquote_core::quote::compute_quotation;
//! use stitchquote_core::types::{DesignSpecification, FabricType};
//!
//! let spec = DesignSpecification {
//!     width_cm: 12.0,
//!     height_cm: 9.0,
//!     color_count: 2,
//!     measured_stitch_count: 5400,
//!     has_applique: true,
//!     fabric_type: FabricType::Normal,
//!     has_sublimation: false,
//! };
//!
//! let outcome = compute_quotation(
//!     &spec,
//!     &PricingConfig::default(),
//!     24,
//!     &standard_catalog(),
//! )
//! .unwrap();
//!
//! assert_eq!(outcome.breakdown.hoop_name, "13 cm");
//! assert_eq!(outcome.quotation.quantity, 24);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod hoop;
pub mod materials;
pub mod money;
pub mod quote;
pub mod stitch;
pub mod sublimation;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use stitchquote_core::Money` instead of
// `use stitchquote_core::money::Money`

pub use config::{PriceHistory, PricingConfig};
pub use error::{CoreError, CoreResult, ValidationError};
pub use hoop::{select_hoop, standard_catalog, HoopProfile};
pub use money::Money;
pub use quote::{assemble, compute_quotation, compute_quotation_with, EngineOptions, QuoteOutcome};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Commercial rounding increment: every cost component is rounded up to
/// the nearest 5 cents (0.05) before components are summed.
///
/// ## Why a constant?
/// The shop's ledgers have used 0.05 and, briefly, 0.10; pinning the
/// increment here lets the test suite assert the exact policy in force
/// instead of re-deriving it from narrative.
pub const COMMERCIAL_INCREMENT: Money = Money::from_cents(5);

/// Minimum billable stitch count.
///
/// ## Business Reason
/// Machine setup dominates tiny designs; anything under 2000 stitches
/// bills as 2000. Applied by default, disabled per call via
/// [`quote::EngineOptions`].
pub const MIN_BILLABLE_STITCHES: u32 = 2000;

/// Slack factor on area-based stitch estimates, covering underlay and
/// pull-compensation overhead the area heuristic can't see.
pub const STITCH_SLACK_FACTOR: f64 = 1.1;

/// Minimum production batch billed. Orders below this are billed as a
/// full batch of 6 (financially; the customer still receives the pieces
/// ordered).
pub const MIN_BATCH_QUANTITY: u32 = 6;

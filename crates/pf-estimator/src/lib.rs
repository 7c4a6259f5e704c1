//! Cost and time estimation for print jobs
//!
//! The estimator is a pure function over the pricing catalog and a
//! specification record: no state, no I/O, identical inputs produce
//! identical output. Shells rebuild the specification from current field
//! values on every input event and re-run the estimate; results are
//! recomputed, never cached or diffed.
//!
//! Two entry points with intentionally distinct formulas:
//!
//! - [`estimate`] — the authoritative quote used by the budget calculator:
//!   material cost, post-processing, quantity scaling, volume-discount
//!   tiers, and a full time breakdown.
//! - [`preview`] — the lightweight live price used by the 3D configurator:
//!   dimensions-derived volume scaled by material, quality, and infill
//!   only.
//!
//! Invalid numeric input never fails a computation; the [`coerce`] module
//! normalizes it (zero for volume and dimensions, clamped bounds for
//! quantity and infill) before a specification is built.

pub mod coerce;
pub mod estimate;
pub mod spec;

pub use estimate::{
    discount_for_quantity, estimate, preview, round_currency, DiscountTier, EstimateResult,
    PreviewEstimate, HOURS_PER_WORKING_DAY, SETUP_TIME_HOURS, VOLUME_DISCOUNTS,
};
pub use spec::{PreviewSpecification, ProductSpecification};

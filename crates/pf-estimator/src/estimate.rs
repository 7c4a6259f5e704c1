//! Estimation rules
//!
//! Costs are carried at full f64 precision end to end; [`round_currency`]
//! is applied once, at the display/serialization boundary.

use serde::Serialize;

use pf_catalog::PricingCatalog;

use crate::coerce;
use crate::spec::{PreviewSpecification, ProductSpecification};

/// Fixed per-unit setup time, hours
pub const SETUP_TIME_HOURS: f64 = 0.5;

/// Working hours per calendar day used for the day estimate
pub const HOURS_PER_WORKING_DAY: f64 = 8.0;

/// A quantity-based percentage reduction on the order total
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DiscountTier {
    /// Minimum quantity at which the tier applies
    pub threshold_quantity: u32,
    /// Reduction in percent of the pre-discount total
    pub percentage: f64,
}

/// Discount tiers, best first. Lookup takes the first tier whose threshold
/// the quantity meets.
pub const VOLUME_DISCOUNTS: [DiscountTier; 2] = [
    DiscountTier {
        threshold_quantity: 10,
        percentage: 15.0,
    },
    DiscountTier {
        threshold_quantity: 5,
        percentage: 10.0,
    },
];

/// The discount tier a quantity qualifies for, if any
pub fn discount_for_quantity(quantity: u32) -> Option<DiscountTier> {
    VOLUME_DISCOUNTS
        .into_iter()
        .find(|tier| quantity >= tier.threshold_quantity)
}

/// Full cost/time breakdown for a quick-calculator estimate
///
/// Derived, immutable, recomputed on every specification change. Currency
/// fields hold full precision; round at display time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EstimateResult {
    pub material_cost: f64,
    pub post_processing_cost: f64,
    pub unit_cost: f64,
    pub total_cost_before_discount: f64,
    pub discount: Option<DiscountTier>,
    pub final_total_cost: f64,
    pub time_per_unit_hours: f64,
    pub total_time_hours: f64,
    pub estimated_days: u32,
}

impl EstimateResult {
    /// Amount saved by the applied discount tier
    pub fn savings(&self) -> f64 {
        self.total_cost_before_discount - self.final_total_cost
    }
}

/// Price surfaced by the configurator's live preview
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewEstimate {
    pub volume_cm3: f64,
    pub price: f64,
}

/// Compute the authoritative quote for a specification.
///
/// Material cost scales with volume, material rate, and quality tier;
/// post-processing adds a flat per-unit cost and time; quantity scales the
/// totals and selects the volume-discount tier. Non-positive volume is
/// treated as zero, so the result is always a well-formed non-negative
/// figure.
pub fn estimate(catalog: &PricingCatalog, spec: &ProductSpecification) -> EstimateResult {
    let material = catalog.material(spec.material);
    let quality = catalog.quality(spec.quality);
    let post = catalog.post_process(spec.post_process);

    let volume = coerce::sanitize_volume(spec.volume_cm3);
    let quantity = f64::from(spec.quantity);

    let material_cost = volume * material.cost_per_cm3 * quality.cost_multiplier;
    let unit_cost = material_cost + post.flat_cost;
    let total_cost_before_discount = unit_cost * quantity;

    let discount = discount_for_quantity(spec.quantity);
    let final_total_cost = match discount {
        Some(tier) => total_cost_before_discount * (1.0 - tier.percentage / 100.0),
        None => total_cost_before_discount,
    };

    let print_time_hours = (volume / 10.0) * material.print_time_factor * quality.time_multiplier;
    let time_per_unit_hours = SETUP_TIME_HOURS + print_time_hours + post.added_time_hours;
    let total_time_hours = time_per_unit_hours * quantity;
    let estimated_days = (total_time_hours / HOURS_PER_WORKING_DAY).ceil() as u32;

    EstimateResult {
        material_cost,
        post_processing_cost: post.flat_cost,
        unit_cost,
        total_cost_before_discount,
        discount,
        final_total_cost,
        time_per_unit_hours,
        total_time_hours,
        estimated_days,
    }
}

/// Compute the configurator's live preview price.
///
/// Deliberately narrower than [`estimate`]: volume derives from the three
/// dimension sliders, the price scales by infill, and there is no
/// post-processing cost, quantity scaling, or discount.
pub fn preview(catalog: &PricingCatalog, spec: &PreviewSpecification) -> PreviewEstimate {
    let material = catalog.material(spec.material);
    let quality = catalog.quality(spec.quality);

    let volume_cm3 = coerce::volume_from_dimensions(spec.width_cm, spec.height_cm, spec.depth_cm);
    let infill = coerce::clamp_infill_fraction(spec.infill_fraction);

    PreviewEstimate {
        volume_cm3,
        price: volume_cm3 * material.cost_per_cm3 * quality.cost_multiplier * infill,
    }
}

/// Round a currency amount to 2 decimal places for display
pub fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use pf_catalog::{MaterialId, PostProcessId, QualityId, CATALOG};

    const EPS: f64 = 1e-9;

    fn spec(volume: f64, quantity: i64) -> ProductSpecification {
        ProductSpecification::new(
            volume,
            MaterialId::Pla,
            QualityId::Standard,
            PostProcessId::None,
            quantity,
        )
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_baseline_single_unit() {
        // 100 cm³ of standard PLA, no post-processing, one unit
        let result = estimate(&CATALOG, &spec(100.0, 1));
        assert_close(result.material_cost, 5.0);
        assert_close(result.unit_cost, 5.0);
        assert_close(result.total_cost_before_discount, 5.0);
        assert!(result.discount.is_none());
        assert_close(result.final_total_cost, 5.0);
        assert_close(result.time_per_unit_hours, 10.5);
        assert_close(result.total_time_hours, 10.5);
        assert_eq!(result.estimated_days, 2);
    }

    #[test]
    fn test_five_units_get_ten_percent_off() {
        let result = estimate(&CATALOG, &spec(100.0, 5));
        assert_close(result.total_cost_before_discount, 25.0);
        let tier = result.discount.unwrap();
        assert_eq!(tier.percentage, 10.0);
        assert_eq!(tier.threshold_quantity, 5);
        assert_close(result.final_total_cost, 22.5);
        assert_close(result.savings(), 2.5);
    }

    #[test]
    fn test_ten_units_get_fifteen_percent_off() {
        let result = estimate(&CATALOG, &spec(100.0, 10));
        assert_close(result.total_cost_before_discount, 50.0);
        assert_eq!(result.discount.unwrap().percentage, 15.0);
        assert_close(result.final_total_cost, 42.5);
    }

    #[test]
    fn test_premium_resin_ultra_with_premium_finish() {
        let spec = ProductSpecification::new(
            200.0,
            MaterialId::Resin,
            QualityId::Ultra,
            PostProcessId::Premium,
            1,
        );
        let result = estimate(&CATALOG, &spec);
        assert_close(result.material_cost, 100.0);
        assert_close(result.post_processing_cost, 75.0);
        assert_close(result.unit_cost, 175.0);
        assert_close(result.total_cost_before_discount, 175.0);
        assert!(result.discount.is_none());
    }

    #[test]
    fn test_negative_volume_leaves_flat_cost_only() {
        let spec = ProductSpecification::new(
            -50.0,
            MaterialId::Pla,
            QualityId::Standard,
            PostProcessId::Painting,
            1,
        );
        let result = estimate(&CATALOG, &spec);
        assert_close(result.material_cost, 0.0);
        assert_close(result.unit_cost, 35.0);
    }

    #[test]
    fn test_discount_tier_boundaries() {
        for (quantity, expected) in [(1u32, 0.0), (4, 0.0), (5, 10.0), (9, 10.0), (10, 15.0), (50, 15.0)] {
            let got = discount_for_quantity(quantity).map_or(0.0, |t| t.percentage);
            assert_eq!(got, expected, "quantity {quantity}");
        }
    }

    #[test]
    fn test_final_never_exceeds_total_equality_below_five() {
        for quantity in 1..=50 {
            let result = estimate(&CATALOG, &spec(100.0, quantity));
            assert!(result.final_total_cost <= result.total_cost_before_discount);
            if quantity < 5 {
                assert_eq!(result.final_total_cost, result.total_cost_before_discount);
            } else {
                assert!(result.final_total_cost < result.total_cost_before_discount);
            }
        }
    }

    #[test]
    fn test_costs_monotonic_in_volume() {
        let volumes = [0.0, 0.5, 1.0, 10.0, 100.0, 1000.0, 25_000.0];
        let mut previous = estimate(&CATALOG, &spec(volumes[0], 7));
        for &volume in &volumes[1..] {
            let current = estimate(&CATALOG, &spec(volume, 7));
            assert!(current.material_cost >= previous.material_cost);
            assert!(current.unit_cost >= previous.unit_cost);
            assert!(current.total_cost_before_discount >= previous.total_cost_before_discount);
            assert!(current.final_total_cost >= previous.final_total_cost);
            previous = current;
        }
    }

    #[test]
    fn test_coercion_idempotence() {
        // a negative volume estimates identically to an explicit zero
        assert_eq!(estimate(&CATALOG, &spec(-1.0, 3)), estimate(&CATALOG, &spec(0.0, 3)));
    }

    #[test]
    fn test_estimate_is_pure() {
        let spec = ProductSpecification::new(
            137.25,
            MaterialId::Tpu,
            QualityId::High,
            PostProcessId::Assembly,
            12,
        );
        assert_eq!(estimate(&CATALOG, &spec), estimate(&CATALOG, &spec));
    }

    #[test]
    fn test_estimated_days_boundary() {
        // PLA Standard: time per unit = 0.5 + volume / 10, so 75 cm³ lands
        // exactly on one 8-hour day
        let result = estimate(&CATALOG, &spec(75.0, 1));
        assert_close(result.total_time_hours, 8.0);
        assert_eq!(result.estimated_days, 1);

        let result = estimate(&CATALOG, &spec(75.1, 1));
        assert_close(result.total_time_hours, 8.01);
        assert_eq!(result.estimated_days, 2);
    }

    #[test]
    fn test_preview_defaults() {
        // 10 cm sliders on every axis give 1 cm³ at the configurator's scale
        let result = preview(&CATALOG, &PreviewSpecification::default());
        assert_close(result.volume_cm3, 1.0);
        assert_close(result.price, 0.01);
    }

    #[test]
    fn test_preview_scales_with_infill_only() {
        let solid = PreviewSpecification::new(
            20.0,
            20.0,
            25.0,
            MaterialId::Resin,
            QualityId::Ultra,
            1.0,
        );
        let result = preview(&CATALOG, &solid);
        assert_close(result.volume_cm3, 10.0);
        assert_close(result.price, 10.0 * 0.25 * 2.0);

        let sparse = PreviewSpecification { infill_fraction: 0.5, ..solid };
        assert_close(preview(&CATALOG, &sparse).price, result.price * 0.5);
    }

    #[test]
    fn test_preview_ignores_quantity_and_post_processing() {
        // the preview record has no such fields; pin the formula instead
        let spec = PreviewSpecification::new(
            10.0,
            10.0,
            10.0,
            MaterialId::Petg,
            QualityId::Draft,
            0.2,
        );
        let result = preview(&CATALOG, &spec);
        assert_close(result.price, 1.0 * 0.10 * 0.7 * 0.2);
    }

    #[test]
    fn test_round_currency() {
        assert_eq!(round_currency(5.0), 5.0);
        assert_eq!(round_currency(22.504999), 22.5);
        assert_eq!(round_currency(22.506), 22.51);
        assert_eq!(round_currency(0.004), 0.0);
    }
}

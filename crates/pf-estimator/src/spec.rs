//! Specification records
//!
//! A specification is rebuilt from current field values on every input
//! event; it has no identity beyond the estimate computed from it. The
//! constructors run the coercion step, so a constructed record is always
//! within bounds.

use serde::Serialize;

use pf_catalog::{MaterialId, PostProcessId, QualityId};

use crate::coerce;

/// Default field values shells start from before the first edit
pub const DEFAULT_VOLUME_CM3: f64 = 100.0;
pub const DEFAULT_QUANTITY: u32 = 1;
pub const DEFAULT_INFILL_FRACTION: f64 = 0.2;

/// What the budget calculator hands to [`crate::estimate`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProductSpecification {
    /// Printed volume in cm³, already coerced non-negative
    pub volume_cm3: f64,
    pub material: MaterialId,
    pub quality: QualityId,
    pub post_process: PostProcessId,
    /// Units ordered, within `1..=50`
    pub quantity: u32,
}

impl ProductSpecification {
    /// Build a specification from raw field values, coercing volume and
    /// clamping quantity
    pub fn new(
        volume_cm3: f64,
        material: MaterialId,
        quality: QualityId,
        post_process: PostProcessId,
        quantity: i64,
    ) -> Self {
        Self {
            volume_cm3: coerce::sanitize_volume(volume_cm3),
            material,
            quality,
            post_process,
            quantity: coerce::clamp_quantity(quantity),
        }
    }
}

impl Default for ProductSpecification {
    fn default() -> Self {
        Self {
            volume_cm3: DEFAULT_VOLUME_CM3,
            material: MaterialId::Pla,
            quality: QualityId::Standard,
            post_process: PostProcessId::None,
            quantity: DEFAULT_QUANTITY,
        }
    }
}

/// What the 3D configurator hands to [`crate::preview`]
///
/// Narrower than [`ProductSpecification`] on purpose: the configurator
/// surfaces a live price only, so there is no post-processing, quantity,
/// or discount here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PreviewSpecification {
    pub width_cm: f64,
    pub height_cm: f64,
    pub depth_cm: f64,
    pub material: MaterialId,
    pub quality: QualityId,
    /// Fraction of the volume that is solid material, within `0.1..=1.0`
    pub infill_fraction: f64,
}

impl PreviewSpecification {
    /// Build a preview specification from raw field values, clamping infill
    pub fn new(
        width_cm: f64,
        height_cm: f64,
        depth_cm: f64,
        material: MaterialId,
        quality: QualityId,
        infill_fraction: f64,
    ) -> Self {
        Self {
            width_cm,
            height_cm,
            depth_cm,
            material,
            quality,
            infill_fraction: coerce::clamp_infill_fraction(infill_fraction),
        }
    }
}

impl Default for PreviewSpecification {
    fn default() -> Self {
        Self {
            width_cm: 10.0,
            height_cm: 10.0,
            depth_cm: 10.0,
            material: MaterialId::Pla,
            quality: QualityId::Standard,
            infill_fraction: DEFAULT_INFILL_FRACTION,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_coerces_fields() {
        let spec = ProductSpecification::new(
            -50.0,
            MaterialId::Petg,
            QualityId::High,
            PostProcessId::Sanding,
            120,
        );
        assert_eq!(spec.volume_cm3, 0.0);
        assert_eq!(spec.quantity, 50);
    }

    #[test]
    fn test_defaults_match_initial_form_state() {
        let spec = ProductSpecification::default();
        assert_eq!(spec.volume_cm3, 100.0);
        assert_eq!(spec.material, MaterialId::Pla);
        assert_eq!(spec.quality, QualityId::Standard);
        assert_eq!(spec.post_process, PostProcessId::None);
        assert_eq!(spec.quantity, 1);

        let preview = PreviewSpecification::default();
        assert_eq!(preview.infill_fraction, 0.2);
        assert_eq!(preview.width_cm, 10.0);
    }

    #[test]
    fn test_preview_new_clamps_infill() {
        let spec = PreviewSpecification::new(
            10.0,
            10.0,
            10.0,
            MaterialId::Pla,
            QualityId::Standard,
            0.02,
        );
        assert_eq!(spec.infill_fraction, 0.1);
    }
}

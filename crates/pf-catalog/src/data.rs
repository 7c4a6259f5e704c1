//! Catalog reference data
//!
//! The published price list. Array order matches the id enum discriminants
//! so entry lookup is a direct index; `tests::test_entry_order_matches_ids`
//! guards the pairing.

use crate::types::{
    MaterialEntry, MaterialId, PostProcessEntry, PostProcessId, PricingCatalog, QualityEntry,
    QualityId,
};

pub static MATERIALS: [MaterialEntry; 6] = [
    MaterialEntry {
        id: MaterialId::Pla,
        display_name: "PLA Standard",
        cost_per_cm3: 0.05,
        print_time_factor: 1.0,
    },
    MaterialEntry {
        id: MaterialId::PlaPlus,
        display_name: "PLA+",
        cost_per_cm3: 0.08,
        print_time_factor: 1.0,
    },
    MaterialEntry {
        id: MaterialId::Petg,
        display_name: "PETG",
        cost_per_cm3: 0.10,
        print_time_factor: 1.2,
    },
    MaterialEntry {
        id: MaterialId::Abs,
        display_name: "ABS",
        cost_per_cm3: 0.09,
        print_time_factor: 1.1,
    },
    MaterialEntry {
        id: MaterialId::Tpu,
        display_name: "TPU",
        cost_per_cm3: 0.15,
        print_time_factor: 1.5,
    },
    MaterialEntry {
        id: MaterialId::Resin,
        display_name: "Premium Resin",
        cost_per_cm3: 0.25,
        print_time_factor: 0.8,
    },
];

pub static QUALITY_TIERS: [QualityEntry; 4] = [
    QualityEntry {
        id: QualityId::Draft,
        display_name: "Draft (0.3mm)",
        cost_multiplier: 0.7,
        time_multiplier: 0.6,
    },
    QualityEntry {
        id: QualityId::Standard,
        display_name: "Standard (0.2mm)",
        cost_multiplier: 1.0,
        time_multiplier: 1.0,
    },
    QualityEntry {
        id: QualityId::High,
        display_name: "High (0.15mm)",
        cost_multiplier: 1.4,
        time_multiplier: 1.5,
    },
    QualityEntry {
        id: QualityId::Ultra,
        display_name: "Ultra (0.1mm)",
        cost_multiplier: 2.0,
        time_multiplier: 2.5,
    },
];

pub static POST_PROCESSING: [PostProcessEntry; 5] = [
    PostProcessEntry {
        id: PostProcessId::None,
        display_name: "None",
        flat_cost: 0.0,
        added_time_hours: 0.0,
    },
    PostProcessEntry {
        id: PostProcessId::Sanding,
        display_name: "Sanding",
        flat_cost: 15.0,
        added_time_hours: 1.0,
    },
    PostProcessEntry {
        id: PostProcessId::Painting,
        display_name: "Painting",
        flat_cost: 35.0,
        added_time_hours: 2.0,
    },
    PostProcessEntry {
        id: PostProcessId::Assembly,
        display_name: "Assembly",
        flat_cost: 25.0,
        added_time_hours: 1.5,
    },
    PostProcessEntry {
        id: PostProcessId::Premium,
        display_name: "Premium finish",
        flat_cost: 75.0,
        added_time_hours: 4.0,
    },
];

/// The process-wide catalog instance
pub static CATALOG: PricingCatalog = PricingCatalog {
    materials: &MATERIALS,
    quality_tiers: &QUALITY_TIERS,
    post_processing: &POST_PROCESSING,
};

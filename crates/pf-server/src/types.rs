//! API request and response types
//!
//! Requests mirror the storefront widgets' field state: every field has a
//! default, numeric text entry is coerced rather than rejected, and catalog
//! ids deserialize into closed id types so an id the catalog does not carry
//! never reaches the estimator.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use pf_catalog::{
    MaterialEntry, MaterialId, PostProcessEntry, PostProcessId, QualityEntry, QualityId,
};
use pf_estimator::{
    coerce, round_currency, spec::DEFAULT_VOLUME_CM3, DiscountTier, EstimateResult,
    PreviewEstimate, PreviewSpecification, ProductSpecification,
};

// ==================== Estimates ====================

/// A numeric field that may arrive as a JSON number or as free text.
///
/// The calculator's volume field is a text input; unparsable entry coerces
/// to zero instead of failing the request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NumericField {
    Number(f64),
    Text(String),
}

impl NumericField {
    pub fn coerced(&self) -> f64 {
        match self {
            Self::Number(value) => coerce::sanitize_volume(*value),
            Self::Text(raw) => coerce::parse_volume(raw),
        }
    }
}

/// Quick-calculator estimate request; absent fields take the form defaults
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(default)]
pub struct EstimateRequest {
    /// Estimated volume in cm³. Accepts a number or a string; unparsable
    /// or negative entry is treated as 0.
    #[schema(value_type = Option<f64>, example = 100.0)]
    pub volume_cm3: Option<NumericField>,

    #[schema(value_type = String, example = "pla")]
    pub material: MaterialId,

    #[schema(value_type = String, example = "standard")]
    pub quality: QualityId,

    #[schema(value_type = String, example = "none")]
    pub post_process: PostProcessId,

    /// Units ordered; clamped into 1..=50
    #[schema(minimum = 1, maximum = 50, default = 1)]
    pub quantity: i64,
}

impl Default for EstimateRequest {
    fn default() -> Self {
        Self {
            volume_cm3: None,
            material: MaterialId::Pla,
            quality: QualityId::Standard,
            post_process: PostProcessId::None,
            quantity: 1,
        }
    }
}

impl EstimateRequest {
    pub fn into_specification(self) -> ProductSpecification {
        let volume_cm3 = self
            .volume_cm3
            .map_or(DEFAULT_VOLUME_CM3, |field| field.coerced());
        ProductSpecification::new(
            volume_cm3,
            self.material,
            self.quality,
            self.post_process,
            self.quantity,
        )
    }
}

/// The discount tier applied to an estimate
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DiscountInfo {
    pub threshold_quantity: u32,
    pub percentage: f64,
    /// Amount saved versus the pre-discount total
    pub savings: f64,
}

/// Full cost/time breakdown returned to the calculator
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EstimateResponse {
    pub material_cost: f64,
    pub post_processing_cost: f64,
    pub unit_cost: f64,
    pub total_cost_before_discount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub discount: Option<DiscountInfo>,
    pub final_total_cost: f64,
    pub time_per_unit_hours: f64,
    pub total_time_hours: f64,
    pub estimated_days: u32,
    #[schema(value_type = String, example = "USD")]
    pub currency: &'static str,
}

impl From<EstimateResult> for EstimateResponse {
    fn from(result: EstimateResult) -> Self {
        Self {
            material_cost: round_currency(result.material_cost),
            post_processing_cost: round_currency(result.post_processing_cost),
            unit_cost: round_currency(result.unit_cost),
            total_cost_before_discount: round_currency(result.total_cost_before_discount),
            discount: result.discount.map(|tier: DiscountTier| DiscountInfo {
                threshold_quantity: tier.threshold_quantity,
                percentage: tier.percentage,
                savings: round_currency(result.savings()),
            }),
            final_total_cost: round_currency(result.final_total_cost),
            time_per_unit_hours: result.time_per_unit_hours,
            total_time_hours: result.total_time_hours,
            estimated_days: result.estimated_days,
            currency: "USD",
        }
    }
}

// ==================== Configurator preview ====================

/// Configurator preview request; dimensions come from the three sliders
#[derive(Debug, Clone, Deserialize, ToSchema)]
#[serde(default)]
pub struct PreviewRequest {
    #[schema(example = 10.0)]
    pub width_cm: f64,
    #[schema(example = 10.0)]
    pub height_cm: f64,
    #[schema(example = 10.0)]
    pub depth_cm: f64,

    #[schema(value_type = String, example = "pla")]
    pub material: MaterialId,

    #[schema(value_type = String, example = "standard")]
    pub quality: QualityId,

    /// Infill percentage; clamped into 10..=100
    #[schema(minimum = 10, maximum = 100, default = 20)]
    pub infill_percent: f64,
}

impl Default for PreviewRequest {
    fn default() -> Self {
        Self {
            width_cm: 10.0,
            height_cm: 10.0,
            depth_cm: 10.0,
            material: MaterialId::Pla,
            quality: QualityId::Standard,
            infill_percent: 20.0,
        }
    }
}

impl PreviewRequest {
    pub fn into_specification(self) -> PreviewSpecification {
        PreviewSpecification::new(
            self.width_cm,
            self.height_cm,
            self.depth_cm,
            self.material,
            self.quality,
            coerce::infill_fraction_from_percent(self.infill_percent),
        )
    }
}

/// Live preview price returned to the configurator
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PreviewResponse {
    pub volume_cm3: f64,
    pub price: f64,
    #[schema(value_type = String, example = "USD")]
    pub currency: &'static str,
}

impl From<PreviewEstimate> for PreviewResponse {
    fn from(result: PreviewEstimate) -> Self {
        Self {
            volume_cm3: round_currency(result.volume_cm3),
            price: round_currency(result.price),
            currency: "USD",
        }
    }
}

// ==================== Catalog ====================

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct MaterialOption {
    #[schema(value_type = String, example = "pla")]
    pub id: MaterialId,
    #[schema(value_type = String)]
    pub display_name: &'static str,
    pub cost_per_cm3: f64,
    pub print_time_factor: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QualityOption {
    #[schema(value_type = String, example = "standard")]
    pub id: QualityId,
    #[schema(value_type = String)]
    pub display_name: &'static str,
    pub cost_multiplier: f64,
    pub time_multiplier: f64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PostProcessOption {
    #[schema(value_type = String, example = "none")]
    pub id: PostProcessId,
    #[schema(value_type = String)]
    pub display_name: &'static str,
    pub flat_cost: f64,
    pub added_time_hours: f64,
}

/// The full catalog, for populating the widgets' selects
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct CatalogResponse {
    pub materials: Vec<MaterialOption>,
    pub quality_tiers: Vec<QualityOption>,
    pub post_processing: Vec<PostProcessOption>,
}

impl From<&MaterialEntry> for MaterialOption {
    fn from(entry: &MaterialEntry) -> Self {
        Self {
            id: entry.id,
            display_name: entry.display_name,
            cost_per_cm3: entry.cost_per_cm3,
            print_time_factor: entry.print_time_factor,
        }
    }
}

impl From<&QualityEntry> for QualityOption {
    fn from(entry: &QualityEntry) -> Self {
        Self {
            id: entry.id,
            display_name: entry.display_name,
            cost_multiplier: entry.cost_multiplier,
            time_multiplier: entry.time_multiplier,
        }
    }
}

impl From<&PostProcessEntry> for PostProcessOption {
    fn from(entry: &PostProcessEntry) -> Self {
        Self {
            id: entry.id,
            display_name: entry.display_name,
            flat_cost: entry.flat_cost,
            added_time_hours: entry.added_time_hours,
        }
    }
}

// ==================== Quote intake ====================

/// Kind of project the customer is quoting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ProjectType {
    Prototype,
    Decoration,
    Replacement,
    Miniature,
    Architectural,
    Industrial,
    Other,
}

/// Turnaround the customer is asking for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Urgency {
    Low,
    #[default]
    Normal,
    High,
    Express,
}

/// Custom-quote intake form
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct QuoteRequest {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    pub project_type: ProjectType,
    pub description: String,
    #[serde(default = "default_quote_quantity")]
    #[schema(minimum = 1, default = 1)]
    pub quantity: i64,
    #[serde(default)]
    pub urgency: Urgency,
}

fn default_quote_quantity() -> i64 {
    1
}

/// Acknowledgment for a submitted quote request
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct QuoteResponse {
    pub reference: Uuid,
    #[schema(value_type = String, example = "received")]
    pub status: &'static str,
    #[schema(value_type = String)]
    pub message: &'static str,
    pub received_at: DateTime<Utc>,
}

// ==================== System ====================

/// Liveness probe payload
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    #[schema(value_type = String, example = "ok")]
    pub status: &'static str,
    #[schema(value_type = String)]
    pub version: &'static str,
}

// Runtime catalog types
//
// These types are embedded in the binary and used for catalog lookup at
// runtime. Entry data lives in `data.rs`.

use serde::{Deserialize, Serialize};

use pf_types::{AppError, AppResult};

/// Print material identifier
///
/// Wire ids match the storefront's select values (`pla`, `pla_plus`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum MaterialId {
    Pla,
    PlaPlus,
    Petg,
    Abs,
    Tpu,
    Resin,
}

impl MaterialId {
    pub const ALL: [MaterialId; 6] = [
        Self::Pla,
        Self::PlaPlus,
        Self::Petg,
        Self::Abs,
        Self::Tpu,
        Self::Resin,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pla => "pla",
            Self::PlaPlus => "pla_plus",
            Self::Petg => "petg",
            Self::Abs => "abs",
            Self::Tpu => "tpu",
            Self::Resin => "resin",
        }
    }

    /// Parse a wire id, failing with `UnknownCatalogEntry` if absent
    pub fn parse(id: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.as_str() == id)
            .ok_or_else(|| AppError::UnknownCatalogEntry {
                kind: "material",
                id: id.to_string(),
            })
    }
}

impl std::fmt::Display for MaterialId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for MaterialId {
    type Error = AppError;

    fn try_from(id: String) -> AppResult<Self> {
        Self::parse(&id)
    }
}

/// Print quality tier identifier (layer resolution)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum QualityId {
    Draft,
    Standard,
    High,
    Ultra,
}

impl QualityId {
    pub const ALL: [QualityId; 4] = [Self::Draft, Self::Standard, Self::High, Self::Ultra];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Standard => "standard",
            Self::High => "high",
            Self::Ultra => "ultra",
        }
    }

    /// Parse a wire id, failing with `UnknownCatalogEntry` if absent
    pub fn parse(id: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|q| q.as_str() == id)
            .ok_or_else(|| AppError::UnknownCatalogEntry {
                kind: "quality",
                id: id.to_string(),
            })
    }
}

impl std::fmt::Display for QualityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for QualityId {
    type Error = AppError;

    fn try_from(id: String) -> AppResult<Self> {
        Self::parse(&id)
    }
}

/// Post-processing option identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum PostProcessId {
    None,
    Sanding,
    Painting,
    Assembly,
    Premium,
}

impl PostProcessId {
    pub const ALL: [PostProcessId; 5] = [
        Self::None,
        Self::Sanding,
        Self::Painting,
        Self::Assembly,
        Self::Premium,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sanding => "sanding",
            Self::Painting => "painting",
            Self::Assembly => "assembly",
            Self::Premium => "premium",
        }
    }

    /// Parse a wire id, failing with `UnknownCatalogEntry` if absent
    pub fn parse(id: &str) -> AppResult<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == id)
            .ok_or_else(|| AppError::UnknownCatalogEntry {
                kind: "post_process",
                id: id.to_string(),
            })
    }
}

impl std::fmt::Display for PostProcessId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for PostProcessId {
    type Error = AppError;

    fn try_from(id: String) -> AppResult<Self> {
        Self::parse(&id)
    }
}

/// A print material with its published rate
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MaterialEntry {
    pub id: MaterialId,
    pub display_name: &'static str,
    /// Currency per cm³ of printed volume
    pub cost_per_cm3: f64,
    /// Dimensionless scaling of print time relative to PLA
    pub print_time_factor: f64,
}

/// A print quality tier (layer resolution) with its cost/time scaling
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QualityEntry {
    pub id: QualityId,
    pub display_name: &'static str,
    pub cost_multiplier: f64,
    pub time_multiplier: f64,
}

/// A post-processing option with its flat cost and added time
#[derive(Debug, Clone, Copy, Serialize)]
pub struct PostProcessEntry {
    pub id: PostProcessId,
    pub display_name: &'static str,
    pub flat_cost: f64,
    pub added_time_hours: f64,
}

/// The full pricing catalog
///
/// One instance exists for the lifetime of the process ([`crate::CATALOG`]);
/// it is read-only and safe to share freely.
#[derive(Debug, Clone, Copy)]
pub struct PricingCatalog {
    pub materials: &'static [MaterialEntry],
    pub quality_tiers: &'static [QualityEntry],
    pub post_processing: &'static [PostProcessEntry],
}

impl PricingCatalog {
    /// The process-wide catalog instance
    pub fn global() -> &'static PricingCatalog {
        &crate::data::CATALOG
    }

    /// Entry for a material id. Total: every id variant has an entry.
    pub fn material(&self, id: MaterialId) -> &MaterialEntry {
        &self.materials[id as usize]
    }

    /// Entry for a quality tier id. Total: every id variant has an entry.
    pub fn quality(&self, id: QualityId) -> &QualityEntry {
        &self.quality_tiers[id as usize]
    }

    /// Entry for a post-processing id. Total: every id variant has an entry.
    pub fn post_process(&self, id: PostProcessId) -> &PostProcessEntry {
        &self.post_processing[id as usize]
    }

    /// Resolve a material by wire id
    pub fn resolve_material(&self, id: &str) -> AppResult<&MaterialEntry> {
        Ok(self.material(MaterialId::parse(id)?))
    }

    /// Resolve a quality tier by wire id
    pub fn resolve_quality(&self, id: &str) -> AppResult<&QualityEntry> {
        Ok(self.quality(QualityId::parse(id)?))
    }

    /// Resolve a post-processing option by wire id
    pub fn resolve_post_process(&self, id: &str) -> AppResult<&PostProcessEntry> {
        Ok(self.post_process(PostProcessId::parse(id)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_ids() {
        assert_eq!(MaterialId::parse("pla").unwrap(), MaterialId::Pla);
        assert_eq!(MaterialId::parse("pla_plus").unwrap(), MaterialId::PlaPlus);
        assert_eq!(QualityId::parse("ultra").unwrap(), QualityId::Ultra);
        assert_eq!(PostProcessId::parse("none").unwrap(), PostProcessId::None);
    }

    #[test]
    fn test_parse_unknown_id_names_kind_and_id() {
        let err = MaterialId::parse("wood").unwrap_err();
        assert_eq!(err.to_string(), "unknown material id: wood");

        let err = QualityId::parse("extreme").unwrap_err();
        assert_eq!(err.to_string(), "unknown quality id: extreme");

        let err = PostProcessId::parse("plating").unwrap_err();
        assert_eq!(err.to_string(), "unknown post_process id: plating");
    }

    #[test]
    fn test_wire_id_round_trip() {
        for id in MaterialId::ALL {
            assert_eq!(MaterialId::parse(id.as_str()).unwrap(), id);
        }
        for id in QualityId::ALL {
            assert_eq!(QualityId::parse(id.as_str()).unwrap(), id);
        }
        for id in PostProcessId::ALL {
            assert_eq!(PostProcessId::parse(id.as_str()).unwrap(), id);
        }
    }

    #[test]
    fn test_deserialize_goes_through_parse() {
        let id: MaterialId = serde_json::from_str("\"petg\"").unwrap();
        assert_eq!(id, MaterialId::Petg);

        let err = serde_json::from_str::<MaterialId>("\"carbon\"").unwrap_err();
        assert!(err.to_string().contains("unknown material id: carbon"));
    }
}

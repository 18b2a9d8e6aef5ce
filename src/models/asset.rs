use serde::{Deserialize, Serialize};

/// Conventional status values. The update operation accepts any string, so
/// these are documentation of the two states the system actually uses, not an
/// enforced enumeration.
pub const STATUS_IN_USE: &str = "in_use";
pub const STATUS_DECOMMISSIONED: &str = "decommissioned";

/// A tracked piece of equipment. Identified by its inventory number; the
/// collection assumes invnumbers are unique but never enforces it, so lookups
/// are first-match in storage order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TechAsset {
    pub invnumber: i64,
    pub devtype: String,
    /// May be empty for assets not assigned to a department.
    pub department: String,
    /// Embedded by value; zero-valued (all-empty) for unassigned assets.
    pub user: Person,
    pub status: String,
}

/// The person an asset is assigned to. Descriptive only — no identity or
/// lifecycle of its own.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Person {
    pub surname: String,
    pub firstname: String,
    pub patronym: String,
    pub position: String,
}

// ── Request payloads ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateStatus {
    pub status: String,
}

// ── Query parameters ──────────────────────────────────────────────────────────

#[derive(Debug, Deserialize, Default)]
pub struct AssetFilters {
    pub status: Option<String>,
}

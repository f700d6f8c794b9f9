//! Types for the location reference dataset.
//!
//! The dataset is a four-level tree (country → state → district → city)
//! fetched once per session from the host's `/countries` endpoint and treated
//! as immutable afterwards. Lookups over it live in [`crate::resolver`].

use serde::{Deserialize, Serialize};

/// A country and its states.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Country {
    pub name: String,
    pub states: Vec<State>,
}

/// A state and its districts.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct State {
    pub name: String,
    pub districts: Vec<District>,
}

/// A district and its city names.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct District {
    pub name: String,
    pub cities: Vec<String>,
}

/// A dropdown option pair as consumed by the host's select widgets.
///
/// Label and value are always the bare location name; the pair shape is kept
/// so the host can bind options without reshaping.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct SelectOption {
    pub label: String,
    pub value: String,
}

impl SelectOption {
    pub fn from_name(name: &str) -> Self {
        Self {
            label: name.to_string(),
            value: name.to_string(),
        }
    }
}

/// Lifecycle of the one-time dataset fetch.
///
/// The session starts `Pending`. The host either delivers the fetched JSON
/// (`Ready`) or reports the request failed (`Failed`). `Pending` and `Failed`
/// are indistinguishable to the resolver: both read as "no dataset" and yield
/// empty option lists. There is no retry; a failed fetch stays failed until
/// the session is torn down.
#[derive(Debug, Clone, PartialEq)]
pub enum DatasetStatus {
    Pending,
    Ready(Vec<Country>),
    Failed,
}

impl DatasetStatus {
    /// The dataset, when the fetch has succeeded.
    pub fn data(&self) -> Option<&[Country]> {
        match self {
            DatasetStatus::Ready(countries) => Some(countries),
            DatasetStatus::Pending | DatasetStatus::Failed => None,
        }
    }

    /// Status label reported to the host (`pending`, `ready` or `failed`).
    pub fn label(&self) -> &'static str {
        match self {
            DatasetStatus::Pending => "pending",
            DatasetStatus::Ready(_) => "ready",
            DatasetStatus::Failed => "failed",
        }
    }
}

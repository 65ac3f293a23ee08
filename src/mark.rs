use crate::{
    core::Year,
    data::LIMITS,
    error::{BankError, BankResult},
};

pub const CARBON_BLOB: &str = "carbon";
pub const SINK_BLOB: &str = "sink";
pub const FUTURE_BLOB: &str = "future";

/// A named circular element whose radius encodes an emissions quantity in
/// gigatonnes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Blob {
    pub id: String,
    pub emissions: f64,
}

impl Blob {
    pub fn new(id: impl Into<String>, emissions: f64) -> Self {
        Self {
            id: id.into(),
            emissions,
        }
    }
}

/// Future-emissions extrapolation policy for an extended chart.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtendMode {
    Steady,
    Reduce,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ChartSpec {
    pub min_year: Year,
    pub max_year: Year,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stop_at: Option<Year>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extend: Option<ExtendMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub steady: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub label_years: Vec<Year>,
}

impl ChartSpec {
    pub fn validate(&self) -> BankResult<()> {
        if self.min_year > self.max_year {
            return Err(BankError::validation("chart min_year must be <= max_year"));
        }
        Ok(())
    }
}

/// Fully-resolved visual state for one narrative panel. `next` is an index
/// into the resolved panel sequence, never an embedded forward pointer.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Mark {
    pub blobs: Vec<Blob>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub limits: Vec<usize>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next: Option<usize>,
}

impl Mark {
    /// The state every panel starts from: a single empty carbon blob.
    pub fn base() -> Self {
        Self {
            blobs: vec![Blob::new(CARBON_BLOB, 0.0)],
            limits: Vec::new(),
            labels: Vec::new(),
            chart: None,
            next: None,
        }
    }

    pub fn blob(&self, id: &str) -> Option<&Blob> {
        self.blobs.iter().find(|b| b.id == id)
    }

    pub fn blob_mut(&mut self, id: &str) -> Option<&mut Blob> {
        self.blobs.iter_mut().find(|b| b.id == id)
    }

    pub fn validate(&self) -> BankResult<()> {
        for (i, blob) in self.blobs.iter().enumerate() {
            if self.blobs[..i].iter().any(|b| b.id == blob.id) {
                return Err(BankError::validation(format!(
                    "duplicate blob id '{}'",
                    blob.id
                )));
            }
        }
        for &idx in &self.limits {
            if idx >= LIMITS.len() {
                return Err(BankError::validation(format!(
                    "limit index {idx} is out of range"
                )));
            }
        }
        if let Some(chart) = &self.chart {
            chart.validate()?;
        }
        Ok(())
    }
}

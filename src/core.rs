use crate::error::{BankError, BankResult};

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Year(pub i32);

/// One historical data point, emissions in raw tonnes.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EmissionsDatum {
    pub year: Year,
    pub emissions: f64,
}

/// Ordered historical emissions record: ascending years, no duplicates.
#[derive(Clone, Debug, PartialEq)]
pub struct EmissionsTable {
    points: Vec<EmissionsDatum>,
}

impl EmissionsTable {
    pub fn new(points: Vec<EmissionsDatum>) -> BankResult<Self> {
        if !points.windows(2).all(|w| w[0].year < w[1].year) {
            return Err(BankError::validation(
                "emissions table must be sorted ascending by year with no duplicate years",
            ));
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[EmissionsDatum] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&EmissionsDatum> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&EmissionsDatum> {
        self.points.last()
    }

    /// Most recent data point at or before `year`.
    pub fn latest_at_or_before(&self, year: Year) -> Option<&EmissionsDatum> {
        let idx = self.points.partition_point(|d| d.year <= year);
        if idx == 0 { None } else { self.points.get(idx - 1) }
    }
}

/// Segment tag for rendered series points.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesColor {
    Known,
    Steady,
    Reduce,
}

/// A rendering-annotated emissions value. Derived, never persisted.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SeriesPoint {
    pub year: Year,
    pub emissions: f64,
    pub color: SeriesColor,
}

use once_cell::sync::Lazy;

use crate::{
    core::{EmissionsDatum, EmissionsTable, Year},
    error::{BankError, BankResult},
};

/// Total lifetime carbon budget in gigatonnes.
pub const DEFAULT_BUDGET: f64 = 1800.0;

/// A warming-limit ring: a fractional share of the total budget.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Limit {
    pub label: &'static str,
    pub gigatonnes: f64,
}

pub const LIMITS: [Limit; 3] = [
    Limit {
        label: "0.5°C",
        gigatonnes: 600.0,
    },
    Limit {
        label: "1°C",
        gigatonnes: 1200.0,
    },
    Limit {
        label: "1.5°C",
        gigatonnes: 1800.0,
    },
];

const EMISSIONS_TSV: &str = include_str!("../data/emissions.tsv");

static HISTORICAL: Lazy<EmissionsTable> = Lazy::new(|| {
    EmissionsTable::from_tsv_reader(EMISSIONS_TSV.as_bytes())
        .expect("embedded emissions table parses")
});

/// The embedded global fossil-CO2 record (year, tonnes per year).
pub fn historical_emissions() -> &'static EmissionsTable {
    &HISTORICAL
}

#[derive(Debug, serde::Deserialize)]
struct TsvRow {
    year: i32,
    emissions: f64,
}

impl EmissionsTable {
    /// Parse a tab-separated `year\temissions` table, e.g. an externally
    /// supplied replacement for the embedded record.
    pub fn from_tsv_reader<R: std::io::Read>(reader: R) -> BankResult<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .delimiter(b'\t')
            .from_reader(reader);

        let mut points = Vec::new();
        for row in rdr.deserialize() {
            let row: TsvRow = row.map_err(|e| BankError::data(format!("bad emissions row: {e}")))?;
            points.push(EmissionsDatum {
                year: Year(row.year),
                emissions: row.emissions,
            });
        }
        Self::new(points)
    }
}

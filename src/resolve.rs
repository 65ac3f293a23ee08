use crate::{
    core::Year,
    data::historical_emissions,
    mark::{Blob, CARBON_BLOB, ChartSpec, ExtendMode, FUTURE_BLOB, Mark, SINK_BLOB},
    snapshot,
};

/// A field that may be authored as a bare scalar or a list; a scalar is
/// treated as a one-element list.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
    One(T),
    Many(Vec<T>),
}

impl<T> OneOrMany<T> {
    pub fn into_vec(self) -> Vec<T> {
        match self {
            Self::One(v) => vec![v],
            Self::Many(vs) => vs,
        }
    }
}

/// Raw per-panel authored fields. Every field is optional: an absent field
/// means "no change", never "reset".
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PanelFields {
    pub preset: Option<String>,
    pub carbon: Option<f64>,
    pub sink: Option<f64>,
    pub future: Option<f64>,
    pub limits: Option<OneOrMany<usize>>,
    pub labels: Option<OneOrMany<String>>,
    pub xmin: Option<i32>,
    pub xmax: Option<i32>,
    pub stopat: Option<i32>,
    pub extend: Option<ExtendMode>,
    pub steady: Option<u32>,
    pub labelyear: Option<OneOrMany<i32>>,
}

/// Resolve one panel's authored fields into a complete Mark.
///
/// The starting point is, in order of preference: the explicit `preset`
/// argument, the panel's own `preset` string (first tried as an encoded
/// snapshot, then as a named preset), and finally [`Mark::base`]. Overrides
/// are sparse patches on top of that.
pub fn resolve_mark(raw: &PanelFields, preset: Option<&Mark>) -> Mark {
    let mut mark = preset
        .cloned()
        .or_else(|| raw.preset.as_deref().and_then(preset_mark))
        .unwrap_or_else(Mark::base);

    // Sink joins at the front, carbon and future at the back.
    if let Some(emissions) = raw.sink {
        upsert_front(&mut mark.blobs, SINK_BLOB, emissions);
    }
    if let Some(emissions) = raw.carbon {
        upsert_back(&mut mark.blobs, CARBON_BLOB, emissions);
    }
    if let Some(emissions) = raw.future {
        upsert_back(&mut mark.blobs, FUTURE_BLOB, emissions);
    }

    if let Some(limits) = raw.limits.clone() {
        mark.limits = limits.into_vec();
    }
    if let Some(labels) = raw.labels.clone() {
        mark.labels = labels.into_vec();
    }

    // Chart presence is implicit: xmin/xmax triggers construction, other
    // chart fields only merge into a chart that already exists.
    if raw.xmin.is_some() || raw.xmax.is_some() || mark.chart.is_some() {
        let chart = mark.chart.get_or_insert_with(default_chart);
        if let Some(x) = raw.xmin {
            chart.min_year = Year(x);
        }
        if let Some(x) = raw.xmax {
            chart.max_year = Year(x);
        }
        if let Some(x) = raw.stopat {
            chart.stop_at = Some(Year(x));
        }
        if let Some(extend) = raw.extend {
            chart.extend = Some(extend);
        }
        if let Some(steady) = raw.steady {
            chart.steady = Some(steady);
        }
        if let Some(years) = raw.labelyear.clone() {
            chart.label_years = years.into_vec().into_iter().map(Year).collect();
        }
    }

    mark
}

/// Resolve an ordered panel sequence, threading each mark's `next` as the
/// index of the following mark. The last mark has none.
#[tracing::instrument(skip(panels), fields(count = panels.len()))]
pub fn resolve_panels(panels: &[PanelFields]) -> Vec<Mark> {
    let mut marks: Vec<Mark> = panels.iter().map(|p| resolve_mark(p, None)).collect();
    let len = marks.len();
    for (i, mark) in marks.iter_mut().enumerate() {
        if i + 1 < len {
            mark.next = Some(i + 1);
        }
    }
    marks
}

fn preset_mark(reference: &str) -> Option<Mark> {
    match snapshot::decode_mark(reference) {
        Ok(mark) => Some(mark),
        Err(_) => named_preset(reference),
    }
}

fn named_preset(name: &str) -> Option<Mark> {
    match name {
        "default" => Some(Mark::base()),
        "blank" => Some(Mark {
            blobs: Vec::new(),
            ..Mark::base()
        }),
        "chart" => Some(Mark {
            chart: Some(default_chart()),
            ..Mark::base()
        }),
        _ => None,
    }
}

fn default_chart() -> ChartSpec {
    let table = historical_emissions();
    ChartSpec {
        min_year: table.first().map(|d| d.year).unwrap_or(Year(1850)),
        max_year: table.last().map(|d| d.year).unwrap_or(Year(2019)),
        stop_at: None,
        extend: None,
        steady: None,
        label_years: Vec::new(),
    }
}

fn upsert_front(blobs: &mut Vec<Blob>, id: &str, emissions: f64) {
    match blobs.iter_mut().find(|b| b.id == id) {
        Some(blob) => blob.emissions = emissions,
        None => blobs.insert(0, Blob::new(id, emissions)),
    }
}

fn upsert_back(blobs: &mut Vec<Blob>, id: &str, emissions: f64) {
    match blobs.iter_mut().find(|b| b.id == id) {
        Some(blob) => blob.emissions = emissions,
        None => blobs.push(Blob::new(id, emissions)),
    }
}

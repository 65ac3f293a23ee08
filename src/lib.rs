#![forbid(unsafe_code)]

pub mod budget;
pub mod core;
pub mod data;
pub mod error;
pub mod eval;
pub mod mark;
pub mod project;
pub mod resolve;
pub mod series;
pub mod snapshot;
pub mod tween;

pub use budget::Bank;
pub use core::{EmissionsDatum, EmissionsTable, SeriesColor, SeriesPoint, Year};
pub use data::{DEFAULT_BUDGET, LIMITS, Limit, historical_emissions};
pub use error::{BankError, BankResult};
pub use eval::{blob_transition, materialize};
pub use mark::{Blob, ChartSpec, ExtendMode, Mark};
pub use resolve::{OneOrMany, PanelFields, resolve_mark, resolve_panels};
pub use series::chart_series;
pub use snapshot::{MemoryStore, SnapshotStore, decode_mark, encode_mark};
pub use tween::{
    Keyframe, Tween, TweenableProperty, interpolate, keyframes_bracketing, tween_keyframes,
};

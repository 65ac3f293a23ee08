use crate::{
    budget::Bank,
    mark::{Blob, CARBON_BLOB, FUTURE_BLOB, Mark},
};

/// Apply chart-driven blob overrides to a mark before rendering.
///
/// A chart that stops at a year pins the carbon blob to the budget used by
/// that year; if the chart also extends into a projection, the future blob
/// grows to the full budget. Marks without a chart pass through unchanged.
#[tracing::instrument(skip(mark, bank))]
pub fn materialize(mark: &Mark, bank: &Bank) -> Mark {
    let mut mark = mark.clone();

    let Some((stop_at, extended)) = mark
        .chart
        .as_ref()
        .and_then(|c| c.stop_at.map(|y| (y, c.extend.is_some())))
    else {
        return mark;
    };

    let used = bank.used_budget_as_of(stop_at);
    if let Some(blob) = mark.blob_mut(CARBON_BLOB) {
        blob.emissions = used;
    }
    if extended {
        if let Some(blob) = mark.blob_mut(FUTURE_BLOB) {
            blob.emissions = bank.budget();
        }
    }

    mark
}

/// Per-blob emissions between a mark and its successor at `progress` in
/// [0, 1]. Blobs are matched by id; a blob with no counterpart in the next
/// mark holds its value.
pub fn blob_transition(current: &Mark, next: &Mark, progress: f64) -> Vec<Blob> {
    let t = progress.clamp(0.0, 1.0);
    current
        .blobs
        .iter()
        .map(|blob| {
            let target = next
                .blob(&blob.id)
                .map(|b| b.emissions)
                .unwrap_or(blob.emissions);
            Blob::new(
                blob.id.clone(),
                blob.emissions + (target - blob.emissions) * t,
            )
        })
        .collect()
}

use crate::groundstation::TimeWindow;

/// Concatenates per-station lists into one list ordered by start time.
/// Records with equal start times keep their station order.
pub fn merge_by_start<T: TimeWindow>(per_station: Vec<Vec<T>>) -> Vec<T> {
    let mut merged: Vec<T> = per_station.into_iter().flatten().collect();
    merged.sort_by_key(|r| r.start());
    merged
}

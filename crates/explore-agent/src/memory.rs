//! Turns a reflection signal plus the turn's object into a `MemoryRecord`
//! update. Each list is insertion-ordered and deduplicated — repeating the
//! same topic doesn't grow the record, it just doesn't move it.

use crate::reflection::ReflectionSignal;
use chrono::Utc;
use explore_core::MemoryRecord;

fn push_unique(list: &mut Vec<String>, value: &str) {
    if !list.iter().any(|existing| existing == value) {
        list.push(value.to_string());
    }
}

/// Apply one turn's signal to `record` in place, keyed on `object_name`.
///
/// Mirrors the memory branching: interest with a named object goes to
/// interested topics; confusion goes to not-understood; interest without a
/// named object just counts as something understood.
pub fn apply(record: &mut MemoryRecord, object_name: &str, signal: ReflectionSignal) {
    match signal {
        ReflectionSignal::Interested if !object_name.trim().is_empty() => {
            push_unique(&mut record.interested_topics, object_name)
        }
        ReflectionSignal::Interested => push_unique(&mut record.understood_points, object_name),
        ReflectionSignal::Confused => push_unique(&mut record.not_understood_points, object_name),
    }
    record.updated_at = Some(Utc::now());
}

//! Ordering and truncation of query results.

use std::cmp::Ordering;

use crate::types::ResultRecord;

/// Sort `records` best-first and keep at most `limit` of them.
///
/// Records are ordered by result descending; equal results are ordered by
/// `tie_break` descending. The secondary key must be unique within `records`
/// (level IDs for a user view, user IDs for a level view), which makes the
/// output independent of the input order.
pub(crate) fn top_records<K, F>(
    mut records: Vec<ResultRecord>,
    limit: usize,
    tie_break: F,
) -> Vec<ResultRecord>
where
    K: Ord,
    F: Fn(&ResultRecord) -> K,
{
    if limit == 0 {
        records.clear();
        return records;
    }

    let best_first = |a: &ResultRecord, b: &ResultRecord| -> Ordering {
        b.result
            .cmp(&a.result)
            .then_with(|| tie_break(b).cmp(&tie_break(a)))
    };

    // Partition around the limit first so only the kept prefix gets sorted.
    if records.len() > limit {
        records.select_nth_unstable_by(limit - 1, best_first);
        records.truncate(limit);
    }
    records.sort_unstable_by(best_first);
    records
}

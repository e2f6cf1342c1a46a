//! Sorting and filtering collections by a compiled accessor.
//!
//! Keys are computed once per item, then compared with [`total_order`], so items whose
//! key is `null` sort first.

use itertools::Itertools;
use log::debug;
use pathlinq_core::{AccessError, Accessor, total_order};
use serde::Serialize;
use serde_json::Value;

/// Stable-sorts `items` by the value `accessor` reads from each of them.
///
/// All keys are evaluated before anything moves; if one evaluation fails, `items` is
/// left untouched. Each key goes through [`Accessor::evaluate`], which serializes the whole
/// item; when the items are sorted repeatedly, project them once and compute keys with
/// [`Accessor::evaluate_value`] instead.
pub fn sort_by_accessor<T: Serialize>(
    items: &mut Vec<T>,
    accessor: &Accessor<T>,
) -> Result<(), AccessError> {
    let keys: Vec<Value> = items
        .iter()
        .map(|item| accessor.evaluate(item))
        .try_collect()?;
    debug!("Sorting {} items by `{}`", keys.len(), accessor.path());
    apply_order(items, keys);
    Ok(())
}

/// Like [`sort_by_accessor`], but evaluates the keys on the rayon thread pool.
#[cfg(feature = "rayon")]
pub fn par_sort_by_accessor<T: Serialize + Sync>(
    items: &mut Vec<T>,
    accessor: &Accessor<T>,
) -> Result<(), AccessError> {
    use rayon::prelude::*;

    let keys = items
        .par_iter()
        .map(|item| accessor.evaluate(item))
        .collect::<Result<Vec<Value>, AccessError>>()?;
    debug!("Sorting {} items by `{}` (parallel keys)", keys.len(), accessor.path());
    apply_order(items, keys);
    Ok(())
}

fn apply_order<T>(items: &mut Vec<T>, keys: Vec<Value>) {
    let sorted = std::mem::take(items)
        .into_iter()
        .zip(keys)
        .sorted_by(|(_, a), (_, b)| total_order(a, b))
        .map(|(item, _)| item)
        .collect();
    *items = sorted;
}

/// Returns the items whose key satisfies `predicate`, in their original order.
///
/// Like [`sort_by_accessor`], every key serializes its whole item.
pub fn filter_by_accessor<'a, T: Serialize>(
    items: &'a [T],
    accessor: &Accessor<T>,
    predicate: impl Fn(&Value) -> bool,
) -> Result<Vec<&'a T>, AccessError> {
    items
        .iter()
        .map(|item| {
            accessor
                .evaluate(item)
                .map(|key| predicate(&key).then_some(item))
        })
        .flatten_ok()
        .try_collect()
}

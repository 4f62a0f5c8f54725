//! Multivalue harvesting from neighbor rows
//!
//! Comma-separated cells hold lists of interests. Given a target row
//! and its ranked neighbors, this module counts how often each interest
//! appears among the neighbors, drops everything the target already
//! holds, and returns the most frequent remainder.

use ahash::{AHashMap, AHashSet};
use friendlens_core::{Column, Result, Table, Value};

/// Split a cell into trimmed, non-empty tokens
fn tokens(cell: &Value) -> Vec<String> {
    if cell.is_null() {
        return Vec::new();
    }
    cell.to_string()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Count interests across neighbors and return the top k new ones
///
/// The exclusion set is the union of the target's tokens across every
/// listed column. Counting walks neighbors in their given order and
/// columns in their declared order, so ties resolve to the interest
/// encountered first. An empty table, a target absent from the table,
/// or an empty neighbor list yields an empty result.
///
/// # Errors
/// Returns an error if a listed column is absent from the table.
pub fn aggregate_multivalue(
    table: &Table,
    id_column: &str,
    target: &str,
    neighbors: &[String],
    columns: &[String],
    k: usize,
) -> Result<Vec<String>> {
    if table.is_empty() {
        return Ok(Vec::new());
    }
    let harvest: Vec<&Column> = columns
        .iter()
        .map(|name| table.column(name))
        .collect::<Result<_>>()?;
    let ids = table.column(id_column)?;
    let rendered: Vec<String> = ids.values().iter().map(Value::to_string).collect();

    let Some(target_row) = rendered.iter().position(|id| id == target) else {
        return Ok(Vec::new());
    };

    let mut held = AHashSet::new();
    for column in &harvest {
        if let Some(cell) = column.get(target_row) {
            held.extend(tokens(cell));
        }
    }

    let mut entries: Vec<(String, usize)> = Vec::new();
    let mut index: AHashMap<String, usize> = AHashMap::new();
    for neighbor in neighbors {
        let Some(row) = rendered.iter().position(|id| id == neighbor) else {
            continue;
        };
        for column in &harvest {
            let Some(cell) = column.get(row) else {
                continue;
            };
            for token in tokens(cell) {
                if held.contains(&token) {
                    continue;
                }
                match index.get(&token) {
                    Some(&slot) => entries[slot].1 += 1,
                    None => {
                        index.insert(token.clone(), entries.len());
                        entries.push((token, 1));
                    }
                }
            }
        }
    }

    entries.sort_by(|a, b| b.1.cmp(&a.1));
    entries.truncate(k);
    Ok(entries.into_iter().map(|(token, _)| token).collect())
}

//! Ingredient reconciliation for recipe updates.
//!
//! A recipe update that carries an `ingredients` list merges it into the
//! recipe's current set by name: names not yet linked to the recipe are
//! added, names already linked are left alone, and ingredients missing from
//! the list are kept.

use std::collections::HashSet;

/// Return the names from `incoming` that must be created for a recipe that
/// already owns `existing`.
///
/// Comparison is exact (case-sensitive). A name repeated within `incoming`
/// is returned once, at its first position.
pub fn names_to_add<'a>(existing: &[&str], incoming: &'a [String]) -> Vec<&'a str> {
    let mut seen: HashSet<&str> = existing.iter().copied().collect();
    incoming
        .iter()
        .map(String::as_str)
        .filter(|name| seen.insert(*name))
        .collect()
}

//! Frequency helpers shared by the reporters.

use std::collections::HashMap;
use std::hash::Hash;

/// Occurrences per distinct value, most frequent first.
/// Values with equal counts keep the order of their first appearance.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut slots: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for v in values {
        match slots.get(&v) {
            Some(&slot) => counts[slot].1 += 1,
            None => {
                slots.insert(v.clone(), counts.len());
                counts.push((v, 1));
            }
        }
    }

    // stable: ties stay in first-appearance order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most common value; ties go to the one seen first. `None` when empty.
pub fn mode<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    value_counts(values).into_iter().next().map(|(v, _)| v)
}

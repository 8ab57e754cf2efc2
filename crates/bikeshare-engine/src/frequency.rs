use std::collections::HashMap;
use std::hash::Hash;

/// Occurrence counts, most frequent first. Equal counts keep the order in
/// which each value was first seen.
pub fn value_counts<T, I>(values: I) -> Vec<(T, usize)>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    let mut positions: HashMap<T, usize> = HashMap::new();
    let mut counts: Vec<(T, usize)> = Vec::new();

    for value in values {
        match positions.get(&value) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(value.clone(), counts.len());
                counts.push((value, 1));
            }
        }
    }

    // stable: ties stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

/// Most frequent value; ties go to the value seen first. `None` when empty.
pub fn first_mode<T, I>(values: I) -> Option<T>
where
    I: IntoIterator<Item = T>,
    T: Eq + Hash + Clone,
{
    value_counts(values).into_iter().next().map(|(value, _)| value)
}

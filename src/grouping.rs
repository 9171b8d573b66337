use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered "group by": each key maps to one accumulator, and keys
/// iterate in the order they were first seen. Sorting a grouped table with a
/// stable sort therefore keeps ties in encounter order.
#[derive(Debug, Clone)]
pub struct Grouped<K, A> {
    index: HashMap<K, usize>,
    groups: Vec<(K, A)>,
}

impl<K, A> Default for Grouped<K, A> {
    fn default() -> Self {
        Self {
            index: HashMap::new(),
            groups: Vec::new(),
        }
    }
}

impl<K: Eq + Hash + Clone, A: Default> Grouped<K, A> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold `items` into one accumulator per key.
    pub fn fold<T>(
        items: impl IntoIterator<Item = T>,
        mut key: impl FnMut(&T) -> K,
        mut step: impl FnMut(&mut A, &T),
    ) -> Self {
        let mut out = Self::new();
        for item in items {
            let acc = out.entry(key(&item));
            step(acc, &item);
        }
        out
    }

    pub fn entry(&mut self, key: K) -> &mut A {
        let idx = match self.index.get(&key) {
            Some(idx) => *idx,
            None => {
                let idx = self.groups.len();
                self.index.insert(key.clone(), idx);
                self.groups.push((key, A::default()));
                idx
            }
        };
        &mut self.groups[idx].1
    }
}

impl<K: Eq + Hash, A> Grouped<K, A> {
    pub fn get<Q>(&self, key: &Q) -> Option<&A>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.get(key).map(|idx| &self.groups[*idx].1)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.groups.iter().map(|(k, _)| k)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &A)> {
        self.groups.iter().map(|(k, a)| (k, a))
    }
}

impl<K: Eq + Hash, A: Copy + Default> Grouped<K, A> {
    /// Re-index lookup: absent keys read as the accumulator's zero value.
    pub fn value_or_zero<Q>(&self, key: &Q) -> A
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.get(key).copied().unwrap_or_default()
    }
}

impl<K, A> IntoIterator for Grouped<K, A> {
    type Item = (K, A);
    type IntoIter = std::vec::IntoIter<(K, A)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Count rows per key, keeping first-encounter order.
pub fn count_by<T, K: Eq + Hash + Clone>(
    items: impl IntoIterator<Item = T>,
    key: impl FnMut(&T) -> K,
) -> Grouped<K, usize> {
    Grouped::fold(items, key, |acc, _| *acc += 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_keep_first_encounter_order() {
        let grouped = count_by(["b", "a", "b", "c", "a", "b"], |s| s.to_string());
        let keys: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["b", "a", "c"]);
        assert_eq!(grouped.value_or_zero("b"), 3);
        assert_eq!(grouped.value_or_zero("z"), 0);
    }

    #[test]
    fn fold_sums_per_key() {
        let rows = [("x", 4u32), ("y", 1), ("x", 6)];
        let grouped: Grouped<&str, u32> = Grouped::fold(rows, |r| r.0, |acc, r| *acc += r.1);
        assert_eq!(grouped.get("x"), Some(&10));
        assert_eq!(grouped.get("y"), Some(&1));
        assert_eq!(grouped.len(), 2);
    }
}

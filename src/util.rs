use std::{collections::HashMap, hash::Hash};

use derivative::Derivative;

/// A map that iterates in first-insertion order.  Replacing the value of an
/// existing key keeps the key's original position.
#[derive(Derivative)]
#[derivative(
    Clone(bound = "K: Clone, V: Clone"),
    Debug(bound = "K: std::fmt::Debug, V: std::fmt::Debug"),
    Default(bound = "")
)]
pub struct InsertionOrderedMap<K, V> {
    entries: Vec<(K, V)>,
    positions: HashMap<K, usize>,
}

impl<K, V> InsertionOrderedMap<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Inserts a value, returning the value it replaced.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        match self.positions.get(&key) {
            Some(&position) => Some(std::mem::replace(&mut self.entries[position].1, value)),
            None => {
                self.positions.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.positions
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.positions.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }
}

// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Identity types for neurons and neuron selections

use core::fmt;

/// Neuron ID: the neuron's position in its network, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NeuronId(pub usize);

impl NeuronId {
    #[inline]
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NeuronId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Neuron({})", self.0)
    }
}

impl From<usize> for NeuronId {
    fn from(index: usize) -> Self {
        NeuronId(index)
    }
}

/// One or many neurons, as accepted by wiring and bulk operations
///
/// Wiring helpers take `impl Into<NeuronSet>` so a caller can pass a single
/// id, a slice, a vector or an array without converting first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NeuronSet(Vec<NeuronId>);

impl NeuronSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ids(&self) -> &[NeuronId] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, id: NeuronId) -> bool {
        self.0.contains(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = NeuronId> + '_ {
        self.0.iter().copied()
    }
}

impl From<NeuronId> for NeuronSet {
    fn from(id: NeuronId) -> Self {
        NeuronSet(vec![id])
    }
}

impl From<&NeuronId> for NeuronSet {
    fn from(id: &NeuronId) -> Self {
        NeuronSet(vec![*id])
    }
}

impl From<Vec<NeuronId>> for NeuronSet {
    fn from(ids: Vec<NeuronId>) -> Self {
        NeuronSet(ids)
    }
}

impl From<&Vec<NeuronId>> for NeuronSet {
    fn from(ids: &Vec<NeuronId>) -> Self {
        NeuronSet(ids.clone())
    }
}

impl From<&[NeuronId]> for NeuronSet {
    fn from(ids: &[NeuronId]) -> Self {
        NeuronSet(ids.to_vec())
    }
}

impl<const N: usize> From<[NeuronId; N]> for NeuronSet {
    fn from(ids: [NeuronId; N]) -> Self {
        NeuronSet(ids.to_vec())
    }
}

impl FromIterator<NeuronId> for NeuronSet {
    fn from_iter<I: IntoIterator<Item = NeuronId>>(iter: I) -> Self {
        NeuronSet(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neuron_id_display() {
        assert_eq!(NeuronId(4).to_string(), "Neuron(4)");
    }

    #[test]
    fn test_neuron_set_conversions() {
        let single: NeuronSet = NeuronId(2).into();
        assert_eq!(single.ids(), &[NeuronId(2)]);

        let ids = vec![NeuronId(0), NeuronId(1)];
        let from_slice: NeuronSet = ids[..].into();
        let from_vec: NeuronSet = (&ids).into();
        assert_eq!(from_slice, from_vec);
        assert!(from_vec.contains(NeuronId(1)));
        assert!(!from_vec.contains(NeuronId(2)));

        let collected: NeuronSet = (0..3).map(NeuronId).collect();
        assert_eq!(collected.len(), 3);
    }
}

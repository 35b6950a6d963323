// Copyright 2025 Neuraville Inc.
// SPDX-License-Identifier: Apache-2.0

//! Activation time series produced by [`Network::run`](crate::Network::run)
//!
//! Rows are ticks, columns are neurons in creation order. Each row is an
//! independent copy of the network's activation vector after that tick.

use std::io::{self, Write};

use ndarray::Array2;
use netsy_neural::{NetsyError, NeuronId, Result};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ActivationSeries {
    names: Vec<String>,
    rows: Vec<Vec<f64>>,
}

impl ActivationSeries {
    /// Empty series with one column per name
    pub fn new(names: Vec<String>) -> Self {
        Self {
            names,
            rows: Vec::new(),
        }
    }

    /// Append one tick's snapshot
    pub fn push(&mut self, snapshot: Vec<f64>) -> Result<()> {
        if snapshot.len() != self.names.len() {
            return Err(NetsyError::ConnectivityMismatch {
                expected: self.names.len(),
                actual: snapshot.len(),
            });
        }
        self.rows.push(snapshot);
        Ok(())
    }

    /// Recorded ticks
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn neuron_count(&self) -> usize {
        self.names.len()
    }

    /// Display names of the recorded neurons
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Snapshot of every neuron at recorded tick `t` (0-based)
    pub fn tick(&self, t: usize) -> Option<&[f64]> {
        self.rows.get(t).map(Vec::as_slice)
    }

    pub fn last(&self) -> Option<&[f64]> {
        self.rows.last().map(Vec::as_slice)
    }

    pub fn iter(&self) -> impl Iterator<Item = &[f64]> + '_ {
        self.rows.iter().map(Vec::as_slice)
    }

    /// Trajectory of a single neuron
    pub fn neuron(&self, id: NeuronId) -> Result<Vec<f64>> {
        let count = self.neuron_count();
        if id.index() >= count {
            return Err(NetsyError::NeuronOutOfRange {
                index: id.index(),
                count,
            });
        }
        Ok(self.rows.iter().map(|row| row[id.index()]).collect())
    }

    /// Neuron-major view: one trajectory per neuron
    pub fn by_neuron(&self) -> Vec<Vec<f64>> {
        (0..self.neuron_count())
            .map(|n| self.rows.iter().map(|row| row[n]).collect())
            .collect()
    }

    /// Ticks × neurons matrix
    pub fn to_array(&self) -> Array2<f64> {
        Array2::from_shape_fn((self.len(), self.neuron_count()), |(t, n)| self.rows[t][n])
    }

    /// Write as CSV: a header of neuron names, then one line per tick
    pub fn write_csv<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let header: Vec<String> = self.names.iter().map(|n| csv_field(n)).collect();
        writeln!(writer, "tick,{}", header.join(","))?;
        for (t, row) in self.rows.iter().enumerate() {
            let values: Vec<String> = row.iter().map(f64::to_string).collect();
            writeln!(writer, "{},{}", t, values.join(","))?;
        }
        writer.flush()
    }
}

fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ActivationSeries {
        let mut series = ActivationSeries::new(vec!["[N] a".into(), "[N] b".into()]);
        series.push(vec![1.0, 2.0]).unwrap();
        series.push(vec![3.0, 4.0]).unwrap();
        series.push(vec![5.0, 6.0]).unwrap();
        series
    }

    #[test]
    fn test_views_agree() {
        let series = sample();
        assert_eq!(series.len(), 3);
        assert_eq!(series.tick(1), Some(&[3.0, 4.0][..]));
        assert_eq!(series.neuron(NeuronId(1)).unwrap(), vec![2.0, 4.0, 6.0]);
        assert_eq!(series.by_neuron()[0], vec![1.0, 3.0, 5.0]);

        let array = series.to_array();
        assert_eq!(array.dim(), (3, 2));
        assert_eq!(array[[2, 0]], 5.0);
    }

    #[test]
    fn test_rejects_mismatched_snapshot() {
        let mut series = sample();
        assert!(series.push(vec![1.0]).is_err());
        assert_eq!(series.len(), 3);
        assert!(series.neuron(NeuronId(2)).is_err());
    }

    #[test]
    fn test_csv_output() {
        let mut series = ActivationSeries::new(vec!["x".into(), "a,b".into()]);
        series.push(vec![0.5, -1.0]).unwrap();

        let mut out = Vec::new();
        series.write_csv(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "tick,x,\"a,b\"\n0,0.5,-1\n");
    }
}

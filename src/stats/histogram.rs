//! Weighted histogram of the classifier output.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::math::round_to;
use crate::tables::{ClassFilter, EventClass, ProbabilityTable};
use crate::topology::Topology;

/// Events per class in the placeholder histogram
const IDEAL_EVENTS_PER_CLASS: usize = 50;

/// Output value of an ideally classified background event
const IDEAL_BACKGROUND_OUTPUT: f64 = 0.02;

/// Output value of an ideally classified signal event
const IDEAL_SIGNAL_OUTPUT: f64 = 0.98;

/// Decimals kept on bin edges
const EDGE_DECIMALS: i32 = 10;

/// Slack when deciding whether the width divides [0, 1] evenly
const EDGE_TOLERANCE: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub signal: f64,
    pub background: f64,
}

/// Fixed-width bins over [0, 1]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    pub bin_width: f64,
    pub bins: Vec<HistogramBin>,
}

impl Histogram {
    /// Empty histogram with bins of `bin_width` covering [0, 1]
    ///
    /// Bin edges are rounded so that multiples of the width land exactly on
    /// the slider values. A width that does not divide 1 leaves a narrower
    /// last bin ending at 1.
    pub fn empty(bin_width: f64) -> Self {
        let count = ((1.0 / bin_width - EDGE_TOLERANCE).ceil().max(1.0)) as usize;
        let edge = |i: usize| round_to((i as f64 * bin_width).min(1.0), EDGE_DECIMALS);
        let bins = (0..count)
            .map(|i| HistogramBin {
                lower: edge(i),
                upper: if i + 1 == count { 1.0 } else { edge(i + 1) },
                signal: 0.0,
                background: 0.0,
            })
            .collect();
        Self { bin_width, bins }
    }

    /// Placeholder shown while the model is switched off: a perfectly
    /// separated output with unit weights
    pub fn ideal(filter: ClassFilter, bin_width: f64) -> Self {
        let mut histogram = Self::empty(bin_width);
        let samples = [
            (EventClass::Background, IDEAL_BACKGROUND_OUTPUT),
            (EventClass::Signal, IDEAL_SIGNAL_OUTPUT),
        ];
        for (class, output) in samples {
            if filter.contains(class) {
                for _ in 0..IDEAL_EVENTS_PER_CLASS {
                    histogram.fill(output, class, 1.0);
                }
            }
        }
        histogram
    }

    /// Add a weighted entry; an output of exactly 1.0 lands in the last bin
    pub fn fill(&mut self, output: f64, class: EventClass, weight: f64) {
        let index = self.bin_index(output);
        let bin = &mut self.bins[index];
        match class {
            EventClass::Signal => bin.signal += weight,
            EventClass::Background => bin.background += weight,
        }
    }

    /// Bin holding `output`: the last bin whose lower edge is `<= output`
    fn bin_index(&self, output: f64) -> usize {
        let last = self.bins.len() - 1;
        let mut index = ((output / self.bin_width).floor().max(0.0) as usize).min(last);

        // The division can land one bin off either side of an exact edge
        if index < last && output >= self.bins[index + 1].lower {
            index += 1;
        } else if index > 0 && output < self.bins[index].lower {
            index -= 1;
        }
        index
    }

    pub fn total_signal(&self) -> f64 {
        self.bins.iter().map(|bin| bin.signal).sum()
    }

    pub fn total_background(&self) -> f64 {
        self.bins.iter().map(|bin| bin.background).sum()
    }
}

/// Histogram of the topology's predicted signal probability, weighted by
/// event weight and split by true class
pub fn histogram(
    table: &ProbabilityTable,
    topology: &Topology,
    filter: ClassFilter,
    bin_width: f64,
) -> Result<Histogram> {
    let key = topology.design_key();
    table.require_design(&key)?;

    let mut histogram = Histogram::empty(bin_width);
    for row in table.rows().iter().filter(|row| filter.contains(row.true_label)) {
        if let Some(p) = row.probability(&key) {
            histogram.fill(p, row.true_label, row.weight);
        }
    }
    Ok(histogram)
}

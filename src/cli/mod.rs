//! CLI Module
//!
//! Command-line front end: every subcommand runs one query and prints the
//! result as JSON.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// MLP Explorer - query network layouts and classifier statistics
#[derive(Parser, Debug)]
#[command(name = "mlp-explorer")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file (JSON)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Directory holding the lookup tables (overrides the config)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Seed for the diagram's edge values (overrides the config)
    #[arg(long, global = true)]
    pub seed: Option<u64>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Lay out the network diagram
    #[command(name = "layout")]
    Layout {
        /// Hidden layer sizes (1 to 3 values)
        #[arg(short, long, num_args = 1..=3, required = true)]
        layers: Vec<usize>,

        /// Number of input features (read from the event table when omitted)
        #[arg(short, long)]
        features: Option<usize>,
    },

    /// Look up accuracy and F1 score
    #[command(name = "metrics")]
    Metrics {
        #[arg(short, long, num_args = 1..=3, required = true)]
        layers: Vec<usize>,
    },

    /// Significance and weighted counts for a cut
    #[command(name = "significance")]
    Significance {
        #[arg(short, long, num_args = 1..=3, required = true)]
        layers: Vec<usize>,

        /// Cut on the classifier output
        #[arg(long, default_value_t = 0.0)]
        cut: f64,

        /// Event classes to include (0 background, 1 signal)
        #[arg(long, num_args = 0..=2, default_values_t = [0u8, 1u8])]
        classes: Vec<u8>,
    },

    /// Classifier-output histogram
    #[command(name = "histogram")]
    Histogram {
        #[arg(short, long, num_args = 1..=3, required = true)]
        layers: Vec<usize>,

        #[arg(long, num_args = 0..=2, default_values_t = [0u8, 1u8])]
        classes: Vec<u8>,
    },

    /// Prediction for a single event
    #[command(name = "predict")]
    Predict {
        #[arg(short, long, num_args = 1..=3, required = true)]
        layers: Vec<usize>,

        /// Event id from the shortlist
        #[arg(short, long)]
        event: u32,
    },

    /// Select a region of the scatter plot
    #[command(name = "scatter")]
    Scatter {
        /// Feature on the y axis (config default when omitted)
        #[arg(short, long)]
        y: Option<String>,

        /// x-axis range: LOW HIGH
        #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"], allow_negative_numbers = true)]
        x_range: Option<Vec<f64>>,

        /// y-axis range: LOW HIGH
        #[arg(long, num_args = 2, value_names = ["LOW", "HIGH"], allow_negative_numbers = true)]
        y_range: Option<Vec<f64>>,

        /// Categories to keep (all when omitted)
        #[arg(long, num_args = 1..)]
        categories: Option<Vec<String>>,
    },

    /// List the event shortlist
    #[command(name = "events")]
    Events,
}

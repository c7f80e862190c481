//! MLP Explorer - Layout and statistics core for a classifier dashboard
//!
//! MLP Explorer backs an interactive dashboard over a pre-trained
//! particle-physics classifier. It reads tables computed offline and
//! answers one pure query per user interaction:
//! 1. Network diagram layout - node coordinates and edges for a topology
//! 2. Metrics & significance - accuracy/F1 lookup, cut-based `S/sqrt(B)`
//!
//! # Architecture
//!
//! - `topology`: validated network shape and its canonical design key
//! - `tables`: immutable lookup tables, loaded once into a `DataSet`
//! - `layout`: topology to diagram layout
//! - `stats`: metrics, significance, histogram and prediction readouts
//! - `scatter`: region selection over the simulated event table
//! - `dashboard`: per-panel entry points with the UI gating rules

pub mod cli;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod layout;
mod math;
pub mod scatter;
pub mod stats;
pub mod tables;
pub mod topology;

pub use config::ExplorerConfig;
pub use dashboard::{Dashboard, Selection};
pub use error::{ExplorerError, Result};
pub use layout::{layout, DiagramLayout};
pub use stats::{metrics, significance};
pub use topology::{DesignKey, Topology};

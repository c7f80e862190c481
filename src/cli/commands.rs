//! CLI Command Implementations
//!
//! Implements the actual logic for each CLI command.

use std::io::{self, Write};
use std::path::Path;

use log::{info, warn};
use serde::Serialize;

use crate::config::ExplorerConfig;
use crate::dashboard::Dashboard;
use crate::error::Result;
use crate::layout::layout;
use crate::scatter::ScatterQuery;
use crate::stats;
use crate::tables::{AxisRange, ClassFilter, DataSet};
use crate::topology::Topology;

/// Build the effective configuration from the file and CLI overrides.
pub fn load_config(
    path: Option<&Path>,
    data_dir: Option<&Path>,
    seed: Option<u64>,
) -> Result<ExplorerConfig> {
    let mut config = match path {
        Some(path) => ExplorerConfig::load(path)?,
        None => ExplorerConfig::default(),
    };

    if let Some(dir) = data_dir {
        config.data_dir = dir.to_path_buf();
    }
    if seed.is_some() {
        config.seed = seed;
    }

    Ok(config)
}

/// Print the diagram layout.
///
/// With `features` given, no tables are read.
pub fn layout_diagram(
    config: ExplorerConfig,
    layers: Vec<usize>,
    features: Option<usize>,
) -> Result<()> {
    let features = match features {
        Some(features) => features,
        None => DataSet::load(&config)?.input_features(),
    };

    let topology = Topology::new(layers, features)?;
    info!("Laying out design {}", topology.design_key());

    let mut rng = config.edge_rng();
    print_json(&layout(&topology, &config.layout, &mut rng))
}

/// Print accuracy and F1 score.
pub fn show_metrics(config: ExplorerConfig, layers: Vec<usize>) -> Result<()> {
    let dashboard = Dashboard::load(config)?;
    let topology = Topology::new(layers, dashboard.data().input_features())?;

    print_json(&stats::metrics(&dashboard.data().metrics, &topology)?)
}

/// Print significance and weighted counts for a cut.
pub fn show_significance(
    config: ExplorerConfig,
    layers: Vec<usize>,
    cut: f64,
    classes: Vec<u8>,
) -> Result<()> {
    let dashboard = Dashboard::load(config)?;
    let topology = Topology::new(layers, dashboard.data().input_features())?;

    let report = stats::significance(
        &dashboard.data().probabilities,
        &topology,
        cut,
        ClassFilter::from_labels(classes),
    )?;
    if report.significance.is_none() {
        warn!("Significance undefined: no background passes cut {}", cut);
    }

    print_json(&report)
}

/// Print the classifier-output histogram.
pub fn show_histogram(
    config: ExplorerConfig,
    layers: Vec<usize>,
    classes: Vec<u8>,
) -> Result<()> {
    let dashboard = Dashboard::load(config)?;
    let topology = Topology::new(layers, dashboard.data().input_features())?;

    let histogram = stats::histogram(
        &dashboard.data().probabilities,
        &topology,
        ClassFilter::from_labels(classes),
        dashboard.config().histogram_bin_width,
    )?;

    print_json(&histogram)
}

/// Print the prediction for one event.
pub fn show_prediction(config: ExplorerConfig, layers: Vec<usize>, event: u32) -> Result<()> {
    let dashboard = Dashboard::load(config)?;
    let topology = Topology::new(layers, dashboard.data().input_features())?;

    let prediction = stats::predict(&dashboard.data().probabilities, event, &topology)?;
    info!(
        "Event {} classified as {:?} (truth {:?})",
        event, prediction.predicted, prediction.truth
    );

    print_json(&prediction)
}

/// Print a scatter-plot selection.
pub fn show_scatter(
    config: ExplorerConfig,
    y: Option<String>,
    x_range: Option<Vec<f64>>,
    y_range: Option<Vec<f64>>,
    categories: Option<Vec<String>>,
) -> Result<()> {
    let dashboard = Dashboard::load(config)?;

    let mut query = match y {
        Some(y) => ScatterQuery::full(
            &dashboard.data().scatter,
            &dashboard.config().scatter.x_feature,
            &y,
        )?,
        None => dashboard.default_scatter_query()?,
    };

    if let Some(range) = x_range.as_deref().and_then(to_range) {
        query.x_range = range;
    }
    if let Some(range) = y_range.as_deref().and_then(to_range) {
        query.y_range = range;
    }
    if let Some(categories) = categories {
        query.categories = categories;
    }

    print_json(&dashboard.scatter(&query)?)
}

/// Print the event shortlist.
pub fn list_events(config: ExplorerConfig) -> Result<()> {
    let dashboard = Dashboard::load(config)?;
    let options = dashboard.event_options();

    if options.is_empty() {
        println!("No events in the shortlist.");
        return Ok(());
    }

    let mut stdout = io::stdout().lock();
    for (_, label) in options {
        writeln!(stdout, "{}", label)?;
    }
    Ok(())
}

fn to_range(values: &[f64]) -> Option<AxisRange> {
    match values {
        [low, high] => Some(AxisRange::new(*low, *high)),
        _ => None,
    }
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    Ok(())
}

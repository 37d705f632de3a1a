//! Fills tables with random keys across a sweep of sizes and plots how chains and the load
//! factor behave as the table grows.

#![allow(clippy::arithmetic_side_effects)]
#![allow(clippy::cast_precision_loss)]

use chaintable::{ChainStats, HashTable, HashTableExtensions, MAX_LOAD_FACTOR, initialize_logger};
use log::info;
use plotters::prelude::*;
use rand::Rng;

/// Smallest table size in the sweep
const MIN_ENTRIES: usize = 1_000;
/// Largest table size in the sweep
const MAX_ENTRIES: usize = 200_000;
/// Number of table sizes measured
const NUM_STEPS: usize = 20;

/// Measurements for one table size
#[derive(Debug)]
struct Sample {
    /// Entries inserted
    entries: usize,
    /// Bucket occupancy after the inserts
    stats: ChainStats,
}

/// Inserts `entries` random keys into a fresh table and summarises its chains
fn measure<R: Rng>(rng: &mut R, entries: usize) -> Sample {
    let mut table = HashTable::new();
    while table.len() < entries {
        table.set(rng.random::<u64>(), ());
    }
    Sample { entries, stats: table.chain_stats() }
}

/// Draws mean and longest chain length against the number of entries
fn plot_chain_lengths(samples: &[Sample]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("chain_lengths.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let max_chain = samples.iter().map(|s| s.stats.longest_chain).max().unwrap_or(1) as f64 * 1.1;

    let mut chart = ChartBuilder::on(&root)
        .caption("Chain Length vs Table Size", ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..MAX_ENTRIES, 0.0..max_chain)?;

    chart
        .configure_mesh()
        .x_desc("Number of Entries")
        .y_desc("Chain Length (entries)")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    let mean_style = ShapeStyle::from(&RGBColor(50, 90, 220)).stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.entries, s.stats.mean_chain_length())),
            mean_style,
        ))?
        .label("Mean chain (occupied buckets)")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], mean_style));

    let longest_style = ShapeStyle::from(&RGBColor(220, 50, 50)).stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.entries, s.stats.longest_chain as f64)),
            longest_style,
        ))?
        .label("Longest chain")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], longest_style));

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::UpperLeft)
        .draw()?;

    root.present()?;
    Ok(())
}

/// Draws the load factor against the number of entries, with the growth ceiling
fn plot_load_factor(samples: &[Sample]) -> Result<(), Box<dyn std::error::Error>> {
    let root = BitMapBackend::new("load_factor.png", (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Load Factor vs Table Size", ("sans-serif", 35))
        .margin(15)
        .x_label_area_size(60)
        .y_label_area_size(60)
        .build_cartesian_2d(0..MAX_ENTRIES, 0.0..1.0)?;

    chart
        .configure_mesh()
        .x_desc("Number of Entries")
        .y_desc("Load Factor")
        .axis_desc_style(("sans-serif", 16))
        .draw()?;

    let ceiling_style = ShapeStyle::from(&BLACK.mix(0.3)).stroke_width(1);
    chart
        .draw_series(LineSeries::new(
            vec![(0, MAX_LOAD_FACTOR), (MAX_ENTRIES, MAX_LOAD_FACTOR)],
            ceiling_style,
        ))?
        .label("Growth threshold")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], ceiling_style));

    let color = RGBColor(50, 180, 50);
    let line_style = ShapeStyle::from(&color).stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            samples.iter().map(|s| (s.entries, s.stats.load_factor)),
            line_style,
        ))?
        .label("Load factor")
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], line_style));
    chart.draw_series(
        samples.iter().map(|s| Circle::new((s.entries, s.stats.load_factor), 4, color.filled())),
    )?;

    chart
        .configure_series_labels()
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .position(SeriesLabelPosition::LowerRight)
        .draw()?;

    root.present()?;
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    initialize_logger();

    let step = (MAX_ENTRIES - MIN_ENTRIES) / (NUM_STEPS - 1);
    let sizes: Vec<usize> = (0..NUM_STEPS).map(|i| MIN_ENTRIES + step * i).collect();

    let mut rng = rand::rng();
    let mut samples = Vec::with_capacity(sizes.len());
    for &entries in &sizes {
        let sample = measure(&mut rng, entries);
        info!(
            "{} entries: capacity = {}, load factor = {:.3}, mean chain = {:.2}, longest = {}",
            sample.entries,
            sample.stats.capacity,
            sample.stats.load_factor,
            sample.stats.mean_chain_length(),
            sample.stats.longest_chain
        );
        samples.push(sample);
    }

    plot_chain_lengths(&samples)?;
    plot_load_factor(&samples)?;

    println!("Generated plot images: chain_lengths.png, load_factor.png");

    Ok(())
}

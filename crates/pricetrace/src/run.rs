// File: crates/pricetrace/src/run.rs
// Summary: One invocation end to end: open history, collect series, aggregate, export, render.

use anyhow::{Context, Result};
use chart_core::{Chart, FontMode, PriceChart, RasterOptions, RenderOptions};
use history_core::{
    aggregate, normalize_targets, write_csv, BundleMultipliers, Cadence, CollectOptions, DateWindow, Error as HistoryError,
    GitCli, MatchMode, SeriesBuilder, Warning,
};
use tracing::info;

use crate::cli::{Cli, Renderer};
use crate::labels;

pub fn run(cli: &Cli) -> Result<()> {
    let git = GitCli::open(&cli.repo)?;
    let targets = normalize_targets(&cli.items)?;
    let window = DateWindow::new(cli.since, cli.until)?;
    let cadence = Cadence::from(cli.cadence);

    let multipliers = BundleMultipliers::classify(&targets, cli.bundle_size);
    let options = CollectOptions {
        file: cli.file.clone(),
        window,
        mode: if cli.fuzzy { MatchMode::Fuzzy } else { MatchMode::Exact },
    };
    let collected = SeriesBuilder::new(&git, &multipliers, options).collect(&targets);
    if let Err(HistoryError::AllItemsMissing { warnings, .. }) = &collected {
        print_warnings(warnings);
    }
    let report = collected.with_context(|| format!("collecting prices from {}", git.repo().display()))?;
    print_warnings(&report.warnings);
    info!(revisions = report.revisions_scanned, items = report.series.len(), "collected series");

    let table = aggregate(&report.series, cadence, &window)?;
    if let Some(csv) = &cli.csv {
        write_csv(&table, csv).with_context(|| format!("writing {}", csv.display()))?;
        println!("Wrote {}", csv.display());
    }

    let font = FontMode::resolve(cli.font.as_deref());
    let chart_table = labels::chart_table(&table, &multipliers, font.is_capable());
    let out = cli.out_path();
    match cli.renderer {
        Renderer::Raster => {
            let capable = PriceChart::new(&chart_table, &font)
                .render_to_png(&RasterOptions::default(), &out)
                .with_context(|| format!("rendering {}", out.display()))?;
            if !capable {
                eprintln!("note: no CJK-capable font found; non-ASCII labels are shown as code points (try --font)");
            }
        }
        Renderer::Plot => {
            let opts = RenderOptions { font: font.clone(), ..RenderOptions::default() };
            Chart::from_table(&chart_table)
                .render_to_png(&opts, &out)
                .with_context(|| format!("rendering {}", out.display()))?;
        }
    }
    println!("Wrote {}", out.display());
    Ok(())
}

fn print_warnings(warnings: &[Warning]) {
    for warning in warnings {
        eprintln!("warning: {warning}");
    }
}

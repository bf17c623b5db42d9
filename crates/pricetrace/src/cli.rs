// File: crates/pricetrace/src/cli.rs
// Summary: Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use history_core::{Cadence, DEFAULT_BUNDLE_SIZE, DEFAULT_SNAPSHOT_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "pricetrace",
    version,
    about = "Plot item prices recorded in a git-tracked snapshot file"
)]
pub struct Cli {
    /// Git repository whose history holds the snapshots.
    #[arg(long)]
    pub repo: PathBuf,

    /// Item name to plot. Repeat for several items; at least one is needed.
    #[arg(long = "item", value_name = "NAME")]
    pub items: Vec<String>,

    /// Snapshot file, relative to the repository root.
    #[arg(long, default_value = DEFAULT_SNAPSHOT_FILE)]
    pub file: PathBuf,

    /// First day to include (YYYY-MM-DD, UTC).
    #[arg(long)]
    pub since: Option<NaiveDate>,

    /// Last day to include (YYYY-MM-DD, UTC).
    #[arg(long)]
    pub until: Option<NaiveDate>,

    /// Match items by substring instead of exact name.
    #[arg(long, default_value_t = false)]
    pub fuzzy: bool,

    #[arg(long, value_enum, default_value_t = CadenceArg::Daily)]
    pub cadence: CadenceArg,

    /// Rounds per priced bundle for ammunition. Values below 1 count as 1.
    #[arg(long, visible_alias = "ammo-bundle-size", default_value_t = DEFAULT_BUNDLE_SIZE, allow_negative_numbers = true)]
    pub bundle_size: i64,

    /// Output PNG. Defaults to price_<cadence>.png.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Also export the aggregated table as CSV.
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Font file path or family name for CJK text.
    #[arg(long, value_name = "PATH|FAMILY")]
    pub font: Option<String>,

    #[arg(long, value_enum, default_value_t = Renderer::Raster)]
    pub renderer: Renderer,
}

impl Cli {
    pub fn out_path(&self) -> PathBuf {
        self.out
            .clone()
            .unwrap_or_else(|| PathBuf::from(format!("price_{}.png", Cadence::from(self.cadence))))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum CadenceArg {
    /// Every snapshot, unaligned.
    Raw,
    /// 10-minute grid with short gaps filled.
    Fill,
    /// Daily mean.
    Daily,
    /// Weekly mean, weeks starting Monday.
    Weekly,
}

impl From<CadenceArg> for Cadence {
    fn from(arg: CadenceArg) -> Self {
        match arg {
            CadenceArg::Raw => Cadence::Raw,
            CadenceArg::Fill => Cadence::Fill,
            CadenceArg::Daily => Cadence::Daily,
            CadenceArg::Weekly => Cadence::Weekly,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Renderer {
    /// Fixed-layout chart, points spaced by row.
    Raster,
    /// Generic line plot with a true-time x axis.
    Plot,
}

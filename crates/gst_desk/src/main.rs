//! # gst-desk
//!
//! Runs the GST calculator page without a window.
//!
//! - `compute`: one calculation, printed the way the results card shows it
//! - `follow`: ticks the cursor follower and prints the trailing outline

use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use gst_desk::tax::TaxMode;
use gst_desk::ui::ResultsSection;
use gst_desk::{HeadlessSurface, MemoryThemePersistence, Page, PageConfig, TARGET_FRAME_TIME};
use gst_shared::{Point, PointerEvent};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "gst-desk")]
#[command(about = "GST calculator with a headless page")]
#[command(version)]
struct Args {
    /// Path to a TOML page config
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute a GST breakdown
    Compute {
        /// Amount entered in the form
        #[arg(short, long)]
        amount: f64,

        /// Rate in percent (defaults to the configured default slab)
        #[arg(short, long)]
        rate: Option<f64>,

        /// `exclusive` adds GST, `inclusive` extracts it
        #[arg(short, long, default_value = "exclusive")]
        mode: TaxMode,
    },

    /// Trace the cursor outline chasing the pointer
    Follow {
        /// Pointer position, as X,Y
        #[arg(long)]
        to: Point,

        /// Starting position of the outline, as X,Y
        #[arg(long, default_value = "0,0")]
        from: Point,

        /// Number of frames to run
        #[arg(long, default_value_t = 30)]
        ticks: u32,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "gst_desk=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let config = match &args.config {
        Some(path) => PageConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PageConfig::default(),
    };

    match args.command {
        Command::Compute { amount, rate, mode } => compute(&config, amount, rate, mode),
        Command::Follow { to, from, ticks } => follow(&config, from, to, ticks),
    }
}

fn compute(
    config: &PageConfig,
    amount: f64,
    rate: Option<f64>,
    mode: TaxMode,
) -> anyhow::Result<()> {
    let mut page = Page::new(config, HeadlessSurface::desktop())?;
    let form = page.form_mut();
    form.set_amount(amount.to_string());
    form.set_mode(mode);
    if let Some(rate) = rate {
        if !form.select_preset(rate) {
            form.set_custom_rate(rate.to_string());
        }
    }

    match form.view().results {
        ResultsSection::Breakdown(results) => {
            println!("{:<26}{:>18}", results.original_label, results.original);
            println!("{:<26}{:>18}", results.tax_label, results.tax);
            println!("{:<26}{:>18}", results.total_label, results.total);
            Ok(())
        }
        ResultsSection::Rejected(message) => bail!(message),
        ResultsSection::Hidden => bail!("amount must be greater than zero"),
    }
}

fn follow(config: &PageConfig, from: Point, to: Point, ticks: u32) -> anyhow::Result<()> {
    let mut page = Page::new(config, HeadlessSurface::desktop())?;
    page.mount(Box::new(MemoryThemePersistence::default()))?;
    page.follower_mut().warp_to(from);

    let pointer = page.pointer_sender();
    pointer.send(PointerEvent::Move { position: to });

    let dt = TARGET_FRAME_TIME.as_secs_f32();
    for tick in 1..=ticks {
        if let Some(frame) = page.tick(dt) {
            println!(
                "tick {tick:>4}  outline {}  distance {:.6}",
                frame.outline,
                frame.outline.distance(to)
            );
        }
    }

    page.unmount();
    Ok(())
}

mod core;
mod decoder;
mod shared;
mod style;
mod ui;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::Path;

use crate::shared::constants::DEFAULT_MARGIN_H;
use crate::style::{pad_left_top, pad_left_top_bottom};
use crate::ui::screen::line_top;
use crate::ui::spinner::CancelToken;
use crate::ui::wizard::{self, Prefill};
use crate::utils::time_utils::humanize_duration;

#[derive(Parser)]
#[command(author, version, about = "Extracts frames from an input video and exports them to images")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Extract frames, asking for anything not given here
    Extract {
        /// Path to the input video file
        #[arg(short, long)]
        input: Option<String>,
        /// Extraction frame rate (keep one frame out of every RATE)
        #[arg(short, long)]
        rate: Option<u64>,
        /// Frame offset
        #[arg(short, long)]
        offset: Option<i64>,
        /// Output path for image files
        #[arg(short = 'C', long)]
        output: Option<String>,
    },
    /// Print video metadata as JSON
    Probe {
        /// Path to the input video file
        #[arg(short, long)]
        input: String,
    },
}

fn main() -> Result<()> {
    utils::logger::init();

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Probe { input }) => probe(&input),
        Some(Commands::Extract {
            input,
            rate,
            offset,
            output,
        }) => run_extract(Prefill {
            input,
            rate,
            offset,
            output,
        }),
        None => run_extract(Prefill::default()),
    }
}

fn probe(input: &str) -> Result<()> {
    let stream = decoder::VideoStream::open(Path::new(input))?;
    println!("{}", serde_json::to_string_pretty(&stream.info())?);
    Ok(())
}

fn run_extract(prefill: Prefill) -> Result<()> {
    let cancel = CancelToken::new();
    let handler_token = cancel.clone();
    ctrlc::set_handler(move || handler_token.cancel())?;

    let Some(session) = wizard::run(prefill, &cancel)? else {
        return canceled();
    };
    let wizard::Session { plan, mut stream } = session;

    let report = core::extractor::extract(&plan, &mut stream, &cancel)?;
    if cancel.is_cancelled() {
        return canceled();
    }

    // Final summary screen.
    ui::screen::print_header()?;
    wizard::print_settings(
        &plan.video,
        &stream.info(),
        Some(plan.rate),
        Some(plan.offset),
        Some(&plan.output_dir),
    );
    println!("{}", line_top(&ui::screen::success("Success!")));
    println!(
        "{}",
        line_top(&format!(
            "{} {}",
            ui::screen::info("Extracted frames:"),
            report.extracted
        ))
    );
    println!(
        "{}",
        pad_left_top_bottom(
            &format!(
                "{} {}",
                ui::screen::info("Elapsed time:"),
                humanize_duration(report.elapsed.as_secs_f64())
            ),
            DEFAULT_MARGIN_H,
            0,
            1
        )
    );

    Ok(())
}

fn canceled() -> Result<()> {
    println!(
        "{}",
        pad_left_top(
            &ui::screen::error("Operation canceled by the user!"),
            DEFAULT_MARGIN_H,
            2
        )
    );
    Ok(())
}

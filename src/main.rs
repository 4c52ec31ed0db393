/*!
 * Command-line interface for treeclip
 */

use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Instant;

use clap::{CommandFactory, Parser};
use indicatif::{ProgressBar, ProgressStyle};

use treeclip::clipboard;
use treeclip::config::{Args, Config, OutputMode};
use treeclip::error::Result;
use treeclip::filter::PathFilter;
use treeclip::report::{CopyReport, ReportFormat, Reporter};
use treeclip::serializer::{ContentSerializer, ROOT_SEPARATOR_WIDTH};
use treeclip::tree::TreeRenderer;
use treeclip::utils::count_entries;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Generate shell completions and exit
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        clap_complete::generate(shell, &mut cmd, "treeclip", &mut io::stdout());
        return Ok(());
    }

    // Create configuration
    let config = Config::from_args(args);

    // Validate configuration
    config.validate()?;

    let filter = PathFilter::new(config.ignore_patterns.clone());

    // Create progress bar; it draws on stderr, so stdout output stays clean
    let progress = ProgressBar::new(0);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} {wide_msg:.dim.white} {pos}/{len} ({percent}%)")
            .unwrap(),
    );
    progress.set_prefix("📋 Serializing");

    if config.mode != OutputMode::TreeOnly {
        progress.set_length(count_entries(&config.roots, &filter));
    }

    let serializer = ContentSerializer::new(filter.clone(), Arc::new(progress.clone()));
    let renderer = TreeRenderer::new(filter);

    // Start timing
    let start_time = Instant::now();

    let output = match config.mode {
        OutputMode::TreeOnly => renderer.render(&config.roots)?,
        OutputMode::ContentsOnly => serializer.serialize(&config.roots)?,
        OutputMode::Combined => {
            let tree = renderer.render(&config.roots)?;
            let contents = serializer.serialize(&config.roots)?;
            format!(
                "{}\n\n{}\n\n{}",
                tree,
                "=".repeat(ROOT_SEPARATOR_WIDTH),
                contents
            )
        }
    };

    let duration = start_time.elapsed();
    progress.finish_and_clear();

    // Hand the blob to its destination
    let destination = if config.clip {
        clipboard::copy_to_clipboard(&output)?;
        "clipboard"
    } else {
        let mut stdout = io::stdout().lock();
        stdout.write_all(output.as_bytes())?;
        stdout.write_all(b"\n")?;
        "stdout"
    };

    // Prepare the copy report
    let statistics = serializer.get_statistics();
    let copy_report = CopyReport {
        destination: destination.to_string(),
        duration,
        files_processed: statistics.files_processed,
        total_lines: statistics.total_lines,
        output_size: output.len() as u64,
        file_details: statistics.file_details,
    };

    // Create a reporter and print the report
    let reporter = Reporter::new(ReportFormat::ConsoleTable);
    reporter.print_report(&copy_report);

    Ok(())
}

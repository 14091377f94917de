// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Walks through the [`GapBuffer`] API: construction of each kind, slice style edits,
//! insertion, retrieval, compaction, element-wise increment, and zero-copy pinning.
//!
//! Run with `-l` to see the reallocation and pinning events on stderr.

use clap::{Args, Parser};
use miette::{IntoDiagnostic, MietteHandlerOpts};
use r3bl_gap_buffer::{BufferAppearance, DynamicHost, GapBuffer, HostValue, ItemKind};
use tracing_core::LevelFilter;
use tracing_subscriber::{Layer, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_TERMINAL_WIDTH: usize = 80;

/// More info: <https://docs.rs/clap/latest/clap/_derive/_tutorial/chapter_2/index.html>
#[derive(Debug, Parser)]
#[command(bin_name = "gap_buffer_demo")]
#[command(about = "Guided tour of r3bl_gap_buffer")]
#[command(version)]
#[command(next_line_help = true)]
pub struct CLIArg {
    #[command(flatten)]
    pub global_options: GlobalOption,
}

#[derive(Debug, Args)]
pub struct GlobalOption {
    #[arg(
        global = true,
        long,
        short = 'l',
        help = "Log reallocation, compaction and pinning events to stderr."
    )]
    pub enable_logging: bool,

    #[arg(
        global = true,
        long,
        default_value = "trace",
        help = "Most verbose level to log when logging is enabled (off, error, warn, info, debug, trace)."
    )]
    pub log_level: LevelFilter,
}

fn main() -> miette::Result<()> {
    setup_miette_global_report_handler();
    let cli_arg = CLIArg::parse();
    if cli_arg.global_options.enable_logging {
        init_tracing(cli_arg.global_options.log_level)?;
    }

    tracing::debug!(message = "Start demo", cli_arg = ?cli_arg);

    show_construction()?;
    show_slice_edits()?;
    show_methods()?;
    show_increment()?;
    show_pinning()?;
    show_diagnostics();

    Ok(())
}

fn show_construction() -> miette::Result<()> {
    println!("{}", GapBuffer::from_bytes(b"The life of Brian"));
    println!("{}", GapBuffer::from_text("Mr Creosote"));
    println!(
        "{}",
        GapBuffer::from_host(&DynamicHost, ItemKind::Integer, &HostValue::from(vec![1_i64, 2, 3]))?
    );
    Ok(())
}

fn show_slice_edits() -> miette::Result<()> {
    let mut movie = GapBuffer::from_bytes(b"The life of Brian");
    movie.replace(0, usize::MAX, b"The meaning - with Life")?;
    println!("{movie}");
    movie.delete(12, 2)?;
    println!("{movie}");
    movie.set_item_at(4, Some(b'M'.into()))?;
    println!("{movie}");
    movie.replace(12, 16, b"of")?;
    println!("{movie}");
    println!("{}", movie.slice(0, 3));
    println!("{}", movie.len());
    Ok(())
}

fn show_methods() -> miette::Result<()> {
    let mut movie = GapBuffer::from_bytes(b"The Meaning of Life");
    movie.insert(0, b"'")?;
    movie.extend(b"'!")?;
    println!("{movie}");
    println!("{}", movie.retrieve(5, 7)?.to_string_lossy());
    println!("{}", movie.size());
    movie.replace(0, usize::MAX, b"ab")?;
    println!("{}", movie.size());
    movie.compact()?;
    println!("{}", movie.size());
    Ok(())
}

fn show_increment() -> miette::Result<()> {
    let mut positions = GapBuffer::from_integers(&[100, 140, 220, 280]);
    positions.increment(1, 3, -7)?;
    println!("{positions}");
    Ok(())
}

/// Search a pinned view in place, the way a regex engine reads a host buffer.
fn show_pinning() -> miette::Result<()> {
    let mut movie = GapBuffer::from_text("The life of Brian");
    println!("{movie}");

    let guard = movie.pin(BufferAppearance::Contiguous)?;
    let units = guard
        .as_contiguous()
        .unwrap_or_default()
        .chunks_exact(2)
        .map(|it| u16::from_ne_bytes([it[0], it[1]]))
        .collect::<Vec<_>>();
    let found = find_capitalized_word(&units, u16::from(b'B'));
    drop(guard);

    if let Some(range) = found {
        println!("{}", movie.retrieve(range.start, range.len())?.to_string_lossy());
    }
    Ok(())
}

/// `initial` followed by as many lowercase ASCII letters as there are.
fn find_capitalized_word(units: &[u16], initial: u16) -> Option<std::ops::Range<usize>> {
    let start = units.iter().position(|&it| it == initial)?;
    let length = units[start + 1..]
        .iter()
        .take_while(|&&it| (u16::from(b'a')..=u16::from(b'z')).contains(&it))
        .count();
    Some(start..start + 1 + length)
}

/// Render a few failures through the global report handler without exiting.
fn show_diagnostics() {
    let mut buffer = GapBuffer::from_integers(&[1, 2, 3]);
    if let Err(error) = buffer.retrieve(0, 1) {
        println!("{:?}", miette::Report::new(error));
    }
    match buffer.pin_raw(BufferAppearance::Contiguous) {
        Ok(pin) => {
            if let Err(error) = buffer.insert(0, &[0_i32]) {
                println!("{:?}", miette::Report::new(error));
            }
            let mut other = GapBuffer::from_integers(&[4]);
            let pin = match other.unpin_raw(pin) {
                Ok(()) => return,
                Err(rejected) => {
                    println!("{:?}", miette::Report::new(rejected.error));
                    rejected.pin
                }
            };
            if let Err(rejected) = buffer.unpin_raw(pin) {
                println!("{:?}", miette::Report::new(rejected.error));
            }
        }
        Err(error) => println!("{:?}", miette::Report::new(error)),
    }
}

fn init_tracing(level_filter: LevelFilter) -> miette::Result<()> {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(level_filter);
    tracing_subscriber::registry()
        .with(fmt_layer)
        .try_init()
        .into_diagnostic()
}

/// The [`miette::ErrorHook`] is lazily evaluated, the width is read only when a report is
/// actually rendered.
fn setup_miette_global_report_handler() {
    miette::set_hook(Box::new(|_report| {
        let terminal_width = std::env::var("COLUMNS")
            .ok()
            .and_then(|it| it.parse::<usize>().ok())
            .unwrap_or(DEFAULT_TERMINAL_WIDTH);
        Box::new(
            MietteHandlerOpts::new()
                .width(terminal_width)
                .wrap_lines(true)
                .unicode(true)
                .context_lines(3)
                .tab_width(4)
                .break_words(true)
                .with_cause_chain()
                .build(),
        )
    }))
    .ok();
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_cli_parses_logging_flags() {
        let cli_arg = CLIArg::parse_from(["gap_buffer_demo", "-l", "--log-level", "debug"]);
        assert!(cli_arg.global_options.enable_logging);
        assert_eq!(cli_arg.global_options.log_level, LevelFilter::DEBUG);

        let cli_arg = CLIArg::parse_from(["gap_buffer_demo"]);
        assert!(!cli_arg.global_options.enable_logging);
        assert_eq!(cli_arg.global_options.log_level, LevelFilter::TRACE);
    }

    #[test]
    fn test_find_capitalized_word() {
        let units = "The life of Brian".encode_utf16().collect::<Vec<_>>();
        assert_eq!(find_capitalized_word(&units, u16::from(b'B')), Some(12..17));
        assert_eq!(find_capitalized_word(&units, u16::from(b'Z')), None);
    }

    #[test]
    fn test_walkthrough_runs() {
        show_construction().unwrap();
        show_slice_edits().unwrap();
        show_methods().unwrap();
        show_increment().unwrap();
        show_pinning().unwrap();
    }
}

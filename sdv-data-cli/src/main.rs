//! sdv-data CLI
//!
//! Runs the normalization pipeline once over the raw export and writes the
//! normalized dataset. Takes no arguments; directories come from
//! `settings.toml`.

use std::process::ExitCode;

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use sdv_data_lib::{Pipeline, RunReport, Settings, load_settings, settings_path};

fn main() -> ExitCode {
    // Settings decide the default log level, so they load before the logger
    // exists and any error is reported once it does.
    let loaded = load_settings();
    let debug = loaded.as_ref().is_ok_and(|s| s.debug);
    init_logging(debug);

    let settings = match loaded {
        Ok(settings) => settings,
        Err(e) => {
            log::error!("{e}; using default settings");
            Settings::default()
        }
    };
    log::debug!("Settings from {}: {settings:?}", settings_path().display());

    let report = Pipeline::new(settings).run();
    print_summary(&report);

    if report.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn init_logging(debug: bool) {
    let default = if debug { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default)).init();
}

fn print_summary(report: &RunReport) {
    println!();
    println!("{}", "Normalized".if_supports_color(Stdout, |t| t.bold()));
    for (label, count) in [
        ("objects", report.objects),
        ("buffs", report.buffs),
        ("crops", report.crops),
        ("fruit trees", report.fruit_trees),
        ("cooking recipes", report.cooking_recipes),
    ] {
        println!(
            "  {:<16} {}",
            format!("{label}:").if_supports_color(Stdout, |t| t.cyan()),
            count
        );
    }
    println!(
        "  {:<16} {} ({} reclassified, {} unchanged)",
        "categories:".if_supports_color(Stdout, |t| t.cyan()),
        report.classify.reclassified + report.classify.untouched,
        report.classify.reclassified,
        report.classify.untouched,
    );

    println!();
    println!("{}", "Unlock sources".if_supports_color(Stdout, |t| t.bold()));
    println!(
        "  {:<16} {} applied, {} dangling, {} invalid",
        "TV:".if_supports_color(Stdout, |t| t.cyan()),
        report.tv_unlocks.applied,
        report.tv_unlocks.dangling,
        report.tv_unlocks.invalid,
    );
    println!(
        "  {:<16} {} applied, {} dangling",
        "special:".if_supports_color(Stdout, |t| t.cyan()),
        report.special_unlocks.applied,
        report.special_unlocks.dangling,
    );

    let skipped: Vec<_> = report.skipped.iter().filter(|(_, n)| **n > 0).collect();
    if !skipped.is_empty() {
        println!();
        println!(
            "{} {}",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
            "Skipped records".if_supports_color(Stdout, |t| t.bold()),
        );
        for (file, n) in skipped {
            println!("  {file}: {n}");
        }
    }

    println!();
    for name in &report.written {
        println!(
            "  {} {name}.json",
            "\u{2714}".if_supports_color(Stdout, |t| t.green())
        );
    }
    for name in &report.failed {
        println!(
            "  {} {name}.json",
            "\u{2718}".if_supports_color(Stdout, |t| t.bright_red())
        );
    }
}

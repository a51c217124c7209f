use clap::Parser;

mod cli;
mod commands;
mod domain;
mod services;

pub use cli::*;
pub use commands::*;
pub use domain::errors::HelperError;
pub use domain::models::*;
pub use services::catalog::{list_backups, select_backup};
pub use services::config::load_config;
pub use services::dtc::decode_dtc;
pub use services::export::{write_csv, write_json, write_jsonl};
pub use services::output::{print_list, print_out, print_with};
pub use services::payload::read_backup_file;
pub use services::planner::ChangePlanner;
pub use services::topics::{get_topic_explanation, list_topics};
pub use services::trust::build_trust_report;

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli);
    let config = load_config(cli.config.as_deref())?;

    if handle_backup_commands(&cli, &config)? {
        return Ok(());
    }
    if handle_advisory_commands(&cli, &config)? {
        return Ok(());
    }
    unreachable!("every subcommand has a handler")
}

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "forscan-helper",
    version,
    about = "FORScan helper for ABT parsing, Ford DTC interpretation, and safe change planning",
    after_help = "Examples:\n  forscan-helper parse-backup --file ./abt/sample.abt --out out.csv\n  forscan-helper decode-dtc --code P0171 --code U0121\n  forscan-helper plan-change --module ABS --parameter TireSize --current 235/65R17 --target 245/65R17\n  forscan-helper explain --topic asbuilt --topic ecc"
)]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, global = true, help = "Enable debug logging on stderr")]
    pub verbose: bool,
    #[arg(long, global = true, help = "Log only errors on stderr")]
    pub quiet: bool,
    #[arg(
        long,
        global = true,
        help = "Config file (default: ~/.config/forscan-helper/config.toml)"
    )]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List ABT backups in a directory, newest first
    ListBackups {
        #[arg(long, help = "Directory containing backup files (default from config: ./abt)")]
        backup_dir: Option<PathBuf>,
    },
    /// Parse an ABT binary payload and export the decoded fields
    ParseBackup {
        #[arg(long, help = "Directory containing backup files (default from config: ./abt)")]
        backup_dir: Option<PathBuf>,
        #[arg(
            long,
            help = "Direct path to a backup file. If omitted, interactive selection is used."
        )]
        file: Option<PathBuf>,
        #[arg(long, help = "CSV output path (default from config: output_file.csv)")]
        out: Option<PathBuf>,
        #[arg(long, help = "Optional JSON output path")]
        json_out: Option<PathBuf>,
        #[arg(long, help = "Optional JSONL output path (one record per line)")]
        jsonl_out: Option<PathBuf>,
    },
    /// Decode one or more Ford/OBD-II DTC codes
    DecodeDtc {
        #[arg(
            long = "code",
            required = true,
            help = "Diagnostic code, repeat flag for multiple (example: --code P0171 --code U0121)"
        )]
        codes: Vec<String>,
    },
    /// Generate a safety-first configuration change checklist
    PlanChange {
        #[arg(long, help = "Target module (example: ABS, PCM, BCM)")]
        module: String,
        #[arg(long, help = "Setting/parameter to modify")]
        parameter: String,
        #[arg(long, help = "Current value")]
        current: String,
        #[arg(long, help = "Target value")]
        target: String,
    },
    /// Show the legitimacy/confidence report based on official FORScan sources
    TrustReport {
        #[arg(long, help = "Optional JSON output path for automation")]
        out: Option<PathBuf>,
    },
    /// Explain FORScan concepts in plain language (asbuilt, abt, ecc, vid, trid)
    Explain {
        #[arg(
            long = "topic",
            help = "Topic to explain; repeat flag for multiple topics",
            required_unless_present = "list_topics"
        )]
        topics: Vec<String>,
        #[arg(long, default_value_t = false, help = "List supported explanation topics")]
        list_topics: bool,
    },
}

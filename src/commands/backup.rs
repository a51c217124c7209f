use crate::*;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

fn listing_line(index: usize, meta: &BackupFileMetadata) -> String {
    format!(
        "{}: {} (VIN: {}, System: {}, Date: {})",
        index,
        meta.file_name,
        meta.vin,
        meta.system,
        meta.captured_at.format("%Y-%m-%d %H:%M:%S")
    )
}

fn prompt_user_to_select(listing: &[BackupFileMetadata], json: bool) -> anyhow::Result<String> {
    let mut lines = vec!["Please select a file to parse:".to_string()];
    lines.extend(
        listing
            .iter()
            .enumerate()
            .map(|(i, meta)| listing_line(i + 1, meta)),
    );
    let prompt = "Enter the number of the file you want to parse: ";
    // stdout carries the JSON envelope in --json mode
    if json {
        eprintln!("{}", lines.join("\n"));
        eprint!("{prompt}");
        std::io::stderr().flush()?;
    } else {
        println!("{}", lines.join("\n"));
        print!("{prompt}");
        std::io::stdout().flush()?;
    }

    let mut choice = String::new();
    std::io::stdin().lock().read_line(&mut choice)?;
    Ok(select_backup(listing, &choice)?.file_name.clone())
}

fn resolve_backup_file(
    file: Option<&Path>,
    backup_dir: &Path,
    config: &AppConfig,
    json: bool,
) -> anyhow::Result<PathBuf> {
    if let Some(f) = file {
        return Ok(f.to_path_buf());
    }
    if !backup_dir.is_dir() {
        return Err(HelperError::DirectoryNotFound(backup_dir.to_path_buf()).into());
    }
    let listing = list_backups(backup_dir, &config.backup_extension)?;
    if listing.is_empty() {
        return Err(HelperError::NoBackupsFound {
            dir: backup_dir.to_path_buf(),
            extension: config.backup_extension.clone(),
        }
        .into());
    }
    let selected = prompt_user_to_select(&listing, json)?;
    Ok(backup_dir.join(selected))
}

pub fn handle_backup_commands(cli: &Cli, config: &AppConfig) -> anyhow::Result<bool> {
    match &cli.command {
        Commands::ListBackups { backup_dir } => {
            let dir = backup_dir.as_deref().unwrap_or(config.backup_dir.as_path());
            let listing: Vec<BackupListing> = list_backups(dir, &config.backup_extension)?
                .into_iter()
                .enumerate()
                .map(|(i, meta)| BackupListing { index: i + 1, meta })
                .collect();
            print_out(cli.json, &listing, |l| listing_line(l.index, &l.meta))?;
        }
        Commands::ParseBackup {
            backup_dir,
            file,
            out,
            json_out,
            jsonl_out,
        } => {
            let dir = backup_dir.as_deref().unwrap_or(config.backup_dir.as_path());
            let path = resolve_backup_file(file.as_deref(), dir, config, cli.json)?;
            let records = read_backup_file(&path)?;

            let csv_out = out.clone().unwrap_or_else(|| config.csv_out.clone());
            write_csv(&records, &csv_out)?;
            if let Some(p) = json_out {
                write_json(&records, p)?;
            }
            if let Some(p) = jsonl_out {
                write_jsonl(&records, p)?;
            }

            let report = ParseReport {
                file: path
                    .file_name()
                    .map(|n| n.to_string_lossy().to_string())
                    .unwrap_or_else(|| path.to_string_lossy().to_string()),
                records,
                csv_out: csv_out.to_string_lossy().to_string(),
                json_out: json_out.as_ref().map(|p| p.to_string_lossy().to_string()),
                jsonl_out: jsonl_out.as_ref().map(|p| p.to_string_lossy().to_string()),
            };
            print_with(cli.json, report, |r| {
                println!("Processed {}", r.file);
                println!("CSV output: {}", r.csv_out);
                if let Some(p) = &r.json_out {
                    println!("JSON output: {p}");
                }
                if let Some(p) = &r.jsonl_out {
                    println!("JSONL output: {p}");
                }
            })?;
        }
        _ => return Ok(false),
    }
    Ok(true)
}

use crate::domain::models::JsonOut;
use serde::Serialize;

pub fn print_out<T: Serialize>(
    json: bool,
    data: &[T],
    row: impl Fn(&T) -> String,
) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        for d in data {
            println!("{}", row(d));
        }
    }
    Ok(())
}

/// Prints `data` as a JSON envelope, or hands it to `text` for line-oriented rendering.
pub fn print_with<T: Serialize>(json: bool, data: T, text: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!(
            "{}",
            serde_json::to_string_pretty(&JsonOut { ok: true, data })?
        );
    } else {
        text(&data);
    }
    Ok(())
}

pub fn print_list(heading: &str, items: &[String]) {
    println!("{heading}");
    for item in items {
        println!("- {item}");
    }
}

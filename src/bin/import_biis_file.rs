// Small dev utility: import one BIIS xlsx file and print the batch summary.
//
// Usage:
//   cargo run --bin import-biis-file -- <file.xlsx> [sheet-number|sheet-name]
//
// Sheet selection defaults to sheet 1.

use biis_import::{BiisReader, ImportWorkerConfiguration};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    biis_import::logging::init();

    let mut args = std::env::args().skip(1);
    let file_path = args.next().ok_or("usage: import-biis-file <file.xlsx> [sheet]")?;

    let config = ImportWorkerConfiguration::from_path(&file_path);
    let config = match args.next() {
        Some(selector) => match selector.parse::<usize>() {
            Ok(number) => config.with_sheet_number(number),
            Err(_) => config.with_sheet_name(selector),
        },
        None => config.with_sheet_number(1),
    };

    let mut reader = BiisReader::new();
    let summary = reader.load(config)?;

    println!("{}", serde_json::to_string_pretty(&summary)?);

    if let Some(container) = reader.container() {
        for (id, property) in container.properties() {
            println!(
                "property {}: {} ({} valuation(s))",
                id,
                property.label.as_deref().unwrap_or("-"),
                property.valuations.len()
            );
        }
    }

    reader.unload();
    Ok(())
}

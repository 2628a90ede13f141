use std::path::Path;

use tracing::info;

use crate::{error::Error, treatment::NegativeTreatment};

/// Serialize records to the result file and mirror them on stdout.
///
/// Non-empty: the file is written wholesale (overwriting any prior
/// run). Empty: the file is removed — the absent file is the
/// documented "no records" state, and a zero-byte artifact would choke
/// downstream JSON readers.
pub fn write_report(records: &[NegativeTreatment], path: &str) -> Result<(), Error> {
    if records.is_empty() {
        if Path::new(path).exists() {
            std::fs::remove_file(path)?;
            info!(path, "removed stale result file");
        }
        println!("NO NEGATIVELY-TREATED CASES FOUND!");
        return Ok(());
    }

    let json = serde_json::to_string_pretty(records).map_err(std::io::Error::other)?;
    std::fs::write(path, &json)?;
    info!(path, record_count = records.len(), "result file written");

    println!("\nFOUND NEGATIVELY-TREATED CASE(S) (see '{path}'):");
    println!("{json}");
    Ok(())
}

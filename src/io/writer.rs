// src/io/writer.rs
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

/// Write a result document as JSON to a file, or to stdout for `-`.
pub fn write_json<T: Serialize>(value: &T, output: &Path, pretty: bool) -> Result<()> {
    if output.as_os_str() == "-" {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_to(value, &mut handle, pretty)?;
        handle.write_all(b"\n")?;
        Ok(())
    } else {
        let mut file = File::create(output)
            .with_context(|| format!("failed to create {}", output.display()))?;
        write_to(value, &mut file, pretty)?;
        file.write_all(b"\n")?;
        Ok(())
    }
}

fn write_to<T: Serialize, W: Write>(value: &T, writer: &mut W, pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value)?;
    } else {
        serde_json::to_writer(writer, value)?;
    }
    Ok(())
}

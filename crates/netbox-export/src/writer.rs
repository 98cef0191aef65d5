//! CSV writer.
//!
//! Flattens a record set into one of two fixed column schemas and writes it
//! to `<output_dir>/<YYYY.MM.DD>-<suffix>.csv`.

use crate::dispatcher::{Export, RecordSet};
use crate::error::ExportError;
use chrono::NaiveDate;
use netbox_client::{Device, Interface};
use std::fmt::Display;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Header of a device export
pub const DEVICE_COLUMNS: [&str; 7] = ["rack", "position", "name", "device_type", "primary_ip", "id", "url"];

/// Header of an interface export
pub const INTERFACE_COLUMNS: [&str; 4] = ["device", "name", "id", "url"];

/// A finished export file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenExport {
    pub path: PathBuf,
    /// Data rows, header excluded
    pub rows: usize,
}

impl WrittenExport {
    /// Path as shown to the operator: relative paths are shown rooted at `/`
    pub fn display_path(&self) -> String {
        if self.path.is_absolute() {
            self.path.display().to_string()
        } else {
            format!("/{}", self.path.display())
        }
    }
}

fn text<T: Display>(value: Option<&T>) -> String {
    value.map(ToString::to_string).unwrap_or_default()
}

/// Columns of a device row, in [`DEVICE_COLUMNS`] order
pub fn device_row(device: &Device) -> [String; 7] {
    [
        text(device.rack.as_ref()),
        // Debug keeps the ".0" of whole rack units (42.0, not 42)
        device.position.map(|p| format!("{:?}", p)).unwrap_or_default(),
        device.name.clone().unwrap_or_default(),
        device.device_type.to_string(),
        text(device.primary_ip.as_ref()),
        device.id.to_string(),
        device.url.clone(),
    ]
}

/// Columns of an interface row, in [`INTERFACE_COLUMNS`] order
pub fn interface_row(interface: &Interface) -> [String; 4] {
    [
        interface.device.to_string(),
        interface.name.clone(),
        interface.id.to_string(),
        interface.url.clone(),
    ]
}

/// Write the header and one row per record; returns the number of data rows
pub fn write_records<W: io::Write>(writer: W, records: &RecordSet) -> Result<usize, ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .terminator(csv::Terminator::CRLF)
        .from_writer(writer);

    match records {
        RecordSet::Devices(devices) => {
            csv_writer.write_record(DEVICE_COLUMNS)?;
            for device in devices {
                csv_writer.write_record(device_row(device))?;
            }
        }
        RecordSet::Interfaces(interfaces) => {
            csv_writer.write_record(INTERFACE_COLUMNS)?;
            for interface in interfaces {
                csv_writer.write_record(interface_row(interface))?;
            }
        }
    }

    csv_writer.flush()?;
    Ok(records.len())
}

/// Keep a suffix inside the output directory
fn file_safe(suffix: &str) -> String {
    suffix.replace(['/', '\\'], "_")
}

/// `<output_dir>/<YYYY.MM.DD>-<suffix>.csv`
pub fn output_path(output_dir: &Path, date: NaiveDate, suffix: &str) -> PathBuf {
    output_dir.join(format!("{}-{}.csv", date.format("%Y.%m.%d"), file_safe(suffix)))
}

/// Write `export` to its dated file, replacing an earlier export of the same day and suffix
pub fn write_export(output_dir: &Path, date: NaiveDate, export: &Export) -> Result<WrittenExport, ExportError> {
    fs::create_dir_all(output_dir)?;

    let path = output_path(output_dir, date, &export.suffix);
    debug!("Writing {} records to {}", export.records.len(), path.display());

    let file = fs::File::create(&path)?;
    let rows = write_records(file, &export.records)?;

    info!("Wrote {} rows to {}", rows, path.display());
    Ok(WrittenExport { path, rows })
}

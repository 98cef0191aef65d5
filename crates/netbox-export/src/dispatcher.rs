//! Query dispatcher.
//!
//! Turns a [`Selection`] into exactly one list call against NetBox, preceded
//! for filtered selections by the lookup that resolves the filter target.

use crate::error::ExportError;
use crate::menu::Selection;
use netbox_client::{Device, Interface, NetBoxClientTrait, NetBoxError};
use std::fmt;
use std::io::Write;
use tracing::{debug, info, warn};

/// Records returned by a dispatched query
#[derive(Debug, Clone)]
pub enum RecordSet {
    Devices(Vec<Device>),
    Interfaces(Vec<Interface>),
}

impl RecordSet {
    /// Number of records
    pub fn len(&self) -> usize {
        match self {
            RecordSet::Devices(devices) => devices.len(),
            RecordSet::Interfaces(interfaces) => interfaces.len(),
        }
    }
}

/// A record set ready to be written, with the token naming its file
#[derive(Debug, Clone)]
pub struct Export {
    pub records: RecordSet,
    pub suffix: String,
}

/// Reasons a run ends cleanly without writing a file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Abort {
    /// Menu answer or device ID did not parse, or the rack name is ambiguous
    InvalidInput,
    /// No device has the requested ID
    DeviceNotFound(u64),
    /// No rack has the requested name
    RackNotFound(String),
}

impl fmt::Display for Abort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Abort::InvalidInput => f.write_str("Invalid input. Please enter a valid number."),
            Abort::DeviceNotFound(_) => f.write_str(
                "The provided Device ID does not have an entry. Please provide a valid Device ID.",
            ),
            Abort::RackNotFound(_) => f.write_str(
                "The provided Rack Name does not have an entry. Please provide a valid Rack Name.",
            ),
        }
    }
}

/// Result of dispatching a selection
#[derive(Debug, Clone)]
pub enum Outcome {
    Export(Export),
    Aborted(Abort),
}

const COLLECTING: &str = "---\nExecuting API calls and collecting responses. This may take a moment...";

/// Run the query for `selection`, reporting progress to `out`.
///
/// A device or rack that does not exist, or a rack name shared by several
/// racks, yields [`Outcome::Aborted`]; any other NetBox failure, including
/// one during the lookup, is returned as an error.
pub async fn dispatch<C, W>(client: &C, selection: &Selection, out: &mut W) -> Result<Outcome, ExportError>
where
    C: NetBoxClientTrait + ?Sized,
    W: Write,
{
    debug!("Dispatching {:?}", selection);

    let export = match selection {
        Selection::AllDevices => {
            writeln!(out, "{}", COLLECTING)?;
            Export {
                records: RecordSet::Devices(client.query_devices(&[], true).await?),
                suffix: "Devices_All".to_string(),
            }
        }
        Selection::AllInterfaces => {
            writeln!(out, "{}", COLLECTING)?;
            Export {
                records: RecordSet::Interfaces(client.query_interfaces(&[], true).await?),
                suffix: "Interfaces_All".to_string(),
            }
        }
        Selection::DeviceInterfaces { device_id } => {
            let Some(device) = client.find_device(*device_id).await? else {
                return Ok(Outcome::Aborted(Abort::DeviceNotFound(*device_id)));
            };

            writeln!(out, "---\nQuerying Device ID {} > > > > {} ...", device_id, device)?;
            let device_filter = device.id.to_string();
            Export {
                records: RecordSet::Interfaces(
                    client.query_interfaces(&[("device_id", device_filter.as_str())], true).await?,
                ),
                suffix: format!("Interfaces_{}", device),
            }
        }
        Selection::RackDevices { rack_name } => {
            let rack = match client.get_rack_by_name(rack_name).await {
                Ok(Some(rack)) => rack,
                Ok(None) => return Ok(Outcome::Aborted(Abort::RackNotFound(rack_name.clone()))),
                // Same name in several sites: the operator has to pick another name
                Err(NetBoxError::InvalidRequest(reason)) => {
                    warn!("{}", reason);
                    return Ok(Outcome::Aborted(Abort::InvalidInput));
                }
                Err(e) => return Err(e.into()),
            };

            writeln!(out, "---\nQuerying Devices in Rack {} ...", rack)?;
            let rack_filter = rack.id.to_string();
            Export {
                records: RecordSet::Devices(
                    client.query_devices(&[("rack_id", rack_filter.as_str())], true).await?,
                ),
                suffix: format!("Devices_Rack_{}", rack_name),
            }
        }
    };

    info!("Query returned {} records for {}", export.records.len(), export.suffix);
    Ok(Outcome::Export(export))
}

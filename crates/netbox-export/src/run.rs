//! One export run: prompt, dispatch, write.

use crate::dispatcher::{self, Abort, Outcome};
use crate::error::ExportError;
use crate::menu;
use crate::writer::{self, WrittenExport};
use chrono::Local;
use netbox_client::NetBoxClientTrait;
use std::io::{BufRead, Write};
use std::path::Path;
use tracing::info;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Written(WrittenExport),
    Aborted(Abort),
}

/// Drive one interactive export against `client`.
///
/// Operator mistakes end the run with [`RunOutcome::Aborted`] after printing
/// a message; no file is created in that case.
pub async fn run<C, R, W>(client: &C, output_dir: &Path, input: &mut R, out: &mut W) -> Result<RunOutcome, ExportError>
where
    C: NetBoxClientTrait + ?Sized,
    R: BufRead,
    W: Write,
{
    let outcome = match menu::prompt_selection(input, out)? {
        Some(selection) => dispatcher::dispatch(client, &selection, out).await?,
        None => Outcome::Aborted(Abort::InvalidInput),
    };

    match outcome {
        Outcome::Aborted(abort) => {
            match &abort {
                Abort::InvalidInput => info!("Invalid input, nothing written"),
                Abort::DeviceNotFound(id) => info!("Device {} does not exist in NetBox, nothing written", id),
                Abort::RackNotFound(name) => info!("Rack '{}' does not exist in NetBox, nothing written", name),
            }
            writeln!(out, "\n{}", abort)?;
            Ok(RunOutcome::Aborted(abort))
        }
        Outcome::Export(export) => {
            let today = Local::now().date_naive();
            let written = writer::write_export(output_dir, today, &export)?;
            info!("Export complete: {} rows", written.rows);
            writeln!(out, "\nComplete!\nAPI Response has been written to {}", written.display_path())?;
            Ok(RunOutcome::Written(written))
        }
    }
}

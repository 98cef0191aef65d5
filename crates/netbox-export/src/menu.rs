//! Interactive menu.
//!
//! Prompts are written to any `Write` and answers read from any `BufRead`,
//! so the flow can be driven from a terminal or from a test buffer.

use std::io::{self, BufRead, Write};

/// What the operator asked to export
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// 1 - every device
    AllDevices,
    /// 2 - every interface
    AllInterfaces,
    /// 3 - interfaces of one device
    DeviceInterfaces { device_id: u64 },
    /// 4 - devices mounted in one rack
    RackDevices { rack_name: String },
}

const MENU: &str = "What information would you like to see?\n\
1 - All Devices\n\
2 - All Interfaces\n\
3 - Interfaces on a specific Device\n\
4 - Devices in a specific Rack";

const CHOICE_PROMPT: &str = "Enter one of the numbers from above:";
const DEVICE_ID_PROMPT: &str = "\nWhat is the Device ID?";
const RACK_NAME_PROMPT: &str = "\nWhat is the Rack Name?";

/// Parse the top-level menu answer; only 1 through 4 are accepted
pub fn parse_choice(line: &str) -> Option<u8> {
    line.trim().parse::<u8>().ok().filter(|n| (1..=4).contains(n))
}

/// Parse a device ID answer
pub fn parse_device_id(line: &str) -> Option<u64> {
    line.trim().parse().ok()
}

/// Read one line without its line terminator; `None` at end of input
fn read_answer<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> io::Result<Option<String>> {
    writeln!(out, "{}", prompt)?;
    out.flush()?;
    read_answer(input)
}

/// Show the menu and collect a selection.
///
/// Returns `Ok(None)` when the answer is not a valid choice, including a
/// non-numeric device ID and end of input.
pub fn prompt_selection<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> io::Result<Option<Selection>> {
    writeln!(out, "{}", MENU)?;

    let Some(choice) = ask(input, out, CHOICE_PROMPT)?.as_deref().and_then(parse_choice) else {
        return Ok(None);
    };

    let selection = match choice {
        1 => Some(Selection::AllDevices),
        2 => Some(Selection::AllInterfaces),
        3 => ask(input, out, DEVICE_ID_PROMPT)?
            .as_deref()
            .and_then(parse_device_id)
            .map(|device_id| Selection::DeviceInterfaces { device_id }),
        4 => ask(input, out, RACK_NAME_PROMPT)?.map(|rack_name| Selection::RackDevices { rack_name }),
        _ => None,
    };

    Ok(selection)
}

//! DCIM operations for MockNetBoxClient
//!
//! Handles devices, interfaces and racks. Filters understood by the mock:
//! `id`, `device_id`, `rack_id` and `name`; any other key matches nothing.

use super::MockNetBoxClient;
use crate::client::single_match;
use crate::error::NetBoxError;
use crate::models::*;

fn matches_filters<F>(filters: &[(&str, &str)], field: F) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    filters
        .iter()
        .all(|&(key, value)| field(key).is_some_and(|actual| actual == value))
}

fn device_field(device: &Device, key: &str) -> Option<String> {
    match key {
        "id" => Some(device.id.to_string()),
        "name" => device.name.clone(),
        "rack_id" => device.rack.as_ref().map(|r| r.id.to_string()),
        _ => None,
    }
}

fn interface_field(interface: &Interface, key: &str) -> Option<String> {
    match key {
        "id" => Some(interface.id.to_string()),
        "name" => Some(interface.name.clone()),
        "device_id" => Some(interface.device.id.to_string()),
        _ => None,
    }
}

fn rack_field(rack: &Rack, key: &str) -> Option<String> {
    match key {
        "id" => Some(rack.id.to_string()),
        "name" => Some(rack.name.clone()),
        _ => None,
    }
}

pub async fn query_devices(client: &MockNetBoxClient, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Device>, NetBoxError> {
    client.enter("query_devices", filters)?;
    let devices = client.devices.lock().unwrap();
    Ok(devices
        .values()
        .filter(|d| matches_filters(filters, |key| device_field(d, key)))
        .cloned()
        .collect())
}

pub async fn get_device(client: &MockNetBoxClient, id: u64) -> Result<Device, NetBoxError> {
    client.enter(&format!("get_device {}", id), &[])?;
    client.devices
        .lock()
        .unwrap()
        .get(&id)
        .cloned()
        .ok_or_else(|| NetBoxError::NotFound(format!("Device {} not found", id)))
}

pub async fn query_interfaces(client: &MockNetBoxClient, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Interface>, NetBoxError> {
    client.enter("query_interfaces", filters)?;
    let interfaces = client.interfaces.lock().unwrap();
    Ok(interfaces
        .values()
        .filter(|i| matches_filters(filters, |key| interface_field(i, key)))
        .cloned()
        .collect())
}

pub async fn query_racks(client: &MockNetBoxClient, filters: &[(&str, &str)], _fetch_all: bool) -> Result<Vec<Rack>, NetBoxError> {
    client.enter("query_racks", filters)?;
    let racks = client.racks.lock().unwrap();
    Ok(racks
        .values()
        .filter(|r| matches_filters(filters, |key| rack_field(r, key)))
        .cloned()
        .collect())
}

pub async fn get_rack_by_name(client: &MockNetBoxClient, name: &str) -> Result<Option<Rack>, NetBoxError> {
    client.enter("get_rack_by_name", &[("name", name)])?;
    if name.is_empty() {
        return Ok(None);
    }
    let found: Vec<Rack> = client.racks
        .lock()
        .unwrap()
        .values()
        .filter(|r| r.name == name)
        .cloned()
        .collect();
    single_match("rack", name, found)
}

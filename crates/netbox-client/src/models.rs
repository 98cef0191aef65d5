//! NetBox API models
//!
//! These models match the NetBox DCIM REST API serializers, reduced to the
//! fields an export needs. Unknown fields are ignored; nullable fields
//! default to `None` so older and newer NetBox releases both decode.
//! See: netbox/netbox/dcim/api/serializers_/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Device model (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Device {
    pub id: u64,
    pub url: String,
    pub display: String,
    /// Devices may be unnamed in NetBox
    #[serde(default)]
    pub name: Option<String>,
    pub device_type: NestedDeviceType,
    #[serde(default)]
    pub rack: Option<NestedRack>,
    /// Lowest occupied rack unit; NetBox allows half units (e.g. 10.5)
    #[serde(default)]
    pub position: Option<f64>,
    #[serde(default)]
    pub primary_ip: Option<NestedIPAddress>,
}

/// Interface model (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Interface {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
    pub device: NestedDevice,
}

/// Rack model (from DCIM API)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Rack {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
}

// Nested serializers (simplified versions for references)

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedDevice {
    pub id: u64,
    pub url: String,
    pub display: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedDeviceType {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub model: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedRack {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct NestedIPAddress {
    pub id: u64,
    pub url: String,
    pub display: String,
    pub address: String, // e.g., "192.168.1.1/24"
}

// Text forms used when a record is printed or flattened into a CSV cell.

impl fmt::Display for Device {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or(&self.display))
    }
}

impl fmt::Display for Rack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for NestedDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name.as_deref().unwrap_or(&self.display))
    }
}

impl fmt::Display for NestedDeviceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.model)
    }
}

impl fmt::Display for NestedRack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl fmt::Display for NestedIPAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.address)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_decodes_netbox_payload() {
        let payload = serde_json::json!({
            "id": 12,
            "url": "http://netbox/api/dcim/devices/12/",
            "display": "edge-sw01",
            "name": "edge-sw01",
            "device_type": {
                "id": 3,
                "url": "http://netbox/api/dcim/device-types/3/",
                "display": "DCS-7050",
                "manufacturer": {
                    "id": 1,
                    "url": "http://netbox/api/dcim/manufacturers/1/",
                    "display": "Arista",
                    "name": "Arista",
                    "slug": "arista"
                },
                "model": "DCS-7050",
                "slug": "dcs-7050"
            },
            "role": {"id": 2, "name": "Leaf"},
            "rack": {
                "id": 7,
                "url": "http://netbox/api/dcim/racks/7/",
                "display": "R101",
                "name": "R101"
            },
            "position": 42.0,
            "primary_ip": {
                "id": 99,
                "url": "http://netbox/api/ipam/ip-addresses/99/",
                "display": "10.0.0.1/24",
                "family": 4,
                "address": "10.0.0.1/24"
            },
            "status": {"value": "active", "label": "Active"}
        });

        let device: Device = serde_json::from_value(payload).unwrap();
        assert_eq!(device.id, 12);
        assert_eq!(device.to_string(), "edge-sw01");
        assert_eq!(device.device_type.to_string(), "DCS-7050");
        assert_eq!(device.rack.as_ref().unwrap().to_string(), "R101");
        assert_eq!(device.primary_ip.as_ref().unwrap().to_string(), "10.0.0.1/24");
        assert_eq!(device.position, Some(42.0));
    }

    #[test]
    fn test_unnamed_device_falls_back_to_display() {
        let payload = serde_json::json!({
            "id": 4,
            "url": "http://netbox/api/dcim/devices/4/",
            "display": "Unnamed device (4)",
            "name": null,
            "device_type": {
                "id": 3,
                "url": "http://netbox/api/dcim/device-types/3/",
                "display": "PDU",
                "model": "PDU"
            },
            "rack": null,
            "position": null,
            "primary_ip": null
        });

        let device: Device = serde_json::from_value(payload).unwrap();
        assert_eq!(device.to_string(), "Unnamed device (4)");
        assert!(device.rack.is_none());
        assert!(device.primary_ip.is_none());
    }

    #[test]
    fn test_interface_device_reference_text() {
        let payload = serde_json::json!({
            "id": 301,
            "url": "http://netbox/api/dcim/interfaces/301/",
            "display": "Ethernet1",
            "device": {
                "id": 12,
                "url": "http://netbox/api/dcim/devices/12/",
                "display": "edge-sw01",
                "name": "edge-sw01"
            },
            "name": "Ethernet1",
            "mac_address": null
        });

        let interface: Interface = serde_json::from_value(payload).unwrap();
        assert_eq!(interface.device.to_string(), "edge-sw01");
        assert_eq!(interface.name, "Ethernet1");
    }
}

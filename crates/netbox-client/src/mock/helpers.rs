//! Helper functions for creating NetBox model types

use crate::models::*;

/// Helper functions for creating records and nested types in mock implementations
pub struct Helpers {
    base_url: String,
}

impl Helpers {
    pub fn new(base_url: String) -> Self {
        Self { base_url }
    }

    /// Helper to create NestedRack
    pub fn create_nested_rack(&self, rack: &Rack) -> NestedRack {
        NestedRack {
            id: rack.id,
            url: rack.url.clone(),
            display: rack.display.clone(),
            name: rack.name.clone(),
        }
    }

    /// Helper to create NestedDevice
    pub fn create_nested_device(&self, device: &Device) -> NestedDevice {
        NestedDevice {
            id: device.id,
            url: device.url.clone(),
            display: device.display.clone(),
            name: device.name.clone(),
        }
    }

    /// Helper to create NestedDeviceType
    pub fn create_nested_device_type(&self, id: u64, model: &str) -> NestedDeviceType {
        NestedDeviceType {
            id,
            url: format!("{}/api/dcim/device-types/{}/", self.base_url, id),
            display: model.to_string(),
            model: model.to_string(),
        }
    }

    /// Helper to create NestedIPAddress
    pub fn create_nested_ip(&self, id: u64, address: &str) -> NestedIPAddress {
        NestedIPAddress {
            id,
            url: format!("{}/api/ipam/ip-addresses/{}/", self.base_url, id),
            display: address.to_string(),
            address: address.to_string(),
        }
    }

    /// Helper to create a Rack
    pub fn create_rack(&self, id: u64, name: &str) -> Rack {
        Rack {
            id,
            url: format!("{}/api/dcim/racks/{}/", self.base_url, id),
            display: name.to_string(),
            name: name.to_string(),
        }
    }

    /// Helper to create a racked Device with a derived primary IP and position
    pub fn create_device(&self, id: u64, name: &str, rack: Option<&Rack>) -> Device {
        Device {
            id,
            url: format!("{}/api/dcim/devices/{}/", self.base_url, id),
            display: name.to_string(),
            name: Some(name.to_string()),
            device_type: self.create_nested_device_type(1, "Generic 1U"),
            rack: rack.map(|r| self.create_nested_rack(r)),
            position: rack.map(|_| (id % 42 + 1) as f64),
            primary_ip: Some(self.create_nested_ip(id, &format!("10.0.{}.{}/24", id / 256, id % 256))),
        }
    }

    /// Helper to create an Interface on `device`
    pub fn create_interface(&self, id: u64, name: &str, device: &Device) -> Interface {
        Interface {
            id,
            url: format!("{}/api/dcim/interfaces/{}/", self.base_url, id),
            display: name.to_string(),
            name: name.to_string(),
            device: self.create_nested_device(device),
        }
    }
}

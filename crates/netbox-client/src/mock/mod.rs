//! Mock NetBoxClient for unit testing
//!
//! This module provides a mock implementation of NetBoxClientTrait that can be used
//! in unit tests without requiring a running NetBox instance.
//!
//! The mock is organized into:
//! - `dcim.rs` - DCIM operations (devices, interfaces, racks)
//! - `helpers.rs` - Helper functions for creating records and nested types

mod dcim;
mod helpers;

use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

/// Mock NetBoxClient for testing
///
/// This mock stores resources in memory and can be configured to return
/// specific responses for testing different scenarios. Records are kept in
/// ID order so list results are deterministic.
#[derive(Debug, Clone)]
pub struct MockNetBoxClient {
    pub(crate) base_url: String,
    // In-memory storage for resources
    pub(crate) devices: Arc<Mutex<BTreeMap<u64, Device>>>,
    pub(crate) interfaces: Arc<Mutex<BTreeMap<u64, Interface>>>,
    pub(crate) racks: Arc<Mutex<BTreeMap<u64, Rack>>>,
    // Call log, one entry per trait call: "<operation> <filters>"
    pub(crate) calls: Arc<Mutex<Vec<String>>>,
    // Failure injected into the next call
    pub(crate) fail_next: Arc<Mutex<Option<String>>>,
}

impl MockNetBoxClient {
    /// Create a new mock client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            devices: Arc::new(Mutex::new(BTreeMap::new())),
            interfaces: Arc::new(Mutex::new(BTreeMap::new())),
            racks: Arc::new(Mutex::new(BTreeMap::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
            fail_next: Arc::new(Mutex::new(None)),
        }
    }

    /// Add a device to the mock store (for test setup)
    pub fn add_device(&self, device: Device) {
        self.devices.lock().unwrap().insert(device.id, device);
    }

    /// Add an interface to the mock store (for test setup)
    pub fn add_interface(&self, interface: Interface) {
        self.interfaces.lock().unwrap().insert(interface.id, interface);
    }

    /// Add a rack to the mock store (for test setup)
    pub fn add_rack(&self, rack: Rack) {
        self.racks.lock().unwrap().insert(rack.id, rack);
    }

    /// Make the next call fail with `NetBoxError::Api(message)`
    pub fn fail_next_call(&self, message: impl Into<String>) {
        *self.fail_next.lock().unwrap() = Some(message.into());
    }

    /// Calls made so far, oldest first
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    /// Build a device record with this mock's URLs (not stored)
    pub fn build_device(&self, id: u64, name: &str, rack: Option<&Rack>) -> Device {
        self.helpers().create_device(id, name, rack)
    }

    /// Build an interface record attached to `device` (not stored)
    pub fn build_interface(&self, id: u64, name: &str, device: &Device) -> Interface {
        self.helpers().create_interface(id, name, device)
    }

    /// Build a rack record (not stored)
    pub fn build_rack(&self, id: u64, name: &str) -> Rack {
        self.helpers().create_rack(id, name)
    }

    /// Record a call and return the injected failure, if any
    pub(crate) fn enter(&self, operation: &str, filters: &[(&str, &str)]) -> Result<(), NetBoxError> {
        let rendered = filters
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        self.calls
            .lock()
            .unwrap()
            .push(format!("{} {}", operation, rendered).trim_end().to_string());

        match self.fail_next.lock().unwrap().take() {
            Some(message) => Err(NetBoxError::Api(message)),
            None => Ok(()),
        }
    }

    /// Get helpers instance
    pub(crate) fn helpers(&self) -> helpers::Helpers {
        helpers::Helpers::new(self.base_url.clone())
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for MockNetBoxClient {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    // DCIM Operations - delegated to dcim module
    async fn query_devices(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, NetBoxError> {
        dcim::query_devices(self, filters, fetch_all).await
    }

    async fn get_device(&self, id: u64) -> Result<Device, NetBoxError> {
        dcim::get_device(self, id).await
    }

    async fn query_interfaces(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Interface>, NetBoxError> {
        dcim::query_interfaces(self, filters, fetch_all).await
    }

    async fn query_racks(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Rack>, NetBoxError> {
        dcim::query_racks(self, filters, fetch_all).await
    }

    async fn get_rack_by_name(&self, name: &str) -> Result<Option<Rack>, NetBoxError> {
        dcim::get_rack_by_name(self, name).await
    }
}

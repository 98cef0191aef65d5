//! NetBox API client
//!
//! Implements the read-only NetBox REST API client for DCIM lookups.
//! Based on NetBox API structure: /api/dcim/devices/, /api/dcim/interfaces/
//! and /api/dcim/racks/

use crate::common::HttpClient;
use crate::common::query::query_resources;
use crate::error::NetBoxError;
use crate::models::*;
use crate::netbox_trait::NetBoxClientTrait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

/// NetBox API client
#[derive(Debug, Clone)]
pub struct NetBoxClient {
    http: HttpClient,
}

impl NetBoxClient {
    /// Create a new NetBox client
    ///
    /// # Arguments
    /// * `base_url` - NetBox base URL (e.g., "http://netbox:80")
    /// * `token` - API token for authentication
    pub fn new(base_url: String, token: String) -> Result<Self, NetBoxError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(NetBoxError::Http)?;

        Ok(Self {
            http: HttpClient::new(client, base_url, token),
        })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }

    /// Query devices by filters
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("rack_id", "7")])
    /// * `fetch_all` - If true, follow every page; otherwise return the first page only
    ///
    /// # Returns
    /// * `Ok(Vec<Device>)` - List of matching devices
    /// * `Err(NetBoxError)` - If the request fails
    pub async fn query_devices(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, NetBoxError> {
        debug!("Querying devices with filters: {:?}", filters);
        query_resources(&self.http, "dcim/devices", filters, fetch_all).await
    }

    /// Get a device by ID
    ///
    /// # Arguments
    /// * `id` - Device ID
    ///
    /// # Returns
    /// * `Ok(Device)` - The device object
    /// * `Err(NetBoxError::NotFound)` - If NetBox has no device with this ID
    /// * `Err(NetBoxError)` - If the request fails
    pub async fn get_device(&self, id: u64) -> Result<Device, NetBoxError> {
        debug!("Fetching device {} from NetBox", id);
        self.http
            .get(&format!("/api/dcim/devices/{}/", id))
            .await
            .map_err(|e| match e {
                NetBoxError::NotFound(_) => NetBoxError::NotFound(format!("Device {} not found", id)),
                other => other,
            })
    }

    /// Query interfaces by filters
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("device_id", "1"), ("name", "eth0")])
    /// * `fetch_all` - If true, follow every page; otherwise return the first page only
    ///
    /// # Returns
    /// * `Ok(Vec<Interface>)` - List of matching interfaces
    /// * `Err(NetBoxError)` - If the request fails
    pub async fn query_interfaces(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Interface>, NetBoxError> {
        debug!("Querying interfaces with filters: {:?}", filters);
        query_resources(&self.http, "dcim/interfaces", filters, fetch_all).await
    }

    /// Query racks by filters
    ///
    /// # Arguments
    /// * `filters` - Query parameters (e.g., [("name", "R101"), ("site_id", "2")])
    /// * `fetch_all` - If true, follow every page; otherwise return the first page only
    pub async fn query_racks(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Rack>, NetBoxError> {
        debug!("Querying racks with filters: {:?}", filters);
        query_resources(&self.http, "dcim/racks", filters, fetch_all).await
    }

    /// Get a rack by its exact name
    ///
    /// # Returns
    /// * `Ok(Some(Rack))` - The single rack with this name
    /// * `Ok(None)` - If no rack has this name, or the name is empty
    /// * `Err(NetBoxError::InvalidRequest)` - If the name matches racks in several sites
    pub async fn get_rack_by_name(&self, name: &str) -> Result<Option<Rack>, NetBoxError> {
        // NetBox ignores an empty filter value and would list every rack
        if name.is_empty() {
            return Ok(None);
        }

        let racks = self.query_racks(&[("name", name)], true).await?;
        let exact: Vec<Rack> = racks.into_iter().filter(|r| r.name == name).collect();
        single_match("rack", name, exact)
    }
}

/// Reduce a filtered lookup to at most one object
pub(crate) fn single_match<T>(kind: &str, key: &str, mut found: Vec<T>) -> Result<Option<T>, NetBoxError> {
    match found.len() {
        0 => Ok(None),
        1 => Ok(found.pop()),
        n => Err(NetBoxError::InvalidRequest(format!(
            "{} lookup '{}' matched {} objects, expected one",
            kind, key, n
        ))),
    }
}

#[async_trait::async_trait]
impl NetBoxClientTrait for NetBoxClient {
    fn base_url(&self) -> &str {
        self.base_url()
    }

    async fn query_devices(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, NetBoxError> {
        self.query_devices(filters, fetch_all).await
    }

    async fn get_device(&self, id: u64) -> Result<Device, NetBoxError> {
        self.get_device(id).await
    }

    async fn query_interfaces(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Interface>, NetBoxError> {
        self.query_interfaces(filters, fetch_all).await
    }

    async fn query_racks(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Rack>, NetBoxError> {
        self.query_racks(filters, fetch_all).await
    }

    async fn get_rack_by_name(&self, name: &str) -> Result<Option<Rack>, NetBoxError> {
        self.get_rack_by_name(name).await
    }
}

//! NetBoxClient trait for mocking
//!
//! This trait abstracts the NetBoxClient to enable mocking in unit tests.
//! The concrete NetBoxClient implements this trait, and tests can use mock implementations.

use crate::error::NetBoxError;
use crate::models::*;

/// Trait for NetBox API client operations
///
/// This trait enables mocking of NetBox API calls for unit testing.
/// All async methods must be `Send` to work with Tokio's work-stealing runtime.
#[async_trait::async_trait]
pub trait NetBoxClientTrait: Send + Sync {
    /// Get the base URL
    fn base_url(&self) -> &str;

    // DCIM Operations
    async fn query_devices(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Device>, NetBoxError>;
    async fn get_device(&self, id: u64) -> Result<Device, NetBoxError>;
    async fn query_interfaces(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Interface>, NetBoxError>;
    async fn query_racks(&self, filters: &[(&str, &str)], fetch_all: bool) -> Result<Vec<Rack>, NetBoxError>;
    async fn get_rack_by_name(&self, name: &str) -> Result<Option<Rack>, NetBoxError>;

    /// Get a device by ID, treating "not found" as an absent device
    ///
    /// Any other failure (transport, authentication, decoding) is still an error.
    async fn find_device(&self, id: u64) -> Result<Option<Device>, NetBoxError> {
        match self.get_device(id).await {
            Ok(device) => Ok(Some(device)),
            Err(e) if e.is_not_found() => Ok(None),
            Err(e) => Err(e),
        }
    }
}

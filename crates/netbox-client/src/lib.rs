//! NetBox REST API Client
//!
//! A read-only Rust client for the NetBox DCIM REST API.
//! Provides type-safe models and lookups for devices, interfaces and racks.
//!
//! # Example
//!
//! ```no_run
//! use netbox_client::{NetBoxClient, NetBoxClientTrait};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // Create a client
//! let client = NetBoxClient::new(
//!     "http://netbox:80".to_string(),
//!     "your-api-token".to_string(),
//! )?;
//!
//! // Resolve a rack by name, then list every device mounted in it
//! if let Some(rack) = client.get_rack_by_name("R101").await? {
//!     let rack_id = rack.id.to_string();
//!     let devices = client.query_devices(&[("rack_id", rack_id.as_str())], true).await?;
//!     println!("{} devices in {}", devices.len(), rack);
//! }
//!
//! // Look up a device that may not exist
//! let device = client.find_device(42).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Features
//!
//! - **DCIM Lookups**: Devices, interfaces, racks
//! - **Pagination**: Follows NetBox `next` links to fetch every page
//! - **Mocking**: `test-util` feature provides an in-memory `MockNetBoxClient`

pub mod client;
pub mod common;
pub mod error;
pub mod models;
#[path = "trait.rs"]
pub mod netbox_trait;
#[cfg(feature = "test-util")]
pub mod mock;
#[cfg(test)]
mod test_utils;

pub use client::NetBoxClient;
pub use common::{HttpClient, PaginatedResponse};
pub use error::NetBoxError;
pub use models::*;
pub use netbox_trait::NetBoxClientTrait;
#[cfg(feature = "test-util")]
pub use mock::MockNetBoxClient;

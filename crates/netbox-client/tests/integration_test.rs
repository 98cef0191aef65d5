//! Integration tests for NetBox client
//!
//! These tests require a running NetBox instance.
//! Set NETBOX_URL and NETBOX_TOKEN environment variables to run.

use netbox_client::{NetBoxClient, NetBoxError};

fn live_client() -> NetBoxClient {
    let url = std::env::var("NETBOX_URL")
        .unwrap_or_else(|_| "http://localhost:8001".to_string());
    let token = std::env::var("NETBOX_TOKEN")
        .expect("NETBOX_TOKEN environment variable must be set");

    NetBoxClient::new(url, token).expect("Failed to create client")
}

#[tokio::test]
#[ignore] // Requires running NetBox instance
async fn test_query_devices() {
    let client = live_client();

    let devices = client.query_devices(&[], true).await
        .expect("Failed to query devices");

    println!("Found {} devices", devices.len());
}

#[tokio::test]
#[ignore]
async fn test_query_interfaces_for_first_device() {
    let client = live_client();

    let devices = client.query_devices(&[], false).await
        .expect("Failed to query devices");

    if let Some(device) = devices.first() {
        let device_id = device.id.to_string();
        let interfaces = client.query_interfaces(&[("device_id", device_id.as_str())], true).await
            .expect("Failed to query interfaces");

        assert!(interfaces.iter().all(|i| i.device.id == device.id));
        println!("Device {} has {} interfaces", device, interfaces.len());
    }
}

#[tokio::test]
#[ignore]
async fn test_missing_device_is_not_found() {
    let client = live_client();

    let result = client.get_device(u64::from(u32::MAX)).await;
    assert!(matches!(result, Err(NetBoxError::NotFound(_))));
}

#[tokio::test]
#[ignore]
async fn test_missing_rack_is_none() {
    let client = live_client();

    let rack = client.get_rack_by_name("no-such-rack-7f3a").await
        .expect("Failed to query racks");
    assert!(rack.is_none());
}

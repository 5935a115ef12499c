// merakiops-api: Async Rust client for the Meraki Dashboard API (v1)

pub mod client;
pub mod devices;
pub mod error;
pub mod models;
pub mod organizations;
pub mod switch;
pub mod transport;
pub mod wireless;

pub use client::DashboardClient;
pub use error::Error;
pub use models::{
    Admin, CameraZoneStat, CdpNeighbor, Client, ClientUsage, Device, FirewallPerformance,
    LldpNeighbor, NeighborRecord, Network, Organization, PortNeighbors, Ssid, SwitchPort,
    SwitchPortStatus, UpdateSwitchPortRequest,
};
pub use transport::{TlsMode, TransportConfig};

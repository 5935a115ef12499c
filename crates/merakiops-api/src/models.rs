// Dashboard API response types
//
// Models for the Meraki Dashboard API v1. Field names are camelCase on the
// wire. Optional fields use `#[serde(default)]` liberally because the API
// omits or nulls fields depending on product type and firmware.

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

// ── Organization ─────────────────────────────────────────────────────

/// Organization from `GET /organizations`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organization {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

/// Dashboard administrator from `GET /organizations/{id}/admins`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Admin {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub org_access: Option<String>,
}

// ── Device ───────────────────────────────────────────────────────────

/// Inventory device from `GET /organizations/{id}/devices`.
///
/// `name` is frequently null for unclaimed or freshly added hardware.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub serial: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub network_id: Option<String>,
    #[serde(default)]
    pub mac: Option<String>,
    #[serde(default)]
    pub lan_ip: Option<String>,
    #[serde(default)]
    pub firmware: Option<String>,
}

impl Device {
    /// Display name, or `""` when the device has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

// ── Network ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Network {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub product_types: Vec<String>,
    #[serde(default)]
    pub time_zone: Option<String>,
}

/// Wireless SSID slot from `GET /networks/{id}/wireless/ssids`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ssid {
    pub number: u32,
    pub name: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub auth_mode: Option<String>,
}

// ── Switch ───────────────────────────────────────────────────────────

/// Full switch port configuration from `GET /devices/{serial}/switch/ports`.
///
/// Also the response body of the port update endpoint. Fields the API
/// adds later land in `extra` so the post-write view stays complete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPort {
    pub port_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub poe_enabled: Option<bool>,
    #[serde(default, rename = "type")]
    pub port_type: Option<String>,
    #[serde(default)]
    pub vlan: Option<u32>,
    #[serde(default)]
    pub voice_vlan: Option<u32>,
    #[serde(default)]
    pub allowed_vlans: Option<String>,
    #[serde(default)]
    pub isolation_enabled: Option<bool>,
    #[serde(default)]
    pub rstp_enabled: Option<bool>,
    #[serde(default)]
    pub stp_guard: Option<String>,
    #[serde(default)]
    pub link_negotiation: Option<String>,
    #[serde(default)]
    pub port_schedule_id: Option<String>,
    #[serde(default)]
    pub udld: Option<String>,
    /// Catch-all for undocumented fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Runtime port state from `GET /devices/{serial}/switch/ports/statuses`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SwitchPortStatus {
    pub port_id: String,
    #[serde(default)]
    pub enabled: bool,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub errors: Vec<String>,
    #[serde(default)]
    pub warnings: Vec<String>,
    #[serde(default)]
    pub speed: Option<String>,
    #[serde(default)]
    pub duplex: Option<String>,
    /// Keys: `total`, `sent`, `recv`.
    #[serde(default)]
    pub usage_in_kb: IndexMap<String, f64>,
    #[serde(default)]
    pub client_count: Option<u32>,
    /// Keys: `total`, `sent`, `recv`.
    #[serde(default)]
    pub traffic_in_kbps: IndexMap<String, f64>,
}

/// Writable subset of a switch port, sent to
/// `PUT /devices/{serial}/switch/ports/{portId}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSwitchPortRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub port_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vlan: Option<u32>,
}

// ── Appliance / camera ───────────────────────────────────────────────

/// `GET /devices/{serial}/appliance/performance`
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirewallPerformance {
    pub perf_score: f64,
}

/// One zone entry from `GET /devices/{serial}/camera/analytics/recent`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CameraZoneStat {
    pub zone_id: u64,
    #[serde(default)]
    pub start_ts: Option<DateTime<Utc>>,
    #[serde(default)]
    pub end_ts: Option<DateTime<Utc>>,
    #[serde(default)]
    pub entrances: u64,
    #[serde(default)]
    pub average_count: f64,
}

// ── Clients ──────────────────────────────────────────────────────────

/// Client seen by a device, from `GET /devices/{serial}/clients`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    #[serde(default)]
    pub usage: ClientUsage,
    #[serde(default)]
    pub description: Option<String>,
    pub mac: String,
    #[serde(default)]
    pub ip: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub vlan: Option<u32>,
    #[serde(default)]
    pub switchport: Option<String>,
    #[serde(default)]
    pub dhcp_hostname: Option<String>,
}

/// Usage in kilobytes over the query window.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ClientUsage {
    #[serde(default)]
    pub sent: f64,
    #[serde(default)]
    pub recv: f64,
}

// ── Discovery neighbors ──────────────────────────────────────────────

/// `GET /devices/{serial}/lldpCdp`
///
/// ```json
/// { "sourceMac": "...", "ports": { "8": { "cdp": {...}, "lldp": {...} } } }
/// ```
/// Port order is kept as returned by the API.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NeighborRecord {
    #[serde(default)]
    pub source_mac: Option<String>,
    #[serde(default)]
    pub ports: IndexMap<String, PortNeighbors>,
}

impl NeighborRecord {
    /// `true` when no local port reports a CDP or LLDP peer.
    pub fn is_empty(&self) -> bool {
        self.ports
            .values()
            .all(|p| p.cdp.is_none() && p.lldp.is_none())
    }
}

/// Discovery entries for one local port, keyed by protocol.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortNeighbors {
    #[serde(default)]
    pub cdp: Option<CdpNeighbor>,
    #[serde(default)]
    pub lldp: Option<LldpNeighbor>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CdpNeighbor {
    #[serde(default)]
    pub device_id: Option<String>,
    #[serde(default)]
    pub port_id: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub source_port: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LldpNeighbor {
    #[serde(default)]
    pub system_name: Option<String>,
    #[serde(default)]
    pub port_id: Option<String>,
    #[serde(default)]
    pub management_address: Option<String>,
    #[serde(default)]
    pub source_port: Option<String>,
}

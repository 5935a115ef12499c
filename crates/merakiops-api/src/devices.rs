// Device-scoped endpoints
//
// Read-only queries keyed by device serial that are not switch specific:
// clients, discovery neighbors, appliance performance and camera analytics.

use tracing::debug;

use crate::client::DashboardClient;
use crate::error::Error;
use crate::models::{CameraZoneStat, Client, FirewallPerformance, NeighborRecord};

impl DashboardClient {
    /// Clients seen by a device over the default timespan.
    ///
    /// `GET /devices/{serial}/clients`
    pub async fn list_device_clients(&self, serial: &str) -> Result<Vec<Client>, Error> {
        debug!(serial, "listing device clients");
        self.get(&["devices", serial, "clients"]).await
    }

    /// CDP and LLDP neighbors per local port.
    ///
    /// `GET /devices/{serial}/lldpCdp`
    pub async fn get_device_lldp_cdp(&self, serial: &str) -> Result<NeighborRecord, Error> {
        debug!(serial, "fetching discovery neighbors");
        self.get(&["devices", serial, "lldpCdp"]).await
    }

    /// `GET /devices/{serial}/appliance/performance`
    pub async fn get_appliance_performance(
        &self,
        serial: &str,
    ) -> Result<FirewallPerformance, Error> {
        debug!(serial, "fetching appliance performance");
        self.get(&["devices", serial, "appliance", "performance"])
            .await
    }

    /// `GET /devices/{serial}/camera/analytics/recent`
    pub async fn get_camera_analytics_recent(
        &self,
        serial: &str,
    ) -> Result<Vec<CameraZoneStat>, Error> {
        debug!(serial, "fetching recent camera analytics");
        self.get(&["devices", serial, "camera", "analytics", "recent"])
            .await
    }
}

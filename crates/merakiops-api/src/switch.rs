// Switch endpoints
//
// Port configuration (read + update) and runtime port statuses.

use tracing::debug;

use crate::client::DashboardClient;
use crate::error::Error;
use crate::models::{SwitchPort, SwitchPortStatus, UpdateSwitchPortRequest};

impl DashboardClient {
    /// `GET /devices/{serial}/switch/ports`
    pub async fn list_switch_ports(&self, serial: &str) -> Result<Vec<SwitchPort>, Error> {
        debug!(serial, "listing switch ports");
        self.get(&["devices", serial, "switch", "ports"]).await
    }

    /// `GET /devices/{serial}/switch/ports/statuses`
    pub async fn list_switch_port_statuses(
        &self,
        serial: &str,
    ) -> Result<Vec<SwitchPortStatus>, Error> {
        debug!(serial, "listing switch port statuses");
        self.get(&["devices", serial, "switch", "ports", "statuses"])
            .await
    }

    /// Update a single port and return the configuration the API applied.
    ///
    /// `PUT /devices/{serial}/switch/ports/{portId}`
    pub async fn update_switch_port(
        &self,
        serial: &str,
        port_id: &str,
        update: &UpdateSwitchPortRequest,
    ) -> Result<SwitchPort, Error> {
        debug!(serial, port_id, ?update, "updating switch port");
        self.put(&["devices", serial, "switch", "ports", port_id], update)
            .await
    }
}

// Wireless endpoints

use tracing::debug;

use crate::client::DashboardClient;
use crate::error::Error;
use crate::models::Ssid;

impl DashboardClient {
    /// All SSID slots of a network, configured or not.
    ///
    /// `GET /networks/{networkId}/wireless/ssids`
    pub async fn list_network_ssids(&self, network_id: &str) -> Result<Vec<Ssid>, Error> {
        debug!(network_id, "listing network SSIDs");
        self.get(&["networks", network_id, "wireless", "ssids"])
            .await
    }
}

// ── Inventory gateway ──
//
// The typed query surface handlers and the resolver depend on. The
// production implementation is `merakiops_api::DashboardClient`; tests
// substitute an in-memory inventory.

use async_trait::async_trait;
use merakiops_api::DashboardClient;

use crate::error::CoreError;
use crate::model::{
    Admin, CameraZoneStat, Client, Device, FirewallPerformance, NeighborRecord, Network,
    Organization, Ssid, SwitchPort, SwitchPortStatus, UpdateSwitchPortRequest,
};

/// Read and write operations against the network inventory.
///
/// Every call goes to the backing system; implementations must not cache.
#[async_trait]
pub trait Inventory: Send + Sync {
    async fn list_organizations(&self) -> Result<Vec<Organization>, CoreError>;

    async fn list_organization_admins(&self, org_id: &str) -> Result<Vec<Admin>, CoreError>;

    async fn list_devices(&self, org_id: &str) -> Result<Vec<Device>, CoreError>;

    async fn list_networks(&self, org_id: &str) -> Result<Vec<Network>, CoreError>;

    async fn list_switch_ports(&self, serial: &str) -> Result<Vec<SwitchPort>, CoreError>;

    async fn list_switch_port_statuses(
        &self,
        serial: &str,
    ) -> Result<Vec<SwitchPortStatus>, CoreError>;

    async fn get_firewall_performance(
        &self,
        serial: &str,
    ) -> Result<FirewallPerformance, CoreError>;

    async fn list_network_ssids(&self, network_id: &str) -> Result<Vec<Ssid>, CoreError>;

    async fn get_recent_camera_analytics(
        &self,
        serial: &str,
    ) -> Result<Vec<CameraZoneStat>, CoreError>;

    async fn list_device_clients(&self, serial: &str) -> Result<Vec<Client>, CoreError>;

    async fn get_device_neighbors(&self, serial: &str) -> Result<NeighborRecord, CoreError>;

    /// Apply `update` to one port and return the configuration the
    /// backing system reports after the write.
    async fn update_switch_port(
        &self,
        serial: &str,
        port_id: &str,
        update: &UpdateSwitchPortRequest,
    ) -> Result<SwitchPort, CoreError>;
}

#[async_trait]
impl Inventory for DashboardClient {
    async fn list_organizations(&self) -> Result<Vec<Organization>, CoreError> {
        Ok(DashboardClient::list_organizations(self).await?)
    }

    async fn list_organization_admins(&self, org_id: &str) -> Result<Vec<Admin>, CoreError> {
        Ok(DashboardClient::list_organization_admins(self, org_id).await?)
    }

    async fn list_devices(&self, org_id: &str) -> Result<Vec<Device>, CoreError> {
        Ok(self.list_organization_devices(org_id).await?)
    }

    async fn list_networks(&self, org_id: &str) -> Result<Vec<Network>, CoreError> {
        Ok(self.list_organization_networks(org_id).await?)
    }

    async fn list_switch_ports(&self, serial: &str) -> Result<Vec<SwitchPort>, CoreError> {
        Ok(DashboardClient::list_switch_ports(self, serial).await?)
    }

    async fn list_switch_port_statuses(
        &self,
        serial: &str,
    ) -> Result<Vec<SwitchPortStatus>, CoreError> {
        Ok(DashboardClient::list_switch_port_statuses(self, serial).await?)
    }

    async fn get_firewall_performance(
        &self,
        serial: &str,
    ) -> Result<FirewallPerformance, CoreError> {
        Ok(self.get_appliance_performance(serial).await?)
    }

    async fn list_network_ssids(&self, network_id: &str) -> Result<Vec<Ssid>, CoreError> {
        Ok(DashboardClient::list_network_ssids(self, network_id).await?)
    }

    async fn get_recent_camera_analytics(
        &self,
        serial: &str,
    ) -> Result<Vec<CameraZoneStat>, CoreError> {
        Ok(self.get_camera_analytics_recent(serial).await?)
    }

    async fn list_device_clients(&self, serial: &str) -> Result<Vec<Client>, CoreError> {
        Ok(DashboardClient::list_device_clients(self, serial).await?)
    }

    async fn get_device_neighbors(&self, serial: &str) -> Result<NeighborRecord, CoreError> {
        Ok(self.get_device_lldp_cdp(serial).await?)
    }

    async fn update_switch_port(
        &self,
        serial: &str,
        port_id: &str,
        update: &UpdateSwitchPortRequest,
    ) -> Result<SwitchPort, CoreError> {
        Ok(DashboardClient::update_switch_port(self, serial, port_id, update).await?)
    }
}

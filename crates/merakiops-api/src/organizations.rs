// Organization-scoped endpoints
//
// Everything keyed by an organization id: the org list itself, admins,
// inventory devices and networks.

use tracing::debug;

use crate::client::DashboardClient;
use crate::error::Error;
use crate::models::{Admin, Device, Network, Organization};

impl DashboardClient {
    /// List all organizations the API key can see.
    ///
    /// `GET /organizations`
    pub async fn list_organizations(&self) -> Result<Vec<Organization>, Error> {
        debug!("listing organizations");
        self.get(&["organizations"]).await
    }

    /// `GET /organizations/{organizationId}/admins`
    pub async fn list_organization_admins(&self, org_id: &str) -> Result<Vec<Admin>, Error> {
        debug!(org_id, "listing organization admins");
        self.get(&["organizations", org_id, "admins"]).await
    }

    /// `GET /organizations/{organizationId}/devices`
    pub async fn list_organization_devices(&self, org_id: &str) -> Result<Vec<Device>, Error> {
        debug!(org_id, "listing organization devices");
        self.get(&["organizations", org_id, "devices"]).await
    }

    /// `GET /organizations/{organizationId}/networks`
    pub async fn list_organization_networks(&self, org_id: &str) -> Result<Vec<Network>, Error> {
        debug!(org_id, "listing organization networks");
        self.get(&["organizations", org_id, "networks"]).await
    }
}

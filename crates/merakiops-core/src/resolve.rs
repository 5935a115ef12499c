// ── Name resolution ──
//
// Chat users speak in names; the Dashboard API wants ids and serials.
// Each lookup lists the scope fresh from the inventory.

use tracing::debug;

use crate::error::CoreError;
use crate::inventory::Inventory;

/// Translates organization, device and network names to identifiers.
#[derive(Clone, Copy)]
pub struct Resolver<'a> {
    inventory: &'a dyn Inventory,
}

impl<'a> Resolver<'a> {
    pub fn new(inventory: &'a dyn Inventory) -> Self {
        Self { inventory }
    }

    /// Organization id for `name`, compared case-insensitively.
    ///
    /// When several organizations share a name the first one in API
    /// order wins.
    pub async fn resolve_organization_id(&self, name: &str) -> Result<String, CoreError> {
        let wanted = name.to_lowercase();
        let orgs = self.inventory.list_organizations().await?;
        let id = orgs
            .into_iter()
            .find(|o| o.name.to_lowercase() == wanted)
            .map(|o| o.id)
            .ok_or_else(|| CoreError::not_found("Organization", name))?;
        debug!(org = name, id, "resolved organization");
        Ok(id)
    }

    /// Serial of the device named exactly `device_name` in `org_name`.
    pub async fn resolve_device_serial(
        &self,
        org_name: &str,
        device_name: &str,
    ) -> Result<String, CoreError> {
        let org_id = self.resolve_organization_id(org_name).await?;
        let devices = self.inventory.list_devices(&org_id).await?;
        let serial = devices
            .into_iter()
            .find(|d| d.name.as_deref() == Some(device_name))
            .map(|d| d.serial)
            .ok_or_else(|| CoreError::not_found("Device", device_name))?;
        debug!(device = device_name, serial, "resolved device");
        Ok(serial)
    }

    /// Id of the network named exactly `network_name` in `org_name`.
    pub async fn resolve_network_id(
        &self,
        org_name: &str,
        network_name: &str,
    ) -> Result<String, CoreError> {
        let org_id = self.resolve_organization_id(org_name).await?;
        let networks = self.inventory.list_networks(&org_id).await?;
        let id = networks
            .into_iter()
            .find(|n| n.name == network_name)
            .map(|n| n.id)
            .ok_or_else(|| CoreError::not_found("Network", network_name))?;
        debug!(network = network_name, id, "resolved network");
        Ok(id)
    }
}

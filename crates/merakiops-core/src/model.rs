// ── Domain model ──
//
// Wire types come straight from `merakiops-api`; this module adds the
// device classification used by device-type menus.

use strum::{AsRefStr, Display, EnumIter, EnumString, IntoEnumIterator};

pub use merakiops_api::{
    Admin, CameraZoneStat, CdpNeighbor, Client, ClientUsage, Device, FirewallPerformance,
    LldpNeighbor, NeighborRecord, Network, Organization, PortNeighbors, Ssid, SwitchPort,
    SwitchPortStatus, UpdateSwitchPortRequest,
};

/// Hardware class selected from a device-type menu.
///
/// The string form (`all`, `aps`, ...) is the token carried in commands.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, AsRefStr,
)]
#[strum(serialize_all = "lowercase")]
pub enum DeviceCategory {
    All,
    Aps,
    Cameras,
    Firewalls,
    Switches,
}

impl DeviceCategory {
    /// Model code prefix for this class. `None` for [`DeviceCategory::All`].
    pub fn model_prefix(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            Self::Aps => Some("MR"),
            Self::Cameras => Some("MV"),
            Self::Firewalls => Some("MX"),
            Self::Switches => Some("MS"),
        }
    }

    /// Menu label.
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::Aps => "APs",
            Self::Cameras => "Cameras",
            Self::Firewalls => "Firewalls",
            Self::Switches => "Switches",
        }
    }

    pub fn matches(self, device: &Device) -> bool {
        self.model_prefix()
            .is_none_or(|prefix| device.model.contains(prefix))
    }

    /// Every category, in menu order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Filter `devices` by a device-type token.
///
/// `all` keeps everything; `aps`, `cameras`, `firewalls` and `switches`
/// keep devices whose model contains the class prefix. Any other token
/// yields an empty list rather than an error.
pub fn parse_device_list(token: &str, devices: &[Device]) -> Vec<Device> {
    let Ok(category) = token.parse::<DeviceCategory>() else {
        return Vec::new();
    };
    devices
        .iter()
        .filter(|d| category.matches(d))
        .cloned()
        .collect()
}

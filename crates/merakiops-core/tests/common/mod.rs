// Shared fixtures: an in-memory inventory and a dispatcher that records
// everything sent to the user.

#![allow(dead_code, clippy::unwrap_used)]

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use merakiops_core::model::{
    Admin, CameraZoneStat, Client, ClientUsage, Device, FirewallPerformance, NeighborRecord,
    Network, Organization, Ssid, SwitchPort, SwitchPortStatus, UpdateSwitchPortRequest,
};
use merakiops_core::{
    Block, Choice, Context, CoreError, DialogField, Dispatcher, Inventory, Outcome, Registry,
    Table,
};

// ── Inventory ───────────────────────────────────────────────────────

#[derive(Default)]
pub struct FakeInventory {
    pub orgs: Vec<Organization>,
    pub admins: HashMap<String, Vec<Admin>>,
    pub devices: HashMap<String, Vec<Device>>,
    pub networks: HashMap<String, Vec<Network>>,
    pub ports: HashMap<String, Vec<SwitchPort>>,
    pub statuses: HashMap<String, Vec<SwitchPortStatus>>,
    pub zones: HashMap<String, Vec<CameraZoneStat>>,
    pub clients: HashMap<String, Vec<Client>>,
    pub neighbors: HashMap<String, NeighborRecord>,
    /// Serials whose device-scoped calls fail upstream.
    pub failing: Vec<String>,
    /// Returned by `update_switch_port`; the request is echoed when unset.
    pub update_response: Option<SwitchPort>,
    pub updates: Mutex<Vec<(String, String, UpdateSwitchPortRequest)>>,
    pub org_list_calls: Mutex<usize>,
}

impl FakeInventory {
    fn check(&self, serial: &str) -> Result<(), CoreError> {
        if self.failing.iter().any(|s| s == serial) {
            return Err(CoreError::Upstream {
                message: format!("device {serial} unreachable"),
                status: Some(500),
            });
        }
        Ok(())
    }

    pub fn updates(&self) -> Vec<(String, String, UpdateSwitchPortRequest)> {
        self.updates.lock().unwrap().clone()
    }
}

#[async_trait]
impl Inventory for FakeInventory {
    async fn list_organizations(&self) -> Result<Vec<Organization>, CoreError> {
        *self.org_list_calls.lock().unwrap() += 1;
        Ok(self.orgs.clone())
    }

    async fn list_organization_admins(&self, org_id: &str) -> Result<Vec<Admin>, CoreError> {
        Ok(self.admins.get(org_id).cloned().unwrap_or_default())
    }

    async fn list_devices(&self, org_id: &str) -> Result<Vec<Device>, CoreError> {
        Ok(self.devices.get(org_id).cloned().unwrap_or_default())
    }

    async fn list_networks(&self, org_id: &str) -> Result<Vec<Network>, CoreError> {
        Ok(self.networks.get(org_id).cloned().unwrap_or_default())
    }

    async fn list_switch_ports(&self, serial: &str) -> Result<Vec<SwitchPort>, CoreError> {
        self.check(serial)?;
        Ok(self.ports.get(serial).cloned().unwrap_or_default())
    }

    async fn list_switch_port_statuses(
        &self,
        serial: &str,
    ) -> Result<Vec<SwitchPortStatus>, CoreError> {
        self.check(serial)?;
        Ok(self.statuses.get(serial).cloned().unwrap_or_default())
    }

    async fn get_firewall_performance(
        &self,
        serial: &str,
    ) -> Result<FirewallPerformance, CoreError> {
        self.check(serial)?;
        Ok(FirewallPerformance { perf_score: 42.0 })
    }

    async fn list_network_ssids(&self, _network_id: &str) -> Result<Vec<Ssid>, CoreError> {
        Ok(vec![Ssid {
            number: 0,
            name: "Corp".into(),
            enabled: true,
            auth_mode: Some("psk".into()),
        }])
    }

    async fn get_recent_camera_analytics(
        &self,
        serial: &str,
    ) -> Result<Vec<CameraZoneStat>, CoreError> {
        self.check(serial)?;
        Ok(self.zones.get(serial).cloned().unwrap_or_default())
    }

    async fn list_device_clients(&self, serial: &str) -> Result<Vec<Client>, CoreError> {
        self.check(serial)?;
        Ok(self.clients.get(serial).cloned().unwrap_or_default())
    }

    async fn get_device_neighbors(&self, serial: &str) -> Result<NeighborRecord, CoreError> {
        self.check(serial)?;
        Ok(self.neighbors.get(serial).cloned().unwrap_or_default())
    }

    async fn update_switch_port(
        &self,
        serial: &str,
        port_id: &str,
        update: &UpdateSwitchPortRequest,
    ) -> Result<SwitchPort, CoreError> {
        self.check(serial)?;
        self.updates
            .lock()
            .unwrap()
            .push((serial.to_owned(), port_id.to_owned(), update.clone()));
        Ok(self.update_response.clone().unwrap_or_else(|| SwitchPort {
            port_id: port_id.to_owned(),
            name: update.name.clone(),
            enabled: update.enabled.unwrap_or_default(),
            port_type: update.port_type.clone(),
            vlan: update.vlan,
            ..SwitchPort::default()
        }))
    }
}

// ── Dispatcher ──────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Sent {
    Markdown(String),
    Blocks(Vec<Block>),
    Table(Table),
    Menu {
        followup: String,
        title: String,
        choices: Vec<Choice>,
    },
    Dialog {
        group: String,
        followup: String,
        title: String,
        fields: Vec<DialogField>,
    },
    Warning(String),
}

#[derive(Default)]
pub struct Recorder {
    sent: Mutex<Vec<Sent>>,
}

impl Recorder {
    /// Drain everything sent so far.
    pub fn take(&self) -> Vec<Sent> {
        std::mem::take(&mut *self.sent.lock().unwrap())
    }

    fn push(&self, sent: Sent) {
        self.sent.lock().unwrap().push(sent);
    }
}

#[async_trait]
impl Dispatcher for Recorder {
    async fn send_markdown(&self, text: &str) {
        self.push(Sent::Markdown(text.to_owned()));
    }

    async fn send_blocks(&self, blocks: &[Block]) {
        self.push(Sent::Blocks(blocks.to_vec()));
    }

    async fn send_large_table(&self, table: &Table) {
        self.push(Sent::Table(table.clone()));
    }

    async fn prompt_from_menu(&self, followup: &str, title: &str, choices: &[Choice]) {
        self.push(Sent::Menu {
            followup: followup.to_owned(),
            title: title.to_owned(),
            choices: choices.to_vec(),
        });
    }

    async fn multi_input_dialog(
        &self,
        group: &str,
        followup: &str,
        title: &str,
        fields: &[DialogField],
    ) {
        self.push(Sent::Dialog {
            group: group.to_owned(),
            followup: followup.to_owned(),
            title: title.to_owned(),
            fields: fields.to_vec(),
        });
    }

    async fn send_warning(&self, text: &str) {
        self.push(Sent::Warning(text.to_owned()));
    }

    fn user_mention(&self) -> String {
        "@jane".into()
    }
}

// ── Fixture data ────────────────────────────────────────────────────

pub fn device(serial: &str, name: Option<&str>, model: &str) -> Device {
    Device {
        serial: serial.into(),
        name: name.map(Into::into),
        model: model.into(),
        network_id: Some("L_1".into()),
        mac: None,
        lan_ip: None,
        firmware: None,
    }
}

pub fn port(id: &str, name: Option<&str>) -> SwitchPort {
    SwitchPort {
        port_id: id.into(),
        name: name.map(Into::into),
        enabled: true,
        ..SwitchPort::default()
    }
}

/// One organization "Acme Corp" (id 1) with a mixed fleet.
pub fn acme() -> FakeInventory {
    let mut inv = FakeInventory {
        orgs: vec![
            Organization {
                id: "1".into(),
                name: "Acme Corp".into(),
                url: None,
            },
            Organization {
                id: "2".into(),
                name: "Globex".into(),
                url: None,
            },
        ],
        ..FakeInventory::default()
    };
    inv.devices.insert(
        "1".into(),
        vec![
            device("Q2SW-0001", Some("core-sw"), "MS225-48FP"),
            device("Q2SW-0002", None, "MS120-8"),
            device("Q2AP-0001", Some("lobby-ap"), "MR46"),
            device("Q2MX-0001", Some("edge-fw"), "MX68"),
            device("Q2MV-0001", Some("door-cam"), "MV12W"),
        ],
    );
    inv.networks.insert(
        "1".into(),
        vec![Network {
            id: "L_1".into(),
            name: "HQ".into(),
            product_types: vec!["switch".into()],
            time_zone: None,
        }],
    );
    inv.ports.insert(
        "Q2SW-0001".into(),
        vec![port("1", Some("Uplink")), port("2", None)],
    );
    inv.admins.insert(
        "1".into(),
        vec![Admin {
            id: Some("a1".into()),
            name: "Jane Doe".into(),
            email: Some("jane@acme.test".into()),
            org_access: Some("full".into()),
        }],
    );
    inv.statuses.insert(
        "Q2SW-0001".into(),
        vec![SwitchPortStatus {
            port_id: "1".into(),
            enabled: true,
            status: "Connected".into(),
            errors: Vec::new(),
            warnings: vec!["PoE overload".into()],
            speed: Some("1 Gbps".into()),
            duplex: Some("full".into()),
            usage_in_kb: [("sent".to_owned(), 120.0), ("recv".to_owned(), 80.0)]
                .into_iter()
                .collect(),
            client_count: Some(3),
            traffic_in_kbps: Default::default(),
        }],
    );
    inv.zones.insert(
        "Q2MV-0001".into(),
        vec![CameraZoneStat {
            zone_id: 0,
            start_ts: Some("2024-03-01T10:00:00Z".parse().unwrap()),
            end_ts: Some("2024-03-01T10:01:00Z".parse().unwrap()),
            entrances: 4,
            average_count: 1.5,
        }],
    );
    inv.clients.insert(
        "Q2AP-0001".into(),
        vec![Client {
            usage: ClientUsage {
                sent: 512.0,
                recv: 2048.0,
            },
            description: Some("laptop-17".into()),
            mac: "aa:bb:cc:00:11:22".into(),
            ip: Some("10.0.10.17".into()),
            user: None,
            vlan: Some(10),
            switchport: None,
            dhcp_hostname: Some("laptop-17".into()),
        }],
    );
    inv
}

/// Run one chat line against a fresh Meraki registry.
pub async fn run(inventory: &FakeInventory, recorder: &Recorder, line: &str) -> Outcome {
    try_run(inventory, recorder, line).await.unwrap()
}

pub async fn try_run(
    inventory: &FakeInventory,
    recorder: &Recorder,
    line: &str,
) -> Result<Outcome, CoreError> {
    let registry = Registry::with_meraki_commands(merakiops_core::GROUP);
    let ctx = Context::new(inventory, recorder);
    registry.dispatch_line(ctx, line).await
}

/// Append a menu answer to a follow-up command, quoting it.
pub fn answer(followup: &str, value: &str) -> String {
    format!("{followup} {}", shlex::try_quote(value).unwrap())
}

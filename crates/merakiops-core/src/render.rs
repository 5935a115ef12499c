// ── Rendering ──
//
// Platform-neutral tables built from Dashboard models. Adapters decide how
// a `Table` is drawn.

use serde::Serialize;

use crate::model::{
    Admin, CameraZoneStat, Client, Device, NeighborRecord, Network, Organization, Ssid,
    SwitchPort, SwitchPortStatus,
};

/// Column headers plus rows of cell text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<I, S>(headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    pub fn push_row<I, S>(&mut self, cells: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rows.push(cells.into_iter().map(Into::into).collect());
    }

    /// Cell text for `header` in row `row`, if both exist.
    pub fn cell(&self, row: usize, header: &str) -> Option<&str> {
        let col = self.headers.iter().position(|h| h == header)?;
        self.rows.get(row)?.get(col).map(String::as_str)
    }
}

fn opt(value: Option<&str>) -> String {
    value.unwrap_or_default().to_owned()
}

fn opt_display<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

fn yes_no(value: bool) -> &'static str {
    if value { "Yes" } else { "No" }
}

// ── Builders ─────────────────────────────────────────────────────────

pub fn organizations(orgs: &[Organization]) -> Table {
    let mut table = Table::new(["Name", "ID"]);
    for org in orgs {
        table.push_row([org.name.clone(), org.id.clone()]);
    }
    table
}

pub fn admins(admins: &[Admin]) -> Table {
    let mut table = Table::new(["Name", "Email", "Org Access"]);
    for admin in admins {
        table.push_row([
            admin.name.clone(),
            opt(admin.email.as_deref()),
            opt(admin.org_access.as_deref()),
        ]);
    }
    table
}

pub fn devices(devices: &[Device]) -> Table {
    let mut table = Table::new(["Name", "Model", "Serial", "LAN IP", "Firmware"]);
    for d in devices {
        table.push_row([
            d.display_name().to_owned(),
            d.model.clone(),
            d.serial.clone(),
            opt(d.lan_ip.as_deref()),
            opt(d.firmware.as_deref()),
        ]);
    }
    table
}

pub fn networks(networks: &[Network]) -> Table {
    let mut table = Table::new(["Name", "ID", "Product Types", "Time Zone"]);
    for n in networks {
        table.push_row([
            n.name.clone(),
            n.id.clone(),
            n.product_types.join(", "),
            opt(n.time_zone.as_deref()),
        ]);
    }
    table
}

pub fn ssids(ssids: &[Ssid]) -> Table {
    let mut table = Table::new(["Number", "Name", "Enabled", "Auth Mode"]);
    for s in ssids {
        table.push_row([
            s.number.to_string(),
            s.name.clone(),
            yes_no(s.enabled).to_owned(),
            opt(s.auth_mode.as_deref()),
        ]);
    }
    table
}

pub fn switch_ports(ports: &[SwitchPort]) -> Table {
    let mut table = Table::new([
        "Port",
        "Name",
        "Enabled",
        "Type",
        "VLAN",
        "Voice VLAN",
        "Allowed VLANs",
        "PoE",
        "Tags",
    ]);
    for p in ports {
        table.push_row([
            p.port_id.clone(),
            opt(p.name.as_deref()),
            yes_no(p.enabled).to_owned(),
            opt(p.port_type.as_deref()),
            opt_display(p.vlan),
            opt_display(p.voice_vlan),
            opt(p.allowed_vlans.as_deref()),
            p.poe_enabled.map(yes_no).unwrap_or_default().to_owned(),
            p.tags.join(", "),
        ]);
    }
    table
}

pub fn switch_port_statuses(statuses: &[SwitchPortStatus]) -> Table {
    let mut table = Table::new([
        "Port",
        "Enabled",
        "Status",
        "Speed",
        "Duplex",
        "Clients",
        "Sent (kB)",
        "Recv (kB)",
        "Errors",
        "Warnings",
    ]);
    for s in statuses {
        let usage = |key: &str| opt_display(s.usage_in_kb.get(key));
        table.push_row([
            s.port_id.clone(),
            yes_no(s.enabled).to_owned(),
            s.status.clone(),
            opt(s.speed.as_deref()),
            opt(s.duplex.as_deref()),
            opt_display(s.client_count),
            usage("sent"),
            usage("recv"),
            s.errors.join("; "),
            s.warnings.join("; "),
        ]);
    }
    table
}

pub fn camera_zones(zones: &[CameraZoneStat]) -> Table {
    let mut table = Table::new(["Zone", "Start", "End", "Entrances", "Average Count"]);
    for z in zones {
        let ts = |t: Option<chrono::DateTime<chrono::Utc>>| {
            t.map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
                .unwrap_or_default()
        };
        table.push_row([
            z.zone_id.to_string(),
            ts(z.start_ts),
            ts(z.end_ts),
            z.entrances.to_string(),
            format!("{:.2}", z.average_count),
        ]);
    }
    table
}

pub fn clients(clients: &[Client]) -> Table {
    let mut table = Table::new([
        "Description",
        "MAC",
        "IP",
        "User",
        "VLAN",
        "Switchport",
        "DHCP Hostname",
        "Sent (kB)",
        "Recv (kB)",
    ]);
    for c in clients {
        table.push_row([
            opt(c.description.as_deref()),
            c.mac.clone(),
            opt(c.ip.as_deref()),
            opt(c.user.as_deref()),
            opt_display(c.vlan),
            opt(c.switchport.as_deref()),
            opt(c.dhcp_hostname.as_deref()),
            c.usage.sent.to_string(),
            c.usage.recv.to_string(),
        ]);
    }
    table
}

/// One row per (local port, protocol) pair.
pub fn neighbors(record: &NeighborRecord) -> Table {
    let mut table = Table::new(["Local Port", "Protocol", "Neighbor", "Neighbor Port", "Address"]);
    for (local, entry) in &record.ports {
        if let Some(cdp) = &entry.cdp {
            table.push_row([
                local.clone(),
                "CDP".to_owned(),
                opt(cdp.device_id.as_deref()),
                opt(cdp.port_id.as_deref()),
                opt(cdp.address.as_deref()),
            ]);
        }
        if let Some(lldp) = &entry.lldp {
            table.push_row([
                local.clone(),
                "LLDP".to_owned(),
                opt(lldp.system_name.as_deref()),
                opt(lldp.port_id.as_deref()),
                opt(lldp.management_address.as_deref()),
            ]);
        }
    }
    table
}

/// Setting/value view of a single port, including fields the model
/// does not name.
pub fn port_settings(port: &SwitchPort) -> Table {
    let mut table = Table::new(["Port Setting", "Value"]);
    let mut row = |k: &str, v: String| table.push_row([k.to_owned(), v]);
    row("portId", port.port_id.clone());
    row("name", opt(port.name.as_deref()));
    row("tags", port.tags.join(", "));
    row("enabled", port.enabled.to_string());
    row("poeEnabled", opt_display(port.poe_enabled));
    row("type", opt(port.port_type.as_deref()));
    row("vlan", opt_display(port.vlan));
    row("voiceVlan", opt_display(port.voice_vlan));
    row("allowedVlans", opt(port.allowed_vlans.as_deref()));
    row("isolationEnabled", opt_display(port.isolation_enabled));
    row("rstpEnabled", opt_display(port.rstp_enabled));
    row("stpGuard", opt(port.stp_guard.as_deref()));
    row("linkNegotiation", opt(port.link_negotiation.as_deref()));
    row("portScheduleId", opt(port.port_schedule_id.as_deref()));
    row("udld", opt(port.udld.as_deref()));
    for (key, value) in &port.extra {
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Null => String::new(),
            other => other.to_string(),
        };
        row(key, text);
    }
    table
}

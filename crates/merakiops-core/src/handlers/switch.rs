// Switch commands, including the one write: configuring an access port.

use futures::FutureExt;
use futures::future::BoxFuture;
use tracing::info;

use super::{ORG, device};
use crate::completion::{ChoiceSource, DEVICE_NAME, FieldKind, ORG_NAME, ParamSpec};
use crate::error::CoreError;
use crate::model::{DeviceCategory, UpdateSwitchPortRequest};
use crate::pending::{Params, parse_bool};
use crate::registry::{CommandSpec, CommandStatus, Context};
use crate::render;

const PORT_NUMBER: &str = "port_number";
const ENABLED: &str = "enabled";
const VLAN: &str = "vlan";
const PORT_DESC: &str = "port_desc";

const PORT_DIALOG: &str = "Port Configuration";

const ORG_SWITCH: &[ParamSpec] = &[ORG, device(DeviceCategory::Switches, "Select a Switch")];

const ACCESS_PORT: &[ParamSpec] = &[
    ORG,
    device(DeviceCategory::Switches, "Select a Switch"),
    ParamSpec::menu(
        PORT_NUMBER,
        "Select a Port",
        ChoiceSource::SwitchPorts,
        &[ORG_NAME, DEVICE_NAME],
    ),
    ParamSpec::field(
        ENABLED,
        PORT_DIALOG,
        "Port Enabled",
        FieldKind::Select(&[("Yes", "true"), ("No", "false")]),
        Some(validate_enabled),
    ),
    ParamSpec::field(VLAN, PORT_DIALOG, "VLAN", FieldKind::Text, Some(validate_vlan)),
    ParamSpec::field(
        PORT_DESC,
        PORT_DIALOG,
        "Port Description",
        FieldKind::Text,
        Some(validate_description),
    ),
];

pub(super) fn commands() -> [CommandSpec; 3] {
    [
        CommandSpec {
            name: "get-switchports",
            summary: "Show the port configuration of a switch",
            params: ORG_SWITCH,
            action: get_switchports,
        },
        CommandSpec {
            name: "get-switchports-status",
            summary: "Show the runtime port status of a switch",
            params: ORG_SWITCH,
            action: get_switchports_status,
        },
        CommandSpec {
            name: "configure-basic-access-port",
            summary: "Set a switch port to access mode with a VLAN and description",
            params: ACCESS_PORT,
            action: configure_basic_access_port,
        },
    ]
}

// ── Dialog validators ────────────────────────────────────────────────

fn validate_enabled(value: &str) -> Result<(), String> {
    parse_bool(value)
        .map(|_| ())
        .ok_or_else(|| format!("'{value}' is not Yes or No"))
}

fn validate_vlan(value: &str) -> Result<(), String> {
    match value.trim().parse::<u32>() {
        Ok(1..=4094) => Ok(()),
        Ok(_) => Err(format!("{value} is outside 1-4094")),
        Err(_) => Err(format!("'{value}' is not a number")),
    }
}

fn validate_description(value: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        Err("must not be blank".into())
    } else {
        Ok(())
    }
}

// ── Actions ──────────────────────────────────────────────────────────

fn get_switchports<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        let name = params.require(DEVICE_NAME)?;
        ctx.stand_by(&format!("getting the switchports for {name}"))
            .await;
        let serial = ctx.resolver().resolve_device_serial(org, name).await?;
        let ports = ctx.inventory.list_switch_ports(&serial).await?;
        ctx.dispatcher
            .send_large_table(&render::switch_ports(&ports))
            .await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

fn get_switchports_status<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        let name = params.require(DEVICE_NAME)?;
        ctx.stand_by(&format!("getting the switchport status for {name}"))
            .await;
        let serial = ctx.resolver().resolve_device_serial(org, name).await?;
        let statuses = ctx.inventory.list_switch_port_statuses(&serial).await?;
        ctx.dispatcher
            .send_large_table(&render::switch_port_statuses(&statuses))
            .await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

fn configure_basic_access_port<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        let name = params.require(DEVICE_NAME)?;
        let port_id = params.require(PORT_NUMBER)?;
        let update = UpdateSwitchPortRequest {
            name: Some(params.require(PORT_DESC)?.to_owned()),
            enabled: Some(params.require_bool(ENABLED)?),
            port_type: Some("access".into()),
            vlan: Some(params.require_u32(VLAN)?),
        };

        ctx.stand_by(&format!("configuring port {port_id} on {name}"))
            .await;
        let serial = ctx.resolver().resolve_device_serial(org, name).await?;
        info!(%serial, port_id, ?update, "updating switch port");
        let applied = ctx
            .inventory
            .update_switch_port(&serial, port_id, &update)
            .await?;

        ctx.dispatcher
            .send_markdown(&format!(
                "Port {} on {name} is now configured as follows:",
                applied.port_id
            ))
            .await;
        ctx.dispatcher
            .send_large_table(&render::port_settings(&applied))
            .await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

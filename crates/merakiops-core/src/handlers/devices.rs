// Device-level read commands.

use futures::FutureExt;
use futures::future::BoxFuture;

use super::{ORG, device};
use crate::completion::{ChoiceSource, DEVICE_NAME, ORG_NAME, ParamSpec};
use crate::dispatcher::Block;
use crate::error::CoreError;
use crate::model::{DeviceCategory, parse_device_list};
use crate::pending::Params;
use crate::registry::{CommandSpec, CommandStatus, Context};
use crate::render;

const DEVICE_TYPE: &str = "device_type";

const ORG_DEVICE_TYPE: &[ParamSpec] = &[
    ORG,
    ParamSpec::menu(
        DEVICE_TYPE,
        "Select a Device Type",
        ChoiceSource::DeviceCategories,
        &[],
    ),
];
const ORG_FIREWALL: &[ParamSpec] = &[ORG, device(DeviceCategory::Firewalls, "Select a Firewall")];
const ORG_CAMERA: &[ParamSpec] = &[ORG, device(DeviceCategory::Cameras, "Select a Camera")];
const ORG_ANY_DEVICE: &[ParamSpec] = &[ORG, device(DeviceCategory::All, "Select a Device")];

pub(super) fn commands() -> [CommandSpec; 5] {
    [
        CommandSpec {
            name: "get-devices",
            summary: "List the devices of an organization by type",
            params: ORG_DEVICE_TYPE,
            action: get_devices,
        },
        CommandSpec {
            name: "get-firewall-performance",
            summary: "Show the performance score of a firewall",
            params: ORG_FIREWALL,
            action: get_firewall_performance,
        },
        CommandSpec {
            name: "get-camera-recent",
            summary: "Show recent zone analytics of a camera",
            params: ORG_CAMERA,
            action: get_camera_recent,
        },
        CommandSpec {
            name: "get-clients",
            summary: "List the clients seen by a device",
            params: ORG_ANY_DEVICE,
            action: get_clients,
        },
        CommandSpec {
            name: "get-lldp-cdp",
            summary: "Show the CDP and LLDP neighbors of a device",
            params: ORG_ANY_DEVICE,
            action: get_lldp_cdp,
        },
    ]
}

fn get_devices<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        let device_type = params.require(DEVICE_TYPE)?;
        ctx.stand_by(&format!("getting the devices at the Organization {org}"))
            .await;
        let org_id = ctx.resolver().resolve_organization_id(org).await?;
        let devices = ctx.inventory.list_devices(&org_id).await?;
        let devices = parse_device_list(device_type, &devices);
        if devices.is_empty() {
            ctx.dispatcher
                .send_markdown(&format!(
                    "No devices of type `{device_type}` found in {org}."
                ))
                .await;
        } else {
            ctx.dispatcher
                .send_large_table(&render::devices(&devices))
                .await;
        }
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

fn get_firewall_performance<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        let name = params.require(DEVICE_NAME)?;
        ctx.stand_by(&format!("getting the performance for firewall {name}"))
            .await;
        let serial = ctx.resolver().resolve_device_serial(org, name).await?;
        let perf = ctx.inventory.get_firewall_performance(&serial).await?;
        ctx.dispatcher
            .send_blocks(&[
                Block::header(format!("Performance for {name}")),
                Block::markdown(format!("Performance score: *{}*", perf.perf_score)),
            ])
            .await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

fn get_camera_recent<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        let name = params.require(DEVICE_NAME)?;
        ctx.stand_by(&format!("getting recent analytics for camera {name}"))
            .await;
        let serial = ctx.resolver().resolve_device_serial(org, name).await?;
        let zones = ctx.inventory.get_recent_camera_analytics(&serial).await?;
        ctx.dispatcher
            .send_large_table(&render::camera_zones(&zones))
            .await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

fn get_clients<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        let name = params.require(DEVICE_NAME)?;
        ctx.stand_by(&format!("getting the clients of {name}"))
            .await;
        let serial = ctx.resolver().resolve_device_serial(org, name).await?;
        let clients = ctx.inventory.list_device_clients(&serial).await?;
        ctx.dispatcher
            .send_large_table(&render::clients(&clients))
            .await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

fn get_lldp_cdp<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        let name = params.require(DEVICE_NAME)?;
        ctx.stand_by(&format!("getting the CDP/LLDP neighbors of {name}"))
            .await;
        let serial = ctx.resolver().resolve_device_serial(org, name).await?;
        let record = ctx.inventory.get_device_neighbors(&serial).await?;
        if record.is_empty() {
            ctx.dispatcher
                .send_markdown(&format!("No CDP or LLDP neighbors found for {name}."))
                .await;
        } else {
            ctx.dispatcher
                .send_large_table(&render::neighbors(&record))
                .await;
        }
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

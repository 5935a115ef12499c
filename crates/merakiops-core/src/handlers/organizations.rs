// Organization-level commands: organizations, admins, networks, SSIDs.

use futures::FutureExt;
use futures::future::BoxFuture;

use super::ORG;
use crate::completion::{ChoiceSource, ORG_NAME, ParamSpec};
use crate::error::CoreError;
use crate::pending::Params;
use crate::registry::{CommandSpec, CommandStatus, Context};
use crate::render;

const NET_NAME: &str = "net_name";

const ORG_ONLY: &[ParamSpec] = &[ORG];
const ORG_NETWORK: &[ParamSpec] = &[
    ORG,
    ParamSpec::menu(NET_NAME, "Select a Network", ChoiceSource::Networks, &[ORG_NAME]),
];

pub(super) fn commands() -> [CommandSpec; 4] {
    [
        CommandSpec {
            name: "get-organizations",
            summary: "List the organizations the API key can access",
            params: &[],
            action: get_organizations,
        },
        CommandSpec {
            name: "get-admins",
            summary: "List the administrators of an organization",
            params: ORG_ONLY,
            action: get_admins,
        },
        CommandSpec {
            name: "get-networks",
            summary: "List the networks of an organization",
            params: ORG_ONLY,
            action: get_networks,
        },
        CommandSpec {
            name: "get-network-ssids",
            summary: "List the wireless SSIDs of a network",
            params: ORG_NETWORK,
            action: get_network_ssids,
        },
    ]
}

fn get_organizations<'a>(
    ctx: Context<'a>,
    _params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        ctx.stand_by("getting the Organizations").await;
        let orgs = ctx.inventory.list_organizations().await?;
        ctx.dispatcher
            .send_large_table(&render::organizations(&orgs))
            .await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

fn get_admins<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        ctx.stand_by(&format!("getting the admins for the Organization {org}"))
            .await;
        let org_id = ctx.resolver().resolve_organization_id(org).await?;
        let admins = ctx.inventory.list_organization_admins(&org_id).await?;
        ctx.dispatcher
            .send_large_table(&render::admins(&admins))
            .await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

fn get_networks<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        ctx.stand_by(&format!("getting the networks at the Organization {org}"))
            .await;
        let org_id = ctx.resolver().resolve_organization_id(org).await?;
        let networks = ctx.inventory.list_networks(&org_id).await?;
        ctx.dispatcher
            .send_large_table(&render::networks(&networks))
            .await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

fn get_network_ssids<'a>(
    ctx: Context<'a>,
    params: &'a Params,
) -> BoxFuture<'a, Result<CommandStatus, CoreError>> {
    async move {
        let org = params.require(ORG_NAME)?;
        let net = params.require(NET_NAME)?;
        ctx.stand_by(&format!("getting the SSIDs for network {net}"))
            .await;
        let net_id = ctx.resolver().resolve_network_id(org, net).await?;
        let ssids = ctx.inventory.list_network_ssids(&net_id).await?;
        ctx.dispatcher.send_large_table(&render::ssids(&ssids)).await;
        Ok(CommandStatus::Succeeded)
    }
    .boxed()
}

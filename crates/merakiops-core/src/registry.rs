// ── Command registry ──
//
// Maps `(group, subcommand)` to a declared command and drives one
// invocation: bind arguments, complete parameters, run the action.

use futures::future::BoxFuture;
use indexmap::IndexMap;
use strum::Display;
use tracing::{info, warn};

use crate::completion::{self, Completion, ParamSpec};
use crate::dispatcher::Dispatcher;
use crate::error::CoreError;
use crate::inventory::Inventory;
use crate::pending::{Argument, Invocation, Params, PendingCommand};
use crate::resolve::Resolver;

/// Default grouping keyword for chat commands.
pub const GROUP: &str = "meraki";

/// Collaborators available to one invocation.
#[derive(Clone, Copy)]
pub struct Context<'a> {
    pub inventory: &'a dyn Inventory,
    pub dispatcher: &'a dyn Dispatcher,
}

impl<'a> Context<'a> {
    pub fn new(inventory: &'a dyn Inventory, dispatcher: &'a dyn Dispatcher) -> Self {
        Self {
            inventory,
            dispatcher,
        }
    }

    pub fn resolver(&self) -> Resolver<'a> {
        Resolver::new(self.inventory)
    }

    /// Let the user know work has started.
    pub async fn stand_by(&self, doing: &str) {
        let text = format!(
            "Stand by {}, I'm {doing}!",
            self.dispatcher.user_mention()
        );
        self.dispatcher.send_markdown(&text).await;
    }
}

/// Final status of a command that ran.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "UPPERCASE")]
pub enum CommandStatus {
    Succeeded,
    Failed,
}

/// What came of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A prompt was sent; a later invocation continues the command.
    Incomplete,
    Finished(CommandStatus),
}

/// Body of a command, run once every parameter is bound.
pub type Action =
    for<'a> fn(Context<'a>, &'a Params) -> BoxFuture<'a, Result<CommandStatus, CoreError>>;

/// A registered chat command.
#[derive(Clone, Copy)]
pub struct CommandSpec {
    pub name: &'static str,
    pub summary: &'static str,
    pub params: &'static [ParamSpec],
    pub action: Action,
}

impl CommandSpec {
    /// `name org_name? device_name?` style usage line.
    pub fn usage(&self) -> String {
        let mut usage = self.name.to_owned();
        for p in self.params {
            usage.push(' ');
            usage.push_str(p.name);
            usage.push('?');
        }
        usage
    }
}

#[derive(Default)]
pub struct Registry {
    groups: IndexMap<String, IndexMap<&'static str, CommandSpec>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every Meraki command under `group`.
    pub fn with_meraki_commands(group: &str) -> Self {
        let mut registry = Self::new();
        crate::handlers::register_all(&mut registry, group);
        registry
    }

    /// Register `spec` under `group`, replacing any command of the same name.
    pub fn register(&mut self, group: &str, spec: CommandSpec) {
        self.groups
            .entry(group.to_owned())
            .or_default()
            .insert(spec.name, spec);
    }

    /// Commands of `group` in registration order.
    pub fn commands<'s>(&'s self, group: &str) -> impl Iterator<Item = &'s CommandSpec> + use<'s> {
        self.groups.get(group).into_iter().flat_map(IndexMap::values)
    }

    pub fn lookup(&self, group: &str, name: &str) -> Result<&CommandSpec, CoreError> {
        self.groups
            .get(group)
            .and_then(|cmds| cmds.get(name))
            .ok_or_else(|| CoreError::UnknownCommand {
                group: group.to_owned(),
                name: name.to_owned(),
            })
    }

    /// Parse and dispatch a full chat line.
    pub async fn dispatch_line(&self, ctx: Context<'_>, line: &str) -> Result<Outcome, CoreError> {
        let inv = Invocation::parse(line)?;
        self.dispatch(ctx, &inv.group, &inv.subcommand, &inv.args)
            .await
    }

    /// Run one invocation of `group name` with the given arguments.
    ///
    /// Missing parameters produce a prompt and [`Outcome::Incomplete`].
    /// Resolution, validation and upstream failures are reported to the
    /// user as a single warning and finish as [`CommandStatus::Failed`].
    /// Only unknown commands and internal errors are returned as `Err`.
    pub async fn dispatch(
        &self,
        ctx: Context<'_>,
        group: &str,
        name: &str,
        args: &[Argument],
    ) -> Result<Outcome, CoreError> {
        let spec = self.lookup(group, name)?;
        let mut pending = PendingCommand::new(group, spec.name, spec.params);
        pending.bind_arguments(args);

        let params = match completion::complete(ctx, &mut pending).await {
            Ok(Completion::Complete(params)) => params,
            Ok(Completion::Incomplete) => return Ok(Outcome::Incomplete),
            Err(e) => return fail(ctx, name, e).await,
        };

        info!(group, command = name, "running command");
        match (spec.action)(ctx, &params).await {
            Ok(status) => {
                info!(group, command = name, %status, "command finished");
                Ok(Outcome::Finished(status))
            }
            Err(e) => fail(ctx, name, e).await,
        }
    }
}

async fn fail(ctx: Context<'_>, command: &str, err: CoreError) -> Result<Outcome, CoreError> {
    if err.is_fatal() {
        return Err(err);
    }
    warn!(command, error = %err, "command failed");
    ctx.dispatcher.send_warning(&err.to_string()).await;
    Ok(Outcome::Finished(CommandStatus::Failed))
}

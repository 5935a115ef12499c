// ── Parameter completion ──
//
// Decides whether a pending command can run. If it cannot, exactly one
// prompt is sent for the first missing parameter (or the dialog it belongs
// to) and the invocation ends there.

use tracing::{debug, warn};

use crate::dispatcher::{Choice, DialogField, FieldInput};
use crate::error::CoreError;
use crate::model::{DeviceCategory, parse_device_list};
use crate::pending::{Params, PendingCommand};
use crate::registry::Context;

/// Parameter holding the organization name.
pub const ORG_NAME: &str = "org_name";
/// Parameter holding the device name.
pub const DEVICE_NAME: &str = "device_name";

/// Returns a human-readable reason when `value` is unacceptable.
pub type Validator = fn(&str) -> Result<(), String>;

/// Declaration of one command parameter.
#[derive(Debug, Clone, Copy)]
pub struct ParamSpec {
    pub name: &'static str,
    pub prompt: Prompt,
    /// Parameters that must be bound before this one can be prompted.
    pub depends_on: &'static [&'static str],
}

impl ParamSpec {
    pub const fn menu(
        name: &'static str,
        title: &'static str,
        source: ChoiceSource,
        depends_on: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            prompt: Prompt::Menu { title, source },
            depends_on,
        }
    }

    pub const fn field(
        name: &'static str,
        dialog: &'static str,
        label: &'static str,
        input: FieldKind,
        validate: Option<Validator>,
    ) -> Self {
        Self {
            name,
            prompt: Prompt::Field {
                dialog,
                label,
                input,
                validate,
            },
            depends_on: &[],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Prompt {
    /// Pick one value from a list fetched at prompt time.
    Menu {
        title: &'static str,
        source: ChoiceSource,
    },
    /// One input of the dialog titled `dialog`. Consecutive unbound
    /// fields of the same dialog are requested together.
    Field {
        dialog: &'static str,
        label: &'static str,
        input: FieldKind,
        validate: Option<Validator>,
    },
}

#[derive(Debug, Clone, Copy)]
pub enum FieldKind {
    /// Fixed `(label, value)` options.
    Select(&'static [(&'static str, &'static str)]),
    Text,
}

/// Where a menu's choices come from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceSource {
    Organizations,
    /// The static device-type list.
    DeviceCategories,
    /// Named devices of one class in the chosen organization.
    Devices(DeviceCategory),
    Networks,
    /// Ports of the chosen switch.
    SwitchPorts,
}

impl ChoiceSource {
    async fn choices(
        self,
        ctx: Context<'_>,
        pending: &PendingCommand,
    ) -> Result<Vec<Choice>, CoreError> {
        let resolver = ctx.resolver();
        let choices = match self {
            Self::Organizations => ctx
                .inventory
                .list_organizations()
                .await?
                .into_iter()
                .map(|o| Choice::same(o.name))
                .collect(),
            Self::DeviceCategories => DeviceCategory::all()
                .map(|c| Choice::new(c.label(), c.to_string()))
                .collect(),
            Self::Devices(category) => {
                let org = bound(pending, ORG_NAME)?;
                let org_id = resolver.resolve_organization_id(org).await?;
                let devices = ctx.inventory.list_devices(&org_id).await?;
                let choices: Vec<Choice> = parse_device_list(category.as_ref(), &devices)
                    .into_iter()
                    .filter_map(|d| d.name.filter(|n| !n.is_empty()))
                    .map(Choice::same)
                    .collect();
                if choices.is_empty() {
                    return Err(CoreError::not_found(
                        category.label(),
                        &format!("no named devices in {org}"),
                    ));
                }
                choices
            }
            Self::Networks => {
                let org = bound(pending, ORG_NAME)?;
                let org_id = resolver.resolve_organization_id(org).await?;
                ctx.inventory
                    .list_networks(&org_id)
                    .await?
                    .into_iter()
                    .map(|n| Choice::same(n.name))
                    .collect()
            }
            Self::SwitchPorts => {
                let org = bound(pending, ORG_NAME)?;
                let device = bound(pending, DEVICE_NAME)?;
                let serial = resolver.resolve_device_serial(org, device).await?;
                ctx.inventory
                    .list_switch_ports(&serial)
                    .await?
                    .into_iter()
                    .map(|p| {
                        let label = match p.name.as_deref() {
                            Some(name) if !name.is_empty() => format!("{} ({name})", p.port_id),
                            _ => p.port_id.clone(),
                        };
                        Choice::new(label, p.port_id)
                    })
                    .collect()
            }
        };
        Ok(choices)
    }
}

fn bound<'p>(pending: &'p PendingCommand, name: &str) -> Result<&'p str, CoreError> {
    pending.value(name).ok_or_else(|| {
        CoreError::Internal(format!(
            "{} needs {name} to list choices",
            pending.subcommand()
        ))
    })
}

/// Result of a completion pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// Every parameter is bound and valid.
    Complete(Params),
    /// A prompt was sent; the command must not run yet.
    Incomplete,
}

/// Run one completion pass over `pending`.
///
/// Bound dialog fields are validated first; rejected values are unbound
/// and reported in one warning so the dialog asks for them again. Then
/// the first missing parameter, in declaration order, is prompted.
pub async fn complete(
    ctx: Context<'_>,
    pending: &mut PendingCommand,
) -> Result<Completion, CoreError> {
    let rejected = reject_invalid_fields(pending);
    if !rejected.is_empty() {
        warn!(command = pending.subcommand(), ?rejected, "rejected dialog values");
        ctx.dispatcher.send_warning(&rejected.join("\n")).await;
    }

    let Some(next) = pending.next_missing() else {
        return Ok(Completion::Complete(pending.to_params()));
    };
    check_dependencies(pending, next)?;

    match next.prompt {
        Prompt::Menu { title, source } => {
            let choices = source.choices(ctx, pending).await?;
            let followup = pending.followup_command()?;
            debug!(%followup, param = next.name, "prompting menu");
            ctx.dispatcher
                .prompt_from_menu(&followup, title, &choices)
                .await;
        }
        Prompt::Field { dialog, .. } => {
            let fields = dialog_fields(pending, dialog)?;
            let followup = pending.followup_args()?;
            debug!(%followup, dialog, fields = fields.len(), "prompting dialog");
            ctx.dispatcher
                .multi_input_dialog(pending.group(), &followup, dialog, &fields)
                .await;
        }
    }
    Ok(Completion::Incomplete)
}

fn reject_invalid_fields(pending: &mut PendingCommand) -> Vec<String> {
    let mut rejected = Vec::new();
    for spec in pending.params() {
        let Prompt::Field {
            label,
            validate: Some(validate),
            ..
        } = spec.prompt
        else {
            continue;
        };
        let Some(value) = pending.value(spec.name) else {
            continue;
        };
        if let Err(reason) = validate(value) {
            rejected.push(format!("{label}: {reason}"));
            pending.unbind(spec.name);
        }
    }
    rejected
}

fn check_dependencies(pending: &PendingCommand, spec: &ParamSpec) -> Result<(), CoreError> {
    match spec.depends_on.iter().find(|dep| !pending.is_bound(dep)) {
        Some(dep) => Err(CoreError::Internal(format!(
            "{}: parameter {} depends on unbound {dep}",
            pending.subcommand(),
            spec.name
        ))),
        None => Ok(()),
    }
}

/// The run of unbound fields belonging to `dialog`, starting at the
/// first missing parameter.
fn dialog_fields(pending: &PendingCommand, dialog: &str) -> Result<Vec<DialogField>, CoreError> {
    let mut fields = Vec::new();
    for spec in pending.remaining() {
        let Prompt::Field {
            dialog: d,
            label,
            input,
            ..
        } = spec.prompt
        else {
            break;
        };
        if d != dialog {
            break;
        }
        check_dependencies(pending, spec)?;
        let input = match input {
            FieldKind::Select(options) => FieldInput::Select {
                choices: options
                    .iter()
                    .map(|(label, value)| Choice::new(*label, *value))
                    .collect(),
                default: None,
            },
            FieldKind::Text => FieldInput::Text { default: None },
        };
        fields.push(DialogField {
            name: spec.name.to_owned(),
            label: label.to_owned(),
            input,
        });
    }
    Ok(fields)
}

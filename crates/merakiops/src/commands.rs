//! Subcommand handlers: dispatch chat lines, answer prompts, list commands.

use dialoguer::{Input, Select};
use tracing::{debug, info};

use merakiops_api::DashboardClient;
use merakiops_core::{CommandStatus, Context, FieldInput, Outcome, Registry, Table};

use crate::cli::{GlobalOpts, LineArgs};
use crate::config;
use crate::console::{ConsoleDispatcher, PendingPrompt, render_table, should_color};
use crate::error::{CliError, prompt_err};

/// Dispatch `args` as one chat line.
///
/// Without `interactive` an incomplete command stops after printing its
/// prompt; with it, each prompt is answered in the terminal and the
/// follow-up line dispatched until the command finishes.
pub async fn dispatch(
    args: &LineArgs,
    global: &GlobalOpts,
    interactive: bool,
) -> Result<(), CliError> {
    let settings = config::build_settings(global)?;
    debug!(?settings, "client settings");
    let client =
        DashboardClient::from_api_key(&settings.base_url, &settings.api_key, &settings.transport)?;
    let registry = Registry::with_meraki_commands(&settings.group);
    let console = ConsoleDispatcher::new(should_color(global.color), global.quiet, interactive);
    let ctx = Context::new(&client, &console);

    let mut line = chat_line(&settings.group, &args.words)?;
    loop {
        info!(%line, "dispatching");
        match registry.dispatch_line(ctx, &line).await? {
            Outcome::Finished(CommandStatus::Succeeded) => return Ok(()),
            Outcome::Finished(CommandStatus::Failed) => {
                return Err(CliError::CommandFailed { command: line });
            }
            Outcome::Incomplete if interactive => {
                let prompt = console.take_prompt().await.ok_or_else(|| {
                    CliError::Internal(format!("'{line}' is incomplete but sent no prompt"))
                })?;
                line = answer(prompt)?;
            }
            Outcome::Incomplete => return Ok(()),
        }
    }
}

/// Join CLI words into a chat line, adding the group keyword when absent.
fn chat_line(group: &str, words: &[String]) -> Result<String, CliError> {
    let mut tokens: Vec<&str> = words.iter().map(String::as_str).collect();
    if tokens.first() != Some(&group) {
        tokens.insert(0, group);
    }
    shlex::try_join(tokens).map_err(|e| CliError::Validation {
        field: "command".into(),
        reason: e.to_string(),
    })
}

fn quote(value: &str) -> Result<String, CliError> {
    shlex::try_quote(value)
        .map(|q| q.into_owned())
        .map_err(|e| CliError::Validation {
            field: "answer".into(),
            reason: e.to_string(),
        })
}

/// Ask `prompt` in the terminal and build the follow-up line.
fn answer(prompt: PendingPrompt) -> Result<String, CliError> {
    match prompt {
        PendingPrompt::Menu {
            followup,
            title,
            choices,
        } => {
            let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
            let idx = Select::new()
                .with_prompt(title)
                .items(&labels)
                .default(0)
                .interact()
                .map_err(prompt_err)?;
            let choice = choices
                .get(idx)
                .ok_or_else(|| prompt_err(format!("no choice at {idx}")))?;
            Ok(format!("{followup} {}", quote(&choice.value)?))
        }
        PendingPrompt::Dialog {
            group,
            followup,
            title,
            fields,
        } => {
            eprintln!("{title}");
            let mut line = format!("{group} {followup}");
            for field in fields {
                let value = match field.input {
                    FieldInput::Select { choices, default } => {
                        let labels: Vec<&str> = choices.iter().map(|c| c.label.as_str()).collect();
                        let start = default
                            .and_then(|d| choices.iter().position(|c| c.value == d))
                            .unwrap_or(0);
                        let idx = Select::new()
                            .with_prompt(&field.label)
                            .items(&labels)
                            .default(start)
                            .interact()
                            .map_err(prompt_err)?;
                        choices
                            .get(idx)
                            .map(|c| c.value.clone())
                            .ok_or_else(|| prompt_err(format!("no choice at {idx}")))?
                    }
                    FieldInput::Text { default } => {
                        let mut input = Input::<String>::new()
                            .with_prompt(&field.label)
                            .allow_empty(true);
                        if let Some(default) = default {
                            input = input.default(default);
                        }
                        input.interact_text().map_err(prompt_err)?
                    }
                };
                line.push(' ');
                line.push_str(&quote(&value)?);
            }
            Ok(line)
        }
    }
}

/// Print the commands registered under the active group.
pub fn list(global: &GlobalOpts) -> Result<(), CliError> {
    let group = config::active_group(global)?;
    let registry = Registry::with_meraki_commands(&group);

    let mut table = Table::new(["Usage", "Description"]);
    for spec in registry.commands(&group) {
        table.push_row([format!("{group} {}", spec.usage()), spec.summary.to_owned()]);
    }
    println!("{}", render_table(&table));
    Ok(())
}

//! Terminal rendition of the chat dispatcher.
//!
//! Tables go through `tabled`, emphasis through `owo-colors`. Prompts are
//! printed with the line that continues them; in interactive mode they are
//! kept instead, for the caller to ask with `dialoguer`.

use std::fmt::Write as _;
use std::io::{self, IsTerminal, Write};

use async_trait::async_trait;
use owo_colors::OwoColorize;
use tabled::builder::Builder;
use tabled::settings::Style;
use tokio::sync::Mutex;

use merakiops_core::{Block, Choice, DialogField, Dispatcher, FieldInput, Table};

use crate::cli::ColorMode;

pub fn should_color(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => io::stdout().is_terminal() && std::env::var("NO_COLOR").is_err(),
    }
}

/// A prompt held back for the interactive loop.
#[derive(Debug, Clone)]
pub enum PendingPrompt {
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
}

pub struct ConsoleDispatcher {
    color: bool,
    quiet: bool,
    interactive: bool,
    mention: String,
    prompt: Mutex<Option<PendingPrompt>>,
}

impl ConsoleDispatcher {
    pub fn new(color: bool, quiet: bool, interactive: bool) -> Self {
        let user = std::env::var("USER").unwrap_or_else(|_| "operator".into());
        Self {
            color,
            quiet,
            interactive,
            mention: format!("@{user}"),
            prompt: Mutex::new(None),
        }
    }

    /// The prompt sent by the last invocation, if any.
    pub async fn take_prompt(&self) -> Option<PendingPrompt> {
        self.prompt.lock().await.take()
    }

    fn emit(&self, text: &str) {
        if self.quiet {
            return;
        }
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{text}");
    }

    fn heading(&self, text: &str) -> String {
        if self.color {
            text.bold().cyan().to_string()
        } else {
            text.to_owned()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.color {
            text.dimmed().to_string()
        } else {
            text.to_owned()
        }
    }

    async fn hold(&self, prompt: PendingPrompt) {
        *self.prompt.lock().await = Some(prompt);
    }

    /// Prompts are printed even with `--quiet`; they are the answer.
    fn print_prompt(&self, text: &str) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{text}");
    }
}

#[async_trait]
impl Dispatcher for ConsoleDispatcher {
    async fn send_markdown(&self, text: &str) {
        self.emit(text);
    }

    async fn send_blocks(&self, blocks: &[Block]) {
        let rendered: Vec<String> = blocks
            .iter()
            .map(|block| match block {
                Block::Header { text } => self.heading(text),
                Block::Markdown { text } => text.clone(),
                Block::Divider => self.dim(&"─".repeat(40)),
            })
            .collect();
        self.emit(&rendered.join("\n"));
    }

    async fn send_large_table(&self, table: &Table) {
        self.emit(&render_table(table));
    }

    async fn prompt_from_menu(&self, followup: &str, title: &str, choices: &[Choice]) {
        if self.interactive {
            self.hold(PendingPrompt::Menu {
                followup: followup.to_owned(),
                title: title.to_owned(),
                choices: choices.to_vec(),
            })
            .await;
            return;
        }
        let mut text = self.heading(title);
        for (i, choice) in choices.iter().enumerate() {
            let _ = write!(text, "\n  {:>2}. {}", i + 1, choice.label);
            if choice.value != choice.label {
                let _ = write!(text, " {}", self.dim(&format!("({})", choice.value)));
            }
        }
        let _ = write!(text, "\n{} {followup} <choice>", self.dim("Reply with:"));
        self.print_prompt(&text);
    }

    async fn multi_input_dialog(
        &self,
        group: &str,
        followup: &str,
        title: &str,
        fields: &[DialogField],
    ) {
        if self.interactive {
            self.hold(PendingPrompt::Dialog {
                group: group.to_owned(),
                followup: followup.to_owned(),
                title: title.to_owned(),
                fields: fields.to_vec(),
            })
            .await;
            return;
        }
        let mut text = self.heading(title);
        let mut reply = format!("{group} {followup}");
        for field in fields {
            let _ = write!(text, "\n  {}", field.label);
            if let FieldInput::Select { choices, .. } = &field.input {
                let options: Vec<String> = choices
                    .iter()
                    .map(|c| format!("{}={}", c.label, c.value))
                    .collect();
                let _ = write!(text, " {}", self.dim(&format!("[{}]", options.join(" | "))));
            }
            let _ = write!(reply, " <{}>", field.name);
        }
        let _ = write!(text, "\n{} {reply}", self.dim("Reply with:"));
        self.print_prompt(&text);
    }

    async fn send_warning(&self, text: &str) {
        let label = if self.color {
            "warning:".yellow().bold().to_string()
        } else {
            "warning:".to_owned()
        };
        eprintln!("{label} {text}");
    }

    fn user_mention(&self) -> String {
        self.mention.clone()
    }
}

/// Rounded `tabled` rendition of a chat table.
pub fn render_table(table: &Table) -> String {
    let mut builder = Builder::default();
    builder.push_record(table.headers.clone());
    for row in &table.rows {
        builder.push_record(row.clone());
    }
    let mut rendered = builder.build();
    rendered.with(Style::rounded());
    rendered.to_string()
}

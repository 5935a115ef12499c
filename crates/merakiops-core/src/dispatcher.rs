// ── Chat adapter boundary ──
//
// Everything a command sends back to the user goes through `Dispatcher`.
// The core decides *what* to show; adapters decide how it looks on their
// platform (Slack blocks, Webex cards, a terminal table, ...).

use async_trait::async_trait;
use serde::Serialize;

use crate::render::Table;

/// A rich-message block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    Header { text: String },
    Markdown { text: String },
    Divider,
}

impl Block {
    pub fn header(text: impl Into<String>) -> Self {
        Self::Header { text: text.into() }
    }

    pub fn markdown(text: impl Into<String>) -> Self {
        Self::Markdown { text: text.into() }
    }
}

/// One menu entry. `value` is what gets appended to the follow-up command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Choice {
    pub label: String,
    pub value: String,
}

impl Choice {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }

    /// A choice whose label is also its value.
    pub fn same(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            label: text.clone(),
            value: text,
        }
    }
}

/// One input of a multi-field dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DialogField {
    /// Parameter the answer binds to.
    pub name: String,
    pub label: String,
    pub input: FieldInput,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FieldInput {
    Select {
        choices: Vec<Choice>,
        default: Option<String>,
    },
    Text {
        default: Option<String>,
    },
}

/// Outbound capability of a chat platform.
///
/// Prompts carry a follow-up command. The platform appends the user's
/// answer(s) to it and feeds the result back in as a new invocation; no
/// state is kept between the prompt and the answer.
#[async_trait]
pub trait Dispatcher: Send + Sync {
    async fn send_markdown(&self, text: &str);

    async fn send_blocks(&self, blocks: &[Block]);

    async fn send_large_table(&self, table: &Table);

    /// Single-choice menu. `followup` is the full command line,
    /// group keyword included.
    async fn prompt_from_menu(&self, followup: &str, title: &str, choices: &[Choice]);

    /// Several inputs collected in one step. Answers are appended to
    /// `"<group> <followup>"` in field order.
    async fn multi_input_dialog(
        &self,
        group: &str,
        followup: &str,
        title: &str,
        fields: &[DialogField],
    );

    async fn send_warning(&self, text: &str);

    /// How to address the invoking user in a message.
    fn user_mention(&self) -> String;
}

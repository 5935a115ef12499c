//! Chat-operations core for the Cisco Meraki Dashboard.
//!
//! Turns chat commands such as `meraki get-devices "Acme Corp" switches`
//! into Dashboard queries and renders the answers, asking the user for any
//! parameter the command line did not carry:
//!
//! - **[`Registry`]** maps `(group, subcommand)` to a [`CommandSpec`] and
//!   drives one invocation through completion and execution.
//!
//! - **Completion** ([`completion`]) finds the first missing parameter and
//!   sends exactly one menu or dialog for it. Nothing is remembered between
//!   invocations: every prompt carries a follow-up command line
//!   ([`PendingCommand`]) that already contains the bound parameters.
//!
//! - **[`Resolver`]** turns organization, device and network names into
//!   Dashboard ids, querying the [`Inventory`] fresh on every call.
//!
//! - **[`Dispatcher`]** is the outbound chat boundary; adapters render
//!   [`Block`]s, [`Table`]s, menus and dialogs for their platform.

pub mod completion;
pub mod dispatcher;
pub mod error;
pub mod handlers;
pub mod inventory;
pub mod model;
pub mod pending;
pub mod registry;
pub mod render;
pub mod resolve;

// ── Primary re-exports ──────────────────────────────────────────────
pub use completion::{ChoiceSource, Completion, ParamSpec, Prompt};
pub use dispatcher::{Block, Choice, DialogField, Dispatcher, FieldInput};
pub use error::CoreError;
pub use inventory::Inventory;
pub use model::{DeviceCategory, parse_device_list};
pub use pending::{Argument, Invocation, Params, PendingCommand};
pub use registry::{CommandSpec, CommandStatus, Context, GROUP, Outcome, Registry};
pub use render::Table;
pub use resolve::Resolver;

//! Meraki chat commands.
//!
//! Each command declares its parameters; the registry completes them and
//! only then calls the action, so actions can `require` every declared
//! parameter.

mod devices;
mod organizations;
mod switch;

use crate::completion::{ChoiceSource, DEVICE_NAME, ORG_NAME, ParamSpec};
use crate::model::DeviceCategory;
use crate::registry::{CommandSpec, Registry};

pub(crate) const ORG: ParamSpec = ParamSpec::menu(
    ORG_NAME,
    "Select an Organization",
    ChoiceSource::Organizations,
    &[],
);

pub(crate) const fn device(category: DeviceCategory, title: &'static str) -> ParamSpec {
    ParamSpec::menu(
        DEVICE_NAME,
        title,
        ChoiceSource::Devices(category),
        &[ORG_NAME],
    )
}

/// Every command, in help order.
pub fn all() -> Vec<CommandSpec> {
    let mut specs = Vec::new();
    specs.extend(organizations::commands());
    specs.extend(devices::commands());
    specs.extend(switch::commands());
    specs
}

pub fn register_all(registry: &mut Registry, group: &str) {
    for spec in all() {
        registry.register(group, spec);
    }
}

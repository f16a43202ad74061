//! Versioned export surface of the shared component package.
//!
//! Consumers pin the [`ContractVersion`] they were written against and look
//! components up by name. Names and inputs listed here only change with a
//! major version bump.

use std::fmt;

use crate::component::{ButtonComponent, SharedComponent, SharedUiComponent};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// `major.minor` version of the export surface.
pub struct ContractVersion {
    /// Incremented when a name or input is removed or renamed.
    pub major: u16,
    /// Incremented when components or optional inputs are added.
    pub minor: u16,
}

impl ContractVersion {
    /// Creates a version.
    pub const fn new(major: u16, minor: u16) -> Self {
        Self { major, minor }
    }

    /// Returns whether a consumer written against `required` can use `self`.
    pub const fn is_compatible_with(self, required: ContractVersion) -> bool {
        self.major == required.major && self.minor >= required.minor
    }
}

impl fmt::Display for ContractVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.major, self.minor)
    }
}

/// Version of the export surface provided by this build.
pub const CONTRACT_VERSION: ContractVersion = ContractVersion::new(1, 0);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// A named component input.
pub struct InputDescriptor {
    /// Input name as written by consumers.
    pub name: &'static str,
    /// Whether consumers must supply it.
    pub required: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Stable external contract of one shared component.
pub struct ComponentDescriptor {
    /// Export name.
    pub name: &'static str,
    /// Accepted inputs.
    pub inputs: &'static [InputDescriptor],
    /// First contract version exporting the component.
    pub since: ContractVersion,
}

impl ComponentDescriptor {
    /// Looks up an input by name.
    pub fn input(&self, name: &str) -> Option<&InputDescriptor> {
        self.inputs.iter().find(|input| input.name == name)
    }
}

const CHILDREN: InputDescriptor = InputDescriptor {
    name: "children",
    required: false,
};

/// Contract of the labelled wrapper component.
pub const SHARED_UI: ComponentDescriptor = ComponentDescriptor {
    name: "SharedUi",
    inputs: &[
        CHILDREN,
        InputDescriptor {
            name: "variant",
            required: false,
        },
    ],
    since: ContractVersion::new(1, 0),
};

/// Contract of the alerting button component.
pub const BUTTON: ComponentDescriptor = ComponentDescriptor {
    name: "Button",
    inputs: &[CHILDREN],
    since: ContractVersion::new(1, 0),
};

static EXPORTS: [ComponentDescriptor; 2] = [SHARED_UI, BUTTON];

/// Every exported component contract.
pub fn exports() -> &'static [ComponentDescriptor] {
    &EXPORTS
}

/// Looks up an exported component contract by name.
pub fn find_export(name: &str) -> Option<&'static ComponentDescriptor> {
    EXPORTS.iter().find(|descriptor| descriptor.name == name)
}

/// Instantiates an exported component by name with its default configuration.
pub fn component_by_name(name: &str) -> Option<Box<dyn SharedComponent>> {
    match name {
        "SharedUi" => Some(Box::new(SharedUiComponent::default())),
        "Button" => Some(Box::new(ButtonComponent)),
        _ => None,
    }
}

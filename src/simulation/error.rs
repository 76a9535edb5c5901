//! Error type shared by the simulation core and the view helpers

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// Two bodies share the same coordinates, the inverse-square law is undefined
    CoincidentBodies { a: String, b: String },
    /// A force, velocity or position came out as NaN or infinite
    NonFiniteState { body: String },
    /// Name is not part of the fixed body table
    UnregisteredBody { name: String },
    /// A roster needs exactly one Sun
    SunCount { found: usize },
    NonPositiveMass { body: String },
    InvalidScenario { reason: String },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::CoincidentBodies { a, b } => {
                write!(f, "bodies `{a}` and `{b}` are at identical coordinates")
            }
            SimError::NonFiniteState { body } => {
                write!(f, "body `{body}` reached a non-finite state")
            }
            SimError::UnregisteredBody { name } => write!(f, "unregistered body `{name}`"),
            SimError::SunCount { found } => {
                write!(f, "expected exactly one sun in the roster, found {found}")
            }
            SimError::NonPositiveMass { body } => {
                write!(f, "body `{body}` must have a positive mass")
            }
            SimError::InvalidScenario { reason } => write!(f, "invalid scenario: {reason}"),
        }
    }
}

impl std::error::Error for SimError {}

//! Property synthesis for parsed C++ class signatures.
//!
//! Given a [`Class`] — a flat list of parsed member-function signatures,
//! the shape a header parser would hand over — this crate recovers the
//! ivar-like "properties" (`Radius`, `Point`, `Color`, ...) that the
//! class's `Set*`/`Get*`/`Add*`/`Remove*` method families encode, by the
//! same naming-convention heuristics a hand-written wrapper generator
//! would apply. The entry point is [`build_properties`].

/// Structured type code: base type, indirection, and qualifiers.
pub mod types;

/// Pure string predicates over method names (`is_set`, `is_get`, ...).
pub mod names;

/// Behavior knobs for the two historically loose name predicates.
pub mod config;

/// Parsed method/argument/class input types and boundary validation.
pub mod function;

/// Translates one `Function` into attributes eligible for synthesis.
pub mod attributes;

/// Detects dominance between structurally identical method overloads.
pub mod repeat;

/// The role a single method plays with respect to its property.
pub mod role;

/// Decides whether a candidate method belongs to a tentative property.
pub mod matcher;

/// The discovered property model for one class.
pub mod property;

/// Ties the other modules into the phased synthesis sweep.
pub mod synthesis;

/// Boundary-validation error type for [`Class`].
pub mod error;

pub use crate::attributes::MethodAttributes;
pub use crate::config::{ScanMode, SynthesisConfig};
pub use crate::error::SynthesisError;
pub use crate::function::{Argument, Class, Function};
pub use crate::property::{ClassProperties, Property};
pub use crate::role::{role_name, Role, RoleSet};
pub use crate::synthesis::build_properties;
pub use crate::types::{BaseType, Indirection, Qualifiers, TypeCode, TypeTraits};

use std::{error, fmt};

use crate::types::BaseType;

/// Boundary-validation failures for a `Class` description. The synthesis
/// algorithm itself (`build_properties`) is infallible once given a
/// `Class` that passes `Class::validate`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    EmptyClassName,
    /// An argument or return type tagged `Object` had no `class_name`.
    MissingClassName { method: String },
    /// A non-`Object` type carried a `class_name` it has no use for.
    UnexpectedClassName { method: String, base: BaseType },
    /// `hint_size` was set without `has_hint`, or vice versa.
    InconsistentHint { method: String },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyClassName => write!(f, "class has an empty name"),
            Self::MissingClassName { method } => {
                write!(f, "method `{method}` has an Object-typed slot with no class name")
            }
            Self::UnexpectedClassName { method, base } => {
                write!(
                    f,
                    "method `{method}` has a class name on a non-Object type ({base:?})"
                )
            }
            Self::InconsistentHint { method } => {
                write!(f, "method `{method}` has an inconsistent hint flag/size")
            }
        }
    }
}

impl error::Error for SynthesisError {}

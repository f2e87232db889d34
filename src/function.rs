use serde::{Deserialize, Serialize};

use crate::error::SynthesisError;
use crate::types::{BaseType, TypeCode, TypeTraits};

/// One argument of a parsed method signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Argument {
    pub type_code: TypeCode,
    /// Number of elements when the argument is a fixed-size array, e.g.
    /// `double[3]`; zero for scalars and unsized pointers.
    #[serde(default)]
    pub element_count: u32,
}

impl Argument {
    #[must_use]
    pub fn new(type_code: TypeCode) -> Self {
        Self {
            type_code,
            element_count: 0,
        }
    }

    #[must_use]
    pub fn with_element_count(mut self, count: u32) -> Self {
        self.element_count = count;
        self
    }
}

/// Parsed representation of one member function, as handed to this crate
/// by an (out-of-scope) C++ header parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Function {
    pub name: String,
    pub return_type: TypeCode,
    pub args: Vec<Argument>,
    /// The parser attached an externally-discovered element count for a
    /// pointer return/argument it could not size itself.
    #[serde(default)]
    pub has_hint: bool,
    #[serde(default)]
    pub hint_size: u32,
    #[serde(default)]
    pub is_operator: bool,
    #[serde(default)]
    pub is_legacy: bool,
    #[serde(default = "default_true")]
    pub is_public: bool,
    #[serde(default)]
    pub is_protected: bool,
    /// Set by the parser when the signature exceeded its decoding
    /// capacity; such functions are always rejected outright.
    #[serde(default)]
    pub array_failure: bool,
    #[serde(default)]
    pub comment: Option<String>,
}

fn default_true() -> bool {
    true
}

impl Function {
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    #[must_use]
    pub fn is_private(&self) -> bool {
        !self.is_public && !self.is_protected
    }
}

/// A single C++ class description: the method list this crate synthesizes
/// a property model from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Class {
    pub name: String,
    pub methods: Vec<Function>,
}

impl Class {
    #[must_use]
    pub fn new(name: impl Into<String>, methods: Vec<Function>) -> Self {
        Self {
            name: name.into(),
            methods,
        }
    }

    /// Validates the boundary invariants `build_properties` assumes hold
    /// for every `Function` in the class. See [`SynthesisError`].
    pub fn validate(&self) -> Result<(), SynthesisError> {
        if self.name.trim().is_empty() {
            return Err(SynthesisError::EmptyClassName);
        }
        for method in &self.methods {
            Self::validate_type_code(&method.name, &method.return_type)?;
            for arg in &method.args {
                Self::validate_type_code(&method.name, &arg.type_code)?;
            }
            if method.hint_size != 0 && !method.has_hint {
                return Err(SynthesisError::InconsistentHint {
                    method: method.name.clone(),
                });
            }
        }
        Ok(())
    }

    fn validate_type_code(method: &str, type_code: &TypeCode) -> Result<(), SynthesisError> {
        match (type_code.base_type(), &type_code.class_name) {
            (BaseType::Object, None) => Err(SynthesisError::MissingClassName {
                method: method.to_string(),
            }),
            (base, Some(_)) if base != BaseType::Object => Err(SynthesisError::UnexpectedClassName {
                method: method.to_string(),
                base,
            }),
            _ => Ok(()),
        }
    }
}

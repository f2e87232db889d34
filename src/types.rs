use num_enum::TryFromPrimitive;
use serde::{Deserialize, Serialize};

use bitflags::bitflags;

/// Base types a property or method argument can carry.
///
/// Mirrors the small set of base types the upstream C++ parser tags onto
/// a signature; anything else (templates, typedefs it couldn't resolve,
/// unknown classes) collapses to `Object` with a `class_name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, Serialize, Deserialize)]
#[repr(u8)]
pub enum BaseType {
    Void = 0,
    Float = 1,
    Double = 2,
    Int = 3,
    Bool = 4,
    Char = 5,
    UnsignedInt = 6,
    UnsignedChar = 7,
    IdType = 8,
    Object = 9,
}

/// Indirection carried by a type: how many pointers/references sit
/// between the base type and the value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, TryFromPrimitive, Serialize, Deserialize)]
#[repr(u8)]
pub enum Indirection {
    None = 0,
    Ref = 1,
    Pointer = 2,
    ConstPointer = 3,
    PointerPointer = 4,
    PointerRef = 5,
    ConstPointerRef = 6,
}

impl Indirection {
    #[must_use]
    pub fn is_indirect(self) -> bool {
        !matches!(self, Indirection::None)
    }

    #[must_use]
    pub fn is_pointer(self) -> bool {
        matches!(
            self,
            Indirection::Pointer | Indirection::ConstPointer | Indirection::PointerPointer
        )
    }

    #[must_use]
    pub fn is_const(self) -> bool {
        matches!(self, Indirection::ConstPointer | Indirection::ConstPointerRef)
    }

    /// References and "pointer-to-reference" shapes are invisible at the
    /// property-type level: a `double&` out-param reads the same as a
    /// `double*`. Matcher rule 5 relies on this fold.
    #[must_use]
    pub fn fold_reference(self) -> Indirection {
        match self {
            Indirection::Ref => Indirection::None,
            Indirection::PointerRef => Indirection::Pointer,
            Indirection::ConstPointerRef => Indirection::ConstPointer,
            other => other,
        }
    }

    /// Multi-value promotion (Matcher rule 6): pointer widens to
    /// pointer-to-pointer, scalar widens to pointer. Any other shape has
    /// no multi-value promotion and the caller should reject the method.
    #[must_use]
    pub fn promote_multi_value(self) -> Option<Indirection> {
        match self {
            Indirection::None => Some(Indirection::Pointer),
            Indirection::Pointer => Some(Indirection::PointerPointer),
            _ => None,
        }
    }
}

bitflags! {
    /// Qualifier bits found on a return type or argument.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
    pub struct Qualifiers: u8 {
        const CONST = 0b01;
        const STATIC = 0b10;
    }
}

/// A structured stand-in for the opaque machine-word type code the
/// upstream parser emits. The core never matches on `base`/`indirection`
/// directly outside this module; it goes through `TypeTraits`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeCode {
    pub base: BaseType,
    pub indirection: Indirection,
    pub qualifiers: Qualifiers,
    /// Set only when `base == BaseType::Object`.
    pub class_name: Option<String>,
}

impl BaseType {
    /// Decode a base type from a raw numeric tag, for callers (like the
    /// `report` demo's compact input mode) that carry type codes as
    /// integers instead of the verbose JSON variant names.
    pub fn try_from_tag(tag: u8) -> Result<Self, num_enum::TryFromPrimitiveError<Self>> {
        Self::try_from(tag)
    }
}

impl TypeCode {
    #[must_use]
    pub fn new(base: BaseType, indirection: Indirection) -> Self {
        Self {
            base,
            indirection,
            qualifiers: Qualifiers::empty(),
            class_name: None,
        }
    }

    #[must_use]
    pub fn with_qualifiers(mut self, qualifiers: Qualifiers) -> Self {
        self.qualifiers = qualifiers;
        self
    }

    #[must_use]
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    #[must_use]
    pub fn object(class_name: impl Into<String>, indirection: Indirection) -> Self {
        Self::new(BaseType::Object, indirection).with_class_name(class_name)
    }
}

/// Predicate surface the core is written against, so nothing outside
/// this module needs to know the type code is just three fields.
pub trait TypeTraits {
    fn base_type(&self) -> BaseType;
    fn indirection(&self) -> Indirection;
    fn has_qualifier(&self, q: Qualifiers) -> bool;
    fn strip_qualifiers(&self) -> TypeCode;
    fn is_indirect(&self) -> bool;
    fn is_pointer(&self) -> bool;
    fn is_const(&self) -> bool;
}

impl TypeTraits for TypeCode {
    fn base_type(&self) -> BaseType {
        self.base
    }

    fn indirection(&self) -> Indirection {
        self.indirection
    }

    fn has_qualifier(&self, q: Qualifiers) -> bool {
        self.qualifiers.contains(q)
    }

    fn strip_qualifiers(&self) -> TypeCode {
        TypeCode {
            base: self.base,
            indirection: self.indirection,
            qualifiers: Qualifiers::empty(),
            class_name: self.class_name.clone(),
        }
    }

    fn is_indirect(&self) -> bool {
        self.indirection.is_indirect()
    }

    fn is_pointer(&self) -> bool {
        self.indirection.is_pointer()
    }

    fn is_const(&self) -> bool {
        self.indirection.is_const() || self.qualifiers.contains(Qualifiers::CONST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_reference_collapses_ref_shapes() {
        assert_eq!(Indirection::Ref.fold_reference(), Indirection::None);
        assert_eq!(Indirection::PointerRef.fold_reference(), Indirection::Pointer);
        assert_eq!(
            Indirection::ConstPointerRef.fold_reference(),
            Indirection::ConstPointer
        );
        assert_eq!(Indirection::Pointer.fold_reference(), Indirection::Pointer);
    }

    #[test]
    fn promote_multi_value_widens_by_one_pointer() {
        assert_eq!(
            Indirection::None.promote_multi_value(),
            Some(Indirection::Pointer)
        );
        assert_eq!(
            Indirection::Pointer.promote_multi_value(),
            Some(Indirection::PointerPointer)
        );
        assert_eq!(Indirection::ConstPointer.promote_multi_value(), None);
    }

    #[test]
    fn base_type_decodes_from_numeric_tag() {
        assert_eq!(BaseType::try_from_tag(2).unwrap(), BaseType::Double);
        assert!(BaseType::try_from_tag(200).is_err());
    }

    #[test]
    fn object_type_carries_class_name() {
        let t = TypeCode::object("vtkDataArray", Indirection::Pointer);
        assert_eq!(t.base_type(), BaseType::Object);
        assert!(t.is_pointer());
        assert_eq!(t.class_name.as_deref(), Some("vtkDataArray"));
    }
}

use serde::{Deserialize, Serialize};

use crate::role::{Role, RoleSet};
use crate::types::TypeCode;

/// One discovered property: the name, scalar/array type, element count,
/// and per-access-level role bitfields assembled from the methods that
/// contributed to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    pub name: String,
    pub type_code: TypeCode,
    pub count: u32,
    pub is_static: bool,
    pub public_methods: RoleSet,
    pub protected_methods: RoleSet,
    pub private_methods: RoleSet,
    pub legacy_methods: RoleSet,
    pub enum_constant_names: Vec<String>,
    pub comment: Option<String>,
}

impl Property {
    #[must_use]
    pub fn new(name: impl Into<String>, type_code: TypeCode, comment: Option<String>) -> Self {
        Self {
            name: name.into(),
            type_code,
            count: 0,
            is_static: false,
            public_methods: RoleSet::empty(),
            protected_methods: RoleSet::empty(),
            private_methods: RoleSet::empty(),
            legacy_methods: RoleSet::empty(),
            enum_constant_names: Vec::new(),
            comment,
        }
    }

    /// ORs `role` into the access-level bitfield matching `is_public`/
    /// `is_protected` (private is the default when both are false), and
    /// into `legacy_methods` when `is_legacy`.
    pub fn record_role(&mut self, role: Role, is_public: bool, is_protected: bool, is_legacy: bool) {
        let bit = role.to_bit();
        let level = if is_public {
            &mut self.public_methods
        } else if is_protected {
            &mut self.protected_methods
        } else {
            &mut self.private_methods
        };
        *level |= bit;
        if is_legacy {
            self.legacy_methods |= bit;
        }
    }

    pub fn add_enum_constant(&mut self, name: String) {
        if !self.enum_constant_names.contains(&name) {
            self.enum_constant_names.push(name);
        }
    }

    #[must_use]
    pub fn all_methods(&self) -> RoleSet {
        self.public_methods | self.protected_methods | self.private_methods
    }
}

/// Discovered property set for one class, plus a per-method role/owner
/// index parallel to the class's method list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassProperties {
    pub properties: Vec<Property>,
    pub role_of: Vec<Role>,
    pub property_of: Vec<Option<usize>>,
}

impl ClassProperties {
    #[must_use]
    pub fn property_for_method(&self, method_index: usize) -> Option<&Property> {
        self.property_of
            .get(method_index)
            .copied()
            .flatten()
            .and_then(|idx| self.properties.get(idx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{BaseType, Indirection};

    #[test]
    fn record_role_routes_by_access_level() {
        let mut p = Property::new("Radius", TypeCode::new(BaseType::Double, Indirection::None), None);
        p.record_role(Role::BasicSet, true, false, false);
        p.record_role(Role::BasicGet, false, true, false);
        assert!(p.public_methods.contains(RoleSet::BASIC_SET));
        assert!(p.protected_methods.contains(RoleSet::BASIC_GET));
        assert!(p.private_methods.is_empty());
    }

    #[test]
    fn enum_constants_are_deduplicated_in_insertion_order() {
        let mut p = Property::new("Mode", TypeCode::new(BaseType::Int, Indirection::None), None);
        p.add_enum_constant("Red".into());
        p.add_enum_constant("Blue".into());
        p.add_enum_constant("Red".into());
        assert_eq!(p.enum_constant_names, vec!["Red", "Blue"]);
    }
}

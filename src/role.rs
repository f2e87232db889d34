use bitflags::bitflags;
use serde::{Deserialize, Serialize};

/// The part a single method plays with respect to its property. Exactly
/// one of these (or `None`) is computed per eligible method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    None,
    BasicGet,
    BasicSet,
    MultiGet,
    MultiSet,
    IndexGet,
    IndexSet,
    NthGet,
    NthSet,
    RhsGet,
    IndexRhsGet,
    NthRhsGet,
    StringGet,
    EnumSet,
    BoolOn,
    BoolOff,
    MinGet,
    MaxGet,
    GetNum,
    SetNum,
    BasicAdd,
    MultiAdd,
    IndexAdd,
    BasicRem,
    IndexRem,
    RemoveAll,
}

bitflags! {
    /// Aggregate of [`Role`]s contributed at one access level (or as the
    /// legacy-only subset) for a single property.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
    pub struct RoleSet: u32 {
        const BASIC_GET     = 1 << 0;
        const BASIC_SET     = 1 << 1;
        const MULTI_GET     = 1 << 2;
        const MULTI_SET     = 1 << 3;
        const INDEX_GET     = 1 << 4;
        const INDEX_SET     = 1 << 5;
        const NTH_GET       = 1 << 6;
        const NTH_SET       = 1 << 7;
        const RHS_GET       = 1 << 8;
        const INDEX_RHS_GET = 1 << 9;
        const NTH_RHS_GET   = 1 << 10;
        const STRING_GET    = 1 << 11;
        const ENUM_SET      = 1 << 12;
        const BOOL_ON       = 1 << 13;
        const BOOL_OFF      = 1 << 14;
        const MIN_GET       = 1 << 15;
        const MAX_GET       = 1 << 16;
        const GET_NUM       = 1 << 17;
        const SET_NUM       = 1 << 18;
        const BASIC_ADD     = 1 << 19;
        const MULTI_ADD     = 1 << 20;
        const INDEX_ADD     = 1 << 21;
        const BASIC_REM     = 1 << 22;
        const INDEX_REM     = 1 << 23;
        const REMOVEALL     = 1 << 24;
    }
}

impl Role {
    #[must_use]
    pub fn to_bit(self) -> RoleSet {
        match self {
            Role::None => RoleSet::empty(),
            Role::BasicGet => RoleSet::BASIC_GET,
            Role::BasicSet => RoleSet::BASIC_SET,
            Role::MultiGet => RoleSet::MULTI_GET,
            Role::MultiSet => RoleSet::MULTI_SET,
            Role::IndexGet => RoleSet::INDEX_GET,
            Role::IndexSet => RoleSet::INDEX_SET,
            Role::NthGet => RoleSet::NTH_GET,
            Role::NthSet => RoleSet::NTH_SET,
            Role::RhsGet => RoleSet::RHS_GET,
            Role::IndexRhsGet => RoleSet::INDEX_RHS_GET,
            Role::NthRhsGet => RoleSet::NTH_RHS_GET,
            Role::StringGet => RoleSet::STRING_GET,
            Role::EnumSet => RoleSet::ENUM_SET,
            Role::BoolOn => RoleSet::BOOL_ON,
            Role::BoolOff => RoleSet::BOOL_OFF,
            Role::MinGet => RoleSet::MIN_GET,
            Role::MaxGet => RoleSet::MAX_GET,
            Role::GetNum => RoleSet::GET_NUM,
            Role::SetNum => RoleSet::SET_NUM,
            Role::BasicAdd => RoleSet::BASIC_ADD,
            Role::MultiAdd => RoleSet::MULTI_ADD,
            Role::IndexAdd => RoleSet::INDEX_ADD,
            Role::BasicRem => RoleSet::BASIC_REM,
            Role::IndexRem => RoleSet::INDEX_REM,
            Role::RemoveAll => RoleSet::REMOVEALL,
        }
    }
}

/// Pure function from one method's attributes (plus whether the match
/// that admitted it was "long form") to the single role it contributes.
/// `short_form = !long_match`; a property's seed method is always
/// classified with `short_form = false` so it always lands on a
/// basic/long-form role (see the synthesis design notes).
#[must_use]
pub fn classify(attrs: &crate::attributes::MethodAttributes, short_form: bool) -> Role {
    use crate::names;

    let name = attrs.name.as_str();

    if names::is_set(name) {
        if attrs.is_enumerated {
            return Role::EnumSet;
        }
        if attrs.is_indexed {
            return if names::is_set_nth(name) {
                Role::NthSet
            } else {
                Role::IndexSet
            };
        }
        if attrs.is_multi_value {
            return Role::MultiSet;
        }
        if short_form && names::is_set_number_of(name) {
            return Role::SetNum;
        }
        return Role::BasicSet;
    }

    if attrs.is_boolean {
        return if name.ends_with('n') {
            Role::BoolOn
        } else {
            Role::BoolOff
        };
    }

    if names::is_get(name) {
        if short_form && names::is_get_min_value(name) {
            return Role::MinGet;
        }
        if short_form && names::is_get_max_value(name) {
            return Role::MaxGet;
        }
        if short_form && names::is_as_string(name) {
            return Role::StringGet;
        }
        if attrs.is_indexed {
            let rhs = attrs.count > 0 && !attrs.is_hinted;
            return match (rhs, names::is_get_nth(name)) {
                (true, true) => Role::NthRhsGet,
                (true, false) => Role::IndexRhsGet,
                (false, true) => Role::NthGet,
                (false, false) => Role::IndexGet,
            };
        }
        if attrs.is_multi_value {
            return Role::MultiGet;
        }
        if attrs.count > 0 && !attrs.is_hinted {
            return Role::RhsGet;
        }
        if short_form && names::is_get_number_of(name) {
            return Role::GetNum;
        }
        return Role::BasicGet;
    }

    if names::is_remove(name) {
        if names::is_remove_all(name) {
            return Role::RemoveAll;
        }
        return if attrs.is_indexed {
            Role::IndexRem
        } else {
            Role::BasicRem
        };
    }

    if names::is_add(name) {
        if attrs.is_indexed {
            return Role::IndexAdd;
        }
        if attrs.is_multi_value {
            return Role::MultiAdd;
        }
        return Role::BasicAdd;
    }

    Role::None
}

/// Stable canonical token for a role, used by diagnostics and the
/// `report` demo binary.
#[must_use]
pub fn role_name(role: Role) -> &'static str {
    match role {
        Role::None => "",
        Role::BasicGet => "BASIC_GET",
        Role::BasicSet => "BASIC_SET",
        Role::MultiGet => "MULTI_GET",
        Role::MultiSet => "MULTI_SET",
        Role::IndexGet => "INDEX_GET",
        Role::IndexSet => "INDEX_SET",
        Role::NthGet => "NTH_GET",
        Role::NthSet => "NTH_SET",
        Role::RhsGet => "RHS_GET",
        Role::IndexRhsGet => "INDEX_RHS_GET",
        Role::NthRhsGet => "NTH_RHS_GET",
        Role::StringGet => "STRING_GET",
        Role::EnumSet => "ENUM_SET",
        Role::BoolOn => "BOOL_ON",
        Role::BoolOff => "BOOL_OFF",
        Role::MinGet => "MIN_GET",
        Role::MaxGet => "MAX_GET",
        Role::GetNum => "GET_NUM",
        Role::SetNum => "SET_NUM",
        Role::BasicAdd => "BASIC_ADD",
        Role::MultiAdd => "MULTI_ADD",
        Role::IndexAdd => "INDEX_ADD",
        Role::BasicRem => "BASIC_REM",
        Role::IndexRem => "INDEX_REM",
        Role::RemoveAll => "REMOVEALL",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_name_round_trips_every_variant() {
        assert_eq!(role_name(Role::None), "");
        assert_eq!(role_name(Role::BasicGet), "BASIC_GET");
        assert_eq!(role_name(Role::RemoveAll), "REMOVEALL");
    }

    #[test]
    fn role_set_union_is_order_independent() {
        let a = Role::BasicGet.to_bit() | Role::BasicSet.to_bit();
        let b = Role::BasicSet.to_bit() | Role::BasicGet.to_bit();
        assert_eq!(a, b);
        assert!(a.contains(RoleSet::BASIC_GET));
    }
}

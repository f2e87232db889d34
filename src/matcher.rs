use crate::attributes::MethodAttributes;
use crate::names;
use crate::property::Property;
use crate::role::{Role, RoleSet};
use crate::types::{BaseType, Indirection, TypeCode, TypeTraits};

/// Outcome of testing one method against one tentative property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    NoMatch,
    Match { role: Role, long_match: bool },
}

fn is_plain_int_or_id(type_code: &TypeCode) -> bool {
    matches!(type_code.base_type(), BaseType::Int | BaseType::IdType) && !type_code.is_indirect()
}

/// Decides whether `attrs` belongs to `property`. See the nine ordered
/// rules in the synthesis design notes.
#[must_use]
pub fn try_match(property: &Property, attrs: &MethodAttributes) -> MatchOutcome {
    let method_name = attrs.name.as_str();

    // Rule 1: strip the recognized prefix, special-casing the
    // GetNumberOf/SetNumberOf keyword so that a property already named
    // `NumberOf...` is a "long match" matched in its basic form.
    let is_number_of = names::is_get_number_of(method_name) || names::is_set_number_of(method_name);
    let mut long_match = is_number_of
        && property.name.starts_with("NumberOf")
        && property.name[8..].chars().next().is_some_and(|c| c.is_ascii_uppercase());
    let name = if is_number_of {
        if long_match {
            names::strip_prefix(method_name)
        } else {
            &method_name[11..]
        }
    } else {
        names::strip_prefix(method_name)
    };

    // Rule 2: candidate name must carry the property name as a prefix.
    let Some(tail) = name.strip_prefix(property.name.as_str()) else {
        return MatchOutcome::NoMatch;
    };

    // Rule 3: the remaining tail must be a recognized suffix shape.
    if !names::is_valid_suffix(method_name, &property.name, tail) {
        return MatchOutcome::NoMatch;
    }

    // A property already named `FooMinValue`/`FooMaxValue`/`FooAsString`
    // swallows the whole keyword into its name, so the keyword no longer
    // disambiguates a role: it's a long match, contributing the basic
    // role rather than MinGet/MaxGet/StringGet.
    if !is_number_of
        && tail.is_empty()
        && (names::is_get_min_value(method_name)
            || names::is_get_max_value(method_name)
            || names::is_as_string(method_name))
    {
        long_match = true;
    }

    // Rule 4: special memberships independent of type equality.
    if !long_match {
        if names::is_remove_all(method_name) {
            return if attrs.type_code.base_type() == BaseType::Void
                && property
                    .all_methods()
                    .intersects(RoleSet::BASIC_ADD | RoleSet::MULTI_ADD)
            {
                MatchOutcome::Match {
                    role: Role::RemoveAll,
                    long_match,
                }
            } else {
                MatchOutcome::NoMatch
            };
        }
        if names::is_get_number_of(method_name) {
            return if is_plain_int_or_id(&attrs.type_code)
                && property.all_methods().intersects(RoleSet::INDEX_GET | RoleSet::NTH_GET)
            {
                MatchOutcome::Match {
                    role: Role::GetNum,
                    long_match,
                }
            } else {
                MatchOutcome::NoMatch
            };
        }
        if names::is_set_number_of(method_name) {
            return if is_plain_int_or_id(&attrs.type_code)
                && property.all_methods().intersects(RoleSet::INDEX_SET | RoleSet::NTH_SET)
            {
                MatchOutcome::Match {
                    role: Role::SetNum,
                    long_match,
                }
            } else {
                MatchOutcome::NoMatch
            };
        }
    }

    // Rule 5: strip qualifiers, fold reference shapes away.
    let mut effective_base = attrs.type_code.base_type();
    let mut effective_indirection = attrs.type_code.indirection().fold_reference();

    // Rule 6: multi-value pointer promotion.
    if attrs.is_multi_value {
        match effective_indirection.promote_multi_value() {
            Some(promoted) => effective_indirection = promoted,
            None => return MatchOutcome::NoMatch,
        }
    }

    // Rule 7: boolean/enumerated/GetAsString widening to the property's
    // plain integral type.
    let is_as_string = names::is_as_string(method_name);
    if attrs.is_boolean || attrs.is_enumerated || is_as_string {
        let may_promote = if is_as_string {
            effective_base == BaseType::Char && effective_indirection.is_pointer()
        } else {
            true
        };
        if may_promote {
            let property_base = property.type_code.base_type();
            let accepts = matches!(
                property_base,
                BaseType::Int | BaseType::UnsignedInt | BaseType::UnsignedChar
            ) || (attrs.is_boolean && property_base == BaseType::Bool);
            if accepts {
                effective_base = property_base;
                effective_indirection = Indirection::None;
            }
        }
    }

    // Rule 8: exact type and count equality.
    if effective_base != property.type_code.base_type()
        || effective_indirection != property.type_code.indirection()
        || attrs.count != property.count
    {
        return MatchOutcome::NoMatch;
    }

    // Rule 9: Object types need matching indirection, zero count,
    // non-multi-value, and identical class names.
    if property.type_code.base_type() == BaseType::Object
        && (effective_indirection != Indirection::Pointer
            || property.count != 0
            || attrs.is_multi_value
            || attrs.type_code.class_name != property.type_code.class_name)
    {
        return MatchOutcome::NoMatch;
    }

    let role = crate::role::classify(attrs, !long_match);
    if role == Role::None {
        return MatchOutcome::NoMatch;
    }
    MatchOutcome::Match { role, long_match }
}

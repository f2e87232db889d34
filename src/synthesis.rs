use tracing::{debug, debug_span, trace};

use crate::attributes::{self, MethodAttributes};
use crate::config::SynthesisConfig;
use crate::function::Class;
use crate::matcher::{self, MatchOutcome};
use crate::names;
use crate::property::{ClassProperties, Property};
use crate::repeat;
use crate::role::{self, Role};
use crate::types::{BaseType, Indirection, TypeCode};

/// The five seed-phase filters, applied in order. A phase only seeds a
/// new property from a method not already consumed by an earlier
/// phase's fixed-point growth.
const PHASES: [(&str, fn(&MethodAttributes) -> bool); 5] = [
    ("setters", |a| {
        names::is_set(&a.name) && !a.is_enumerated && !names::is_set_number_of(&a.name)
    }),
    ("number-of-setters", |a| names::is_set_number_of(&a.name)),
    ("getters", |a| {
        names::is_get(&a.name) && !names::is_as_string(&a.name) && !names::is_get_number_of(&a.name)
    }),
    ("number-of-getters", |a| names::is_get_number_of(&a.name)),
    ("adders", |a| names::is_add(&a.name)),
];

fn is_matched(attrs: &MethodAttributes) -> bool {
    attrs.property_of.get().is_some()
}

/// Property type/count a fresh seed contributes, mirroring Matcher's
/// qualifier-stripping and multi-value promotion (rules 5-6), with the
/// boolean/enumerated special case from the role classifier design
/// notes. Structurally, neither a boolean toggle nor an enumerated
/// setter can occur as a seed under the current phase filters, but the
/// promotion is total so the helper stays correct if that ever changes.
fn seed_type_code(attrs: &MethodAttributes) -> TypeCode {
    if attrs.is_boolean || attrs.is_enumerated {
        return TypeCode::new(BaseType::Int, Indirection::None);
    }
    let mut indirection = attrs.type_code.indirection.fold_reference();
    if attrs.is_multi_value {
        indirection = indirection.promote_multi_value().unwrap_or(indirection);
    }
    TypeCode {
        base: attrs.type_code.base,
        indirection,
        qualifiers: crate::types::Qualifiers::empty(),
        class_name: attrs.type_code.class_name.clone(),
    }
}

fn seed_property(attrs: &MethodAttributes) -> Property {
    let name = names::strip_prefix(&attrs.name).to_string();
    let mut property = Property::new(name, seed_type_code(attrs), attrs.comment.clone());
    property.count = attrs.count;
    property.is_static = attrs.is_static;
    property
}

/// Extracts the enumerated state name from a `Set*To<State>` method,
/// given the property name it was matched against.
fn enum_state_name(property_name: &str, method_name: &str) -> String {
    let name = names::strip_prefix(method_name);
    let tail = &name[property_name.len()..];
    tail.strip_prefix("To").unwrap_or(tail).to_string()
}

fn propagate_to_dominated(seed: usize, property_index: usize, role: Role, eligible: &[MethodAttributes], dominates: &[Vec<usize>]) {
    for &d in &dominates[seed] {
        eligible[d].role.set(role);
        eligible[d].property_of.set(Some(property_index));
    }
}

fn admit(
    property: &mut Property,
    attrs: &MethodAttributes,
    attrs_idx: usize,
    role: Role,
    property_index: usize,
    eligible: &[MethodAttributes],
    dominates: &[Vec<usize>],
) {
    attrs.role.set(role);
    attrs.property_of.set(Some(property_index));
    property.record_role(role, attrs.is_public, attrs.is_protected, attrs.is_legacy);
    if attrs.is_static {
        property.is_static = true;
    }
    if attrs.is_enumerated {
        property.add_enum_constant(enum_state_name(&property.name, &attrs.name));
    }
    propagate_to_dominated(attrs_idx, property_index, role, eligible, dominates);
}

fn seed_and_grow(
    seed_idx: usize,
    eligible: &[MethodAttributes],
    properties: &mut Vec<Property>,
    dominates: &[Vec<usize>],
) {
    let seed = &eligible[seed_idx];
    let role = role::classify(seed, false);
    let mut property = seed_property(seed);
    let property_index = properties.len();
    debug!(property = %property.name, method = %seed.name, "seeding property");
    admit(&mut property, seed, seed_idx, role, property_index, eligible, dominates);
    properties.push(property);

    loop {
        let mut admitted_any = false;
        for (idx, candidate) in eligible.iter().enumerate() {
            if is_matched(candidate) || candidate.is_repeat.get() {
                continue;
            }
            if let MatchOutcome::Match { role, long_match } =
                matcher::try_match(&properties[property_index], candidate)
            {
                trace!(
                    property = %properties[property_index].name,
                    method = %candidate.name,
                    role = role::role_name(role),
                    long_match,
                    "admitted method"
                );
                admit(
                    &mut properties[property_index],
                    candidate,
                    idx,
                    role,
                    property_index,
                    eligible,
                    dominates,
                );
                admitted_any = true;
            }
        }
        if !admitted_any {
            break;
        }
    }
}

/// Synthesizes a property model from a class's method list. `class` must
/// satisfy [`Class::validate`]; the algorithm itself never fails given a
/// well-formed class.
#[must_use]
pub fn build_properties(class: &Class, config: &SynthesisConfig) -> ClassProperties {
    let _span = debug_span!("build_properties", class = class.name.as_str()).entered();

    let mut eligible: Vec<MethodAttributes> = Vec::new();
    let mut eligible_to_method: Vec<usize> = Vec::new();
    for (method_index, function) in class.methods.iter().enumerate() {
        if let Some(attrs) = attributes::extract(function, config) {
            eligible_to_method.push(method_index);
            eligible.push(attrs);
        }
    }

    let dominates = repeat::mark_all(&eligible);

    let mut properties: Vec<Property> = Vec::new();
    for (phase_name, predicate) in PHASES {
        let _phase_span = debug_span!("phase", name = phase_name).entered();
        for seed_idx in 0..eligible.len() {
            let candidate = &eligible[seed_idx];
            if is_matched(candidate) || candidate.is_repeat.get() || !predicate(candidate) {
                continue;
            }
            seed_and_grow(seed_idx, &eligible, &mut properties, &dominates);
        }
    }

    let mut role_of = vec![Role::None; class.methods.len()];
    let mut property_of = vec![None; class.methods.len()];
    for (elig_idx, &method_index) in eligible_to_method.iter().enumerate() {
        role_of[method_index] = eligible[elig_idx].role.get();
        property_of[method_index] = eligible[elig_idx].property_of.get();
    }

    ClassProperties {
        properties,
        role_of,
        property_of,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::{Argument, Function};
    use crate::role::RoleSet;
    use crate::types::Qualifiers;

    fn public_fn(name: &str, return_type: TypeCode, args: Vec<Argument>) -> Function {
        Function {
            name: name.to_string(),
            return_type,
            args,
            has_hint: false,
            hint_size: 0,
            is_operator: false,
            is_legacy: false,
            is_public: true,
            is_protected: false,
            array_failure: false,
            comment: None,
        }
    }

    #[test]
    fn basic_scalar_property() {
        let class = Class::new(
            "vtkThing",
            vec![
                public_fn(
                    "SetRadius",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![Argument::new(TypeCode::new(BaseType::Double, Indirection::None))],
                ),
                public_fn("GetRadius", TypeCode::new(BaseType::Double, Indirection::None), vec![]),
            ],
        );
        let result = build_properties(&class, &SynthesisConfig::faithful());
        assert_eq!(result.properties.len(), 1);
        let p = &result.properties[0];
        assert_eq!(p.name, "Radius");
        assert_eq!(p.type_code.base, BaseType::Double);
        assert_eq!(p.public_methods, RoleSet::BASIC_SET | RoleSet::BASIC_GET);
    }

    #[test]
    fn indexed_point_with_number_of_pair() {
        let class = Class::new(
            "vtkThing",
            vec![
                public_fn(
                    "SetPoint",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![
                        Argument::new(TypeCode::new(BaseType::Int, Indirection::None)),
                        Argument::new(TypeCode::new(BaseType::Double, Indirection::None)),
                    ],
                ),
                public_fn(
                    "GetPoint",
                    TypeCode::new(BaseType::Double, Indirection::None),
                    vec![Argument::new(TypeCode::new(BaseType::Int, Indirection::None))],
                ),
                public_fn("GetNumberOfPoints", TypeCode::new(BaseType::Int, Indirection::None), vec![]),
                public_fn(
                    "SetNumberOfPoints",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![Argument::new(TypeCode::new(BaseType::Int, Indirection::None))],
                ),
            ],
        );
        let result = build_properties(&class, &SynthesisConfig::faithful());
        assert_eq!(result.properties.len(), 1);
        let p = &result.properties[0];
        assert_eq!(p.name, "Point");
        assert_eq!(p.count, 0);
        assert_eq!(p.type_code.base, BaseType::Double);
        assert_eq!(
            p.public_methods,
            RoleSet::INDEX_SET | RoleSet::INDEX_GET | RoleSet::GET_NUM | RoleSet::SET_NUM
        );
    }

    #[test]
    fn multi_value_color_with_float_repeat() {
        let double3 = || {
            vec![
                Argument::new(TypeCode::new(BaseType::Double, Indirection::None)),
                Argument::new(TypeCode::new(BaseType::Double, Indirection::None)),
                Argument::new(TypeCode::new(BaseType::Double, Indirection::None)),
            ]
        };
        let float3 = vec![
            Argument::new(TypeCode::new(BaseType::Float, Indirection::None)),
            Argument::new(TypeCode::new(BaseType::Float, Indirection::None)),
            Argument::new(TypeCode::new(BaseType::Float, Indirection::None)),
        ];
        let class = Class::new(
            "vtkThing",
            vec![
                public_fn("SetColor", TypeCode::new(BaseType::Void, Indirection::None), float3),
                public_fn("SetColor", TypeCode::new(BaseType::Void, Indirection::None), double3()),
                public_fn(
                    "GetColor",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![
                        Argument::new(TypeCode::new(BaseType::Double, Indirection::Ref)),
                        Argument::new(TypeCode::new(BaseType::Double, Indirection::Ref)),
                        Argument::new(TypeCode::new(BaseType::Double, Indirection::Ref)),
                    ],
                ),
            ],
        );
        let result = build_properties(&class, &SynthesisConfig::faithful());
        assert_eq!(result.properties.len(), 1);
        let p = &result.properties[0];
        assert_eq!(p.count, 3);
        assert_eq!(p.type_code.base, BaseType::Double);
        assert_eq!(p.public_methods, RoleSet::MULTI_SET | RoleSet::MULTI_GET);
        // idx0 (the float overload) is dominated by idx1 (the double overload,
        // the actual seed); its role/property mirror the seed's by propagation.
        assert_eq!(result.role_of[0], Role::MultiSet);
        assert_eq!(result.property_of[0], Some(0));
        assert_eq!(result.property_of[1], Some(0));
    }

    #[test]
    fn enumerated_mode_with_as_string() {
        let class = Class::new(
            "vtkThing",
            vec![
                public_fn("SetModeToRed", TypeCode::new(BaseType::Void, Indirection::None), vec![]),
                public_fn("SetModeToBlue", TypeCode::new(BaseType::Void, Indirection::None), vec![]),
                public_fn(
                    "GetModeAsString",
                    TypeCode::new(BaseType::Char, Indirection::ConstPointer),
                    vec![],
                ),
                public_fn("GetMode", TypeCode::new(BaseType::Int, Indirection::None), vec![]),
                public_fn(
                    "SetMode",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![Argument::new(TypeCode::new(BaseType::Int, Indirection::None))],
                ),
            ],
        );
        let result = build_properties(&class, &SynthesisConfig::faithful());
        assert_eq!(result.properties.len(), 1);
        let p = &result.properties[0];
        assert_eq!(p.name, "Mode");
        assert_eq!(p.type_code.base, BaseType::Int);
        assert_eq!(
            p.public_methods,
            RoleSet::BASIC_SET | RoleSet::BASIC_GET | RoleSet::ENUM_SET | RoleSet::STRING_GET
        );
        assert_eq!(p.enum_constant_names, vec!["Red", "Blue"]);
    }

    #[test]
    fn boolean_debug_toggle() {
        let class = Class::new(
            "vtkThing",
            vec![
                public_fn("DebugOn", TypeCode::new(BaseType::Void, Indirection::None), vec![]),
                public_fn("DebugOff", TypeCode::new(BaseType::Void, Indirection::None), vec![]),
                public_fn(
                    "SetDebug",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![Argument::new(TypeCode::new(BaseType::Int, Indirection::None))],
                ),
                public_fn("GetDebug", TypeCode::new(BaseType::Int, Indirection::None), vec![]),
            ],
        );
        let result = build_properties(&class, &SynthesisConfig::faithful());
        assert_eq!(result.properties.len(), 1);
        let p = &result.properties[0];
        assert_eq!(p.name, "Debug");
        assert_eq!(
            p.public_methods,
            RoleSet::BASIC_SET | RoleSet::BASIC_GET | RoleSet::BOOL_ON | RoleSet::BOOL_OFF
        );
    }

    #[test]
    fn add_remove_object_collection() {
        let object = TypeCode::object("vtkObject", Indirection::Pointer);
        let class = Class::new(
            "vtkThing",
            vec![
                public_fn(
                    "AddInput",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![Argument::new(object.clone())],
                ),
                public_fn(
                    "RemoveInput",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![Argument::new(object)],
                ),
                public_fn(
                    "RemoveAllInputs",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![],
                ),
            ],
        );
        let result = build_properties(&class, &SynthesisConfig::faithful());
        assert_eq!(result.properties.len(), 1);
        let p = &result.properties[0];
        assert_eq!(p.name, "Input");
        assert_eq!(p.type_code.class_name.as_deref(), Some("vtkObject"));
        assert_eq!(
            p.public_methods,
            RoleSet::BASIC_ADD | RoleSet::BASIC_REM | RoleSet::REMOVEALL
        );
    }

    #[test]
    fn static_return_qualifier_marks_property_static() {
        let class = Class::new(
            "vtkThing",
            vec![public_fn(
                "GetGlobalCount",
                TypeCode::new(BaseType::Int, Indirection::None).with_qualifiers(Qualifiers::STATIC),
                vec![],
            )],
        );
        let result = build_properties(&class, &SynthesisConfig::faithful());
        assert!(result.properties[0].is_static);
    }

    #[test]
    fn phase_ordering_places_setter_seeded_properties_first() {
        let class = Class::new(
            "vtkThing",
            vec![
                public_fn("GetBar", TypeCode::new(BaseType::Int, Indirection::None), vec![]),
                public_fn(
                    "SetFoo",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![Argument::new(TypeCode::new(BaseType::Int, Indirection::None))],
                ),
            ],
        );
        let result = build_properties(&class, &SynthesisConfig::faithful());
        assert_eq!(result.properties.len(), 2);
        assert_eq!(result.properties[0].name, "Foo");
        assert_eq!(result.properties[1].name, "Bar");
    }

    #[test]
    fn re_running_synthesis_is_deterministic() {
        let class = Class::new(
            "vtkThing",
            vec![
                public_fn(
                    "SetRadius",
                    TypeCode::new(BaseType::Void, Indirection::None),
                    vec![Argument::new(TypeCode::new(BaseType::Double, Indirection::None))],
                ),
                public_fn("GetRadius", TypeCode::new(BaseType::Double, Indirection::None), vec![]),
            ],
        );
        let config = SynthesisConfig::faithful();
        let first = build_properties(&class, &config);
        let second = build_properties(&class, &config);
        assert_eq!(first.properties, second.properties);
    }
}

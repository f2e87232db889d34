use cxx_property_synth::{build_properties, role_name, Class, RoleSet, SynthesisConfig, TypeTraits};

fn main() {
    let path = std::env::args()
        .nth(1)
        .expect("Provide path to a class description JSON file");
    let data = std::fs::read_to_string(&path).unwrap();
    let class: Class = serde_json::from_str(&data).unwrap();
    class.validate().unwrap();

    let config = SynthesisConfig::faithful();
    let result = build_properties(&class, &config);

    println!("<Class name=\"{}\" methods={}>", class.name, class.methods.len());
    for property in &result.properties {
        print!(
            "  <Property name=\"{}\" base={:?} indirection={:?} count={}",
            property.name,
            property.type_code.base_type(),
            property.type_code.indirection(),
            property.count
        );
        if property.is_static {
            print!(" static");
        }
        println!(">");
        print_role_line("public", property.public_methods);
        print_role_line("protected", property.protected_methods);
        print_role_line("private", property.private_methods);
        print_role_line("legacy", property.legacy_methods);
        if !property.enum_constant_names.is_empty() {
            println!("    enum = {:?}", property.enum_constant_names);
        }
        println!("  </Property>");
    }

    for (method_index, method) in class.methods.iter().enumerate() {
        let role = result.role_of[method_index];
        if role_name(role).is_empty() {
            continue;
        }
        let owner = result
            .property_for_method(method_index)
            .map_or("?", |p| p.name.as_str());
        println!("  {} -> {} ({})", method.name, owner, role_name(role));
    }
    println!("</Class>");
}

fn print_role_line(label: &str, roles: RoleSet) {
    if roles.is_empty() {
        return;
    }
    let names: Vec<&str> = roles
        .iter()
        .map(|bit| role_name_for_bit(bit))
        .collect();
    println!("    {label} = {}", names.join("|"));
}

fn role_name_for_bit(bit: RoleSet) -> &'static str {
    use cxx_property_synth::Role;
    for role in [
        Role::BasicGet,
        Role::BasicSet,
        Role::MultiGet,
        Role::MultiSet,
        Role::IndexGet,
        Role::IndexSet,
        Role::NthGet,
        Role::NthSet,
        Role::RhsGet,
        Role::IndexRhsGet,
        Role::NthRhsGet,
        Role::StringGet,
        Role::EnumSet,
        Role::BoolOn,
        Role::BoolOff,
        Role::MinGet,
        Role::MaxGet,
        Role::GetNum,
        Role::SetNum,
        Role::BasicAdd,
        Role::MultiAdd,
        Role::IndexAdd,
        Role::BasicRem,
        Role::IndexRem,
        Role::RemoveAll,
    ] {
        if role.to_bit() == bit {
            return role_name(role);
        }
    }
    "?"
}

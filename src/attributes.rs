use std::cell::Cell;

use crate::config::SynthesisConfig;
use crate::function::{Argument, Function};
use crate::names;
use crate::role::Role;
use crate::types::{BaseType, Indirection, TypeCode, TypeTraits};

/// One eligible method's translated shape. Produced by [`extract`];
/// ineligible functions (operators, parse failures, signatures matching
/// none of the five recognized shapes) simply never get one.
///
/// `is_repeat`, `role` and `property_of` are interior-mutable because
/// [`crate::repeat::mark_repeats`] and [`crate::synthesis::build`] update
/// them in place while holding only a shared slice of attributes —
/// mirroring the teacher's preference for plain owned records over a
/// second pass of index bookkeeping.
#[derive(Debug)]
pub struct MethodAttributes {
    pub name: String,
    pub comment: Option<String>,
    pub type_code: TypeCode,
    pub count: u32,
    pub is_public: bool,
    pub is_protected: bool,
    pub is_legacy: bool,
    pub is_static: bool,
    pub is_hinted: bool,
    pub is_multi_value: bool,
    pub is_indexed: bool,
    pub is_enumerated: bool,
    pub is_boolean: bool,
    pub is_repeat: Cell<bool>,
    pub role: Cell<Role>,
    pub property_of: Cell<Option<usize>>,
}

impl MethodAttributes {
    fn new(function: &Function, type_code: TypeCode, count: u32, is_indexed: bool) -> Self {
        Self {
            name: function.name.clone(),
            comment: function.comment.clone(),
            type_code,
            count,
            is_public: function.is_public,
            is_protected: function.is_protected,
            is_legacy: function.is_legacy,
            is_static: function.return_type.has_qualifier(crate::types::Qualifiers::STATIC),
            is_hinted: function.has_hint,
            is_multi_value: false,
            is_indexed,
            is_enumerated: false,
            is_boolean: false,
            is_repeat: Cell::new(false),
            role: Cell::new(Role::None),
            property_of: Cell::new(None),
        }
    }
}

fn is_plain_index_type(type_code: &TypeCode) -> bool {
    matches!(type_code.base_type(), BaseType::Int | BaseType::IdType) && !type_code.is_indirect()
}

fn args_share_type(args: &[Argument]) -> bool {
    let Some(first) = args.first() else {
        return true;
    };
    args.iter().all(|a| {
        a.type_code.base_type() == first.type_code.base_type()
            && a.type_code.indirection() == first.type_code.indirection()
    })
}

fn is_indexed(function: &Function) -> bool {
    let args = &function.args;
    if function.return_type.base_type() == BaseType::Void
        && args.len() == 2
        && is_plain_index_type(&args[0].type_code)
        && (!args_share_type(args) || names::is_set_number_of(&function.name))
    {
        return true;
    }
    if function.return_type.base_type() != BaseType::Void
        && args.len() == 1
        && is_plain_index_type(&args[0].type_code)
    {
        return true;
    }
    false
}

/// Translates one `Function` into a `MethodAttributes`, or rejects it.
/// See the five-pattern dispatch in the synthesis design notes.
#[must_use]
pub fn extract(function: &Function, config: &SynthesisConfig) -> Option<MethodAttributes> {
    if function.name.is_empty() || function.array_failure || function.is_operator {
        return None;
    }

    let indexed = is_indexed(function);
    let name = function.name.as_str();

    // Pattern 1: getter-returns-value.
    if function.return_type.base_type() != BaseType::Void
        && (function.args.is_empty() || (indexed && function.args.len() == 1))
    {
        let count = if function.has_hint { function.hint_size } else { 0 };
        return Some(MethodAttributes::new(
            function,
            function.return_type.clone(),
            count,
            indexed,
        ));
    }

    // Pattern 2: void return, one value argument (or index + value).
    if function.return_type.base_type() == BaseType::Void {
        let value_arg = if indexed && function.args.len() == 2 {
            Some(&function.args[1])
        } else if !indexed && function.args.len() == 1 {
            Some(&function.args[0])
        } else {
            None
        };
        if let Some(arg) = value_arg {
            if names::is_set(name) {
                return Some(MethodAttributes::new(function, arg.type_code.clone(), 0, indexed));
            }
            if names::is_get(name)
                && arg.type_code.is_indirect()
                && !arg.type_code.is_const()
                && arg.element_count > 0
            {
                return Some(MethodAttributes::new(
                    function,
                    arg.type_code.clone(),
                    arg.element_count,
                    indexed,
                ));
            }
            if (names::is_add(name) || names::is_remove(name))
                && arg.type_code.base_type() == BaseType::Object
                && arg.type_code.indirection() == Indirection::Pointer
            {
                return Some(MethodAttributes::new(function, arg.type_code.clone(), 0, indexed));
            }
        }
    }

    // Pattern 3: multi-value, same-typed arguments.
    if !indexed && function.args.len() >= 2 && args_share_type(&function.args) {
        let shared = &function.args[0].type_code;
        let count = function.args.len() as u32;
        if names::is_set(name)
            && !shared.is_indirect()
            && function.return_type.base_type() == BaseType::Void
        {
            let mut attrs = MethodAttributes::new(function, shared.clone(), count, false);
            attrs.is_multi_value = true;
            return Some(attrs);
        }
        if names::is_get(name)
            && shared.indirection() == Indirection::Ref
            && !shared.is_const()
            && function.return_type.base_type() == BaseType::Void
        {
            let mut attrs = MethodAttributes::new(function, shared.clone(), count, false);
            attrs.is_multi_value = true;
            return Some(attrs);
        }
        if names::is_add(name)
            && !shared.is_indirect()
            && matches!(
                function.return_type.base_type(),
                BaseType::Void | BaseType::Int | BaseType::IdType
            )
        {
            let mut attrs = MethodAttributes::new(function, shared.clone(), count, false);
            attrs.is_multi_value = true;
            return Some(attrs);
        }
    }

    // Pattern 4: void return, no arguments.
    if function.return_type.base_type() == BaseType::Void && function.args.is_empty() {
        if names::is_boolean(name, config) {
            let mut attrs =
                MethodAttributes::new(function, TypeCode::new(BaseType::Int, Indirection::None), 0, false);
            attrs.is_boolean = true;
            return Some(attrs);
        }
        if names::is_enumerated(name, config) {
            let mut attrs =
                MethodAttributes::new(function, TypeCode::new(BaseType::Int, Indirection::None), 0, false);
            attrs.is_enumerated = true;
            return Some(attrs);
        }
        if names::is_remove_all(name) {
            let attrs = MethodAttributes::new(function, TypeCode::new(BaseType::Void, Indirection::None), 0, false);
            return Some(attrs);
        }
    }

    None
}

//! Pure string predicates over method names.
//!
//! Every predicate here is intentionally naive ASCII pattern matching —
//! the upstream C++ naming convention this crate infers properties from
//! predates any attempt at case-folding or Unicode awareness, and two of
//! these predicates (`is_boolean`, `is_enumerated`) are *documented* to
//! be looser than their names suggest. See [`crate::config::ScanMode`].

use crate::config::{ScanMode, SynthesisConfig};

fn is_upper_or_digit(c: char) -> bool {
    c.is_ascii_uppercase() || c.is_ascii_digit()
}

fn has_prefix_then_upper(name: &str, prefix: &str) -> bool {
    name.strip_prefix(prefix)
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_uppercase())
}

pub fn is_set(name: &str) -> bool {
    has_prefix_then_upper(name, "Set")
}

pub fn is_set_nth(name: &str) -> bool {
    has_prefix_then_upper(name, "SetNth")
}

pub fn is_set_number_of(name: &str) -> bool {
    has_prefix_then_upper(name, "SetNumberOf") && name.ends_with('s')
}

pub fn is_get(name: &str) -> bool {
    has_prefix_then_upper(name, "Get")
}

pub fn is_get_nth(name: &str) -> bool {
    has_prefix_then_upper(name, "GetNth")
}

pub fn is_get_number_of(name: &str) -> bool {
    has_prefix_then_upper(name, "GetNumberOf") && name.ends_with('s')
}

pub fn is_add(name: &str) -> bool {
    has_prefix_then_upper(name, "Add")
}

pub fn is_remove(name: &str) -> bool {
    has_prefix_then_upper(name, "Remove")
}

pub fn is_remove_all(name: &str) -> bool {
    is_remove(name)
        && name
            .get(6..)
            .is_some_and(|rest| has_prefix_then_upper(rest, "All"))
        && name.ends_with('s')
}

/// True when `name` ends in `On`/`Off`. In [`ScanMode::Faithful`] (the
/// default) the character before the suffix is not checked, so `Button`
/// registers as a boolean toggle — a known quirk of the upstream parser,
/// preserved intentionally. [`ScanMode::Strict`] requires that character
/// to be upper-case or the start of the name.
pub fn is_boolean(name: &str, config: &SynthesisConfig) -> bool {
    if let Some(head) = name.strip_suffix("On") {
        return suffix_boundary_ok(head, config);
    }
    if let Some(head) = name.strip_suffix("Off") {
        return suffix_boundary_ok(head, config);
    }
    false
}

fn suffix_boundary_ok(head: &str, config: &SynthesisConfig) -> bool {
    if head.is_empty() {
        return false;
    }
    match config.scan_mode {
        ScanMode::Faithful => true,
        ScanMode::Strict => head.chars().next_back().is_some_and(|c| c.is_ascii_uppercase()),
    }
}

/// True when `name` is a setter whose tail contains the infix `To`
/// immediately followed by an upper-case letter or digit, searched from
/// byte offset 3 onward (i.e. allowed to appear anywhere after the
/// leading `Set`). In [`ScanMode::Faithful`] mode this is an unanchored
/// scan, so e.g. `SetStoreMode` can register as enumerated; see the
/// Open Questions in the design notes. [`ScanMode::Strict`] additionally
/// requires the character before `To` to be upper-case.
pub fn is_enumerated(name: &str, config: &SynthesisConfig) -> bool {
    if !is_set(name) {
        return false;
    }
    let bytes = name.as_bytes();
    if bytes.len() < 3 {
        return false;
    }
    let mut i = 3;
    while i + 1 < bytes.len() {
        if &bytes[i..i + 2] == b"To" {
            let next = name[i + 2..].chars().next();
            let boundary_ok = match config.scan_mode {
                ScanMode::Faithful => true,
                ScanMode::Strict => i == 0 || name.as_bytes()[i - 1].is_ascii_uppercase(),
            };
            if boundary_ok && next.is_some_and(is_upper_or_digit) {
                return true;
            }
        }
        i += 1;
    }
    false
}

pub fn is_as_string(name: &str) -> bool {
    is_get(name) && name.len() > 11 && name.ends_with("AsString")
}

pub fn is_get_min_value(name: &str) -> bool {
    is_get(name) && name.len() > 11 && name.ends_with("MinValue")
}

pub fn is_get_max_value(name: &str) -> bool {
    is_get(name) && name.len() > 11 && name.ends_with("MaxValue")
}

/// Returns the slice of `name` past its recognized Set/Get/Add/Remove
/// prefix, or `name` unchanged if none applies. The candidate property
/// name is this slice, possibly with a further suffix stripped by the
/// caller once a concrete role is known.
pub fn strip_prefix(name: &str) -> &str {
    if is_remove_all(name) {
        return &name[9..];
    }
    if is_set_nth(name) || is_get_nth(name) {
        return &name[6..];
    }
    if is_remove(name) {
        return &name[6..];
    }
    if is_set(name) || is_get(name) || is_add(name) {
        return &name[3..];
    }
    name
}

/// Validates a trailing fragment left over after stripping a candidate
/// property name out of a method name.
pub fn is_valid_suffix(method_name: &str, property_name: &str, suffix: &str) -> bool {
    if suffix.is_empty() {
        return true;
    }
    if suffix == "On" || suffix == "Off" {
        return true;
    }
    if let Some(rest) = suffix.strip_prefix("To") {
        return is_set(method_name) && rest.chars().next().is_some_and(is_upper_or_digit);
    }
    if let Some(rest) = suffix.strip_prefix("As") {
        return is_get(method_name) && rest.chars().next().is_some_and(is_upper_or_digit);
    }
    if suffix == "MinValue" || suffix == "MaxValue" {
        return is_get(method_name);
    }
    if suffix == "s" {
        if is_remove_all(method_name) {
            return true;
        }
        if is_get_number_of(method_name) || is_set_number_of(method_name) {
            return !property_name.starts_with("NumberOf")
                || !property_name[8..]
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_uppercase());
        }
        return false;
    }
    false
}

use crate::attributes::MethodAttributes;
use crate::types::{BaseType, TypeTraits};

enum Dominance {
    First,
    Second,
}

fn structural_twin(a: &MethodAttributes, b: &MethodAttributes) -> bool {
    a.name == b.name
        && a.is_public == b.is_public
        && a.is_protected == b.is_protected
        && a.is_hinted == b.is_hinted
        && a.is_multi_value == b.is_multi_value
        && a.is_indexed == b.is_indexed
        && a.is_enumerated == b.is_enumerated
        && a.is_boolean == b.is_boolean
        && a.type_code.indirection() == b.type_code.indirection()
}

/// Applies the float/double, count, legacy preference rules in order.
/// `None` means no rule distinguishes the pair; neither is marked.
fn dominance(a: &MethodAttributes, b: &MethodAttributes) -> Option<Dominance> {
    match (a.type_code.base_type(), b.type_code.base_type()) {
        (BaseType::Double, BaseType::Float) => return Some(Dominance::First),
        (BaseType::Float, BaseType::Double) => return Some(Dominance::Second),
        (x, y) if x == y && a.count != b.count => {
            return Some(if a.count > b.count {
                Dominance::First
            } else {
                Dominance::Second
            });
        }
        _ => {}
    }
    if a.is_legacy != b.is_legacy {
        return Some(if a.is_legacy { Dominance::Second } else { Dominance::First });
    }
    None
}

/// Marks `is_repeat` on the dominated half of every structural-twin pair
/// found in `attrs`, and returns, for each index, the list of other
/// indices it dominates (empty for repeats and for methods with no
/// twin). The synthesizer uses this adjacency to copy a seed's freshly
/// assigned role/property onto everything it dominates.
#[must_use]
pub fn mark_all(attrs: &[MethodAttributes]) -> Vec<Vec<usize>> {
    let n = attrs.len();
    let mut dominates = vec![Vec::new(); n];
    for j in 0..n {
        for i in 0..j {
            if !structural_twin(&attrs[i], &attrs[j]) {
                continue;
            }
            match dominance(&attrs[i], &attrs[j]) {
                Some(Dominance::First) => {
                    attrs[j].is_repeat.set(true);
                    dominates[i].push(j);
                }
                Some(Dominance::Second) => {
                    attrs[i].is_repeat.set(true);
                    dominates[j].push(i);
                }
                None => {}
            }
            break;
        }
    }
    dominates
}

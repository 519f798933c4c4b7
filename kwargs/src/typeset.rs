//! Type-identity set predicates.
//!
//! The compile-time half of duplicate detection falls out of trait
//! selection in the dispatch engine; these predicates cover what stable
//! Rust cannot express in types: a duplicated slot no user option happens
//! to target, and duplicated call-site tuples.

use std::any::TypeId;

/// Number of entries in `list` equal to `ty`.
pub fn count_occurrences(ty: TypeId, list: &[TypeId]) -> usize {
    list.iter().filter(|entry| **entry == ty).count()
}

/// True iff every element of `list` occurs exactly once.
pub fn is_duplicate_free(list: &[TypeId]) -> bool {
    list.iter()
        .all(|entry| count_occurrences(*entry, list) == 1)
}

/// First name whose type identity occurs more than once, in list order.
pub(crate) fn first_duplicate(entries: &[(TypeId, &'static str)]) -> Option<&'static str> {
    let ids: Vec<TypeId> = entries.iter().map(|(ty, _)| *ty).collect();
    if is_duplicate_free(&ids) {
        return None;
    }
    entries
        .iter()
        .find_map(|(ty, name)| (count_occurrences(*ty, &ids) > 1).then_some(*name))
}

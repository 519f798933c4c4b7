use std::fmt;

/// A single entry in a declared option list.
///
/// `Value` names the underlying option type: the slot itself for a plain
/// option, the wrapped type for `Option<A>`, and whatever the target names
/// for a `&mut` binding. Leaf impls come from the named wrappers and from
/// `#[derive(Slot)]`.
pub trait Slot {
    type Value: 'static;
}

impl<A> Slot for Option<A>
where
    A: Slot<Value = A> + 'static,
{
    type Value = A;
}

impl<'a, S: Slot> Slot for &'a mut S {
    type Value = S::Value;
}

/// Per-slot rendering: a present value followed by a single space, nothing
/// at all for an absent optional.
pub trait DisplaySlot {
    fn fmt_slot(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl<A: DisplaySlot> DisplaySlot for Option<A> {
    fn fmt_slot(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Some(value) => value.fmt_slot(f),
            None => Ok(()),
        }
    }
}

impl<'a, S: DisplaySlot> DisplaySlot for &'a mut S {
    fn fmt_slot(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        (**self).fmt_slot(f)
    }
}

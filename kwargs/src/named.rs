use std::any::type_name;
use std::fmt;
use std::marker::PhantomData;

use crate::error::Error;
use crate::slot::{DisplaySlot, Slot};

/// A value made type-distinct by an uninhabited tag.
///
/// Two options may store the same scalar type; their tags keep them apart
/// for dispatch. The tag has no runtime representation.
pub struct Named<Tag, V> {
    value: V,
    tag: PhantomData<fn() -> Tag>,
}

impl<Tag, V> Named<Tag, V> {
    pub fn new(value: V) -> Self {
        Self {
            value,
            tag: PhantomData,
        }
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }

    pub fn set(&mut self, value: V) {
        self.value = value;
    }
}

impl<Tag, V> From<V> for Named<Tag, V> {
    fn from(value: V) -> Self {
        Self::new(value)
    }
}

impl<Tag, V: Clone> Clone for Named<Tag, V> {
    fn clone(&self) -> Self {
        Self::new(self.value.clone())
    }
}

impl<Tag, V: Copy> Copy for Named<Tag, V> {}

impl<Tag, V: Default> Default for Named<Tag, V> {
    fn default() -> Self {
        Self::new(V::default())
    }
}

impl<Tag, V: PartialEq> PartialEq for Named<Tag, V> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Tag, V: fmt::Debug> fmt::Debug for Named<Tag, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Named").field(&self.value).finish()
    }
}

impl<Tag: 'static, V: 'static> Slot for Named<Tag, V> {
    type Value = Self;
}

impl<Tag, V: fmt::Display> DisplaySlot for Named<Tag, V> {
    fn fmt_slot(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.value)
    }
}

/// Acceptance predicate attached to a [`Checked`] option.
///
/// `Err` carries the reason the value was turned away.
pub trait Check<V> {
    fn check(value: &V) -> Result<(), String>;
}

/// A named value that enforces a predicate on every construction and
/// assignment. A rejected value never produces a `Checked` at all.
pub struct Checked<Tag, V, C> {
    value: V,
    marker: PhantomData<fn() -> (Tag, C)>,
}

impl<Tag: 'static, V, C: Check<V>> Checked<Tag, V, C> {
    pub fn new(value: V) -> Result<Self, Error> {
        C::check(&value).map_err(|reason| Error::Rejected {
            option: type_name::<Tag>(),
            reason,
        })?;
        Ok(Self {
            value,
            marker: PhantomData,
        })
    }

    /// Replaces the value, re-running the predicate; on rejection the old
    /// value stays in place.
    pub fn set(&mut self, value: V) -> Result<(), Error> {
        *self = Self::new(value)?;
        Ok(())
    }

    pub fn value(&self) -> &V {
        &self.value
    }

    pub fn into_value(self) -> V {
        self.value
    }
}

impl<Tag, V: Clone, C> Clone for Checked<Tag, V, C> {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            marker: PhantomData,
        }
    }
}

impl<Tag, V: PartialEq, C> PartialEq for Checked<Tag, V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<Tag, V: fmt::Debug, C> fmt::Debug for Checked<Tag, V, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Checked").field(&self.value).finish()
    }
}

impl<Tag: 'static, V: 'static, C: 'static> Slot for Checked<Tag, V, C> {
    type Value = Self;
}

impl<Tag, V: fmt::Display, C> DisplaySlot for Checked<Tag, V, C> {
    fn fmt_slot(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ", self.value)
    }
}

/// A named callable; default-constructed it is unset.
///
/// Accepts plain functions, closures, and capturing closures uniformly.
/// Multi-argument callables take their arguments as a tuple.
pub struct Callback<Tag, A, R> {
    func: Option<Box<dyn Fn(A) -> R>>,
    tag: PhantomData<fn() -> Tag>,
}

impl<Tag: 'static, A, R> Callback<Tag, A, R> {
    pub fn new(func: impl Fn(A) -> R + 'static) -> Self {
        Self {
            func: Some(Box::new(func)),
            tag: PhantomData,
        }
    }

    /// Distinguishes the default-constructed empty callable from an
    /// assigned one.
    pub fn is_unset(&self) -> bool {
        self.func.is_none()
    }

    /// Forwards `args` to the wrapped callable.
    ///
    /// # Panics
    ///
    /// If the callback is unset; guard with [`Self::is_unset`].
    pub fn call(&self, args: A) -> R {
        match &self.func {
            Some(func) => func(args),
            None => panic!("unset callback `{}` invoked", type_name::<Tag>()),
        }
    }
}

impl<Tag: 'static, A, R> Default for Callback<Tag, A, R> {
    fn default() -> Self {
        Self {
            func: None,
            tag: PhantomData,
        }
    }
}

impl<Tag, A, R> fmt::Debug for Callback<Tag, A, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.func.is_some() {
            "Callback(set)"
        } else {
            "Callback(unset)"
        })
    }
}

impl<Tag: 'static, A: 'static, R: 'static> Slot for Callback<Tag, A, R> {
    type Value = Self;
}

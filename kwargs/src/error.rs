use thiserror::Error;

/// Failures surfaced by option-set construction, dispatch, and checked
/// option values.
///
/// Unrecognized option types never reach runtime: with no dispatch impl to
/// select, the call site fails to compile instead.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    /// Two declared slots share one underlying option type.
    #[error("duplicate option type `{type_name}` in declared options")]
    DuplicateSlot { type_name: &'static str },

    /// One call supplied the same option type twice.
    #[error("option type `{type_name}` supplied more than once")]
    DuplicateArgument { type_name: &'static str },

    /// A value failed an option's acceptance predicate.
    #[error("value rejected for `{option}`: {reason}")]
    Rejected {
        option: &'static str,
        reason: String,
    },
}

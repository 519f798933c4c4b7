//! # Overview
//!
//! This crate simulates named and optional function arguments in Rust. An
//! argument is identified by its *type* rather than by its position: a
//! function declares a set of option slots, each seeded with a default, and
//! a caller supplies any subset of them, in any order. Dispatch places each
//! supplied value into the one slot of matching type, moving it exactly as
//! the caller's expression implies.
//!
//! ## Usage of this crate
//!
//! Add the following in your Cargo.toml file:
//!
//! ```toml
//! [dependencies]
//! kwargs = "0.1"
//! ```
//!
//! # Declaring options
//!
//! `options!{}` declares one named option per line: an uninhabited tag type,
//! a type alias, and a constructor function. Two options may share an
//! underlying value type; their tags keep them distinct.
//!
//! ```rust
//! use kwargs::options;
//!
//! options! {
//!     /// Hard cap on iterations.
//!     pub max_iterations: MaxIterations = usize;
//!     /// Convergence threshold.
//!     pub precision: Precision = f64;
//! }
//!
//! let capped = max_iterations(50);
//! assert_eq!(*capped.value(), 50);
//! ```
//!
//! # Dispatching options
//!
//! A function builds an [`OptionSet`] over its slots with `slots![]`, then
//! applies the caller's tuple of options. Slots not named by the caller keep
//! their defaults; `Option`-typed slots stay absent.
//!
//! ```rust
//! use kwargs::{options, slots, Arguments, Cons, Nil};
//!
//! options! {
//!     pub max_iterations: MaxIterations = usize;
//!     pub precision: Precision = f64;
//! }
//!
//! type SolverOptions = Cons<MaxIterations, Cons<Precision, Nil>>;
//!
//! fn solver<A, Is>(args: A) -> Result<(usize, f64), kwargs::Error>
//! where
//!     A: Arguments<SolverOptions, Is>,
//! {
//!     let mut options = slots![max_iterations(100), precision(1e-10)]?;
//!     options.apply(args)?;
//!     Ok((
//!         *options.get::<MaxIterations, _>().value(),
//!         *options.get::<Precision, _>().value(),
//!     ))
//! }
//!
//! fn main() -> Result<(), kwargs::Error> {
//!     assert_eq!(solver(())?, (100, 1e-10));
//!     assert_eq!(solver((max_iterations(50),))?, (50, 1e-10));
//!     assert_eq!(solver((precision(1e-6), max_iterations(10)))?, (10, 1e-6));
//!     Ok(())
//! }
//! ```
//!
//! # By-reference slots
//!
//! Writing `&mut local` in `slots![]` makes the container alias the local;
//! dispatch then updates the caller's own variables. `Option`-typed locals
//! make an option omittable, with `None` standing for "not supplied".
//!
//! ```rust
//! use kwargs::{options, slots};
//!
//! options! {
//!     pub max_iterations: MaxIterations = usize;
//!     pub lower_bound: LowerBound = f64;
//! }
//!
//! fn main() -> Result<(), kwargs::Error> {
//!     let mut iterations = max_iterations(100);
//!     let mut bound: Option<LowerBound> = None;
//!
//!     let mut options = slots![&mut iterations, &mut bound]?;
//!     options.apply((lower_bound(0.5), max_iterations(10)))?;
//!
//!     assert_eq!(*iterations.value(), 10);
//!     assert!(bound.is_some());
//!     Ok(())
//! }
//! ```
//!
//! # Checked and callable options
//!
//! A `where` clause attaches an acceptance predicate; the constructor then
//! returns `Result` and a rejected value never produces an option at all. A
//! `fn(..) -> _` right-hand side declares a callable option that accepts
//! plain functions, closures, and capturing closures alike.
//!
//! ```rust
//! use kwargs::options;
//!
//! options! {
//!     pub tolerance: Tolerance = f64 where |v| *v > 0.0;
//!     pub objective: Objective = fn(f64) -> f64;
//! }
//!
//! assert!(tolerance(-0.5).is_err());
//! assert!(tolerance(0.5).is_ok());
//!
//! let objective = objective(|x| x * x);
//! assert_eq!(objective.call(3.0), 9.0);
//! assert!(Objective::default().is_unset());
//! ```
//!
//! # Errors
//!
//! Unrecognized option types and most duplicate-type mistakes are rejected
//! during compilation (there is no `Dispatch` impl to select, or no unique
//! one). The remaining cases are rejected before any slot is written:
//! duplicated slot declarations at [`OptionSet::new`], duplicated call-site
//! tuples at [`OptionSet::apply`], both as [`Error`] values.
//!
//! # License
//!
//! Under Apache License 2.0 or MIT License, at your will.

mod dispatch;
mod error;
mod list;
mod named;
mod set;
mod slot;
mod typeset;

pub use dispatch::{Arguments, Dispatch, Here, RefHere, RefSomeHere, SomeHere, There};
pub use error::Error;
pub use list::{Cons, Nil, SlotList};
pub use named::{Callback, Check, Checked, Named};
pub use set::{DisplayList, OptionSet, Select};
pub use slot::{DisplaySlot, Slot};
pub use typeset::{count_occurrences, is_duplicate_free};

pub use kwargs_derive::{options, Slot};

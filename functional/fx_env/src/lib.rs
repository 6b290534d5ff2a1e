//! FX Env - Argument environments for lazy functional expressions.
//!
//! An environment is the positional view of the arguments passed to one
//! call of an actor. It exists for exactly one evaluation and is never
//! stored.
//!
//! # Shapes
//!
//! - Arity 0: the [`Null`] sentinel. Every zero-argument call binds the
//!   same type, so terminals that ignore their environment type-check
//!   uniformly at every arity.
//! - Arity k (1..=[`MAX_ARITY`]): the tuple `(&'a mut T0, ..., &'a mut Tk-1,)`.
//!   Position 0 is the first call argument.
//!
//! Arguments are bound by mutable reference, so an evaluation strategy can
//! write back through an environment position and the caller observes the
//! change after the call returns.
//!
//! # Positional access
//!
//! [`Get<N>`] is implemented for every in-range position of every tuple
//! arity. Asking for a position an environment does not have is a missing
//! impl, which surfaces as a compile error at the use site:
//!
//! ```compile_fail
//! use fx_env::at;
//!
//! let mut x = 1_i32;
//! let env = (&mut x,);
//! let _ = at::<1, _>(&env);
//! ```
//!
//! Nothing in this crate allocates; it builds without `std`.

#![cfg_attr(not(test), no_std)]

mod environment;
mod get;

pub use environment::{Environment, IntoEnvironment, Null, MAX_ARITY, NULL};
pub use get::{at, at_mut, Get};

//! FX Actor - Lazy functional expressions resolved at compile time.
//!
//! An expression is a value whose type encodes its evaluation rule. Calling
//! it binds the call's arguments into an environment and evaluates the rule
//! against that environment. There is no interpretation at run time: no
//! allocation, no dynamic dispatch, no run-time type checks. The same
//! expression is safe to copy onto every worker of a parallel loop and call
//! once per element.
//!
//! # Architecture
//!
//! - [`Eval`]: the capability an evaluation strategy provides, one impl per
//!   environment shape it accepts
//! - [`ApplyActor`]: the result type of a strategy under an environment
//! - [`Actor`]: the callable wrapper, `call0` through `call10` plus `call`
//! - [`Value`] / [`val`]: the constant terminal
//! - [`AsActor`]: lifts constants and passes actors through unchanged
//! - [`Argument`] / [`placeholders`]: terminals that read a call argument
//! - [`Place`]: write access to a call argument for composite strategies
//!
//! Environments come from `fx_env`.
//!
//! # Example
//!
//! ```
//! use fx_actor::{as_actor, placeholders::_2, val, Actor, Value};
//!
//! let five = val(5);
//! assert_eq!(five.call0(), 5);
//! assert_eq!(five.call2(&mut 10, &mut 20), 5);
//!
//! // Actors pass through conversion by reference.
//! let same: &Actor<Value<i32>> = as_actor(&five);
//! assert!(core::ptr::eq(same, &five));
//!
//! assert_eq!(_2.call3(&mut 'a', &mut 2.5, &mut "c"), 2.5);
//! ```
//!
//! # Static errors
//!
//! Calling with more arguments than any call method takes:
//!
//! ```compile_fail
//! let (mut a, mut b) = (1, 2);
//! fx_actor::val(0).call1(&mut a, &mut b);
//! ```
//!
//! Reading a placeholder past the call's arity:
//!
//! ```compile_fail
//! use fx_actor::placeholders::_3;
//! let _ = _3.call2(&mut 1, &mut 2);
//! ```
//!
//! A strategy with no result for the bound environment:
//!
//! ```compile_fail
//! use fx_actor::{Actor, Eval};
//!
//! struct OnlyUnary;
//! impl<'a> Eval<(&'a mut i32,)> for OnlyUnary {
//!     type Output = i32;
//!     fn eval(&self, env: &mut (&'a mut i32,)) -> i32 {
//!         *env.0
//!     }
//! }
//!
//! let _ = Actor::new(OnlyUnary).call0();
//! ```

#![cfg_attr(not(test), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

mod actor;
mod argument;
mod as_actor;
mod eval;
mod value;

pub use actor::Actor;
pub use argument::{placeholders, Argument, Place};
pub use as_actor::{as_actor, ActorOf, AsActor, Constant};
pub use eval::{ApplyActor, Eval};
pub use value::{val, Value};

pub use fx_env::{Environment, Get, IntoEnvironment, Null, MAX_ARITY, NULL};

use core::ops::Add;

use fx_env::NULL;
use pretty_assertions::assert_eq;

use super::*;
use crate::placeholders::{_1, _2};
use crate::Eval;

/// Sum of two operands, each evaluated under the same environment.
#[derive(Copy, Clone, Debug, PartialEq)]
struct Plus<L, R>(L, R);

impl<L, R, Env> Eval<Env> for Plus<L, R>
where
    L: Eval<Env>,
    R: Eval<Env>,
    L::Output: Add<R::Output>,
{
    type Output = <L::Output as Add<R::Output>>::Output;

    fn eval(&self, env: &mut Env) -> Self::Output {
        self.0.eval(env) + self.1.eval(env)
    }
}

/// Builds `lhs + rhs` from any mix of constants and actors.
fn plus<A, B>(lhs: &A, rhs: &B) -> Actor<Plus<ActorOf<A>, ActorOf<B>>>
where
    A: AsActor,
    B: AsActor,
    A::Eval: Clone,
    B::Eval: Clone,
{
    let l = Borrow::<ActorOf<A>>::borrow(&as_actor(lhs)).clone();
    let r = Borrow::<ActorOf<B>>::borrow(&as_actor(rhs)).clone();
    Actor::new(Plus(l, r))
}

#[derive(Clone, Debug, PartialEq)]
struct Meters(f64);

impl Constant for Meters {}

#[test]
fn test_actor_converts_to_itself() {
    let a = val(5_i32);
    let converted: &Actor<Value<i32>> = as_actor(&a);
    assert!(core::ptr::eq(converted, &a));
    assert_eq!(converted.call0(), 5);
}

#[test]
fn test_placeholder_converts_to_itself() {
    let p = _2;
    assert!(core::ptr::eq(p.convert(), &p));
}

#[test]
fn test_constant_lifts_into_value_terminal() {
    let lifted: Actor<Value<i32>> = as_actor(&5_i32);
    assert_eq!(lifted.call0(), 5);
    assert_eq!(lifted.call2(&mut 10_i32, &mut 20_i32), 5);
    assert_eq!(lifted.into_inner(), Value::new(5));
}

#[test]
fn test_lifting_copies_operand() {
    let text = String::from("source");
    let lifted = as_actor(&text);
    drop(text);
    assert_eq!(lifted.call1(&mut 0_u8), "source");
}

#[test]
fn test_user_constant_lifts() {
    let lifted = as_actor(&Meters(1.5));
    assert_eq!(lifted.call0(), Meters(1.5));
    assert_eq!(lifted.eval(&mut NULL), Meters(1.5));
}

#[test]
fn test_composition_mixes_constants_and_actors() {
    let expr = plus(&_1, &10_i32);
    assert_eq!(expr.call1(&mut 5_i32), 15);

    let both = plus(&_1, &_2);
    assert_eq!(both.call2(&mut 2.0_f64, &mut 0.5_f64), 2.5);

    let constants = plus(&3_u8, &4_u8);
    assert_eq!(constants.call0(), 7);
    assert_eq!(constants.call3(&mut 'a', &mut 'b', &mut 'c'), 7);
}

#[test]
fn test_composition_nests_built_expressions() {
    let inner = plus(&_1, &1_i32);
    let outer = plus(&inner, &_2);
    assert_eq!(outer.call2(&mut 10_i32, &mut 100_i32), 111);

    // The inner expression is still usable on its own.
    assert_eq!(inner.call1(&mut 41_i32), 42);
}

#[test]
fn test_converted_type_is_named_by_alias() {
    let from_constant: ActorOf<u16> = as_actor(&9_u16);
    let from_actor: &ActorOf<Actor<Value<u16>>> = as_actor(&from_constant);
    assert_eq!(from_actor.call0(), 9);
}

#[test]
fn test_std_values_lift_structurally() {
    use core::cmp::Ordering;
    use core::time::Duration;

    assert_eq!(as_actor(&Some(3_i32)).call0(), Some(3));
    assert_eq!(as_actor(&None::<u8>).call1(&mut 'x'), None);
    assert_eq!(as_actor(&[1_u8, 2, 3]).call0(), [1, 2, 3]);
    assert_eq!(as_actor(&(1_i32, "two", 3.0_f64)).call0(), (1, "two", 3.0));
    assert_eq!(as_actor(&Duration::from_millis(5)).call0(), Duration::from_millis(5));
    assert_eq!(as_actor(&Ordering::Less).call0(), Ordering::Less);
}

#[test]
fn test_nested_std_values_lift() {
    let nested = (Some([1_i64, 2]), vec![String::from("a")]);
    let lifted = as_actor(&nested);
    assert_eq!(lifted.call2(&mut 0_u8, &mut 0_u8), nested);
}

#[test]
fn test_widest_tuple_lifts() {
    let wide = (0_u8, 1_u8, 2_u8, 3_u8, 4_u8, 5_u8, 6_u8, 7_u8, 8_u8, 9_u8);
    assert_eq!(as_actor(&wide).call0(), wide);
}


use maybe::{plain_value, Fallback, Maybe, PartiallyApplied, PointerLike, RawPointer, Shape};
use proptest::prelude::*;
use serde::Serialize;
use std::rc::Rc;
use std::sync::Arc;

/// Struct-like pointee, for member access.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

plain_value!(Point);

/// Stand-in for a third-party optional, to show fallback containers are interchangeable.
#[derive(Debug, Clone, PartialEq)]
pub enum Opt<A> {
    Has(A),
    Nothing,
}

impl<A> PointerLike for Opt<A> {
    type Pointee = A;
    const SHAPE: Shape = Shape::Optional;

    fn pointee(&self) -> Option<&A> {
        match self {
            Opt::Has(a) => Some(a),
            Opt::Nothing => None,
        }
    }

    fn pointee_mut(&mut self) -> Option<&mut A> {
        match self {
            Opt::Has(a) => Some(a),
            Opt::Nothing => None,
        }
    }
}

impl Fallback for Opt<PartiallyApplied> {
    type Optional<X> = Opt<X>;

    fn some<X>(value: X) -> Opt<X> {
        Opt::Has(value)
    }

    fn none<X>() -> Opt<X> {
        Opt::Nothing
    }
}

/// Every pointer-like shape a `Maybe<i64>` can be built from.
#[derive(Debug, Clone)]
pub enum Source {
    Boxed(i64),
    Shared(i64),
    Atomic(i64),
    Borrowed(i64),
    Optional(Option<i64>),
    Raw(Option<i64>),
}

impl Source {
    /// the value the source would dereference to
    pub fn expected(&self) -> Option<i64> {
        match self {
            Source::Boxed(x) | Source::Shared(x) | Source::Atomic(x) | Source::Borrowed(x) => {
                Some(*x)
            }
            Source::Optional(x) | Source::Raw(x) => *x,
        }
    }

    pub fn shape(&self) -> Shape {
        match self {
            Source::Boxed(_) | Source::Shared(_) | Source::Atomic(_) | Source::Borrowed(_) => {
                Shape::Smart
            }
            Source::Optional(_) => Shape::Optional,
            Source::Raw(_) => Shape::Raw,
        }
    }

    /// Build a `Maybe` over this source and hand it to `f`.
    ///
    /// Raw sources point into a local slot that outlives `f`.
    pub fn with_maybe<R>(&self, f: impl FnOnce(Maybe<'_, i64>) -> R) -> R {
        match self {
            Source::Boxed(x) => f(Maybe::new(Box::new(*x))),
            Source::Shared(x) => f(Maybe::new(Rc::new(*x))),
            Source::Atomic(x) => f(Maybe::new(Arc::new(*x))),
            Source::Borrowed(x) => f(Maybe::new(x)),
            Source::Optional(x) => f(Maybe::new(*x)),
            Source::Raw(Some(x)) => {
                let mut slot = *x;
                // SAFETY: `slot` outlives the `Maybe`, nothing else touches it meanwhile
                f(unsafe { Maybe::from_raw(&mut slot) })
            }
            Source::Raw(None) => f(Maybe::new(RawPointer::<i64>::null())),
        }
    }
}

pub fn arb_source() -> impl Strategy<Value = Source> {
    prop_oneof![
        any::<i64>().prop_map(Source::Boxed),
        any::<i64>().prop_map(Source::Shared),
        any::<i64>().prop_map(Source::Atomic),
        any::<i64>().prop_map(Source::Borrowed),
        any::<Option<i64>>().prop_map(Source::Optional),
        any::<Option<i64>>().prop_map(Source::Raw),
    ]
}

pub fn arb_point() -> impl Strategy<Value = Point> {
    (any::<i32>(), any::<i32>()).prop_map(|(x, y)| Point { x, y })
}

//! How a transformation's result is re-wrapped by [`crate::Maybe::and_then`].
//!
//! The strategy is picked from the result *type* alone, through [`IntoMaybe`]:
//!
//! - pointer-like results with a native null ([`RawPointer`], [`Nullable`], and smart pointers,
//!   which are lifted into [`Nullable`]) use that null when absent;
//! - optional results (`Option<X>`) use their own "no value";
//! - plain values are lifted into the [`Fallback`] optional container.
//!
//! Rust has no specialization, so plain values form an explicit registry: primitives and common
//! std types are registered here, and other types opt in with [`crate::plain_value!`].
use std::rc::Rc;
use std::sync::Arc;

use crate::fallback::Fallback;
use crate::nullable::Nullable;
use crate::pointer::PointerLike;
use crate::raw::RawPointer;

/// Which absence representation a chained result uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Absence {
    /// the result type's own null pointer
    NativeNull,
    /// the result type's own "no value" state
    NoValue,
    /// "no value" of the fallback optional, the result itself is wrapped when present
    Lifted,
}

/// A type that can be the result of a chained transformation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be the result of a chained transformation",
    label = "not pointer-like, optional, or a registered plain value",
    note = "register plain value types with `maybe::plain_value!`"
)]
pub trait IntoMaybe: Sized {
    /// pointee type of the re-wrapped result
    type Pointee: ?Sized;

    /// the pointer-like value a result is stored as, given fallback container `O`
    type Repr<O: Fallback>: PointerLike<Pointee = Self::Pointee>;

    /// absence strategy, fixed per type
    const ABSENCE: Absence;

    /// Wrap a computed result.
    fn present<O: Fallback>(self) -> Self::Repr<O>;

    /// The representation used when the transformation was skipped.
    fn absent<O: Fallback>() -> Self::Repr<O>;
}

impl<T> IntoMaybe for RawPointer<T> {
    type Pointee = T;
    type Repr<O: Fallback> = RawPointer<T>;
    const ABSENCE: Absence = Absence::NativeNull;

    #[inline(always)]
    fn present<O: Fallback>(self) -> RawPointer<T> {
        self
    }

    #[inline(always)]
    fn absent<O: Fallback>() -> RawPointer<T> {
        RawPointer::null()
    }
}

impl<P: PointerLike> IntoMaybe for Nullable<P> {
    type Pointee = P::Pointee;
    type Repr<O: Fallback> = Nullable<P>;
    const ABSENCE: Absence = Absence::NativeNull;

    #[inline(always)]
    fn present<O: Fallback>(self) -> Nullable<P> {
        self
    }

    #[inline(always)]
    fn absent<O: Fallback>() -> Nullable<P> {
        Nullable::null()
    }
}

// smart pointers are never null: they borrow the null of `Nullable`
macro_rules! smart_pointer_result {
    ($(impl<$($lt:lifetime,)? $t:ident> for $ty:ty;)+) => {
        $(
            impl<$($lt,)? $t: ?Sized> IntoMaybe for $ty {
                type Pointee = $t;
                type Repr<O: Fallback> = Nullable<$ty>;
                const ABSENCE: Absence = Absence::NativeNull;

                #[inline(always)]
                fn present<O: Fallback>(self) -> Nullable<$ty> {
                    Nullable::new(self)
                }

                #[inline(always)]
                fn absent<O: Fallback>() -> Nullable<$ty> {
                    Nullable::null()
                }
            }
        )+
    };
}

smart_pointer_result! {
    impl<T> for Box<T>;
    impl<T> for Rc<T>;
    impl<T> for Arc<T>;
    impl<'a, T> for &'a T;
    impl<'a, T> for &'a mut T;
}

impl<X> IntoMaybe for Option<X> {
    type Pointee = X;
    type Repr<O: Fallback> = Option<X>;
    const ABSENCE: Absence = Absence::NoValue;

    #[inline(always)]
    fn present<O: Fallback>(self) -> Option<X> {
        self
    }

    #[inline(always)]
    fn absent<O: Fallback>() -> Option<X> {
        None
    }
}

/// Register types as plain values, lifted into the fallback optional when chained.
///
/// Concrete types are listed comma separated; generic types name their parameters in
/// brackets, separated by semicolons.
///
/// ```rust
/// use maybe::{plain_value, Absence, IntoMaybe, Maybe};
///
/// #[derive(Debug, PartialEq)]
/// struct Meters(f64);
/// struct Labelled<T>(&'static str, T);
///
/// plain_value!(Meters);
/// plain_value!([T] Labelled<T>);
///
/// assert_eq!(<Meters as IntoMaybe>::ABSENCE, Absence::Lifted);
///
/// let m = Maybe::new(Some(2.5f64));
/// assert_eq!(m.and_then(|x| Meters(*x)).unwrap(), &Meters(2.5));
/// assert_eq!(m.and_then(|x| Labelled("x", *x)).unwrap().0, "x");
/// ```
#[macro_export]
macro_rules! plain_value {
    ($([$($g:ident),*] $ty:ty);+ $(;)?) => {
        $(
            impl<$($g),*> $crate::IntoMaybe for $ty {
                type Pointee = Self;
                type Repr<O: $crate::Fallback> = <O as $crate::Fallback>::Optional<Self>;
                const ABSENCE: $crate::Absence = $crate::Absence::Lifted;

                #[inline(always)]
                fn present<O: $crate::Fallback>(self) -> Self::Repr<O> {
                    <O as $crate::Fallback>::some(self)
                }

                #[inline(always)]
                fn absent<O: $crate::Fallback>() -> Self::Repr<O> {
                    <O as $crate::Fallback>::none()
                }
            }
        )+
    };
    ($($ty:ty),+ $(,)?) => {
        $crate::plain_value!($([] $ty);+);
    };
}

plain_value!(
    (), bool, char, u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64,
    String,
);

plain_value! {
    [T] Vec<T>;
    [T, E] Result<T, E>;
    [A] (A,);
    [A, B] (A, B);
    [A, B, C] (A, B, C);
    [A, B, C, D] (A, B, C, D);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Shape, StdOption};

    #[test]
    fn numbers_are_lifted_not_nulled() {
        // zero-constructible is not null-constructible
        assert_eq!(<i32 as IntoMaybe>::ABSENCE, Absence::Lifted);
        assert_eq!(<usize as IntoMaybe>::ABSENCE, Absence::Lifted);
        assert_eq!(<f64 as IntoMaybe>::ABSENCE, Absence::Lifted);
        assert_eq!(<(u8, String) as IntoMaybe>::ABSENCE, Absence::Lifted);
    }

    #[test]
    fn pointer_results_use_native_null() {
        assert_eq!(<RawPointer<u8> as IntoMaybe>::ABSENCE, Absence::NativeNull);
        assert_eq!(<Box<u8> as IntoMaybe>::ABSENCE, Absence::NativeNull);
        assert_eq!(<&u8 as IntoMaybe>::ABSENCE, Absence::NativeNull);
        assert_eq!(<Option<u8> as IntoMaybe>::ABSENCE, Absence::NoValue);
    }

    #[test]
    fn unsized_smart_pointer_results() {
        assert_eq!(<Box<str> as IntoMaybe>::ABSENCE, Absence::NativeNull);
        assert_eq!(<&[u8] as IntoMaybe>::ABSENCE, Absence::NativeNull);

        let text: Nullable<Box<str>> = Box::<str>::from("ok").present::<StdOption>();
        assert_eq!(text.pointee(), Some("ok"));
        assert!(<Rc<dyn Fn()> as IntoMaybe>::absent::<StdOption>().is_null());
    }

    #[test]
    fn absent_representations() {
        let raw = <RawPointer<u8> as IntoMaybe>::absent::<StdOption>();
        assert!(raw.is_null());

        let boxed = <Box<u8> as IntoMaybe>::absent::<StdOption>();
        assert!(boxed.is_null());
        assert_eq!(
            <<Box<u8> as IntoMaybe>::Repr<StdOption> as PointerLike>::SHAPE,
            Shape::Smart
        );

        let plain: Option<i32> = <i32 as IntoMaybe>::absent::<StdOption>();
        assert_eq!(plain, None);
    }

    #[test]
    fn present_plain_value_is_wrapped() {
        let wrapped: Option<String> = String::from("x").present::<StdOption>();
        assert_eq!(wrapped.as_deref(), Some("x"));
    }
}

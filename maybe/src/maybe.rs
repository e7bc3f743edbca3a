use std::fmt;
use std::ops::{Deref, DerefMut};
use std::ptr::NonNull;

use tracing::trace;

use crate::chain::IntoMaybe;
use crate::error::MaybeError;
use crate::fallback::{Fallback, StdOption};
use crate::pointer::{PointerLike, Shape};
use crate::raw::RawPointer;
use crate::view::{PointerView, View};

/// An optional `T`, backed by any pointer-like value whose pointee is `T`.
///
/// A `Maybe` always owns exactly one [`View`]; whether it is present is a property of the
/// wrapped value (a null [`RawPointer`], a `None`), never of a separate flag.
///
/// Field and method access goes through [`Deref`], which, like [`Maybe::unwrap`], panics when
/// the value is absent. Test with [`Maybe::is_present`] or use [`Maybe::get`] first.
///
/// ```rust
/// use maybe::Maybe;
///
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let p = Maybe::new(Box::new(Point { x: 1, y: 2 }));
/// assert_eq!(p.x + p.y, 3);
///
/// let sum = p.and_then(|p| p.x + p.y).and_then(|s| s * 10);
/// assert_eq!(sum.unwrap(), &30);
/// ```
pub struct Maybe<'a, T: ?Sized> {
    view: Box<dyn View<T> + 'a>,
}

impl<'a, T: ?Sized> Maybe<'a, T> {
    /// Wrap a pointer-like value, taking `T` from its pointee type.
    pub fn new<P>(pointer: P) -> Self
    where
        P: PointerLike<Pointee = T> + 'a,
    {
        trace!(shape = ?P::SHAPE, present = pointer.is_present(), "wrapping pointer-like value");
        Self {
            view: Box::new(PointerView::new(pointer)),
        }
    }

    /// A present `Maybe` over the standard fallback optional.
    pub fn some(value: T) -> Self
    where
        T: Sized + 'a,
    {
        Self::new(Some(value))
    }

    /// An absent `Maybe` over the standard fallback optional.
    pub fn none() -> Self
    where
        T: Sized + 'a,
    {
        Self::new(None::<T>)
    }

    /// Wrap a raw address, absent when null.
    ///
    /// # Safety
    ///
    /// Same contract as [`RawPointer::new`].
    pub unsafe fn from_raw(ptr: *mut T) -> Self
    where
        T: Sized + 'a,
    {
        // SAFETY: forwarded to the caller
        Self::new(unsafe { RawPointer::new(ptr) })
    }

    pub fn is_present(&self) -> bool {
        self.view.is_present()
    }

    pub fn is_absent(&self) -> bool {
        !self.view.is_present()
    }

    /// Shape of the wrapped pointer-like value.
    pub fn shape(&self) -> Shape {
        self.view.shape()
    }

    pub fn get(&self) -> Option<&T> {
        self.view.get()
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.view.get_mut()
    }

    pub fn try_unwrap(&self) -> Result<&T, MaybeError> {
        self.view.get().ok_or(MaybeError::Absent)
    }

    pub fn try_unwrap_mut(&mut self) -> Result<&mut T, MaybeError> {
        if !self.view.is_present() {
            return Err(MaybeError::Absent);
        }
        self.view.get_mut().ok_or(MaybeError::Shared)
    }

    /// The held value.
    ///
    /// # Panics
    ///
    /// Panics with "unwrap on absent value" when absent.
    #[track_caller]
    pub fn unwrap(&self) -> &T {
        match self.try_unwrap() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// The held value, mutably.
    ///
    /// # Panics
    ///
    /// Panics when absent, or when the pointee is shared (an `Rc` with other owners, a shared
    /// reference).
    #[track_caller]
    pub fn unwrap_mut(&mut self) -> &mut T {
        match self.try_unwrap_mut() {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }

    /// Address of the held value, `None` when absent.
    ///
    /// For a raw pointer this is the wrapped address itself.
    pub fn as_ptr(&self) -> Option<NonNull<T>> {
        self.view.raw_pointer()
    }

    /// Apply `f` to the held value, if any, and wrap its result.
    ///
    /// When absent, `f` is not called. How the result represents absence depends only on the
    /// result type `R` (see [`IntoMaybe`]): pointer-like results use their native null,
    /// optionals their own `None`, and plain values are lifted into `Option`.
    ///
    /// The result borrows from `self` only when `R` does (a projected reference, say); owned
    /// results outlive the receiver, so chains can be written fluently.
    pub fn and_then<'s, 'r, F, R>(&'s self, f: F) -> Maybe<'r, R::Pointee>
    where
        F: FnOnce(&'s T) -> R,
        R: IntoMaybe,
        R::Repr<StdOption>: 'r,
    {
        self.and_then_in::<StdOption, F, R>(f)
    }

    /// [`Maybe::and_then`] with plain values lifted into the fallback container `O`.
    pub fn and_then_in<'s, 'r, O, F, R>(&'s self, f: F) -> Maybe<'r, R::Pointee>
    where
        O: Fallback,
        F: FnOnce(&'s T) -> R,
        R: IntoMaybe,
        R::Repr<O>: 'r,
    {
        let repr = match self.view.get() {
            Some(value) => R::present::<O>(f(value)),
            None => R::absent::<O>(),
        };
        trace!(absence = ?R::ABSENCE, present = repr.is_present(), "chained transformation");
        Maybe::new(repr)
    }
}

impl<T: ?Sized> Deref for Maybe<'_, T> {
    type Target = T;

    #[track_caller]
    fn deref(&self) -> &T {
        self.unwrap()
    }
}

impl<T: ?Sized> DerefMut for Maybe<'_, T> {
    #[track_caller]
    fn deref_mut(&mut self) -> &mut T {
        self.unwrap_mut()
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Maybe<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.get() {
            Some(value) => f.debug_tuple("Present").field(&value).finish(),
            None => f.write_str("Absent"),
        }
    }
}

impl<'a, 'b, T: PartialEq + ?Sized> PartialEq<Maybe<'b, T>> for Maybe<'a, T> {
    fn eq(&self, other: &Maybe<'b, T>) -> bool {
        self.get() == other.get()
    }
}

impl<'a, 'b, T: PartialEq + ?Sized> PartialEq<Option<&'b T>> for Maybe<'a, T> {
    fn eq(&self, other: &Option<&'b T>) -> bool {
        self.get() == *other
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize + ?Sized> serde::Serialize for Maybe<'_, T> {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.get() {
            Some(value) => serializer.serialize_some(value),
            None => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Absence, Nullable};
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn doubles_present_value() {
        let m = Maybe::new(Box::new(5i32));
        let doubled = m.and_then(|x| x * 2);
        assert!(doubled.is_present());
        assert_eq!(doubled.unwrap(), &10);
    }

    #[test]
    fn skips_transformation_when_absent() {
        let calls = Cell::new(0);
        let m: Maybe<i32> = Maybe::new(None::<i32>);
        let doubled = m.and_then(|x| {
            calls.set(calls.get() + 1);
            x * 2
        });
        assert!(doubled.is_absent());
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn absent_raw_pointer_result_is_native_null() {
        let mut target = 3u8;
        let addr: *mut u8 = &mut target;
        let m: Maybe<u8> = Maybe::none();

        let chained = m.and_then(|_| unsafe { RawPointer::new(addr) });
        assert_eq!(<RawPointer<u8> as IntoMaybe>::ABSENCE, Absence::NativeNull);
        assert_eq!(chained.shape(), Shape::Raw);
        assert!(chained.as_ptr().is_none());
    }

    #[test]
    fn absent_plain_result_is_lifted() {
        let m = Maybe::new(RawPointer::<u8>::null());
        let chained = m.and_then(|x| u32::from(*x));
        assert_eq!(chained.shape(), Shape::Optional);
        assert!(chained.is_absent());
    }

    #[test]
    fn member_access_matches_original_address() {
        struct Pair {
            left: u16,
            right: u16,
        }

        let boxed = Box::new(Pair { left: 1, right: 2 });
        let addr = NonNull::from(&*boxed);
        let m = Maybe::new(boxed);

        assert_eq!(m.as_ptr(), Some(addr));
        assert!(std::ptr::eq(&*m, addr.as_ptr()));
        assert_eq!(m.left + m.right, 3);
    }

    #[test]
    fn projects_borrowed_fields() {
        let m = Maybe::some((String::from("name"), 4usize));
        let name = m.and_then(|pair| &pair.0);
        assert_eq!(name.shape(), Shape::Smart);
        assert_eq!(name.unwrap(), "name");
    }

    #[test]
    fn chains_over_unsized_pointees() {
        let text: Maybe<str> = Maybe::new(Box::<str>::from("hello"));
        assert_eq!(text.len(), 5);
        assert_eq!(format!("{text:?}"), r#"Present("hello")"#);

        let head = text.and_then(|s| &s[..2]);
        assert_eq!(head.shape(), Shape::Smart);
        assert_eq!(head.unwrap(), "he");

        let inc: Rc<dyn Fn(i32) -> i32> = Rc::new(|x: i32| x + 1);
        let f: Maybe<dyn Fn(i32) -> i32> = Maybe::new(inc);
        assert_eq!(f.and_then(|f| f(41)).unwrap(), &42);

        let missing: Maybe<dyn Fn(i32) -> i32> =
            Maybe::new(Nullable::<Rc<dyn Fn(i32) -> i32>>::null());
        assert!(missing.and_then(|f| f(41)).is_absent());
        assert!(missing.as_ptr().is_none());
    }

    #[test]
    fn mutable_access_through_unique_pointers() {
        let mut m = Maybe::new(Box::new(vec![1, 2]));
        m.push(3);
        m.unwrap_mut().push(4);
        assert_eq!(m.get(), Some(&vec![1, 2, 3, 4]));
    }

    #[test]
    fn shared_pointee_cannot_be_borrowed_mutably() {
        let rc = Rc::new(1);
        let mut m = Maybe::new(Rc::clone(&rc));
        assert_eq!(m.try_unwrap_mut(), Err(MaybeError::Shared));

        let mut empty: Maybe<i32> = Maybe::none();
        assert_eq!(empty.try_unwrap_mut(), Err(MaybeError::Absent));
    }

    #[test]
    #[should_panic(expected = "unwrap on absent value")]
    fn unwrap_on_absent_panics() {
        let m: Maybe<i32> = Maybe::none();
        m.unwrap();
    }

    #[test]
    fn debug_output() {
        assert_eq!(format!("{:?}", Maybe::some(1)), "Present(1)");
        assert_eq!(format!("{:?}", Maybe::<i32>::none()), "Absent");
    }
}

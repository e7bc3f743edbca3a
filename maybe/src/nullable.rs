use std::ptr::NonNull;

use crate::pointer::{PointerLike, Shape};

/// A smart pointer that may also be null.
///
/// `Box`, `Rc`, `Arc` and references always point at something, so when a chained
/// transformation returns one of them the absent case needs a null of the same shape. This is
/// that null: it keeps the smart pointer's pointee type rather than nesting the pointer inside
/// an optional.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Nullable<P> {
    inner: Option<P>,
}

impl<P> Nullable<P> {
    pub const fn null() -> Self {
        Self { inner: None }
    }

    pub const fn new(pointer: P) -> Self {
        Self {
            inner: Some(pointer),
        }
    }

    pub fn is_null(&self) -> bool {
        self.inner.is_none()
    }
}

impl<P> Default for Nullable<P> {
    fn default() -> Self {
        Self::null()
    }
}

impl<P: PointerLike> PointerLike for Nullable<P> {
    type Pointee = P::Pointee;
    const SHAPE: Shape = P::SHAPE;

    fn pointee(&self) -> Option<&P::Pointee> {
        self.inner.as_ref().and_then(P::pointee)
    }

    fn pointee_mut(&mut self) -> Option<&mut P::Pointee> {
        self.inner.as_mut().and_then(P::pointee_mut)
    }

    fn is_present(&self) -> bool {
        self.inner.as_ref().is_some_and(P::is_present)
    }

    fn as_ptr(&self) -> Option<NonNull<P::Pointee>> {
        self.inner.as_ref().and_then(P::as_ptr)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::rc::Rc;

    #[test]
    fn keeps_the_smart_pointer_shape() {
        assert_eq!(<Nullable<Box<u8>> as PointerLike>::SHAPE, Shape::Smart);
        assert_eq!(<Nullable<Rc<u8>> as PointerLike>::SHAPE, Shape::Smart);
    }

    #[test]
    fn null_and_present() {
        let null = Nullable::<Box<u8>>::null();
        assert!(null.is_null());
        assert!(!null.is_present());
        assert!(null.as_ptr().is_none());

        let boxed = Box::new(9u8);
        let addr = NonNull::from(&*boxed);
        let present = Nullable::new(boxed);
        assert_eq!(present.pointee(), Some(&9));
        assert_eq!(present.as_ptr(), Some(addr));
    }
}

use std::fmt;
use std::ptr::{self, NonNull};

use crate::pointer::{PointerLike, Shape};

/// A nullable raw address, treated as pointer-like unconditionally.
///
/// Rust raw pointers carry no validity guarantee, so a `RawPointer` can only be built from a
/// non-null address through the `unsafe` constructor. Its address is returned directly by
/// [`PointerLike::as_ptr`], without going through the pointee.
pub struct RawPointer<T> {
    ptr: *mut T,
}

impl<T> RawPointer<T> {
    /// The native null of this shape.
    pub const fn null() -> Self {
        Self {
            ptr: ptr::null_mut(),
        }
    }

    /// Wrap an address.
    ///
    /// # Safety
    ///
    /// `ptr` must be null, or valid for reads and writes of `T` for as long as this value (or
    /// any copy of it, or any [`crate::Maybe`] built from it) is dereferenced. No other access
    /// to the pointee may overlap a mutable borrow handed out by
    /// [`PointerLike::pointee_mut`].
    pub const unsafe fn new(ptr: *mut T) -> Self {
        Self { ptr }
    }

    pub fn is_null(&self) -> bool {
        self.ptr.is_null()
    }
}

impl<T> PointerLike for RawPointer<T> {
    type Pointee = T;
    const SHAPE: Shape = Shape::Raw;

    fn pointee(&self) -> Option<&T> {
        // SAFETY: non-null addresses are valid per the contract of `RawPointer::new`
        unsafe { self.ptr.as_ref() }
    }

    fn pointee_mut(&mut self) -> Option<&mut T> {
        // SAFETY: see `pointee`
        unsafe { self.ptr.as_mut() }
    }

    fn is_present(&self) -> bool {
        !self.ptr.is_null()
    }

    fn as_ptr(&self) -> Option<NonNull<T>> {
        NonNull::new(self.ptr)
    }
}

impl<T> Clone for RawPointer<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for RawPointer<T> {}

impl<T> PartialEq for RawPointer<T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.ptr, other.ptr)
    }
}

impl<T> Eq for RawPointer<T> {}

impl<T> Default for RawPointer<T> {
    fn default() -> Self {
        Self::null()
    }
}

impl<T> fmt::Debug for RawPointer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RawPointer").field(&self.ptr).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_is_absent() {
        let p = RawPointer::<u32>::null();
        assert!(!p.is_present());
        assert!(p.pointee().is_none());
        assert!(p.as_ptr().is_none());
        assert_eq!(p, RawPointer::default());
    }

    #[test]
    fn address_is_returned_directly() {
        let mut x = 41u32;
        let addr: *mut u32 = &mut x;
        let mut p = unsafe { RawPointer::new(addr) };

        assert_eq!(p.as_ptr(), NonNull::new(addr));
        if let Some(v) = p.pointee_mut() {
            *v += 1;
        }
        assert_eq!(p.pointee(), Some(&42));
    }
}

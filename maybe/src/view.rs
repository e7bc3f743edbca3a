//! Type-erased access to a pointer-like value.
//!
//! [`View`] is the fixed interface a [`crate::Maybe`] talks to; [`PointerView`] is its one
//! implementation, instantiated once per wrapped pointer-like type.
use std::ptr::NonNull;

use crate::pointer::{PointerLike, Shape};

/// A fixed interface over some pointer-like value with pointee `T`.
///
/// Object safe, so a `Box<dyn View<T>>` can hold any shape of pointer to a `T`.
pub trait View<T: ?Sized> {
    /// true iff the wrapped value's emptiness test succeeds
    fn is_present(&self) -> bool;

    /// the pointee, or `None` when absent
    fn get(&self) -> Option<&T>;

    /// the pointee mutably, or `None` when absent or shared
    fn get_mut(&mut self) -> Option<&mut T>;

    /// Address of the pointee: the wrapped address for raw pointers, the member-access result
    /// otherwise. `None` when absent.
    fn raw_pointer(&self) -> Option<NonNull<T>>;

    /// shape of the wrapped value
    fn shape(&self) -> Shape;
}

/// Owns exactly one pointer-like value.
///
/// There is no default constructor: an absent view wraps an empty pointer-like value (a null
/// [`crate::RawPointer`], a `None`) rather than wrapping nothing.
#[derive(Debug)]
pub struct PointerView<P> {
    storage: P,
}

impl<P: PointerLike> PointerView<P> {
    pub fn new(storage: P) -> Self {
        Self { storage }
    }
}

impl<P: PointerLike> View<P::Pointee> for PointerView<P> {
    #[inline(always)]
    fn is_present(&self) -> bool {
        self.storage.is_present()
    }

    #[inline(always)]
    fn get(&self) -> Option<&P::Pointee> {
        self.storage.pointee()
    }

    #[inline(always)]
    fn get_mut(&mut self) -> Option<&mut P::Pointee> {
        self.storage.pointee_mut()
    }

    #[inline(always)]
    fn raw_pointer(&self) -> Option<NonNull<P::Pointee>> {
        self.storage.as_ptr()
    }

    fn shape(&self) -> Shape {
        P::SHAPE
    }
}

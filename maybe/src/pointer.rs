//! Classification of pointer-like types.
//!
//! A type is pointer-like when it can be tested for emptiness, dereferenced, and asked for the
//! address of what it points at. [`PointerLike`] captures exactly that shape, and its
//! associated [`PointerLike::Pointee`] is the type obtained by dereferencing, always a value
//! type and never a reference.
use std::ptr::NonNull;
use std::rc::Rc;
use std::sync::Arc;

/// The family a pointer-like type belongs to.
///
/// Resolved per type via [`PointerLike::SHAPE`], never from a runtime value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Nullable address, returned as-is by [`PointerLike::as_ptr`].
    Raw,
    /// Owning or borrowing smart pointer, addressed through its pointee.
    Smart,
    /// Optional value holder such as `Option<T>`.
    Optional,
}

/// A value supporting an emptiness test, dereference and member access.
///
/// # Implementing this trait
///
/// `pointee` is the only required accessor besides `pointee_mut`: a value is present exactly
/// when `pointee` returns `Some`. Types whose pointee may be shared with other owners (`Rc`,
/// `Arc`, shared references) return `None` from `pointee_mut` while still being present.
///
/// ```rust
/// use maybe::{PointerLike, Shape};
///
/// struct Slot(Option<u8>);
///
/// impl PointerLike for Slot {
///     type Pointee = u8;
///     const SHAPE: Shape = Shape::Optional;
///
///     fn pointee(&self) -> Option<&u8> {
///         self.0.as_ref()
///     }
///
///     fn pointee_mut(&mut self) -> Option<&mut u8> {
///         self.0.as_mut()
///     }
/// }
///
/// assert!(Slot(Some(3)).is_present());
/// assert!(Slot(None).as_ptr().is_none());
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not pointer-like",
    label = "does not support an emptiness test, dereference and member access",
    note = "wrap raw addresses in `RawPointer`, or implement `PointerLike` for `{Self}`"
)]
pub trait PointerLike {
    /// the type obtained by dereferencing `Self`, possibly unsized (`str`, `[T]`, `dyn Trait`)
    type Pointee: ?Sized;

    /// which family `Self` belongs to
    const SHAPE: Shape;

    /// Borrow the pointee, or `None` when empty.
    fn pointee(&self) -> Option<&Self::Pointee>;

    /// Mutably borrow the pointee, or `None` when empty or not uniquely reachable.
    fn pointee_mut(&mut self) -> Option<&mut Self::Pointee>;

    /// Emptiness test: true iff a pointee is reachable.
    fn is_present(&self) -> bool {
        self.pointee().is_some()
    }

    /// Address of the pointee, `None` when empty.
    fn as_ptr(&self) -> Option<NonNull<Self::Pointee>> {
        self.pointee().map(NonNull::from)
    }
}

/// The pointee type of some pointer-like `P`.
pub type PointeeOf<P> = <P as PointerLike>::Pointee;

impl<T: ?Sized> PointerLike for Box<T> {
    type Pointee = T;
    const SHAPE: Shape = Shape::Smart;

    #[inline(always)]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }

    #[inline(always)]
    fn pointee_mut(&mut self) -> Option<&mut T> {
        Some(&mut **self)
    }
}

impl<T: ?Sized> PointerLike for Rc<T> {
    type Pointee = T;
    const SHAPE: Shape = Shape::Smart;

    #[inline(always)]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }

    fn pointee_mut(&mut self) -> Option<&mut T> {
        Rc::get_mut(self)
    }
}

impl<T: ?Sized> PointerLike for Arc<T> {
    type Pointee = T;
    const SHAPE: Shape = Shape::Smart;

    #[inline(always)]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }

    fn pointee_mut(&mut self) -> Option<&mut T> {
        Arc::get_mut(self)
    }
}

impl<'a, T: ?Sized> PointerLike for &'a T {
    type Pointee = T;
    const SHAPE: Shape = Shape::Smart;

    #[inline(always)]
    fn pointee(&self) -> Option<&T> {
        Some(*self)
    }

    // shared borrows never hand out mutable access
    fn pointee_mut(&mut self) -> Option<&mut T> {
        None
    }
}

impl<'a, T: ?Sized> PointerLike for &'a mut T {
    type Pointee = T;
    const SHAPE: Shape = Shape::Smart;

    #[inline(always)]
    fn pointee(&self) -> Option<&T> {
        Some(&**self)
    }

    #[inline(always)]
    fn pointee_mut(&mut self) -> Option<&mut T> {
        Some(&mut **self)
    }
}

impl<T> PointerLike for Option<T> {
    type Pointee = T;
    const SHAPE: Shape = Shape::Optional;

    #[inline(always)]
    fn pointee(&self) -> Option<&T> {
        self.as_ref()
    }

    #[inline(always)]
    fn pointee_mut(&mut self) -> Option<&mut T> {
        self.as_mut()
    }
}

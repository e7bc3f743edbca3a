use crate::pointer::PointerLike;

/// The optional container a chained plain value is lifted into.
///
/// # Motivation
///
/// When a transformation passed to [`crate::Maybe::and_then`] returns a bare value, absence has
/// to be expressed by some optional type. `std::option::Option` is the default, but any
/// optional offering the same three things (construct from a value, construct empty, test for
/// presence via [`PointerLike`]) may stand in for it.
///
/// # Implementing this trait
///
/// Like [`crate::PointerLike`] users generally won't implement this. When they do, it is
/// implemented for a marker token, because rust does not allow implementing a trait for a
/// partially applied type such as `Option`. The convention is the uninhabited
/// [`PartiallyApplied`] marker:
///
/// ```rust
/// use maybe::{Fallback, Maybe, PartiallyApplied, PointerLike, Shape};
///
/// enum Opt<A> {
///     Has(A),
///     Nothing,
/// }
///
/// impl<A> PointerLike for Opt<A> {
///     type Pointee = A;
///     const SHAPE: Shape = Shape::Optional;
///
///     fn pointee(&self) -> Option<&A> {
///         match self {
///             Opt::Has(a) => Some(a),
///             Opt::Nothing => None,
///         }
///     }
///
///     fn pointee_mut(&mut self) -> Option<&mut A> {
///         match self {
///             Opt::Has(a) => Some(a),
///             Opt::Nothing => None,
///         }
///     }
/// }
///
/// impl Fallback for Opt<PartiallyApplied> {
///     type Optional<X> = Opt<X>;
///
///     fn some<X>(value: X) -> Opt<X> {
///         Opt::Has(value)
///     }
///
///     fn none<X>() -> Opt<X> {
///         Opt::Nothing
///     }
/// }
///
/// let m = Maybe::new(Box::new(20u32));
/// let halved = m.and_then_in::<Opt<PartiallyApplied>, _, _>(|x| x / 2);
/// assert_eq!(halved.unwrap(), &10);
/// ```
pub trait Fallback {
    /// the optional type, applied to some contained `X`
    type Optional<X>: PointerLike<Pointee = X>;

    /// present constructor
    fn some<X>(value: X) -> Self::Optional<X>;

    /// "no value" constructor
    fn none<X>() -> Self::Optional<X>;
}

/// An uninhabited type used to define [`Fallback`] instances for partially-applied types.
///
/// For example: the `Fallback` instance for `Option<X>` cannot be written over the
/// partially-applied type `Option`, so instead it is written over `Option<PartiallyApplied>`
#[derive(Clone, Debug)]
pub enum PartiallyApplied {}

/// The standard library's `Option`, the default fallback container.
pub type StdOption = Option<PartiallyApplied>;

impl Fallback for Option<PartiallyApplied> {
    type Optional<X> = Option<X>;

    #[inline(always)]
    fn some<X>(value: X) -> Option<X> {
        Some(value)
    }

    #[inline(always)]
    fn none<X>() -> Option<X> {
        None
    }
}

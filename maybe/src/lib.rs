//! A uniform optional view over anything that behaves like a pointer.
//!
//! [`Maybe`] wraps a raw pointer ([`RawPointer`]), a smart pointer (`Box`, `Rc`, `Arc`,
//! references), or an optional (`Option`) behind a single interface, and chains
//! transformations over it with [`Maybe::and_then`]. The shape of a transformation's result
//! decides, at compile time, how the chained `Maybe` represents absence.
//!
//! ```rust
//! use maybe::{Absence, IntoMaybe, Maybe, Shape};
//!
//! let m = Maybe::new(Box::new(5i32));
//! let doubled = m.and_then(|x| x * 2);
//!
//! assert_eq!(doubled, Some(&10));
//! assert_eq!(doubled.shape(), Shape::Optional);
//! assert_eq!(<i32 as IntoMaybe>::ABSENCE, Absence::Lifted);
//!
//! let empty: Maybe<i32> = Maybe::new(None::<i32>);
//! assert!(empty.and_then(|x| x * 2).is_absent());
//! ```
mod chain;
mod error;
mod fallback;
mod maybe;
mod nullable;
mod pointer;
mod raw;
mod view;

pub use chain::{Absence, IntoMaybe};
pub use error::MaybeError;
pub use fallback::{Fallback, PartiallyApplied, StdOption};
pub use maybe::Maybe;
pub use nullable::Nullable;
pub use pointer::{PointeeOf, PointerLike, Shape};
pub use raw::RawPointer;
pub use view::{PointerView, View};

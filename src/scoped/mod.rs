//! the scope-indexed representation.
//!
//! same encoding and binder machinery as `ln`, but a term's type carries an
//! upper bound on its bound indices, so an index that escapes every binder
//! is a type error instead of a runtime check.

pub mod nat;
pub mod term;
pub mod normalize;
pub mod convert;

pub use nat::{Idx, Nat, S, Z};
pub use term::{SBinder, STerm, View};
pub use normalize::{whnf, nf, whnf_bounded, nf_bounded};
pub use convert::{from_surface, to_surface};

//! the dynamically checked locally nameless representation.

pub mod var;
pub mod traverse;
pub mod binder;
pub mod term;
pub mod alpha;
pub mod normalize;
pub mod convert;

pub use var::{BVar, Var, VarLike};
pub use traverse::{rebind_var, FreeVars, Rebind, Syntax};
pub use binder::{Binder, PendingKind};
pub use term::Term;
pub use alpha::alpha_eq;
pub use normalize::{whnf, nf, whnf_bounded, nf_bounded, Fuel};
pub use convert::{from_surface, to_surface};

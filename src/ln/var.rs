use derive_more::Display;

use crate::ident::FreeId;


/// de bruijn index of a bound variable,
/// counting enclosing binders from the inside out.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "#{}", offset)]
pub struct BVar {
    pub offset: u32,
}

#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, Hash)]
pub enum Var {
    Bound(BVar),
    Free(FreeId),
}

impl Var {
    #[inline(always)]
    pub fn bound(offset: u32) -> Var { Var::Bound(BVar { offset }) }
}


/// syntax that can stand in for a variable.
///
/// this is the one capability the traversal engine needs from a term
/// type: where variables occur, it swaps them for other values of the
/// same type. everything else is plain structural recursion.
pub trait VarLike: Sized {
    fn from_var(var: Var) -> Self;
    fn try_var(&self) -> Option<Var>;
}

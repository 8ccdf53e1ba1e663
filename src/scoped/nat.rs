use core::marker::PhantomData;


/// type level zero. uninhabited.
#[derive(Debug)]
pub enum Z {}

/// type level successor. never constructed.
#[derive(Debug)]
pub struct S<N>(PhantomData<N>, Z);

pub trait Nat: 'static {
    const VALUE: u32;
}

impl Nat for Z {
    const VALUE: u32 = 0;
}

impl<N: Nat> Nat for S<N> {
    const VALUE: u32 = N::VALUE + 1;
}


/// a bound index below `N`: exactly `N::VALUE` inhabitants.
///
/// the only ways to build one are `zero`/`succ`, which exist for
/// `Idx<S<N>>` alone, and the range checked `new`.
/// so there is no `Idx<Z>`, and a term whose indices are `Idx<Z>` has
/// no bound variables at its top level.
pub struct Idx<N> {
    value: u32,
    phantom: PhantomData<fn() -> N>,
}

impl<N> Clone for Idx<N> {
    #[inline(always)]
    fn clone(&self) -> Self { *self }
}

impl<N> Copy for Idx<N> {}

impl<N> PartialEq for Idx<N> {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool { self.value == other.value }
}

impl<N> Eq for Idx<N> {}

impl<N> core::fmt::Debug for Idx<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Idx({})", self.value)
    }
}

impl<N> core::fmt::Display for Idx<N> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "#{}", self.value)
    }
}


impl<N: Nat> Idx<N> {
    #[inline]
    pub fn new(value: u32) -> Option<Self> {
        if value < N::VALUE { Some(Self::new_unck(value)) } else { None }
    }

    /// caller guarantees `value < N::VALUE`.
    #[inline(always)]
    pub(crate) fn new_unck(value: u32) -> Self {
        debug_assert!(value < N::VALUE);
        Self { value, phantom: PhantomData }
    }

    #[inline(always)]
    pub fn get(self) -> u32 { self.value }

    /// the same index, under a larger bound.
    #[inline(always)]
    pub fn weaken(self) -> Idx<S<N>> {
        Idx { value: self.value, phantom: PhantomData }
    }
}

impl<N: Nat> Idx<S<N>> {
    #[inline(always)]
    pub fn zero() -> Self {
        Self { value: 0, phantom: PhantomData }
    }

    #[inline(always)]
    pub fn succ(i: Idx<N>) -> Self {
        Self { value: i.value + 1, phantom: PhantomData }
    }

    /// `None` for zero.
    #[inline]
    pub fn pred(self) -> Option<Idx<N>> {
        if self.value == 0 {
            return None;
        }
        Some(Idx { value: self.value - 1, phantom: PhantomData })
    }
}

impl Idx<Z> {
    #[inline(always)]
    pub fn absurd(self) -> ! {
        unreachable!("Idx<Z> is uninhabited")
    }
}

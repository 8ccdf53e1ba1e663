use derive_more::Display;
use fxhash::{FxHashMap as HashMap, FxHashSet};


/// a free identifier.
/// ids are totally ordered; the only thing terms ever ask of them is equality.
#[derive(Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[display(fmt = "_{}", _0)]
pub struct FreeId(pub u32);

impl FreeId {
    #[inline(always)]
    pub fn inner(self) -> u32 { self.0 }
}


/// interns surface names.
/// every name maps to exactly one `FreeId`, handed out in order from zero.
#[derive(Clone, Debug, Default)]
pub struct Names {
    strings: Vec<String>,
    table: HashMap<String, FreeId>,
}

impl Names {
    #[inline(always)]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    pub fn intern(&mut self, name: &str) -> FreeId {
        if let Some(id) = self.table.get(name) {
            return *id;
        }

        let id = FreeId(self.strings.len() as u32);
        self.strings.push(name.to_string());
        self.table.insert(name.to_string(), id);
        return id;
    }

    #[inline]
    pub fn lookup(&self, name: &str) -> Option<FreeId> {
        self.table.get(name).copied()
    }

    #[inline]
    pub fn resolve(&self, id: FreeId) -> Option<&str> {
        self.strings.get(id.0 as usize).map(|s| s.as_str())
    }
}


/// fresh identifier supply for one top-level operation.
///
/// never shared: whoever creates it owns it for the duration of
/// a single call, so concurrent normalizations on different terms
/// need no coordination.
///
/// ids are minted in increasing order, skipping the avoided ones, and
/// released ids are handed out again first. an avoided id at the top of
/// the range is therefore no obstacle, and the number of ids in use at
/// once is bounded by the free ids plus the binder depth.
#[derive(Debug)]
pub struct Fresh {
    next:     u64,
    avoid:    FxHashSet<FreeId>,
    released: Vec<FreeId>,
}

impl Fresh {
    /// every id from `next` up is unused.
    #[inline]
    pub fn starting_at(next: u32) -> Self {
        Self { next: next as u64, avoid: FxHashSet::default(), released: Vec::new() }
    }

    /// never mints an id in `ids`.
    pub fn avoiding<I: IntoIterator<Item = FreeId>>(ids: I) -> Self {
        Self { next: 0, avoid: ids.into_iter().collect(), released: Vec::new() }
    }

    pub fn mint(&mut self) -> FreeId {
        if let Some(id) = self.released.pop() {
            return id;
        }

        while let Ok(raw) = u32::try_from(self.next) {
            self.next += 1;
            let id = FreeId(raw);
            if !self.avoid.contains(&id) {
                return id;
            }
        }

        // every id is avoided or in use, which needs more memory than there is.
        unreachable!("free id space exhausted")
    }

    /// `id` no longer occurs anywhere and may be minted again.
    #[inline]
    pub fn release(&mut self, id: FreeId) {
        self.released.push(id);
    }
}

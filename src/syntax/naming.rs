use fxhash::FxHashSet;

use crate::ident::{FreeId, Names};


/// the printed name of a free id. ids without a name print as `_N`.
pub fn free_name(names: &Names, id: FreeId) -> String {
    match names.resolve(id) {
        Some(name) => name.to_string(),
        None => id.to_string(),
    }
}


/// names binders by nesting depth: `x y z u v w x1 y1 ...`.
///
/// binders at different depths never share a name, so no binder shadows
/// another one in scope. names that collide with a free name of the term
/// get primed until they don't.
pub struct BinderNames {
    avoid: FxHashSet<String>,
}

impl BinderNames {
    const BASE: [&'static str; 6] = ["x", "y", "z", "u", "v", "w"];

    pub fn avoiding<I: IntoIterator<Item = String>>(free: I) -> Self {
        Self { avoid: free.into_iter().collect() }
    }

    pub fn at(&self, depth: usize) -> String {
        let base = Self::BASE[depth % Self::BASE.len()];
        let round = depth / Self::BASE.len();

        let mut name = if round == 0 { base.to_string() } else { format!("{base}{round}") };
        while self.avoid.contains(&name) {
            name.push('\'');
        }
        return name;
    }
}



#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binder_names() {
        let names = BinderNames::avoiding(["y".to_string(), "y'".to_string()]);
        assert_eq!(names.at(0), "x");
        assert_eq!(names.at(1), "y''");
        assert_eq!(names.at(5), "w");
        assert_eq!(names.at(6), "x1");
        assert_eq!(names.at(13), "y2");
    }

    #[test]
    fn free_names() {
        let mut names = Names::new();
        let a = names.intern("a");
        let unnamed = FreeId(a.inner() + 5);
        assert_eq!(free_name(&names, a), "a");
        assert_eq!(free_name(&names, unnamed), format!("_{}", unnamed.inner()));
    }
}

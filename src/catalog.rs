// Content catalog: the ordered, compiled-in list of tree algorithms

use crate::model::AlgorithmEntry;
use std::collections::HashSet;
use thiserror::Error;
use tracing::error;

const BUILTIN: [AlgorithmEntry; 4] = [
    AlgorithmEntry {
        name: "Árvore B (B-Tree)",
        description: include_str!("../assets/descriptions/b_tree.md"),
        code: include_str!("../assets/listings/b_tree.py"),
        video_url: "https://www.youtube.com/embed/oxTVYaKGg2A",
        route: "b-tree",
    },
    AlgorithmEntry {
        name: "Árvore B+",
        description: include_str!("../assets/descriptions/b_plus_tree.md"),
        code: include_str!("../assets/listings/b_plus_tree.py"),
        video_url: "https://www.youtube.com/embed/BaTG9xNPCK8",
        route: "b-plus-tree",
    },
    AlgorithmEntry {
        name: "Árvore B*",
        description: include_str!("../assets/descriptions/b_star_tree.md"),
        code: include_str!("../assets/listings/b_star_tree.py"),
        video_url: "https://www.youtube.com/embed/WXnTmuSZDfc",
        route: "b-star-tree",
    },
    AlgorithmEntry {
        name: "Árvore Vermelho e Preto",
        description: include_str!("../assets/descriptions/red_black_tree.md"),
        code: include_str!("../assets/listings/red_black_tree.py"),
        video_url: "https://www.youtube.com/embed/vSAE4O2zpkY",
        route: "red-black-tree",
    },
];

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("duplicate route '{0}' in catalog")]
    DuplicateRoute(String),

    #[error("catalog entry '{0}' has an empty route")]
    EmptyRoute(String),
}

/// Ordered catalog of entries. Order defines both display and navigation order.
#[derive(Clone, Debug)]
pub struct Catalog {
    entries: Vec<AlgorithmEntry>,
}

impl Catalog {
    /// The catalog shipped with the application.
    pub fn builtin() -> Self {
        Self::from_entries(BUILTIN.to_vec()).unwrap_or_else(|e| {
            error!(error = %e, "built-in catalog rejected");
            Self {
                entries: Vec::new(),
            }
        })
    }

    /// Build a catalog from arbitrary entries, enforcing unique non-empty routes.
    pub fn from_entries(entries: Vec<AlgorithmEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for entry in &entries {
            if entry.route.is_empty() {
                return Err(CatalogError::EmptyRoute(entry.name.to_string()));
            }
            if !seen.insert(entry.route) {
                return Err(CatalogError::DuplicateRoute(entry.route.to_string()));
            }
        }
        Ok(Self { entries })
    }

    pub fn list(&self) -> &[AlgorithmEntry] {
        &self.entries
    }

    pub fn get(&self, route: &str) -> Option<&AlgorithmEntry> {
        self.entries.iter().find(|e| e.route == route)
    }

    pub fn position(&self, route: &str) -> Option<usize> {
        self.entries.iter().position(|e| e.route == route)
    }

    pub fn routes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|e| e.route)
    }

    /// Route `delta` steps away from `current`, clamped to the catalog bounds.
    ///
    /// With no current route, moving forward lands on the first entry and
    /// moving backward on the last.
    pub fn step(&self, current: Option<&str>, delta: isize) -> Option<&'static str> {
        if self.entries.is_empty() {
            return None;
        }
        let last = self.entries.len() - 1;
        let target = match current.and_then(|route| self.position(route)) {
            Some(idx) => idx.saturating_add_signed(delta).min(last),
            None if delta < 0 => last,
            None => 0,
        };
        self.entries.get(target).map(|e| e.route)
    }

    pub fn first_route(&self) -> Option<&'static str> {
        self.entries.first().map(|e| e.route)
    }

    pub fn last_route(&self) -> Option<&'static str> {
        self.entries.last().map(|e| e.route)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(route: &'static str) -> AlgorithmEntry {
        AlgorithmEntry {
            name: "test",
            description: "",
            code: "",
            video_url: "",
            route,
        }
    }

    #[test]
    fn test_builtin_order() {
        let catalog = Catalog::builtin();
        let routes: Vec<_> = catalog.routes().collect();
        assert_eq!(
            routes,
            vec!["b-tree", "b-plus-tree", "b-star-tree", "red-black-tree"]
        );
    }

    #[test]
    fn test_builtin_keeps_every_entry() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.list(), &BUILTIN[..]);
        assert_eq!(catalog.len(), 4);
    }

    #[test]
    fn test_builtin_is_valid() {
        let catalog = Catalog::builtin();
        assert!(Catalog::from_entries(catalog.list().to_vec()).is_ok());
        for entry in catalog.list() {
            assert!(!entry.name.is_empty());
            assert!(!entry.code.trim().is_empty());
            assert!(!entry.description.trim().is_empty());
        }
    }

    #[test]
    fn test_list_is_stable() {
        let catalog = Catalog::builtin();
        let first: Vec<_> = catalog.list().iter().map(|e| e.route).collect();
        let second: Vec<_> = catalog.list().iter().map(|e| e.route).collect();
        assert_eq!(first, second);
        assert_eq!(catalog.list(), catalog.list());
    }

    #[test]
    fn test_duplicate_route_rejected() {
        let err = Catalog::from_entries(vec![entry("a"), entry("b"), entry("a")]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateRoute("a".to_string()));
    }

    #[test]
    fn test_empty_route_rejected() {
        let err = Catalog::from_entries(vec![entry("")]).unwrap_err();
        assert_eq!(err, CatalogError::EmptyRoute("test".to_string()));
    }

    #[test]
    fn test_step() {
        let catalog = Catalog::from_entries(vec![entry("a"), entry("b"), entry("c")]).unwrap();
        assert_eq!(catalog.step(Some("a"), 1), Some("b"));
        assert_eq!(catalog.step(Some("c"), 1), Some("c"));
        assert_eq!(catalog.step(Some("a"), -1), Some("a"));
        assert_eq!(catalog.step(None, 1), Some("a"));
        assert_eq!(catalog.step(None, -1), Some("c"));
        assert_eq!(catalog.step(Some("missing"), 1), Some("a"));
    }

    #[test]
    fn test_lookup() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.position("b-star-tree"), Some(2));
        assert_eq!(catalog.get("red-black-tree").map(|e| e.name), Some("Árvore Vermelho e Preto"));
        assert!(catalog.get("avl-tree").is_none());
    }
}

//! Route table: page key to pre-built content unit.

use std::collections::HashMap;

/// Mapping from page key to a renderable content unit.
///
/// Built once by the hosting application before the dispatch loop starts
/// and handed to the renderer behind a shared handle; from the renderer's
/// perspective it is immutable. The content unit type is opaque here, it
/// only has to be insertable into whatever `Container` the renderer
/// drives.
///
/// Keys are unique (a repeated `insert` replaces). By convention a
/// `"home"` entry exists, since that is the key the empty fragment
/// resolves to, but nothing enforces it.
#[derive(Debug, Clone)]
pub struct RouteTable<C> {
    pages: HashMap<String, C>,
}

impl<C> Default for RouteTable<C> {
    fn default() -> Self {
        Self {
            pages: HashMap::new(),
        }
    }
}

impl<C> RouteTable<C> {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `unit` under `key`, replacing any previous entry.
    pub fn insert(&mut self, key: impl Into<String>, unit: C) {
        self.pages.insert(key.into(), unit);
    }

    /// Chaining form of [`insert`](Self::insert).
    pub fn with_page(mut self, key: impl Into<String>, unit: C) -> Self {
        self.insert(key, unit);
        self
    }

    /// Look up the content unit registered under `key`.
    pub fn get(&self, key: &str) -> Option<&C> {
        self.pages.get(key)
    }

    /// Whether `key` has a registered content unit.
    pub fn contains(&self, key: &str) -> bool {
        self.pages.contains_key(key)
    }

    /// Iterate over the registered page keys, in no particular order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.pages.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

impl<K: Into<String>, C> FromIterator<(K, C)> for RouteTable<C> {
    fn from_iter<I: IntoIterator<Item = (K, C)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (key, unit) in iter {
            table.insert(key, unit);
        }
        table
    }
}

/// Build a [`RouteTable`] from literal key/content pairs.
///
/// # Example
/// ```
/// let table = docnav::routes! {
///     "home" => "<home page>",
///     "about" => "<about page>",
/// };
/// assert!(table.contains("about"));
/// ```
#[macro_export]
macro_rules! routes {
    ($($key:expr => $unit:expr),* $(,)?) => {{
        let mut table = $crate::router::RouteTable::new();
        $(table.insert($key, $unit);)*
        table
    }};
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_lookup() {
        let mut table = RouteTable::new();
        table.insert("home", 1);
        table.insert("about", 2);

        assert_eq!(table.get("home"), Some(&1));
        assert_eq!(table.get("about"), Some(&2));
        assert_eq!(table.get("missing"), None);
        assert!(table.contains("home"));
        assert!(!table.contains("missing"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn repeated_insert_replaces() {
        let table = RouteTable::new().with_page("home", 1).with_page("home", 2);
        assert_eq!(table.get("home"), Some(&2));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn collects_from_iterator() {
        let table: RouteTable<_> = [("home", 'h'), ("about", 'a')].into_iter().collect();
        assert_eq!(table.get("about"), Some(&'a'));
        assert!(!table.is_empty());
    }

    #[test]
    fn routes_macro_builds_table() {
        let table = crate::routes! {
            "home" => "index",
            "guide" => "manual",
        };
        assert_eq!(table.get("guide"), Some(&"manual"));
        let mut keys: Vec<_> = table.keys().collect();
        keys.sort_unstable();
        assert_eq!(keys, ["guide", "home"]);
    }
}

//! Named, prioritized collection of pipeline items.

/// A registered item with its lookup name and priority.
#[derive(Debug)]
struct Entry<T> {
    name: String,
    priority: u32,
    item: T,
}

/// Holds items ordered by descending priority.
///
/// Items sharing a priority keep their registration order. Registering a name
/// that already exists replaces the previous item.
///
/// ## Examples
///
/// ```
/// use compat_table::markdown::Registry;
///
/// let mut registry = Registry::new();
/// registry.register("paragraph", "paragraph", 10);
/// registry.register("compat", "compatibility_table", 175);
/// registry.register("quote", "quote", 20);
///
/// let order: Vec<_> = registry.iter().copied().collect();
/// assert_eq!(order, vec!["compat", "quote", "paragraph"]);
/// ```
#[derive(Debug)]
pub struct Registry<T> {
    entries: Vec<Entry<T>>,
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Registry<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `item` under `name` at `priority`, replacing any item with the same name.
    pub fn register(&mut self, item: T, name: impl Into<String>, priority: u32) {
        let name = name.into();
        if self.deregister(&name).is_some() {
            tracing::debug!(name = %name, "Replacing registered item");
        }

        let position = self
            .entries
            .iter()
            .position(|entry| entry.priority < priority)
            .unwrap_or(self.entries.len());

        self.entries.insert(position, Entry { name, priority, item });
    }

    /// Removes and returns the item registered under `name`.
    pub fn deregister(&mut self, name: &str) -> Option<T> {
        let index = self.entries.iter().position(|entry| entry.name == name)?;
        Some(self.entries.remove(index).item)
    }

    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| &entry.item)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Priority of the item registered under `name`.
    pub fn priority_of(&self, name: &str) -> Option<u32> {
        self.entries
            .iter()
            .find(|entry| entry.name == name)
            .map(|entry| entry.priority)
    }

    /// Items in dispatch order (highest priority first).
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|entry| &entry.item)
    }
}

use indexmap::IndexMap;

const ALIAS_PREFIX: &str = "$";

/// Hands out `$1`, `$2`, ... for original member names.
///
/// The same name always gets the same alias until [`NameAllocator::reset`].
#[derive(Debug, Clone)]
pub struct NameAllocator {
    names: IndexMap<String, String>,
    next_id: u32,
}

impl Default for NameAllocator {
    fn default() -> Self {
        NameAllocator {
            names: IndexMap::new(),
            next_id: 1,
        }
    }
}

impl NameAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn alias(&mut self, name: &str) -> String {
        if let Some(existing) = self.names.get(name) {
            return existing.clone();
        }

        let alias = format!("{}{}", ALIAS_PREFIX, self.next_id);
        self.next_id += 1;
        self.names.insert(name.to_string(), alias.clone());
        alias
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.names.get(name).map(String::as_str)
    }

    /// Original name and alias pairs, in the order names were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.names.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// The number the next fresh alias will carry.
    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn reset(&mut self) {
        self.names.clear();
        self.next_id = 1;
    }
}

//! Grouped tag storage.
//!
//! Keyed groups map a semantic key to every tag registered under it, in
//! insertion order: a second registration under the same key appends
//! instead of replacing. Sequence groups are plain append-only lists.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

use super::group::Group;

#[derive(Debug, Clone)]
enum Entries {
    Keyed(IndexMap<String, Vec<String>>),
    Sequence(Vec<String>),
}

impl Entries {
    fn for_group(group: Group) -> Self {
        if group.is_keyed() {
            Self::Keyed(IndexMap::new())
        } else {
            Self::Sequence(Vec::new())
        }
    }

    fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            Self::Keyed(map) => Box::new(map.values().flatten().map(String::as_str)),
            Self::Sequence(tags) => Box::new(tags.iter().map(String::as_str)),
        }
    }
}

/// Rendered tags, grouped and keyed.
#[derive(Debug, Clone, Default)]
pub struct TagStore {
    groups: FxHashMap<Group, Entries>,
}

impl TagStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn entries_mut(&mut self, group: Group) -> &mut Entries {
        self.groups
            .entry(group)
            .or_insert_with(|| Entries::for_group(group))
    }

    /// Register `tag` under `key`, appending when the key is already present.
    ///
    /// Sequence groups ignore the key and append.
    pub fn upsert(&mut self, group: Group, key: &str, tag: String) {
        match self.entries_mut(group) {
            Entries::Keyed(map) => map.entry(key.to_string()).or_default().push(tag),
            Entries::Sequence(tags) => tags.push(tag),
        }
    }

    /// Append `tag` to a sequence group.
    ///
    /// On a keyed group the tag lands under the empty key.
    pub fn push(&mut self, group: Group, tag: String) {
        match self.entries_mut(group) {
            Entries::Keyed(map) => map.entry(String::new()).or_default().push(tag),
            Entries::Sequence(tags) => tags.push(tag),
        }
    }

    /// Replace every tag of the group with `tag`.
    pub fn replace(&mut self, group: Group, tag: String) {
        self.groups.remove(&group);
        self.push(group, tag);
    }

    /// Whether `key` has been registered in a keyed group.
    pub fn contains(&self, group: Group, key: &str) -> bool {
        match self.groups.get(&group) {
            Some(Entries::Keyed(map)) => map.contains_key(key),
            _ => false,
        }
    }

    /// Iterate over the group's tags in insertion order, flattening repeated keys.
    pub fn tags(&self, group: Group) -> impl Iterator<Item = &str> {
        self.groups.get(&group).into_iter().flat_map(Entries::iter)
    }

    /// Render one group: tags joined by newlines plus a trailing newline.
    ///
    /// Empty groups render as an empty string.
    pub fn render_group(&self, group: Group) -> String {
        let mut out = String::new();
        for tag in self.tags(group) {
            out.push_str(tag);
            out.push('\n');
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_appends_same_key() {
        let mut store = TagStore::new();
        store.upsert(Group::Link, "alternate", "<a1>".into());
        store.upsert(Group::Link, "canonical", "<c>".into());
        store.upsert(Group::Link, "alternate", "<a2>".into());
        store.upsert(Group::Link, "alternate", "<a3>".into());

        // Repeated keys stay in their first slot
        let tags: Vec<_> = store.tags(Group::Link).collect();
        assert_eq!(tags, ["<a1>", "<a2>", "<a3>", "<c>"]);
    }

    #[test]
    fn test_sequence_groups_append() {
        let mut store = TagStore::new();
        store.push(Group::JsonLd, "<one>".into());
        store.push(Group::JsonLd, "<two>".into());
        assert_eq!(store.render_group(Group::JsonLd), "<one>\n<two>\n");
    }

    #[test]
    fn test_replace() {
        let mut store = TagStore::new();
        store.replace(Group::Title, "<old>".into());
        store.replace(Group::Title, "<new>".into());
        assert_eq!(store.render_group(Group::Title), "<new>\n");
    }

    #[test]
    fn test_contains() {
        let mut store = TagStore::new();
        assert!(!store.contains(Group::Og, "og:title"));
        store.upsert(Group::Og, "og:title", "<t>".into());
        assert!(store.contains(Group::Og, "og:title"));
        assert!(!store.contains(Group::Twitter, "og:title"));
    }

    #[test]
    fn test_empty_group_renders_nothing() {
        let store = TagStore::new();
        assert_eq!(store.render_group(Group::Meta), "");
    }
}

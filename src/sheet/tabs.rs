//! Exclusive accordion tab list
//!
//! An ordered list of tabs where at most one is expanded at a time.
//! Expanding a tab collapses its siblings in the same pass, so observers
//! never see two open tabs. Content is opaque to the accordion; it stores
//! and returns it, nothing more.

/// One tab row in the sheet.
#[derive(Debug, Clone)]
pub struct TabEntry<C> {
    /// Stable, unique within the list.
    pub id: String,
    pub title: String,
    pub expanded: bool,
    pub content: C,
}

impl<C> TabEntry<C> {
    pub fn new(id: impl Into<String>, title: impl Into<String>, content: C) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            expanded: false,
            content,
        }
    }
}

/// Ordered tab list with at most one expanded entry.
#[derive(Debug, Clone)]
pub struct AccordionTabs<C> {
    entries: Vec<TabEntry<C>>,
}

impl<C> Default for AccordionTabs<C> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<C> AccordionTabs<C> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tab. An entry whose id is already present is ignored.
    pub fn push(&mut self, entry: TabEntry<C>) {
        if !self.entries.iter().any(|e| e.id == entry.id) {
            self.entries.push(entry);
        }
    }

    /// Toggle one tab: collapse it if it is the expanded entry, otherwise
    /// expand it and collapse every other entry in the same pass.
    ///
    /// Unknown ids change nothing. Returns whether anything changed.
    pub fn toggle(&mut self, id: &str) -> bool {
        let Some(index) = self.entries.iter().position(|e| e.id == id) else {
            return false;
        };

        if self.entries[index].expanded {
            self.entries[index].expanded = false;
            return true;
        }
        for (i, entry) in self.entries.iter_mut().enumerate() {
            entry.expanded = i == index;
        }
        true
    }

    /// Collapse every tab. Idempotent; returns whether anything changed.
    pub fn collapse_all(&mut self) -> bool {
        let mut changed = false;
        for entry in &mut self.entries {
            if entry.expanded {
                entry.expanded = false;
                changed = true;
            }
        }
        changed
    }

    /// Id of the expanded tab, if any.
    pub fn expanded_id(&self) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.expanded)
            .map(|e| e.id.as_str())
    }

    pub fn is_expanded(&self, id: &str) -> bool {
        self.entries.iter().any(|e| e.id == id && e.expanded)
    }

    /// Entries in insertion order. Toggling never reorders.
    pub fn entries(&self) -> &[TabEntry<C>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tabs() -> AccordionTabs<&'static str> {
        let mut tabs = AccordionTabs::new();
        tabs.push(TabEntry::new("songs", "Songs", "song rows"));
        tabs.push(TabEntry::new("albums", "Albums", "album rows"));
        tabs.push(TabEntry::new("shows", "Shows", "show rows"));
        tabs
    }

    #[test]
    fn test_toggle_expands_then_collapses() {
        let mut tabs = tabs();

        assert!(tabs.toggle("songs"));
        assert!(tabs.is_expanded("songs"));
        assert_eq!(tabs.expanded_id(), Some("songs"));

        assert!(tabs.toggle("songs"));
        assert!(!tabs.is_expanded("songs"));
        assert_eq!(tabs.expanded_id(), None);
    }

    #[test]
    fn test_toggle_is_exclusive() {
        let mut tabs = tabs();

        tabs.toggle("songs");
        tabs.toggle("albums");

        assert!(!tabs.is_expanded("songs"));
        assert!(tabs.is_expanded("albums"));
        assert_eq!(tabs.expanded_id(), Some("albums"));
    }

    #[test]
    fn test_unknown_id_changes_nothing() {
        let mut tabs = tabs();
        tabs.toggle("songs");

        assert!(!tabs.toggle("playlists"));
        assert!(tabs.is_expanded("songs"));
        assert_eq!(tabs.len(), 3);
    }

    #[test]
    fn test_collapse_all_is_idempotent() {
        let mut tabs = tabs();
        tabs.toggle("shows");

        assert!(tabs.collapse_all());
        assert_eq!(tabs.expanded_id(), None);

        assert!(!tabs.collapse_all());
        assert_eq!(tabs.expanded_id(), None);
    }

    #[test]
    fn test_order_is_stable_across_toggles() {
        let mut tabs = tabs();
        tabs.toggle("shows");
        tabs.toggle("songs");
        tabs.toggle("albums");

        let ids: Vec<&str> = tabs.entries().iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["songs", "albums", "shows"]);
    }

    #[test]
    fn test_duplicate_id_is_ignored() {
        let mut tabs = tabs();
        tabs.push(TabEntry::new("songs", "Songs again", "other rows"));

        assert_eq!(tabs.len(), 3);
        assert_eq!(tabs.entries()[0].title, "Songs");
    }

    #[test]
    fn test_at_most_one_expanded_always() {
        let mut tabs = tabs();
        for id in ["songs", "albums", "albums", "shows", "songs", "shows"] {
            tabs.toggle(id);
            let expanded = tabs.entries().iter().filter(|e| e.expanded).count();
            assert!(expanded <= 1, "{} tabs expanded after {:?}", expanded, id);
        }
    }

    #[test]
    fn test_content_is_untouched_by_toggles() {
        let mut tabs = tabs();
        tabs.toggle("albums");
        tabs.collapse_all();

        assert_eq!(tabs.entries()[1].content, "album rows");
    }

    #[test]
    fn test_empty_list() {
        let mut tabs: AccordionTabs<()> = AccordionTabs::new();

        assert!(tabs.is_empty());
        assert!(!tabs.toggle("anything"));
        assert!(!tabs.collapse_all());
    }
}

//! Active attachment tab for the current card.

/// Tracks which file tab is open and for which card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FileTabs {
    card_id: Option<i64>,
    active: usize,
}

impl FileTabs {
    /// Follow the card shown by the latest poll. Returns `true` when the card
    /// changed and the tab was reset to the first file.
    pub fn sync(&mut self, card_id: Option<i64>) -> bool {
        if self.card_id == card_id {
            return false;
        }
        self.card_id = card_id;
        self.active = 0;
        true
    }

    /// Open tab `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize, file_count: usize) -> bool {
        if index >= file_count {
            return false;
        }
        self.active = index;
        true
    }

    /// Index of the open tab, clamped to the available files.
    #[must_use]
    pub fn active(&self, file_count: usize) -> Option<usize> {
        match file_count {
            0 => None,
            n if self.active < n => Some(self.active),
            _ => Some(0),
        }
    }

    #[must_use]
    pub fn card_id(&self) -> Option<i64> {
        self.card_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_card_resets_to_first_tab() {
        let mut tabs = FileTabs::default();
        tabs.sync(Some(1));
        tabs.select(2, 3);
        assert_eq!(tabs.active(3), Some(2));
        assert!(tabs.sync(Some(2)));
        assert_eq!(tabs.active(3), Some(0));
    }

    #[test]
    fn same_card_keeps_tab() {
        let mut tabs = FileTabs::default();
        tabs.sync(Some(1));
        tabs.select(1, 2);
        assert!(!tabs.sync(Some(1)));
        assert_eq!(tabs.active(2), Some(1));
    }

    #[test]
    fn out_of_range_select_is_ignored() {
        let mut tabs = FileTabs::default();
        assert!(!tabs.select(5, 2));
        assert_eq!(tabs.active(2), Some(0));
    }

    #[test]
    fn no_files_has_no_active_tab() {
        assert_eq!(FileTabs::default().active(0), None);
    }

    #[test]
    fn shrunk_file_list_falls_back_to_first() {
        let mut tabs = FileTabs::default();
        tabs.select(3, 4);
        assert_eq!(tabs.active(2), Some(0));
    }
}

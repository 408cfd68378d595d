//! Assignee selection in single- and multi-select mode.

#[cfg(test)]
#[path = "selection_test.rs"]
mod selection_test;

/// Result of clicking an employee.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectOutcome {
    /// Single-select mode: assign these ids right away.
    AssignNow(Vec<i64>),
    /// Multi-select mode: the selection changed; nothing is sent yet.
    Updated,
}

/// Selected employees, kept in click order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AssigneeSelection {
    multi: bool,
    selected: Vec<i64>,
}

impl AssigneeSelection {
    #[must_use]
    pub fn is_multi(&self) -> bool {
        self.multi
    }

    #[must_use]
    pub fn selected(&self) -> &[i64] {
        &self.selected
    }

    #[must_use]
    pub fn is_selected(&self, id: i64) -> bool {
        self.selected.contains(&id)
    }

    /// Flip between single- and multi-select. Always clears the selection.
    pub fn toggle_mode(&mut self) {
        self.multi = !self.multi;
        self.selected.clear();
    }

    /// Handle a click on employee `id`.
    pub fn select(&mut self, id: i64) -> SelectOutcome {
        if !self.multi {
            return SelectOutcome::AssignNow(vec![id]);
        }
        if let Some(pos) = self.selected.iter().position(|&s| s == id) {
            self.selected.remove(pos);
        } else {
            self.selected.push(id);
        }
        SelectOutcome::Updated
    }

    /// Ids to assign on explicit confirmation, if any are selected.
    #[must_use]
    pub fn confirm(&self) -> Option<Vec<i64>> {
        (self.multi && !self.selected.is_empty()).then(|| self.selected.clone())
    }

    /// Back to single-select with nothing selected.
    pub fn reset(&mut self) {
        self.multi = false;
        self.selected.clear();
    }
}

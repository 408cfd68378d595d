use super::*;

fn employee(id: i64, name: &str) -> Employee {
    Employee { id, name: name.to_owned() }
}

#[test]
fn role_badge_marks_owner_then_co_owners() {
    let mut selection = AssigneeSelection::default();
    selection.toggle_mode();
    selection.select(104);
    selection.select(101);

    assert_eq!(role_badge(&selection, 104), Some("owner"));
    assert_eq!(role_badge(&selection, 101), Some("co-owner"));
    assert_eq!(role_badge(&selection, 102), None);
}

#[test]
fn role_badge_empty_in_single_mode() {
    assert_eq!(role_badge(&AssigneeSelection::default(), 101), None);
}

#[test]
fn button_title_depends_on_mode() {
    let e = employee(101, "Alexandra Volkova");
    assert_eq!(button_title(&e, false), "Assign to Alexandra Volkova");
    assert_eq!(button_title(&e, true), "Toggle Alexandra Volkova");
}

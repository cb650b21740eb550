use crate::roster::{
    user::{sort_users, SortKey, User},
    view::{Row, Surface},
};

/// Rows for `users`, in the order received.
#[must_use]
pub fn rows(users: &[User]) -> Vec<Row> {
    users
        .iter()
        .enumerate()
        .map(|(index, user)| Row {
            position: index + 1,
            label: user.name.clone(),
            detail: user.email.clone(),
        })
        .collect()
}

/// Clear whatever list is shown and draw one row per user.
pub fn render<S: Surface>(surface: &mut S, users: &[User]) {
    surface.replace_rows(&rows(users));
}

pub fn install_sort_control<S: Surface>(surface: &mut S) {
    surface.show_sort_control(&SortKey::ALL);
}

/// Reorder the in-memory list and draw it again.
pub fn resort<S: Surface>(surface: &mut S, users: &mut [User], key: SortKey) {
    sort_users(users, key);
    render(surface, users);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roster::view::RecordingSurface;

    #[test]
    fn test_rows_keep_order() {
        let users = vec![User::new("Zed"), User::new("Amy")];
        let rows = rows(&users);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].position, 1);
        assert_eq!(rows[0].label, "Zed");
        assert_eq!(rows[1].position, 2);
        assert_eq!(rows[1].label, "Amy");
    }

    #[test]
    fn test_render_replaces_previous_rows() {
        let mut surface = RecordingSurface::default();
        render(&mut surface, &[User::new("A"), User::new("B")]);
        render(&mut surface, &[User::new("C")]);
        assert_eq!(surface.labels(), vec!["C"]);
        assert_eq!(surface.renders, 2);
    }

    #[test]
    fn test_render_empty() {
        let mut surface = RecordingSurface::default();
        render(&mut surface, &[User::new("A")]);
        render(&mut surface, &[]);
        assert!(surface.rows.is_empty());
    }

    #[test]
    fn test_resort() {
        let mut surface = RecordingSurface::default();
        let mut users = vec![User::new("b"), User::new("C"), User::new("a")];
        resort(&mut surface, &mut users, SortKey::Name);
        assert_eq!(surface.labels(), vec!["a", "b", "C"]);
        assert_eq!(users[0].name, "a");
    }
}

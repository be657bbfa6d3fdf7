//! Entity trait implementation for the User domain type.
//!
//! This module contains the [`ActorEntity`] implementation that enables [`User`] to be
//! stored in a [`Directory`](crate::framework::Directory). It fixes the user-specific rules:
//!
//! - **Ids** start at `1` and follow the current maximum.
//! - **Updates** overwrite `name` and `email` wholesale.
//! - **Search** is a case-insensitive substring match on `name` or `email`, and a blank
//!   query matches nothing.

use crate::framework::ActorEntity;
use crate::model::{User, UserCreate, UserId, UserUpdate};

impl ActorEntity for User {
    type Id = UserId;
    type Create = UserCreate;
    type Update = UserUpdate;
    type Query = String;

    fn id(&self) -> &UserId {
        &self.id
    }

    fn first_id() -> UserId {
        1
    }

    fn next_id(max: &UserId) -> Option<UserId> {
        max.checked_add(1)
    }

    fn from_create_params(id: UserId, params: UserCreate) -> Self {
        Self {
            id,
            name: params.name,
            email: params.email,
        }
    }

    /// Replaces both fields with the update's values, even when they are empty or absent.
    fn on_update(&mut self, update: UserUpdate) {
        self.name = update.name;
        self.email = update.email;
    }

    fn is_blank_query(query: &String) -> bool {
        query.trim().is_empty()
    }

    fn matches(&self, query: &String) -> bool {
        let needle = fold_case(query);
        [self.name.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .filter(|field| !field.is_empty())
            .any(|field| fold_case(field).contains(&needle))
    }
}

// Per-character lowercasing. `str::to_lowercase` maps a word-final `Σ` to `ς`, which
// would stop "ΑΣ" from containing "Σ".
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::UserDirectory;

    fn seeded() -> UserDirectory {
        let mut dir = UserDirectory::new();
        dir.create(UserCreate::new("Alice", "alice@email.com")).unwrap();
        dir.create(UserCreate::new("Bob", "bob@email.com")).unwrap();
        dir
    }

    fn ids(users: &[User]) -> Vec<UserId> {
        users.iter().map(|u| u.id).collect()
    }

    #[test]
    fn first_user_gets_id_one() {
        let mut dir = UserDirectory::new();
        let user = dir.create(UserCreate::new("A", "a@x.com")).unwrap();
        assert_eq!(user, User::new(1, "A", "a@x.com"));
    }

    #[test]
    fn update_overwrites_both_fields_verbatim() {
        let mut dir = seeded();
        let updated = dir
            .update(&1, UserUpdate::new("", ""))
            .expect("user 1 exists");
        assert_eq!(updated, User::new(1, "", ""));

        let cleared = dir.update(&2, UserUpdate::default()).expect("user 2 exists");
        assert_eq!(
            cleared,
            User {
                id: 2,
                name: None,
                email: None
            }
        );
    }

    #[test]
    fn search_matches_name_case_insensitively() {
        let dir = seeded();
        assert_eq!(ids(&dir.search(&"alice".into())), vec![1]);
        assert_eq!(ids(&dir.search(&"ALICE".into())), vec![1]);
        assert_eq!(ids(&dir.search(&"bO".into())), vec![2]);
    }

    #[test]
    fn search_folds_case_per_character() {
        let mut dir = UserDirectory::new();
        dir.create(UserCreate::new("ΑΣ", "x@x.io")).unwrap();
        dir.create(UserCreate::new("École", "ecole@x.io")).unwrap();

        assert_eq!(ids(&dir.search(&"Σ".into())), vec![1]);
        assert_eq!(ids(&dir.search(&"σ".into())), vec![1]);
        assert_eq!(ids(&dir.search(&"ÉCO".into())), vec![2]);
    }

    #[test]
    fn ids_stop_at_the_top_of_the_range() {
        assert_eq!(User::next_id(&1), Some(2));
        assert_eq!(User::next_id(&UserId::MAX), None);
    }

    #[test]
    fn search_matches_email_and_keeps_order() {
        let dir = seeded();
        assert_eq!(ids(&dir.search(&"@EMAIL.com".into())), vec![1, 2]);
    }

    #[test]
    fn blank_queries_match_nothing() {
        let dir = seeded();
        assert!(dir.search(&"".into()).is_empty());
        assert!(dir.search(&"   ".into()).is_empty());
        assert!(dir.search(&"\t\n".into()).is_empty());
    }

    #[test]
    fn search_skips_absent_fields() {
        let mut dir = UserDirectory::new();
        dir.create(UserCreate {
            name: None,
            email: Some("ghost@email.com".into()),
        })
        .unwrap();
        dir.create(UserCreate::default()).unwrap();

        assert_eq!(ids(&dir.search(&"ghost".into())), vec![1]);
        assert!(dir.search(&"none".into()).is_empty());
    }

    #[test]
    fn search_is_not_trimmed() {
        let dir = seeded();
        assert!(dir.search(&" alice".into()).is_empty());
    }
}

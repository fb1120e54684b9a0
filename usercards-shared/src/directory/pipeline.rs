//! Derivation of the rendered subset: filter first, then sort the survivors.
//!
//! Collation is case-sensitive Unicode code-point order (`str::cmp`), and the
//! sort is stable so users with equal keys keep insertion order.

use crate::models::User;

use super::SortKey;

/// Whether `user` matches an already-lowercased query on name or company name.
fn matches_lowercase(user: &User, needle: &str) -> bool {
    user.name.to_lowercase().contains(needle) || user.company.name.to_lowercase().contains(needle)
}

/// Users whose `name` or `company.name` contains `query`, ignoring case.
/// The empty query keeps every user.
#[must_use]
pub fn filter_users<'a>(users: &'a [User], query: &str) -> Vec<&'a User> {
    let needle = query.to_lowercase();
    users
        .iter()
        .filter(|user| matches_lowercase(user, &needle))
        .collect()
}

/// Stable ascending sort on the field selected by `key`.
pub fn sort_users(users: &mut [&User], key: SortKey) {
    users.sort_by(|a, b| key.field(a).cmp(key.field(b)));
}

/// Filter, then sort, then clone out the rendered sequence.
#[must_use]
pub fn visible_users(users: &[User], query: &str, key: SortKey) -> Vec<User> {
    let mut visible = filter_users(users, query);
    sort_users(&mut visible, key);
    visible.into_iter().cloned().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Company;

    fn user(id: u64, name: &str, company: &str) -> User {
        User {
            id,
            name: name.to_string(),
            company: Company {
                name: company.to_string(),
                ..Company::default()
            },
            ..User::default()
        }
    }

    fn names(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.name.as_str()).collect()
    }

    fn sample() -> Vec<User> {
        vec![
            user(1, "Leanne Graham", "Romaguera-Crona"),
            user(2, "Ervin Howell", "Deckow-Crist"),
            user(3, "Clementine Bauch", "Romaguera-Jacobson"),
            user(4, "Patricia Lebsack", "Robel-Corkery"),
        ]
    }

    #[test]
    fn test_empty_query_keeps_everyone() {
        let users = sample();
        assert_eq!(filter_users(&users, "").len(), users.len());
    }

    #[test]
    fn test_filter_matches_name_or_company_ignoring_case() {
        let users = sample();

        let by_name: Vec<u64> = filter_users(&users, "ERVIN").iter().map(|u| u.id).collect();
        assert_eq!(by_name, vec![2]);

        let by_company: Vec<u64> = filter_users(&users, "romaguera")
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(by_company, vec![1, 3]);
    }

    #[test]
    fn test_filter_is_exactly_the_matching_subset() {
        let users = sample();
        for query in ["", "a", "Cr", "ck", "zzz", " ", "-"] {
            let needle = query.to_lowercase();
            let expected: Vec<u64> = users
                .iter()
                .filter(|u| {
                    u.name.to_lowercase().contains(&needle)
                        || u.company.name.to_lowercase().contains(&needle)
                })
                .map(|u| u.id)
                .collect();
            let actual: Vec<u64> = filter_users(&users, query).iter().map(|u| u.id).collect();
            assert_eq!(actual, expected, "query {query:?}");
        }
    }

    #[test]
    fn test_no_match_yields_empty() {
        assert!(visible_users(&sample(), "nonexistent", SortKey::Name).is_empty());
    }

    #[test]
    fn test_sort_by_name_is_non_decreasing() {
        let visible = visible_users(&sample(), "", SortKey::Name);
        assert_eq!(
            names(&visible),
            vec![
                "Clementine Bauch",
                "Ervin Howell",
                "Leanne Graham",
                "Patricia Lebsack"
            ]
        );
        assert!(visible.windows(2).all(|w| w[0].name <= w[1].name));
    }

    #[test]
    fn test_sort_by_company_is_non_decreasing() {
        let visible = visible_users(&sample(), "", SortKey::Company);
        assert!(visible.windows(2).all(|w| w[0].company.name <= w[1].company.name));
        assert_eq!(visible[0].company.name, "Deckow-Crist");
    }

    #[test]
    fn test_sort_is_case_sensitive_code_point_order() {
        let users = vec![user(1, "alice", "x"), user(2, "Bob", "y")];
        let visible = visible_users(&users, "", SortKey::Name);
        assert_eq!(names(&visible), vec!["Bob", "alice"]);
    }

    #[test]
    fn test_ties_keep_insertion_order() {
        let users = vec![
            user(1, "Sam", "Acme"),
            user(2, "Alex", "Acme"),
            user(3, "Jo", "Acme"),
        ];
        let ids: Vec<u64> = visible_users(&users, "", SortKey::Company)
            .iter()
            .map(|u| u.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_filter_runs_before_sort() {
        let visible = visible_users(&sample(), "romaguera", SortKey::Name);
        assert_eq!(names(&visible), vec!["Clementine Bauch", "Leanne Graham"]);
    }
}

//! Правила показа справочника пользователей.

use crate::models::PublicUser;

/// Отбирает записи, видимые текущему пользователю: психиатр видит
/// пациентов, пациент видит психиатров.
pub fn visible_to(viewer_is_psychiatrist: bool, users: &[PublicUser]) -> Vec<PublicUser> {
    users
        .iter()
        .filter(|user| user.is_psychiatrist != viewer_is_psychiatrist)
        .cloned()
        .collect()
}

/// Подходит ли имя под строку поиска. Поиск по подстроке без учёта регистра.
pub fn matches_search(full_name: &str, query: &str) -> bool {
    full_name.to_lowercase().contains(&query.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str, name: &str, is_psychiatrist: bool) -> PublicUser {
        PublicUser {
            id: id.to_string(),
            full_name: name.to_string(),
            email: format!("{id}@x.com"),
            is_psychiatrist,
            specialization: None,
        }
    }

    #[test]
    fn psychiatrist_sees_only_patients() {
        let users = vec![user("u1", "Alice", false), user("d1", "Dr. B", true)];
        let visible = visible_to(true, &users);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "u1");
    }

    #[test]
    fn patient_sees_only_psychiatrists() {
        let users = vec![user("u1", "Alice", false), user("d1", "Dr. B", true)];
        let visible = visible_to(false, &users);
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].id, "d1");
    }

    #[test]
    fn search_ignores_case_and_matches_substrings() {
        assert!(matches_search("Alice Johnson", "john"));
        assert!(matches_search("Alice Johnson", "ALICE"));
        assert!(!matches_search("Alice Johnson", "bob"));
    }

    #[test]
    fn empty_query_matches_everyone() {
        assert!(matches_search("Alice", ""));
    }
}

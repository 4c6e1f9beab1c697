//! Доступ к внешним ссылкам материалов.
//!
//! Ссылка неодобренного материала закрыта для обычных пользователей;
//! одобренные материалы и психиатры проходят через диалог подтверждения
//! перехода на внешний ресурс.

/// Решение о переходе по ссылке материала.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MaterialAccess {
    /// Материал не одобрен; вместо перехода показывается пояснение.
    Restricted,
    /// Переход разрешён после подтверждения в диалоге.
    ConfirmRedirect,
}

/// Текст для пользователя при закрытом доступе.
pub const MATERIAL_RESTRICTED_MESSAGE: &str =
    "This material is awaiting psychiatrist approval.";

/// Определяет, что происходит при попытке открыть ссылку материала.
pub fn material_access(viewer_is_psychiatrist: bool, is_approved: bool) -> MaterialAccess {
    if is_approved || viewer_is_psychiatrist {
        MaterialAccess::ConfirmRedirect
    } else {
        MaterialAccess::Restricted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unapproved_material_is_restricted_for_regular_users() {
        assert_eq!(material_access(false, false), MaterialAccess::Restricted);
    }

    #[test]
    fn approved_material_opens_for_everyone() {
        assert_eq!(material_access(false, true), MaterialAccess::ConfirmRedirect);
        assert_eq!(material_access(true, true), MaterialAccess::ConfirmRedirect);
    }

    #[test]
    fn psychiatrist_reviews_unapproved_materials() {
        assert_eq!(material_access(true, false), MaterialAccess::ConfirmRedirect);
    }
}

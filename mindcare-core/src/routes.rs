//! Маршруты приложения и пункты бокового меню.

/// Главная страница.
pub const HOME: &str = "/";
/// Вход.
pub const LOGIN: &str = "/login";
/// Регистрация.
pub const REGISTER: &str = "/register";
/// Личный кабинет.
pub const DASHBOARD: &str = "/dashboard";
/// Посты сообщества.
pub const POSTS: &str = "/posts";
/// Библиотека материалов.
pub const MATERIALS: &str = "/materials";
/// Справочник психиатров.
pub const PSYCHIATRISTS: &str = "/psychiatrists";
/// Сессии поддержки.
pub const SESSIONS: &str = "/sessions";
/// Страница контактов.
pub const CONTACT: &str = "/contact";

/// Пункт бокового меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    /// Целевой маршрут.
    pub to: &'static str,
    /// Подпись пункта.
    pub label: &'static str,
    /// Эмодзи-иконка.
    pub icon: &'static str,
}

/// Пункты бокового меню в порядке отображения.
pub const NAV_ITEMS: [NavItem; 6] = [
    NavItem { to: DASHBOARD, label: "Dashboard", icon: "📊" },
    NavItem { to: POSTS, label: "Posts", icon: "✍️" },
    NavItem { to: MATERIALS, label: "Materials", icon: "📖" },
    NavItem { to: PSYCHIATRISTS, label: "Psychiatrists", icon: "👨‍⚕️" },
    NavItem { to: SESSIONS, label: "Sessions", icon: "🕒" },
    NavItem { to: CONTACT, label: "Contact Us", icon: "📧" },
];

/// Активен ли пункт меню для текущего пути. Сравнение точное,
/// вложенные пути пункт не подсвечивают.
pub fn is_active(current_path: &str, item_path: &str) -> bool {
    current_path == item_path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nav_covers_all_authorized_sections() {
        let targets: Vec<&str> = NAV_ITEMS.iter().map(|item| item.to).collect();
        assert_eq!(
            targets,
            vec![DASHBOARD, POSTS, MATERIALS, PSYCHIATRISTS, SESSIONS, CONTACT]
        );
    }

    #[test]
    fn active_item_requires_exact_path() {
        assert!(is_active("/posts", POSTS));
        assert!(!is_active("/posts/123", POSTS));
        assert!(!is_active("/", DASHBOARD));
    }
}

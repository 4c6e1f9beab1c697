//! Общее состояние экранов со списками.
//!
//! Все четыре раздела (посты, материалы, психиатры, сессии) живут по одной
//! схеме: загрузка списка, добавление записи в начало, точечная замена
//! записи после действия и одна строка ошибки на экран.

/// Состояние одного экрана со списком записей.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListScreen<T> {
    /// Загруженные записи в порядке отображения.
    pub items: Vec<T>,
    /// Текущая ошибка экрана, если есть.
    pub error: Option<String>,
    /// Временное уведомление об успехе, если есть.
    pub notice: Option<String>,
    /// Идёт ли сейчас запрос.
    pub loading: bool,
}

impl<T> Default for ListScreen<T> {
    fn default() -> Self {
        ListScreen {
            items: Vec::new(),
            error: None,
            notice: None,
            loading: false,
        }
    }
}

impl<T> ListScreen<T> {
    /// Пустой экран без записей и сообщений.
    pub fn new() -> Self {
        Self::default()
    }

    /// Начало запроса: прежние сообщения снимаются.
    pub fn begin(&mut self) {
        self.loading = true;
        self.error = None;
        self.notice = None;
    }

    /// Список загружен и заменяет прежний целиком.
    pub fn loaded(&mut self, items: Vec<T>) {
        self.items = items;
        self.loading = false;
    }

    /// Запрос завершился ошибкой; записи на экране сохраняются.
    pub fn failed(&mut self, message: impl Into<String>) {
        self.error = Some(message.into());
        self.loading = false;
    }

    /// Новая запись встаёт в начало списка.
    pub fn created(&mut self, item: T) {
        self.items.insert(0, item);
        self.loading = false;
        self.error = None;
    }

    /// Заменяет первую запись, подходящую под `matches`, на обновлённую
    /// версию с сервера. Возвращает `false`, если запись не нашлась.
    pub fn replaced(&mut self, matches: impl Fn(&T) -> bool, item: T) -> bool {
        self.loading = false;
        self.error = None;
        match self.items.iter().position(|existing| matches(existing)) {
            Some(index) => {
                self.items[index] = item;
                true
            }
            None => false,
        }
    }

    /// Показывает временное уведомление об успехе.
    pub fn notify(&mut self, message: impl Into<String>) {
        self.notice = Some(message.into());
        self.error = None;
        self.loading = false;
    }

    /// Снимает уведомление.
    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq, Eq)]
    struct Row {
        id: &'static str,
        text: &'static str,
    }

    #[test]
    fn begin_clears_previous_messages() {
        let mut screen = ListScreen::<Row>::new();
        screen.failed("boom");
        screen.notify("done");
        screen.begin();
        assert!(screen.loading);
        assert!(screen.error.is_none());
        assert!(screen.notice.is_none());
    }

    #[test]
    fn loaded_replaces_items_and_stops_loading() {
        let mut screen = ListScreen::new();
        screen.begin();
        screen.loaded(vec![Row { id: "a", text: "old" }]);
        assert!(!screen.loading);
        assert_eq!(screen.items.len(), 1);

        screen.begin();
        screen.loaded(vec![Row { id: "b", text: "new" }, Row { id: "c", text: "newer" }]);
        assert_eq!(screen.items.len(), 2);
        assert_eq!(screen.items[0].id, "b");
    }

    #[test]
    fn failed_keeps_existing_items() {
        let mut screen = ListScreen::new();
        screen.loaded(vec![Row { id: "a", text: "kept" }]);
        screen.begin();
        screen.failed("Failed to fetch posts");
        assert_eq!(screen.error.as_deref(), Some("Failed to fetch posts"));
        assert_eq!(screen.items.len(), 1);
        assert!(!screen.loading);
    }

    #[test]
    fn created_prepends_new_item() {
        let mut screen = ListScreen::new();
        screen.loaded(vec![Row { id: "a", text: "old" }]);
        screen.created(Row { id: "b", text: "fresh" });
        assert_eq!(screen.items[0].id, "b");
        assert_eq!(screen.items[1].id, "a");
        assert!(screen.error.is_none());
    }

    #[test]
    fn replaced_swaps_matching_item_in_place() {
        let mut screen = ListScreen::new();
        screen.loaded(vec![Row { id: "a", text: "old" }, Row { id: "b", text: "other" }]);
        let swapped = screen.replaced(|row| row.id == "a", Row { id: "a", text: "updated" });
        assert!(swapped);
        assert_eq!(screen.items[0].text, "updated");
        assert_eq!(screen.items[1].text, "other");
    }

    #[test]
    fn replaced_reports_missing_item() {
        let mut screen = ListScreen::new();
        screen.loaded(vec![Row { id: "a", text: "old" }]);
        let swapped = screen.replaced(|row| row.id == "zzz", Row { id: "zzz", text: "?" });
        assert!(!swapped);
        assert_eq!(screen.items.len(), 1);
    }

    #[test]
    fn notice_is_cleared_separately_from_error() {
        let mut screen = ListScreen::<Row>::new();
        screen.notify("Joined session successfully!");
        assert_eq!(screen.notice.as_deref(), Some("Joined session successfully!"));
        screen.clear_notice();
        assert!(screen.notice.is_none());
    }
}

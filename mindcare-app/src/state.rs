use leptos::prelude::*;
use mindcare_core::Session;

use crate::storage;

/// Текст ошибки для токена, который не удалось разобрать.
pub(crate) const ROLE_DECODE_ERROR: &str = "Failed to verify user role. Please log in again.";

/// Единственный владелец токена: хранит сессию в сигнале и
/// синхронизирует её с localStorage.
#[derive(Debug, Clone, Copy)]
pub(crate) struct SessionStore {
    session: RwSignal<Option<Session>>,
}

impl SessionStore {
    pub(crate) fn new() -> Self {
        Self {
            session: RwSignal::new(None),
        }
    }

    /// Восстанавливает сессию из localStorage при старте приложения.
    /// Непригодный токен удаляется, пользователь попадёт на вход.
    pub(crate) fn restore(&self) {
        let Some(token) = storage::load_token() else {
            return;
        };
        match Session::from_token(token) {
            Ok(session) => self.session.set(Some(session)),
            Err(err) => {
                leptos::logging::warn!("stored token rejected: {err}");
                if let Err(err) = storage::clear_token() {
                    leptos::logging::warn!("{err}");
                }
            }
        }
    }

    /// Принимает токен после входа: декодирует роль, сохраняет в
    /// localStorage и публикует сессию.
    pub(crate) fn establish(&self, token: String) -> Result<(), String> {
        let session = match Session::from_token(token) {
            Ok(session) => session,
            Err(err) => {
                leptos::logging::warn!("issued token rejected: {err}");
                if let Err(err) = storage::clear_token() {
                    leptos::logging::warn!("{err}");
                }
                return Err(ROLE_DECODE_ERROR.to_string());
            }
        };
        storage::save_token(session.token())?;
        self.session.set(Some(session));
        Ok(())
    }

    /// Завершает сессию и чистит localStorage.
    pub(crate) fn clear(&self) {
        if let Err(err) = storage::clear_token() {
            leptos::logging::warn!("{err}");
        }
        self.session.set(None);
    }

    pub(crate) fn is_authenticated(&self) -> bool {
        self.session.with(|session| session.is_some())
    }

    /// Токен для очередного запроса. Чтение без подписки: запрос уходит
    /// с токеном на момент действия.
    pub(crate) fn token(&self) -> Option<String> {
        self.session
            .with_untracked(|session| session.as_ref().map(|s| s.token().to_string()))
    }

    pub(crate) fn is_psychiatrist(&self) -> bool {
        self.session
            .with(|session| session.as_ref().is_some_and(Session::is_psychiatrist))
    }

    /// Роль на момент вызова, без подписки на сигнал.
    pub(crate) fn is_psychiatrist_untracked(&self) -> bool {
        self.session
            .with_untracked(|session| session.as_ref().is_some_and(Session::is_psychiatrist))
    }

    pub(crate) fn user_id(&self) -> Option<String> {
        self.session.with_untracked(|session| {
            session.as_ref().and_then(|s| s.user_id().map(str::to_string))
        })
    }
}

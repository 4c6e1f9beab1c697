//! Ошибки обращения к API.
//!
//! Интерфейс показывает пользователю одну строку на действие: текст сервера,
//! если он был в теле ответа, иначе запасную формулировку этого действия.

use serde::Deserialize;
use thiserror::Error;

/// Результат вызова API.
pub type ApiResult<T> = Result<T, ApiError>;

/// Ошибка вызова API.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// Запрос не дошёл до сервера.
    #[error("network error: {0}")]
    Network(String),
    /// Сервер ответил статусом вне 2xx.
    #[error("http {status}: {}", .message.as_deref().unwrap_or("request failed"))]
    Http {
        /// Код статуса ответа.
        status: u16,
        /// Сообщение из тела ответа, если сервер его прислал.
        message: Option<String>,
    },
    /// Тело успешного ответа не разобралось.
    #[error("decode error: {0}")]
    Decode(String),
}

impl ApiError {
    /// Ошибка HTTP-статуса с необязательным сообщением сервера.
    pub fn http(status: u16, message: Option<String>) -> ApiError {
        let message = message.filter(|text| !text.trim().is_empty());
        ApiError::Http { status, message }
    }

    /// Статус ответа, если ошибка пришла от сервера.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Истекла ли авторизация.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, ApiError::Http { status: 401, .. })
    }

    /// Строка для пользователя: текст сервера или запасной текст действия.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Http { message: Some(text), .. } => text.clone(),
            _ => fallback.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
/// Тело ошибки, которое сервер присылает вместе с не-2xx статусом.
pub struct ErrorBody {
    /// Текст ошибки для пользователя.
    #[serde(default)]
    pub message: Option<String>,
}

//! Общая логика клиента MindCare Hub.
//!
//! Крейт собирается и на хосте, и под wasm: здесь живут модели API,
//! разбор токена сессии, состояние экранов и правила интерфейса,
//! которые проверяются обычным `cargo test` без браузера.

#![warn(missing_docs)]

pub mod consultation;
pub mod dashboard;
pub mod directory;
pub mod error;
pub mod gating;
pub mod models;
pub mod routes;
pub mod screen;
pub mod session;

pub use error::{ApiError, ApiResult};
pub use screen::ListScreen;
pub use session::{Session, SessionError, TokenClaims};

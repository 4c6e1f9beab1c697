//! Сессия пользователя: bearer-токен и данные из его полезной нагрузки.
//!
//! Токен для клиента непрозрачен, но его средний сегмент декодируется,
//! чтобы показать роль пользователя до загрузки профиля. Подпись при этом
//! не проверяется: решения о доступе всё равно принимает сервер.

use base64::{Engine as _, engine::general_purpose};
use serde::Deserialize;
use thiserror::Error;

/// Ошибки разбора токена сессии.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    /// Токен не состоит из трёх сегментов.
    #[error("token is not a three-segment JWT")]
    Malformed,
    /// Средний сегмент не декодируется из base64url.
    #[error("token payload is not valid base64url")]
    Encoding,
    /// Полезная нагрузка не является ожидаемым JSON.
    #[error("token payload is not valid JSON")]
    Payload,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Полезная нагрузка токена.
pub struct TokenClaims {
    /// Идентификатор пользователя.
    #[serde(default, alias = "id")]
    pub user_id: Option<String>,
    /// Признак психиатра; отсутствие поля означает обычного пользователя.
    #[serde(default)]
    pub is_psychiatrist: bool,
    /// Время истечения в unix-секундах, если сервер его включает.
    #[serde(default)]
    pub exp: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Активная сессия: токен и его разобранная полезная нагрузка.
pub struct Session {
    token: String,
    claims: TokenClaims,
}

impl Session {
    /// Строит сессию из токена, декодируя полезную нагрузку.
    pub fn from_token(token: impl Into<String>) -> Result<Session, SessionError> {
        let token = token.into();
        let claims = decode_claims(&token)?;
        Ok(Session { token, claims })
    }

    /// Токен для заголовка `Authorization`.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Разобранная полезная нагрузка токена.
    pub fn claims(&self) -> &TokenClaims {
        &self.claims
    }

    /// Вошёл ли пользователь как психиатр.
    pub fn is_psychiatrist(&self) -> bool {
        self.claims.is_psychiatrist
    }

    /// Идентификатор пользователя из токена.
    pub fn user_id(&self) -> Option<&str> {
        self.claims.user_id.as_deref()
    }
}

/// Декодирует полезную нагрузку JWT без проверки подписи.
pub fn decode_claims(token: &str) -> Result<TokenClaims, SessionError> {
    let mut segments = token.split('.');
    let (Some(_), Some(payload), Some(_), None) =
        (segments.next(), segments.next(), segments.next(), segments.next())
    else {
        return Err(SessionError::Malformed);
    };
    let bytes = general_purpose::URL_SAFE_NO_PAD
        .decode(payload.trim_end_matches('='))
        .map_err(|_| SessionError::Encoding)?;
    serde_json::from_slice(&bytes).map_err(|_| SessionError::Payload)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn token_with_payload(payload: &str) -> String {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.as_bytes());
        format!("{header}.{body}.signature")
    }

    #[test]
    fn decode_claims_reads_role_and_id() {
        let token = token_with_payload(r#"{"id":"u1","isPsychiatrist":true,"exp":1772000000}"#);
        let claims = decode_claims(&token).expect("claims must decode");
        assert_eq!(claims.user_id.as_deref(), Some("u1"));
        assert!(claims.is_psychiatrist);
        assert_eq!(claims.exp, Some(1772000000));
    }

    #[test]
    fn missing_role_flag_means_regular_user() {
        let token = token_with_payload(r#"{"id":"u1"}"#);
        let claims = decode_claims(&token).expect("claims must decode");
        assert!(!claims.is_psychiatrist);
    }

    #[test]
    fn user_id_alias_accepts_both_wire_names() {
        let token = token_with_payload(r#"{"userId":"u7"}"#);
        let claims = decode_claims(&token).expect("claims must decode");
        assert_eq!(claims.user_id.as_deref(), Some("u7"));
    }

    #[test]
    fn padded_payload_segment_still_decodes() {
        let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256"}"#);
        let body = general_purpose::URL_SAFE.encode(br#"{"id":"u1"}"#);
        assert!(body.ends_with('='), "fixture must exercise padding");
        let token = format!("{header}.{body}.sig");
        let claims = decode_claims(&token).expect("claims must decode");
        assert_eq!(claims.user_id.as_deref(), Some("u1"));
    }

    #[test]
    fn two_segment_token_is_malformed() {
        assert_eq!(decode_claims("abc.def"), Err(SessionError::Malformed));
        assert_eq!(decode_claims("plain"), Err(SessionError::Malformed));
        assert_eq!(decode_claims("a.b.c.d"), Err(SessionError::Malformed));
    }

    #[test]
    fn garbage_payload_reports_encoding_error() {
        assert_eq!(decode_claims("a.!!!.c"), Err(SessionError::Encoding));
    }

    #[test]
    fn non_json_payload_reports_payload_error() {
        let token = token_with_payload("plain text");
        assert_eq!(decode_claims(&token), Err(SessionError::Payload));
    }

    #[test]
    fn session_exposes_token_and_claims() {
        let token = token_with_payload(r#"{"id":"u1","isPsychiatrist":true}"#);
        let session = Session::from_token(token.clone()).expect("session must build");
        assert_eq!(session.token(), token);
        assert!(session.is_psychiatrist());
        assert_eq!(session.user_id(), Some("u1"));
    }
}

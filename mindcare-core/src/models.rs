//! Модели API в том виде, в котором их отдаёт и принимает сервер.
//!
//! Все поля на проводе в camelCase, идентификаторы приходят как `_id`.

use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Краткая ссылка на пользователя внутри записей (автор, отправитель, ведущий).
pub struct UserRef {
    /// Идентификатор пользователя.
    #[serde(rename = "_id")]
    pub id: String,
    /// Полное имя пользователя.
    pub full_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Профиль текущего пользователя.
pub struct Profile {
    /// Идентификатор пользователя.
    #[serde(rename = "_id")]
    pub id: String,
    /// Полное имя.
    pub full_name: String,
    /// Email.
    pub email: String,
    /// Признак психиатра.
    #[serde(default)]
    pub is_psychiatrist: bool,
    /// Специализация (только у психиатров).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    /// Контактные данные (только у психиатров).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Запись публичного справочника пользователей.
pub struct PublicUser {
    /// Идентификатор пользователя.
    #[serde(rename = "_id")]
    pub id: String,
    /// Полное имя.
    pub full_name: String,
    /// Email.
    pub email: String,
    /// Признак психиатра.
    #[serde(default)]
    pub is_psychiatrist: bool,
    /// Специализация, если указана.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Запись справочника психиатров.
pub struct Psychiatrist {
    /// Идентификатор психиатра.
    #[serde(rename = "_id")]
    pub id: String,
    /// Полное имя.
    pub full_name: String,
    /// Email для связи.
    #[serde(default)]
    pub email: String,
    /// Специализация.
    #[serde(default)]
    pub specialization: String,
    /// Контактные данные.
    #[serde(default)]
    pub contact: String,
    /// Идентификаторы подключённых пользователей.
    #[serde(default)]
    pub connections: Vec<String>,
}

impl Psychiatrist {
    /// Подключён ли пользователь с данным идентификатором.
    pub fn is_connected(&self, user_id: &str) -> bool {
        self.connections.iter().any(|id| id == user_id)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Пост сообщества.
pub struct Post {
    /// Идентификатор поста.
    #[serde(rename = "_id")]
    pub id: String,
    /// Автор поста; может отсутствовать, если пользователь удалён.
    #[serde(default)]
    pub user: Option<UserRef>,
    /// Текст поста.
    pub content: String,
    /// Комментарии в порядке добавления.
    #[serde(default)]
    pub comments: Vec<PostComment>,
    /// Рекомендация психиатра, если оставлена.
    #[serde(default)]
    pub recommendation: Option<Recommendation>,
    /// Время создания (RFC 3339).
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Post {
    /// Имя автора поста для отображения.
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map(|u| u.full_name.as_str()).unwrap_or("Unknown")
    }

    /// Дата создания в виде короткой подписи.
    pub fn created_label(&self) -> String {
        let Some(raw) = self.created_at.as_deref() else {
            return String::new();
        };
        format_event_time(raw, "%b %d, %Y")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Комментарий к посту.
pub struct PostComment {
    /// Автор комментария.
    #[serde(default)]
    pub user: Option<UserRef>,
    /// Текст комментария.
    pub content: String,
}

impl PostComment {
    /// Имя автора комментария для отображения.
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map(|u| u.full_name.as_str()).unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Рекомендация психиатра к посту.
pub struct Recommendation {
    /// Психиатр, оставивший рекомендацию.
    #[serde(default)]
    pub user: Option<UserRef>,
    /// Текст рекомендации.
    pub content: String,
}

impl Recommendation {
    /// Имя автора рекомендации для отображения.
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map(|u| u.full_name.as_str()).unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
/// Категория материала.
pub enum MaterialKind {
    /// Музыка.
    #[default]
    Music,
    /// Чтение.
    Reading,
    /// Видео.
    Video,
    /// Медитация.
    Meditation,
    /// Подкаст.
    Podcast,
}

impl MaterialKind {
    /// Все категории в порядке отображения в форме.
    pub const ALL: [MaterialKind; 5] = [
        MaterialKind::Music,
        MaterialKind::Reading,
        MaterialKind::Video,
        MaterialKind::Meditation,
        MaterialKind::Podcast,
    ];

    /// Значение категории на проводе.
    pub fn as_str(self) -> &'static str {
        match self {
            MaterialKind::Music => "music",
            MaterialKind::Reading => "reading",
            MaterialKind::Video => "video",
            MaterialKind::Meditation => "meditation",
            MaterialKind::Podcast => "podcast",
        }
    }

    /// Подпись категории для интерфейса.
    pub fn label(self) -> &'static str {
        match self {
            MaterialKind::Music => "Music",
            MaterialKind::Reading => "Reading",
            MaterialKind::Video => "Video",
            MaterialKind::Meditation => "Meditation",
            MaterialKind::Podcast => "Podcast",
        }
    }

    /// Разбирает значение из формы; `None` для неизвестной категории.
    pub fn parse(raw: &str) -> Option<MaterialKind> {
        Self::ALL.into_iter().find(|kind| kind.as_str() == raw)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Материал библиотеки ресурсов.
pub struct Material {
    /// Идентификатор материала.
    #[serde(rename = "_id")]
    pub id: String,
    /// Название.
    pub title: String,
    /// Категория.
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    /// Внешняя ссылка на ресурс.
    pub url: String,
    /// Кто добавил материал.
    #[serde(default)]
    pub user: Option<UserRef>,
    /// Одобрен ли материал психиатром.
    #[serde(default)]
    pub is_approved: bool,
}

impl Material {
    /// Имя добавившего материал для отображения.
    pub fn submitter_name(&self) -> &str {
        self.user.as_ref().map(|u| u.full_name.as_str()).unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Групповая сессия поддержки.
pub struct SupportSession {
    /// Идентификатор сессии.
    #[serde(rename = "_id")]
    pub id: String,
    /// Название сессии.
    pub title: String,
    /// Запланированные дата и время. Значение из `datetime-local`
    /// может приходить без секунд и зоны.
    pub date: String,
    /// Описание.
    #[serde(default)]
    pub description: String,
    /// Ссылка на внешнюю встречу.
    #[serde(default)]
    pub meeting_link: Option<String>,
    /// Ведущий психиатр.
    #[serde(default)]
    pub host: Option<UserRef>,
    /// Отзывы участников в порядке добавления.
    #[serde(default)]
    pub feedback: Vec<SessionFeedback>,
}

impl SupportSession {
    /// Имя ведущего для отображения.
    pub fn host_name(&self) -> &str {
        self.host.as_ref().map(|u| u.full_name.as_str()).unwrap_or("Unknown")
    }

    /// Дата и время сессии в виде подписи.
    pub fn scheduled_label(&self) -> String {
        format_event_time(&self.date, "%b %d, %Y %H:%M")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Отзыв участника о сессии.
pub struct SessionFeedback {
    /// Автор отзыва.
    #[serde(default)]
    pub user: Option<UserRef>,
    /// Текст отзыва.
    pub content: String,
}

impl SessionFeedback {
    /// Имя автора отзыва для отображения.
    pub fn author_name(&self) -> &str {
        self.user.as_ref().map(|u| u.full_name.as_str()).unwrap_or("Unknown")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Запрос регистрации.
pub struct RegisterRequest {
    /// Полное имя.
    pub full_name: String,
    /// Email.
    pub email: String,
    /// Пароль.
    pub password: String,
    /// Регистрируется ли пользователь как психиатр.
    pub is_psychiatrist: bool,
    /// Специализация; отправляется только для психиатров.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub specialization: Option<String>,
    /// Контактные данные; отправляются только для психиатров.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Запрос входа.
pub struct LoginRequest {
    /// Email.
    pub email: String,
    /// Пароль.
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Ответ входа.
pub struct LoginResponse {
    /// Bearer-токен сессии.
    pub token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Ответ с одним текстовым сообщением (verify, register, consultation).
pub struct ApiMessage {
    /// Сообщение сервера.
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Тело запроса создания поста.
pub struct CreatePostRequest {
    /// Текст поста.
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Тело запроса добавления комментария.
pub struct CommentRequest {
    /// Текст комментария.
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Тело запроса рекомендации психиатра.
pub struct RecommendationRequest {
    /// Текст рекомендации.
    pub recommendation: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Тело запроса добавления материала.
pub struct CreateMaterialRequest {
    /// Название.
    pub title: String,
    /// Категория.
    #[serde(rename = "type")]
    pub kind: MaterialKind,
    /// Внешняя ссылка.
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Тело запроса создания сессии поддержки.
pub struct CreateSessionRequest {
    /// Название.
    pub title: String,
    /// Дата и время из поля `datetime-local`.
    pub date: String,
    /// Описание.
    pub description: String,
    /// Ссылка на внешнюю встречу.
    pub meeting_link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
/// Тело запроса отзыва о сессии.
pub struct FeedbackRequest {
    /// Текст отзыва.
    pub content: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
/// Тело заявки на консультацию.
pub struct ConsultationRequest {
    /// Email получателя заявки.
    pub patient_email: String,
    /// Имя получателя заявки.
    pub patient_name: String,
    /// Имя отправителя.
    pub doctor_name: String,
    /// Контактный номер отправителя.
    pub contact: String,
    /// Email отправителя.
    pub email: String,
    /// Описание запроса.
    pub concern: String,
    /// Удобное время для связи.
    pub timing: String,
}

fn format_event_time(raw: &str, pattern: &str) -> String {
    parse_event_time(raw)
        .map(|dt| dt.format(pattern).to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_event_time(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Some(parsed.naive_utc());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn post_parses_wire_fields() {
        let raw = r#"{
            "_id": "p1",
            "user": {"_id": "u1", "fullName": "Alice"},
            "content": "hello",
            "comments": [{"user": {"_id": "u2", "fullName": "Bob"}, "content": "hi"}],
            "createdAt": "2026-08-25T12:00:00.000Z"
        }"#;
        let post: Post = serde_json::from_str(raw).expect("post must parse");
        assert_eq!(post.id, "p1");
        assert_eq!(post.author_name(), "Alice");
        assert_eq!(post.comments.len(), 1);
        assert_eq!(post.comments[0].author_name(), "Bob");
        assert!(post.recommendation.is_none());
        assert_eq!(post.created_label(), "Aug 25, 2026");
    }

    #[test]
    fn post_without_author_falls_back_to_unknown() {
        let raw = r#"{"_id": "p1", "content": "hello"}"#;
        let post: Post = serde_json::from_str(raw).expect("post must parse");
        assert_eq!(post.author_name(), "Unknown");
        assert_eq!(post.created_label(), "");
    }

    #[test]
    fn material_kind_round_trips_through_wire_name() {
        let material: Material = serde_json::from_str(
            r#"{"_id": "m1", "title": "Calm", "type": "meditation", "url": "https://x", "isApproved": true}"#,
        )
        .expect("material must parse");
        assert_eq!(material.kind, MaterialKind::Meditation);
        assert!(material.is_approved);

        let value = serde_json::to_value(&material).expect("material must serialize");
        assert_eq!(value["type"], "meditation");
    }

    #[test]
    fn material_kind_parses_form_values() {
        assert_eq!(MaterialKind::parse("music"), Some(MaterialKind::Music));
        assert_eq!(MaterialKind::parse("podcast"), Some(MaterialKind::Podcast));
        assert_eq!(MaterialKind::parse("unknown"), None);
        assert_eq!(MaterialKind::default(), MaterialKind::Music);
    }

    #[test]
    fn session_label_accepts_datetime_local_value() {
        let session = SupportSession {
            id: "s1".to_string(),
            title: "Evening circle".to_string(),
            date: "2026-09-01T18:30".to_string(),
            description: String::new(),
            meeting_link: None,
            host: None,
            feedback: Vec::new(),
        };
        assert_eq!(session.scheduled_label(), "Sep 01, 2026 18:30");
    }

    #[test]
    fn session_label_keeps_unparseable_date_as_is() {
        let session = SupportSession {
            id: "s1".to_string(),
            title: "t".to_string(),
            date: "soon".to_string(),
            description: String::new(),
            meeting_link: None,
            host: None,
            feedback: Vec::new(),
        };
        assert_eq!(session.scheduled_label(), "soon");
    }

    #[test]
    fn register_request_omits_psychiatrist_fields_when_absent() {
        let request = RegisterRequest {
            full_name: "A".to_string(),
            email: "a@x.com".to_string(),
            password: "p".to_string(),
            is_psychiatrist: false,
            specialization: None,
            contact: None,
        };
        let value = serde_json::to_value(&request).expect("request must serialize");
        assert_eq!(
            value,
            serde_json::json!({
                "fullName": "A",
                "email": "a@x.com",
                "password": "p",
                "isPsychiatrist": false
            })
        );
    }

    #[test]
    fn register_request_keeps_psychiatrist_fields_when_present() {
        let request = RegisterRequest {
            full_name: "Dr. B".to_string(),
            email: "b@x.com".to_string(),
            password: "p".to_string(),
            is_psychiatrist: true,
            specialization: Some("CBT".to_string()),
            contact: Some("+1 555 0100".to_string()),
        };
        let value = serde_json::to_value(&request).expect("request must serialize");
        assert_eq!(value["isPsychiatrist"], true);
        assert_eq!(value["specialization"], "CBT");
        assert_eq!(value["contact"], "+1 555 0100");
    }

    #[test]
    fn psychiatrist_connection_lookup_matches_ids() {
        let doctor: Psychiatrist = serde_json::from_str(
            r#"{"_id": "d1", "fullName": "Dr. C", "connections": ["u1", "u2"]}"#,
        )
        .expect("psychiatrist must parse");
        assert!(doctor.is_connected("u1"));
        assert!(!doctor.is_connected("u9"));
    }
}

//! Сквозные сценарии на ответах сервера, записанных как есть.

use base64::{Engine as _, engine::general_purpose};
use mindcare_core::consultation::{ConsultationDraft, ConsultationTarget};
use mindcare_core::gating::{MaterialAccess, material_access};
use mindcare_core::models::{
    LoginResponse, Material, Post, PublicUser, SupportSession,
};
use mindcare_core::{ApiError, ListScreen, Session, directory};

fn issued_token(payload: &str) -> String {
    let header = general_purpose::URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
    let body = general_purpose::URL_SAFE_NO_PAD.encode(payload.as_bytes());
    format!("{header}.{body}.server-signature")
}

#[test]
fn login_response_becomes_authorized_session() {
    let token = issued_token(r#"{"id":"u42","isPsychiatrist":true,"exp":1787000000}"#);
    let raw = format!(r#"{{"token":"{token}"}}"#);
    let response: LoginResponse = serde_json::from_str(&raw).expect("login response must parse");

    let session = Session::from_token(response.token).expect("token must decode");
    assert!(session.is_psychiatrist());
    assert_eq!(session.user_id(), Some("u42"));
    assert!(session.token().starts_with("eyJ"));
}

#[test]
fn tampered_token_is_rejected_before_any_request() {
    assert!(Session::from_token("stale-value-from-storage").is_err());
}

#[test]
fn post_feed_create_and_comment_flow() {
    let feed: Vec<Post> = serde_json::from_str(
        r#"[
            {"_id": "p2", "user": {"_id": "u2", "fullName": "Bob"}, "content": "second"},
            {"_id": "p1", "user": {"_id": "u1", "fullName": "Alice"}, "content": "first"}
        ]"#,
    )
    .expect("feed must parse");

    let mut screen = ListScreen::new();
    screen.begin();
    screen.loaded(feed);
    assert_eq!(screen.items.len(), 2);

    let created: Post = serde_json::from_str(
        r#"{"_id": "p3", "user": {"_id": "u1", "fullName": "Alice"}, "content": "third"}"#,
    )
    .expect("created post must parse");
    screen.created(created);
    assert_eq!(screen.items[0].id, "p3");

    let commented: Post = serde_json::from_str(
        r#"{
            "_id": "p1",
            "user": {"_id": "u1", "fullName": "Alice"},
            "content": "first",
            "comments": [{"user": {"_id": "u2", "fullName": "Bob"}, "content": "take care"}]
        }"#,
    )
    .expect("updated post must parse");
    let swapped = screen.replaced(|post| post.id == "p1", commented);
    assert!(swapped);
    assert_eq!(screen.items[2].comments.len(), 1);
    assert_eq!(screen.items[2].comments[0].author_name(), "Bob");
    // Остальные записи не тронуты.
    assert!(screen.items[1].comments.is_empty());
}

#[test]
fn material_approval_unlocks_the_link() {
    let mut screen = ListScreen::new();
    let materials: Vec<Material> = serde_json::from_str(
        r#"[{"_id": "m1", "title": "Night rain", "type": "music", "url": "https://x", "isApproved": false}]"#,
    )
    .expect("materials must parse");
    screen.loaded(materials);

    let viewer_is_psychiatrist = false;
    let before = &screen.items[0];
    assert_eq!(
        material_access(viewer_is_psychiatrist, before.is_approved),
        MaterialAccess::Restricted
    );

    let approved: Material = serde_json::from_str(
        r#"{"_id": "m1", "title": "Night rain", "type": "music", "url": "https://x", "isApproved": true}"#,
    )
    .expect("approved material must parse");
    assert!(screen.replaced(|m| m.id == "m1", approved));

    let after = &screen.items[0];
    assert_eq!(
        material_access(viewer_is_psychiatrist, after.is_approved),
        MaterialAccess::ConfirmRedirect
    );
}

#[test]
fn consultation_request_carries_exact_wire_fields() {
    let users: Vec<PublicUser> = serde_json::from_str(
        r#"[
            {"_id": "u1", "fullName": "Alice Johnson", "email": "alice@x.com", "isPsychiatrist": false},
            {"_id": "d1", "fullName": "Dr. Grey", "email": "grey@x.com", "isPsychiatrist": true}
        ]"#,
    )
    .expect("users must parse");

    // Психиатр видит пациентов и ищет по имени.
    let visible = directory::visible_to(true, &users);
    assert_eq!(visible.len(), 1);
    assert!(directory::matches_search(&visible[0].full_name, "john"));

    let target = ConsultationTarget::from(&visible[0]);
    let draft = ConsultationDraft {
        name: "Dr. Grey".to_string(),
        contact: "+1 555 0100".to_string(),
        sender_email: "grey@x.com".to_string(),
        concern: "Follow-up after last session".to_string(),
        timing: "Weekdays 2-4 PM".to_string(),
    };
    assert_eq!(draft.validate(), Ok(()));

    let value = serde_json::to_value(draft.to_request(&target)).expect("request must serialize");
    assert_eq!(
        value,
        serde_json::json!({
            "patientEmail": "alice@x.com",
            "patientName": "Alice Johnson",
            "doctorName": "Dr. Grey",
            "contact": "+1 555 0100",
            "email": "grey@x.com",
            "concern": "Follow-up after last session",
            "timing": "Weekdays 2-4 PM"
        })
    );
}

#[test]
fn session_join_and_feedback_flow() {
    let mut screen = ListScreen::new();
    let sessions: Vec<SupportSession> = serde_json::from_str(
        r#"[{
            "_id": "s1",
            "title": "Evening circle",
            "date": "2026-09-01T18:30",
            "description": "Open group",
            "host": {"_id": "d1", "fullName": "Dr. Grey"},
            "feedback": []
        }]"#,
    )
    .expect("sessions must parse");
    screen.loaded(sessions);

    let joined: SupportSession = serde_json::from_str(
        r#"{
            "_id": "s1",
            "title": "Evening circle",
            "date": "2026-09-01T18:30",
            "description": "Open group",
            "host": {"_id": "d1", "fullName": "Dr. Grey"},
            "feedback": [{"user": {"_id": "u1", "fullName": "Alice"}, "content": "Felt heard"}]
        }"#,
    )
    .expect("joined session must parse");
    assert!(screen.replaced(|s| s.id == "s1", joined));
    screen.notify("Joined session successfully!");

    assert_eq!(screen.notice.as_deref(), Some("Joined session successfully!"));
    assert_eq!(screen.items[0].feedback.len(), 1);
    assert_eq!(screen.items[0].scheduled_label(), "Sep 01, 2026 18:30");
    assert_eq!(screen.items[0].host_name(), "Dr. Grey");
}

#[test]
fn expired_authorization_is_distinguishable_from_other_failures() {
    let expired = ApiError::http(401, Some("jwt expired".to_string()));
    assert!(expired.is_unauthorized());
    assert_eq!(expired.user_message("Failed to fetch data"), "jwt expired");

    let flaky = ApiError::Network("connection reset".to_string());
    assert!(!flaky.is_unauthorized());
    assert_eq!(flaky.user_message("Failed to fetch data"), "Failed to fetch data");
}

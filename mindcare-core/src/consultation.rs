//! Форма заявки на консультацию.
//!
//! Единственная форма приложения с собственной проверкой полей: ошибки
//! показываются по одной, в порядке полей формы.

use validator::ValidateEmail;

use crate::models::{ConsultationRequest, Psychiatrist, PublicUser};

/// Через сколько миллисекунд после отправки форма сбрасывается.
pub const SENT_RESET_MS: u32 = 3_000;

/// Получатель заявки на консультацию.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationTarget {
    /// Имя получателя.
    pub name: String,
    /// Email получателя.
    pub email: String,
}

impl From<&PublicUser> for ConsultationTarget {
    fn from(user: &PublicUser) -> Self {
        ConsultationTarget {
            name: user.full_name.clone(),
            email: user.email.clone(),
        }
    }
}

impl From<&Psychiatrist> for ConsultationTarget {
    fn from(doctor: &Psychiatrist) -> Self {
        ConsultationTarget {
            name: doctor.full_name.clone(),
            email: doctor.email.clone(),
        }
    }
}

/// Черновик формы консультации.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConsultationDraft {
    /// Имя отправителя.
    pub name: String,
    /// Контактный номер отправителя.
    pub contact: String,
    /// Email отправителя.
    pub sender_email: String,
    /// Описание запроса.
    pub concern: String,
    /// Удобное время для связи.
    pub timing: String,
}

impl ConsultationDraft {
    /// Проверяет форму и возвращает первую ошибку в порядке полей.
    pub fn validate(&self) -> Result<(), &'static str> {
        if self.name.trim().is_empty() {
            return Err("Name is required");
        }
        if self.contact.trim().is_empty() {
            return Err("Contact number is required");
        }
        if self.sender_email.trim().is_empty() {
            return Err("Email is required");
        }
        if !is_valid_email(&self.sender_email) {
            return Err("Please enter a valid email address");
        }
        if self.concern.trim().is_empty() {
            return Err("Concern is required");
        }
        if self.timing.trim().is_empty() {
            return Err("Available timing is required");
        }
        Ok(())
    }

    /// Собирает тело запроса для выбранного получателя.
    pub fn to_request(&self, target: &ConsultationTarget) -> ConsultationRequest {
        ConsultationRequest {
            patient_email: target.email.clone(),
            patient_name: target.name.clone(),
            doctor_name: self.name.clone(),
            contact: self.contact.clone(),
            email: self.sender_email.clone(),
            concern: self.concern.clone(),
            timing: self.timing.clone(),
        }
    }
}

/// Адрес считается годным, если он проходит проверку email
/// и в домене есть точка с сегментами по обе стороны.
pub fn is_valid_email(value: &str) -> bool {
    let value = value.trim();
    if !value.validate_email() {
        return false;
    }
    match value.rsplit_once('@') {
        Some((_, domain)) => match domain.rfind('.') {
            Some(dot) => dot > 0 && dot + 1 < domain.len(),
            None => false,
        },
        None => false,
    }
}

/// Текст уведомления после успешной отправки заявки.
pub fn success_message(recipient_name: &str) -> String {
    format!("Your message has been sent to {recipient_name}. They will respond soon.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete_draft() -> ConsultationDraft {
        ConsultationDraft {
            name: "Dr. Smith".to_string(),
            contact: "+1 555 0100".to_string(),
            sender_email: "smith@clinic.com".to_string(),
            concern: "Weekly anxiety check-in".to_string(),
            timing: "Weekdays 2-4 PM".to_string(),
        }
    }

    #[test]
    fn complete_draft_passes_validation() {
        assert_eq!(complete_draft().validate(), Ok(()));
    }

    #[test]
    fn errors_follow_form_field_order() {
        let mut draft = ConsultationDraft::default();
        assert_eq!(draft.validate(), Err("Name is required"));

        draft.name = "Dr. Smith".to_string();
        assert_eq!(draft.validate(), Err("Contact number is required"));

        draft.contact = "+1 555 0100".to_string();
        assert_eq!(draft.validate(), Err("Email is required"));

        draft.sender_email = "not-an-email".to_string();
        assert_eq!(draft.validate(), Err("Please enter a valid email address"));

        draft.sender_email = "smith@clinic.com".to_string();
        assert_eq!(draft.validate(), Err("Concern is required"));

        draft.concern = "Check-in".to_string();
        assert_eq!(draft.validate(), Err("Available timing is required"));

        draft.timing = "Mornings".to_string();
        assert_eq!(draft.validate(), Ok(()));
    }

    #[test]
    fn whitespace_only_fields_count_as_empty() {
        let mut draft = complete_draft();
        draft.concern = "   ".to_string();
        assert_eq!(draft.validate(), Err("Concern is required"));
    }

    #[test]
    fn email_requires_dot_in_domain() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("plain"));
        assert!(!is_valid_email("a@x"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
        assert!(!is_valid_email("@x.com"));
    }

    #[test]
    fn request_combines_draft_and_target() {
        let target = ConsultationTarget {
            name: "Alice".to_string(),
            email: "alice@x.com".to_string(),
        };
        let request = complete_draft().to_request(&target);
        assert_eq!(request.patient_name, "Alice");
        assert_eq!(request.patient_email, "alice@x.com");
        assert_eq!(request.doctor_name, "Dr. Smith");
        assert_eq!(request.email, "smith@clinic.com");
        assert_eq!(request.timing, "Weekdays 2-4 PM");
    }

    #[test]
    fn success_message_names_the_recipient() {
        assert_eq!(
            success_message("Alice"),
            "Your message has been sent to Alice. They will respond soon."
        );
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Данные выбранного пакета в заявке (только для чтения в форме)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PackageSummary {
    pub title: String,
    pub price: f64,
    pub duration: u32,
}

/// DTO заявки с формы
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryDto {
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "packageDetails")]
    pub package: PackageSummary,
}

impl InquiryDto {
    /// Валидация данных
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Full name is required".into());
        }
        if self.phone.trim().is_empty() {
            return Err("Phone number is required".into());
        }
        if !is_plausible_email(self.email.trim()) {
            return Err("Please enter a valid email address".into());
        }
        if self.package.title.trim().is_empty() {
            return Err("Package title is missing".into());
        }
        Ok(())
    }
}

// Один '@', непустая локальная часть, в домене есть точка не по краям
fn is_plausible_email(email: &str) -> bool {
    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !email.chars().any(char::is_whitespace)
}

/// Заявка в том виде, в котором она уходит во внешнюю таблицу
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryPayload {
    pub reference: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "packageDetails")]
    pub package: PackageSummary,
    #[serde(rename = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
}

impl InquiryPayload {
    /// Собрать заявку из DTO; поля формы обрезаются
    pub fn from_dto(dto: InquiryDto, reference: Uuid, submitted_at: DateTime<Utc>) -> Self {
        Self {
            reference,
            name: dto.name.trim().to_string(),
            email: dto.email.trim().to_string(),
            phone: dto.phone.trim().to_string(),
            package: dto.package,
            submitted_at,
        }
    }
}

/// Ответ пользователю после отправки заявки
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InquiryAck {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reference: Option<Uuid>,
}

impl InquiryAck {
    pub fn accepted(reference: Uuid) -> Self {
        Self {
            success: true,
            message: "Thank you! Our travel expert will contact you shortly.".into(),
            reference: Some(reference),
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            reference: None,
        }
    }
}

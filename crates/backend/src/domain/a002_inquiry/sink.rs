use async_trait::async_trait;
use contracts::domain::a002_inquiry::InquiryPayload;
use thiserror::Error;

use crate::shared::config::InquiryConfig;

/// Ошибки отправки заявки
#[derive(Debug, Error)]
pub enum InquiryError {
    #[error("Invalid inquiry: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Inquiry endpoint returned HTTP {status}")]
    Rejected { status: u16 },
}

impl InquiryError {
    /// Сообщение для формы
    pub fn user_message(&self) -> String {
        match self {
            InquiryError::Validation(msg) => msg.clone(),
            InquiryError::Transport(e) if e.is_timeout() => {
                "The booking service took too long to respond. Please try again.".into()
            }
            InquiryError::Transport(_) | InquiryError::Rejected { .. } => {
                "Failed to submit inquiry. Please try again.".into()
            }
        }
    }
}

/// Куда уходят заявки
#[async_trait]
pub trait InquirySink: Send + Sync {
    async fn submit(&self, payload: &InquiryPayload) -> Result<(), InquiryError>;

    fn name(&self) -> &'static str;
}

/// Отправка в webhook внешней таблицы (JSON POST)
pub struct WebhookSink {
    client: reqwest::Client,
    endpoint: String,
}

impl WebhookSink {
    pub fn new(endpoint: impl Into<String>, timeout_secs: u64) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl InquirySink for WebhookSink {
    async fn submit(&self, payload: &InquiryPayload) -> Result<(), InquiryError> {
        let response = self.client.post(&self.endpoint).json(payload).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(
                "Inquiry endpoint rejected {} (HTTP {}): {}",
                payload.reference,
                status.as_u16(),
                body
            );
            return Err(InquiryError::Rejected {
                status: status.as_u16(),
            });
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "webhook"
    }
}

/// Без внешнего адреса: заявка только пишется в лог
pub struct LogOnlySink;

#[async_trait]
impl InquirySink for LogOnlySink {
    async fn submit(&self, payload: &InquiryPayload) -> Result<(), InquiryError> {
        tracing::info!(
            "Inquiry {} from {} <{}>, {}",
            payload.reference,
            payload.name,
            payload.email,
            payload.phone
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "log-only"
    }
}

/// Выбор приёмника по конфигурации
pub fn from_config(config: &InquiryConfig) -> anyhow::Result<Box<dyn InquirySink>> {
    match &config.endpoint {
        Some(endpoint) => Ok(Box::new(WebhookSink::new(endpoint.clone(), config.timeout_secs)?)),
        None => {
            tracing::warn!("inquiry.endpoint is not set, inquiries will only be logged");
            Ok(Box::new(LogOnlySink))
        }
    }
}

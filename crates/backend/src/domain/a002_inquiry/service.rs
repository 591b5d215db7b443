use chrono::Utc;
use contracts::domain::a002_inquiry::{InquiryAck, InquiryDto, InquiryPayload};
use uuid::Uuid;

use super::sink::{InquiryError, InquirySink};
use crate::shared::format::format_price;

/// Проверить заявку и передать её в приёмник
pub async fn submit(sink: &dyn InquirySink, dto: InquiryDto) -> Result<InquiryAck, InquiryError> {
    dto.validate().map_err(InquiryError::Validation)?;

    let payload = InquiryPayload::from_dto(dto, Uuid::new_v4(), Utc::now());
    tracing::info!(
        "Inquiry {} for '{}' (price {}, {} days) via {}",
        payload.reference,
        payload.package.title,
        format_price(payload.package.price),
        payload.package.duration,
        sink.name()
    );

    if let Err(e) = sink.submit(&payload).await {
        tracing::error!("Failed to forward inquiry {}: {}", payload.reference, e);
        return Err(e);
    }

    Ok(InquiryAck::accepted(payload.reference))
}

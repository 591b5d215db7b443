use axum::{extract::State, http::StatusCode, Json};
use contracts::domain::a002_inquiry::{InquiryAck, InquiryDto};

use crate::domain::a002_inquiry::service;
use crate::domain::a002_inquiry::sink::InquiryError;
use crate::shared::state::AppState;

/// POST /api/inquiries
pub async fn submit(
    State(state): State<AppState>,
    Json(dto): Json<InquiryDto>,
) -> (StatusCode, Json<InquiryAck>) {
    match service::submit(state.inquiries.as_ref(), dto).await {
        Ok(ack) => (StatusCode::OK, Json(ack)),
        Err(e) => {
            let status = match &e {
                InquiryError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
                InquiryError::Transport(_) | InquiryError::Rejected { .. } => StatusCode::BAD_GATEWAY,
            };
            (status, Json(InquiryAck::rejected(e.user_message())))
        }
    }
}

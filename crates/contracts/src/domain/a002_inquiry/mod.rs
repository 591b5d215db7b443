pub mod aggregate;

pub use aggregate::{InquiryAck, InquiryDto, InquiryPayload, PackageSummary};

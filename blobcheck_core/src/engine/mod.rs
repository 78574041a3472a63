//! Generation and verification of chunked blobs.

mod generator;
mod report;
mod verifier;

pub use generator::generate_blob;
pub use report::{Finding, MismatchReport, NO_REFERENCE_MESSAGE, SUCCESS_MESSAGE, VerificationOutcome};
pub use verifier::verify_blob;

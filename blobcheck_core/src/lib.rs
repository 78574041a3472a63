//! Chunked generation and byte-exact verification of large random blobs.
//!
//! A [`Session`] owns one reference blob. [`Session::generate`] fills it with
//! fresh random bytes, chunk by chunk; [`Session::verify`] streams a candidate
//! through the same chunk grid and reports differences with a hard cap.
//!
//! ```rust
//! use blobcheck_core::{Session, io::DataReaderBlob};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let session = Session::builder().silent(true).build();
//!     let reference = session.generate(4096).await?;
//!
//!     let candidate = DataReaderBlob::from(reference.to_blob());
//!     let outcome = session.verify(&candidate).await?;
//!     assert!(outcome.is_match());
//!     Ok(())
//! }
//! ```

pub mod macros;

pub mod config;
pub use config::EngineConfig;

pub mod engine;

pub mod io;

pub mod progress;

pub mod random;

pub mod session;
pub use session::{Session, SessionBuilder};

pub mod types;
pub use types::*;

//! Byte sources for candidates and byte sinks for exported blobs.
//!
//! Readers hand out byte ranges of a source with a known size; the verifier never
//! asks for more than one chunk at a time. Writers append the chunks of a generated
//! blob to a file or to memory.

mod data_reader;
mod data_reader_blob;
mod data_reader_file;
mod data_writer;
mod data_writer_blob;
mod data_writer_file;

pub use data_reader::*;
pub use data_reader_blob::*;
pub use data_reader_file::*;
pub use data_writer::*;
pub use data_writer_blob::*;
pub use data_writer_file::*;

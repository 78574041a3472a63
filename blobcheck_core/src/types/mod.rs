//! Contains the byte containers, ranges and small value types shared by the engine.

mod blob;
pub use blob::*;

mod byte_range;
pub use byte_range::*;

mod cancel_token;
pub use cancel_token::*;

mod reference_blob;
pub use reference_blob::*;

mod size;
pub use size::*;

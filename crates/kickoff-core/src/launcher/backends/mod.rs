//! Platform backend implementations.

mod android;
mod host;

pub use android::AndroidBackend;
pub use host::HostBackend;

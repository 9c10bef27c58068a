pub mod buffers;
pub mod dispatch;
pub mod error;
pub mod host;
pub mod session;

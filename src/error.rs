//! Error types for the OpenCL offload pipeline.

use std::io;
use std::path::PathBuf;

use opencl3::error_codes::ClError;

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while setting up or running the device pipeline.
///
/// Every variant is fatal to the run: the binary prints the message and
/// exits with a nonzero status. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Device discovery failed outright (no usable platform or device).
    #[error("couldn't access any compute devices: {0}")]
    Discovery(ClError),

    /// Discovery succeeded but returned neither a GPU nor a CPU device.
    #[error("no OpenCL device available")]
    NoDevice,

    /// The kernel source file could not be read.
    #[error("couldn't read kernel source {path}: {source}")]
    KernelSource { path: PathBuf, source: io::Error },

    /// Kernel compilation failed; carries the compiler's build log.
    #[error("program build failed:\n{0}")]
    ProgramBuild(String),

    /// Creating a context, command queue, or kernel handle failed.
    #[error("couldn't create {object}: {source}")]
    Create { object: &'static str, source: ClError },

    /// Device buffer allocation failed.
    #[error("couldn't create a buffer: {0}")]
    BufferAlloc(ClError),

    /// A host <-> device copy failed.
    #[error("buffer transfer failed: {0}")]
    Transfer(ClError),

    /// Argument binding or the NDRange enqueue/wait failed.
    #[error("kernel launch failed: {0}")]
    Launch(ClError),
}

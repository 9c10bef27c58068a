//! Kernel argument binding and the single NDRange dispatch.

use std::time::{Duration, Instant};

use opencl3::kernel::ExecuteKernel;
use opencl3::types::cl_int;

use crate::buffers::VectorBuffers;
use crate::error::{Error, Result};
use crate::session::Session;

/// Bind the kernel arguments, enqueue one 1-D NDRange execution covering
/// `len` work-items, and block until the completion event fires.
///
/// Arguments are bound in fixed order: vector length, the two input
/// buffers, the output buffer. The local work size is left to the
/// platform's default. Returns the wall-clock time of enqueue+wait only;
/// binding and transfers are excluded.
pub fn dispatch(session: &Session, buffers: &VectorBuffers, len: usize) -> Result<Duration> {
    let size_arg = len as cl_int;

    let mut exec = ExecuteKernel::new(&session.kernel);
    unsafe {
        exec.set_arg(&size_arg)
            .set_arg(&buffers.v1)
            .set_arg(&buffers.v2)
            .set_arg(&buffers.out)
            .set_global_work_size(len);
    }

    let start = Instant::now();
    let event = unsafe { exec.enqueue_nd_range(&session.queue) }.map_err(Error::Launch)?;
    event.wait().map_err(Error::Launch)?;
    Ok(start.elapsed())
}

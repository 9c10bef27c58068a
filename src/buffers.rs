//! Device buffers for the two input vectors and the output vector.

use std::ptr;

use opencl3::memory::{Buffer, CL_MEM_READ_WRITE};
use opencl3::types::{cl_int, CL_BLOCKING};

use crate::error::{Error, Result};
use crate::session::Session;

/// The three device-side mirrors of the host vectors, all `len` elements.
pub struct VectorBuffers {
    pub v1: Buffer<cl_int>,
    pub v2: Buffer<cl_int>,
    pub out: Buffer<cl_int>,
    len: usize,
}

impl VectorBuffers {
    /// Create three read-write device buffers sized for `len` elements each.
    pub fn allocate(session: &Session, len: usize) -> Result<Self> {
        let create = || unsafe {
            Buffer::<cl_int>::create(&session.context, CL_MEM_READ_WRITE, len, ptr::null_mut())
                .map_err(Error::BufferAlloc)
        };
        Ok(VectorBuffers {
            v1: create()?,
            v2: create()?,
            out: create()?,
            len,
        })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Blocking copy of both input vectors into their device buffers.
    /// Data is visible to the device before this returns.
    pub fn upload(&mut self, session: &Session, v1: &[cl_int], v2: &[cl_int]) -> Result<()> {
        debug_assert_eq!(v1.len(), self.len);
        debug_assert_eq!(v2.len(), self.len);
        let write_v1 = unsafe {
            session
                .queue
                .enqueue_write_buffer(&mut self.v1, CL_BLOCKING, 0, v1, &[])
                .map_err(Error::Transfer)?
        };
        write_v1.wait().map_err(Error::Transfer)?;
        let write_v2 = unsafe {
            session
                .queue
                .enqueue_write_buffer(&mut self.v2, CL_BLOCKING, 0, v2, &[])
                .map_err(Error::Transfer)?
        };
        write_v2.wait().map_err(Error::Transfer)?;
        Ok(())
    }

    /// Blocking copy of the output buffer back into `out`. The host vector
    /// is fully populated before this returns.
    pub fn download(&self, session: &Session, out: &mut [cl_int]) -> Result<()> {
        debug_assert_eq!(out.len(), self.len);
        let read_event = unsafe {
            session
                .queue
                .enqueue_read_buffer(&self.out, CL_BLOCKING, 0, out, &[])
                .map_err(Error::Transfer)?
        };
        read_event.wait().map_err(Error::Transfer)?;
        Ok(())
    }
}

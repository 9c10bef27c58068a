//! Device session: device discovery, context, program build, queue, kernel.
//!
//! The session owns every OpenCL object it creates. Release happens in
//! `Drop`, field by field, in the reverse of acquisition order, and only
//! for objects that were actually acquired.

use std::fs;
use std::path::Path;

use log::{info, warn};
use opencl3::command_queue::CommandQueue;
use opencl3::context::Context;
use opencl3::device::{get_all_devices, Device, CL_DEVICE_TYPE_CPU, CL_DEVICE_TYPE_GPU};
use opencl3::kernel::Kernel;
use opencl3::program::Program;

use crate::error::{Error, Result};

/// An execution session bound to one OpenCL device.
///
/// Field order matters: fields drop in declaration order, so the kernel is
/// released before the queue, the queue before the program, the program
/// before the context.
#[derive(Debug)]
pub struct Session {
    pub kernel: Kernel,
    pub queue: CommandQueue,
    _program: Program,
    pub context: Context,
    device_name: String,
}

impl Session {
    /// Build a complete session from a kernel source file and entry point.
    ///
    /// The source file is read before any device API is touched, so a
    /// missing file fails without attempting device allocation. A build
    /// failure carries the compiler's diagnostic log in the error.
    pub fn create(source_path: &Path, entry_point: &str) -> Result<Self> {
        let source = fs::read_to_string(source_path).map_err(|e| Error::KernelSource {
            path: source_path.to_path_buf(),
            source: e,
        })?;

        let device = select_device()?;
        let device_name = device.name().unwrap_or_default().trim().to_string();
        info!("using device: {device_name}");

        let context = Context::from_device(&device).map_err(|e| Error::Create {
            object: "context",
            source: e,
        })?;

        let program = Program::create_and_build_from_source(&context, &source, "")
            .map_err(Error::ProgramBuild)?;

        // OpenCL 1.2 queue API for portability (macOS never got 2.0).
        #[allow(deprecated)]
        let queue = CommandQueue::create_default(&context, 0).map_err(|e| Error::Create {
            object: "command queue",
            source: e,
        })?;

        let kernel = Kernel::create(&program, entry_point).map_err(|e| Error::Create {
            object: "kernel",
            source: e,
        })?;

        Ok(Session {
            kernel,
            queue,
            _program: program,
            context,
            device_name,
        })
    }

    /// Human-readable name of the selected device.
    pub fn device_name(&self) -> &str {
        &self.device_name
    }
}

/// Select a compute device, preferring a GPU and falling back to a CPU.
fn select_device() -> Result<Device> {
    let gpu_ids = get_all_devices(CL_DEVICE_TYPE_GPU).unwrap_or_default();
    if let Some(&id) = gpu_ids.first() {
        return Ok(Device::new(id));
    }

    warn!("GPU not found, using CPU");
    let cpu_ids = get_all_devices(CL_DEVICE_TYPE_CPU).map_err(Error::Discovery)?;
    cpu_ids
        .first()
        .map(|&id| Device::new(id))
        .ok_or(Error::NoDevice)
}

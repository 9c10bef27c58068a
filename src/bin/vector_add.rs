//! Element-wise addition of two random vectors on an OpenCL device.
//!
//! The pipeline is a single linear pass: initialize host vectors, build the
//! kernel, allocate device buffers, upload, dispatch once over the whole
//! index range, download, print. Any failure is fatal and exits with
//! status 1.

use std::path::Path;

use clap::Parser;
use log::info;
use opencl3::types::cl_int;

use veccl::buffers::VectorBuffers;
use veccl::error::Result;
use veccl::session::Session;
use veccl::{dispatch, host};

const KERNEL_SOURCE_PATH: &str = "kernels/vector_ops.cl";
const KERNEL_ENTRY_POINT: &str = "vector_add";

#[derive(Parser, Debug)]
#[command(about = "Add two random integer vectors on an OpenCL device (GPU preferred, CPU fallback)")]
struct Args {
    /// Number of elements in each vector
    // Capped at i32::MAX: the size is bound to the kernel as a cl_int.
    #[arg(default_value_t = 100_000_000, value_parser = clap::value_parser!(u64).range(1..=i32::MAX as u64))]
    size: u64,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    if let Err(err) = run(args.size as usize) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(size: usize) -> Result<()> {
    let mut rng = rand::rng();
    let v1 = host::init_random(size, &mut rng);
    let v2 = host::init_random(size, &mut rng);
    host::print_vector(&v1);
    host::print_vector(&v2);

    let session = Session::create(Path::new(KERNEL_SOURCE_PATH), KERNEL_ENTRY_POINT)?;
    info!("selected device: {}", session.device_name());

    let mut buffers = VectorBuffers::allocate(&session, size)?;
    buffers.upload(&session, &v1, &v2)?;

    let elapsed = dispatch::dispatch(&session, &buffers, size)?;

    let mut v_out = vec![0 as cl_int; size];
    buffers.download(&session, &mut v_out)?;
    host::print_vector(&v_out);

    println!("Kernel Execution Time: {:.6} ms", elapsed.as_secs_f64() * 1e3);

    // Locals drop in reverse declaration order: the buffers are released
    // before the session's kernel, queue, program, and context.
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_defaults_to_one_hundred_million() {
        let args = Args::try_parse_from(["vector_add"]).unwrap();
        assert_eq!(args.size, 100_000_000);
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(Args::try_parse_from(["vector_add", "0"]).is_err());
    }

    #[test]
    fn size_beyond_cl_int_is_rejected() {
        // 2^32 + 1 would wrap to 1 when cast to cl_int at bind time.
        assert!(Args::try_parse_from(["vector_add", "4294967297"]).is_err());
        let max = i32::MAX as u64;
        assert_eq!(Args::try_parse_from(["vector_add", &max.to_string()]).unwrap().size, max);
        assert!(Args::try_parse_from(["vector_add", &(max + 1).to_string()]).is_err());
    }
}

//! GPU device + surface management.
//!
//! - creates the wgpu Instance/Adapter/Device/Queue for a window
//! - creates and reconfigures the Surface (swapchain)
//! - acquires frames and hands out an encoder + view for rendering
//!
//! Everything here is set up once per window and lives as long as it does.

mod error;
mod frame;
mod gpu;
mod init;
mod surface;

pub use error::SurfaceErrorAction;
pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;

//! wgpu device and window surface.
//!
//! Creates the Instance/Adapter/Device/Queue, keeps the surface configured
//! across resizes and hands out one [`GpuFrame`] per redraw.

mod frame;
mod gpu;
mod init;
mod surface;

pub use frame::GpuFrame;
pub use gpu::Gpu;
pub use init::GpuInit;
pub use surface::SurfaceErrorAction;

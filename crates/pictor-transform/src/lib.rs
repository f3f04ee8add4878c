//! pictor-transform - Geometric transforms
//!
//! Resizing over the core sampling kernels:
//!
//! - Nearest / bilinear / bicubic point sampling on an endpoint-aligned
//!   grid
//! - Area-weighted supersampling for downscaling
//! - Scale-factor convenience wrapper

mod error;
pub mod resize;

pub use error::{TransformError, TransformResult};
pub use resize::{Interpolation, resize, resize_by_factor};

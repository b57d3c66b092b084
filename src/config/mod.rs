pub mod rc;

pub use rc::{RcConfig, RcLoader};

//! Top-level command workflows.

pub mod deploy;
pub mod register;

pub use deploy::DeployArgs;
pub use register::RegisterArgs;

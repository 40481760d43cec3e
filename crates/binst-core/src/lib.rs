pub mod config;
pub mod logging;

pub mod archive;
pub mod checksum;
pub mod descriptor;
pub mod error;
pub mod fetch;
pub mod install;
pub mod platform;

pub use descriptor::{DescriptorStore, ReleaseDescriptor, Variant};
pub use error::InstallError;
pub use install::{InstallReport, Installer};
pub use platform::Platform;

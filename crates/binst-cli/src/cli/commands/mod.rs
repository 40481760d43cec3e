mod checksum;
mod install;
mod list;
mod resolve;
mod validate;

pub use checksum::run_checksum;
pub use install::run_install;
pub use list::run_list;
pub use resolve::{resolve_release, run_resolve};
pub use validate::run_validate;

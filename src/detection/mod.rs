//! Detection implementation submodule.
//!
//! Internal details of finding and probing a Java installation:
//!
//! - `normalize_home` / `has_compiler`: home-directory expansion, symlink
//!   resolution and layout checks
//! - `detect_java_home`: platform-native fallback when nothing is configured
//! - `read_version_banner`: runs `java -version` and captures stderr
//! - `parse_major_version`: extracts the major version from the banner

mod auto_detect;
mod home;
mod parser;
mod version;

pub(crate) use auto_detect::detect_java_home;
pub(crate) use home::{compiler_file_name, has_compiler, launcher_file_name, normalize_home};
pub use parser::parse_major_version;
pub(crate) use version::read_version_banner;

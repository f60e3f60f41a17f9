mod compose_version;
mod display_record;
mod version_file_path;

pub use compose_version::compose_version;
pub use display_record::display_record;
pub use version_file_path::version_file_path;

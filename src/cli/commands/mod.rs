mod import;

pub use import::{cmd_import_courses, read_courses};

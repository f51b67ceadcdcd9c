pub mod paths;

pub use paths::{format_path_with_tilde, output_file_name, safe_open_file, validate_file_size};

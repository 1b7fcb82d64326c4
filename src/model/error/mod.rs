pub mod file_errors;

/// Filesystem adapters for dashboard output
mod file_writer;

pub use file_writer::{FileSystemWriter, StdoutPresenter};

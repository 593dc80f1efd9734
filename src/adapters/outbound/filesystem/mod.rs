/// Filesystem adapters for file I/O operations
mod dataset_file_reader;
mod file_writer;

pub use dataset_file_reader::{DatasetFileReader, DatasetFormat};
pub use file_writer::{FileSystemWriter, StdoutPresenter};

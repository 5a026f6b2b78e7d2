mod cli_tests;
mod file_reader_tests;
mod input_files_tests;
mod purge_tests;
mod utils;

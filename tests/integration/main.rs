//! Integration tests for the litmd binary and library.

mod helpers;

mod cli_test;
mod config_test;
mod decode_test;
mod export_test;
mod filename_test;
mod render_test;

//! Integration tests for termsvg.

mod chrome_test;
mod cli_test;
mod helpers;
mod render_test;

//! Configuration pipeline tests

mod defaults_tests;
mod loading_tests;
mod override_file_tests;

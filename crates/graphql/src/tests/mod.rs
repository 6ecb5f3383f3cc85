mod cli_tests;
mod logging_tests;

mod key_generator_tests;
mod naming_tests;
mod react_query_visitor_tests;
mod utils;

mod operations_tests;
mod quotes_tests;
mod values_tests;

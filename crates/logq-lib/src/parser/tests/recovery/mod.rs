mod unclosed_tests;
mod unexpected_tests;

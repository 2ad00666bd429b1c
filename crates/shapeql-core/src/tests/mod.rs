mod query_tests;
mod writer_tests;

mod create_tests;
mod listings_tests;

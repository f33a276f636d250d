mod compiler_tests;
mod schema_builder_tests;

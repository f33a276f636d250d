mod input_object_type_builder_tests;
mod object_type_builder_tests;

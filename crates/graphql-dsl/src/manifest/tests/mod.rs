mod schema_manifest_tests;

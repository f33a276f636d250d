mod manifest_error;
mod schema_manifest;

pub use manifest_error::ManifestError;
pub use schema_manifest::DeprecationManifest;
pub use schema_manifest::EnumManifest;
pub use schema_manifest::EnumValueManifest;
pub use schema_manifest::FieldManifest;
pub use schema_manifest::InputFieldManifest;
pub use schema_manifest::InputManifest;
pub use schema_manifest::ObjectManifest;
pub use schema_manifest::OperationManifest;
pub use schema_manifest::ScalarManifest;
pub use schema_manifest::SchemaManifest;
pub use schema_manifest::UnionManifest;

#[cfg(test)]
mod tests;

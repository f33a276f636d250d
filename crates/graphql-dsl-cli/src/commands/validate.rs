use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use graphql_dsl::manifest::SchemaManifest;
use graphql_dsl::operation::OperationKind;
use graphql_dsl::schema::Schema;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct ValidateCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for \
             manifest files within a directory.",
        long,
        value_delimiter = ',',
    )]
    manifest_exts: Vec<String>,

    #[arg(
        help="Paths to one or more manifest files or directories containing \
             manifest files which need to be validated.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for ValidateCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let manifest_exts = normalize_exts(&self.manifest_exts);
        let mut errors: Vec<anyhow::Error> = vec![];

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let ManifestScan {
            file_paths,
            num_skipped_entries,
            scan_errors,
        } = find_manifests(&self.file_or_dir_paths, &manifest_exts);
        errors.extend(scan_errors);

        log::debug!("Found {} manifests to be validated.", file_paths.len());

        let mut num_types = 0;
        let mut num_operations = 0;
        for file_path in &file_paths {
            match validate_manifest(file_path) {
                Ok(schema) => {
                    num_types += schema.definition().types().len();
                    num_operations += [
                        OperationKind::Query,
                        OperationKind::Mutation,
                        OperationKind::Subscription,
                    ].into_iter()
                        .map(|kind| schema.operations(kind).len())
                        .sum::<usize>();
                },
                Err(err) => errors.push(err),
            }
        }

        if !errors.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} Found {} invalid manifest(s):\n{}",
                output_utils::RED_X,
                errors.len(),
                errors.iter()
                    .map(|err| format!("  * {err:#}"))
                    .collect::<Vec<_>>()
                    .join("\n"),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All manifests validated successfully:\n",
                "  * Analyzed {} files.\n",
                "  * Skipped {} other entries.\n",
                "  * Validated {} type declarations.\n",
                "  * Validated {} operations.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_entries,
            num_types,
            num_operations,
        ))
    }
}

struct ManifestScan {
    file_paths: Vec<PathBuf>,
    num_skipped_entries: usize,
    scan_errors: Vec<anyhow::Error>,
}

/// Walks every path, collecting files that carry one of `manifest_exts`.
fn find_manifests(file_or_dir_paths: &[PathBuf], manifest_exts: &HashSet<String>) -> ManifestScan {
    let mut num_skipped_entries: usize = 0;
    let mut file_paths = vec![];
    let mut scan_errors = vec![];
    for path in file_or_dir_paths {
        for entry in WalkDir::new(path.as_path()).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(err) => {
                    scan_errors.push(anyhow::Error::new(err).context(format!(
                        "Failed to scan {}",
                        path.display(),
                    )));
                    continue
                },
            };

            let entry_path = entry.path();
            if entry.file_type().is_file() && has_manifest_ext(entry_path, manifest_exts) {
                log::trace!("Found manifest at {entry_path:#?}.");
                file_paths.push(entry_path.to_path_buf());
            } else {
                log::trace!("Skipping {entry_path:#?}.");
                num_skipped_entries += 1;
            }
        }
    }

    // A single explicit file argument is validated regardless of its
    // extension.
    if file_paths.is_empty()
        && let [only_path] = file_or_dir_paths
        && only_path.is_file() {
        log::warn!(
            "Proceeding to validate {only_path:#?} even though it doesn't \
            match any of the --manifest-exts ({}).",
            manifest_exts.iter()
                .map(|ext| format!("`{ext}`"))
                .collect::<Vec<_>>()
                .join(", "),
        );
        num_skipped_entries = num_skipped_entries.saturating_sub(1);
        file_paths.push(only_path.to_path_buf());
    }

    ManifestScan {
        file_paths,
        num_skipped_entries,
        scan_errors,
    }
}

/// Lower-cases each extension and strips any leading `.`.
fn normalize_exts(exts: &[String]) -> HashSet<String> {
    exts.iter()
        .map(|ext| ext.trim_start_matches('.').to_ascii_lowercase())
        .filter(|ext| !ext.is_empty())
        .collect()
}

fn has_manifest_ext(path: &Path, manifest_exts: &HashSet<String>) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
        .is_some_and(|ext| manifest_exts.contains(&ext))
}

fn validate_manifest(path: &Path) -> anyhow::Result<Schema> {
    let builder = SchemaManifest::from_path(path)?
        .into_builder()
        .with_context(|| format!("Failed to declare the schema in {}", path.display()))?;
    let schema = builder
        .build()
        .with_context(|| format!("Failed to compile the schema in {}", path.display()))?;
    log::info!(
        "Validated {} ({} types).",
        path.display(),
        schema.definition().types().len(),
    );
    Ok(schema)
}

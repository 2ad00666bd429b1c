use crate::output_utils;
use crate::shape_file::ShapeFile;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use anyhow::Context;
use std::collections::HashSet;
use std::path::Path;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CompileCmd {
    #[arg(
        default_values_t=["json".to_string()],
        help="Set of file extensions to filter to when searching for shape \
             files within a directory.",
        long,
        value_delimiter = ',',
    )]
    shape_file_exts: Vec<String>,

    #[arg(
        help="Paths to one or more shape files or directories containing \
             shape files which should be compiled into GraphQL queries.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}
impl CompileCmd {
    fn find_shape_files(
        &self,
        errors: &mut Vec<anyhow::Error>,
    ) -> Vec<PathBuf> {
        let shape_file_exts: HashSet<&str> =
            self.shape_file_exts.iter()
                .map(|ext| ext.trim_start_matches('.'))
                .collect();

        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true).sort_by_file_name() {
                match entry {
                    Ok(entry) => {
                        let path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {path:#?}.");
                            continue;
                        }
                        log::trace!("Found file at {path:#?}.");
                        if let Some(ext) = path.extension().map(|s| s.to_string_lossy())
                            && shape_file_exts.contains(ext.as_ref()) {
                            file_paths.push(path.to_path_buf());
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        errors.push(e.into());
                    },
                }
            }
        }

        // A single explicit file path is compiled even when its extension
        // isn't one of `--shape-file-exts`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to compile {first_arg_path:#?} even though it \
                doesn't match any of the --shape-file-exts ({}).",
                self.shape_file_exts.iter()
                    .map(|ext| format!("`{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.to_owned());
        }

        file_paths
    }
}

#[inherent::inherent]
impl RunnableCommand for CompileCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut errors: Vec<anyhow::Error> = vec![];
        let file_paths = self.find_shape_files(&mut errors);
        log::debug!(
            "Found {} shape files to be compiled.",
            file_paths.len(),
        );

        let mut queries = vec![];
        for path in &file_paths {
            match compile_shape_file(path) {
                Ok(text) => queries.push(format!("# {}\n{text}", path.display())),
                Err(e) => errors.push(e),
            }
        }

        if !errors.is_empty() {
            return CommandResult::failures(
                format_args!("Failed to compile {} shape files:", errors.len()),
                errors.iter().map(|e| format!("{e:#}")),
            );
        }

        if file_paths.is_empty() {
            return CommandResult::stderr(format_args!(
                "{} No shape files found.",
                output_utils::RED_X,
            ));
        }

        log::info!(
            "{} Compiled {} shape files.",
            output_utils::GREEN_CHECK,
            file_paths.len(),
        );
        CommandResult::stdout(format_args!("{}", queries.join("\n")))
    }
}

fn compile_shape_file(path: &Path) -> anyhow::Result<String> {
    let query = ShapeFile::load(path)?
        .to_query()
        .with_context(|| format!("invalid shape file {path:?}"))?;
    log::trace!(
        "Compiling {path:#?} with {} variables.",
        query.variables().count(),
    );
    query.compile()
        .with_context(|| format!("failed to compile {path:?}"))
}

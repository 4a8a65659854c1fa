mod repo_files;

pub use repo_files::{RepoFile, RepoFilesClient};

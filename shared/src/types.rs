/// Workspace-wide fallible result used at crate edges and in binaries.
pub type Result<T> = anyhow::Result<T>;

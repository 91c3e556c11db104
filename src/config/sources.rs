//! Config file sources, layered global-then-workspace.

pub(crate) mod global_file;
pub(crate) mod workspace_file;

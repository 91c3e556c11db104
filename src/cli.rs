//! CLI domain: parse, route, output, and presentation only.
//! No domain orchestration; the route dispatches to the aggregator.

mod output;
mod parse;
mod presentation;
mod route;

pub use output::map_error;
pub use parse::Cli;
pub use presentation::format_run_summary;
pub use route::RunContext;

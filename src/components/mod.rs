pub mod header;
pub mod project_list;

pub use header::Header;
pub use project_list::{ProjectCard, ProjectList};

pub mod aggregate;
pub mod category;
pub mod error;
pub mod expand;
pub mod finder;
pub mod graph;
pub mod http;
pub mod result;
pub mod sample;

pub use error::FindError;
pub use finder::Finder;
pub use graph::{GraphService, ProblemRow, RowError};
pub use http::HttpGraphService;
pub use result::{FindReport, PageProblems};

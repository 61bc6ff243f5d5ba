pub mod parsing;
pub mod response;

pub use parsing::parse_lenient_body;
pub use response::{json_response, json_response_with_status};

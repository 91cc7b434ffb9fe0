//! Assembly of a URL from discrete, possibly conflicting components.

mod compose;
mod host;
mod input;
pub mod query;
mod userinfo;


pub use compose::compose;
pub use host::normalize_host;
pub use input::{ComponentInput, ParamMap, ParamValue};
pub use query::{materialize_query, query_values, QueryParams};
pub use userinfo::{compose_userinfo, Userinfo};

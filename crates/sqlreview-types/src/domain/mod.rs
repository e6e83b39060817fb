mod connection;
mod ids;
mod llm;
mod response;
mod review;
mod schema;
mod statement;
mod version;

pub use connection::*;
pub use ids::*;
pub use llm::*;
pub use response::*;
pub use review::*;
pub use schema::*;
pub use statement::*;
pub use version::*;

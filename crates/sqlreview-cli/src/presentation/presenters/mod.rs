mod connection;
mod llm;
mod review;
mod schema;
mod statement;
mod system;
mod version;

pub use connection::*;
pub use llm::*;
pub use review::*;
pub use schema::*;
pub use statement::*;
pub use system::*;
pub use version::*;

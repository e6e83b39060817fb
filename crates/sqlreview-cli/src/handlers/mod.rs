mod context;

pub mod connection;
pub mod llm;
pub mod review;
pub mod schema;
pub mod sql;
pub mod system;
pub mod version;

pub use context::HandlerContext;

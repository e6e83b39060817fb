mod common;
mod connection;
mod llm;
mod result;
mod review;
mod schema;
mod statement;
mod system;
mod version;

pub use common::*;
pub use connection::*;
pub use llm::*;
pub use result::*;
pub use review::*;
pub use schema::*;
pub use statement::*;
pub use system::*;
pub use version::*;

use serde::Serialize;
use std::fmt;

/// Text layout of a view model at a given density
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}

/// A failed action has no content; only its notice is shown.
impl<T: CreateView> CreateView for Option<T> {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        match self {
            Some(content) => content.create_view(mode),
            None => Box::new(crate::presentation::views::EmptyView),
        }
    }
}

/// Content of actions that only change local state
#[derive(Debug, Clone, Default, Serialize)]
pub struct EmptyViewModel {}

impl CreateView for EmptyViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        Box::new(crate::presentation::views::EmptyView)
    }
}

/// Outcome of a create, update or delete, with the list as re-read afterwards
#[derive(Debug, Clone, Serialize)]
pub struct MutationViewModel<T> {
    pub id: Option<i64>,
    pub created: bool,
    pub refreshed: Option<T>,
}

impl<T: CreateView> CreateView for MutationViewModel<T> {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        self.refreshed.create_view(mode)
    }
}

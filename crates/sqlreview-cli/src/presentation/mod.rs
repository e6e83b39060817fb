//! # Presentation Layer
//!
//! Everything between a controller action and the terminal. Adapted MVVM:
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!  (calls the       (Converter)        (Data)          (Driver)  ==(Text)==> [ View ]
//!   controller)                                                               (Layout)
//! ```
//!
//! ## Rules
//!
//! * **ViewModels hold raw data.** Scores stay numbers and timestamps stay
//!   timestamps; `--format json` is an API.
//! * **`ViewMode` is density, not shape.** Minimal prints ids for pipes,
//!   Compact one line per item, Standard adds context, Verbose everything
//!   except secrets.
//! * **JSON ignores `ViewMode`** and always dumps the full view model.
//! * **Notices drive the badge.** Presenters take the controller's notices;
//!   the most severe one is the badge, the rest are notes.
//!
//! ## Where does code go?
//!
//! | If you need to... | Go to... |
//! |-------------------|----------|
//! | Add a field to the JSON output | `view_models/` |
//! | Map an SDK result, pick suggestions | `presenters/` |
//! | Change colors or indentation | `views/` |
//! | Format a timestamp or truncate text | `formatters/` |
//! | Change what surrounds the content | `renderers/` |

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer};
pub use view_models::{CommandResultViewModel, Guidance, StatusBadge, StatusLevel, ViewMode};

pub mod cli;
pub mod error;
pub mod note;
pub mod storage;
pub mod store;

pub use error::{JotterError, Result};
pub use note::{Note, NoteColor, Theme};
pub use store::{NoteFilter, NoteStore};

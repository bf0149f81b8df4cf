mod commands;
mod handlers;

pub use commands::{CategoryAction, CategoryCommand, Cli, Commands, ThemeAction, ViewArgs};
pub use handlers::{
    handle_add, handle_category, handle_delete, handle_export, handle_get, handle_import,
    handle_init, handle_list, handle_move, handle_pin, handle_theme, handle_update,
};

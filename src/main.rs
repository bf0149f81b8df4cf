use clap::Parser;
use jotter::cli::{
    handle_add, handle_category, handle_delete, handle_export, handle_get, handle_import,
    handle_init, handle_list, handle_move, handle_pin, handle_theme, handle_update, Cli, Commands,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init => handle_init(),
        Commands::Add {
            title,
            content,
            tags,
            color,
            category,
            stdin,
            json,
        } => handle_add(title, content, tags, color, category, stdin, json),
        Commands::List { view, json } => handle_list(view, json),
        Commands::Get { id, json } => handle_get(id, json),
        Commands::Update {
            id,
            title,
            content,
            tags,
            color,
            category,
            json,
        } => handle_update(id, title, content, tags, color, category, json),
        Commands::Pin { id } => handle_pin(id),
        Commands::Delete { id, force } => handle_delete(id, force),
        Commands::Move { id, target, view } => handle_move(id, target, view),
        Commands::Export { file } => handle_export(file),
        Commands::Import { file } => handle_import(file),
        Commands::Category(cat) => handle_category(cat.action),
        Commands::Theme { action } => handle_theme(action),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

use std::fs;
use std::path::Path;

use literal_shelf::{LiteralClient, Shelf, UreqTransport, fetch_shelf};

use crate::cli::{Cli, Commands};
use crate::config::{load_env_file, resolve_credentials};
use crate::error::AppError;
use crate::output::{ShelfTableOptions, print_shelf_tables, shelf_json};
use crate::utils::filter_json;

/// Shelf JSON, optionally filtered through jq
fn render_json(shelf: &Shelf, jq_filter: Option<&str>) -> Result<String, AppError> {
    let json = shelf_json(shelf)?;
    match jq_filter {
        Some(filter) => Ok(filter_json(&json, filter)?),
        None => Ok(format!("{json}\n")),
    }
}

fn write_output(path: &Path, content: &str) -> Result<(), AppError> {
    let to_error = |source| AppError::WriteOutput {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(to_error)?;
    }
    fs::write(path, content).map_err(to_error)
}

pub(crate) fn run(cli: &Cli) -> Result<(), AppError> {
    let env_file = cli.env_file();
    let env_vars = load_env_file(&env_file);
    if cli.debug {
        eprintln!(
            "[debug] {} variables from {}",
            env_vars.len(),
            env_file.display()
        );
    }
    let credentials = resolve_credentials(|name| std::env::var(name).ok(), &env_vars);

    let client = LiteralClient::new(UreqTransport::new(cli.endpoint(), cli.timeout()));
    if cli.debug {
        eprintln!("[debug] endpoint {}", client.transport().endpoint());
    }
    let shelf = fetch_shelf(credentials.as_ref(), &client, cli.quiet);

    match cli.command() {
        Commands::Show => print_shelf_tables(
            &shelf,
            ShelfTableOptions {
                use_color: cli.use_color(),
                compact: cli.compact,
            },
        ),
        Commands::Fetch { output } => {
            let json = render_json(&shelf, cli.jq.as_deref())?;
            match output {
                Some(path) => {
                    write_output(&path, &json)?;
                    if !cli.quiet {
                        eprintln!("Wrote {}", path.display());
                    }
                }
                None => print!("{json}"),
            }
        }
    }

    Ok(())
}

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;

use pages_router::urls::{self, TableKind};
use pages_router::views::Views;
use pages_router::RouteTable;

#[derive(Parser)]
#[command(name = "pages-cli")]
#[command(about = "Inspect the site's URL tables", long_about = None)]
struct Cli {
    /// Route table to inspect
    #[arg(short, long, default_value = "pages", global = true)]
    table: TableKind,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every route in declaration order
    Routes {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show which handler serves a path
    Resolve { path: String },
    /// Print the URL path for a route name
    Reverse { name: String },
}

#[derive(Serialize)]
struct RouteRow<'a> {
    path: String,
    name: Option<&'a str>,
    handler: &'a str,
}

fn rows(table: &RouteTable) -> Vec<RouteRow<'_>> {
    table
        .routes()
        .map(|r| RouteRow {
            path: r.url_path(),
            name: r.name(),
            handler: r.handler().label(),
        })
        .collect()
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let table = urls::build(cli.table, &Views::placeholder());

    match cli.command {
        Commands::Routes { json } => {
            let rows = rows(&table);
            if json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                for row in rows {
                    println!(
                        "{:<20} {:<18} {}",
                        row.path,
                        row.name.unwrap_or("-"),
                        row.handler
                    );
                }
            }
        }
        Commands::Resolve { path } => match table.resolve(&path) {
            Ok(m) => println!("{}", m.route.handler().label()),
            Err(e) => {
                eprintln!("Error: {}", e);
                return Ok(ExitCode::FAILURE);
            }
        },
        Commands::Reverse { name } => match table.reverse(&name) {
            Some(path) => println!("{}", path),
            None => {
                eprintln!("Error: no route named {:?} in the {} table", name, cli.table);
                return Ok(ExitCode::FAILURE);
            }
        },
    }

    Ok(ExitCode::SUCCESS)
}

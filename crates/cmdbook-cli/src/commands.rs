use std::path::{Path, PathBuf};
use std::sync::Arc;

use colored::Colorize;

use cmdbook_server::{CmdbookServer, ServerConfig};
use cmdbook_service::CommandService;
use cmdbook_store::FileCommandStore;
use cmdbook_types::{Command as CommandRecord, CommandDraft, CommandId};

use crate::cli::*;

/// Catalog file used when `--data` is not passed.
const DEFAULT_CATALOG: &str = "cmdbook.json";

pub async fn run_command(cli: Cli) -> anyhow::Result<()> {
    let Cli {
        command,
        format,
        data,
        ..
    } = cli;
    match command {
        Command::Add(args) => cmd_add(args, &local_catalog(data), &format),
        Command::List(_) => cmd_list(&local_catalog(data), &format),
        Command::Get(args) => cmd_get(args, &local_catalog(data), &format),
        Command::Update(args) => cmd_update(args, &local_catalog(data), &format),
        Command::Rm(args) => cmd_rm(args, &local_catalog(data), &format),
        Command::Serve(args) => cmd_serve(args, data).await,
    }
}

fn local_catalog(data: Option<PathBuf>) -> PathBuf {
    data.unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG))
}

fn catalog_service(data: &Path) -> anyhow::Result<CommandService> {
    let store = FileCommandStore::open(data)?;
    Ok(CommandService::new(Arc::new(store)))
}

fn print_record(record: &CommandRecord) {
    println!("  How to:   {}", record.how_to);
    println!("  Platform: {}", record.platform.cyan());
    println!("  Command:  {}", record.command_line.bold());
}

fn cmd_add(args: AddArgs, data: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let service = catalog_service(data)?;
    let draft = CommandDraft::new(args.how_to, args.platform, args.command_line);
    let created = service.create(draft)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&created)?),
        OutputFormat::Text => {
            println!(
                "{} Added command {}",
                "✓".green().bold(),
                created.id.to_string().yellow()
            );
            print_record(&created);
        }
    }
    Ok(())
}

fn cmd_list(data: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let service = catalog_service(data)?;
    let commands = service.list()?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&commands)?),
        OutputFormat::Text => {
            if commands.is_empty() {
                println!("Catalog is empty.");
                return Ok(());
            }
            for record in &commands {
                println!(
                    "{}  [{}] {}",
                    record.id.to_string().yellow().bold(),
                    record.platform.cyan(),
                    record.how_to
                );
                println!("    {}", record.command_line.bold());
            }
        }
    }
    Ok(())
}

fn cmd_get(args: GetArgs, data: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let service = catalog_service(data)?;
    let record = service.get(CommandId::new(args.id))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&record)?),
        OutputFormat::Text => {
            println!("Command {}", record.id.to_string().yellow().bold());
            print_record(&record);
        }
    }
    Ok(())
}

fn cmd_update(args: UpdateArgs, data: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let service = catalog_service(data)?;
    let id = CommandId::new(args.id);
    let draft = CommandDraft::new(args.how_to, args.platform, args.command_line);
    service.update(id, CommandRecord::from_draft(id, draft))?;

    let updated = service.get(id)?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&updated)?),
        OutputFormat::Text => {
            println!(
                "{} Updated command {}",
                "✓".green().bold(),
                updated.id.to_string().yellow()
            );
            print_record(&updated);
        }
    }
    Ok(())
}

fn cmd_rm(args: RmArgs, data: &Path, format: &OutputFormat) -> anyhow::Result<()> {
    let service = catalog_service(data)?;
    let removed = service.delete(CommandId::new(args.id))?;
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&removed)?),
        OutputFormat::Text => {
            println!(
                "{} Removed command {} ({})",
                "✓".green().bold(),
                removed.id.to_string().yellow(),
                removed.how_to
            );
        }
    }
    Ok(())
}

/// Resolve the server settings for `serve`: explicit flags win over the
/// `--config` file, which wins over the defaults. Without a config file the
/// server is backed by the `--data` catalog (or its default); `--ephemeral`
/// drops the data file entirely.
fn serve_config(args: &ServeArgs, data: Option<PathBuf>) -> anyhow::Result<ServerConfig> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::load(path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = &args.bind {
        config.bind_addr = bind.parse()?;
    }
    if let Some(path) = data {
        config.data_path = Some(path);
    } else if args.config.is_none() {
        config.data_path = Some(PathBuf::from(DEFAULT_CATALOG));
    }
    if args.ephemeral {
        config.data_path = None;
    }
    Ok(config)
}

async fn cmd_serve(args: ServeArgs, data: Option<PathBuf>) -> anyhow::Result<()> {
    let config = serve_config(&args, data)?;

    match &config.data_path {
        Some(path) => println!(
            "Serving catalog {} on {}",
            path.display().to_string().bold(),
            config.bind_addr.to_string().yellow()
        ),
        None => println!(
            "Serving in-memory catalog on {}",
            config.bind_addr.to_string().yellow()
        ),
    }

    CmdbookServer::new(config)?.serve().await?;
    Ok(())
}

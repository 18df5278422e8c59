use super::logging;
use super::render::{print_messages, render_entry_list};
use super::setup::{Cli, Commands};
use clap::{CommandFactory, Parser};
use cx::api::CxApi;
use cx::config::CxConfig;
use cx::error::{CxError, Result};
use cx::store::fs::FileStore;
use std::path::Path;
use tracing::debug;

struct AppContext {
    api: CxApi<FileStore>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if cli.command.is_none() && cli.path.is_none() {
        Cli::command().print_help().map_err(CxError::Io)?;
        return Ok(());
    }

    let mut ctx = init_context(&cli)?;

    match (cli.command, cli.path) {
        (Some(Commands::Paste { persist }), _) => handle_paste(&mut ctx, persist),
        (Some(Commands::List), _) => handle_list(&ctx),
        (Some(Commands::Clear), _) => handle_clear(&mut ctx),
        (None, Some(path)) => handle_cut(&mut ctx, &path),
        (None, None) => Ok(()),
    }
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().map_err(CxError::Io)?;
    let config = CxConfig::load(cli.clipboard.clone())?;
    debug!(store = %config.store_path.display(), cwd = %cwd.display(), "context");

    let store = FileStore::new(config.store_path);
    Ok(AppContext {
        api: CxApi::new(store, cwd),
    })
}

fn handle_cut(ctx: &mut AppContext, path: &Path) -> Result<()> {
    let result = ctx.api.cut(path)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_paste(ctx: &mut AppContext, persist: bool) -> Result<()> {
    let result = ctx.api.paste(persist)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(ctx: &AppContext) -> Result<()> {
    let result = ctx.api.list()?;
    print!("{}", render_entry_list(&result.listed_entries));
    print_messages(&result.messages);
    Ok(())
}

fn handle_clear(ctx: &mut AppContext) -> Result<()> {
    let result = ctx.api.clear()?;
    print_messages(&result.messages);
    Ok(())
}

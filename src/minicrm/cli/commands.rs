use super::menu::Menu;
use super::setup::{init_tracing, Cli};
use clap::Parser;
use directories::ProjectDirs;
use minicrm::api::ContactService;
use minicrm::config::{Backend, CrmConfig};
use minicrm::error::Result;
use minicrm::notify;
use minicrm::store::{open_store, ContactStore};
use std::path::PathBuf;

struct AppContext {
    service: ContactService<Box<dyn ContactStore>>,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut ctx = init_context(&cli)?;

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(&mut ctx.service, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));

    let config_dir = cli
        .config_dir
        .clone()
        .or_else(default_config_dir)
        .unwrap_or_else(|| cwd.clone());
    let config = CrmConfig::load(&config_dir)?;

    let backend = if cli.memory {
        Backend::Memory
    } else {
        config.backend
    };
    let data_file = cli
        .file
        .clone()
        .unwrap_or_else(|| config.data_file_in(&cwd));
    tracing::debug!(
        config_dir = %config_dir.display(),
        ?backend,
        data_file = %data_file.display(),
        "starting"
    );

    let store = open_store(backend, &data_file)?;
    let mut service = ContactService::new(store);
    if !cli.quiet {
        service = service.with_notifiers(notify::from_config(&config.notifiers));
    }

    Ok(AppContext { service })
}

fn default_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("com", "minicrm", "minicrm")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .filter(|dir| dir.exists())
}

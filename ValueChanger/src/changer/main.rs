//! Value Changer - console front end
//!
//! Sets Gorilla Tag's brightness channels to the maximum and changes the
//! stored player name. The game must have been started at least once so
//! its registry key exists.

#[cfg(windows)]
fn main() -> anyhow::Result<()> {
    use anyhow::Context;
    use std::io;
    use value_changer::config::{AnimationConfig, GORILLA_TAG};
    use value_changer::console::WinConsole;
    use value_changer::registry::RegistryStore;
    use value_changer::ui::Ui;
    use value_changer::utils::logging;

    logging::init();
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Value Changer starting");

    let store = RegistryStore::new(GORILLA_TAG);
    let mut ui = Ui::new(WinConsole::new(), io::stdout(), AnimationConfig::from_env());
    let mut input = io::stdin().lock();

    value_changer::app::run(&mut ui, &store, &mut input).context("Console session failed")?;

    tracing::info!("Value Changer exiting");
    Ok(())
}

#[cfg(not(windows))]
fn main() -> anyhow::Result<()> {
    anyhow::bail!("This application is Windows-only.")
}

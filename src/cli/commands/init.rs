use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file with the default thresholds
pub fn handle(cli: &Cli) -> AppResult<()> {
    println!("⚙️  Initializing NapMap…");

    if cli.test {
        messages::info("Test mode: configuration file left untouched.");
        return Ok(());
    }

    let cfg = Config::default();
    let path = cfg.save(cli.config.as_deref())?;

    println!("📄 Config file : {}", path.display());
    messages::success("NapMap initialization completed!");
    Ok(())
}

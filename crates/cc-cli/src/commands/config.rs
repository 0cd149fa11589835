use cc_core::config::Config;
use cc_core::settings::SettingsManager;

/// Print the effective configuration and where it was read from.
pub fn show(settings: &SettingsManager, config: &Config) -> anyhow::Result<()> {
    let source = if settings.path().exists() {
        settings.path().display().to_string()
    } else {
        format!("{} (not found, using defaults)", settings.path().display())
    };
    println!("# {source}");
    print!("{}", config.to_toml()?);
    Ok(())
}

/// Write the default configuration. Refuses to clobber an existing file
/// unless `force` is set.
pub fn init(settings: &SettingsManager, force: bool) -> anyhow::Result<()> {
    if settings.path().exists() && !force {
        anyhow::bail!(
            "{} already exists (use --force to overwrite)",
            settings.path().display()
        );
    }
    settings.save(&Config::default())?;
    tracing::info!(path = %settings.path().display(), "settings written");
    println!("wrote {}", settings.path().display());
    Ok(())
}

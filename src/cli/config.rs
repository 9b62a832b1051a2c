//! Config command

use crate::config::{Settings, SignupPaths};
use crate::error::SignupResult;

/// Handle `signup config`
///
/// `stored` is what `config.json` holds (or the defaults); `effective`
/// includes command-line and environment overrides. The file is written
/// with `stored` on first run so overrides never leak into it.
pub fn handle_config_command(
    paths: &SignupPaths,
    stored: &Settings,
    effective: &Settings,
) -> SignupResult<()> {
    let created = !paths.settings_file().exists();
    if created {
        stored.save(paths)?;
    }

    println!("signup-cli Configuration");
    println!("========================");
    println!("Data directory: {}", paths.base_dir().display());
    println!("Config file:    {}", paths.settings_file().display());
    println!("Log file:       {}", paths.log_file().display());
    if created {
        println!();
        println!("Created config file with default settings.");
    }
    println!();
    println!("Settings:");
    println!("  API base URL:         {}", effective.api_base_url);
    println!("  Signup path:          {}", effective.signup_path);
    println!("  Signup endpoint:      {}", effective.signup_url());
    println!("  Log level:            {}", effective.log_level);
    println!("  Default address type: {}", effective.default_address_type);

    Ok(())
}

//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# chanlint configuration

# Severity threshold for a failing exit code: "info", "warning", or "error"
# fail_on = "warning"

[analyzer]
# Root directory to analyze (default: current directory)
# root = "./cmd"

# Glob patterns to exclude from analysis
exclude = [
    "**/vendor/**",
    "**/testdata/**",
]

# Respect .gitignore files
respect_gitignore = true

# Rule configurations
# Each rule can be enabled/disabled and have its severity overridden

[rules.send-without-select]
enabled = true
# severity = "error"  # Override default severity
allow_in_tests = false

[rules.unbuffered-channel]
enabled = true
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("chanlint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created chanlint.toml");
    println!("\nNext steps:");
    println!("  1. Edit chanlint.toml to configure rules");
    println!("  2. Run: chanlint check");

    Ok(())
}

#[cfg(test)]
mod tests {
    use chanlint_core::Config;

    #[test]
    fn default_config_template_parses() {
        let config = Config::parse(super::DEFAULT_CONFIG).unwrap();
        assert!(config.is_rule_enabled("send-without-select"));
        assert!(config.is_rule_enabled("unbuffered-channel"));
    }
}

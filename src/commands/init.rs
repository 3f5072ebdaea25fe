use std::io::{self, Write};

use crate::config::Config;
use crate::error::{IssuesError, Result};
use crate::state::DEFAULT_PATH;

fn ask(question: &str) -> Result<String> {
    print!("{question}");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}

pub async fn run() -> Result<()> {
    let config_path = Config::config_path()?;

    if config_path.exists() {
        let answer = ask(&format!(
            "Config file already exists at {}. Overwrite? [y/N] ",
            config_path.display()
        ))?;

        if !answer.eq_ignore_ascii_case("y") {
            println!("Aborted.");
            return Ok(());
        }
    }

    println!("gh-issues Configuration");
    println!("=======================\n");

    let token = ask(
        "Enter a GitHub personal access token (create one at https://github.com/settings/tokens): ",
    )?;
    if token.is_empty() {
        return Err(IssuesError::MissingToken);
    }

    let default_path = ask(&format!("Default repository [{DEFAULT_PATH}]: "))?;

    let config = Config {
        token: Some(token),
        default_path: Some(default_path).filter(|path| !path.is_empty()),
        api_url: None,
    };

    let write_error = |source: io::Error| IssuesError::ConfigWrite {
        path: config_path.clone(),
        source,
    };

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent).map_err(write_error)?;
    }

    let contents = toml::to_string(&config).map_err(|e| {
        write_error(io::Error::new(io::ErrorKind::InvalidData, e.to_string()))
    })?;
    std::fs::write(&config_path, contents).map_err(write_error)?;

    println!("\nConfig saved to {}", config_path.display());
    println!("You can now use 'gh-issues' commands!");

    Ok(())
}

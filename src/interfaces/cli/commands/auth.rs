//! Login, register, and logout commands.

use std::sync::Arc;

use colored::Colorize;

use crate::client::{ApiClient, UsersClient};
use crate::interfaces::cli::CliError;

fn obtain_password(password: Option<String>) -> Result<String, CliError> {
    if let Some(password) = password {
        return Ok(password);
    }
    print!("Password: ");
    use std::io::Write;
    std::io::stdout()
        .flush()
        .map_err(|e| CliError::CommandError(e.to_string()))?;
    rpassword::read_password()
        .map_err(|e| CliError::CommandError(format!("Failed to read password: {}", e)))
}

pub async fn login(
    api: Arc<ApiClient>,
    user_name: String,
    password: Option<String>,
) -> Result<(), CliError> {
    let password = obtain_password(password)?;
    let users = UsersClient::new(api.clone());
    let response = users.login(&user_name, &password).await?;

    let role = if response.roles == 0 { "admin" } else { "operator" };
    println!(
        "{} Logged in as {} ({})",
        "✓".bold().green(),
        user_name.cyan(),
        role
    );
    Ok(())
}

pub async fn register(
    api: Arc<ApiClient>,
    user_name: String,
    password: Option<String>,
) -> Result<(), CliError> {
    let password = obtain_password(password)?;
    let users = UsersClient::new(api);
    users.register(&user_name, &password).await?;
    println!(
        "{} Registered operator {}",
        "✓".bold().green(),
        user_name.cyan()
    );
    Ok(())
}

pub fn logout(api: Arc<ApiClient>) -> Result<(), CliError> {
    api.session().clear()?;
    println!("{} Session cleared", "✓".bold().green());
    Ok(())
}

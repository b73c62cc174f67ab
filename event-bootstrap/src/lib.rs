pub mod cli;
pub mod context;

pub use cli::{execute, Args, Command};

use crate::context::AppContext;

pub async fn run(command: Command) -> anyhow::Result<()> {
    let context = AppContext::new().await?;
    let output = execute(&context.state, command).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

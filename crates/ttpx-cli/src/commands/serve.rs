//! Web server command.

use std::sync::Arc;

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use ttpx_core::TtpxError;
use ttpx_llm::GeminiClient;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,

    /// Gemini model used for extraction
    #[arg(long, default_value = ttpx_llm::DEFAULT_MODEL)]
    pub model: String,

    /// Gemini API key
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,
}

pub async fn execute(args: ServeArgs) -> Result<()> {
    // Credential resolution happens once, here, before the server accepts
    // any input. The client itself never reads the environment.
    let api_key = args.api_key.ok_or_else(|| {
        TtpxError::config(
            "Gemini API key not found. Pass --api-key or set the GEMINI_API_KEY environment variable.",
        )
    })?;

    let client = Arc::new(GeminiClient::new(api_key, args.model)?);
    tracing::info!(model = %client.model(), "Credential resolved, starting server");

    println!();
    println!(
        "  {} {}",
        "TTPX".cyan().bold(),
        "MITRE ATT&CK TTP Extractor".bold()
    );
    println!();
    println!(
        "  {}   http://{}:{}",
        "Page".green(),
        args.host,
        args.port
    );
    println!(
        "  {}    http://{}:{}/api",
        "API".green(),
        args.host,
        args.port
    );
    println!("  {}  {}", "Model".green(), client.model());
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    ttpx_web::run_server(client, &args.host, args.port).await?;

    Ok(())
}

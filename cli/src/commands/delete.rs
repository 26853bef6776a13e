//! DELETE command - Delete a note.

use anyhow::Result;
use clap::Args;
use colored::Colorize;

use super::send_request;

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    /// Note ID to delete
    pub id: u64,

    /// Skip confirmation prompt (for non-interactive use)
    #[arg(long, short = 'y')]
    pub yes: bool,
}

/// Execute the delete command.
pub async fn execute(
    client: &reqwest::Client,
    base_url: &str,
    human: bool,
    args: DeleteArgs,
) -> Result<()> {
    // Confirmation prompt for interactive use
    if human && !args.yes {
        eprint!(
            "{} Delete note {}? [y/N] ",
            "Warning:".yellow().bold(),
            args.id
        );

        use std::io::Write;
        std::io::stderr().flush()?;

        let mut input = String::new();
        std::io::stdin().read_line(&mut input)?;

        if !input.trim().eq_ignore_ascii_case("y") {
            eprintln!("Aborted.");
            return Ok(());
        }
    }

    let url = format!("{}/notes/{}", base_url, args.id);
    send_request(client.delete(&url)).await?;

    if human {
        println!("{} {}", "Deleted note".green().bold(), args.id);
    } else {
        println!("{}", serde_json::json!({ "id": args.id, "deleted": true }));
    }
    Ok(())
}

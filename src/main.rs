use anyhow::Context;
use clap::Parser;
use rfen_sync::cli::{args::Args, commands};
use std::process;

fn main() -> anyhow::Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // If no subcommand was provided, show help and available commands
    let Some(command) = args.command else {
        show_help_and_commands();
        return Ok(());
    };

    // Create async runtime and run the selected command
    let runtime = tokio::runtime::Runtime::new().context("failed to create async runtime")?;

    match runtime.block_on(commands::run(command)) {
        Ok(_stats) => {
            // Success - the summary has already been reported by the command
            Ok(())
        }
        Err(error) => {
            eprintln!("Error: {:#}", error);
            process::exit(1);
        }
    }
}

/// Show help information and available commands when no subcommand is provided
fn show_help_and_commands() {
    println!("RFEN Sync - Water Polo Fixtures and Standings");
    println!("=============================================");
    println!();
    println!("Extract a team's recent and upcoming fixtures plus the group standings");
    println!("from the RFEN results site and sync them to Firebase Realtime Database.");
    println!();
    println!("USAGE:");
    println!("    rfen-sync <COMMAND> [OPTIONS]");
    println!();
    println!("COMMANDS:");
    println!("    sync      Run the extraction pipeline and write the export document");
    println!("    venues    Report the static venue table");
    println!("    help      Show this help message or help for specific commands");
    println!();
    println!("OPTIONS:");
    println!("    -h, --help       Show help information");
    println!("    -V, --version    Show version information");
    println!();
    println!("EXAMPLES:");
    println!("    # Write the export document to the default local file:");
    println!("    rfen-sync sync");
    println!();
    println!("    # Upload to a Realtime Database instance:");
    println!("    FIREBASE_AUTH_TOKEN=... rfen-sync sync \\");
    println!("        --database-url https://my-app.europe-west1.firebasedatabase.app");
    println!();
    println!("    # Track a different team and group:");
    println!("    rfen-sync sync --team-id 14490 --team-name \"C.n. Terrassa\" --group-id 200");
    println!();
    println!("    # List known venues as JSON:");
    println!("    rfen-sync venues --format json");
    println!();
    println!("For detailed help on any command, use:");
    println!("    rfen-sync <COMMAND> --help");
}

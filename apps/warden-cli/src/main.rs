//! Warden CLI
//!
//! Thin operator shell over the automation flows. Every operation that
//! touches the game runs on the single worker thread; the panel-facing half
//! of the roster flow needs a browser session and is hosted by the desktop
//! shell, so this binary exposes capture only.

use std::env;

use admin_flows::{AppPaths, CommandFlow, ROSTER_COMMAND};
use anyhow::{bail, Result};
use console_automation::{ClipboardBridge, ConsoleAutomation, ConsoleConfig};
use shared_model::{AdminCommand, BrowserKind, CommandResult};
use task_worker::Worker;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("warden_cli=info".parse()?)
                .add_directive("console_automation=info".parse()?)
                .add_directive("window_focus=info".parse()?),
        )
        .init();

    let mut args: Vec<String> = env::args().skip(1).collect();
    let json = if let Some(pos) = args.iter().position(|a| a == "--json") {
        args.remove(pos);
        true
    } else {
        false
    };

    match args.first().map(String::as_str) {
        Some("exec") => exec_from_clipboard(json),
        Some("capture") => capture_roster(),
        Some("check") => check_command(&args[1..]),
        Some("profile-dir") => print_profile_dir(&args[1..]),
        Some(other) => {
            print_usage();
            bail!("Unknown command: {other}");
        }
        None => {
            print_usage();
            Ok(())
        }
    }
}

fn print_usage() {
    eprintln!(
        "Usage: warden-cli <command>\n\n\
         Commands:\n\
         \x20 exec [--json]                 Execute the admin command on the clipboard\n\
         \x20 capture                       Capture the player roster via the game console\n\
         \x20 check <command...>            Validate an admin command without executing it\n\
         \x20 profile-dir <browser> <user>  Print the browser profile directory for a user"
    );
}

fn exec_from_clipboard(json: bool) -> Result<()> {
    let worker = Worker::spawn();
    let handle = worker.submit(|| -> Result<CommandResult> {
        let mut console = ConsoleAutomation::with_system(ConsoleConfig::default())?;
        Ok(CommandFlow::new(&mut console).execute_from_clipboard())
    })?;

    let result = handle.wait()??;
    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        if !result.success {
            std::process::exit(1);
        }
        return Ok(());
    }

    if !result.success {
        bail!("{}", result.message);
    }
    if let Some(command) = &result.executed_command {
        info!(command = %command, "executed");
    }
    println!("{}", result.message);
    Ok(())
}

fn capture_roster() -> Result<()> {
    let worker = Worker::spawn();
    let handle = worker.submit(|| -> Result<String> {
        let mut console = ConsoleAutomation::with_system(ConsoleConfig::default())?;
        let roster = ClipboardBridge::new(&mut console).capture(ROSTER_COMMAND)?;
        Ok(roster)
    })?;

    let roster = handle.wait()??;
    println!("{roster}");
    Ok(())
}

fn check_command(args: &[String]) -> Result<()> {
    let text = args.join(" ");
    match AdminCommand::parse(&text) {
        Ok(command) => {
            println!("{command}");
            Ok(())
        }
        Err(e) => bail!("{e}"),
    }
}

fn print_profile_dir(args: &[String]) -> Result<()> {
    let [browser, username] = args else {
        bail!("Usage: warden-cli profile-dir <chrome|edge|firefox> <username>");
    };
    let browser = match browser.to_lowercase().as_str() {
        "chrome" => BrowserKind::Chrome,
        "edge" => BrowserKind::Edge,
        "firefox" => BrowserKind::Firefox,
        other => bail!("Unknown browser: {other}"),
    };
    let dir = AppPaths::default_for_os().profile_dir(browser, username);
    println!("{}", dir.display());
    Ok(())
}

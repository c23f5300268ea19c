mod render;

use std::io::{BufRead, Write};

use clap::Parser;
use niftyboard_table::{fetch_rows, DisplayConfig, TableSession, TableState};
use tracing_subscriber::EnvFilter;

/// NSE index table in your terminal.
#[derive(Parser, Debug)]
#[command(name = "niftyboard", version, about)]
struct Args {
    /// Base URL of the niftyboard proxy server
    #[arg(long, default_value = "http://127.0.0.1:8080")]
    server_url: String,

    /// Use the dark table theme
    #[arg(long)]
    dark: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let display = DisplayConfig {
        dark_mode: args.dark,
    };

    let client = reqwest::Client::new();
    let (mut session, ticket) = TableSession::new();

    println!("Loading stock data...");
    let outcome = fetch_rows(&client, &args.server_url).await;
    session.apply(ticket, outcome);

    if let TableState::Failed { message } = session.state() {
        eprintln!("{}", message);
        std::process::exit(1);
    }

    render::draw(&session, display);

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();
    let mut line = String::new();
    loop {
        write!(stdout, "page> ")?;
        stdout.flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        let command = line.trim();
        let current = session.current_page().unwrap_or(1);
        match command {
            "" => continue,
            "q" | "quit" => break,
            "n" | "next" => session.go_to_page(current + 1),
            "p" | "prev" => session.go_to_page(current.saturating_sub(1)),
            "f" | "first" => session.go_to_page(1),
            "l" | "last" => {
                if let Some(total) = session.total_pages() {
                    session.go_to_page(total);
                }
            }
            other => match other.parse::<usize>() {
                Ok(page) => session.go_to_page(page),
                Err(_) => {
                    println!("commands: n(ext), p(rev), f(irst), l(ast), <page>, q(uit)");
                    continue;
                }
            },
        }

        render::draw(&session, display);
    }

    Ok(())
}

#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;

use anyhow::Error;
use yansi::Paint;

use crate::application::cli;
use crate::application::cli::Run;
use crate::application::ui;
use crate::domain::services::Pause;
use crate::infrastructure::transports::TransportManager;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "Pause couldn't continue.\n\nVersion: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            err
        ))
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 RUST_LOG=pause {args}");
        eprintln!(
            "\nDebug logs are written to {}",
            cli::log_dir().join("debug.log").to_string_lossy()
        );
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

async fn run(mode: Run) -> anyhow::Result<()> {
    let pause = Pause::new(TransportManager::fetcher().await?);

    match mode {
        Run::Ask => return ui::ask(pause).await,
        Run::Screen => return ui::start(pause).await,
    }
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let mut log_guard = None;
    if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains("pause")
    {
        let file_appender = tracing_appender::rolling::never(cli::log_dir(), "debug.log");
        let (writer, guard) = tracing_appender::non_blocking(file_appender);
        log_guard = Some(guard);

        tracing_subscriber::fmt()
            .json()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(writer)
            .init();
    }

    let mode = match cli::parse().await {
        Ok(Some(mode)) => mode,
        Ok(None) => {
            drop(log_guard);
            process::exit(0);
        }
        Err(err) => {
            drop(log_guard);
            handle_error(err);
            return;
        }
    };

    if let Err(err) = run(mode).await {
        drop(log_guard);
        handle_error(err);
        return;
    }

    drop(log_guard);
    process::exit(0);
}

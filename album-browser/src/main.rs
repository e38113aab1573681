mod config;
mod context;
mod loader;
mod router;
mod views;

use crate::config::Config;
use crate::context::{Context, ContextPointer};
use album_client::AlbumClient;
use simplelog::{ColorChoice, TermLogger, TerminalMode};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load()?;
    let log_level = config.log_level().parse()?;
    TermLogger::init(
        log_level,
        simplelog::Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )?;

    let album_client = AlbumClient::new(config.api_url())?;
    let context: ContextPointer = Arc::new(Context::new(album_client, config));

    println!("album browser");
    println!("enter a path (/, /albums, /albums?page=N), 'clear', 'stats', or 'quit'");

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }

        match line.trim() {
            "" => continue,
            "quit" | "exit" => break,
            "clear" => {
                context.album_client().clear_cache();
                println!("cache cleared");
            }
            "stats" => println!("{:?}", context.album_client().cache_stats()),
            target => {
                for rendered in router::navigate(&context, target).await {
                    println!("{rendered}");
                }
            }
        }
    }

    Ok(())
}

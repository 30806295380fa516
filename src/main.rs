mod cli;
mod clipboard;
mod config;
mod error;
mod interactive;
mod providers;
mod translator;
mod words;

use cli::CliHandler;
use interactive::InteractiveMode;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().collect();

    let rt = tokio::runtime::Runtime::new()?;

    if args.len() > 1 {
        // CLI mode: one-shot translation or info command
        let handler = CliHandler::new()?;
        rt.block_on(handler.process_args(args))
    } else {
        // No arguments: interactive terminal mode
        let mut interactive = InteractiveMode::new()?;
        rt.block_on(interactive.start())
    }
}

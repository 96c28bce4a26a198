use anyhow::{Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use video_player::command::{Command, HELP_TEXT};
use video_player::player::RandomPolicy;
use video_player::{library, Controller, PlayerConfig};

#[derive(Parser, Debug)]
#[command(name = "video-player")]
#[command(about = "Interactive in-memory video player simulator", long_about = None)]
struct Args {
    /// Path to a videos.txt catalog (default: built-in catalog)
    #[arg(short = 'c', long)]
    catalog: Option<String>,

    /// How PLAY_RANDOM picks a video
    #[arg(long, value_enum, default_value_t = RandomPolicy::Random)]
    random: RandomPolicy,

    /// Verbose logging
    #[arg(short = 'v', long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize logging (stderr, so stdout stays the player's channel)
    let log_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let mut config = PlayerConfig::new().with_random_policy(args.random);
    if let Some(path) = &args.catalog {
        // Expand ~ in path
        let path = shellexpand::tilde(path);
        config = config.with_catalog(PathBuf::from(path.as_ref()));
    }

    let catalog = match &config.catalog_path {
        Some(path) => library::load_catalog(path)?,
        None => library::default_catalog(),
    };
    log::debug!("Catalog ready: {} videos", catalog.len());

    let mut player =
        Controller::new(catalog, io::stdout()).with_random_policy(config.random_policy);

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    println!("Hello and welcome to the video player, what would you like to do?");
    println!("Enter HELP for a list of available commands or EXIT to terminate.");

    loop {
        print!("> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("Failed to read command")?;

        match Command::parse(&line) {
            Ok(None) => continue,
            Ok(Some(Command::Exit)) => break,
            Ok(Some(Command::Help)) => println!("{}", HELP_TEXT),
            Ok(Some(command)) => {
                if let Err(e) = command.run(&mut player, &mut lines) {
                    log::debug!("{:?} refused: {:?}", command, e);
                }
            }
            Err(e) => println!("{}", e),
        }
    }

    println!("The video player has now terminated its execution. Thank you and goodbye!");
    Ok(())
}

use clap::{Parser, Subcommand};
use echoroom_core::{build_prompt, CoreConfig, Mood, MoodClassifier, DEFAULT_MOOD};
use std::io::Read;

#[derive(Parser)]
#[command(name = "echoroom")]
#[command(about = "EchoRoom journal mood classifier CLI")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the moods the model may answer with
    Moods,
    /// Print the prompt that would be sent for a journal entry
    Prompt {
        /// Journal entry (read from stdin when omitted)
        text: Option<String>,
    },
    /// Classify a journal entry using the configured Gemini API
    Classify {
        /// Journal entry (read from stdin when omitted)
        text: Option<String>,
    },
}

/// Use the argument if given, otherwise read the whole of stdin.
fn entry_text(text: Option<String>) -> std::io::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Moods) => {
            for mood in Mood::vocabulary() {
                println!("{}", mood);
            }
            println!("(fallback: {})", DEFAULT_MOOD);
        }
        Some(Commands::Prompt { text }) => {
            println!("{}", build_prompt(&entry_text(text)?));
        }
        Some(Commands::Classify { text }) => {
            let text = entry_text(text)?;
            let cfg = CoreConfig::from_env()?;
            let classifier = MoodClassifier::from_config(&cfg)?;
            match classifier.classify(&text).await {
                Ok(mood) => println!("{}", mood),
                Err(e) => {
                    eprintln!("Error classifying entry: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            println!("Use 'echoroom --help' for commands");
        }
    }

    Ok(())
}

mod analysis;
mod commands;
mod gateway;
mod i18n;
mod init;

use analysis::Services;
use clap::{Parser, Subcommand};
use rakshak_channels::{ConsoleChannel, TelegramChannel};
use rakshak_core::{
    config,
    traits::{Analyzer, Channel, Translator, UrlScanner},
};
use rakshak_detect::Rulebook;
use rakshak_services::{GeminiAnalyzer, GoogleTranslate, SafeBrowsing};
use std::collections::HashMap;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "rakshak",
    version,
    about = "🛡 Rakshak — scam-guidance chat bot for Telegram and the terminal"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive setup — write a config file.
    Init,
    /// Start the Telegram bot.
    Start,
    /// Talk to the bot in the terminal.
    Chat,
    /// Check config and service availability.
    Status,
    /// Analyze a message from the command line.
    Analyze {
        /// The message to analyze.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Check a URL from the command line.
    CheckUrl {
        /// The URL to look up.
        url: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    match cli.command {
        Commands::Init => init::run(&cli.config).await?,
        Commands::Start => {
            let cfg = config::load(&cli.config)?;
            let rulebook = Rulebook::bundled()?;
            let services = build_services(&cfg);

            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();

            if let Some(ref tg) = cfg.channel.telegram {
                if tg.enabled {
                    if tg.bot_token.is_empty() {
                        anyhow::bail!(
                            "Telegram is enabled but bot_token is empty. \
                             Set it in config.toml or TELEGRAM_BOT_TOKEN env var."
                        );
                    }
                    let channel = TelegramChannel::new(tg.clone());
                    channels.insert("telegram".to_string(), Arc::new(channel));
                }
            }

            if channels.is_empty() {
                anyhow::bail!(
                    "No channels enabled. Enable [channel.telegram] in config.toml, \
                     or use `rakshak chat` for a terminal session."
                );
            }

            println!("🛡 Rakshak — starting bot...");
            let gw = Arc::new(gateway::Gateway::new(
                channels,
                rulebook,
                services,
                cfg.bot.default_language.clone(),
            ));
            gw.run().await?;
        }
        Commands::Chat => {
            let cfg = config::load(&cli.config)?;
            let rulebook = Rulebook::bundled()?;
            let services = build_services(&cfg);

            let mut channels: HashMap<String, Arc<dyn Channel>> = HashMap::new();
            channels.insert("console".to_string(), Arc::new(ConsoleChannel::new()));

            println!("{}", init::LOGO);
            println!("Type /start for the menu, /help for commands, ctrl-c to quit.\n");

            let gw = Arc::new(gateway::Gateway::new(
                channels,
                rulebook,
                services,
                cfg.bot.default_language.clone(),
            ));
            gw.run().await?;
        }
        Commands::Status => {
            let cfg = config::load(&cli.config)?;
            println!("🛡 Rakshak — Status Check\n");
            println!("Config: {}", cli.config);
            println!("Default language: {}", cfg.bot.default_language);
            println!();

            match Rulebook::bundled() {
                Ok(book) => println!("  rulebook: {} categories", book.len()),
                Err(e) => println!("  rulebook: BROKEN ({e})"),
            }

            if let Some(ref tg) = cfg.channel.telegram {
                println!(
                    "  telegram: {}",
                    if tg.enabled && !tg.bot_token.is_empty() {
                        "configured"
                    } else if tg.enabled {
                        "enabled but missing bot_token"
                    } else {
                        "disabled"
                    }
                );
            } else {
                println!("  telegram: not configured");
            }

            let services = build_services(&cfg);
            match services.analyzer {
                Some(a) => println!(
                    "  gemini: {}",
                    if a.is_available().await {
                        "available"
                    } else {
                        "configured but unreachable"
                    }
                ),
                None => println!("  gemini: not configured"),
            }
            println!(
                "  safe-browsing: {}",
                if services.url_scanner.is_some() {
                    "configured"
                } else {
                    "not configured"
                }
            );
            println!(
                "  translate: {}",
                if services.translator.is_some() {
                    "configured"
                } else {
                    "not configured"
                }
            );
        }
        Commands::Analyze { message } => {
            if message.is_empty() {
                anyhow::bail!("no message provided. Usage: rakshak analyze <message>");
            }
            let text = message.join(" ");
            let cfg = config::load(&cli.config)?;
            let rulebook = Rulebook::bundled()?;
            let services = build_services(&cfg);

            let outcome = analysis::analyze_text(
                &rulebook,
                &services,
                &text,
                &cfg.bot.default_language,
            )
            .await;
            println!("{}", outcome.text);
            if outcome.emergency {
                println!("\n{}", i18n::emergency(&cfg.bot.default_language));
            }
        }
        Commands::CheckUrl { url } => {
            let cfg = config::load(&cli.config)?;
            let services = build_services(&cfg);
            let reply =
                analysis::check_url(&services, &url, &cfg.bot.default_language).await;
            println!("{reply}");
        }
    }

    Ok(())
}

/// Build the configured external services. Anything disabled or keyless
/// stays `None` and the bot runs on the local engine alone.
fn build_services(cfg: &config::Config) -> Services {
    let analyzer: Option<Arc<dyn Analyzer>> = cfg
        .service
        .gemini
        .as_ref()
        .filter(|g| g.enabled && !g.api_key.is_empty())
        .map(|g| Arc::new(GeminiAnalyzer::from_config(g)) as Arc<dyn Analyzer>);

    let url_scanner: Option<Arc<dyn UrlScanner>> = cfg
        .service
        .safe_browsing
        .as_ref()
        .filter(|s| s.enabled && !s.api_key.is_empty())
        .map(|s| Arc::new(SafeBrowsing::from_config(s)) as Arc<dyn UrlScanner>);

    let translator: Option<Arc<dyn Translator>> = cfg
        .service
        .translate
        .as_ref()
        .filter(|t| t.enabled && !t.api_key.is_empty())
        .map(|t| Arc::new(GoogleTranslate::from_config(t)) as Arc<dyn Translator>);

    Services {
        analyzer,
        url_scanner,
        translator,
    }
}

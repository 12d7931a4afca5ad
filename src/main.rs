use clap::{Parser, Subcommand};
use colored::Colorize;
use soundex::{batch, code_difference, Config, OutputFormat, SeedPolicy};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "soundex")]
#[command(about = "Encode names with American Soundex", long_about = None)]
struct Args {
    /// Directory holding soundex.toml and .env
    #[arg(long, global = true, default_value = ".")]
    config_dir: PathBuf,

    /// First-character policy (literal, require-alphabetic)
    #[arg(long, global = true)]
    policy: Option<SeedPolicy>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encode names from arguments, a file, or stdin
    Encode {
        /// Names to encode (reads --file or stdin when empty)
        names: Vec<String>,

        /// File with one name per line
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Output format (text, json)
        #[arg(long)]
        format: Option<OutputFormat>,
    },

    /// Compare two names
    Compare {
        first: String,
        second: String,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "soundex=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let mut config = Config::load(&args.config_dir)?;
    if let Some(policy) = args.policy {
        config.seed_policy = policy;
    }
    tracing::debug!("Seed policy: {}", config.seed_policy);

    match args.command {
        Command::Encode {
            names,
            file,
            format,
        } => {
            if let Some(format) = format {
                config.format = format;
            }
            encode(&config, names, file)
        }
        Command::Compare { first, second } => {
            compare(&config, &first, &second);
            Ok(())
        }
    }
}

fn encode(config: &Config, names: Vec<String>, file: Option<PathBuf>) -> anyhow::Result<()> {
    let encoder = config.encoder();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let summary = if !names.is_empty() {
        batch::encode_names(&encoder, names.iter().map(String::as_str), &mut out, config.format)?
    } else if let Some(path) = file {
        tracing::info!("Encoding names from {}", path.display());
        let reader = BufReader::new(File::open(&path)?);
        batch::encode_lines(&encoder, reader, &mut out, config.into())?
    } else {
        batch::encode_lines(&encoder, io::stdin().lock(), &mut out, config.into())?
    };

    tracing::info!(
        "Encoded {} name(s), {} default code(s)",
        summary.encoded,
        summary.defaults
    );
    Ok(())
}

fn compare(config: &Config, first: &str, second: &str) {
    let encoder = config.encoder();
    let a = encoder.encode(Some(first));
    let b = encoder.encode(Some(second));
    let alike = encoder.sounds_like(Some(first), Some(second));

    println!("{}\t{}", first, a.to_string().cyan());
    println!("{}\t{}", second, b.to_string().cyan());
    println!(
        "{} {}",
        "difference:".dimmed(),
        code_difference(&a, &b)
    );
    if alike {
        println!("{}", "sounds alike".green().bold());
    } else {
        println!("{}", "sounds different".yellow());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "soundex",
            "encode",
            "--config-dir",
            "conf",
            "--policy",
            "require-alphabetic",
            "Bob",
        ])
        .unwrap();
        assert_eq!(args.config_dir, PathBuf::from("conf"));
        assert_eq!(args.policy, Some(SeedPolicy::RequireAlphabetic));
        match args.command {
            Command::Encode { names, .. } => assert_eq!(names, vec!["Bob".to_string()]),
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_config_dir_defaults_to_current() {
        let args = Args::try_parse_from(["soundex", "compare", "Smith", "Smyth"]).unwrap();
        assert_eq!(args.config_dir, PathBuf::from("."));
        assert!(args.policy.is_none());
    }
}

#![forbid(unsafe_code)]
use anyhow::Result;
use clap::Parser;
use pere_noel::{
    config::Config,
    io,
    matcher::{DrawOptions, Matcher},
    notification::prepare_messages,
};
#[cfg(feature = "logging")]
use tracing_subscriber::{fmt::Subscriber, EnvFilter};

/// Tirage au sort du Père Noël secret. Sans `--send`, le tirage est
/// seulement affiché (mode répétition) ; avec, chaque participant reçoit
/// son receveur par email.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Active les logs (feature `logging`)
    #[arg(long)]
    log: bool,

    /// Fichier JSON de configuration
    #[arg(short = 'c', long, default_value = "config.json")]
    config: String,

    /// Envoie réellement les emails
    #[arg(short = 's', long)]
    send: bool,

    /// Graine du tirage (reproductible)
    #[arg(long)]
    seed: Option<u64>,

    /// Budget de mélanges avant la recherche exhaustive
    #[arg(long, default_value_t = 2000)]
    max_attempts: u32,

    /// Roster CSV `name,email[,partner]` à la place des listes du fichier
    /// de configuration
    #[arg(long)]
    roster_csv: Option<String>,

    /// Export JSON du tirage (optionnel)
    #[arg(long)]
    out_json: Option<String>,

    /// Export CSV du tirage (optionnel)
    #[arg(long)]
    out_csv: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    #[cfg(feature = "logging")]
    if cli.log {
        let _ = Subscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .try_init();
    }

    let config = Config::load(&cli.config)?;
    let roster = match &cli.roster_csv {
        Some(path) => io::import_roster_csv(path)?,
        None => config.build_roster(),
    };

    let matcher = Matcher::new(roster);
    let opts = DrawOptions {
        max_attempts: cli.max_attempts,
        seed: cli.seed,
    };
    let assignment = matcher.draw(opts)?;

    for (giver, receiver) in assignment.iter() {
        println!("{giver} → {receiver}");
    }

    if let Some(path) = &cli.out_json {
        io::export_assignment_json(path, &assignment)?;
    }
    if let Some(path) = &cli.out_csv {
        io::export_assignment_csv(path, matcher.roster(), &assignment)?;
    }

    let code = if cli.send {
        let renderer = config.message.renderer();
        let messages = prepare_messages(matcher.roster(), &assignment, &renderer)?;
        send_messages(&config, &messages)?
    } else {
        println!("(mode répétition : aucun email envoyé, relancer avec --send)");
        0
    };

    std::process::exit(code);
}

#[cfg(feature = "smtp")]
fn send_messages(config: &Config, messages: &[pere_noel::notification::Message]) -> Result<i32> {
    let mut mailer = pere_noel::mailer::SmtpMailer::connect(&config.smtp)?;
    match pere_noel::mailer::deliver_all(&mut mailer, messages) {
        Ok(notified) => {
            println!("{} email(s) envoyé(s)", notified.len());
            Ok(0)
        }
        Err(err) => {
            eprintln!("{err}");
            for name in &err.notified {
                eprintln!("  prévenu : {name}");
            }
            for name in &err.pending {
                eprintln!("  NON prévenu : {name}");
            }
            // Code 2 = WARNING/INCOMPLETE
            Ok(2)
        }
    }
}

#[cfg(not(feature = "smtp"))]
fn send_messages(_config: &Config, _messages: &[pere_noel::notification::Message]) -> Result<i32> {
    anyhow::bail!("binaire compilé sans la feature `smtp` : --send indisponible");
}

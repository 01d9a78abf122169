use std::io::{IsTerminal, Write};

use anyhow::Context;
use clap::{Parser, Subcommand};
use console::Style;
use secrecy::{ExposeSecret, SecretString};
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pass_checker::{
    ansi256, copy_password_with, evaluate_password_strength, evaluate_password_strength_tx,
    get_clipboard_hold, now, run_clock, suggest_password, ClipboardBackend, ClipboardError,
    Command, Outcome, PasswordEvaluation, Session, StrengthScore, SystemClipboard, Theme, HELP,
};

const BAR_WIDTH: usize = 24;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Check password strength and suggest strong passwords", long_about = None)]
struct Cli {
    /// Start with the password visible.
    #[clap(long, global = true)]
    show: bool,

    #[clap(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Score a password (read from stdin when omitted).
    Check { password: Option<String> },
    /// Suggest a strong password.
    Suggest {
        /// Also copy the suggestion to the clipboard.
        #[clap(long)]
        copy: bool,
    },
    /// Copy a password to the clipboard (read from stdin when omitted).
    Copy { password: Option<String> },
    /// Show a live clock until Ctrl-C.
    Clock,
    /// Type passwords and commands line by line (the default).
    Interactive,
}

/// Stand-in used when no system clipboard can be opened.
struct NoClipboard(String);

impl ClipboardBackend for NoClipboard {
    fn set_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
        Err(ClipboardError::Unavailable(self.0.clone()))
    }
}

fn themed(hex: &str) -> Style {
    match ansi256(hex) {
        Some(color) => Style::new().color256(color),
        None => Style::new(),
    }
}

fn render_bar(score: StrengthScore) -> String {
    let filled = (score.percentage() / 100.0 * BAR_WIDTH as f64).round() as usize;
    format!(
        "[{}{}] {:>3.0}%",
        "#".repeat(filled),
        "-".repeat(BAR_WIDTH - filled),
        score.percentage()
    )
}

fn print_score(theme: &Theme, score: StrengthScore) {
    let category = score.category();
    println!(
        "{}  {}",
        themed(theme.accent).apply_to(render_bar(score)),
        themed(theme.color_for(category)).bold().apply_to(category.label())
    );
}

fn print_evaluation(theme: &Theme, evaluation: &PasswordEvaluation) {
    let Some(score) = evaluation.score else {
        return;
    };
    print_score(theme, score);
    for reason in &evaluation.reasons {
        println!("  {}", themed(theme.text).apply_to(format!("- {}", reason)));
    }
}

fn warn(theme: &Theme, message: &str) {
    println!("{}", themed(theme.medium).apply_to(format!("⚠ {}", message)));
}

/// Piped input has no echo to suppress.
fn echo_suppressed(hidden: bool, stdin_is_terminal: bool) -> bool {
    hidden && stdin_is_terminal
}

/// Reads one line from stdin. When `hidden` and stdin is a terminal the
/// input is not echoed. Returns `None` at end of input.
fn read_line_blocking(hidden: bool) -> std::io::Result<Option<String>> {
    if echo_suppressed(hidden, std::io::stdin().is_terminal()) {
        return console::Term::stderr().read_secure_line().map(Some);
    }
    let mut line = String::new();
    if std::io::stdin().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

async fn read_line(hidden: bool) -> anyhow::Result<Option<String>> {
    let line = tokio::task::spawn_blocking(move || read_line_blocking(hidden))
        .await?
        .context("failed to read from stdin")?;
    Ok(line)
}

async fn read_password(password: Option<String>) -> anyhow::Result<SecretString> {
    if let Some(password) = password {
        return Ok(SecretString::new(password.into()));
    }
    if std::io::stdin().is_terminal() {
        eprint!("Password: ");
        let _ = std::io::stderr().flush();
    }
    let line = read_line(true).await?.unwrap_or_default();
    Ok(SecretString::new(line.into()))
}

fn check(theme: &Theme, password: &SecretString) {
    let evaluation = evaluate_password_strength(password, None);
    print_evaluation(theme, &evaluation);
}

async fn suggest(theme: &Theme, copy: bool) -> anyhow::Result<()> {
    let password = suggest_password();
    println!("Here's a strong password suggestion:\n");
    println!("  {}\n", themed(theme.accent).bold().apply_to(password.expose_secret()));
    check(theme, &password);
    if copy {
        copy_once(theme, password).await?;
    }
    Ok(())
}

/// Copies from a process that is about to exit. The clipboard is only opened
/// for a non-empty password; on Linux the text stays served until another
/// application takes it over or the hold expires.
async fn copy_once(theme: &Theme, password: SecretString) -> anyhow::Result<()> {
    let hold = get_clipboard_hold();
    let result = tokio::task::spawn_blocking(move || {
        copy_password_with(
            || {
                let clipboard = SystemClipboard::holding(hold)?;
                if cfg!(target_os = "linux") {
                    println!(
                        "Keeping the password on the clipboard for up to {}s (Ctrl-C to stop)...",
                        hold.as_secs()
                    );
                }
                Ok(clipboard)
            },
            &password,
        )
        .map(drop)
    })
    .await?;

    match result {
        Ok(()) if cfg!(target_os = "linux") => {
            println!("Clipboard released.");
            Ok(())
        }
        Ok(()) => {
            println!("Password copied to clipboard!");
            Ok(())
        }
        Err(e @ ClipboardError::EmptyPassword) => {
            warn(theme, &e.to_string());
            Err(e.into())
        }
        Err(e) => Err(e.into()),
    }
}

async fn clock(theme: Theme) {
    let token = CancellationToken::new();
    let stopper = token.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            stopper.cancel();
        }
    });

    let style = themed(theme.text);
    run_clock(token, |time| {
        print!("\r{}", style.apply_to(time));
        let _ = std::io::stdout().flush();
    })
    .await;
    println!();
}

async fn interactive(theme: Theme, visible: bool) -> anyhow::Result<()> {
    let clipboard: Box<dyn ClipboardBackend> = match SystemClipboard::new() {
        Ok(clipboard) => Box::new(clipboard),
        Err(e) => {
            tracing::warn!("{}", e);
            Box::new(NoClipboard(e.to_string()))
        }
    };
    let mut session = Session::new(clipboard, visible);

    println!("{}", themed(theme.accent).bold().apply_to("💀 Pass Checker"));
    println!("{}\n", themed(theme.text).apply_to(now()));
    println!("{}\n", HELP);

    let (tx, mut rx) = mpsc::channel::<PasswordEvaluation>(8);
    let printer = {
        let theme = theme.clone();
        tokio::spawn(async move {
            while let Some(evaluation) = rx.recv().await {
                print_evaluation(&theme, &evaluation);
            }
        })
    };

    let mut pending = CancellationToken::new();
    loop {
        print!("> ");
        let _ = std::io::stdout().flush();
        // hidden input while the field is masked
        let Some(line) = read_line(!session.field().is_visible()).await? else {
            break;
        };
        match session.handle(Command::parse(&line)) {
            Outcome::Scored(_) => {
                // a newer password supersedes any evaluation still waiting
                pending.cancel();
                pending = CancellationToken::new();

                let field = session.field();
                println!("Password: {} {}", field.display(), field.toggle_glyph());

                let password = SecretString::new(field.password().expose_secret().into());
                let token = pending.clone();
                let tx = tx.clone();
                tokio::spawn(async move {
                    evaluate_password_strength_tx(&password, token, tx).await;
                });
            }
            Outcome::Suggested { password, score } => {
                pending.cancel();
                println!("Here's a strong password suggestion:\n");
                println!("  {}\n", themed(theme.accent).bold().apply_to(password.expose_secret()));
                print_score(&theme, score);
            }
            Outcome::Visibility(_) => {
                let field = session.field();
                println!("Password: {} {}", field.display(), field.toggle_glyph());
            }
            Outcome::Copied => println!("Password copied to clipboard!"),
            Outcome::Warning(message) => warn(&theme, &message),
            Outcome::Error(message) => {
                tracing::error!("{}", message);
            }
            Outcome::Clock(time) => println!("{}", themed(theme.text).apply_to(time)),
            Outcome::Help => println!("{}", HELP),
            Outcome::Quit => break,
        }
    }

    pending.cancel();
    drop(tx);
    printer.await?;
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let args = Cli::parse();
    let theme = Theme::default();
    match args.cmd.unwrap_or(Cmd::Interactive) {
        Cmd::Check { password } => {
            let password = read_password(password).await?;
            check(&theme, &password);
        }
        Cmd::Suggest { copy } => suggest(&theme, copy).await?,
        Cmd::Copy { password } => {
            let password = read_password(password).await?;
            copy_once(&theme, password).await?;
        }
        Cmd::Clock => clock(theme).await,
        Cmd::Interactive => interactive(theme, args.show).await?,
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "pass_checker=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run().await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

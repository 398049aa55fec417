//! CLI for content-assistant: read a business profile, propose ideas, expand the chosen one.
//!
//! Loads config (API key, endpoint, database path) via `content_assistant::Config`;
//! `--dry-run` swaps in the offline demo gateway and an in-memory sink.

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use content_graph::{ModelGateway, OpenAiGateway};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use content_assistant::output::MENU_HINT;
use content_assistant::{
    accept_idea, format_ideas, format_record, BusinessProfile, Config, ContentSink, DemoGateway,
    MemorySink, MenuChoice, Overrides, SessionStore, SqliteSink, Tone, WorkflowController,
    WorkflowState,
};

#[derive(Parser)]
#[command(name = "content-assistant")]
#[command(about = "Generate social-media content ideas for a business and expand the chosen one")]
struct Args {
    /// Business name (prompted when omitted)
    #[arg(long)]
    name: Option<String>,

    /// What the business does
    #[arg(long)]
    description: Option<String>,

    /// Communication tone: Formal, Informal, Creative or Professional
    #[arg(long)]
    tone: Option<Tone>,

    /// What the content should achieve
    #[arg(long)]
    goals: Option<String>,

    /// Model name. Default: GROQ_MODEL env or the gateway default
    #[arg(long)]
    model: Option<String>,

    /// OpenAI-compatible API base. Default: GROQ_API_BASE env or Groq
    #[arg(long)]
    api_base: Option<String>,

    /// SQLite file for accepted content. Default: CONTENT_DB_PATH env or data/content.db
    #[arg(long)]
    db: Option<PathBuf>,

    /// Gateway request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Use canned responses and keep records in memory (no API key needed)
    #[arg(long)]
    dry_run: bool,
}

/// Reads one trimmed line after printing `prompt`. `None` on end of input.
fn ask(prompt: &str) -> Result<Option<String>> {
    print!("{} ", prompt);
    io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    let n = io::stdin().lock().read_line(&mut line).context("read stdin")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

fn ask_required(prompt: &str) -> Result<String> {
    loop {
        match ask(prompt)? {
            Some(v) if !v.is_empty() => return Ok(v),
            Some(_) => println!("A value is required."),
            None => anyhow::bail!("input closed"),
        }
    }
}

fn ask_tone() -> Result<Tone> {
    let labels: Vec<&str> = Tone::ALL.iter().map(|t| t.label()).collect();
    let prompt = format!("Communication tone ({}):", labels.join(", "));
    loop {
        match ask_required(&prompt)?.parse::<Tone>() {
            Ok(tone) => return Ok(tone),
            Err(e) => println!("{}", e),
        }
    }
}

/// Flags first, interactive prompts for whatever is missing.
fn read_profile(args: &Args) -> Result<BusinessProfile> {
    let name = match &args.name {
        Some(v) => v.clone(),
        None => ask_required("Business name:")?,
    };
    let description = match &args.description {
        Some(v) => v.clone(),
        None => ask_required("Business description:")?,
    };
    let tone = match args.tone {
        Some(t) => t,
        None => ask_tone()?,
    };
    let goals = match &args.goals {
        Some(v) => v.clone(),
        None => ask_required("Business goals:")?,
    };
    let profile = BusinessProfile::new(name, description, tone, goals);
    profile.validate()?;
    Ok(profile)
}

/// Generate, show, choose; loops on `r`. Returns after one post is accepted or on `q`.
async fn run_session(
    controller: &WorkflowController,
    sessions: &SessionStore,
    sink: &dyn ContentSink,
    id: Uuid,
) -> Result<()> {
    loop {
        let state = sessions.get(&id).await.context("session not found")?;
        println!("\nGenerating ideas...");
        let state = match controller.run(state).await {
            Ok(s) => s,
            Err(e) => {
                error!(error = %e, "idea generation failed");
                println!("Could not generate ideas: {}", e);
                match ask("Try again? [y/N]")? {
                    Some(a) if a.eq_ignore_ascii_case("y") => continue,
                    _ => return Ok(()),
                }
            }
        };
        sessions
            .put(&id, state.clone())
            .await
            .then_some(())
            .context("session vanished")?;
        let batch = state
            .current_ideas
            .clone()
            .context("workflow returned no ideas")?;
        println!("\n{}\n", format_ideas(&batch));

        loop {
            let Some(answer) = ask(MENU_HINT)? else {
                return Ok(());
            };
            match MenuChoice::parse(&answer) {
                Some(MenuChoice::Pick(n)) => {
                    let Some(idea) = batch.get(n).cloned() else {
                        println!("No idea with id {}.", n);
                        continue;
                    };
                    println!("\nWriting content for idea {}...", n);
                    match accept_idea(controller, sink, state.clone(), idea).await {
                        Ok(accepted) => {
                            println!("\n{}", format_record(&accepted.record));
                            if let Err(e) = &accepted.saved {
                                println!("\nThe post could not be saved: {}", e);
                            }
                            sessions
                                .put(&id, accepted.state)
                                .await
                                .then_some(())
                                .context("session vanished")?;
                            return Ok(());
                        }
                        Err(e) => {
                            error!(error = %e, "content expansion failed");
                            println!("Could not write the content: {}", e);
                        }
                    }
                }
                Some(MenuChoice::Regenerate) => {
                    sessions
                        .put(&id, state.clone().request_more_ideas())
                        .await
                        .then_some(())
                        .context("session vanished")?;
                    break;
                }
                Some(MenuChoice::Quit) => return Ok(()),
                None => println!("Please answer 1-5, r or q."),
            }
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "content_assistant=info,content_graph=info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let args = Args::parse();
    let cfg = Config::from_env_and_args(Overrides {
        api_base: args.api_base.clone(),
        model: args.model.clone(),
        db_path: args.db.clone(),
        timeout_secs: args.timeout_secs,
        dry_run: args.dry_run,
    })?;

    let gateway: Arc<dyn ModelGateway> = if cfg.dry_run {
        Arc::new(DemoGateway::new())
    } else {
        Arc::new(OpenAiGateway::new(cfg.gateway_config())?)
    };
    let sink: Arc<dyn ContentSink> = if cfg.dry_run {
        Arc::new(MemorySink::new())
    } else {
        Arc::new(SqliteSink::open(&cfg.db_path)?)
    };
    info!(model = %cfg.model, dry_run = cfg.dry_run, "content assistant ready");

    let controller = WorkflowController::new(gateway)?;
    let profile = read_profile(&args)?;
    let sessions = SessionStore::new();
    let id = sessions.create(WorkflowState::new(profile)).await;

    let result = run_session(&controller, &sessions, sink.as_ref(), id).await;
    sessions.remove(&id).await;
    result
}

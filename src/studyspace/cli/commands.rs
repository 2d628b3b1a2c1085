use super::print::{print_help, print_messages, print_stats, print_view};
use super::setup::{parse_line, Cli, SessionCommand};
use clap::Parser;
use directories::ProjectDirs;
use std::io::{self, BufRead, IsTerminal, Write};
use studyspace::api::{Action, StudySpace, View};
use studyspace::config::StudyConfig;
use studyspace::error::{Result, StudyError};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_ENV: &str = "STUDYSPACE_LOG";
const PROMPT: &str = "studyspace> ";

struct AppContext {
    space: StudySpace,
    json: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let mut ctx = init_context(&cli)?;

    let stdin = io::stdin();
    let interactive = stdin.is_terminal();
    if interactive {
        render(&ctx)?;
        prompt()?;
    }

    for line in stdin.lock().lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(SessionCommand::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = handle(&mut ctx, command) {
                    report(&e);
                }
            }
            Ok(None) => {}
            Err(e) => report(&e),
        }
        if interactive {
            prompt()?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| format!("studyspace={}", level).into());
    // stdout carries views only
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .try_init();
}

fn init_context(cli: &Cli) -> Result<AppContext> {
    let mut config = match &cli.config {
        Some(path) => StudyConfig::from_file(path)?,
        None => match ProjectDirs::from("com", "studyspace", "studyspace") {
            Some(dirs) => StudyConfig::load(dirs.config_dir()).unwrap_or_else(|e| {
                tracing::warn!(error = %e, "ignoring unreadable config");
                StudyConfig::default()
            }),
            None => StudyConfig::default(),
        },
    };
    if cli.no_samples {
        config.seed_samples = false;
    }

    Ok(AppContext {
        space: StudySpace::new(&config)?,
        json: cli.json,
    })
}

fn handle(ctx: &mut AppContext, command: SessionCommand) -> Result<()> {
    match command {
        SessionCommand::Go(section) => {
            dispatch(ctx, Action::SetSection(section))?;
            render(ctx)
        }
        SessionCommand::Search(term) => {
            dispatch(ctx, Action::SetSearchTerm(term))?;
            render(ctx)
        }
        SessionCommand::Filter(value) => {
            dispatch(ctx, Action::SetCategorySelector(value))?;
            render(ctx)
        }
        SessionCommand::New => {
            dispatch(ctx, Action::StartCreate)?;
            render(ctx)
        }
        SessionCommand::Set { field, value } => {
            dispatch(ctx, Action::UpdateDraftField { field, value })
        }
        SessionCommand::Save => dispatch(ctx, Action::SubmitDraft),
        SessionCommand::Cancel => dispatch(ctx, Action::CancelDraft),
        SessionCommand::Remove(position) => {
            let id = ctx.space.resolve_position(position)?;
            dispatch(ctx, Action::DeleteRecord(id.to_string()))
        }
        SessionCommand::Show => render(ctx),
        SessionCommand::Stats => handle_stats(ctx),
        SessionCommand::Help => {
            print_help();
            Ok(())
        }
        SessionCommand::Quit => Ok(()),
    }
}

fn dispatch(ctx: &mut AppContext, action: Action) -> Result<()> {
    let result = ctx.space.dispatch(action)?;
    if !ctx.json {
        print_messages(&result.messages);
    } else if !result.messages.is_empty() {
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

fn render(ctx: &AppContext) -> Result<()> {
    let view = ctx.space.view();
    if ctx.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        print_view(&view);
    }
    Ok(())
}

fn handle_stats(ctx: &AppContext) -> Result<()> {
    let view = ctx.space.view();
    if !ctx.json {
        print_stats(&view);
        return Ok(());
    }

    let json = match &view {
        View::Dashboard(dash) => serde_json::to_string_pretty(&dash.totals)?,
        View::Notes(vm) => serde_json::to_string_pretty(&vm.stats)?,
        View::Materials(vm) => serde_json::to_string_pretty(&vm.stats)?,
        View::Documents(vm) => serde_json::to_string_pretty(&vm.stats)?,
    };
    println!("{}", json);
    Ok(())
}

fn prompt() -> Result<()> {
    print!("{}", PROMPT);
    io::stdout().flush()?;
    Ok(())
}

fn report(e: &StudyError) {
    tracing::debug!(error = ?e, "command failed");
    eprintln!("Error: {}", e);
}

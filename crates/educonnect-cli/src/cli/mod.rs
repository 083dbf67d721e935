//! CLI layer: argument parsing, context setup, and dispatch.
//!
//! Every subcommand builds a [`QueryState`] or a draft struct, hands it
//! to the API facade, and renders the structured result. This is the
//! only layer that touches stdout/stderr or the process exit code.

mod args;
pub mod print;

use args::{Cli, Commands, Output};
use clap::Parser;
use educonnect::api::{ContactDraft, EduApi, PostDraft, UploadDraft};
use educonnect::commands::{forum, resources, tutors};
use educonnect::dataset::Dataset;
use educonnect::error::Result;
use educonnect::events::NullSink;
use educonnect::prefs::Preferences;
use educonnect::query::QueryState;
use serde::Serialize;
use std::path::PathBuf;

struct AppContext {
    api: EduApi<'static, NullSink>,
    output: Output,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut ctx = init_context(cli.output)?;

    match cli.command {
        Some(Commands::Resources {
            query,
            search,
            orden,
            universidad,
            carrera,
            materia,
            tipo,
            pagina,
        }) => {
            let state = merge_state(
                &query,
                resources::QUERY_KEYS,
                vec![
                    ("universidad", universidad),
                    ("carrera", carrera),
                    ("materia", materia),
                    ("tipo", tipo),
                ],
                search,
                orden,
                pagina,
            );
            handle_resources(&ctx, &state)
        }
        Some(Commands::Tutors {
            query,
            search,
            subject,
            university,
            min_price,
            max_price,
            min_rating,
            modality,
        }) => {
            let state = merge_state(
                &query,
                tutors::QUERY_KEYS,
                vec![
                    ("subject", subject),
                    ("university", university),
                    ("minPrice", min_price),
                    ("maxPrice", max_price),
                    ("minRating", min_rating),
                    ("modality", modality),
                ],
                search,
                None,
                None,
            );
            handle_tutors(&ctx, &state)
        }
        Some(Commands::Contact {
            tutor_id,
            name,
            email,
            subject,
            date,
            time,
            message,
        }) => {
            let draft = ContactDraft {
                student_name: name,
                email,
                subject,
                preferred_date: date,
                preferred_time: time,
                message,
            };
            handle_contact(&ctx, tutor_id, &draft)
        }
        Some(Commands::Forum {
            query,
            search,
            categoria,
            orden,
        }) => {
            let state = merge_state(
                &query,
                forum::QUERY_KEYS,
                vec![("categoria", categoria.map(|c| c.to_string()))],
                search,
                orden,
                None,
            );
            handle_forum(&ctx, &state)
        }
        Some(Commands::Post { id }) => handle_post(&ctx, id),
        Some(Commands::NewPost {
            title,
            category,
            content,
            tags,
            materia,
            universidad,
            carrera,
        }) => {
            let draft = PostDraft {
                title,
                category_id: category,
                content,
                tags,
                subject: materia,
                university: universidad,
                career: carrera,
            };
            handle_new_post(&mut ctx, &draft)
        }
        Some(Commands::Like { id }) => handle_like(&mut ctx, id),
        Some(Commands::Upload {
            title,
            tipo,
            description,
            materia,
            universidad,
        }) => {
            let draft = UploadDraft {
                title,
                kind: tipo,
                description,
                subject: materia,
                university: universidad,
            };
            handle_upload(&ctx, &draft)
        }
        Some(Commands::Login { email, password }) => handle_login(&ctx, &email, &password),
        Some(Commands::Register {
            name,
            email,
            password,
            confirm,
        }) => handle_register(&ctx, &name, &email, &password, &confirm),
        Some(Commands::Pricing) => handle_pricing(&ctx),
        Some(Commands::Upgrade) => handle_upgrade(&mut ctx),
        Some(Commands::Prefs { theme }) => handle_prefs(&mut ctx, theme),
        None => handle_resources(&ctx, &QueryState::new()),
    }
}

fn init_context(output: Output) -> Result<AppContext> {
    let data = Dataset::bundled()?;
    let dir = prefs_dir();
    let prefs = match &dir {
        Some(d) => Preferences::load(d)?,
        None => Preferences::default(),
    };
    let mut api = EduApi::new(data, prefs, NullSink);
    if let Some(d) = dir {
        api = api.with_prefs_dir(d);
    }
    Ok(AppContext { api, output })
}

/// Where preferences live. `EDUCONNECT_CONFIG_DIR` overrides the OS
/// config directory, mainly for tests.
fn prefs_dir() -> Option<PathBuf> {
    std::env::var_os("EDUCONNECT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(Preferences::default_dir)
}

/// Seed state from `--query`, then layer the explicit flags on top. The
/// page is applied last so it survives the page reset that any filter
/// change triggers.
fn merge_state(
    query: &str,
    known: &[&str],
    flags: Vec<(&str, Option<String>)>,
    search: Option<String>,
    sort: Option<String>,
    page: Option<usize>,
) -> QueryState {
    let mut state = QueryState::parse(query, known);
    for (key, value) in flags {
        if let Some(v) = value {
            state.set(key, v);
        }
    }
    if let Some(term) = search {
        state.set_search(term);
    }
    if let Some(key) = sort {
        state.set_sort(key);
    }
    if let Some(p) = page {
        state.set_page(p);
    }
    state
}

fn emit_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn handle_resources(ctx: &AppContext, state: &QueryState) -> Result<()> {
    let listing = ctx.api.resources(&state.to_query_string());
    match ctx.output {
        Output::Json => emit_json(&listing),
        Output::Text => {
            print::print_resources(&listing, state);
            Ok(())
        }
    }
}

fn handle_tutors(ctx: &AppContext, state: &QueryState) -> Result<()> {
    let listing = ctx.api.tutors(&state.to_query_string());
    match ctx.output {
        Output::Json => emit_json(&listing),
        Output::Text => {
            print::print_tutors(&listing, state);
            Ok(())
        }
    }
}

fn handle_contact(ctx: &AppContext, tutor_id: u64, draft: &ContactDraft) -> Result<()> {
    let receipt = ctx.api.contact_tutor(tutor_id, draft)?;
    match ctx.output {
        Output::Json => emit_json(&receipt),
        Output::Text => {
            print::print_contact_receipt(&receipt);
            Ok(())
        }
    }
}

fn handle_forum(ctx: &AppContext, state: &QueryState) -> Result<()> {
    let listing = ctx.api.forum(&state.to_query_string());
    match ctx.output {
        Output::Json => emit_json(&listing),
        Output::Text => {
            print::print_forum(&listing, state);
            Ok(())
        }
    }
}

fn handle_post(ctx: &AppContext, id: u64) -> Result<()> {
    let post = ctx.api.forum_post(id)?;
    match ctx.output {
        Output::Json => emit_json(&post),
        Output::Text => {
            let category = ctx.api.data().category(post.category_id);
            print::print_post(&post, category.map(|c| c.name.as_str()));
            Ok(())
        }
    }
}

fn handle_new_post(ctx: &mut AppContext, draft: &PostDraft) -> Result<()> {
    let post = ctx.api.create_post(draft)?;
    match ctx.output {
        Output::Json => emit_json(&post),
        Output::Text => {
            let category = ctx.api.data().category(post.category_id);
            print::print_post_created(&post, category.map(|c| c.name.as_str()));
            Ok(())
        }
    }
}

fn handle_like(ctx: &mut AppContext, id: u64) -> Result<()> {
    let outcome = ctx.api.toggle_like(id)?;
    match ctx.output {
        Output::Json => emit_json(&outcome),
        Output::Text => {
            print::print_like(&outcome);
            Ok(())
        }
    }
}

fn handle_upload(ctx: &AppContext, draft: &UploadDraft) -> Result<()> {
    let receipt = ctx.api.upload(draft)?;
    match ctx.output {
        Output::Json => emit_json(&receipt),
        Output::Text => {
            print::print_upload_receipt(&receipt);
            Ok(())
        }
    }
}

fn handle_login(ctx: &AppContext, email: &str, password: &str) -> Result<()> {
    let session = ctx.api.login(email, password)?;
    match ctx.output {
        Output::Json => emit_json(&session),
        Output::Text => {
            print::print_session(&session);
            Ok(())
        }
    }
}

fn handle_register(
    ctx: &AppContext,
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<()> {
    let registration = ctx.api.register(name, email, password, confirm)?;
    match ctx.output {
        Output::Json => emit_json(&registration),
        Output::Text => {
            print::print_registration(&registration);
            Ok(())
        }
    }
}

fn handle_pricing(ctx: &AppContext) -> Result<()> {
    let plans = ctx.api.plans();
    match ctx.output {
        Output::Json => emit_json(&plans),
        Output::Text => {
            print::print_plans(&plans);
            Ok(())
        }
    }
}

fn handle_upgrade(ctx: &mut AppContext) -> Result<()> {
    let receipt = ctx.api.upgrade()?;
    match ctx.output {
        Output::Json => emit_json(&receipt),
        Output::Text => {
            print::print_messages(&receipt.messages);
            Ok(())
        }
    }
}

fn handle_prefs(ctx: &mut AppContext, theme: Option<args::ThemeArg>) -> Result<()> {
    if let Some(theme) = theme {
        ctx.api.set_theme(theme.into())?;
    }
    match ctx.output {
        Output::Json => emit_json(ctx.api.preferences()),
        Output::Text => {
            print::print_prefs(ctx.api.preferences());
            Ok(())
        }
    }
}

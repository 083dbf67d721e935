use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use colored::Colorize;
use educonnect::api::{
    CmdMessage, ContactReceipt, ForumListing, LikeOutcome, MessageLevel, Plan, ResourceListing,
    TutorListing, UploadReceipt,
};
use educonnect::commands::account::{Registration, Session};
use educonnect::error::EduError;
use educonnect::model::ForumPost;
use educonnect::prefs::Preferences;
use educonnect::query::{PageMark, QueryState};
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Validation failures get one line per field; everything else a single
/// `Error:` line. All of it goes to stderr.
pub fn print_error(error: &EduError) {
    match error {
        EduError::Validation(fields) => {
            for f in fields {
                eprintln!("{} {}", format!("{}:", f.field).red().bold(), f.message);
            }
        }
        other => eprintln!("{} {}", "Error:".red().bold(), other),
    }
}

pub(super) fn print_resources(listing: &ResourceListing, state: &QueryState) {
    if listing.rows.is_empty() {
        println!("{}", "No se encontraron recursos".yellow());
        println!(
            "{}",
            "Intenta ajustar tus filtros o términos de búsqueda.".dimmed()
        );
        print_query_footer(state);
        return;
    }

    println!(
        "{} recursos · página {} de {} · {}",
        listing.total,
        listing.page,
        listing.total_pages,
        resource_sort_label(listing.sort)
    );
    println!();

    for r in &listing.rows {
        let idx_str = format!("{:>4}. ", r.id);
        let left = format!(
            "{} · {} · {} · {}",
            r.title, r.kind, r.university_code, r.subject
        );
        let stats = format!("★ {} · ↓ {} · ♥ {}  ", r.rating, r.downloads, r.likes);

        let fixed_width = idx_str.width() + stats.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let left_display = truncate_to_width(&left, available);
        let padding = available.saturating_sub(left_display.width());

        println!(
            "{}{}{}{}{}",
            idx_str,
            left_display,
            " ".repeat(padding),
            stats.dimmed(),
            date_column(r.date).dimmed()
        );
    }

    if listing.total_pages > 1 {
        println!();
        print_window(&listing.window, listing.page);
    }
    print_query_footer(state);
}

pub(super) fn print_tutors(listing: &TutorListing, state: &QueryState) {
    if listing.rows.is_empty() {
        println!("{}", "No se encontraron tutores".yellow());
        println!(
            "{}",
            "Intenta ajustar los filtros o buscar con otros términos".dimmed()
        );
        print_query_footer(state);
        return;
    }

    if state.is_default() {
        println!("Todos los tutores: {}", listing.total);
    } else {
        println!("Resultados filtrados: {}", listing.total);
    }
    println!();

    for t in &listing.rows {
        let idx_str = format!("{:>4}. ", t.id);
        let name = if t.is_verified {
            format!("{} ✓", t.full_name)
        } else {
            t.full_name.clone()
        };
        let modality: Vec<&str> = t.modality.iter().map(|m| m.as_str()).collect();
        let left = format!(
            "{} · {} · {} · {}",
            name,
            t.specialty,
            t.university,
            modality.join("/")
        );
        let right = format!(
            "{}{:.2}/h · ★ {:.1} ({})",
            t.currency, t.price_per_hour, t.rating, t.reviews_count
        );

        let fixed_width = idx_str.width() + right.width() + 2;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let left_display = truncate_to_width(&left, available);
        let padding = available.saturating_sub(left_display.width());

        println!(
            "{}{}{}  {}",
            idx_str,
            left_display,
            " ".repeat(padding),
            right.dimmed()
        );
        if !t.subjects.is_empty() {
            println!("      {}", t.subjects.join(", ").dimmed());
        }
    }
    print_query_footer(state);
}

pub(super) fn print_forum(listing: &ForumListing, state: &QueryState) {
    println!(
        "{} temas · {} respuestas · {} abiertos · {}",
        listing.total_posts,
        listing.total_replies,
        listing.open_posts,
        forum_sort_label(listing.sort)
    );
    let counts: Vec<String> = listing
        .post_counts
        .iter()
        .map(|c| format!("{} ({})", c.name, c.count))
        .collect();
    println!("{}", format!("Categorías: {}", counts.join(" · ")).dimmed());
    println!();

    if listing.rows.is_empty() {
        println!("{}", "No se encontraron temas".yellow());
        let hint = if state.search().is_empty() {
            "Sé el primero en crear un tema en esta categoría"
        } else {
            "Intenta con otros términos de búsqueda"
        };
        println!("{}", hint.dimmed());
        print_query_footer(state);
        return;
    }

    for p in &listing.rows {
        let idx_str = format!("{:>4}. ", p.id);
        let category = listing
            .categories
            .iter()
            .find(|c| c.id == p.category_id)
            .map(|c| c.name.as_str())
            .unwrap_or("Sin categoría");
        let left = format!(
            "{} [{}] · {} · {} respuestas",
            p.title,
            p.status.label(),
            category,
            p.stats.replies
        );
        let stats = format!("♥ {}  ", p.stats.likes);

        let fixed_width = idx_str.width() + stats.width() + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);
        let left_display = truncate_to_width(&left, available);
        let padding = available.saturating_sub(left_display.width());

        println!(
            "{}{}{}{}{}",
            idx_str,
            left_display,
            " ".repeat(padding),
            stats.dimmed(),
            time_column(p.date).dimmed()
        );
    }
    print_query_footer(state);
}

pub(super) fn print_post(post: &ForumPost, category: Option<&str>) {
    println!(
        "{} {}",
        format!("#{}", post.id).yellow(),
        post.title.bold()
    );

    let mut meta = vec![post.status.label().to_string()];
    if let Some(name) = category {
        meta.push(name.to_string());
    }
    if let Some(subject) = &post.subject {
        meta.push(subject.clone());
    }
    meta.push(post.author_name.clone());
    meta.push(format!("{} · {}", post.university_code, post.career));
    meta.push(time_ago(post.date));
    println!("{}", meta.join(" · ").dimmed());

    if !post.tags.is_empty() {
        let tags: Vec<String> = post.tags.iter().map(|t| format!("#{}", t)).collect();
        println!("{}", tags.join(" ").dimmed());
    }

    println!("--------------------------------");
    println!("{}", post.content);

    if !post.replies.is_empty() {
        println!();
        println!("{}", format!("{} respuestas", post.replies.len()).bold());
        for reply in &post.replies {
            println!();
            println!(
                "{} {}",
                reply.author_name.bold(),
                format!("· ♥ {} · {}", reply.likes, time_ago(reply.date)).dimmed()
            );
            println!("{}", reply.content);
        }
    }
}

pub(super) fn print_post_created(post: &ForumPost, category: Option<&str>) {
    println!("{}", "¡Tema publicado!".green());
    println!();
    print_post(post, category);
}

pub(super) fn print_like(outcome: &LikeOutcome) {
    if outcome.liked {
        println!(
            "{}",
            format!(
                "Te gusta el tema #{} ({} me gusta)",
                outcome.post_id, outcome.likes
            )
            .green()
        );
    } else {
        println!(
            "Ya no te gusta el tema #{} ({} me gusta)",
            outcome.post_id, outcome.likes
        );
    }
}

pub(super) fn print_upload_receipt(receipt: &UploadReceipt) {
    print_messages(&receipt.messages);
    let r = &receipt.resource;
    println!(
        "{}",
        format!(
            "#{} {} · {} · {} · {}",
            r.id, r.title, r.kind, r.university_code, r.subject
        )
        .dimmed()
    );
}

pub(super) fn print_contact_receipt(receipt: &ContactReceipt) {
    print_messages(&receipt.messages);
    println!();
    println!("{}", format!("Materia: {}", receipt.subject).dimmed());
    if let Some(date) = &receipt.preferred_date {
        println!("{}", format!("Fecha preferida: {}", date).dimmed());
    }
    if let Some(time) = &receipt.preferred_time {
        println!("{}", format!("Hora preferida: {}", time).dimmed());
    }
    println!(
        "{:<28}{}",
        "Tarifa del tutor:",
        money(&receipt.currency, receipt.hourly_rate)
    );
    println!(
        "{:<28}{}",
        "Comisión de servicio (10%):",
        money(&receipt.currency, receipt.service_fee)
    );
    println!(
        "{}{}",
        format!("{:<28}", "Total por hora:").bold(),
        money(&receipt.currency, receipt.total_per_hour).bold()
    );
}

pub(super) fn print_plans(plans: &[Plan]) {
    for (i, plan) in plans.iter().enumerate() {
        if i > 0 {
            println!();
        }
        match plan.badge {
            Some(badge) => println!("{} {}", plan.name.bold(), format!("★ {}", badge).yellow()),
            None => println!("{}", plan.name.bold()),
        }
        println!("{} / {}", plan.price, plan.period);
        println!("{}", plan.tagline.dimmed());
        for feature in &plan.features {
            if feature.included {
                println!("  {} {}", "✓".green(), feature.label);
            } else {
                println!("  {} {}", "✗".dimmed(), feature.label.dimmed());
            }
        }
        if plan.highlighted {
            println!("  {}", plan.cta.green());
        } else {
            println!("  {}", plan.cta.dimmed());
        }
    }
}

pub(super) fn print_session(session: &Session) {
    print_messages(&session.messages);
    println!("{}", format!("sesión: {}", session.session_id).dimmed());
}

pub(super) fn print_registration(registration: &Registration) {
    print_messages(&registration.messages);
    println!("{}", format!("cuenta: {}", registration.account_id).dimmed());
}

pub(super) fn print_prefs(prefs: &Preferences) {
    println!("theme = {}", prefs.theme);
    println!("pro = {}", prefs.pro);
    if prefs.show_ads() {
        println!(
            "{}",
            "Los anuncios están activos. Prueba `educonnect upgrade`.".dimmed()
        );
    } else {
        println!("{}", "Sin anuncios: plan Pro activo.".green());
    }
}

fn print_window(window: &[PageMark], current: usize) {
    let marks: Vec<String> = window
        .iter()
        .map(|mark| match mark {
            PageMark::Num(n) if *n == current => format!("[{}]", n).bold().to_string(),
            PageMark::Num(n) => n.to_string(),
            PageMark::Gap => "…".dimmed().to_string(),
        })
        .collect();
    println!("{}", marks.join(" "));
}

/// The canonical query string for the listing just shown, so a result
/// set can be shared or re-run verbatim.
fn print_query_footer(state: &QueryState) {
    let qs = state.to_query_string();
    if !qs.is_empty() {
        println!();
        println!("{}", format!("query: {}", qs).dimmed());
    }
}

fn resource_sort_label(key: &str) -> &'static str {
    match key {
        "rating" => "Mejor calificados",
        "descargas" => "Más descargados",
        "likes" => "Más valorados",
        _ => "Más recientes",
    }
}

fn forum_sort_label(key: &str) -> &'static str {
    match key {
        "popular" => "Populares",
        "unanswered" => "Sin respuesta",
        _ => "Recientes",
    }
}

fn money(currency: &str, amount: f64) -> String {
    format!("{}{:.2}", currency, amount)
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut used = 0;
    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if used + char_width > max_width.saturating_sub(1) {
            break;
        }
        result.push(c);
        used += char_width;
    }
    result.push('…');
    result
}

fn time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

/// Right-aligned so the trailing column lines up across rows.
fn time_column(timestamp: DateTime<Utc>) -> String {
    format!("{:>width$}", time_ago(timestamp), width = TIME_WIDTH)
}

fn date_column(date: NaiveDate) -> String {
    time_column(date.and_time(NaiveTime::MIN).and_utc())
}

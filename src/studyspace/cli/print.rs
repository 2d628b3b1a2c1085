use super::setup::HELP;
use chrono::{DateTime, Utc};
use colored::Colorize;
use studyspace::api::{CmdMessage, DashboardView, MessageLevel, View};
use studyspace::controller::{DraftState, ViewModel};
use studyspace::kinds::{Document, Material, Note};
use studyspace::model::{ContentKind, Record, Section, Selector};
use studyspace::stats::Summary;
use timeago::Formatter;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const STAR_MARKER: &str = "★";

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

pub(super) fn print_view(view: &View) {
    match view {
        View::Dashboard(dash) => print_dashboard(dash),
        View::Notes(vm) => print_collection(Section::Notes, vm, note_line),
        View::Materials(vm) => print_collection(Section::Materials, vm, material_line),
        View::Documents(vm) => print_collection(Section::Documents, vm, document_line),
    }
}

pub(super) fn print_stats(view: &View) {
    match view {
        View::Dashboard(dash) => {
            for total in &dash.totals {
                println!("{:<18}{}", total.label, total.count.to_string().bold());
            }
        }
        View::Notes(vm) => print_summary(&vm.stats),
        View::Materials(vm) => print_summary(&vm.stats),
        View::Documents(vm) => print_summary(&vm.stats),
    }
}

pub(super) fn print_help() {
    let width = HELP.iter().map(|(usage, _)| usage.width()).max().unwrap_or(0);
    for (usage, about) in HELP {
        let usage = format!("{:<width$}", usage, width = width);
        println!("  {}  {}", usage.bold(), about.dimmed());
    }
}

fn print_dashboard(dash: &DashboardView) {
    println!("{}", Section::Dashboard.label().bold());
    println!();
    for total in &dash.totals {
        println!("  {:<18}{}", total.label, total.count.to_string().bold());
    }

    println!();
    println!("{}", "Recent Activity".bold());
    if dash.recent_activity.is_empty() {
        println!("  No activity yet.");
        return;
    }
    for activity in &dash.recent_activity {
        let prefix = format!("  {:<10}", activity.section.to_string());
        let available = LINE_WIDTH.saturating_sub(prefix.width() + TIME_WIDTH);
        let title = truncate_to_width(&activity.title, available);
        let padding = available.saturating_sub(title.width());
        println!(
            "{}{}{}{}",
            prefix.cyan(),
            title,
            " ".repeat(padding),
            format_time_ago(activity.created_at).dimmed()
        );
    }
}

fn print_collection<K: ContentKind>(
    section: Section,
    vm: &ViewModel<K>,
    detail: fn(&Record<K>) -> String,
) {
    println!("{}", section.label().bold());

    let mut active = Vec::new();
    if !vm.search_term.is_empty() {
        active.push(format!("search: {}", vm.search_term));
    }
    if vm.category_selector != Selector::All {
        active.push(format!("type: {}", vm.category_selector));
    }
    if !active.is_empty() {
        println!("{}", active.join("  ").dimmed());
    }
    println!();

    if vm.visible_records.is_empty() {
        println!("No {}s found.", vm.kind);
    }

    for (i, record) in vm.visible_records.iter().enumerate() {
        let idx_str = format!("{:>4}. ", i + 1);
        let line = format!("{} {}", record.title().bold(), detail(record).dimmed());
        let plain = format!("{} {}", record.title(), detail(record));

        let available = LINE_WIDTH.saturating_sub(idx_str.width() + TIME_WIDTH);
        let shown = if plain.width() > available {
            truncate_to_width(&plain, available)
        } else {
            line
        };
        let padding = available.saturating_sub(plain.width().min(available));

        println!(
            "{}{}{}{}",
            idx_str.yellow(),
            shown,
            " ".repeat(padding),
            format_time_ago(record.metadata.created_at).dimmed()
        );
    }

    if let Some(state) = &vm.draft_state {
        println!();
        print_draft(vm.kind, state);
    }
}

fn print_draft(kind: &str, state: &DraftState) {
    println!("{}", format!("New {}", kind).bold().underline());
    let width = state.fields.iter().map(|e| e.field.width()).max().unwrap_or(0);
    for entry in &state.fields {
        let marker = if entry.required { "*" } else { " " };
        println!(
            "  {}{:<width$}  {}",
            marker.red(),
            entry.field,
            entry.value,
            width = width
        );
    }
    for issue in &state.issues {
        println!("  {}", issue.to_string().yellow());
    }
    if state.can_submit {
        println!("{}", "Ready to save.".green());
    }
}

fn print_summary(summary: &Summary) {
    println!("{:<18}{}", "Total", summary.total.to_string().bold());
    println!("{:<18}{}", "Subjects", summary.categories.to_string().bold());
    for highlight in &summary.highlights {
        println!("{:<18}{}", highlight.label, highlight.value.bold());
    }
}

fn note_line(record: &Record<Note>) -> String {
    let preview: String = record
        .fields
        .content
        .chars()
        .take(50)
        .map(|c| if c == '\n' { ' ' } else { c })
        .collect();
    format!("[{}] {}", record.metadata.category, preview)
}

fn document_line(record: &Record<Document>) -> String {
    format!(
        "[{}] {} · {} · {}",
        record.fields.doc_type,
        record.fields.lecturer,
        record.metadata.category,
        record.fields.size
    )
}

fn material_line(record: &Record<Material>) -> String {
    let star = if record.fields.is_starred {
        format!("{} ", STAR_MARKER)
    } else {
        String::new()
    };
    format!(
        "{}[{}] {} · {} · {}",
        star,
        record.fields.material_type,
        record.metadata.category,
        record.fields.estimated_time,
        record.fields.difficulty
    )
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let time_str = Formatter::new().convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}

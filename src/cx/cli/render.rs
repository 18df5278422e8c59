use bytesize::ByteSize;
use chrono::{DateTime, Utc};
use colored::{ColoredString, Colorize};
use cx::api::{CmdMessage, MessageLevel};
use cx::model::{EntryStatus, FileDetails, ListedEntry};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const MISSING_MARKER: &str = "(file not found)";

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
        }
    }
}

/// One line per entry: `<index>: <path> <details>`, with the index column
/// right-aligned and the path column padded to the widest display path.
pub(super) fn render_entry_list(entries: &[ListedEntry]) -> String {
    render_entry_list_at(entries, Utc::now())
}

fn render_entry_list_at(entries: &[ListedEntry], now: DateTime<Utc>) -> String {
    let index_width = entries
        .iter()
        .map(|listed| index_label(listed.index).width())
        .max()
        .unwrap_or(0);
    let path_width = entries
        .iter()
        .map(|listed| listed.display_path().width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for listed in entries {
        let index = format!("{:>width$}", index_label(listed.index), width = index_width);
        let display_path = listed.display_path();
        let padding = " ".repeat(path_width.saturating_sub(display_path.width()));
        let details = match listed.status.details() {
            Some(details) => format_details(details, now),
            None => MISSING_MARKER.to_string(),
        };

        output.push_str(&format!(
            "{} {}{} {}\n",
            index.dimmed(),
            style_path(&listed.status, display_path),
            padding,
            details.dimmed()
        ));
    }
    output
}

fn index_label(index: usize) -> String {
    format!("{}:", index)
}

fn style_path(status: &EntryStatus, path: String) -> ColoredString {
    match status {
        EntryStatus::Missing => path.red().strikethrough(),
        EntryStatus::Directory(_) => path.blue().bold(),
        EntryStatus::Symlink { .. } => path.cyan(),
        EntryStatus::File(_) => path.normal(),
    }
}

/// `(<size>, <relative modification time>)`
fn format_details(details: &FileDetails, now: DateTime<Utc>) -> String {
    let size = ByteSize::b(details.size).to_string();
    let modified = match details.modified {
        Some(modified) => {
            let elapsed = now.signed_duration_since(modified);
            Formatter::new().convert(elapsed.to_std().unwrap_or_default())
        }
        None => "unknown".to_string(),
    };
    format!("({}, {})", size, modified)
}

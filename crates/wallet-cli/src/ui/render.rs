//! Rendering primitives for subcommand output.
//!
//! Pretty output is for a person at a terminal: a "Wallet · command" title,
//! `[OK]`/`[WARN]`/`[ERR]` badges and a borderless record table. Plain output
//! keeps one fact per line (`balance=14600`, `status=ok`) so shell scripts can
//! grep it. JSON mode prints nothing from here; the commands serialize their
//! own values.

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use super::context::{OutputMode, UiContext};
use super::format::truncate_start;
use super::theme::{styled, styles, Badge};

/// Wallet paths longer than this are shown with their leading part cut.
const PATH_WIDTH: usize = 50;

/// Title line for a command, naming the wallet file it works on.
///
/// Pretty: "Wallet · balance" then `Path: <wallet file>`.
/// Plain: "wallet balance". JSON: empty.
pub fn header(ctx: &UiContext, command: &str, wallet_path: Option<&str>) -> String {
    match ctx.mode {
        OutputMode::Json => String::new(),
        OutputMode::Plain => format!("wallet {}", command),
        OutputMode::Pretty => {
            let title = format!(
                "{} \u{00B7} {}",
                styled("Wallet", styles::bold(), ctx.color),
                command
            );
            match wallet_path {
                Some(path) => {
                    let path_line = kv(ctx, "Path", &truncate_start(path, PATH_WIDTH));
                    format!("{}\n{}", title, path_line)
                }
                None => title,
            }
        }
    }
}

pub fn badge(ctx: &UiContext, kind: Badge, message: &str) -> String {
    let label = styled(kind.text(), kind.style(), ctx.color);
    match message {
        "" => label,
        text => format!("{} {}", label, text),
    }
}

/// Plain keys are lowercase with underscores: "Last Id" becomes `last_id`.
fn plain_key(key: &str) -> String {
    key.to_lowercase().replace(' ', "_")
}

/// One labelled value, e.g. a total in `wallet balance`.
///
/// Pretty: "Balance: 14600" with a dim label. Plain: "balance=14600".
pub fn kv(ctx: &UiContext, key: &str, value: &str) -> String {
    if !ctx.mode.is_pretty() {
        return format!("{}={}", plain_key(key), value);
    }
    let label = styled(&format!("{}:", key), styles::dim(), ctx.color);
    format!("{} {}", label, value)
}

pub fn hint(ctx: &UiContext, text: &str) -> String {
    if !ctx.mode.is_pretty() {
        return kv(ctx, "hint", text);
    }
    format!("{} {}", styled("Hint:", styles::dim(), ctx.color), text)
}

/// Result of `wallet add` or `wallet init`: what was stored and the
/// resulting totals.
///
/// Pretty: `[OK] Income added` then indented `Id: 6`, `Balance: 16600`.
/// Plain: `status=ok` then `id=6`, `balance=16600`.
pub fn receipt(ctx: &UiContext, title: &str, items: &[(&str, String)]) -> String {
    let (first, indent) = if ctx.mode.is_pretty() {
        (badge(ctx, Badge::Ok, title), "  ")
    } else {
        (kv(ctx, "status", "ok"), "")
    };
    std::iter::once(first)
        .chain(
            items
                .iter()
                .map(|(key, value)| format!("{}{}", indent, kv(ctx, key, value))),
        )
        .collect::<Vec<_>>()
        .join("\n")
}

/// A record table column. Ids and amounts align right.
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub align: CellAlignment,
}

impl Column {
    pub const fn text(title: &'static str) -> Self {
        Self {
            title,
            align: CellAlignment::Left,
        }
    }

    pub const fn numeric(title: &'static str) -> Self {
        Self {
            title,
            align: CellAlignment::Right,
        }
    }
}

/// Record listing for `wallet search`.
///
/// Pretty mode draws a borderless comfy-table with dim titles that fits the
/// terminal width. Otherwise each row is its cells joined by single spaces
/// and no title row is printed.
pub fn simple_table(ctx: &UiContext, columns: &[Column], rows: &[Vec<String>]) -> String {
    if !ctx.mode.is_pretty() {
        let lines: Vec<String> = rows.iter().map(|row| row.join(" ")).collect();
        return lines.join("\n");
    }

    let title_cell = |column: &Column| {
        let cell = Cell::new(column.title).set_alignment(column.align);
        if ctx.color {
            cell.add_attribute(Attribute::Dim)
        } else {
            cell
        }
    };

    let mut table = Table::new();
    table
        .load_preset(comfy_table::presets::NOTHING)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(u16::try_from(ctx.width).unwrap_or(u16::MAX))
        .set_header(columns.iter().map(title_cell).collect::<Vec<_>>());

    for row in rows {
        table.add_row(
            row.iter()
                .zip(columns)
                .map(|(value, column)| Cell::new(value).set_alignment(column.align))
                .collect::<Vec<_>>(),
        );
    }
    for column in table.column_iter_mut() {
        column.set_padding((0, 2));
    }

    table.to_string()
}

/// Print to stdout unless the output is JSON.
pub fn print(ctx: &UiContext, message: &str) {
    if ctx.mode.is_json() || message.is_empty() {
        return;
    }
    println!("{}", message);
}

/// Pretty: `[ERR] No record with id 9` plus a `Hint:` line.
/// Plain and JSON: `error=...` plus `hint=...`, since errors go to stderr
/// even when stdout carries JSON.
pub fn error_message(ctx: &UiContext, message: &str, error_hint: Option<&str>) -> String {
    let first = if ctx.mode.is_pretty() {
        badge(ctx, Badge::Err, message)
    } else {
        format!("error={}", message)
    };
    std::iter::once(first)
        .chain(error_hint.map(|text| hint(ctx, text)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_error(ctx: &UiContext, message: &str, error_hint: Option<&str>) {
    eprintln!("{}", error_message(ctx, message, error_hint));
}

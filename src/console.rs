use std::io::Write;

use anyhow::Result;
use clap::{Parser, Subcommand};
use log::debug;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};

use crate::api::DnsApiClient;
use crate::dashboard::{Dashboard, NotificationKind, RecordField, Resource, Screen};

#[derive(Debug, Parser)]
#[command(multicall = true)]
struct CommandLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Filter the current list by name (no text clears it)
    Search {
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        text: Vec<String>,
    },
    /// Open a zone's records by row number, zone id or name
    Select { zone: String },
    /// Edit the type, name, value or ttl of a record
    Set {
        record_id: String,
        field: RecordField,
        #[arg(required = true, trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Send a record to the provider
    Save { record_id: String },
    /// Drop unsaved edits of a record
    Revert { record_id: String },
    /// Return to the zone list
    Back,
    /// Fetch the current list again
    Reload,
    /// Leave
    #[command(alias = "exit")]
    Quit,
}

// `help` comes back as a clap error carrying the help text
pub fn parse_command(line: &str) -> Result<Option<Command>, clap::Error> {
    let args: Vec<&str> = line.split_whitespace().collect();
    if args.is_empty() {
        return Ok(None);
    }
    CommandLine::try_parse_from(args).map(|parsed| Some(parsed.command))
}

pub fn render<C: DnsApiClient>(dashboard: &Dashboard<C>, out: &mut impl Write) -> Result<()> {
    let search = dashboard.search_input();
    let search = if search.is_empty() {
        String::new()
    } else {
        format!("  (search: {:?})", search)
    };

    match dashboard.screen() {
        Screen::Zones => {
            writeln!(out, "Your Zones{}", search)?;
            match dashboard.zones() {
                Resource::Idle | Resource::Loading => writeln!(out, "  Loading...")?,
                Resource::Failed(e) => writeln!(out, "  {}", e)?,
                Resource::Loaded(_) => {
                    writeln!(
                        out,
                        "  {:>3}  {:<40} {:>7} {:>7}",
                        "#", "Zone Name", "TTL", "Records"
                    )?;
                    for (row, zone) in dashboard.filtered_zones().iter().enumerate() {
                        let ttl = zone.ttl.map(|t| t.to_string()).unwrap_or_default();
                        let count = zone
                            .records_count
                            .map(|c| c.to_string())
                            .unwrap_or_default();
                        writeln!(
                            out,
                            "  {:>3}  {:<40} {:>7} {:>7}",
                            row + 1,
                            zone.name,
                            ttl,
                            count
                        )?;
                    }
                }
            }
        }
        Screen::Records { .. } => {
            let zone_name = dashboard.selected_zone_name().unwrap_or_default();
            writeln!(out, "Records - {}{}", zone_name, search)?;
            match dashboard.records() {
                Resource::Idle | Resource::Loading => writeln!(out, "  Loading...")?,
                Resource::Failed(e) => writeln!(out, "  {}", e)?,
                Resource::Loaded(_) => {
                    writeln!(
                        out,
                        "   {:<6} {:<24} {:<40} {:>6}  {}",
                        "Type", "Name", "Value", "TTL", "ID"
                    )?;
                    for record in dashboard.filtered_records() {
                        // Unsaved rows are starred
                        let marker = if dashboard.is_modified(&record.id) { '*' } else { ' ' };
                        let ttl = record.ttl.map(|t| t.to_string()).unwrap_or_default();
                        writeln!(
                            out,
                            " {} {:<6} {:<24} {:<40} {:>6}  {}",
                            marker, record.r#type, record.name, record.value, ttl, record.id
                        )?;
                    }
                }
            }
        }
    }
    Ok(())
}

pub async fn execute<C: DnsApiClient>(
    dashboard: &mut Dashboard<C>,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    debug!("Executing {:?}", command);
    match command {
        Command::Quit => {}
        Command::Reload => {
            writeln!(out, "Loading...")?;
            dashboard.reload().await;
            render(dashboard, out)?;
        }
        Command::Back => {
            dashboard.back();
            render(dashboard, out)?;
        }
        Command::Search { text } => {
            dashboard.set_search(&text.join(" "));
            // Debounced input is rendered once it settles
            if !dashboard.search_pending() {
                render(dashboard, out)?;
            }
        }
        Command::Select { zone } => {
            if dashboard.selected_zone_id().is_some() {
                writeln!(out, "Go `back` to the zone list first")?;
                return Ok(());
            }
            match dashboard.resolve_zone(&zone) {
                Ok(zone_id) => {
                    writeln!(out, "Loading records...")?;
                    dashboard.select_zone(&zone_id).await;
                    render(dashboard, out)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            }
        }
        Command::Set {
            record_id,
            field,
            value,
        } => match dashboard.edit_field(&record_id, field, &value.join(" ")) {
            Ok(()) => render(dashboard, out)?,
            Err(e) => writeln!(out, "{}", e)?,
        },
        Command::Save { record_id } => {
            let notification = dashboard.persist(&record_id).await;
            let tag = match notification.kind {
                NotificationKind::Success => "ok",
                NotificationKind::Error => "error",
            };
            writeln!(out, "[{}] {}", tag, notification.message)?;
            render(dashboard, out)?;
        }
        Command::Revert { record_id } => match dashboard.revert(&record_id) {
            Ok(()) => render(dashboard, out)?,
            Err(e) => writeln!(out, "{}", e)?,
        },
    }
    Ok(())
}

enum Event {
    Line(Option<String>),
    SearchApplied,
}

pub async fn run<C, R, W>(dashboard: &mut Dashboard<C>, input: R, out: &mut W) -> Result<()>
where
    C: DnsApiClient,
    R: AsyncBufRead + Unpin,
    W: Write,
{
    let mut lines = input.lines();

    writeln!(out, "Loading zones...")?;
    dashboard.load_zones().await;
    render(dashboard, out)?;

    loop {
        write!(out, "> ")?;
        out.flush()?;

        let event = tokio::select! {
            line = lines.next_line() => Event::Line(line?),
            _ = dashboard.settle_search() => Event::SearchApplied,
        };

        match event {
            Event::Line(None) => break,
            Event::Line(Some(line)) => match parse_command(&line) {
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => execute(dashboard, command, out).await?,
                Ok(None) => {}
                Err(e) => write!(out, "{}", e)?,
            },
            Event::SearchApplied => {
                writeln!(out)?;
                render(dashboard, out)?;
            }
        }
    }

    Ok(())
}

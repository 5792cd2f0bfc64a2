use std::env;
use std::path::PathBuf;

use anyhow::{bail, Context};
use chrono::{DateTime, NaiveDate, Utc};
use clap::Parser;
use milestone_core::{CategoryVisibility, GroupedEvents};
use milestone_feed::parse_events_str;
use serde_json::json;
use tracing::{debug, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser, Debug)]
#[command(
    name = "milestone-cli",
    about = "In danh sách cột mốc AI kèm thời gian đã trôi qua."
)]
struct Args {
    /// Đường dẫn tới file JSON `{"events": [...]}`.
    #[arg(short, long)]
    input: PathBuf,

    /// Danh mục cần hiển thị, giống tham số `show` của URL (ví dụ: model,art).
    #[arg(short, long)]
    show: Option<String>,

    /// Thời điểm tính (YYYY-MM-DD hoặc RFC 3339), mặc định là bây giờ.
    #[arg(long)]
    now: Option<String>,

    /// Xuất JSON thay vì văn bản.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let args = Args::parse();

    let data = std::fs::read_to_string(&args.input)
        .with_context(|| format!("Không đọc được file {:?}", args.input))?;
    let events = parse_events_str(&data)
        .with_context(|| format!("File {:?} không hợp lệ", args.input))?;
    info!(count = events.len(), "loaded events");

    let visibility = match &args.show {
        Some(show) => CategoryVisibility::from_query(&format!("show={show}")),
        None => CategoryVisibility::default(),
    };
    debug!(?visibility, query = ?visibility.to_query(), "category filter");

    let now = match &args.now {
        Some(value) => parse_now(value)?,
        None => Utc::now(),
    };

    let grouped = GroupedEvents::from_events(&events);

    if args.json {
        let sections: Vec<_> = grouped
            .visible_sections(&visibility)
            .map(|(category, events)| {
                json!({
                    "category": category,
                    "title": category.title(),
                    "events": events
                        .iter()
                        .map(|event| {
                            let since = event.time_since(now);
                            json!({
                                "id": event.id,
                                "name": event.name,
                                "date": event.date,
                                "description": event.description,
                                "time_since": since,
                                "display": since.compact(),
                            })
                        })
                        .collect::<Vec<_>>(),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&sections)?);
        return Ok(());
    }

    println!("How Long Since AI?");
    for (category, events) in grouped.visible_sections(&visibility) {
        println!("\n{}", category.title());
        let width = events
            .iter()
            .map(|event| event.name.chars().count())
            .max()
            .unwrap_or(0);
        for event in events {
            println!(
                "  {:>7}  {:<width$}  {}",
                event.time_since(now).compact(),
                event.name,
                event.description,
            );
        }
    }

    Ok(())
}

fn parse_now(value: &str) -> anyhow::Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        if let Some(dt) = date.and_hms_opt(0, 0, 0) {
            return Ok(dt.and_utc());
        }
    }
    bail!("Thời điểm `{value}` không hợp lệ")
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MILESTONE_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "milestone_cli=debug,info"
        } else {
            "warn"
        })
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};
use sentiq_core::Sentiment;
use sentiq_store::{HistoryRecord, HistoryStats, StorageInfo};

pub fn run_list(limit: usize) -> anyhow::Result<()> {
    let store = super::open_store()?;
    let records = store.get_recent(limit);

    if records.is_empty() {
        println!("No prediction history");
        return Ok(());
    }

    println!("Recent Predictions (last {})", records.len());
    println!("==========================");
    for record in records {
        println!("{}", format_record(record));
    }
    Ok(())
}

pub fn run_stats() -> anyhow::Result<()> {
    let store = super::open_store()?;
    print!("{}", render_stats(&store.stats()));
    Ok(())
}

pub fn run_search(query: &str) -> anyhow::Result<()> {
    let store = super::open_store()?;
    let matches = store.search(query);

    if matches.is_empty() {
        println!("No records match {query:?}");
        return Ok(());
    }
    for record in matches {
        println!("{}", format_record(record));
    }
    Ok(())
}

pub fn run_filter(
    sentiment: Option<&str>,
    from: Option<&str>,
    to: Option<&str>,
) -> anyhow::Result<()> {
    let sentiment = sentiment
        .map(|s| {
            Sentiment::parse(s)
                .ok_or_else(|| anyhow::anyhow!("invalid sentiment {s:?} (use positive/negative/1/0)"))
        })
        .transpose()?;
    let start = from.map(|d| parse_day_start(d)).transpose()?;
    let end = to.map(|d| parse_day_end(d)).transpose()?;

    let store = super::open_store()?;
    let records: Vec<&HistoryRecord> = match sentiment {
        Some(s) => store.filter_by_sentiment(s),
        None => store.get_all().iter().collect(),
    };
    let records: Vec<&HistoryRecord> = records
        .into_iter()
        .filter(|r| {
            let ts = r.timestamp();
            start.is_none_or(|s| ts >= s) && end.is_none_or(|e| ts <= e)
        })
        .collect();

    if records.is_empty() {
        println!("No records in range");
        return Ok(());
    }
    for record in records {
        println!("{}", format_record(record));
    }
    Ok(())
}

pub fn run_remove(id: i64) -> anyhow::Result<()> {
    let mut store = super::open_store()?;
    if store.get_by_id(id).is_none() {
        anyhow::bail!("no record with id {id}");
    }
    let remaining = store.remove(id).len();
    println!("Removed {id}; {remaining} record(s) remain");
    Ok(())
}

pub fn run_clear() -> anyhow::Result<()> {
    let mut store = super::open_store()?;
    store.clear()?;
    println!("History cleared");
    Ok(())
}

pub fn run_export(out: Option<&str>) -> anyhow::Result<()> {
    let store = super::open_store()?;
    let out = out.map(str::to_string).unwrap_or_else(|| {
        format!("sentiment_history_{}.json", Local::now().format("%Y-%m-%d"))
    });

    std::fs::write(&out, store.export_json()?)?;
    println!("Exported {} record(s) to {out}", store.get_all().len());
    Ok(())
}

pub fn run_import(file: &str) -> anyhow::Result<()> {
    let contents = std::fs::read_to_string(file)?;
    let mut store = super::open_store()?;
    let merged = store.import_json(&contents)?.len();
    println!("Import complete; history now holds {merged} record(s)");
    Ok(())
}

pub fn run_info() -> anyhow::Result<()> {
    let store = super::open_store()?;
    let info = store.storage_info();
    print!("{}", render_info(&info));
    Ok(())
}

fn format_record(record: &HistoryRecord) -> String {
    let when = record.timestamp().format("%Y-%m-%d %H:%M");
    match record {
        HistoryRecord::Batch(batch) => format!(
            "  {} | {} | batch | {} reviews, {}% positive | {}",
            batch.id, when, batch.count, batch.summary.positive_percent, batch.name
        ),
        _ => {
            let single = match record.as_single() {
                Some(s) => s,
                None => return String::new(),
            };
            let label = single.sentiment.map(|s| s.as_str()).unwrap_or("unknown");
            let confidence = single
                .confidence
                .map(|c| format!(" {:.1}%", c * 100.0))
                .unwrap_or_default();
            format!(
                "  {} | {} | {label}{confidence} | {}",
                single.id,
                when,
                truncate(single.text.as_deref().unwrap_or(""), 60)
            )
        }
    }
}

fn render_stats(stats: &HistoryStats) -> String {
    let span = |ts: Option<DateTime<Utc>>| {
        ts.map(|t| t.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "N/A".to_string())
    };
    format!(
        "History Statistics\n\
         ==================\n\
         Total records: {}\n\
         Single predictions: {} ({} positive / {} negative)\n\
         Batch records: {}\n\
         Positive: {}% | Negative: {}%\n\
         Oldest: {} | Newest: {}\n",
        stats.total,
        stats.single_predictions,
        stats.positive,
        stats.negative,
        stats.batch_predictions,
        stats.positive_percent,
        stats.negative_percent,
        span(stats.oldest),
        span(stats.newest),
    )
}

fn render_info(info: &StorageInfo) -> String {
    format!(
        "Storage\n\
         =======\n\
         Size: {} bytes ({} KB / {} MB)\n\
         Items: {} / {} ({}% full)\n",
        info.bytes, info.kb, info.mb, info.items, info.max_items, info.percentage_full
    )
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max_chars).collect();
        format!("{cut}...")
    }
}

fn parse_day_start(date: &str) -> anyhow::Result<DateTime<Utc>> {
    let day = parse_day(date)?;
    Ok(Utc.from_utc_datetime(&day.and_hms_opt(0, 0, 0).unwrap_or_default()))
}

fn parse_day_end(date: &str) -> anyhow::Result<DateTime<Utc>> {
    let day = parse_day(date)?;
    Ok(Utc.from_utc_datetime(&day.and_hms_opt(23, 59, 59).unwrap_or_default()))
}

fn parse_day(date: &str) -> anyhow::Result<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("invalid date {date:?} (expected YYYY-MM-DD)"))
}

use chrono::{TimeZone, Utc};
use tempus::{PeriodKind, PeriodSplitter, TimeRange};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. Log to stderr; set RUST_LOG=tempus=debug and enable the `tracing` feature for spans.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    // 2. Default splitter computes boundaries in Asia/Shanghai.
    let splitter = PeriodSplitter::new();

    // 3. A range from mid-January to early March 2024.
    let tz = splitter.timezone();
    let start = tz.with_ymd_and_hms(2024, 1, 15, 9, 30, 0).single().ok_or("bad start")?;
    let end = tz.with_ymd_and_hms(2024, 3, 10, 18, 0, 0).single().ok_or("bad end")?;
    let range = TimeRange::new(start.with_timezone(&Utc), end.with_timezone(&Utc));

    // 4. Slice it every possible way.
    for kind in PeriodKind::ALL {
        let slices = splitter.split(kind, range)?;
        println!("{} ({kind}): {} slice(s)", kind.label(), slices.len());
        for s in slices.iter().take(3) {
            println!(
                "  {} .. {}",
                s.start.with_timezone(&tz),
                s.end.with_timezone(&tz)
            );
        }
    }

    Ok(())
}

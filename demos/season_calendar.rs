//! Print the season grid around a date.
//!
//! ```text
//! cargo run --example season_calendar -- [ERA YEAR SEASON DAY]
//! ```
//!
//! Defaults to the campaign's "today". Set `RUST_LOG=telisaran=trace` to see
//! every conversion.

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use telisaran::{Calendar, DateTime, CAMPAIGN_TODAY};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "telisaran=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (era, year, season, day) = match args.as_slice() {
        [] => CAMPAIGN_TODAY,
        [era, year, season, day] => (era.parse()?, year.parse()?, season.parse()?, day.parse()?),
        _ => return Err("usage: season_calendar [ERA YEAR SEASON DAY]".into()),
    };

    let calendar = Calendar::new(DateTime::new(era, year, season, day, 0, 0, 0)?);
    tracing::info!(today = %calendar.today(), "calendar ready");

    print!("{}", calendar.season_grid());
    println!();
    println!("today:     {}", calendar.today().long());
    match calendar.yesterday() {
        Ok(yesterday) => println!("yesterday: {yesterday}"),
        Err(err) => println!("yesterday: {err}"),
    }
    println!("tomorrow:  {}", calendar.tomorrow()?);
    println!("so far:    {} days", calendar.period().day_starts().count());
    Ok(())
}

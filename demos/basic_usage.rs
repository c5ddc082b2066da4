use timehelper::config::LoggingConfig;
use timehelper::{logger, Config, TimeHelper, TimeShift};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    let logging = LoggingConfig {
        enabled: true,
        ..config.logging.clone()
    };
    logger::init_stderr(&logging)?;

    let helper = TimeHelper::from_config(&config)?;
    println!("Timezone: {}", helper.timezone().name());
    println!("Now: {}", helper.current_datetime(None)?);
    println!("Now (PHP-style template): {}", helper.current_datetime(Some("D, d M Y H:i"))?);
    println!("Tokyo: {}", helper.current_datetime_in_timezone("Asia/Tokyo", None)?);

    println!(
        "Noon UTC in New York: {}",
        helper.convert_timezone("2024-06-01 12:00:00", "UTC", "America/New_York")?
    );
    println!(
        "Difference: {}",
        helper.date_difference("2000-02-29", "2024-06-01", None)?
    );
    println!("Next month: {}", helper.time_travel(TimeShift::default().months(1))?);

    println!(
        "Business days in January 2024: {}",
        helper.business_days_between("2024-01-01", "2024-01-31")?
    );
    println!(
        "In French: {}",
        helper.format_date_localized("2024-01-15", Some("fr_FR"), Some("%A %-d %B %Y"))?
    );

    let start = helper.microtime();
    helper.sleep_for_milliseconds(50);
    println!("Slept for {:.3}s", helper.measure_execution_time(start));

    // Not for secrets
    println!("Token: {}", helper.generate_random_string(Some(16))?);

    Ok(())
}

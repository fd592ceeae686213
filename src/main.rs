use chrono::Utc;
use rand::thread_rng;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use pricedeck::models::{Timeframe, TimeframeView, TOTAL_POINTS};
use pricedeck::services::series_service::{
    SeriesGenerator, DEFAULT_PRICE_CEILING, DEFAULT_PRICE_FLOOR,
};
use pricedeck::session::ChartSession;
use pricedeck::utils::format_price;

fn main() {
    dotenv::dotenv().ok();

    // Initialize tracing; logs go to stderr so stdout stays machine-readable
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("pricedeck=info".parse().unwrap()),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut json_output = false;
    let mut timeframe_arg: Option<String> = None;

    for arg in &args {
        match arg.as_str() {
            "--json" => json_output = true,
            "--help" | "-h" => {
                print_usage();
                return;
            }
            other => {
                if timeframe_arg.is_some() {
                    error!("Unexpected argument: '{}'", other);
                    print_usage();
                    std::process::exit(2);
                }
                timeframe_arg = Some(other.to_string());
            }
        }
    }

    // The command line wins over the environment; otherwise start on 24h
    let timeframe = match timeframe_arg.or_else(|| std::env::var("PRICEDECK_TIMEFRAME").ok()) {
        Some(key) => match key.parse::<Timeframe>() {
            Ok(timeframe) => timeframe,
            Err(e) => {
                error!("{}", e);
                std::process::exit(1);
            }
        },
        None => Timeframe::default(),
    };

    let price_floor = env_price("PRICEDECK_PRICE_FLOOR").unwrap_or(DEFAULT_PRICE_FLOOR);
    let price_ceiling = env_price("PRICEDECK_PRICE_CEILING").unwrap_or(DEFAULT_PRICE_CEILING);
    if !bounds_are_valid(price_floor, price_ceiling) {
        error!(
            "PRICEDECK_PRICE_FLOOR ({}) must be below PRICEDECK_PRICE_CEILING ({})",
            price_floor, price_ceiling
        );
        std::process::exit(1);
    }

    info!("📈 Generating {} price points...", TOTAL_POINTS);
    let generator = SeriesGenerator::new(price_floor, price_ceiling);
    let mut rng = thread_rng();
    let series = generator.generate(Utc::now(), &mut rng);
    let session = ChartSession::with_timeframe(series, timeframe);

    let view = match session.view() {
        Ok(view) => view,
        Err(e) => {
            error!("Failed to select '{}' data: {}", session.timeframe(), e);
            std::process::exit(1);
        }
    };

    if json_output {
        match serde_json::to_string_pretty(&view) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                error!("Failed to serialize view: {}", e);
                std::process::exit(1);
            }
        }
        return;
    }

    print_view(&view);
}

/// Read an f64 override from the environment, ignoring unparseable values
fn env_price(name: &str) -> Option<f64> {
    let raw = std::env::var(name).ok()?;
    match raw.parse::<f64>() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!("Ignoring {}: '{}' is not a number", name, raw);
            None
        }
    }
}

/// Usable generator bounds: floor strictly below ceiling, NaN on either side rejected
fn bounds_are_valid(price_floor: f64, price_ceiling: f64) -> bool {
    price_floor < price_ceiling
}

/// Print the stat cards and the point listing for one timeframe
fn print_view(view: &TimeframeView<'_>) {
    println!("Bitcoin Price Chart ({})", view.timeframe.label());
    println!();
    println!("Current Price  {}", format_price(view.stats.current));
    println!("Highest Price  {}", format_price(view.stats.highest));
    println!("Lowest Price   {}", format_price(view.stats.lowest));
    println!();
    for point in view.points {
        println!("{:<18} {}", point.label, format_price(point.price));
    }
}

fn print_usage() {
    println!("Usage: pricedeck [TIMEFRAME] [--json]");
    println!();
    println!("Timeframes: 24h, 7d, 30d, 1y (default: 24h)");
    println!();
    println!("Environment:");
    println!("  PRICEDECK_TIMEFRAME      Timeframe to use when none is given as an argument");
    println!("  PRICEDECK_PRICE_FLOOR    Lower price bound for the generator (default 30000)");
    println!("  PRICEDECK_PRICE_CEILING  Upper price bound for the generator (default 35000)");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_must_be_ordered() {
        assert!(bounds_are_valid(30_000.0, 35_000.0));
        assert!(!bounds_are_valid(35_000.0, 30_000.0));
        assert!(!bounds_are_valid(30_000.0, 30_000.0));
    }

    #[test]
    fn test_nan_bounds_are_rejected() {
        assert!(!bounds_are_valid(f64::NAN, 35_000.0));
        assert!(!bounds_are_valid(30_000.0, f64::NAN));
        assert!(!bounds_are_valid(f64::NAN, f64::NAN));
    }
}

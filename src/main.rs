use clap::{Parser, Subcommand};
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use grameen_miles::application::errors::AppError;
use grameen_miles::application::services::impact_service::stats_in;
use grameen_miles::application::services::{
    animate, CountUp, DriverDashboard, FareEstimator, ImpactSection, RideRequest, SmsService,
};
use grameen_miles::domain::entities::{
    transition, Action, BookingStatus, CartStatus, Hub, HubMap, RideType, Screen, BOOKING_HUBS,
};
use grameen_miles::domain::traits::{Channel, MessageLog};
use grameen_miles::infrastructure::adapters::ConsoleAdapter;
use grameen_miles::infrastructure::config::Config;
use grameen_miles::infrastructure::random::StdRandom;
use grameen_miles::infrastructure::storage::MemoryLog;

#[derive(Parser)]
#[command(name = "grameen-miles")]
#[command(about = "Affordable, green and shared rural mobility", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml", global = true)]
    config: String,

    /// Seed for simulated distances and ETAs (overrides config)
    #[arg(short, long, global = true)]
    seed: Option<u64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive app
    Run,
    /// Send one SMS to the short code and wait for the reply
    Sms {
        /// Message text, e.g. BOOK RIDE GRMILES123
        #[arg(required = true)]
        text: Vec<String>,
    },
    /// Quote a fare
    Fare {
        /// passenger, goods or both
        #[arg(short, long)]
        ride_type: Option<String>,
        #[arg(short, long)]
        pickup: Option<String>,
        #[arg(short, long)]
        drop: Option<String>,
    },
    /// Show village hubs and their carts
    Hubs {
        #[arg(long)]
        json: bool,
    },
    /// Show the driver dashboard
    Driver {
        #[arg(long)]
        json: bool,
    },
    /// Show sustainability figures
    Impact {
        /// Count the figures up instead of printing them at once
        #[arg(long)]
        animate: bool,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    match cli.command {
        Commands::Version => {
            println!("grameen-miles v{}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Commands::InitConfig => {
            println!("{}", Config::default().to_yaml()?);
            println!("\nSave this to config.yaml and adjust as needed.");
            return Ok(());
        }
        _ => {}
    }

    let mut config = load_config(&cli.config);
    if cli.seed.is_some() {
        config.fare.seed = cli.seed;
    }

    let rt = tokio::runtime::Runtime::new()?;

    match cli.command {
        Commands::Run => rt.block_on(run_app(config)),
        Commands::Sms { text } => rt.block_on(send_single_sms(config, text.join(" "))),
        Commands::Fare { ride_type, pickup, drop } => {
            let mut request = RideRequest::new();
            request.ride_type = ride_type.as_deref().and_then(RideType::parse);
            request.pickup = pickup;
            request.drop = drop;
            let mut fares = FareEstimator::new(Box::new(StdRandom::from_seed_option(config.fare.seed)));
            print_quote(&mut fares, &request);
            Ok(())
        }
        Commands::Hubs { json } => {
            let map = HubMap::new();
            if json {
                println!("{}", to_json(map.hubs())?);
            } else {
                print_map(&map);
            }
            Ok(())
        }
        Commands::Driver { json } => {
            let dashboard = DriverDashboard::new();
            if json {
                println!("{}", to_json(&dashboard)?);
            } else {
                print_driver(&dashboard);
            }
            Ok(())
        }
        Commands::Impact { animate: animated } => {
            for section in ImpactSection::ALL {
                if animated {
                    rt.block_on(animate_section(&config, section))?;
                } else {
                    print_section(section);
                }
            }
            Ok(())
        }
        Commands::Version | Commands::InitConfig => Ok(()),
    }
}

fn load_config(path: &str) -> Config {
    if !std::path::Path::new(path).exists() {
        return Config::load_env();
    }
    match Config::load(path) {
        Ok(mut config) => {
            config.apply_env(|key| std::env::var(key).ok());
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::load_env()
        }
    }
}

fn to_json<T: serde::Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::Internal(format!("JSON error: {}", e)))
}

async fn send_single_sms(config: Config, text: String) -> Result<(), AppError> {
    let console = Arc::new(ConsoleAdapter::new(&config));
    console.start().await?;
    let log: Arc<dyn MessageLog> = Arc::new(MemoryLog::new());
    let sms = SmsService::new(log, console, config.sms_timing());

    if sms.send_and_wait(&text).await?.is_none() {
        println!("Nothing to send.");
    }
    Ok(())
}

/// Interactive app: one screen at a time, routed by `transition`
async fn run_app(config: Config) -> Result<(), AppError> {
    let console = Arc::new(ConsoleAdapter::new(&config));
    let log: Arc<dyn MessageLog> = Arc::new(MemoryLog::new());
    let sms = SmsService::new(log, console.clone(), config.sms_timing());
    let mut fares = FareEstimator::new(Box::new(StdRandom::from_seed_option(config.fare.seed)));
    let mut driver = DriverDashboard::new();
    let map = HubMap::new();
    let mut screen = Screen::Welcome;

    tracing::info!("Starting {}", config.app.name);
    console.start().await?;
    render(screen, &sms, &driver, &map);

    loop {
        let prompt = format!("{}> ", screen);
        let Some(line) = console.read_line(&prompt).await? else {
            break;
        };
        if line.is_empty() {
            continue;
        }
        if line.eq_ignore_ascii_case("quit") || line.eq_ignore_ascii_case("exit") {
            break;
        }

        if let Some(action) = parse_action(screen, &line) {
            let next = transition(screen, action);
            if next != screen {
                tracing::debug!("Screen {} -> {}", screen, next);
                screen = next;
                render(screen, &sms, &driver, &map);
            }
            continue;
        }

        match screen {
            Screen::Welcome => println!("Pick a screen: 1-5 or its name. 'quit' to leave."),
            Screen::Sms => {
                let text = quick_pick(&sms, &line).unwrap_or(line.as_str());
                // Replies arrive on their own; the prompt stays free for the next SMS.
                sms.send(text).await?;
            }
            Screen::Booking => {
                let request = parse_ride_request(&line);
                print_quote(&mut fares, &request);
            }
            Screen::Map => match map.get(&line) {
                Some(hub) => print_hub(hub),
                None => println!("Unknown hub '{}'.", line),
            },
            Screen::Driver => handle_driver_input(&mut driver, &line),
            Screen::Sustainability => {
                match ImpactSection::ALL
                    .into_iter()
                    .find(|s| s.title().eq_ignore_ascii_case(&line))
                {
                    Some(section) => animate_section(&config, section).await?,
                    None => println!("Sections: impact, community, environment."),
                }
            }
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn parse_action(screen: Screen, line: &str) -> Option<Action> {
    if line.eq_ignore_ascii_case("back") {
        return Some(Action::Back);
    }
    if screen != Screen::Welcome {
        return None;
    }
    let by_number = line
        .parse::<usize>()
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|i| Screen::DESTINATIONS.get(i).copied());
    by_number.or_else(|| Screen::parse(line)).map(Action::Open)
}

/// `1`-`5` on the SMS screen picks a sample command
fn quick_pick(sms: &SmsService, line: &str) -> Option<&'static str> {
    let index = line.parse::<usize>().ok()?.checked_sub(1)?;
    sms.responder().sample_commands().nth(index)
}

/// `ride type, pickup, drop`; missing parts stay unselected
fn parse_ride_request(line: &str) -> RideRequest {
    let mut parts = line.split(',').map(str::trim);
    let mut request = RideRequest::new();
    request.ride_type = parts.next().and_then(RideType::parse);
    request.pickup = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
    request.drop = parts.next().filter(|s| !s.is_empty()).map(str::to_string);
    request
}

fn handle_driver_input(driver: &mut DriverDashboard, line: &str) {
    let mut words = line.split_whitespace();
    let (Some(verb), Some(id)) = (words.next(), words.next()) else {
        println!("Use 'accept <id>' or 'complete <id>'.");
        return;
    };

    let result = match verb.to_lowercase().as_str() {
        "accept" => driver.accept(id),
        "complete" => driver.complete(id),
        _ => {
            println!("Use 'accept <id>' or 'complete <id>'.");
            return;
        }
    };

    match result {
        Ok(booking) => println!("✅ {} is now {}", booking.id, booking.status),
        Err(e) => println!("❌ {}", e),
    }
}

fn render(screen: Screen, sms: &SmsService, driver: &DriverDashboard, map: &HubMap) {
    println!("\n== {} ==", screen.title());
    match screen {
        Screen::Welcome => {
            println!("Affordable, Green & Shared Rural Mobility");
            for (i, dest) in Screen::DESTINATIONS.iter().enumerate() {
                println!("  {}. {} ({})", i + 1, dest.title(), dest);
            }
        }
        Screen::Booking => {
            println!("Ride types:");
            for ride_type in RideType::ALL {
                println!("  {} - ৳{}+", ride_type, ride_type.base_rate());
            }
            println!("Hubs: {}", BOOKING_HUBS.join(", "));
            println!("Enter: <ride type>, <pickup hub>, <drop hub>   ('back' to return)");
        }
        Screen::Map => {
            print_map(map);
            println!("Enter a hub id for details ('back' to return)");
        }
        Screen::Driver => {
            print_driver(driver);
            println!("Enter 'accept <id>' or 'complete <id>' ('back' to return)");
        }
        Screen::Sustainability => {
            println!("Sections: impact, community, environment ('back' to return)");
        }
        Screen::Sms => {
            println!("Try these commands:");
            for (i, cmd) in sms.responder().sample_commands().enumerate() {
                println!("  {}. {}", i + 1, cmd);
            }
            println!("Type an SMS or a number ('back' to return)");
        }
    }
}

fn print_quote(fares: &mut FareEstimator, request: &RideRequest) {
    match fares.quote(request) {
        Some(quote) => {
            println!("{} ride: {} → {}", quote.ride_type, quote.pickup, quote.drop);
            println!("  Distance: {} km", quote.distance_km);
            println!("  Fare: ৳{}", quote.fare);
            println!("  Arrives in: {} mins", quote.eta_minutes);
            println!("  💡 Sharing saves you ৳{}!", quote.sharing_savings);
        }
        None => println!("Select Options to Book"),
    }
}

fn print_map(map: &HubMap) {
    println!(
        "{} of {} carts available across {} hubs",
        map.available_carts(),
        map.total_carts(),
        map.hubs().len()
    );
    println!(
        "{} in use, {} charging, {} hubs on active solar",
        map.carts_with_status(CartStatus::InUse),
        map.carts_with_status(CartStatus::Charging),
        map.solar_active_hubs()
    );
    for hub in map.hubs() {
        println!(
            "  {:<12} {:<16} {} available  {}",
            hub.id,
            hub.name,
            hub.available_carts(),
            hub.solar_status.label()
        );
    }
}

fn print_hub(hub: &Hub) {
    println!("{} ({})", hub.name, hub.solar_status.label());
    for cart in hub.carts {
        let mut line = format!(
            "  {:<8} {:<12} {:>3}%  {}/{} seats",
            cart.id,
            cart.status.label(),
            cart.battery_level,
            cart.current_passengers,
            cart.capacity
        );
        if let Some(minutes) = cart.estimated_return {
            line.push_str(&format!("  back in {} mins", minutes));
        }
        println!("{}", line);
    }
    if hub.available_carts() > 0 {
        println!("  Book Cart from {}", hub.name);
    }
}

fn print_driver(driver: &DriverDashboard) {
    println!(
        "Battery {}% - {} | Solar: {}",
        driver.battery_level(),
        driver.battery_advisory(),
        driver.solar().label()
    );
    let e = driver.earnings();
    println!(
        "Earnings: today ৳{} | week ৳{} | month ৳{} | {} rides | {}⭐ | {}% completion",
        e.today, e.week, e.month, e.total_rides, e.avg_rating, e.completion_rate
    );
    for status in [BookingStatus::Active, BookingStatus::Pending, BookingStatus::Completed] {
        for b in driver.with_status(status) {
            println!(
                "  [{}] {} {} → {} at {} ({} mins) ৳{} - {}",
                b.status, b.id, b.from, b.to, b.scheduled_time, b.estimated_duration, b.fare, b.customer_name
            );
        }
    }
}

fn print_section(section: ImpactSection) {
    println!("== {} ==", section.title());
    for stat in stats_in(section) {
        println!("  {:<36} {}", stat.label, stat.render(stat.value));
    }
}

async fn animate_section(config: &Config, section: ImpactSection) -> Result<(), AppError> {
    println!("== {} ==", section.title());
    for stat in stats_in(section) {
        let count_up = CountUp::new(stat.value)
            .with_duration(Duration::from_millis(config.stats.duration_ms))
            .with_start_delay(Duration::from_millis(config.stats.start_delay_ms));
        let handle = animate(count_up, Duration::from_millis(config.stats.frame_ms), move |value| {
            print!("\r  {:<36} {}", stat.label, stat.render(value));
            let _ = std::io::stdout().flush();
        });
        handle
            .await
            .map_err(|e| AppError::Internal(format!("Animation failed: {}", e)))?;
        println!();
    }
    Ok(())
}

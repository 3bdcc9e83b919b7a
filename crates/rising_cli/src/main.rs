//! `rising` command-line front end.
//!
//! Subcommands compute the Ascendant or house cusps for a birth and expose
//! the intermediate pipeline steps. Settings come from an optional TOML file.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use rising_chart::{HouseSystem, zodiac_position};
use rising_config::Settings;
use rising_rs::{AscendantReport, Geocoder, GeoCoordinate, StaticGeocoder, chart};
use rising_time::{
    BirthDate, ParsedTime, UtcInstant, UtcOffsetProvider, deg_to_hours, delta_t_for_month,
    gmst_deg, jd_to_calendar, julian_day, normalize,
};

#[derive(Parser)]
#[command(name = "rising", about = "Birth-chart Ascendant calculator")]
struct Cli {
    /// Settings file (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Raise log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct BirthArgs {
    /// Birth date (DD/MM/YYYY, YYYY-MM-DD or YYYY.MM.DD.)
    #[arg(long)]
    date: String,
    /// Local birth time; empty or "unknown" computes for noon
    #[arg(long, default_value = "")]
    time: String,
    /// Latitude in degrees, north positive
    #[arg(long, allow_hyphen_values = true, requires = "lon")]
    lat: Option<f64>,
    /// Longitude in degrees, east positive
    #[arg(long, allow_hyphen_values = true, requires = "lat")]
    lon: Option<f64>,
    /// Birth place name (built-in gazetteer)
    #[arg(long, conflicts_with_all = ["lat", "lon"])]
    place: Option<String>,
    /// UTC offset in hours, overriding the historical table
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<f64>,
    /// Skip ΔT and nutation (mean geometry)
    #[arg(long)]
    mean: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Ascendant and Midheaven for a birth
    Ascendant {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// House cusps for a birth
    Houses {
        #[command(flatten)]
        birth: BirthArgs,
        /// House system: placidus, porphyry, equal, whole-sign
        #[arg(long)]
        system: Option<String>,
    },
    /// Show how birth-time text is understood
    ParseTime {
        /// Free-form time text
        text: String,
    },
    /// Historical UTC offset at a place and local time
    Tz {
        #[command(flatten)]
        birth: BirthArgs,
    },
    /// Julian Day, ΔT and sidereal time of a UTC instant
    Jd {
        /// UTC date
        #[arg(long)]
        date: String,
        /// UTC time (HH:MM)
        #[arg(long, default_value = "00:00")]
        time: String,
    },
    /// Calendar date of a Julian Day
    Calendar {
        /// Julian Day
        jd: f64,
    },
    /// Zodiac sign of an ecliptic longitude
    Sign {
        /// Tropical ecliptic longitude in degrees
        #[arg(allow_hyphen_values = true)]
        lon: f64,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn load_settings(path: Option<&PathBuf>) -> Settings {
    match path {
        Some(p) => Settings::load(p).unwrap_or_else(|e| {
            eprintln!("{e}");
            std::process::exit(1);
        }),
        None => Settings::default(),
    }
}

/// Fold command-line overrides into the loaded settings.
fn apply_overrides(mut settings: Settings, birth: &BirthArgs) -> Settings {
    if let Some(hours) = birth.utc_offset {
        settings.timezone.fixed_offset_hours = Some(hours);
    }
    if birth.mean {
        settings.chart.apply_delta_t = false;
        settings.chart.apply_nutation = false;
    }
    settings
}

fn require_location(birth: &BirthArgs) -> GeoCoordinate {
    let resolved = match (&birth.place, birth.lat, birth.lon) {
        (Some(place), _, _) => StaticGeocoder::builtin()
            .resolve_coordinates(place)
            .map_err(|e| e.to_string()),
        (None, Some(lat), Some(lon)) => GeoCoordinate::new(lat, lon).map_err(|e| e.to_string()),
        _ => Err("give either --place or both --lat and --lon".to_string()),
    };
    resolved.unwrap_or_else(|msg| {
        eprintln!("{msg}");
        std::process::exit(1);
    })
}

fn require_date(text: &str) -> BirthDate {
    text.parse().unwrap_or_else(|e| {
        eprintln!("{e}");
        std::process::exit(1);
    })
}

fn require_house_system(name: &str) -> HouseSystem {
    HouseSystem::from_name(name).unwrap_or_else(|| {
        eprintln!("Invalid house system: {name}");
        eprintln!("Valid: placidus, porphyry, equal, whole-sign");
        std::process::exit(1);
    })
}

fn print_report(report: &AscendantReport) {
    let m = &report.moment;
    println!(
        "Ascendant:  {} ({:.4}°)",
        report.position, report.longitude_deg
    );
    println!(
        "Midheaven:  {} ({:.4}°)",
        report.midheaven, report.midheaven_deg
    );
    println!("Confidence: {:?}", report.confidence);
    println!("Offset:     {}", m.offset);
    println!("UTC:        {}", m.utc);
    println!("JD (UT):    {:.6}", m.jd_ut);
    println!("ΔT:         {:.2} s", m.delta_t_s);
    println!("LST:        {:.4}°", m.lst_deg);
    println!("Obliquity:  {:.5}°", m.obliquity_deg);
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let settings = load_settings(cli.config.as_ref());
    log::debug!("settings: {settings:?}");

    match cli.command {
        Commands::Ascendant { birth } => {
            let location = require_location(&birth);
            let settings = apply_overrides(settings, &birth);
            match rising_rs::ascendant(
                &settings,
                &birth.date,
                &birth.time,
                location.latitude_deg,
                location.longitude_deg,
            ) {
                Ok(report) => print_report(&report),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Houses { birth, system } => {
            let location = require_location(&birth);
            let mut settings = apply_overrides(settings, &birth);
            if let Some(name) = system {
                settings.chart.house_system = require_house_system(&name);
            }
            match chart(
                &settings,
                &birth.date,
                &birth.time,
                location.latitude_deg,
                location.longitude_deg,
            ) {
                Ok(c) => {
                    println!("{} houses", c.houses.system.name());
                    for (i, cusp) in c.houses.cusps.iter().enumerate() {
                        println!("{:>2}: {} ({:.4}°)", i + 1, zodiac_position(*cusp), cusp);
                    }
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::ParseTime { text } => match settings.parse_time(&text) {
            ParsedTime::Parsed(t) => println!("{t}"),
            ParsedTime::Defaulted(reason) => {
                println!("12:00 (defaulted: {})", reason.describe())
            }
        },

        Commands::Tz { birth } => {
            let location = require_location(&birth);
            let date = require_date(&birth.date);
            let settings = apply_overrides(settings, &birth);
            let time = settings.parse_time(&birth.time).time();
            let offset = match settings.offset_source() {
                Ok(source) => source.utc_offset(&location, &date, time),
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            };
            match offset {
                Ok(offset) => {
                    println!("Offset: {offset}");
                    println!("Source: {:?}", offset.accuracy);
                    println!("UTC:    {}", normalize(&date, time, &offset));
                }
                Err(e) => {
                    eprintln!("{e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Jd { date, time } => {
            let date = require_date(&date);
            let time = match settings.parse_time(&time) {
                ParsedTime::Parsed(t) => t,
                ParsedTime::Defaulted(reason) => {
                    eprintln!("Invalid time: {}", reason.describe());
                    std::process::exit(1);
                }
            };
            let utc = UtcInstant {
                year: date.year(),
                month: date.month(),
                day: date.day(),
                hour: time.hour,
                minute: time.minute,
            };
            let jd = julian_day(&utc);
            println!("UTC:  {utc}");
            println!("JD:   {jd:.6}");
            println!("ΔT:   {:.2} s", delta_t_for_month(utc.year, utc.month));
            let gmst = gmst_deg(jd);
            println!("GMST: {gmst:.6}° ({:.6} h)", deg_to_hours(gmst));
        }

        Commands::Calendar { jd } => {
            let (year, month, day) = jd_to_calendar(jd);
            println!("{year:04}-{month:02}-{day:09.6} UT");
        }

        Commands::Sign { lon } => {
            let p = zodiac_position(lon);
            println!("{} {}", p.sign.glyph(), p);
        }
    }
}

//! `link16`: inspect the J-series catalog, decode transmissions and build
//! sample track reports.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use link16_models::{
    catalog_summary, dispatch, DecodeOptions, DisEntityId, Family, Frame, Geodetic, Identity,
    Message, MessageBuilder, MessageReport, SkippedMessage, Track, TrackEnvironment,
    TrackSnapshot,
};
use serde::Serialize;
use tracing::{debug, info, warn};

mod config;

use config::{InspectConfig, OutputFormat};

/// Link-16 J-series message inspector.
#[derive(Parser, Debug)]
#[command(name = "link16", author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List every registered message family
    Catalog {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Decode a hex-encoded transmission
    Decode {
        /// Packed 70-bit words in hexadecimal
        hex: String,
        /// Fail on unknown families instead of skipping them
        #[arg(long)]
        strict: bool,
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Build a track report and print its hex framing
    SampleTrack(SampleTrackArgs),
}

#[derive(Args, Debug)]
struct SampleTrackArgs {
    /// Track environment (air, surface, subsurface, land, space)
    #[arg(long)]
    family: TrackEnvironment,
    /// Five-character track number
    #[arg(long, default_value = "00001")]
    track_number: String,
    /// Identity (pending, unknown, assumed_friend, friend, neutral, suspect, hostile)
    #[arg(long)]
    identity: Option<Identity>,
    /// Latitude in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lat: f64,
    /// Longitude in degrees
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    lon: f64,
    /// Height above the ellipsoid in metres
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    alt: f64,
    /// Ground speed in metres per second
    #[arg(long, default_value_t = 0.0)]
    speed: f64,
    /// Course in degrees from north
    #[arg(long, default_value_t = 0.0)]
    course: f64,
    /// Raw track quality code (0-15)
    #[arg(long)]
    quality: Option<u32>,
    /// Specific type code
    #[arg(long)]
    specific_type: Option<u32>,
    /// DIS entity id as site:application:entity
    #[arg(long)]
    dis: Option<DisEntityId>,
    /// Print JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let config = InspectConfig::from_env();

    // Logs go to stderr so JSON on stdout stays clean.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let cli = Cli::parse();
    let json_default = config.output == OutputFormat::Json;

    match cli.command {
        Commands::Catalog { json } => run_catalog(json || json_default),
        Commands::Decode { hex, strict, json } => {
            run_decode(&hex, strict || config.strict, json || json_default)
        }
        Commands::SampleTrack(args) => {
            let json = args.json || json_default;
            run_sample_track(args, json)
        }
    }
}

// ─── catalog ─────────────────────────────────────────────────────────

fn run_catalog(json: bool) -> Result<()> {
    let summary = catalog_summary();
    info!(families = summary.len(), "catalog loaded");

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("{:<7} {:>5}  {:<44} {:<24} {}", "FAMILY", "KEY", "NAME", "CONTINUATIONS", "EXTENSIONS");
    for family in &summary {
        println!(
            "{:<7} {:>5}  {:<44} {:<24} {}",
            family.family.to_string(),
            family.key,
            family.name,
            join(&family.continuations),
            join(&family.extensions),
        );
    }
    Ok(())
}

fn join(numbers: &[u8]) -> String {
    if numbers.is_empty() {
        return "-".to_string();
    }
    numbers
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

// ─── decode ──────────────────────────────────────────────────────────

#[derive(Serialize)]
struct DecodedMessage {
    #[serde(flatten)]
    report: MessageReport,
    track: Option<TrackSnapshot>,
}

#[derive(Serialize)]
struct DecodeOutput {
    messages: Vec<DecodedMessage>,
    skipped: Vec<SkippedMessage>,
}

fn run_decode(hex: &str, strict: bool, json: bool) -> Result<()> {
    let frame = Frame::from_hex(hex).context("reading transmission")?;
    debug!(words = frame.word_count(), strict, "frame parsed");

    let options = if strict {
        DecodeOptions::default()
    } else {
        DecodeOptions::lenient()
    };
    let stream = frame.decode(options).context("decoding transmission")?;

    for skipped in &stream.skipped {
        warn!(
            label = skipped.label,
            sublabel = skipped.sublabel,
            words = skipped.words,
            "skipped unknown family J{}.{}",
            skipped.label,
            skipped.sublabel
        );
    }

    let mut messages = Vec::with_capacity(stream.messages.len());
    for message in &stream.messages {
        let handled = dispatch(message, &mut |family: Family, message: &Message| {
            debug!(%family, words = message.word_count(), "decoded {family}");
            messages.push(DecodedMessage {
                report: message.describe(),
                track: Track::new(message).map(|track| track.snapshot()),
            });
        });
        if !handled {
            let (label, sublabel) = message.label();
            warn!("no handler for J{label}.{sublabel}");
        }
    }
    info!(messages = messages.len(), skipped = stream.skipped.len(), "decode complete");

    let output = DecodeOutput {
        messages,
        skipped: stream.skipped,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        print_decode(&output);
    }
    Ok(())
}

fn print_decode(output: &DecodeOutput) {
    for decoded in &output.messages {
        let report = &decoded.report;
        let title = report
            .family
            .map_or("unregistered", |family| family.def().name);
        println!(
            "J{}.{} {} ({} words)",
            report.label,
            report.sublabel,
            title,
            report.words.len()
        );
        for word in &report.words {
            println!("  {}", word.name);
            for field in &word.fields {
                println!(
                    "    {:<24} {:>3}b {:>10}  {} {}",
                    field.name, field.width, field.raw, field.value, field.unit
                );
            }
        }
        if let Some(track) = &decoded.track {
            print_track(track);
        }
    }
    for skipped in &output.skipped {
        println!(
            "J{}.{} unknown family, {} words skipped",
            skipped.label, skipped.sublabel, skipped.words
        );
    }
}

fn print_track(track: &TrackSnapshot) {
    println!("  track ({})", track.environment);
    if let Some(number) = &track.track_number {
        println!("    track number   {number}");
    }
    if let Some(identity) = track.identity {
        println!("    identity       {identity}");
    }
    match &track.location {
        Some(at) => println!(
            "    location       {:.5}, {:.5}, {:.1} m",
            at.latitude_deg, at.longitude_deg, at.altitude_m
        ),
        None => println!("    location       -"),
    }
    println!("    speed          {:.1} m/s", track.speed_mps);
    println!("    course         {:.1} deg", track.course_deg);
    if let Some(cep) = track.track_quality_error_95cep_m {
        println!("    quality        {cep:.0} m (95% CEP)");
    }
    if let Some(code) = track.specific_type {
        println!("    specific type  {code}");
    }
    if let Some(id) = track.dis_entity_id {
        println!("    DIS entity     {id}");
    }
}

// ─── sample-track ────────────────────────────────────────────────────

#[derive(Serialize)]
struct SampleOutput {
    hex: String,
    words: usize,
    track: Option<TrackSnapshot>,
}

fn run_sample_track(args: SampleTrackArgs, json: bool) -> Result<()> {
    let mut builder = MessageBuilder::track(args.family)
        .track_number(args.track_number)
        .location(Geodetic::new(args.lat, args.lon, args.alt))
        .speed_course(args.speed, args.course);
    if let Some(identity) = args.identity {
        builder = builder.identity(identity);
    }
    if let Some(code) = args.quality {
        builder = builder.track_quality(code);
    }
    if let Some(code) = args.specific_type {
        builder = builder.specific_type(code);
    }
    if let Some(id) = args.dis {
        builder = builder.dis_entity_id(id);
    }

    let message = builder
        .build()
        .with_context(|| format!("building {} track", args.family))?;
    let frame = Frame::from_messages([&message]).context("encoding track")?;
    info!(family = %args.family, words = frame.word_count(), "sample track built");

    let output = SampleOutput {
        hex: frame.to_hex(),
        words: frame.word_count(),
        track: Track::new(&message).map(|track| track.snapshot()),
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&output)?);
    } else {
        println!("{}", output.hex);
        if let Some(track) = &output.track {
            print_track(track);
        }
    }
    Ok(())
}

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use rand::SeedableRng as _;

#[derive(Parser, Debug)]
#[command(name = "tuneprint", version)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render one profile to `{user_id}.png` and its metadata sidecar.
    Generate(GenerateArgs),
    /// Render the four demo profiles and one random listener.
    Demo(DemoArgs),
    /// Consume a trigger file if present, otherwise run the demo batch.
    Run(RunArgs),
}

#[derive(Parser, Debug)]
struct OutputArgs {
    /// Output directory (created if missing).
    #[arg(long, default_value = "output")]
    out_dir: PathBuf,

    /// Skip the score/time captions.
    #[arg(long, default_value_t = false)]
    no_captions: bool,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// Output id; defaults to `user_{unix_secs}`.
    #[arg(long)]
    user_id: Option<String>,

    /// Input profile JSON; flags below override its fields.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    #[arg(long)]
    energy: Option<f64>,
    #[arg(long)]
    valence: Option<f64>,
    #[arg(long)]
    danceability: Option<f64>,
    #[arg(long)]
    acousticness: Option<f64>,
    #[arg(long)]
    unique_score: Option<f64>,
    /// Unix seconds; defaults to now.
    #[arg(long)]
    timestamp: Option<f64>,
}

#[derive(Parser, Debug)]
struct DemoArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// Seed for the random listener profile.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct RunArgs {
    #[command(flatten)]
    output: OutputArgs,

    /// Trigger file to consume.
    #[arg(long, default_value = tuneprint::DEFAULT_TRIGGER_FILE)]
    trigger: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Generate(args) => cmd_generate(args),
        Command::Demo(args) => cmd_demo(args),
        Command::Run(args) => cmd_run(args),
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn setup(output: &OutputArgs) -> (tuneprint::Generator, tuneprint::OutputStore) {
    let generator = tuneprint::Generator::new(tuneprint::GeneratorOpts {
        annotate: !output.no_captions,
        ..tuneprint::GeneratorOpts::default()
    });
    (generator, tuneprint::OutputStore::new(&output.out_dir))
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let mut profile = match &args.in_path {
        Some(path) => tuneprint::MusicProfile::from_path(path)
            .with_context(|| format!("load profile '{}'", path.display()))?,
        None => tuneprint::MusicProfile::now(),
    };
    let overrides = [
        (&mut profile.energy, args.energy),
        (&mut profile.valence, args.valence),
        (&mut profile.danceability, args.danceability),
        (&mut profile.acousticness, args.acousticness),
        (&mut profile.unique_score, args.unique_score),
        (&mut profile.timestamp, args.timestamp),
    ];
    for (field, value) in overrides {
        if let Some(v) = value {
            *field = v;
        }
    }

    let user_id = args
        .user_id
        .unwrap_or_else(|| tuneprint::default_user_id(chrono::Utc::now().timestamp()));
    let (generator, store) = setup(&args.output);
    let saved = tuneprint::generate_and_save(&generator, &store, &user_id, &profile)
        .with_context(|| format!("generate image for '{user_id}'"))?;

    eprintln!("wrote {}", saved.image_path.display());
    eprintln!("wrote {}", saved.metadata_path.display());
    Ok(())
}

fn cmd_demo(args: DemoArgs) -> anyhow::Result<()> {
    let (generator, store) = setup(&args.output);
    let report = demo_batch(&generator, &store, args.seed);
    for saved in &report.saved {
        eprintln!("wrote {}", saved.image_path.display());
    }
    if report.saved.is_empty() && report.failed > 0 {
        anyhow::bail!("all {} demo profiles failed", report.failed);
    }
    Ok(())
}

fn cmd_run(args: RunArgs) -> anyhow::Result<()> {
    let (generator, store) = setup(&args.output);
    let opts = tuneprint::BatchOpts {
        trigger_path: args.trigger,
    };
    let processed = tuneprint::process_trigger_file(&opts, &generator, &store)
        .with_context(|| format!("process trigger file '{}'", opts.trigger_path.display()))?;
    match processed {
        Some(saved) => {
            eprintln!("wrote {}", saved.image_path.display());
            Ok(())
        }
        None => {
            tracing::info!("no trigger file, running demo batch");
            let report = demo_batch(&generator, &store, None);
            eprintln!(
                "demo batch: {} written, {} failed",
                report.saved.len(),
                report.failed
            );
            Ok(())
        }
    }
}

fn demo_batch(
    generator: &tuneprint::Generator,
    store: &tuneprint::OutputStore,
    seed: Option<u64>,
) -> tuneprint::BatchReport {
    let timestamp = tuneprint::now_unix_secs();
    match seed {
        Some(seed) => {
            let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
            tuneprint::run_demo_batch(generator, store, &mut rng, timestamp)
        }
        None => tuneprint::run_demo_batch(generator, store, &mut rand::thread_rng(), timestamp),
    }
}

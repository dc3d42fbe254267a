use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bids_core::events::{read_events, EventSource};
use bids_core::tree::print_dir_tree;
use bids_core::{
    copy_recording_set, copyfile_brainvision, BidsFilename, BidsFolders, CoreConfig,
    DatasetDescription, EntityKey, SyntheticRecording, TextOrList,
};

#[derive(Parser)]
#[command(name = "bids")]
#[command(about = "Organise neurophysiology recordings as a BIDS dataset")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print a BIDS filename built from entities
    Filename {
        #[arg(long)]
        subject: Option<String>,
        #[arg(long)]
        session: Option<String>,
        #[arg(long)]
        task: Option<String>,
        #[arg(long)]
        acquisition: Option<String>,
        /// Run label, used verbatim
        #[arg(long, conflicts_with = "run_index")]
        run: Option<String>,
        /// Run number, zero-padded to two digits
        #[arg(long)]
        run_index: Option<u32>,
        #[arg(long)]
        processing: Option<String>,
        #[arg(long)]
        space: Option<String>,
        #[arg(long)]
        recording: Option<String>,
        /// Trailing token, e.g. eeg.vhdr
        #[arg(long)]
        suffix: Option<String>,
        /// Directory to join the name onto
        #[arg(long)]
        prefix: Option<String>,
    },
    /// Create (or print) a subject/session/kind folder under the dataset root
    Folders {
        /// Subject label
        subject: String,
        #[arg(long)]
        session: Option<String>,
        /// Modality folder, e.g. eeg
        #[arg(long)]
        kind: Option<String>,
        /// Dataset root (defaults to BIDS_ROOT)
        #[arg(long)]
        root: Option<PathBuf>,
        /// Only print the path
        #[arg(long)]
        dry_run: bool,
        /// Empty the folder if it already exists
        #[arg(long)]
        overwrite: bool,
    },
    /// Copy one BrainVision member, rewriting its pointers
    #[command(name = "copy")]
    CopyMember { src: PathBuf, dest: PathBuf },
    /// Copy a full BrainVision set, driven by its .vhdr header
    CopySet { src: PathBuf, dest: PathBuf },
    /// Write dataset_description.json into the dataset root
    Describe {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        license: Option<String>,
        /// Comma separated list ("A, B")
        #[arg(long)]
        authors: Option<String>,
        #[arg(long)]
        acknowledgements: Option<String>,
        #[arg(long)]
        how_to_acknowledge: Option<String>,
        /// Comma separated list ("A, B")
        #[arg(long)]
        funding: Option<String>,
        /// Comma separated list ("A, B")
        #[arg(long)]
        references_and_links: Option<String>,
        #[arg(long)]
        doi: Option<String>,
    },
    /// Print a directory tree (defaults to the dataset root)
    Tree { dir: Option<PathBuf> },
    /// Write a synthetic BrainVision recording
    MakeTestData {
        #[arg(long, default_value = ".")]
        output_dir: PathBuf,
        #[arg(long, default_value = "test")]
        basename: String,
        #[arg(long, default_value_t = 2)]
        channels: usize,
        /// Sampling frequency in Hz
        #[arg(long, default_value_t = 1000.0)]
        fs: f64,
        /// Duration in seconds
        #[arg(long, default_value_t = 10)]
        duration: u32,
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Print the events held in an MNE text event file
    Events { file: PathBuf },
}

/// Entry point for the `bids` command line tool.
///
/// Configuration is resolved once here and passed into the core.
///
/// # Environment Variables
/// - `BIDS_ROOT`: Dataset root (default: ".")
/// - `BIDS_VERSION`: Version written to dataset_description.json (default: "1.1.1")
/// - `RUST_LOG`: Log filter (default: info for the BIDS crates)
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("bids_core=info".parse()?)
                .add_directive("bids_files=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = CoreConfig::from_values(
        std::env::var("BIDS_ROOT").ok(),
        std::env::var("BIDS_VERSION").ok(),
    )?;
    tracing::debug!("resolved configuration: {:?}", config);

    match cli.command {
        Some(Commands::Filename {
            subject,
            session,
            task,
            acquisition,
            run,
            run_index,
            processing,
            space,
            recording,
            suffix,
            prefix,
        }) => {
            let mut builder = BidsFilename::new();
            for (key, value) in [
                (EntityKey::Subject, subject),
                (EntityKey::Session, session),
                (EntityKey::Task, task),
                (EntityKey::Acquisition, acquisition),
                (EntityKey::Processing, processing),
                (EntityKey::Space, space),
                (EntityKey::Recording, recording),
            ] {
                if let Some(value) = value {
                    builder = builder.entity(key, value);
                }
            }
            if let Some(run) = run {
                builder = builder.run(run);
            }
            if let Some(index) = run_index {
                builder = builder.run(index);
            }
            if let Some(suffix) = suffix {
                builder = builder.suffix(suffix);
            }
            if let Some(prefix) = prefix {
                builder = builder.prefix(prefix);
            }
            println!("{}", builder.build()?);
        }
        Some(Commands::Folders {
            subject,
            session,
            kind,
            root,
            dry_run,
            overwrite,
        }) => {
            let mut folders = BidsFolders::new(subject)
                .root(root.unwrap_or_else(|| config.bids_root().to_path_buf()))
                .make_dir(!dry_run)
                .overwrite(overwrite);
            if let Some(session) = session {
                folders = folders.session(session);
            }
            if let Some(kind) = kind {
                folders = folders.kind(kind);
            }
            println!("{}", folders.build()?.display());
        }
        Some(Commands::CopyMember { src, dest }) => {
            copyfile_brainvision(&src, &dest)?;
            println!("Copied {} to {}", src.display(), dest.display());
        }
        Some(Commands::CopySet { src, dest }) => {
            copy_recording_set(&src, &dest)?;
            println!("Copied {} to {}", src.display(), dest.display());
        }
        Some(Commands::Describe {
            name,
            license,
            authors,
            acknowledgements,
            how_to_acknowledge,
            funding,
            references_and_links,
            doi,
        }) => {
            let description = DatasetDescription {
                name,
                license,
                authors: authors.map(TextOrList::from),
                acknowledgements: acknowledgements.map(TextOrList::from),
                how_to_acknowledge: how_to_acknowledge.map(TextOrList::from),
                funding: funding.map(TextOrList::from),
                references_and_links: references_and_links.map(TextOrList::from),
                doi,
            };
            let fname = description.write(config.bids_root(), &config)?;
            println!("Wrote {}", fname.display());
        }
        Some(Commands::Tree { dir }) => {
            print_dir_tree(dir.as_deref().unwrap_or(config.bids_root()))?;
        }
        Some(Commands::MakeTestData {
            output_dir,
            basename,
            channels,
            fs,
            duration,
            seed,
        }) => {
            let recording = SyntheticRecording {
                basename,
                n_channels: channels,
                sampling_frequency: fs,
                duration_secs: duration,
                seed,
            };
            let vhdr = recording.write(&output_dir)?;
            println!("{}", vhdr.display());
        }
        Some(Commands::Events { file }) => {
            for [sample, before, id] in read_events(EventSource::File(&file))?.rows() {
                println!("{}\t{}\t{}", sample, before, id);
            }
        }
        None => {
            println!("Use 'bids --help' for commands");
        }
    }

    Ok(())
}

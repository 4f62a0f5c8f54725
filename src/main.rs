use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;
use friendlens_core::{load_table, Table, TableSummary};
use friendlens_engine::{
    match_profile, recommend_friends_with, recommend_hobbies, FriendReport, HobbyReport,
    MatchReport, ProfileSchema, DEFAULT_TOP_K, SOURCE_COLUMN, TARGET_COLUMN,
};

/// Friend and interest recommendations from tabular profiles
#[derive(Parser, Debug)]
#[command(name = "friendlens")]
#[command(about = "Friend and interest recommendations from CSV profiles", long_about = None)]
struct Args {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print per-column summaries of a CSV file
    Summary {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,
    },
    /// Print the first records of a CSV file
    Preview {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Number of records to print
        #[arg(short = 'n', long, default_value_t = 10)]
        rows: usize,
    },
    /// Recommend friends for a user from a connection table
    Recommend {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// User to recommend for
        #[arg(short, long)]
        target: String,

        /// Maximum recommendations returned
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// Column naming the user on each connection row
        #[arg(long, default_value = SOURCE_COLUMN)]
        source_column: String,

        /// Column naming the user's friend on each connection row
        #[arg(long, default_value = TARGET_COLUMN)]
        target_column: String,
    },
    /// Suggest hobbies and clubs for a user from a profile table
    Suggest {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// User to suggest for
        #[arg(short, long)]
        target: String,

        /// Maximum suggestions returned
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,

        /// JSON schema file overriding the built-in lifestyle schema
        #[arg(long)]
        schema: Option<PathBuf>,
    },
    /// Match table rows against an ad-hoc feature vector
    Match {
        /// Path to the CSV file
        #[arg(short, long)]
        file: PathBuf,

        /// Comma-separated feature values
        #[arg(short, long, value_delimiter = ',', required = true)]
        values: Vec<f32>,

        /// Columns the values correspond to, defaulting to every numeric column
        #[arg(short, long, value_delimiter = ',')]
        columns: Option<Vec<String>>,

        /// Maximum matches returned
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: usize,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // Logs go to stderr so stdout stays valid JSON
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting friendlens v{}", env!("CARGO_PKG_VERSION"));

    match args.command {
        Command::Summary { file } => {
            let table = load(&file)?;
            let summary = TableSummary::describe(&table);
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        Command::Preview { file, rows } => {
            let table = load(&file)?;
            println!("{}", serde_json::to_string_pretty(&table.head(rows))?);
        }
        Command::Recommend {
            file,
            target,
            top_k,
            source_column,
            target_column,
        } => {
            let table = load(&file)?;
            let recommendations =
                recommend_friends_with(&table, &source_column, &target_column, &target, top_k);
            let report = FriendReport::new(target, recommendations);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Suggest {
            file,
            target,
            top_k,
            schema,
        } => {
            let table = load(&file)?;
            let schema = match schema {
                Some(path) => ProfileSchema::from_json(&std::fs::read_to_string(path)?)?,
                None => ProfileSchema::lifestyle(),
            };
            let suggestions = recommend_hobbies(&table, &schema, &target, top_k)?;
            let report = HobbyReport::new(target, suggestions);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Command::Match {
            file,
            values,
            columns,
            top_k,
        } => {
            let table = load(&file)?;
            let matches = match_profile(&table, columns.as_deref(), &values, top_k)?;
            let report = MatchReport::new(matches);
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn load(file: &Path) -> anyhow::Result<Table> {
    let table = load_table(file)?;
    info!(
        "Loaded {} records, {} columns from {:?}",
        table.row_count(),
        table.column_count(),
        file
    );
    Ok(table)
}

use clap::{Parser, Subcommand};

pub const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Parser, Debug)]
#[command(name = "devup", version, about = "Development environment entrypoint")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_BIND,
        help = "Address the development server binds to (HOST:PORT)"
    )]
    pub bind: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    Up {
        #[arg(
            long,
            default_value_t = false,
            help = "Poll the database endpoint until reachable before migrating"
        )]
        wait_db: bool,
        #[arg(long, default_value_t = 1, help = "Seconds between probe attempts")]
        interval_secs: u64,
    },
    Migrate,
    Serve,
    WaitDb {
        #[arg(long, default_value_t = 1, help = "Seconds between probe attempts")]
        interval_secs: u64,
    },
    Check,
}

use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand, ValueEnum};

use crate::{
    commands::{batch::batch, init::init, solve::solve},
    input::RequestArgs,
};

#[derive(Debug, Clone, Subcommand)]
enum Command {
    /// Solve a single pursuit described on the command line.
    #[clap(name = "solve")]
    Solve {
        #[clap(flatten)]
        request: RequestArgs,

        /// Also print this many samples of both tracks.
        #[clap(long)]
        track: Option<usize>,
    },

    /// Solve every scenario in a scenario file.
    #[clap(name = "batch")]
    Batch { file: PathBuf },

    /// Write a scenario file with example scenarios.
    #[clap(name = "init")]
    Init {
        file: PathBuf,

        /// Overwrite the file if it already exists.
        #[clap(long, default_value = "false", action)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "pursuit", about = "Closed-form lead pursuit solver")]
pub struct Cli {
    #[clap(subcommand)]
    command: Command,

    #[clap(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[clap(long, global = true, default_value = "info")]
    pub log_level: String,

    /// Also write JSON logs to this file.
    #[clap(long, global = true)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    pub fn start(self) -> ExitCode {
        let result = match self.command {
            Command::Solve { request, track } => solve(request, track, self.format),
            Command::Batch { file } => batch(&file, self.format),
            Command::Init { file, force } => init(&file, force).map(|_| String::new()),
        };

        match result {
            Ok(output) => {
                print!("{}", output);
                ExitCode::SUCCESS
            }
            Err(err) => {
                eprintln!("Error: {:#}", err);
                ExitCode::FAILURE
            }
        }
    }
}

//! CLI argument parsing using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Which parts of a day to run
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq)]
pub enum PartSelection {
    First,
    Second,
    #[default]
    All,
}

impl PartSelection {
    pub fn includes(self, part: u8) -> bool {
        match self {
            PartSelection::First => part == 1,
            PartSelection::Second => part == 2,
            PartSelection::All => true,
        }
    }

    /// Selected parts among `1..=max_parts`, ascending
    pub fn parts(self, max_parts: u8) -> impl Iterator<Item = u8> {
        (1..=max_parts).filter(move |&part| self.includes(part))
    }
}

/// Advent of Code 2023 launcher
#[derive(Parser, Debug)]
#[command(name = "aoc", about = "Run, check and fetch Advent of Code 2023 puzzles", version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Enable additional debugging output
    #[arg(short = 'D', long, global = true)]
    pub debug: bool,

    /// Directory holding `dayNN/input` and the recorded `partN.solution` files
    #[arg(long, global = true, default_value = "data")]
    pub data_dir: PathBuf,

    /// Print answers without timings
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Solve one day's puzzle
    Run {
        /// The day of the puzzle you want to run. By default today's
        #[arg(short, long)]
        day: Option<u8>,

        /// Input file, with the contents as obtained in the AoC
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Which part of the day puzzle to run
        #[arg(short, long, value_enum, default_value_t = PartSelection::All)]
        part: PartSelection,
    },

    /// Compare answers with the recorded solutions
    Check {
        /// The day to check. By default today's
        #[arg(short, long, conflicts_with = "all")]
        day: Option<u8>,

        /// Check every day that has code
        #[arg(long)]
        all: bool,

        /// Worker threads (defaults to the number of CPUs)
        #[arg(long)]
        threads: Option<usize>,
    },

    /// Download a day's puzzle input
    Fetch {
        /// The day to download. By default today's
        #[arg(short, long)]
        day: Option<u8>,

        /// Overwrite an input that is already present
        #[arg(long)]
        force: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_command_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_part_selection() {
        assert_eq!(PartSelection::First.parts(2).collect::<Vec<_>>(), vec![1]);
        assert_eq!(PartSelection::Second.parts(2).collect::<Vec<_>>(), vec![2]);
        assert_eq!(PartSelection::All.parts(2).collect::<Vec<_>>(), vec![1, 2]);
        assert_eq!(PartSelection::Second.parts(1).count(), 0);
        assert!(PartSelection::All.includes(7));
    }

    #[test]
    fn test_run_arguments() {
        let args = Args::try_parse_from(["aoc", "-D", "run", "-d", "5", "-p", "second"]).unwrap();
        assert!(args.debug);
        assert_eq!(args.data_dir, PathBuf::from("data"));
        match args.command {
            Command::Run { day, input, part } => {
                assert_eq!(day, Some(5));
                assert_eq!(input, None);
                assert_eq!(part, PartSelection::Second);
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["aoc", "check", "--all", "-q", "--data-dir", "/tmp/x"]).unwrap();
        assert!(args.quiet);
        assert_eq!(args.data_dir, PathBuf::from("/tmp/x"));
        assert!(matches!(args.command, Command::Check { all: true, day: None, .. }));
    }

    #[test]
    fn test_check_day_conflicts_with_all() {
        assert!(Args::try_parse_from(["aoc", "check", "--all", "-d", "3"]).is_err());
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Args::try_parse_from(["aoc"]).is_err());
    }
}

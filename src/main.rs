use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;
use vseries::{
    Config, IncrementError, Level, ParseError, Version, DEFAULT_PRE_RELEASE_INITIAL_NUMBER,
};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] ParseError),

    #[error("{0}")]
    Increment(#[from] IncrementError),

    #[error("At least one of --level, --pre-release or --release should be given")]
    NothingToBump,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Debug)]
enum LevelArg {
    Major,
    Minor,
    Patch,
    PreRelease,
}

impl LevelArg {
    fn to_level(self) -> Level {
        match self {
            LevelArg::Major => Level::Major,
            LevelArg::Minor => Level::Minor,
            LevelArg::Patch => Level::Patch,
            LevelArg::PreRelease => Level::PreRelease,
        }
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log what is being done to stderr. `RUST_LOG` takes precedence.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates that a version starts with `MAJOR.MINOR.PATCH`
    Valid {
        /// The version string to validate
        version: String,
    },

    /// Derives a new version from `VERSION`.
    ///
    /// The actions are applied in this order: `--release`, `--pre-release`, then `--level`. At
    /// least one must be given.
    Bump {
        /// The version string to increment
        version: String,

        /// The level to increment
        #[arg(short, long, value_enum)]
        level: Option<LevelArg>,

        /// Attach a pre-release with this name, unless the version already has one with this name
        #[arg(short, long, value_name = "NAME")]
        pre_release: Option<String>,

        /// Drop the pre-release
        #[arg(short, long)]
        release: bool,

        /// The number that new and restarted pre-releases start at
        #[arg(long, value_name = "N", default_value_t = DEFAULT_PRE_RELEASE_INITIAL_NUMBER)]
        initial_number: u64,
    },

    /// Compares two versions and prints `<`, `=` or `>`
    Compare {
        /// The left-hand version
        a: String,

        /// The right-hand version
        b: String,
    },

    /// Prints versions in ascending order, one per line
    Sort {
        /// The versions to sort
        versions: Vec<String>,

        /// Sort in descending order instead
        #[arg(long)]
        reverse: bool,
    },
}

type Output = (String, i32);

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match do_work(cli) {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_directive = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    match cli.command {
        Commands::Valid { version } => Ok(if Version::parse(&version).is_ok() {
            ("true".to_string(), 0)
        } else {
            ("false".to_string(), 1)
        }),
        Commands::Bump {
            version,
            level,
            pre_release,
            release,
            initial_number,
        } => {
            if level.is_none() && pre_release.is_none() && !release {
                return Err(CliError::NothingToBump);
            }
            let config = Config::default().with_pre_release_initial_number(initial_number);

            let mut next = Version::parse(&version)?;
            if release {
                next = next.without_pre_release();
            }
            if let Some(name) = &pre_release {
                next = next.with_pre_release_with(name, &config);
            }
            if let Some(level) = level {
                next = next.next_with(&level.to_level(), &config)?;
            }
            tracing::debug!(from = %version, to = %next, "bumped");

            Ok((next.to_string(), 0))
        }
        Commands::Compare { a, b } => {
            let symbol = match Version::parse(&a)?.cmp(&Version::parse(&b)?) {
                std::cmp::Ordering::Less => "<",
                std::cmp::Ordering::Equal => "=",
                std::cmp::Ordering::Greater => ">",
            };
            Ok((symbol.to_string(), 0))
        }
        Commands::Sort { versions, reverse } => {
            let mut parsed = versions
                .iter()
                .map(|version| Version::parse(version))
                .collect::<Result<Vec<_>, _>>()?;
            parsed.sort();
            if reverse {
                parsed.reverse();
            }
            let lines = parsed
                .iter()
                .map(Version::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            Ok((lines, 0))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn run(args: &[&str]) -> Result<Output, CliError> {
        let cli = Cli::try_parse_from(std::iter::once("vseries").chain(args.iter().copied()))
            .unwrap();
        do_work(cli)
    }

    #[rstest]
    #[case(&["valid", "1.2.3-rc.1"], ("true", 0))]
    #[case(&["valid", "1.2"], ("false", 1))]
    #[case(&["bump", "1.2.3", "--level", "minor"], ("1.3.0", 0))]
    #[case(&["bump", "3.0.99-rc.10", "-l", "patch"], ("3.0.100-rc.1", 0))]
    #[case(&["bump", "3.0.99-rc.10", "-l", "patch", "--initial-number", "0"], ("3.0.100-rc.0", 0))]
    #[case(&["bump", "1.2.3", "-l", "minor", "-p", "beta"], ("1.3.0-beta.1", 0))]
    #[case(&["bump", "1.2.3-beta.4", "-p", "beta", "-l", "pre-release"], ("1.2.3-beta.5", 0))]
    #[case(&["bump", "1.2.3-beta.4", "-p", "rc"], ("1.2.3-rc.1", 0))]
    #[case(&["bump", "1.2.3-rc.4", "--release"], ("1.2.3", 0))]
    #[case(&["compare", "1.0.0", "1.0.0-rc.1"], (">", 0))]
    #[case(&["compare", "1.0.0-rc.9", "1.0.0-rc.10"], ("<", 0))]
    #[case(&["compare", "0.1.0.rc.10", "0.1.0-rc.10"], ("=", 0))]
    #[case(&["sort", "1.0.0", "1.0.0-rc.10", "0.9.0", "1.0.0-rc.9"], ("0.9.0\n1.0.0-rc.9\n1.0.0-rc.10\n1.0.0", 0))]
    #[case(&["sort", "--reverse", "1.0.0", "2.0.0"], ("2.0.0\n1.0.0", 0))]
    fn test_do_work(#[case] args: &[&str], #[case] expected: (&str, i32)) {
        let (output, exit_code) = run(args).unwrap();
        assert_eq!(expected, (output.as_str(), exit_code));
    }

    #[test]
    fn test_bump_blank_pre_release() {
        let res = run(&["bump", "3.0.99", "--level", "pre-release"]);
        assert!(matches!(
            res,
            Err(CliError::Increment(IncrementError::BlankPreRelease))
        ));
    }

    #[test]
    fn test_bump_nothing() {
        assert!(matches!(run(&["bump", "1.2.3"]), Err(CliError::NothingToBump)));
    }

    #[test]
    fn test_malformed() {
        assert!(matches!(
            run(&["compare", "1.2", "1.2.3"]),
            Err(CliError::Parse(ParseError::Malformed { .. }))
        ));
    }
}

//! `pbecrypt`: encrypt or decrypt a single file with a password.

use clap::Parser;
use pbecrypt_rs::consts::VERSION_NAME;
use pbecrypt_rs::{run, Operation, PbecryptError};
use std::error::Error as _;
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::error;
use tracing::metadata::LevelFilter;
use tracing_subscriber::{prelude::*, EnvFilter};

const HELP_DESCRIPTION: &str = "Help:
-v to get app version;
Usage:
First parameter: -e (encrypt) or -d (decrypt);
Second parameter: your password;
Third parameter: path to file.

Example:
>pbecrypt -e MyPassword path/to/file/example.txt

Resulted file will be created at the same directory as the source file";

#[derive(Parser, Debug)]
#[command(
    name = "pbecrypt",
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Cli {
    /// Encrypt the file
    #[arg(short = 'e', conflicts_with_all = ["decrypt", "version"])]
    encrypt: bool,

    /// Decrypt the file
    #[arg(short = 'd', conflicts_with = "version")]
    decrypt: bool,

    /// Print the version
    #[arg(short = 'v', conflicts_with_all = ["password", "file"])]
    version: bool,

    /// Password; may start with `-` unless it is exactly a known flag
    #[arg(allow_hyphen_values = true)]
    password: Option<String>,

    /// File to transform
    file: Option<PathBuf>,
}

#[derive(Debug, PartialEq)]
enum Command {
    Version,
    Transform {
        operation: Operation,
        password: String,
        file: PathBuf,
    },
    Help,
}

impl Cli {
    fn into_command(self) -> Command {
        match self {
            Cli {
                version: true, ..
            } => Command::Version,
            Cli {
                encrypt,
                decrypt,
                password: Some(password),
                file: Some(file),
                ..
            } if encrypt != decrypt => Command::Transform {
                operation: if encrypt {
                    Operation::Encrypt
                } else {
                    Operation::Decrypt
                },
                password,
                file,
            },
            _ => Command::Help,
        }
    }
}

/// Map raw arguments to a command. Anything clap rejects prints the help text.
fn parse_command<I, T>(args: I) -> Command
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    Cli::try_parse_from(args)
        .map(Cli::into_command)
        .unwrap_or(Command::Help)
}

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .init();

    match parse_command(std::env::args_os()) {
        Command::Version => println!("Current version: {VERSION_NAME}"),
        Command::Help => println!("{HELP_DESCRIPTION}"),
        Command::Transform {
            operation,
            password,
            file,
        } => match run(operation, &password, &file) {
            Ok(_) => match operation {
                Operation::Encrypt => println!("Success, file encrypted!"),
                Operation::Decrypt => println!("Success, file decrypted!"),
            },
            Err(e) => report(&e),
        },
    }
}

fn report(e: &PbecryptError) {
    if e.is_validation() {
        println!("{e}");
        return;
    }

    error!(error = ?e, "operation failed");
    println!("{e}");
    let mut source = e.source();
    while let Some(cause) = source {
        println!("  caused by: {cause}");
        source = cause.source();
    }
}

use clap::{
    crate_authors, crate_description, crate_name, crate_version, Arg, ArgAction, ArgMatches,
    Command,
};
use colored::Colorize;
use dirsmith::api::{self, BuildOutcome};
use dirsmith::builder::BuildOptions;
use dirsmith::errors::{FileOperation, IoError};
use dirsmith::{prompt, reveal};
use std::io::Read;
use std::path::PathBuf;
use std::{fs, io};

// The CLI layer should only parse inputs and forward them to library code.
fn main() -> miette::Result<()> {
    let matches = Command::new(crate_name!())
        .about(crate_description!())
        .author(crate_authors!())
        .version(crate_version!())
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose output")
                .action(ArgAction::SetTrue)
                .global(true),
        )
        .subcommand(
            Command::new("build")
                .about("Create the directory structure described by a tree drawing")
                .arg(
                    Arg::new("structure")
                        .help("File containing the tree drawing, or '-' for stdin")
                        .required(true),
                )
                .arg(Arg::new("target").help("Directory the structure is created under"))
                .arg(
                    Arg::new("no-subfolder")
                        .long("no-subfolder")
                        .help("Create entries directly under the target instead of a project subfolder")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("yes")
                        .short('y')
                        .long("yes")
                        .help("Apply without asking for confirmation")
                        .action(ArgAction::SetTrue),
                )
                .arg(
                    Arg::new("open")
                        .long("open")
                        .help("Open the created folder in the file manager afterwards")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("preview")
                .about("Print the tree that would be created, without touching the filesystem")
                .arg(
                    Arg::new("structure")
                        .help("File containing the tree drawing, or '-' for stdin")
                        .required(true),
                ),
        )
        .get_matches();

    init_logging(matches.get_flag("verbose"));

    match matches.subcommand() {
        Some(("build", args)) => handle_build(args),
        Some(("preview", args)) => handle_preview(args),
        _ => unreachable!(),
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn handle_build(args: &ArgMatches) -> miette::Result<()> {
    let structure = args
        .get_one::<String>("structure")
        .expect("structure required");

    let text = read_structure(structure)?;

    let target = match args.get_one::<String>("target") {
        Some(target) => Some(PathBuf::from(target)),
        None => prompt::get_target()?,
    };

    let options = BuildOptions {
        create_subfolder: !args.get_flag("no-subfolder"),
        assume_yes: args.get_flag("yes"),
    };

    match api::build(&text, target.as_deref(), &options)? {
        BuildOutcome::Created(path) => {
            println!("{} {}", "done:".green().bold(), path.display());

            if args.get_flag("open") {
                reveal::open_in_file_manager(&path);
            }
        }
        BuildOutcome::Canceled => {
            println!("{}", "canceled, nothing was written".yellow());
        }
    }

    Ok(())
}

fn handle_preview(args: &ArgMatches) -> miette::Result<()> {
    let structure = args
        .get_one::<String>("structure")
        .expect("structure required");

    let text = read_structure(structure)?;

    api::preview_only(&text)?;

    Ok(())
}

fn read_structure(source: &str) -> Result<String, IoError> {
    if source == "-" {
        let mut text = String::new();

        io::stdin()
            .read_to_string(&mut text)
            .map_err(|error| IoError::new(FileOperation::Read, PathBuf::from("stdin"), error))?;

        Ok(text)
    } else {
        fs::read_to_string(source)
            .map_err(|error| IoError::new(FileOperation::Read, PathBuf::from(source), error))
    }
}

use std::path::PathBuf;

use clap::{value_parser, Arg, ArgAction, Command};

pub fn build_cli() -> Command {
    Command::new("absplit")
        .about("Split an m4b/m4a audiobook into per-chapter mp3 files")
        .version(env!("CARGO_PKG_VERSION"))
        .arg(
            Arg::new("input_file")
                .value_name("INPUT_FILE")
                .help("Path to the input m4b/m4a audiobook")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("output_folder")
                .value_name("OUTPUT_FOLDER")
                .help("Directory where the chapter files will be written")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("separator")
                .short('s')
                .long("separator")
                .value_name("SEPARATOR")
                .help("Separator substituted for spaces in derived filenames (default: _)"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("FILE")
                .help("Path to a TOML settings file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable debug logging")
                .action(ArgAction::SetTrue),
        )
}

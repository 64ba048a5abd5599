//! Build script for advpath-cli.
//!
//! Generates the man page at build time using clap_mangen and places it in
//! OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("advpath")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Decompose and complete path strings")
        .long_about(
            "Command-line front end for splitting typed paths into directory and fragment, \
             climbing to parents and roots, and completing common prefixes",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Load an additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("ADVPATH_CONFIG"),
        )
        .arg(
            Arg::new("base-dir")
                .long("base-dir")
                .help("Resolve relative paths against this directory")
                .value_name("PATH")
                .global(true)
                .env("ADVPATH_BASE_DIR"),
        )
        .arg(
            Arg::new("project-root")
                .long("project-root")
                .help("Treat PATH as an open project root (repeatable)")
                .value_name("PATH")
                .global(true)
                .action(clap::ArgAction::Append),
        )
        .subcommands(vec![
            Command::new("inspect")
                .about("Show how a path string decomposes")
                .long_about("Print the directory, fragment, absolute form and predicates of a path"),
            Command::new("parent")
                .about("Print the logical parent of a path")
                .long_about("Drop the fragment, or climb one directory for directory-form paths"),
            Command::new("root")
                .about("Print the filesystem root above a path"),
            Command::new("as-directory")
                .about("Print a path in directory form")
                .long_about("Append a trailing separator unless the path already ends in one"),
            Command::new("shortcut")
                .about("Check whether a path ends in a shortcut token")
                .long_about("Exit 0 when the directory-form path ends in TOKEN, 1 otherwise"),
            Command::new("common-prefix")
                .about("Print the longest common prefix of several paths"),
            Command::new("sort")
                .about("Print paths in display order")
                .long_about("Sort paths with locale-aware collation, one per line"),
            Command::new("initial")
                .about("Print the path a prompt would open with")
                .long_about("Resolve the initial path from the active file and project roots"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("advpath.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}

// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use clap::Parser;
use mpl_colors_codegen::{common::{GeneratorConfig, try_initialize_logging},
                         make_colors::{CLIArg, OutputTarget, Provenance, format_error,
                                       format_wrote_output, make_groups,
                                       make_module_code, write_output},
                         upstream::UpstreamTables};
use std::process;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}", format_error(&e));
        process::exit(1);
    }
}

fn run() -> miette::Result<()> {
    let cli_arg = CLIArg::parse();
    try_initialize_logging();

    let config = GeneratorConfig::from_env();
    let target = cli_arg.to_output_target(&config);

    let tables = UpstreamTables::load(&config)?;
    let provenance = Provenance::now(tables.version.clone());
    let groups = make_groups(&tables)?;
    let text = make_module_code(&groups, &provenance);

    write_output(&text, &target)?;

    if let OutputTarget::File(path) = &target {
        eprintln!("{}", format_wrote_output(path, &groups));
    }

    Ok(())
}

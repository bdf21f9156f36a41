use std::io::{self, IsTerminal};

use anyhow::Result;
use comfy_table::Table;
use tracing::info_span;

use sanctions_cli::pipeline::{RunOptions, RunResult, build_config, run_pipeline};

use crate::cli::{CountriesArgs, RunArgs};
use crate::summary::apply_table_style;

pub fn run_normalize(args: &RunArgs) -> Result<RunResult> {
    let span = info_span!("run", input = %args.input.display());
    let _guard = span.enter();
    let options = RunOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        header_row: args.header_row,
        country_map: args.country_map.clone(),
        group_types: args.group_types.clone(),
        keep_raw_dob: args.keep_raw_dob,
        dry_run: args.dry_run,
        show_progress: io::stderr().is_terminal(),
    };
    run_pipeline(&options)
}

pub fn run_countries(args: &CountriesArgs) -> Result<()> {
    let config = build_config(args.country_map.as_deref())?;
    let mut table = Table::new();
    table.set_header(vec!["Variant", "Canonical"]);
    apply_table_style(&mut table);
    for (variant, canonical) in config.countries.iter() {
        table.add_row(vec![variant, canonical]);
    }
    println!("{table}");
    Ok(())
}

use comfy_table::Table;
use hvfhir_cli::pipeline::{ConvertOptions, ConvertResult, run_convert};
use hvfhir_convert::default_registry;

use crate::cli::ConvertArgs;
use crate::summary::apply_table_style;

pub fn run_kinds() {
    let registry = default_registry();
    let mut table = Table::new();
    table.set_header(vec!["Kind", "Type ID", "Description"]);
    apply_table_style(&mut table);
    for kind in registry.kinds() {
        let description = registry
            .get(kind)
            .map(|converter| converter.description())
            .unwrap_or_default();
        table.add_row(vec![kind.display(), kind.type_id(), description]);
    }
    println!("{table}");
}

pub fn run_convert_command(args: &ConvertArgs) -> anyhow::Result<ConvertResult> {
    run_convert(&ConvertOptions {
        input: args.input.clone(),
        output: args.output.clone(),
        vocabulary: args.vocabulary.clone(),
        compact: args.compact,
        keep_going: args.keep_going,
    })
}

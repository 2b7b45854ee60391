use super::store::{GroupKey, TemplateRecord, TemplateStore};
use crate::error::TemplateError;
use crate::parser::{group_records, parse_block_state};

/// Parse one record's three role lines and append the observed states to
/// `store`. The grouping key is built from the input and universal base
/// identifiers; the output line contributes only its state.
pub fn add_record(
    in_line: &str,
    uni_line: &str,
    out_line: &str,
    store: &mut TemplateStore,
) -> Result<(), TemplateError> {
    let input = parse_block_state(in_line)?;
    let universal = parse_block_state(uni_line)?;
    let output = parse_block_state(out_line)?;

    store.append(
        GroupKey::new(input.base, universal.base),
        TemplateRecord {
            input_state: input.state,
            universal_state: universal.state,
            output_state: output.state,
        },
    );

    Ok(())
}

/// Run the full pipeline over already-trimmed non-empty lines: group into
/// records, parse, aggregate into a fresh store. Any error drops the store;
/// no partial result escapes.
pub fn build_templates(lines: &[&str]) -> Result<TemplateStore, TemplateError> {
    let records = group_records(lines)?;

    let mut store = TemplateStore::new();
    for record in &records {
        add_record(&record.input, &record.universal, &record.output, &mut store)?;
    }

    Ok(store)
}

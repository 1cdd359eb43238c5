use prettytable::Table;
use prettytable::format::{FormatBuilder, LinePosition, LineSeparator};

pub(crate) fn create_table() -> Table {
    let mut table = Table::new();
    table.set_format(
        FormatBuilder::new()
            .column_separator(' ')
            .separator(LinePosition::Title, LineSeparator::new('-', '+', ' ', ' '))
            .build(),
    );
    table
}

/// Formats `value` with as many digits as needed, in scientific notation.
pub(crate) fn format_number(value: f64) -> String {
    format!("{value:e}")
}

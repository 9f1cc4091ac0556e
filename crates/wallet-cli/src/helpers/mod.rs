//! Parsing of user-typed values, shared by the subcommands and the shell.

mod parsing;

pub use parsing::{
    parse_amount, parse_category, parse_date_arg, parse_edit_input, parse_id,
    parse_output_format, EditInput, OutputFormat,
};

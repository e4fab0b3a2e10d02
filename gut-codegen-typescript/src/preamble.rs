//! File preamble with the shared alias declarations.

use gut_codegen::CodeBuilder;
use gut_core::Settings;

use crate::{
    ast::TypeAlias,
    registry::{BIG_INT_ALIAS, DATE_ALIAS, UUID_ALIAS},
};

/// Render the preamble for `settings`.
///
/// The optional first line comes first, then the three alias declarations
/// and a blank line. All aliases are always declared.
pub fn build_preamble(settings: &Settings) -> String {
    let mut builder = CodeBuilder::typescript();
    if let Some(first_line) = settings.first_line() {
        builder.push_raw(first_line);
        if !first_line.ends_with('\n') {
            builder.push_blank();
        }
    }

    builder
        .emit(&TypeAlias::new(UUID_ALIAS, settings.uuid_type()))
        .emit(&TypeAlias::new(BIG_INT_ALIAS, settings.big_int_type()))
        .emit(&TypeAlias::new(DATE_ALIAS, settings.date_type()))
        .push_blank();
    builder.build()
}

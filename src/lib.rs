//! rnsvg - SVG to react-native-svg converter
//!
//! rnsvg rewrites SVG markup into react-native-svg JSX, keeping only the
//! elements and attributes the target components accept and reporting
//! everything it drops.

mod ast;
mod checker;
mod diagnostics;
mod error;
mod names;
mod parse;
mod prepare;
mod sanitize;
mod schema;
mod serialize;
mod style;
mod traverse;

pub use ast::*;
pub use checker::*;
pub use diagnostics::*;
pub use error::*;
pub use names::*;
pub use parse::*;
pub use prepare::*;
pub use sanitize::*;
pub use schema::*;
pub use serialize::*;
pub use style::*;
pub use traverse::*;

/// Result of converting one SVG document.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The sanitized tree rendered as JSX.
    pub jsx: String,
    /// Everything removed along the way.
    pub diagnostics: Diagnostics,
}

/// Convert an SVG string with default settings.
///
/// `source` labels the input in diagnostics, typically its file path.
pub fn convert(svg: &str, source: &str) -> Result<Conversion, RnsvgError> {
    convert_with_options(svg, source, &Options::default())
}

/// Convert an SVG string with custom options.
pub fn convert_with_options(
    svg: &str,
    source: &str,
    options: &Options,
) -> Result<Conversion, RnsvgError> {
    let mut root = parse_svg(svg)?;

    if options.default_dimensions {
        apply_default_dimensions(&mut root);
    }

    if options.remove_style {
        strip_styles(&mut root);
    }

    let mut diagnostics = Diagnostics::new();
    let tree = Sanitizer::new(SchemaRegistry::builtin())
        .with_lookup(options.checker_lookup)
        .sanitize_tree(&root, source, &mut diagnostics);

    tracing::debug!(source, dropped = diagnostics.len(), "converted");

    Ok(Conversion {
        jsx: serialize_jsx(&tree, options),
        diagnostics,
    })
}

/// Conversion options.
#[derive(Debug, Clone)]
pub struct Options {
    /// Attribute name used to find prop checkers (default: raw markup name)
    pub checker_lookup: CheckerLookup,
    /// Remove inline styles and `<style>` elements
    pub remove_style: bool,
    /// Fill in missing root width/height from the viewBox
    pub default_dimensions: bool,
    /// Spaces per JSX nesting level (default: 2)
    pub indent: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            checker_lookup: CheckerLookup::Raw,
            remove_style: false,
            default_dimensions: true,
            indent: 2,
        }
    }
}

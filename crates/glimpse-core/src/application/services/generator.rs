//! Aggregation Code Generator.
//!
//! Turns the scanner's output into the single generated Dart source file:
//! one aliased import per distinct module, then one collector function that
//! invokes every discovered declaration through its module's alias.
//!
//! Output is byte-for-byte deterministic for identical input ordering.
//! Regeneration happens on every `start` and on every detected source
//! change, so any nondeterminism here would cause spurious downstream
//! rebuilds.

use std::collections::HashMap;

use crate::domain::{PreviewDeclaration, ProjectManifest};

/// First line of the generated file.
pub const GENERATED_HEADER: &str = "// GENERATED CODE - DO NOT MODIFY BY HAND";

/// Render the full content of the generated aggregation file.
///
/// Aliases (`_i1`, `_i2`, …) are assigned per distinct module in
/// first-occurrence order of the input sequence; collector entries keep the
/// input (discovery) order. Zero declarations yields a valid file with no
/// imports and an empty list.
pub fn generate(manifest: &ProjectManifest, declarations: &[PreviewDeclaration]) -> String {
    // (module, alias) pairs in first-occurrence order.
    let mut aliases: Vec<(String, String)> = Vec::new();
    let mut alias_index: HashMap<&str, usize> = HashMap::new();
    for declaration in declarations {
        if !alias_index.contains_key(declaration.module.as_str()) {
            alias_index.insert(&declaration.module, aliases.len());
            aliases.push((
                declaration.module.clone(),
                format!("_i{}", aliases.len() + 1),
            ));
        }
    }

    let mut out = String::new();
    out.push_str(GENERATED_HEADER);
    out.push('\n');

    if !aliases.is_empty() {
        out.push('\n');
        for (module, alias) in &aliases {
            out.push_str(&format!(
                "import '{}' as {};\n",
                import_uri(manifest, module),
                alias
            ));
        }
    }

    out.push('\n');
    if declarations.is_empty() {
        out.push_str("List<WidgetPreview> previews() => [];\n");
    } else {
        out.push_str("List<WidgetPreview> previews() => [\n");
        for declaration in declarations {
            let (_, alias) = &aliases[alias_index[declaration.module.as_str()]];
            out.push_str(&format!("  {}.{}(),\n", alias, declaration.symbol));
        }
        out.push_str("];\n");
    }

    out
}

/// Import URI for a root-relative module path.
///
/// Modules under `lib/` are addressed through the package URI scheme so the
/// scaffold's path dependency on the parent project resolves them.
fn import_uri(manifest: &ProjectManifest, module: &str) -> String {
    let under_lib = module.strip_prefix("lib/").unwrap_or(module);
    format!("package:{}/{}", manifest.package_name(), under_lib)
}

use javaimports_core::Import;

use crate::ParsedFile;

/// Insert `fixes` into `source` at the end of the import region.
///
/// Imports already present in the file are never duplicated; everything else
/// about the source, including formatting, is left untouched. The tool only
/// adds imports, it never removes one.
pub fn insert_imports(source: &str, file: &ParsedFile, fixes: &[Import]) -> String {
    let mut missing: Vec<&Import> = fixes
        .iter()
        .filter(|&fix| !file.imports.contains(fix))
        .collect();
    missing.sort();
    missing.dedup();

    if missing.is_empty() {
        return source.to_string();
    }

    let at = file.insert_offset;
    let mut out = String::with_capacity(source.len() + missing.len() * 40);
    out.push_str(&source[..at]);

    if at == 0 {
        // No package clause and no imports: the import block opens the file.
        for import in &missing {
            out.push_str(&import.to_string());
            out.push('\n');
        }
        out.push('\n');
        out.push_str(source);
        return out;
    }

    for (i, import) in missing.iter().enumerate() {
        if i == 0 && !file.has_imports && file.has_package {
            // Separate the new import block from the package clause.
            out.push('\n');
        }
        out.push('\n');
        out.push_str(&import.to_string());
    }
    out.push_str(&source[at..]);
    out
}

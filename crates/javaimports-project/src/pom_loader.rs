//! POM file parsing into a [`FlatPom`].

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::{FlatPom, MavenDependency, PomError};

/// The outcome of loading one POM file. A file that cannot be read or parsed
/// yields an empty POM plus the error, so callers keep whatever they already
/// merged.
#[derive(Debug)]
pub struct LoadedPom {
    pub pom: FlatPom,
    pub errors: Vec<PomError>,
}

pub fn load_pom(path: &Path) -> LoadedPom {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(source) => {
            return LoadedPom {
                pom: FlatPom::default(),
                errors: vec![PomError::Io {
                    path: path.to_path_buf(),
                    source,
                }],
            }
        }
    };

    let doc = match roxmltree::Document::parse(&contents) {
        Ok(doc) => doc,
        Err(source) => {
            return LoadedPom {
                pom: FlatPom::default(),
                errors: vec![PomError::Xml {
                    path: path.to_path_buf(),
                    source,
                }],
            }
        }
    };

    let project = doc.root_element();

    let dependencies = find_child(project, "dependencies")
        .map(parse_dependencies)
        .unwrap_or_default();
    let managed = find_child(project, "dependencyManagement")
        .and_then(|node| find_child(node, "dependencies"))
        .map(parse_dependencies)
        .unwrap_or_default();
    let properties = find_child(project, "properties")
        .map(parse_properties)
        .unwrap_or_default();
    let maybe_parent = find_child(project, "parent").and_then(parse_parent_path);

    LoadedPom {
        pom: FlatPom::builder()
            .dependencies(dependencies)
            .managed_dependencies(managed)
            .properties(properties)
            .maybe_parent(maybe_parent)
            .build(),
        errors: Vec::new(),
    }
}

/// The path (relative to the declaring module) of the parent POM.
///
/// An empty `relativePath` means "no parent on disk"; an absent one means the
/// Maven default of `../pom.xml`.
fn parse_parent_path(parent: roxmltree::Node<'_, '_>) -> Option<PathBuf> {
    match find_child(parent, "relativePath") {
        Some(node) => {
            let path = node.text().map(str::trim).unwrap_or("");
            if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            }
        }
        None => Some(PathBuf::from("../pom.xml")),
    }
}

fn parse_dependencies(deps_node: roxmltree::Node<'_, '_>) -> Vec<MavenDependency> {
    let mut out = Vec::new();
    for node in deps_node
        .children()
        .filter(|n| n.has_tag_name("dependency"))
    {
        let group_id = child_text(node, "groupId").unwrap_or_default();
        let artifact_id = child_text(node, "artifactId").unwrap_or_default();
        if group_id.is_empty() || artifact_id.is_empty() {
            continue;
        }

        let mut dep = MavenDependency::new(group_id, artifact_id, child_text(node, "version"));
        if let Some(r#type) = child_text(node, "type") {
            dep.r#type = r#type;
        }
        dep.classifier = child_text(node, "classifier");
        if let Some(scope) = child_text(node, "scope") {
            dep.scope = scope;
        }
        dep.optional = child_text(node, "optional").as_deref() == Some("true");
        out.push(dep);
    }
    out
}

fn parse_properties(node: roxmltree::Node<'_, '_>) -> BTreeMap<String, String> {
    let mut out = BTreeMap::new();
    for child in node.children().filter(|n| n.is_element()) {
        if let Some(text) = child.text() {
            out.insert(child.tag_name().name().to_string(), text.trim().to_string());
        }
    }
    out
}

fn find_child<'a>(
    node: roxmltree::Node<'a, 'a>,
    name: &str,
) -> Option<roxmltree::Node<'a, 'a>> {
    node.children().find(|n| n.has_tag_name(name))
}

fn child_text(node: roxmltree::Node<'_, '_>, name: &str) -> Option<String> {
    find_child(node, name)
        .and_then(|n| n.text())
        .map(|t| t.trim().to_string())
}

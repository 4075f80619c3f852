//! In-memory projection of a POM and its inheritance merge.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::Regex;

use crate::MavenDependency;

/// The flattened view of a POM: declared dependencies, managed dependencies,
/// properties and the parent pointer.
///
/// A `FlatPom` is *well defined* when every declared dependency has a
/// literal, placeholder-free version; a well-defined POM has nothing left to
/// inherit and [`FlatPom::merge`] is a no-op on it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatPom {
    dependencies: Vec<MavenDependency>,
    managed_dependencies: Vec<MavenDependency>,
    properties: BTreeMap<String, String>,
    maybe_parent: Option<PathBuf>,
}

impl FlatPom {
    pub fn builder() -> FlatPomBuilder {
        FlatPomBuilder::default()
    }

    pub fn dependencies(&self) -> &[MavenDependency] {
        &self.dependencies
    }

    pub fn maybe_parent(&self) -> Option<&Path> {
        self.maybe_parent.as_deref()
    }

    pub fn has_parent(&self) -> bool {
        self.maybe_parent.is_some()
    }

    pub fn is_well_defined(&self) -> bool {
        self.dependencies.iter().all(MavenDependency::is_resolved)
    }

    /// Fold a parent POM into this one.
    ///
    /// The child keeps precedence everywhere: its dependencies come first,
    /// its managed dependencies are consulted before the parent's, and its
    /// properties win on key conflicts. The parent pointer is replaced by the
    /// parent's own, so the next iteration of a walker climbs one more level.
    pub fn merge(&mut self, other: FlatPom) {
        if self.is_well_defined() {
            return;
        }

        self.dependencies.extend(other.dependencies);
        self.managed_dependencies.extend(other.managed_dependencies);
        for (key, value) in other.properties {
            self.properties.entry(key).or_insert(value);
        }
        self.maybe_parent = other.maybe_parent;

        self.enrich();
        self.substitute();
    }

    /// Copy versions from managed dependencies into declarations that have
    /// none (or only a placeholder). The first managed entry with matching
    /// coordinates wins; colliding managed entries are permitted.
    fn enrich(&mut self) {
        for dep in &mut self.dependencies {
            if dep.is_resolved() {
                continue;
            }
            let managed_version = self
                .managed_dependencies
                .iter()
                .find(|m| m.management_key() == dep.management_key())
                .and_then(|m| m.version.clone());
            if let Some(version) = managed_version {
                dep.version = Some(version);
            }
        }
    }

    /// Replace `${name}` versions with the matching property value. Unknown
    /// properties stay in place; a later merge may still define them.
    fn substitute(&mut self) {
        for dep in &mut self.dependencies {
            let replacement = dep
                .version
                .as_deref()
                .and_then(property_name)
                .and_then(|name| self.properties.get(name))
                .cloned();
            if let Some(value) = replacement {
                dep.version = Some(value);
            }
        }
    }
}

/// The property referenced by a `${name}`-shaped version string.
fn property_name(version: &str) -> Option<&str> {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"^\$\{([^}]+)\}$").expect("valid regex"));
    re.captures(version)
        .map(|caps| caps.get(1).expect("one capture group").as_str())
}

#[derive(Debug, Default)]
pub struct FlatPomBuilder {
    dependencies: Vec<MavenDependency>,
    managed_dependencies: Vec<MavenDependency>,
    properties: BTreeMap<String, String>,
    maybe_parent: Option<PathBuf>,
}

impl FlatPomBuilder {
    pub fn dependencies(mut self, dependencies: Vec<MavenDependency>) -> Self {
        self.dependencies = dependencies;
        self
    }

    pub fn managed_dependencies(mut self, managed: Vec<MavenDependency>) -> Self {
        self.managed_dependencies = managed;
        self
    }

    pub fn properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.properties = properties;
        self
    }

    pub fn maybe_parent(mut self, parent: Option<PathBuf>) -> Self {
        self.maybe_parent = parent;
        self
    }

    pub fn build(self) -> FlatPom {
        let mut pom = FlatPom {
            dependencies: self.dependencies,
            managed_dependencies: self.managed_dependencies,
            properties: self.properties,
            maybe_parent: self.maybe_parent,
        };
        pom.enrich();
        pom.substitute();
        pom
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dependency(artifact_id: &str, version: Option<&str>) -> MavenDependency {
        MavenDependency::new("com.example", artifact_id, version.map(str::to_string))
    }

    fn properties(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn preserves_dependencies_it_cannot_enrich() {
        let deps = vec![
            dependency("alpha", None),
            dependency("beta", Some("${beta.version}")),
        ];

        let pom = FlatPom::builder().dependencies(deps.clone()).build();
        assert_eq!(pom.dependencies(), &deps[..]);
        assert!(!pom.is_well_defined());
    }

    #[test]
    fn enriches_from_managed_dependencies_and_substitutes_properties() {
        let deps = vec![
            dependency("guava", None),
            dependency("truth", Some("${truth.version}")),
        ];
        let managed = vec![
            dependency("guava", Some("${guava.version}")),
            dependency("truth", Some("1.0.1")),
        ];

        let pom = FlatPom::builder()
            .dependencies(deps)
            .managed_dependencies(managed)
            .properties(properties(&[("guava.version", "28.0-jre")]))
            .build();

        assert_eq!(
            pom.dependencies(),
            &[
                dependency("guava", Some("28.0-jre")),
                dependency("truth", Some("1.0.1")),
            ][..]
        );
        assert!(pom.is_well_defined());
    }

    #[test]
    fn permits_colliding_managed_dependencies() {
        let mut compile = dependency("guava", Some("1.0.0"));
        compile.scope = "compile".to_string();
        let mut test = dependency("guava", Some("1.0.0"));
        test.scope = "test".to_string();

        let pom = FlatPom::builder()
            .managed_dependencies(vec![compile, test])
            .build();
        assert!(pom.dependencies().is_empty());
        assert!(pom.is_well_defined());
    }

    #[test]
    fn leaves_unknown_properties_in_place() {
        let deps = vec![
            dependency("alpha", Some("${alpha.version}")),
            dependency("beta", Some("${beta.version}")),
        ];

        let pom = FlatPom::builder()
            .dependencies(deps)
            .properties(properties(&[("alpha.version", "2.0.0")]))
            .build();

        assert_eq!(
            pom.dependencies(),
            &[
                dependency("alpha", Some("2.0.0")),
                dependency("beta", Some("${beta.version}")),
            ][..]
        );
        assert!(!pom.is_well_defined());
    }

    #[test]
    fn merge_is_a_no_op_on_a_well_defined_pom() {
        let mut well_defined = FlatPom::builder()
            .dependencies(vec![dependency("guava", Some("1.0.0"))])
            .maybe_parent(Some(PathBuf::from("../pom.xml")))
            .build();
        let other = FlatPom::builder()
            .managed_dependencies(vec![dependency("guava", Some("2.0.0"))])
            .build();

        well_defined.merge(other);
        assert!(well_defined.is_well_defined());
        assert_eq!(
            well_defined.dependencies(),
            &[dependency("guava", Some("1.0.0"))][..]
        );
        assert_eq!(
            well_defined.maybe_parent(),
            Some(Path::new("../pom.xml"))
        );
    }

    #[test]
    fn merge_combines_managed_dependencies_and_properties() {
        let mut child = FlatPom::builder()
            .dependencies(vec![dependency("alpha", None), dependency("beta", None)])
            .managed_dependencies(vec![dependency("alpha", Some("${alpha.version}"))])
            .properties(properties(&[("beta.version", "1.0.0")]))
            .build();
        assert!(!child.is_well_defined());

        let parent = FlatPom::builder()
            .managed_dependencies(vec![dependency("beta", Some("${beta.version}"))])
            .properties(properties(&[("alpha.version", "2.0.0")]))
            .build();

        child.merge(parent);
        assert!(child.is_well_defined());
        assert_eq!(
            child.dependencies(),
            &[
                dependency("alpha", Some("2.0.0")),
                dependency("beta", Some("1.0.0")),
            ][..]
        );
    }

    #[test]
    fn child_properties_win_on_merge() {
        let mut child = FlatPom::builder()
            .dependencies(vec![dependency("beta", None)])
            .properties(properties(&[("beta.version", "1.0.0")]))
            .build();

        let parent = FlatPom::builder()
            .managed_dependencies(vec![dependency("beta", Some("${beta.version}"))])
            .properties(properties(&[("beta.version", "9.9.9")]))
            .build();

        child.merge(parent);
        assert_eq!(child.dependencies()[0], dependency("beta", Some("1.0.0")));
    }

    #[test]
    fn merge_adopts_the_parents_parent() {
        let mut child = FlatPom::builder()
            .dependencies(vec![dependency("alpha", None)])
            .maybe_parent(Some(PathBuf::from("../pom.xml")))
            .build();
        let parent = FlatPom::builder().maybe_parent(None).build();

        child.merge(parent);
        assert_eq!(child.maybe_parent(), None);
    }
}

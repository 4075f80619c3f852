//! Maven project model: POM loading, flat-POM inheritance and the
//! parent-chain dependency finder.
//!
//! Only the slice of the POM format the fixer needs is modeled: dependency
//! coordinates, managed dependencies, properties and the parent pointer.
//! Loading never unwinds through the walk; errors are collected into the
//! result so a broken parent degrades the dependency list instead of killing
//! the run.

mod finder;
mod flat_pom;
mod pom_loader;

pub use finder::{find_all_dependencies, FinderResult};
pub use flat_pom::{FlatPom, FlatPomBuilder};
pub use pom_loader::{load_pom, LoadedPom};

use std::path::{Path, PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PomError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse XML in {path}: {source}")]
    Xml {
        path: PathBuf,
        #[source]
        source: roxmltree::Error,
    },
}

/// One Maven coordinate, with the defaults the POM format implies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MavenDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub r#type: String,
    pub classifier: Option<String>,
    pub scope: String,
    pub optional: bool,
}

impl MavenDependency {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version,
            r#type: "jar".to_string(),
            classifier: None,
            scope: "compile".to_string(),
            optional: false,
        }
    }

    /// A coordinate is resolved when its version is a literal, with no
    /// `${...}` placeholder left.
    pub fn is_resolved(&self) -> bool {
        matches!(&self.version, Some(v) if !v.contains("${"))
    }

    /// Identity used to match a declaration against `dependencyManagement`.
    pub(crate) fn management_key(&self) -> (&str, &str, &str, Option<&str>) {
        (
            &self.group_id,
            &self.artifact_id,
            &self.r#type,
            self.classifier.as_deref(),
        )
    }

    /// Where this artifact lives inside a local Maven repository, or `None`
    /// while the version is unresolved.
    pub fn jar_path_in(&self, repository: &Path) -> Option<PathBuf> {
        if !self.is_resolved() || self.r#type != "jar" {
            return None;
        }
        let version = self.version.as_deref()?;
        let file_name = match &self.classifier {
            Some(classifier) => format!("{}-{}-{}.jar", self.artifact_id, version, classifier),
            None => format!("{}-{}.jar", self.artifact_id, version),
        };
        Some(
            repository
                .join(self.group_id.replace('.', "/"))
                .join(&self.artifact_id)
                .join(version)
                .join(file_name),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn resolved_means_a_literal_version() {
        let mut dep =
            MavenDependency::new("com.google.guava", "guava", Some("28.0-jre".to_string()));
        assert!(dep.is_resolved());

        dep.version = Some("${guava.version}".to_string());
        assert!(!dep.is_resolved());

        dep.version = None;
        assert!(!dep.is_resolved());
    }

    #[test]
    fn jar_paths_follow_the_repository_layout() {
        let dep = MavenDependency::new("com.google.guava", "guava", Some("28.0-jre".to_string()));
        assert_eq!(
            dep.jar_path_in(Path::new("/repo")),
            Some(PathBuf::from(
                "/repo/com/google/guava/guava/28.0-jre/guava-28.0-jre.jar"
            ))
        );

        let unresolved = MavenDependency::new("g", "a", Some("${v}".to_string()));
        assert_eq!(unresolved.jar_path_in(Path::new("/repo")), None);
    }
}

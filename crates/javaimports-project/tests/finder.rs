use std::fs;
use std::path::Path;

use javaimports_project::{find_all_dependencies, MavenDependency};
use pretty_assertions::assert_eq;

struct PomSpec<'a> {
    parent_relative_path: Option<&'a str>,
    dependencies: &'a [(&'a str, &'a str, Option<&'a str>)],
    properties: &'a [(&'a str, &'a str)],
}

impl Default for PomSpec<'_> {
    fn default() -> Self {
        Self {
            parent_relative_path: None,
            dependencies: &[],
            properties: &[],
        }
    }
}

fn write_pom(dir: &Path, spec: &PomSpec<'_>) {
    let mut xml = String::from(
        "<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n\
         <modelVersion>4.0.0</modelVersion>\n\
         <groupId>com.example</groupId>\n\
         <artifactId>test-pom</artifactId>\n\
         <version>0.0</version>\n",
    );

    if let Some(relative_path) = spec.parent_relative_path {
        xml.push_str("<parent>");
        if relative_path != "IMPLICIT" {
            xml.push_str(&format!("<relativePath>{relative_path}</relativePath>"));
        }
        xml.push_str("</parent>\n");
    }

    if !spec.dependencies.is_empty() {
        xml.push_str("<dependencies>\n");
        for (group, artifact, version) in spec.dependencies {
            xml.push_str(&format!(
                "<dependency><groupId>{group}</groupId><artifactId>{artifact}</artifactId>"
            ));
            if let Some(version) = version {
                xml.push_str(&format!("<version>{version}</version>"));
            }
            xml.push_str("</dependency>\n");
        }
        xml.push_str("</dependencies>\n");
    }

    if !spec.properties.is_empty() {
        xml.push_str("<properties>\n");
        for (key, value) in spec.properties {
            xml.push_str(&format!("<{key}>{value}</{key}>\n"));
        }
        xml.push_str("</properties>\n");
    }

    xml.push_str("</project>\n");
    fs::create_dir_all(dir).unwrap();
    fs::write(dir.join("pom.xml"), xml).unwrap();
}

fn dependency(group: &str, artifact: &str, version: Option<&str>) -> MavenDependency {
    MavenDependency::new(group, artifact, version.map(str::to_string))
}

#[test]
fn pom_with_no_dependencies_yields_an_empty_list() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_pom(&module, &PomSpec::default());

    let got = find_all_dependencies(&module);
    assert!(got.dependencies.is_empty());
    assert!(got.errors.is_empty());
}

#[test]
fn declared_dependencies_are_returned() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_pom(
        &module,
        &PomSpec {
            dependencies: &[
                ("com.google.guava", "guava", Some("28.1-jre")),
                ("com.google.truth", "truth", Some("1.0.1")),
            ],
            ..PomSpec::default()
        },
    );

    let got = find_all_dependencies(&module);
    assert_eq!(
        got.dependencies,
        vec![
            dependency("com.google.guava", "guava", Some("28.1-jre")),
            dependency("com.google.truth", "truth", Some("1.0.1")),
        ]
    );
    assert!(got.errors.is_empty());
}

#[test]
fn unresolved_dependencies_are_still_reported() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_pom(
        &module,
        &PomSpec {
            dependencies: &[("com.google.guava", "guava", Some("${guava.version}"))],
            ..PomSpec::default()
        },
    );

    let got = find_all_dependencies(&module);
    assert_eq!(
        got.dependencies,
        vec![dependency(
            "com.google.guava",
            "guava",
            Some("${guava.version}")
        )]
    );
    assert!(got.errors.is_empty());
}

#[test]
fn properties_resolve_within_the_same_file() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_pom(
        &module,
        &PomSpec {
            dependencies: &[("com.google.guava", "guava", Some("${guava.version}"))],
            properties: &[("guava.version", "28.1-jre")],
            ..PomSpec::default()
        },
    );

    let got = find_all_dependencies(&module);
    assert_eq!(
        got.dependencies,
        vec![dependency("com.google.guava", "guava", Some("28.1-jre"))]
    );
    assert!(got.errors.is_empty());
}

#[test]
fn an_invalid_pom_is_an_error_not_a_crash() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    fs::create_dir_all(&module).unwrap();
    fs::write(module.join("pom.xml"), "this is not a valid pom!").unwrap();

    let got = find_all_dependencies(&module);
    assert!(got.dependencies.is_empty());
    assert_eq!(got.errors.len(), 1);
}

#[test]
fn explicit_parent_path_is_followed() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_pom(
        &module,
        &PomSpec {
            parent_relative_path: Some("../pom.xml"),
            dependencies: &[("com.google.guava", "guava", Some("${guava.version}"))],
            ..PomSpec::default()
        },
    );
    write_pom(
        tmp.path(),
        &PomSpec {
            properties: &[("guava.version", "28.0-jre")],
            ..PomSpec::default()
        },
    );

    let got = find_all_dependencies(&module);
    assert!(got.errors.is_empty());
    assert_eq!(
        got.dependencies,
        vec![dependency("com.google.guava", "guava", Some("28.0-jre"))]
    );
}

#[test]
fn a_parent_directory_is_resolved_to_its_pom() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_pom(
        &module,
        &PomSpec {
            parent_relative_path: Some(".."),
            dependencies: &[("com.google.guava", "guava", Some("${guava.version}"))],
            ..PomSpec::default()
        },
    );
    write_pom(
        tmp.path(),
        &PomSpec {
            properties: &[("guava.version", "28.0-jre")],
            ..PomSpec::default()
        },
    );

    let got = find_all_dependencies(&module);
    assert!(got.errors.is_empty());
    assert_eq!(
        got.dependencies,
        vec![dependency("com.google.guava", "guava", Some("28.0-jre"))]
    );
}

#[test]
fn an_empty_relative_path_means_no_parent() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_pom(
        &module,
        &PomSpec {
            parent_relative_path: Some(""),
            dependencies: &[("com.google.guava", "guava", Some("${guava.version}"))],
            ..PomSpec::default()
        },
    );
    write_pom(
        tmp.path(),
        &PomSpec {
            properties: &[("guava.version", "28.0-jre")],
            ..PomSpec::default()
        },
    );

    let got = find_all_dependencies(&module);
    assert!(got.errors.is_empty());
    assert_eq!(
        got.dependencies,
        vec![dependency(
            "com.google.guava",
            "guava",
            Some("${guava.version}")
        )]
    );
}

#[test]
fn an_absent_relative_path_defaults_to_the_directory_above() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_pom(
        &module,
        &PomSpec {
            parent_relative_path: Some("IMPLICIT"),
            dependencies: &[("com.google.guava", "guava", Some("${guava.version}"))],
            ..PomSpec::default()
        },
    );
    write_pom(
        tmp.path(),
        &PomSpec {
            properties: &[("guava.version", "28.0-jre")],
            ..PomSpec::default()
        },
    );

    let got = find_all_dependencies(&module);
    assert!(got.errors.is_empty());
    assert_eq!(
        got.dependencies,
        vec![dependency("com.google.guava", "guava", Some("28.0-jre"))]
    );
}

#[test]
fn the_walk_climbs_more_than_one_level() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("a").join("b");
    write_pom(
        &module,
        &PomSpec {
            parent_relative_path: Some("../pom.xml"),
            dependencies: &[("com.google.guava", "guava", Some("${guava.version}"))],
            ..PomSpec::default()
        },
    );
    write_pom(
        &tmp.path().join("a"),
        &PomSpec {
            parent_relative_path: Some("../pom.xml"),
            ..PomSpec::default()
        },
    );
    write_pom(
        tmp.path(),
        &PomSpec {
            properties: &[("guava.version", "28.0-jre")],
            ..PomSpec::default()
        },
    );

    let got = find_all_dependencies(&module);
    assert!(got.errors.is_empty());
    assert_eq!(
        got.dependencies,
        vec![dependency("com.google.guava", "guava", Some("28.0-jre"))]
    );
}

#[test]
fn a_missing_parent_is_collected_and_the_walk_stops() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_pom(
        &module,
        &PomSpec {
            parent_relative_path: Some("../pom.xml"),
            dependencies: &[("com.google.guava", "guava", Some("${guava.version}"))],
            ..PomSpec::default()
        },
    );

    let got = find_all_dependencies(&module);
    assert_eq!(got.errors.len(), 1);
    assert_eq!(
        got.dependencies,
        vec![dependency(
            "com.google.guava",
            "guava",
            Some("${guava.version}")
        )]
    );
}

use std::fs;
use std::io::Write;
use std::path::Path;

use javaimports_core::{Identifier, ImportProvider, Selector};
use javaimports_environment::MavenEnvironment;
use pretty_assertions::assert_eq;
use zip::write::FileOptions;

fn write_jar(path: &Path, entries: &[&str]) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    let file = fs::File::create(path).unwrap();
    let mut writer = zip::ZipWriter::new(file);
    for entry in entries {
        writer.start_file(*entry, FileOptions::default()).unwrap();
        writer.write_all(b"\xca\xfe\xba\xbe").unwrap();
    }
    writer.finish().unwrap();
}

fn write_module_pom(dir: &Path, dependency: (&str, &str, &str)) {
    fs::create_dir_all(dir).unwrap();
    let (group, artifact, version) = dependency;
    fs::write(
        dir.join("pom.xml"),
        format!(
            "<project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n\
             <modelVersion>4.0.0</modelVersion>\n\
             <groupId>com.example</groupId>\n\
             <artifactId>module</artifactId>\n\
             <version>0.0</version>\n\
             <dependencies><dependency>\
             <groupId>{group}</groupId>\
             <artifactId>{artifact}</artifactId>\
             <version>{version}</version>\
             </dependency></dependencies>\n\
             </project>\n"
        ),
    )
    .unwrap();
}

#[test]
fn finds_dependency_classes_through_the_module_pom() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    write_jar(
        &repo.join("com/google/guava/guava/28.0-jre/guava-28.0-jre.jar"),
        &["com/google/common/collect/ImmutableList.class"],
    );

    let module = tmp.path().join("module");
    write_module_pom(&module, ("com.google.guava", "guava", "28.0-jre"));
    let source_dir = module.join("src/main/java/com/example");
    fs::create_dir_all(&source_dir).unwrap();

    let environment = MavenEnvironment::new(&source_dir, Some(repo));
    let found = environment.find(&[
        Identifier::from("ImmutableList"),
        Identifier::from("Absent"),
    ]);

    let imports = &found[&Identifier::from("ImmutableList")];
    assert_eq!(imports.len(), 1);
    assert_eq!(
        imports[0].selector,
        Selector::from_dotted("com.google.common.collect.ImmutableList")
    );
    assert!(!found.contains_key(&Identifier::from("Absent")));
}

#[test]
fn find_is_idempotent_and_safe_to_repeat() {
    let tmp = tempfile::tempdir().unwrap();
    let repo = tmp.path().join("repo");
    write_jar(
        &repo.join("com/x/lib/1.0/lib-1.0.jar"),
        &["com/x/Widget.class"],
    );
    let module = tmp.path().join("module");
    write_module_pom(&module, ("com.x", "lib", "1.0"));

    let environment = MavenEnvironment::new(&module, Some(repo));
    let first = environment.find(&[Identifier::from("Widget")]);
    let second = environment.find(&[Identifier::from("Widget")]);
    assert_eq!(first, second);
    assert_eq!(first.len(), 1);
}

#[test]
fn no_enclosing_module_means_no_candidates() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("plain");
    fs::create_dir_all(&dir).unwrap();

    let environment = MavenEnvironment::new(&dir, Some(tmp.path().join("repo")));
    assert!(environment.find(&[Identifier::from("Anything")]).is_empty());
}

#[test]
fn missing_jars_degrade_to_fewer_candidates() {
    let tmp = tempfile::tempdir().unwrap();
    let module = tmp.path().join("module");
    write_module_pom(&module, ("com.gone", "gone", "1.0"));

    let environment = MavenEnvironment::new(&module, Some(tmp.path().join("repo")));
    assert!(environment.find(&[Identifier::from("Gone")]).is_empty());
}

use javaimports_core::{Import, Selector};
use javaimports_parser::{insert_imports, parse};
use pretty_assertions::assert_eq;

fn import(path: &str) -> Import {
    Import::new(Selector::from_dotted(path))
}

#[test]
fn inserts_after_the_package_clause() {
    let source = "package p;\n\nclass F {}\n";
    let file = parse(source).unwrap();

    let got = insert_imports(source, &file, &[import("a.b.C")]);
    assert_eq!(got, "package p;\n\nimport a.b.C;\n\nclass F {}\n");
}

#[test]
fn appends_to_an_existing_import_block() {
    let source = "package p;\n\nimport java.util.List;\n\nclass F {}\n";
    let file = parse(source).unwrap();

    let got = insert_imports(source, &file, &[import("java.util.Map")]);
    assert_eq!(
        got,
        "package p;\n\nimport java.util.List;\nimport java.util.Map;\n\nclass F {}\n"
    );
}

#[test]
fn never_duplicates_an_existing_import() {
    let source = "package p;\n\nimport java.util.List;\n\nclass F {}\n";
    let file = parse(source).unwrap();

    let got = insert_imports(source, &file, &[import("java.util.List")]);
    assert_eq!(got, source);
}

#[test]
fn opens_the_file_when_there_is_no_package() {
    let source = "class F {}\n";
    let file = parse(source).unwrap();

    let got = insert_imports(source, &file, &[import("a.b.C")]);
    assert_eq!(got, "import a.b.C;\n\nclass F {}\n");
}

#[test]
fn output_is_sorted_and_static_imports_are_rendered() {
    let source = "package p;\n\nclass F {}\n";
    let file = parse(source).unwrap();

    let fixes = vec![
        import("z.Last"),
        Import::new_static(Selector::from_dotted("java.util.Objects.requireNonNull")),
        import("a.First"),
    ];
    let got = insert_imports(source, &file, &fixes);
    assert_eq!(
        got,
        "package p;\n\n\
         import a.First;\n\
         import static java.util.Objects.requireNonNull;\n\
         import z.Last;\n\nclass F {}\n"
    );
}

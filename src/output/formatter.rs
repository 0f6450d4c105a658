use std::path::{Component, Path};

use log::info;

use crate::error::OutputError;
use crate::output::manifest::Manifest;
use crate::output::report;

/// Write `<name>.json` and `<name>_report.md` into `output_dir`.
pub fn write_output(output_dir: &Path, name: &str, manifest: &Manifest) -> Result<(), OutputError> {
    validate_output_name(name)?;

    std::fs::create_dir_all(output_dir).map_err(|source| OutputError::Io {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let manifest_path = output_dir.join(format!("{name}.json"));
    write_file(&manifest_path, &manifest.to_json()?)?;

    let report_path = output_dir.join(format!("{name}_report.md"));
    let report_content = report::build_report(std::slice::from_ref(manifest));
    write_file(&report_path, &report_content)?;

    info!(
        "wrote {} and {}",
        manifest_path.display(),
        report_path.display()
    );
    Ok(())
}

fn write_file(path: &Path, content: &str) -> Result<(), OutputError> {
    std::fs::write(path, content).map_err(|source| OutputError::Io {
        path: path.to_path_buf(),
        source,
    })
}

fn validate_output_name(name: &str) -> Result<(), OutputError> {
    let invalid = |reason: &'static str| -> Result<(), OutputError> {
        Err(OutputError::InvalidName {
            name: name.to_string(),
            reason,
        })
    };

    if name.trim().is_empty() {
        return invalid("must not be empty");
    }
    let candidate = Path::new(name);
    if candidate.is_absolute() {
        return invalid("absolute paths are not allowed");
    }
    if candidate.components().any(|component| {
        matches!(
            component,
            Component::ParentDir | Component::RootDir | Component::Prefix(_)
        )
    }) {
        return invalid("traversal segments are not allowed");
    }
    if name.contains('/') || name.contains('\\') {
        return invalid("path separators are not allowed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::template::parse_template;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn unique_path(prefix: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("clock should be monotonic")
            .as_nanos();
        std::env::temp_dir().join(format!("{prefix}_{nanos}"))
    }

    fn sample_manifest() -> Manifest {
        let template = parse_template("# Docs\n#get_doc\nSELECT * FROM docs WHERE id = :id;")
            .expect("template should parse");
        Manifest::from_template(&template, "docs.sql", "docs")
    }

    #[test]
    fn write_output_reports_directory_creation_errors() {
        let path = unique_path("sql2bind_formatter_file");
        std::fs::write(&path, "not a directory").expect("should create marker file");

        let err = write_output(&path, "output", &sample_manifest())
            .expect_err("directory creation should fail");
        assert!(err.to_string().contains("Failed to write"));
    }

    #[test]
    fn write_output_rejects_unsafe_name_paths() {
        let dir = unique_path("sql2bind_formatter_dir");
        std::fs::create_dir_all(&dir).expect("should create temp directory");

        let err = write_output(&dir, "nested/output", &sample_manifest())
            .expect_err("unsafe output name should fail validation");
        assert!(err.to_string().contains("Invalid output name"));

        let err = write_output(&dir, "../escape", &sample_manifest())
            .expect_err("path traversal should fail validation");
        assert!(err.to_string().contains("Invalid output name"));

        let err = write_output(&dir, "  ", &sample_manifest())
            .expect_err("blank name should fail validation");
        assert!(err.to_string().contains("must not be empty"));
    }

    #[test]
    fn write_output_writes_all_artifacts_on_success() {
        let dir = unique_path("sql2bind_formatter_ok");

        write_output(&dir, "docs", &sample_manifest()).expect("write_output should succeed");

        let json = std::fs::read_to_string(dir.join("docs.json")).expect("manifest should exist");
        let report =
            std::fs::read_to_string(dir.join("docs_report.md")).expect("report should exist");

        let parsed: Manifest = serde_json::from_str(&json).expect("manifest should be valid JSON");
        assert_eq!(parsed, sample_manifest());
        assert!(report.contains("# sql2bind Statement Report"));
        assert!(report.contains("get_doc"));
    }
}

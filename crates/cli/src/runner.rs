use std::path::Path;

use key_path::KeyPath;
use mutator::{EventSink, MutateError, Mutation, MutationEvent, MutationMode, PathMutator};

use crate::{
    files::{find_files, load_document, store_document},
    EditConfig, EditError,
};

/// Logs mutation progress for one file.
struct FileEvents<'a> {
    file: &'a Path,
}

impl EventSink for FileEvents<'_> {
    fn emit(&mut self, event: MutationEvent) {
        tracing::info!("{} in {}", event, self.file.display());
    }
}

/// Applies the configured mutation to every matching file, one at a time.
///
/// Stops at the first file that fails. Returns the number of files written.
pub fn run(config: &EditConfig) -> Result<usize, EditError> {
    if config.mode() == MutationMode::Remove && config.new_value.is_some() {
        tracing::warn!("New value argument is ignored when using --remove");
    }

    let path: KeyPath = config.json_path.parse().map_err(MutateError::from)?;

    let files = find_files(&config.file_pattern)?;
    if files.is_empty() {
        tracing::info!("No JSON files found matching pattern: {}", config.file_pattern);
        return Ok(0);
    }

    let mutation = config.mutation()?;

    for file in &files {
        let output = config.output_file.as_deref().unwrap_or(file.as_path());
        if let Err(err) = edit_file(file, output, &path, &mutation) {
            tracing::error!(file = %file.display(), error = %err, "error processing file");
            return Err(err);
        }
        tracing::info!("Modified file written to: {}", output.display());
    }

    Ok(files.len())
}

/// Loads `input`, mutates it and writes the result to `output`.
///
/// Nothing is written if the mutation fails.
pub fn edit_file(
    input: &Path,
    output: &Path,
    path: &KeyPath,
    mutation: &Mutation,
) -> Result<(), EditError> {
    let mut document = load_document(input)?;
    PathMutator::new(FileEvents { file: input }).apply(&mut document, path, mutation)?;
    store_document(output, &document)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use mutator::MissingKey;
    use serde_json::{json, Value};
    use tempfile::TempDir;
    use tracing_test::traced_test;

    use super::*;

    fn sample() -> Value {
        json!({
            "name": "Test",
            "version": "1.0",
            "settings": {
                "debug": false,
                "timeout": 30,
                "nested": {
                    "value": "original"
                }
            },
            "numbers": [1, 2, 3]
        })
    }

    fn write_json(dir: &TempDir, name: &str, value: &Value) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, serde_json::to_vec_pretty(value).unwrap()).unwrap();
        path
    }

    fn read_json(path: &Path) -> Value {
        serde_json::from_slice(&std::fs::read(path).unwrap()).unwrap()
    }

    fn pattern(dir: &TempDir, glob: &str) -> String {
        format!(
            "{}/{}",
            glob::Pattern::escape(dir.path().to_str().unwrap()),
            glob
        )
    }

    #[test]
    fn add_and_replace_values() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_json(&dir, "test.json", &sample());
        let pattern = pattern(&dir, "test.json");

        let edits = [
            ("[newKey]", MutationMode::Add, "new value"),
            ("[settings][newSetting]", MutationMode::Add, "42"),
            ("[settings][nested][deeper][deepest]", MutationMode::Add, "very deep"),
            ("[complexNumber]", MutationMode::Add, "1+2j"),
            ("[nullValue]", MutationMode::Add, "null"),
            ("[version]", MutationMode::Replace, "2.0"),
            ("[settings][debug]", MutationMode::Replace, "true"),
            ("[complexNumber]", MutationMode::Replace, "3+4j"),
        ];
        for (json_path, mode, value) in edits {
            let config = EditConfig::new(&pattern, json_path, mode).new_value(value);
            assert_eq!(run(&config).unwrap(), 1);
        }

        let data = read_json(&file);
        assert_eq!(data["newKey"], json!("new value"));
        assert_eq!(data["settings"]["newSetting"], json!(42));
        assert_eq!(data["settings"]["nested"]["deeper"]["deepest"], json!("very deep"));
        assert_eq!(data["complexNumber"], json!("3+4j"));
        assert_eq!(data["nullValue"], Value::Null);
        assert_eq!(data["version"], json!(2.0));
        assert_eq!(data["settings"]["debug"], json!(true));
    }

    #[test]
    fn remove_values() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_json(&dir, "test.json", &sample());
        let pattern = pattern(&dir, "*.json");

        for json_path in ["[version]", "[settings][timeout]", "[missing]", "[a][b]"] {
            let config = EditConfig::new(&pattern, json_path, MutationMode::Remove);
            assert_eq!(run(&config).unwrap(), 1);
        }

        let data = read_json(&file);
        assert!(data.get("version").is_none());
        assert!(data["settings"].get("timeout").is_none());
        assert_eq!(data["settings"]["debug"], json!(false));
    }

    #[test]
    #[traced_test]
    fn remove_warns_about_new_value() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_json(&dir, "test.json", &json!({"version": "1.0", "name": "x"}));
        let pattern = pattern(&dir, "*.json");

        let config = EditConfig::new(&pattern, "[name]", MutationMode::Remove);
        assert_eq!(run(&config).unwrap(), 1);
        assert!(!logs_contain("New value argument is ignored"));

        let config = EditConfig::new(&pattern, "[version]", MutationMode::Remove).new_value("2.0");
        assert_eq!(run(&config).unwrap(), 1);
        assert!(logs_contain(
            "New value argument is ignored when using --remove"
        ));
        assert_eq!(read_json(&file), json!({}));
    }

    #[test]
    fn big_integer_written_exactly() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_json(&dir, "test.json", &json!({}));

        let digits = "123456789012345678901234567890";
        let config = EditConfig::new(file.to_str().unwrap(), "[big]", MutationMode::Add)
            .new_value(digits);
        run(&config).unwrap();
        assert_eq!(
            std::fs::read_to_string(&file).unwrap(),
            format!("{{\n  \"big\": {}\n}}", digits)
        );
    }

    #[test]
    fn end_to_end() {
        let dir = tempfile::tempdir().unwrap();

        let file = write_json(&dir, "settings.json", &json!({"settings": {"debug": false}}));
        let config = EditConfig::new(
            file.to_str().unwrap(),
            "[settings][debug]",
            MutationMode::Replace,
        )
        .new_value("true");
        run(&config).unwrap();
        assert_eq!(read_json(&file), json!({"settings": {"debug": true}}));

        let file = write_json(&dir, "empty.json", &json!({}));
        let config = EditConfig::new(file.to_str().unwrap(), "[a][b][c]", MutationMode::Add)
            .new_value("x");
        run(&config).unwrap();
        assert_eq!(read_json(&file), json!({"a": {"b": {"c": "x"}}}));

        let file = write_json(&dir, "version.json", &json!({"version": "1.0"}));
        let config = EditConfig::new(file.to_str().unwrap(), "[version]", MutationMode::Remove);
        run(&config).unwrap();
        assert_eq!(std::fs::read_to_string(&file).unwrap(), "{}");
    }

    #[test]
    fn replace_missing_key_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let file = write_json(&dir, "test.json", &sample());
        let before = std::fs::read(&file).unwrap();

        let config = EditConfig::new(
            pattern(&dir, "*.json"),
            "[nonexistent]",
            MutationMode::Replace,
        )
        .new_value("value");
        let err = run(&config).unwrap_err();

        assert!(matches!(
            err,
            EditError::Mutate(MutateError::PathNotFound {
                missing: MissingKey::Final(_),
                ..
            })
        ));
        assert_eq!(std::fs::read(&file).unwrap(), before);
    }

    #[test]
    fn output_file_keeps_last_result() {
        let dir = tempfile::tempdir().unwrap();
        let out_dir = tempfile::tempdir().unwrap();
        let a = write_json(&dir, "a.json", &json!({"id": "a"}));
        let b = write_json(&dir, "b.json", &json!({"id": "b"}));
        let output = out_dir.path().join("out.json");

        let config = EditConfig::new(pattern(&dir, "*.json"), "[touched]", MutationMode::Add)
            .new_value("yes")
            .output_file(&output);
        assert_eq!(run(&config).unwrap(), 2);

        assert_eq!(read_json(&output), json!({"id": "b", "touched": "yes"}));
        assert_eq!(read_json(&a), json!({"id": "a"}));
        assert_eq!(read_json(&b), json!({"id": "b"}));
    }

    #[test]
    fn stops_at_first_failure() {
        let dir = tempfile::tempdir().unwrap();
        let a = write_json(&dir, "a.json", &json!({"key": 1}));
        let b = write_json(&dir, "b.json", &json!({"other": 1}));
        let c = write_json(&dir, "c.json", &json!({"key": 1}));

        let config = EditConfig::new(pattern(&dir, "*.json"), "[key]", MutationMode::Replace)
            .new_value("2");
        assert!(run(&config).is_err());

        assert_eq!(read_json(&a), json!({"key": 2}));
        assert_eq!(read_json(&b), json!({"other": 1}));
        assert_eq!(read_json(&c), json!({"key": 1}));
    }

    #[test]
    fn no_matching_files() {
        let dir = tempfile::tempdir().unwrap();
        let config =
            EditConfig::new(pattern(&dir, "*.json"), "[a]", MutationMode::Add).new_value("1");
        assert_eq!(run(&config).unwrap(), 0);
    }

    #[test]
    fn invalid_path() {
        let dir = tempfile::tempdir().unwrap();
        write_json(&dir, "test.json", &sample());

        let config =
            EditConfig::new(pattern(&dir, "*.json"), "a.b", MutationMode::Add).new_value("1");
        assert!(matches!(
            run(&config),
            Err(EditError::Mutate(MutateError::InvalidPath(_)))
        ));
    }

    #[test]
    fn invalid_document() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "[1, 2").unwrap();

        let config = EditConfig::new(pattern(&dir, "*.json"), "[a]", MutationMode::Remove);
        assert!(matches!(run(&config), Err(EditError::Parse { .. })));
    }

    #[test]
    fn edit_file_keeps_key_order() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.json");
        let output = dir.path().join("out.json");
        std::fs::write(&input, r#"{"z": 1, "a": {"y": 2, "b": 3}, "m": 4}"#).unwrap();

        let mutation = Mutation::Add { value: json!(5) };
        edit_file(&input, &output, &"[a][c]".parse().unwrap(), &mutation).unwrap();
        edit_file(&output, &output, &"[z]".parse().unwrap(), &Mutation::Remove).unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            "{\n  \"a\": {\n    \"y\": 2,\n    \"b\": 3,\n    \"c\": 5\n  },\n  \"m\": 4\n}"
        );
    }
}

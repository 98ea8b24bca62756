//! Test fixtures.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

/// Build a query object whose fields are double-encoded.
pub fn query(fields: &[(&str, Value)]) -> String {
    let mut outer = serde_json::Map::new();
    for (field, value) in fields {
        outer.insert(field.to_string(), Value::String(value.to_string()));
    }
    Value::Object(outer).to_string()
}

/// Container definition the fake terraform reports as its `rendered` output.
pub fn rendered_definition() -> Value {
    json!({
        "name": "web",
        "image": "123",
        "environment": [
            {"name": "FOO", "value": "1"},
            {"name": "LABEL_KEY_1", "value": "label_value_1"}
        ],
        "secrets": [{"name": "DB_PASS", "valueFrom": "arn:aws:secret:1"}]
    })
}

/// Write a shell script that behaves enough like `terraform` for the harness.
///
/// - appends `<subcommand> <args>` to `$FAKE_TF_LOG` when set
/// - exits 3 when the subcommand equals `$FAKE_TF_FAIL`
/// - on `apply`, writes a state file to the `-state=` path
#[cfg(unix)]
pub fn fake_terraform(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let state = json!({
        "version": 3,
        "modules": [
            {
                "path": ["root"],
                "outputs": {
                    "rendered": {"type": "string", "value": rendered_definition().to_string()}
                },
                "resources": {}
            },
            {
                "path": ["root", "container_definition"],
                "outputs": {"env": {"type": "string", "value": "[]"}},
                "resources": {"data.external.encode_env": {"type": "external"}}
            }
        ]
    });

    let script = format!(
        r#"#!/bin/sh
sub="$1"
shift
if [ -n "$FAKE_TF_LOG" ]; then
  echo "$sub $*" >> "$FAKE_TF_LOG"
fi
if [ "$sub" = "$FAKE_TF_FAIL" ]; then
  echo "boom" >&2
  exit 3
fi
if [ "$sub" = "apply" ]; then
  for arg in "$@"; do
    case "$arg" in
      -state=*) state="${{arg#-state=}}" ;;
    esac
  done
  cat > "$state" <<'STATE'
{}
STATE
fi
exit 0
"#,
        state
    );

    let path = dir.join("fake-terraform");
    std::fs::write(&path, script).expect("failed to write fake terraform");
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))
        .expect("failed to chmod fake terraform");
    path
}

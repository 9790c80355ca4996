use std::process::Command;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
    cmd.env("TERM", "xterm-256color").env("LANG", "en_US.UTF-8");
    cmd
}

#[test]
fn export_emits_valid_json() {
    let output = bin().arg("export").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    assert_eq!(value["profile"]["name"], "Lay Been Tan");
    assert_eq!(value["statistics"]["years_experience"], 31);
    assert_eq!(value["experience"].as_array().unwrap().len(), 5);
    assert_eq!(value["projects"].as_array().unwrap().len(), 4);
}

#[test]
fn export_pretty_is_multiline_and_equivalent() {
    let compact = bin().arg("export").output().unwrap();
    let pretty = bin().args(["export", "--pretty"]).output().unwrap();
    assert!(pretty.status.success());

    let compact_value: serde_json::Value =
        serde_json::from_slice(&compact.stdout).unwrap();
    let pretty_text = String::from_utf8_lossy(&pretty.stdout);
    let pretty_value: serde_json::Value = serde_json::from_str(&pretty_text).unwrap();

    assert!(pretty_text.lines().count() > 1);
    assert_eq!(compact_value, pretty_value);
}

#[test]
fn export_keeps_metric_keys_camel_case() {
    let output = bin().arg("export").output().unwrap();
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();

    let keys: Vec<&str> = value["projects"][0]["metrics"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["key"].as_str().unwrap())
        .collect();
    assert_eq!(keys, ["budget", "teamSize", "timeline", "coverage"]);
}

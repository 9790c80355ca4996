use std::process::Command;

fn bin() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_folio"));
    cmd.env("TERM", "xterm-256color")
        .env("LANG", "en_US.UTF-8")
        .env_remove("FOLIO_LOG")
        .env_remove("NO_COLOR");
    cmd
}

#[test]
fn print_full_page_contains_every_section() {
    let output = bin().arg("print").output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for needle in [
        "Lay Been Tan",
        "About Me",
        "Professional Experience",
        "Skills & Expertise",
        "Key Projects",
        "Get In Touch",
        "All rights reserved",
    ] {
        assert!(stdout.contains(needle), "missing {:?} in:\n{}", needle, stdout);
    }
}

#[test]
fn print_single_section_omits_the_rest() {
    let output = bin().args(["print", "skills"]).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("Skills & Expertise"));
    assert!(!stdout.contains("Professional Experience"));
    assert!(!stdout.contains("Get In Touch"));
}

#[test]
fn print_respects_color_never() {
    let output = bin()
        .args(["print", "hero", "--color", "never"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(!stdout.contains('\u{1b}'), "expected no ANSI escapes:\n{}", stdout);
}

#[test]
fn print_width_floor_keeps_layout_usable() {
    let output = bin()
        .args(["print", "about", "--width", "1", "--color", "never"])
        .output()
        .unwrap();
    assert!(output.status.success());
    assert!(!output.stdout.is_empty());
}

#[test]
fn print_rejects_unknown_section() {
    let output = bin().args(["print", "blog"]).output().unwrap();
    assert!(!output.status.success());
}

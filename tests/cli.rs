use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn symfig(out: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("symfig").unwrap();
    cmd.arg("--out").arg(out.path());
    cmd
}

#[test]
fn list_shows_both_catalogues() {
    let out = TempDir::new().unwrap();
    symfig(&out)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("presentation:"))
        .stdout(predicate::str::contains("report:"))
        .stdout(predicate::str::contains("wyckoff"))
        .stdout(predicate::str::contains("variants"));
}

#[test]
fn report_writes_every_figure() {
    let out = TempDir::new().unwrap();
    symfig(&out).arg("report").assert().success();

    let figs = out.path().join("report").join("figs");
    for name in [
        "p1.svg",
        "p1m_g.svg",
        "p1m_s.svg",
        "p2mg.svg",
        "title.svg",
        "variants.svg",
    ] {
        assert!(figs.join(name).is_file(), "missing {name}");
    }
    assert!(!figs.join("legend.svg").exists());
    assert!(!out.path().join("presentation").exists());

    let p2mg = std::fs::read_to_string(figs.join("p2mg.svg")).unwrap();
    assert!(p2mg.contains("<text"));
}

#[test]
fn presentation_only_renders_selection() {
    let out = TempDir::new().unwrap();
    symfig(&out)
        .args(["presentation", "--only", "p1", "generator"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 6 files"));

    let figs = out.path().join("presentation").join("figs");
    assert!(figs.join("p1.svg").is_file());
    assert!(figs.join("generator2.svg").is_file());
    assert!(figs.join("arrow2.svg").is_file());
    assert!(!figs.join("p2mg.svg").exists());
}

#[test]
fn presentation_figures_carry_legend_text() {
    let out = TempDir::new().unwrap();
    symfig(&out)
        .args(["presentation", "--only", "p2mg"])
        .assert()
        .success();

    let figs = out.path().join("presentation").join("figs");
    let scene = std::fs::read_to_string(figs.join("p2mg.svg")).unwrap();
    assert!(!scene.contains("<text"));
    assert!(scene.contains("#aaaaaa"));

    let legend = std::fs::read_to_string(figs.join("legend.svg")).unwrap();
    assert!(legend.contains("<text"));
    assert!(legend.contains("fill=\"white\""));
}

#[test]
fn pairs_prints_multiplicity_table() {
    let out = TempDir::new().unwrap();
    symfig(&out)
        .args(["pairs", "p2mg", "--position", "0.2", "0.25"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Origin"))
        .stdout(predicate::str::contains("Multiplicity"))
        .stdout(predicate::str::contains("(0.200, 0.250)"));
    assert!(!out.path().join("report").exists());
}

#[test]
fn pairs_rejects_unknown_group() {
    let out = TempDir::new().unwrap();
    symfig(&out)
        .args(["pairs", "p6mm", "--position", "0", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("p6mm"));
}

#[test]
fn unknown_figure_fails() {
    let out = TempDir::new().unwrap();
    symfig(&out)
        .args(["report", "--only", "wyckoff"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("wyckoff"));
}

#[test]
fn diffraction_writes_three_images_per_step() {
    let out = TempDir::new().unwrap();
    symfig(&out)
        .args(["diffraction", "--unit", "10", "--grid", "4", "--steps", "2", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 6 files"));

    let imgs = out.path().join("report").join("imgs");
    for k in 1..=2 {
        for prefix in ["test", "fft", "pdf"] {
            assert!(imgs.join(format!("{prefix}{k}.png")).is_file());
        }
    }
}

#[test]
fn diffraction_accepts_log_tone_and_palette() {
    let out = TempDir::new().unwrap();
    symfig(&out)
        .args(["diffraction", "--unit", "6", "--grid", "2", "--steps", "1", "--seed", "9"])
        .args(["--tone", "log", "--palette", "viridis"])
        .assert()
        .success();
    assert!(out.path().join("report/imgs/fft1.png").is_file());
}

#[test]
fn diffraction_rejects_zero_grid() {
    let out = TempDir::new().unwrap();
    symfig(&out)
        .args(["diffraction", "--grid", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grid"));
    assert!(!out.path().join("report").exists());
}

#[test]
fn log_file_receives_debug_events() {
    let out = TempDir::new().unwrap();
    let log = out.path().join("symfig.log");
    symfig(&out)
        .arg("--log")
        .arg(&log)
        .args(["report", "--only", "p1"])
        .assert()
        .success();

    let text = std::fs::read_to_string(log).unwrap();
    assert!(text.contains("wrote svg"));
}

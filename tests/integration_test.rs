// tests/integration_test.rs
use version_determiner::cli::{determine, DetermineArgs};
use version_determiner::domain::{ReleaseType, Version};
use version_determiner::source::FixedSource;

fn run(current: &str, mode: &str, release_type: &str) -> version_determiner::Result<String> {
    let args = DetermineArgs {
        mode: mode.to_string(),
        release_type: release_type.to_string(),
        tag_prefix: "v".to_string(),
        verbose: false,
    };
    determine(&args, &FixedSource::new(current)).map(|d| d.output)
}

#[test]
fn test_patch_release_of_snapshot() {
    assert_eq!(
        run("1.4.9-SNAPSHOT", "release-version", "PATCH").unwrap(),
        "1.4.9"
    );
}

#[test]
fn test_minor_version_tag_of_snapshot() {
    assert_eq!(run("1.4.9-SNAPSHOT", "version-tag", "MINOR").unwrap(), "v1.5.0");
}

#[test]
fn test_major_snapshot_version() {
    assert_eq!(
        run("2.0.0", "snapshot-version", "MAJOR").unwrap(),
        "3.0.1-SNAPSHOT"
    );
}

#[test]
fn test_every_mode_and_release_type() {
    let cases = [
        ("release-version", "MAJOR", "2.0.0"),
        ("release-version", "MINOR", "1.3.0"),
        ("release-version", "PATCH", "1.2.3"),
        ("version-tag", "MAJOR", "v2.0.0"),
        ("version-tag", "MINOR", "v1.3.0"),
        ("version-tag", "PATCH", "v1.2.3"),
        ("snapshot-version", "MAJOR", "2.0.1-SNAPSHOT"),
        ("snapshot-version", "MINOR", "1.3.1-SNAPSHOT"),
        ("snapshot-version", "PATCH", "1.2.4-SNAPSHOT"),
    ];

    for (mode, release_type, expected) in cases {
        assert_eq!(
            run("1.2.3-SNAPSHOT", mode, release_type).unwrap(),
            expected,
            "mode={} release_type={}",
            mode,
            release_type
        );
    }
}

#[test]
fn test_multi_digit_components() {
    assert_eq!(
        run("1.10.12-SNAPSHOT", "release-version", "PATCH").unwrap(),
        "1.10.12"
    );
    assert_eq!(
        run("1.10.12-SNAPSHOT", "release-version", "MINOR").unwrap(),
        "1.11.0"
    );
}

#[test]
fn test_build_tool_newline_is_tolerated() {
    assert_eq!(run("0.5.2\n", "version-tag", "PATCH").unwrap(), "v0.5.2");
}

#[test]
fn test_invalid_mode() {
    let err = run("1.0.0", "bogus", "PATCH").unwrap_err();
    assert!(err.is_usage_error());
}

#[test]
fn test_invalid_release_type() {
    let err = run("1.0.0", "release-version", "bogus").unwrap_err();
    assert!(err.is_usage_error());
}

#[test]
fn test_malformed_current_version() {
    for current in ["", "SNAPSHOT", "1.2", "[ERROR] no POM in this directory"] {
        let err = run(current, "release-version", "PATCH").unwrap_err();
        assert!(!err.is_usage_error(), "'{}' should fail dissection", current);
    }
}

#[test]
fn test_major_and_minor_reset_patch() {
    for current in ["0.0.0", "1.2.3", "7.0.19-SNAPSHOT", "10.20.30"] {
        let version = Version::dissect(current).unwrap();
        for release_type in [ReleaseType::Major, ReleaseType::Minor] {
            let bumped = version.bump(release_type).unwrap();
            assert_eq!(bumped.patch, 0, "{} {}", current, release_type);
            if release_type == ReleaseType::Major {
                assert_eq!(bumped.minor, 0);
            }
        }
    }
}

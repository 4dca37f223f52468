use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

// Helper function to get the path to the compiled binary
fn mkvprep_cmd() -> Command {
    let mut cmd = Command::cargo_bin("mkvprep").expect("Failed to find mkvprep binary");
    cmd.env_remove("MKVPREP_MEDIAINFO")
        .env_remove("MKVPREP_MKVPROPEDIT")
        .env_remove("CLICOLOR_FORCE")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_no_arguments_prints_usage() {
    mkvprep_cmd()
        .assert()
        .failure()
        .stderr(contains("Usage"));
}

#[test]
fn test_too_many_arguments_prints_usage() -> Result<(), Box<dyn Error>> {
    let first = tempdir()?;
    let second = tempdir()?;

    mkvprep_cmd()
        .arg(first.path())
        .arg(second.path())
        .assert()
        .failure()
        .stderr(contains("Usage"));

    Ok(())
}

#[test]
fn test_non_existent_directory() {
    let non_existent_input = PathBuf::from("surely/this/does/not/exist/release");

    mkvprep_cmd()
        .arg(&non_existent_input)
        .assert()
        .code(1)
        .stderr(contains("does not exist"));
}

#[test]
fn test_missing_global_tags_aborts_before_probing() -> Result<(), Box<dyn Error>> {
    let release = tempdir()?;
    fs::write(release.path().join("movie.mkv"), "dummy content")?;

    // Tools that would leave a trace if they were ever started
    let tools = tempdir()?;
    let trace = tools.path().join("trace.txt");
    let tracer = write_script(
        tools.path(),
        "tracer",
        &format!("#!/bin/sh\necho called >> '{}'\n", trace.display()),
    )?;

    mkvprep_cmd()
        .arg(release.path())
        .env("MKVPREP_MEDIAINFO", &tracer)
        .env("MKVPREP_MKVPROPEDIT", &tracer)
        .assert()
        .code(1)
        .stderr(contains("No global_tags.xml in provided directory"))
        .stderr(contains(
            "https://raw.githubusercontent.com/rlaphoenix/RPG/master/global_tags.xml",
        ));

    assert!(!trace.exists());
    assert_eq!(fs::read_to_string(release.path().join("movie.mkv"))?, "dummy content");
    Ok(())
}

#[test]
fn test_missing_tool_is_reported() -> Result<(), Box<dyn Error>> {
    let release = tempdir()?;
    fs::write(release.path().join("global_tags.xml"), "<Tags/>")?;
    fs::write(release.path().join("movie.mkv"), "dummy content")?;

    mkvprep_cmd()
        .arg(release.path())
        .env("MKVPREP_MEDIAINFO", "mkvprep-no-such-mediainfo-42")
        .assert()
        .code(1)
        .stderr(contains("mkvprep-no-such-mediainfo-42"))
        .stderr(contains("not found"));

    Ok(())
}

#[test]
fn test_empty_release_does_not_need_tools() -> Result<(), Box<dyn Error>> {
    let release = tempdir()?;
    fs::write(release.path().join("global_tags.xml"), "<Tags/>")?;
    fs::write(release.path().join("notes.txt"), "not a container")?;

    mkvprep_cmd()
        .arg(release.path())
        .env("MKVPREP_MEDIAINFO", "mkvprep-no-such-mediainfo-42")
        .env("MKVPREP_MKVPROPEDIT", "mkvprep-no-such-mkvpropedit-42")
        .assert()
        .success()
        .stdout(contains("✓✓✓ done all files"));

    Ok(())
}

// --- Stand-in tools (Unix only: they are shell scripts) ---

#[cfg(unix)]
fn write_script(dir: &Path, name: &str, body: &str) -> Result<PathBuf, Box<dyn Error>> {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    fs::write(&path, body)?;
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755))?;
    Ok(path)
}

#[cfg(not(unix))]
fn write_script(dir: &Path, name: &str, _body: &str) -> Result<PathBuf, Box<dyn Error>> {
    Ok(dir.join(name))
}

#[cfg(unix)]
const MOVIE_JSON: &str = r#"{"media": {"@ref": "movie.mkv", "track": [
  {"@type": "General", "Format": "Matroska"},
  {"@type": "Video", "StreamKindID": "0", "ID": "1", "Format": "AVC"},
  {"@type": "Audio", "@typeorder": "1", "StreamKindID": "0", "ID": "2",
   "Format": "AAC", "Language": "en", "ChannelLayout": "L R"},
  {"@type": "Audio", "@typeorder": "2", "StreamKindID": "1", "ID": "3",
   "Format": "AAC", "Language": "en", "ChannelLayout": "L R"}
]}}"#;

/// Writes a fake mediainfo that prints `json` and a fake mkvpropedit that
/// appends its arguments, one per line, to `edits.log` and exits with `exit`.
#[cfg(unix)]
fn fake_tools(dir: &Path, json: &str, exit: i32) -> Result<(PathBuf, PathBuf, PathBuf), Box<dyn Error>> {
    let json_path = dir.join("probe.json");
    fs::write(&json_path, json)?;
    let mediainfo = write_script(
        dir,
        "mediainfo",
        &format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--Version\" ]; then echo 'MediaInfo Command line, v24.01'; exit 0; fi\n\
             cat '{}'\n",
            json_path.display()
        ),
    )?;

    let log = dir.join("edits.log");
    let mkvpropedit = write_script(
        dir,
        "mkvpropedit",
        &format!(
            "#!/bin/sh\n\
             if [ \"$1\" = \"--version\" ]; then echo 'mkvpropedit v80.0'; exit 0; fi\n\
             printf '%s\\n' \"$@\" >> '{log}'\n\
             echo '---' >> '{log}'\n\
             if [ {exit} -ne 0 ]; then echo 'Error: The file could not be opened for writing.'; fi\n\
             exit {exit}\n",
            log = log.display(),
            exit = exit
        ),
    )?;

    Ok((mediainfo, mkvpropedit, log))
}

#[cfg(unix)]
#[test]
fn test_prepares_single_movie() -> Result<(), Box<dyn Error>> {
    let release = tempdir()?;
    fs::write(release.path().join("global_tags.xml"), "<Tags/>")?;
    fs::write(release.path().join("movie.mkv"), "dummy content")?;

    let tools = tempdir()?;
    let (mediainfo, mkvpropedit, log) = fake_tools(tools.path(), MOVIE_JSON, 0)?;

    mkvprep_cmd()
        .arg(release.path())
        .env("MKVPREP_MEDIAINFO", &mediainfo)
        .env("MKVPREP_MKVPROPEDIT", &mkvpropedit)
        .assert()
        .success()
        .stdout(contains("Warning: No subtitle tracks?"))
        .stdout(contains("✓ : movie.mkv\n✓✓✓ done all files"))
        .stderr(contains("No subtitle tracks").not())
        .stderr(contains("Edited 1 file(s)").not());

    let recorded = fs::read_to_string(&log)?;
    let args: Vec<&str> = recorded.lines().collect();

    // Exactly one invocation
    assert_eq!(args.iter().filter(|l| **l == "---").count(), 1);

    let tags = release.path().join("global_tags.xml");
    let target = release.path().join("movie.mkv");
    let global = format!("global:{}", tags.display());
    let target = target.display().to_string();
    let expected = [
        "-t", global.as_str(),
        "-e", "info",
        "-s", "title=movie",
        "-e", "track:1",
        "-s", "flag-enabled=1",
        "-s", "flag-default=1",
        "-s", "flag-forced=0",
        "-s", "name=",
        "-s", "language=en",
        "-e", "track:2",
        "-s", "flag-enabled=1",
        "-s", "flag-default=1",
        "-s", "flag-forced=0",
        "-s", "name=AAC 2.0",
        "-e", "track:3",
        "-s", "flag-enabled=1",
        "-s", "flag-default=0",
        "-s", "flag-forced=0",
        "-s", "name=AAC 2.0, not first audio, is this commentary?",
        target.as_str(),
        "---",
    ];
    assert_eq!(args, expected);

    Ok(())
}

#[cfg(unix)]
#[test]
fn test_editor_failure_is_fatal() -> Result<(), Box<dyn Error>> {
    let release = tempdir()?;
    fs::write(release.path().join("global_tags.xml"), "<Tags/>")?;
    fs::write(release.path().join("a.mkv"), "dummy content")?;
    fs::write(release.path().join("b.mkv"), "dummy content")?;

    let tools = tempdir()?;
    let (mediainfo, mkvpropedit, log) = fake_tools(tools.path(), MOVIE_JSON, 2)?;

    mkvprep_cmd()
        .arg(release.path())
        .env("MKVPREP_MEDIAINFO", &mediainfo)
        .env("MKVPREP_MKVPROPEDIT", &mkvpropedit)
        .assert()
        .code(1)
        .stderr(contains("Failed to mkvpropedit"))
        .stderr(contains("could not be opened for writing"))
        .stdout(contains("done all files").not());

    // The run stops after the first failed edit
    let recorded = fs::read_to_string(&log)?;
    assert_eq!(recorded.lines().filter(|l| *l == "---").count(), 1);

    Ok(())
}

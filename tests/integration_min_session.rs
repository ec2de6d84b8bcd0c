// Smoke test for the wordrun binary under a pseudo terminal: start a
// 5-second run with Enter, type two words, restart with Ctrl+R and leave
// with Esc. The binary has to exit on its own afterwards.
//
// Ignored by default since it needs a built binary and a PTY (expectrl).
// `cargo test --test integration_min_session -- --ignored`

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn minimal_session_starts_types_and_exits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let config = dir.path().join("config.json");

    let bin = assert_cmd::cargo::cargo_bin("wordrun");
    let cmd = format!("{} -w 10 -s 5 --config {}", bin.display(), config.display());

    let mut p = spawn(cmd)?;

    // let raw mode and the alternate screen settle
    std::thread::sleep(Duration::from_millis(200));

    // Enter starts the countdown, then type a couple of words
    p.send("\r")?;
    p.send("abc def ")?;

    std::thread::sleep(Duration::from_millis(200));

    // Ctrl+R back to idle, then Esc
    p.send("\x12")?;
    p.send("\x1b")?;

    p.expect(Eof)?;
    Ok(())
}

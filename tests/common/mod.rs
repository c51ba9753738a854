#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Writes an executable stand-in for the companion tool. Every invocation
/// appends its argv to `log`, then runs `body`.
#[cfg(unix)]
pub fn write_fake_tool(dir: &Path, log: &Path, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("fake-tool");
    let script = format!("#!/bin/sh\necho \"$@\" >> {}\n{body}\n", log.display());
    fs::write(&path, script).unwrap();
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

pub fn tool_invocations(log: &Path) -> Vec<String> {
    match fs::read_to_string(log) {
        Ok(text) => text.lines().map(str::to_string).collect(),
        Err(_) => Vec::new(),
    }
}

/// Materializes a downloaded exercise: metadata/manifest pair under
/// `.praxis/`, a README and a solution file.
pub fn write_exercise_fixture(workspace: &Path, track: &str, exercise: &str, id: &str) -> PathBuf {
    let dir = workspace.join(track).join(exercise);
    let meta_dir = dir.join(".praxis");
    fs::create_dir_all(&meta_dir).unwrap();

    let solution = format!("{}.rs", exercise.replace('-', "_"));
    let test_file = format!("{}_test.rs", exercise.replace('-', "_"));

    fs::write(
        meta_dir.join("metadata.json"),
        format!(
            r#"{{"track":"{track}","exercise":"{exercise}","id":"{id}","url":"https://exercises.praxis.dev/{track}/{exercise}"}}"#
        ),
    )
    .unwrap();
    fs::write(
        meta_dir.join("config.json"),
        format!(r#"{{"files":{{"solution":["{solution}"],"test":["{test_file}"]}}}}"#),
    )
    .unwrap();
    fs::write(dir.join("README.md"), format!("# {exercise}\n")).unwrap();
    fs::write(dir.join(&solution), "pub fn solve() {}\n").unwrap();
    fs::write(dir.join(&test_file), "#[test]\nfn it_works() {}\n").unwrap();
    dir
}

/// Shell snippet for the fake tool that materializes `write_exercise_fixture`
/// content for whatever `--track=`/`--exercise=` it is asked to download.
#[cfg(unix)]
pub fn downloading_tool_body(workspace: &Path) -> String {
    format!(
        r#"
track=""
exercise=""
for arg in "$@"; do
  case "$arg" in
    --track=*) track="${{arg#--track=}}" ;;
    --exercise=*) exercise="${{arg#--exercise=}}" ;;
  esac
done
dir="{ws}/$track/$exercise"
mkdir -p "$dir/.praxis"
slug=$(printf '%s' "$exercise" | tr '-' '_')
printf '{{"track":"%s","exercise":"%s","id":"id-%s","url":"https://exercises.praxis.dev/%s/%s"}}' \
  "$track" "$exercise" "$exercise" "$track" "$exercise" > "$dir/.praxis/metadata.json"
printf '{{"files":{{"solution":["%s.rs"],"test":["%s_test.rs"]}}}}' "$slug" "$slug" > "$dir/.praxis/config.json"
printf '# %s\n' "$exercise" > "$dir/README.md"
printf 'pub fn solve() {{}}\n' > "$dir/$slug.rs"
printf '#[test]\nfn it_works() {{}}\n' > "$dir/${{slug}}_test.rs"
"#,
        ws = workspace.display()
    )
}

/// Serves `router` on an ephemeral port from a background thread; returns
/// the base URL. The thread lives for the rest of the test process.
pub fn spawn_service(router: axum::Router) -> String {
    let (tx, rx) = std::sync::mpsc::channel();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async move {
            let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
            tx.send(listener.local_addr().unwrap()).unwrap();
            axum::serve(listener, router).await.unwrap();
        });
    });
    let addr = rx.recv().unwrap();
    format!("http://{addr}")
}

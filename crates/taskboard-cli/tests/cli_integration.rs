use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::path::Path;
use tempfile::tempdir;

fn taskboard() -> Command {
    let mut cmd = Command::cargo_bin("taskboard").unwrap();
    // Keep broadcasts away from any real server on the default address.
    cmd.env("TASKBOARD_SERVER", "127.0.0.1:9")
        .env("RUST_LOG", "warn")
        .env_remove("TASKBOARD_DEBUG_LOG");
    cmd
}

fn parse_json_output(output: &[u8]) -> Value {
    serde_json::from_slice(output).expect("Failed to parse JSON output")
}

fn run_ok(file: &Path, args: &[&str]) -> Value {
    let output = taskboard()
        .arg("--file")
        .arg(file)
        .args(args)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let json = parse_json_output(&output);
    assert!(json["success"].as_bool().unwrap());
    json
}

mod board_tests {
    use super::*;

    #[test]
    fn test_first_run_seeds_demo_board() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let json = run_ok(&file, &["board", "list"]);
        assert_eq!(json["data"]["count"], 1);
        assert_eq!(json["data"]["items"][0]["title"], "Robot dev proj");
        assert_eq!(json["data"]["items"][0]["_id"], "b101");
        assert!(file.exists());
    }

    #[test]
    fn test_board_create_then_list() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let created = run_ok(&file, &["board", "create", "--title", "Launch plan"]);
        assert_eq!(created["data"]["title"], "Launch plan");
        assert!(!created["data"]["_id"].as_str().unwrap().is_empty());

        let json = run_ok(&file, &["board", "list"]);
        assert_eq!(json["data"]["count"], 2);

        let filtered = run_ok(&file, &["board", "list", "--title", "launch"]);
        assert_eq!(filtered["data"]["count"], 1);
        assert_eq!(filtered["data"]["items"][0]["title"], "Launch plan");
    }

    #[test]
    fn test_board_get_with_title_filter() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let json = run_ok(&file, &["board", "get", "--id", "b101", "--title", "logo"]);
        let groups = json["data"]["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 1);
        assert_eq!(groups[0]["title"], "Group 1");
        assert_eq!(groups[0]["tasks"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_board_get_unknown_id_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        taskboard()
            .arg("--file")
            .arg(&file)
            .args(["board", "get", "--id", "nope"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("\"success\":false"));
    }

    #[test]
    fn test_delete_last_board_creates_default() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let json = run_ok(&file, &["board", "delete", "--id", "b101"]);
        assert_eq!(json["data"]["removed"], "b101");
        assert_eq!(json["data"]["created_default"], true);

        let list = run_ok(&file, &["board", "list"]);
        assert_eq!(list["data"]["count"], 1);
        assert_eq!(list["data"]["items"][0]["title"], "New Board");
        assert_eq!(list["data"]["items"][0]["_id"], json["data"]["next_board_id"]);
    }

    #[test]
    fn test_star_and_rename() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let starred = run_ok(&file, &["board", "star", "--id", "b101"]);
        assert_eq!(starred["data"]["isStarred"], true);

        let only_starred = run_ok(&file, &["board", "list", "--starred", "true"]);
        assert_eq!(only_starred["data"]["count"], 1);

        let renamed = run_ok(&file, &["board", "rename", "--id", "b101", "--title", "Robots"]);
        assert_eq!(renamed["data"]["title"], "Robots");

        taskboard()
            .arg("--file")
            .arg(&file)
            .args(["board", "rename", "--id", "b101", "--title", " "])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be empty"));
    }

    #[test]
    fn test_duplicate_gets_new_id() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let copy = run_ok(&file, &["board", "duplicate", "--id", "b101"]);
        assert_ne!(copy["data"]["_id"], "b101");
        assert_eq!(copy["data"]["title"], "Robot dev proj");

        let list = run_ok(&file, &["board", "list"]);
        assert_eq!(list["data"]["count"], 2);
    }
}

mod task_tests {
    use super::*;

    #[test]
    fn test_group_and_task_add() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let group = run_ok(
            &file,
            &["group", "add", "--board", "b101", "--title", "Backlog"],
        );
        assert_eq!(group["data"]["title"], "Backlog");
        let group_id = group["data"]["id"].as_str().unwrap().to_string();

        let task = run_ok(
            &file,
            &[
                "task", "add", "--board", "b101", "--group", &group_id, "--title", "Wire motors",
            ],
        );
        assert_eq!(task["data"]["title"], "Wire motors");

        let board = run_ok(&file, &["board", "get", "--id", "b101"]);
        let groups = board["data"]["groups"].as_array().unwrap();
        assert_eq!(groups.len(), 3);
        assert_eq!(groups[2]["tasks"][0]["title"], "Wire motors");
    }

    #[test]
    fn test_status_update_is_logged() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let task = run_ok(
            &file,
            &[
                "task", "update", "--board", "b101", "--group", "g101", "--task", "c101",
                "--status", "Done",
            ],
        );
        assert_eq!(task["data"]["status"], "Done");
        assert_eq!(task["data"]["updatedBy"]["memberId"], "m101");

        let log = run_ok(
            &file,
            &["task", "activity", "--board", "b101", "--task", "c101"],
        );
        assert_eq!(log["data"]["count"], 1);
        assert_eq!(log["data"]["items"][0]["from"], "Stuck");
        assert_eq!(log["data"]["items"][0]["to"], "Done");
    }

    #[test]
    fn test_task_remove() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        run_ok(
            &file,
            &["task", "remove", "--board", "b101", "--group", "g102", "--task", "c104"],
        );
        let board = run_ok(&file, &["board", "get", "--id", "b101"]);
        assert_eq!(board["data"]["groups"][1]["tasks"].as_array().unwrap().len(), 2);
    }
}

mod comment_tests {
    use super::*;

    const TARGET: [&str; 6] = ["--board", "b101", "--group", "g101", "--task", "c101"];

    fn comment_args<'a>(action: &'a str, extra: &[&'a str]) -> Vec<&'a str> {
        let mut args = vec!["comment", action];
        args.extend(TARGET);
        args.extend(extra);
        args
    }

    #[test]
    fn test_comment_add_prepends() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let comment = run_ok(&file, &comment_args("add", &["--txt", "on it", "--bold"]));
        assert_eq!(comment["data"]["txt"], "on it");
        assert_eq!(comment["data"]["byMember"]["id"], "m101");
        assert_eq!(comment["data"]["style"]["fontWeight"], "bold");

        let board = run_ok(&file, &["board", "get", "--id", "b101"]);
        let comments = board["data"]["groups"][0]["tasks"][0]["comments"]
            .as_array()
            .unwrap();
        assert_eq!(comments.len(), 4);
        assert_eq!(comments[0]["txt"], "on it");
    }

    #[test]
    fn test_comment_edit_and_remove() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        let edited = run_ok(
            &file,
            &comment_args("edit", &["--id", "a102", "--txt", "fixed", "--align", "center"]),
        );
        assert_eq!(edited["data"]["txt"], "fixed");
        assert_eq!(edited["data"]["style"]["textAlign"], "Center");

        run_ok(&file, &comment_args("remove", &["--id", "a101"]));

        let board = run_ok(&file, &["board", "get", "--id", "b101"]);
        let comments = board["data"]["groups"][0]["tasks"][0]["comments"]
            .as_array()
            .unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0]["txt"], "fixed");
    }

    #[test]
    fn test_empty_comment_rejected() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        taskboard()
            .arg("--file")
            .arg(&file)
            .args(comment_args("add", &["--txt", ""]))
            .assert()
            .failure()
            .stderr(predicate::str::contains("Validation error"));
    }
}

mod broadcast_tests {
    use super::*;
    use std::time::Duration;
    use taskboard_realtime::{serve, CommentHub, TaskCommentChannel, WsSocket};
    use tokio::net::TcpListener;

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_comment_add_reaches_watcher() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap().to_string();
        let hub = CommentHub::new();
        let (stop_tx, stop_rx) = tokio::sync::oneshot::channel::<()>();
        tokio::spawn(serve(listener, hub.clone(), async move {
            let _ = stop_rx.await;
        }));

        let url = format!("ws://{}/socket", addr);
        let mut watcher = TaskCommentChannel::new(WsSocket::connect(&url).await.unwrap());
        watcher.open("c101").await.unwrap();
        tokio::time::timeout(Duration::from_secs(5), async {
            while hub.listeners_on("c101") != 1 {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .unwrap();

        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");
        let server = addr.clone();
        let output = tokio::task::spawn_blocking(move || {
            taskboard()
                .arg("--file")
                .arg(&file)
                .args(["--server", &server])
                .args(["comment", "add", "--board", "b101", "--group", "g101"])
                .args(["--task", "c101", "--txt", "ship it"])
                .assert()
                .success()
                .get_output()
                .stdout
                .clone()
        })
        .await
        .unwrap();
        let sent = parse_json_output(&output);

        let received = tokio::time::timeout(Duration::from_secs(5), watcher.recv())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(received.txt, "ship it");
        assert_eq!(received.id, sent["data"]["id"].as_str().unwrap());

        let _ = stop_tx.send(());
    }

    #[test]
    fn test_comment_add_without_server_still_saves() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("board.json");

        // Nothing listens on the discard port.
        taskboard()
            .arg("--file")
            .arg(&file)
            .args(["comment", "add", "--board", "b101", "--group", "g101"])
            .args(["--task", "c101", "--txt", "offline"])
            .assert()
            .success()
            .stderr(predicate::str::contains("not broadcast"));

        let board = run_ok(&file, &["board", "get", "--id", "b101"]);
        assert_eq!(
            board["data"]["groups"][0]["tasks"][0]["comments"][0]["txt"],
            "offline"
        );
    }
}

#[test]
fn test_completions_bash() {
    taskboard()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("taskboard"));
}

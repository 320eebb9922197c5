use std::io::Cursor;
use std::sync::Arc;
use std::time::Duration;

use slovar_config::Config;
use slovar_core::Dictionary;
use slovar_ui::input::spawn_line_reader;
use slovar_ui::run_ui;
use slovar_ui::terminal::Terminal;
use tokio::sync::oneshot;
use tokio::time::timeout;

use crate::controller::{AppController, run};
use crate::state::AppState;

fn sample() -> Dictionary {
    Dictionary::from_paragraphs(["cat: meows", "hat: worn on the head", "dog: barks"])
}

/// Run the whole app on scripted input, returning what the UI printed
async fn run_app(input: &'static str) -> String {
    let state = Arc::new(AppState::new(Config::default(), sample()));
    let controller = AppController::new(state);
    let (out_tx, out_rx) = oneshot::channel();

    let tasks = controller.spawn_tasks_with(|app_to_ui_rx, ui_to_app_tx, config, cancel_token| {
        async move {
            let lines = spawn_line_reader(Cursor::new(input))?;
            let terminal = Terminal::new(Vec::new(), config, false);
            let terminal =
                run_ui(lines, terminal, app_to_ui_rx, ui_to_app_tx, cancel_token).await?;
            let _ = out_tx.send(terminal.into_inner());
            Ok::<(), anyhow::Error>(())
        }
    });

    timeout(
        Duration::from_secs(2),
        run(&controller, tasks, std::future::pending()),
    )
    .await
    .expect("app did not shut down");

    let out = out_rx.await.expect("UI task dropped its output");
    String::from_utf8(out).unwrap()
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn test_last_reply_renders_before_exit() {
    // The backend ends first on end of input, the UI must still drain its reply
    for _ in 0..50 {
        let out = run_app("at\n:def dog\n").await;
        assert!(out.contains("── dog ──\n  barks\n"), "lost reply in output:\n{out}");
    }
}

#[tokio::test]
async fn test_quit_command_ends_both_tasks() {
    let out = run_app("dog\n:quit\nhat\n").await;
    assert!(out.contains("   1. dog\n"));
    assert!(!out.contains("   1. hat\n"));
}

#[tokio::test]
async fn test_shutdown_cancels_running_tasks() {
    let state = Arc::new(AppState::new(Config::default(), sample()));
    let controller = AppController::new(state);

    // A UI waiting on input that never comes
    let tasks = controller.spawn_tasks_with(|app_to_ui_rx, ui_to_app_tx, config, cancel_token| {
        async move {
            let (_typing, lines) = kanal::bounded_async(0);
            let terminal = Terminal::new(Vec::new(), config, false);
            run_ui(lines, terminal, app_to_ui_rx, ui_to_app_tx, cancel_token).await?;
            Ok::<(), anyhow::Error>(())
        }
    });

    let result = timeout(
        Duration::from_secs(2),
        run(&controller, tasks, tokio::time::sleep(Duration::from_millis(50))),
    )
    .await;
    assert!(result.is_ok(), "tasks outlived shutdown");
}

#[tokio::test]
async fn test_failed_task_cancels_the_rest() {
    let state = Arc::new(AppState::new(Config::default(), sample()));
    let controller = AppController::new(state);

    let tasks = controller.spawn_tasks_with(|_app_to_ui_rx, _ui_to_app_tx, _config, _cancel_token| {
        async move { Err::<(), _>(anyhow::anyhow!("terminal went away")) }
    });

    let result = timeout(
        Duration::from_secs(2),
        run(&controller, tasks, std::future::pending()),
    )
    .await;
    assert!(result.is_ok(), "event loop kept running after the UI failed");
}

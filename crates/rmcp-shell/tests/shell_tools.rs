use std::time::Duration;

use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::CallToolResult;
use rmcp_shell::{CommandParams, FetchConfig, ShellConfig, ShellServer};

fn text(result: CallToolResult) -> String {
    result
        .content
        .first()
        .and_then(|c| c.as_text())
        .map(|t| t.text.clone())
        .expect("tool result should carry one text item")
}

fn server(command_timeout: Duration) -> ShellServer {
    ShellServer::new(ShellConfig {
        command_timeout,
        fetch: FetchConfig {
            program: "echo".to_string(),
            url: "https://example.com/payload.txt".to_string(),
            timeout: Duration::from_secs(5),
        },
    })
}

async fn run(server: &ShellServer, command: &str) -> String {
    let result = server
        .run_terminal_command(Parameters(CommandParams {
            command: command.to_string(),
        }))
        .await
        .expect("run_terminal_command never fails at the protocol level");
    assert_ne!(result.is_error, Some(true));
    text(result)
}

#[cfg(unix)]
#[tokio::test]
async fn echo_round_trip() {
    let output = run(&server(Duration::from_secs(30)), "echo hello").await;

    let (stdout, trailer) = output.rsplit_once('\n').unwrap();
    assert_eq!(stdout, "STDOUT:\nhello\n");
    assert_eq!(trailer, "Return code: 0");
}

#[cfg(unix)]
#[tokio::test]
async fn exit_status_is_reported() {
    let output = run(&server(Duration::from_secs(30)), "echo partial; exit 7").await;
    assert!(output.starts_with("STDOUT:\npartial\n"));
    assert!(output.ends_with("Return code: 7"));
}

#[cfg(unix)]
#[tokio::test]
async fn unknown_command_reports_shell_error() {
    let output = run(&server(Duration::from_secs(30)), "no-such-command-7d2e").await;
    assert!(output.contains("STDERR:"));
    assert!(output.ends_with("Return code: 127"));
}

#[cfg(unix)]
#[tokio::test]
async fn timed_out_process_is_gone() {
    use nix::sys::signal::kill;
    use nix::unistd::Pid;

    let dir = tempfile::tempdir().unwrap();
    let pid_file = dir.path().join("pid");
    let command = format!("echo $$ > '{}'; sleep 30", pid_file.display());

    let output = run(&server(Duration::from_secs(1)), &command).await;
    assert_eq!(output, "Error: Command timed out after 1 seconds");

    let pid: i32 = std::fs::read_to_string(&pid_file)
        .unwrap()
        .trim()
        .parse()
        .unwrap();
    assert!(kill(Pid::from_raw(pid), None).is_err(), "process {pid} still running");
}

#[cfg(unix)]
#[tokio::test]
async fn concurrent_calls_keep_independent_deadlines() {
    let server = server(Duration::from_secs(2));

    let (slow, fast) = tokio::join!(run(&server, "sleep 30"), run(&server, "echo quick"));

    assert_eq!(slow, "Error: Command timed out after 2 seconds");
    assert_eq!(fast, "STDOUT:\nquick\n\nReturn code: 0");
}

#[cfg(unix)]
#[tokio::test]
async fn fetch_tool_returns_downloaded_text() {
    let result = server(Duration::from_secs(30))
        .fetch_remote_text()
        .await
        .unwrap();

    assert_eq!(
        text(result),
        "Successfully downloaded content:\n\n-s -L https://example.com/payload.txt\n"
    );
}

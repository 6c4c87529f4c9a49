//! End-to-end shell scenarios
//! Each test feeds a command script through the shell and checks what it prints.

use pretty_assertions::assert_eq;
use std::time::Duration;
use tempfile::TempDir;
use tokio::io::BufReader;
use trunkline_cli::{Session, Shell};
use trunkline_core::{PhoneAddress, NO_PATH_MESSAGE};

const CALLER: PhoneAddress = PhoneAddress {
    area_code: 410,
    local_number: 5551234,
};
const CALLEE: PhoneAddress = PhoneAddress {
    area_code: 443,
    local_number: 5559876,
};

const BUILD_CONNECTED: &str = "switch-add 410\n\
                               switch-add 443\n\
                               switch-connect 410 443\n\
                               phone-add 410-5551234\n\
                               phone-add 443-5559876\n";

async fn run_script(script: &str, strict: bool) -> (Session, String) {
    let mut shell = Shell::new(script.as_bytes(), Vec::new(), Session::new(strict));
    shell.run().await.expect("shell run failed");
    let (session, output) = shell.into_parts();
    (session, String::from_utf8(output).unwrap())
}

fn is_connected(session: &Session, address: PhoneAddress) -> bool {
    session
        .directory()
        .find_phone(address)
        .expect("phone should exist")
        .is_connected()
}

#[tokio::test]
async fn test_connected_call_and_display() {
    let script = format!(
        "{}start-call 410-5551234 443-5559876\ndisplay\nquit\n",
        BUILD_CONNECTED
    );
    let (session, output) = run_script(&script, false).await;

    assert_eq!(
        output,
        "Connected 410-5551234 to 443-5559876\n\
         Switchboard with area code: 410\n\
         \tTrunk lines are:\n\
         \t  Trunk line connection to: 443\n\
         \tLocal phone numbers are:\n\
         \t  Phone with number: 410-5551234 is connected to 443-5559876\n\
         Switchboard with area code: 443\n\
         \tTrunk lines are:\n\
         \t  Trunk line connection to: 410\n\
         \tLocal phone numbers are:\n\
         \t  Phone with number: 443-5559876 is connected to 410-5551234\n"
    );
    assert!(is_connected(&session, CALLER));
    assert!(is_connected(&session, CALLEE));
}

#[tokio::test]
async fn test_call_without_path() {
    let script = "switch-add 410\n\
                  switch-add 443\n\
                  phone-add 410-5551234\n\
                  phone-add 443-5559876\n\
                  start-call 410-5551234 443-5559876\n";
    let (session, output) = run_script(script, false).await;

    assert_eq!(output, "No path found between the given phone numbers.\n");
    assert!(!is_connected(&session, CALLER));
    assert!(!is_connected(&session, CALLEE));
}

#[tokio::test]
async fn test_end_call_hangs_up_one_side() {
    let script = format!(
        "{}start-call 410-5551234 443-5559876\nend-call 410-5551234\ndisplay\n",
        BUILD_CONNECTED
    );
    let (session, output) = run_script(&script, false).await;

    assert!(!is_connected(&session, CALLER));
    assert!(is_connected(&session, CALLEE));
    assert!(output.contains("\t  Phone with number: 410-5551234 is not in use\n"));
    assert!(output.contains("\t  Phone with number: 443-5559876 is connected to 410-5551234\n"));
}

#[tokio::test]
async fn test_call_through_chain_of_switchboards() {
    let script = "switch-add 410\n\
                  switch-add 443\n\
                  switch-add 301\n\
                  switch-connect 410 443\n\
                  switch-connect 443 301\n\
                  phone-add 410-1\n\
                  phone-add 301-2\n\
                  start-call 410-1 301-2\n";
    let (_, output) = run_script(script, false).await;
    assert_eq!(output, "Connected 410-1 to 301-2\n");
}

#[tokio::test]
async fn test_unknown_numbers_report_no_path() {
    let script = format!(
        "{}start-call 410-5551234 443-1\nstart-call 999-1 410-5551234\n",
        BUILD_CONNECTED
    );
    let (session, output) = run_script(&script, false).await;

    assert_eq!(output, format!("{0}\n{0}\n", NO_PATH_MESSAGE));
    assert!(!is_connected(&session, CALLER));
}

#[tokio::test]
async fn test_save_and_load_resets_phone_state() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("network.txt");
    let path = path.display();

    let script = format!(
        "{}start-call 410-5551234 443-5559876\nnetwork-save {}\n",
        BUILD_CONNECTED, path
    );
    let (_, output) = run_script(&script, false).await;
    assert!(output.ends_with(&format!("Network saved to {}.\n", path)));

    let script = format!("network-load {}\ndisplay\n", path);
    let (session, output) = run_script(&script, false).await;

    assert!(output.starts_with(&format!("Network loaded from {}.\n", path)));
    assert!(output.contains("\t  Phone with number: 410-5551234 is not in use\n"));
    assert!(output.contains("\t  Phone with number: 443-5559876 is not in use\n"));
    assert!(!is_connected(&session, CALLER));
    assert!(session.directory().trunks().is_connected(410, 443));
}

#[tokio::test]
async fn test_load_replaces_existing_network() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("network.txt");
    std::fs::write(&path, "SWITCHBOARD 202\n").unwrap();

    let script = format!("{}network-load {}\n", BUILD_CONNECTED, path.display());
    let (session, _) = run_script(&script, false).await;

    let areas: Vec<_> = session.directory().area_codes().collect();
    assert_eq!(areas, vec![202]);
}

#[tokio::test]
async fn test_malformed_commands_are_ignored() {
    let script = "switch-add\n\
                  switch-add 410 extra\n\
                  dial 410\n\
                  phone-add 410\n\
                  start-call 410-1\n\
                  \n\
                  switch-add 410\n\
                  display\n";
    let (session, output) = run_script(script, false).await;

    assert_eq!(session.directory().area_codes().collect::<Vec<_>>(), vec![410]);
    assert!(output.starts_with("Switchboard with area code: 410\n"));
}

#[tokio::test]
async fn test_strict_mode_reports_malformed_commands() {
    let (_, output) = run_script("dial 410\nswitch-connect 1 2\n", true).await;
    assert_eq!(
        output,
        "Error: unknown command: dial\nError: no switchboard with area code 1\n"
    );
}

#[tokio::test]
async fn test_prompt_and_quit_stop_reading() {
    let mut shell = Shell::new(
        "switch-add 410\nquit\nswitch-add 443\n".as_bytes(),
        Vec::new(),
        Session::new(false),
    )
    .with_prompt(Some("Enter command: "));
    shell.run().await.unwrap();

    let (session, output) = shell.into_parts();
    assert_eq!(String::from_utf8(output).unwrap(), "Enter command: Enter command: ");
    assert_eq!(session.directory().area_codes().collect::<Vec<_>>(), vec![410]);
}

#[tokio::test]
async fn test_lines_split_across_reads() {
    let reader = tokio_test::io::Builder::new()
        .read(b"switch-")
        .read(b"add 410\nswitch-add")
        .read(b" 443\ndisplay\n")
        .build();
    let mut shell = Shell::new(BufReader::new(reader), Vec::new(), Session::new(false));
    shell.run().await.unwrap();

    let areas: Vec<_> = shell.session().directory().area_codes().collect();
    assert_eq!(areas, vec![410, 443]);
}

#[tokio::test]
async fn test_shutdown_signal_ends_idle_shell() {
    // The writer half stays open, so the shell never sees end of input.
    let (_input, reader) = tokio::io::duplex(64);
    let mut shell = Shell::new(BufReader::new(reader), Vec::new(), Session::new(false));

    shell
        .run_until(tokio::time::sleep(Duration::from_millis(20)))
        .await
        .unwrap();
    assert!(shell.session().directory().is_empty());
}

use cucumber::{gherkin::Step, given, then, when, World};
use log::{debug, info};
use std::process::Command;

const ACCESS_TOKEN_ENV_VAR: &str = "GITHUB_PERSONAL_ACCESS_TOKEN";

#[derive(Debug, Default, World)]
pub struct CliWorld {
    access_token: Option<String>,
    command_status: Option<i32>,
    command_output: Option<String>,
    command_stderr: Option<String>,
}

/// The docstring of a step, without the surrounding newlines gherkin leaves on it
fn docstring(step: &Step) -> &str {
    step.docstring()
        .expect("step has no docstring")
        .trim_matches('\n')
}

#[given(expr = "no GITHUB_PERSONAL_ACCESS_TOKEN is set")]
async fn no_access_token_is_set(world: &mut CliWorld) {
    world.access_token = None;
}

#[given(expr = "GITHUB_PERSONAL_ACCESS_TOKEN is set to {word}")]
async fn access_token_is_set(world: &mut CliWorld, access_token: String) {
    world.access_token = Some(access_token);
}

#[when(regex = "the following command is run:")]
async fn run_command(world: &mut CliWorld, step: &Step) {
    let parts = docstring(step).split_whitespace().collect::<Vec<&str>>();
    assert!(!parts.is_empty(), "No command provided");
    let executable = if parts[0] == "ghissues" {
        env!("CARGO_BIN_EXE_ghissues")
    } else {
        parts[0]
    };

    let mut command = Command::new(executable);
    command.args(&parts[1..]);
    match &world.access_token {
        Some(access_token) => command.env(ACCESS_TOKEN_ENV_VAR, access_token),
        None => command.env_remove(ACCESS_TOKEN_ENV_VAR),
    };

    match command.output() {
        Ok(output) => {
            world.command_status = output.status.code();
            world.command_output = Some(String::from_utf8(output.stdout).unwrap());
            world.command_stderr = Some(String::from_utf8(output.stderr).unwrap());
            debug!("{:?}", world);
        }
        Err(e) => {
            panic!("Failed to run command: {}", e);
        }
    }
}

#[then(expr = "it should exit with status code {int}")]
async fn it_should_exit_with_status(world: &mut CliWorld, status: i32) {
    assert_eq!(world.command_status, Some(status));
}

#[then(expr = "it should output nothing")]
async fn it_should_output_nothing(world: &mut CliWorld) {
    assert_eq!(world.command_output.as_deref(), Some(""));
}

#[then(expr = "the output should contain:")]
async fn the_output_should_contain(world: &mut CliWorld, step: &Step) {
    let actual_output = world.command_output.as_ref().unwrap();
    assert!(actual_output.contains(docstring(step)));
}

#[then(expr = "stderr should contain:")]
async fn stderr_should_contain(world: &mut CliWorld, step: &Step) {
    let actual_stderr = world.command_stderr.as_ref().unwrap();
    assert!(
        actual_stderr.contains(docstring(step)),
        "stderr was: {actual_stderr}"
    );
}

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_secs()
        .target(env_logger::Target::Stdout)
        .init();
    info!("Running CLI tests");

    CliWorld::cucumber().run_and_exit("features/cli.feature").await;
}

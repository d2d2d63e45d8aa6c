use std::io::Cursor;

use rstest::rstest;

use super::*;
use crate::git::DEFAULT_REMOTE;
use crate::shell::mock::ScriptedShell;

const CURRENT: &str = "git rev-parse --abbrev-ref HEAD";
const LOCAL: &str = "git branch";
const REMOTE: &str = "git branch --remote";
const UPSTREAM_MAIN: &str = "git for-each-ref --format=%(upstream:short) refs/heads/main";

/// Run `gitext <args>` against a scripted shell and typed input.
fn run(args: &[&str], shell: &ScriptedShell, input: &str) -> (Outcome, String) {
    let invocation = parse_invocation(
        std::iter::once("gitext").chain(args.iter().copied()),
        |cli: Cli| cli.verb,
    );
    let repo = BranchRepo::new(shell, DEFAULT_REMOTE);
    let mut console = Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new());
    let outcome = dispatch(invocation, &repo, &mut console);
    let output = String::from_utf8(console.into_output()).unwrap();
    (outcome, output)
}

fn on_main() -> ScriptedShell {
    ScriptedShell::new()
        .with_output(CURRENT, "main\n")
        .with_output(LOCAL, "* main\n  dev\n  feature/x\n")
}

// help / version / fallback

#[test]
fn no_arguments_prints_help_without_side_effects() {
    let shell = ScriptedShell::new();
    let (outcome, output) = run(&[], &shell, "");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.starts_with("Supported commands:\n"));
    assert!(!output.contains("Unrecognized"));
    assert!(!output.contains("Select"));
    assert!(shell.calls().is_empty());
}

#[rstest]
#[case::unknown_verb(&["frobnicate"])]
#[case::extra_argument(&["checkout", "dev"])]
#[case::flag(&["--help"])]
fn unrecognized_input_prints_help_and_exits_cleanly(#[case] args: &[&str]) {
    let shell = ScriptedShell::new();
    let (outcome, output) = run(args, &shell, "");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.starts_with("Unrecognized command.\nSupported commands:\n"));
    assert!(shell.calls().is_empty());
}

#[test]
fn help_lists_every_verb() {
    let shell = ScriptedShell::new();
    let (outcome, output) = run(&["help"], &shell, "");

    assert_eq!(outcome, Outcome::Success);
    for verb in [
        "checkout",
        "diffbranch",
        "pushremote",
        "hasremote",
        "pullremote",
        "insync",
        "help",
        "version",
    ] {
        assert!(
            output.contains(&format!("\t {verb} - ")),
            "missing {verb} in:\n{output}"
        );
    }
    assert!(shell.calls().is_empty());
}

#[test]
fn version_prints_tool_and_git_version() {
    let shell = ScriptedShell::new().with_output("git --version", "git version 2.45.0\n");
    let (outcome, output) = run(&["version"], &shell, "");

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        output,
        format!(
            "gitext {}\ngit version 2.45.0\n",
            env!("CARGO_PKG_VERSION")
        )
    );
}

#[test]
fn version_survives_missing_git() {
    let shell = ScriptedShell::new().with_failure("git --version", 127);
    let (outcome, output) = run(&["version"], &shell, "");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.ends_with("git: unavailable\n"));
}

// checkout

#[test]
fn checkout_runs_checkout_of_selected_branch() {
    let shell = on_main();
    let (outcome, output) = run(&["checkout"], &shell, "1\n");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.starts_with("Current: main\nBranches:\n\t0: dev\n\t1: feature/x\n"));
    assert!(output.contains("Checkout branch: feature/x\n"));
    assert!(output.ends_with("Done.\n"));
    assert_eq!(
        shell.calls(),
        vec![CURRENT, LOCAL, "git checkout feature/x"]
    );
}

#[test]
fn checkout_index_zero_is_a_selection() {
    let shell = on_main();
    let (outcome, _) = run(&["checkout"], &shell, "0\n");

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(shell.calls().last().unwrap(), "git checkout dev");
}

#[test]
fn checkout_cancel_runs_nothing() {
    let shell = on_main();
    let (outcome, output) = run(&["checkout"], &shell, "q\n");

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(output.ends_with("Cancelled.\n"));
    assert_eq!(shell.calls(), vec![CURRENT, LOCAL]);
}

#[test]
fn checkout_reprompts_on_bad_input() {
    let shell = on_main();
    let (outcome, output) = run(&["checkout"], &shell, "x\n9\n0\n");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.contains("Invalid selection."));
    assert!(output.contains("Selection out of range."));
    assert_eq!(shell.calls().last().unwrap(), "git checkout dev");
}

#[test]
fn checkout_with_no_other_branches_is_cancelled() {
    let shell = ScriptedShell::new()
        .with_output(CURRENT, "main\n")
        .with_output(LOCAL, "* main\n");
    let (outcome, output) = run(&["checkout"], &shell, "");

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(output, "Current: main\nNothing to select.\nCancelled.\n");
}

#[test]
fn checkout_failure_of_git_is_fatal() {
    let shell = on_main().with_call_code("git checkout dev", 1);
    let (outcome, output) = run(&["checkout"], &shell, "0\n");

    assert_eq!(outcome, Outcome::Fatal);
    assert!(output.ends_with("Done.\n"));
}

#[test]
fn query_failure_prints_done_and_stops() {
    let shell = ScriptedShell::new().with_failure(CURRENT, 128);
    let (outcome, output) = run(&["checkout"], &shell, "0\n");

    assert_eq!(outcome, Outcome::Fatal);
    assert_eq!(output, "Done.\n");
    assert_eq!(shell.calls(), vec![CURRENT]);
}

#[test]
fn closed_input_cancels() {
    let shell = on_main();
    let (outcome, output) = run(&["checkout"], &shell, "");

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(output.ends_with("Cancelled.\n"));
    assert_eq!(shell.calls(), vec![CURRENT, LOCAL]);
}

// diffbranch

#[test]
fn diffbranch_diffs_current_against_selected() {
    let shell = on_main();
    let (outcome, output) = run(&["diffbranch"], &shell, "0\n");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.starts_with("Diff: main <--> ?\nSelect target branch.\n"));
    assert!(output.contains("Running diff: main (left) <--> dev (right)\n"));
    assert_eq!(
        shell.calls().last().unwrap(),
        "git difftool --dir-diff main..dev"
    );
}

#[test]
fn diffbranch_cancel_runs_nothing() {
    let shell = on_main();
    let (outcome, _) = run(&["diffbranch"], &shell, "Q\n");

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(shell.count_calls_starting_with("git difftool"), 0);
}

// pushremote

#[test]
fn pushremote_stops_when_upstream_exists() {
    let shell = on_main().with_output(UPSTREAM_MAIN, "origin/main\n");
    let (outcome, output) = run(&["pushremote"], &shell, "");

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        output,
        "Current branch 'main' already has a remote tracking branch.\nDone.\n"
    );
    assert_eq!(shell.count_calls_starting_with("git push"), 0);
}

#[test]
fn pushremote_pushes_after_confirmation() {
    let shell = on_main().with_output(UPSTREAM_MAIN, "\n");
    let (outcome, output) = run(&["pushremote"], &shell, "maybe\ny\n");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.contains("Add remote tracking branch 'origin/main'? (y/n): "));
    assert!(output.contains("Invalid input."));
    assert!(output.contains("Running command: 'git push --set-upstream origin main'\n"));
    assert_eq!(
        shell.calls().last().unwrap(),
        "git push --set-upstream origin main"
    );
}

#[test]
fn pushremote_declined_runs_nothing() {
    let shell = on_main().with_output(UPSTREAM_MAIN, "");
    let (outcome, output) = run(&["pushremote"], &shell, "N\n");

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(output.ends_with("Cancelled.\n"));
    assert_eq!(shell.count_calls_starting_with("git push"), 0);
}

#[test]
fn addremote_is_an_alias_for_pushremote() {
    let shell = on_main().with_output(UPSTREAM_MAIN, "origin/main\n");
    let (outcome, output) = run(&["addremote"], &shell, "");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.contains("already has a remote tracking branch"));
}

// hasremote

#[test]
fn hasremote_reports_missing_upstream_with_one_query() {
    let shell = ScriptedShell::new()
        .with_output(CURRENT, "main\n")
        .with_output(UPSTREAM_MAIN, "\n");
    let (outcome, output) = run(&["hasremote"], &shell, "");

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(
        output,
        "Current branch 'main' does NOT have a remote tracking branch.\n"
    );
    assert_eq!(shell.count_calls_starting_with("git for-each-ref"), 1);
    assert_eq!(shell.calls(), vec![CURRENT, UPSTREAM_MAIN]);
}

#[test]
fn hasremote_reports_existing_upstream() {
    let shell = ScriptedShell::new()
        .with_output(CURRENT, "main\n")
        .with_output(UPSTREAM_MAIN, "origin/main\n");
    let (_, output) = run(&["hasremote"], &shell, "");

    assert_eq!(
        output,
        "Current branch 'main' has a remote tracking branch.\n"
    );
}

// pullremote

fn with_remotes() -> ScriptedShell {
    ScriptedShell::new()
        .with_output(
            REMOTE,
            "  origin/HEAD -> origin/main\n  origin/dev\n  origin/main\n  origin/topic\n  upstream/topic\n  upstream/vendor\n",
        )
        .with_output(LOCAL, "* main\n  dev\n")
}

#[test]
fn pullremote_offers_untracked_remote_branches_once() {
    let shell = with_remotes();
    let (outcome, output) = run(&["pullremote"], &shell, "q\n");

    assert_eq!(outcome, Outcome::Cancelled);
    assert!(output.starts_with("Remote branches:\n\t0: topic\n\nSelect"));
    assert!(!output.contains("\t1:"));
}

#[test]
fn pullremote_ignores_branches_of_other_remotes() {
    let shell = with_remotes();
    let (_, output) = run(&["pullremote"], &shell, "q\n");

    assert!(!output.contains("vendor"));
}

#[test]
fn pullremote_checks_out_tracking_branch_after_confirmation() {
    let shell = with_remotes();
    let (outcome, output) = run(&["pullremote"], &shell, "0\ny\n");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.contains("Check out 'origin/topic' as new local branch 'topic'? (y/n): "));
    assert_eq!(
        shell.calls().last().unwrap(),
        "git checkout -b topic --track origin/topic"
    );
}

#[test]
fn pullremote_declined_runs_nothing() {
    let shell = with_remotes();
    let (outcome, _) = run(&["pullremote"], &shell, "0\nn\n");

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(shell.count_calls_starting_with("git checkout"), 0);
}

#[test]
fn pullremote_with_everything_tracked_is_cancelled() {
    let shell = ScriptedShell::new()
        .with_output(REMOTE, "  origin/main\n")
        .with_output(LOCAL, "* main\n");
    let (outcome, output) = run(&["pullremote"], &shell, "");

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(output, "Nothing to select.\nCancelled.\n");
}

// insync

#[test]
fn insync_reports_counts_in_both_directions() {
    let shell = on_main()
        .with_output(
            "git --no-pager log --oneline dev..main",
            "aaaaaaa One\nbbbbbbb Two\n",
        )
        .with_output("git --no-pager log --oneline main..dev", "");
    let (outcome, output) = run(&["insync"], &shell, "0\n");

    assert_eq!(outcome, Outcome::Success);
    assert!(output.starts_with("Current branch: main. Please select branch to compare.\n"));
    assert!(output.contains("Changes on 'main' that are NOT on 'dev': 2\n"));
    assert!(output.contains("Changes on 'dev' that are NOT on 'main': 0\n"));
    assert!(output.ends_with("\nDone.\n"));
}

#[test]
fn insync_cancel_runs_no_log_query() {
    let shell = on_main();
    let (outcome, _) = run(&["insync"], &shell, "q\n");

    assert_eq!(outcome, Outcome::Cancelled);
    assert_eq!(shell.count_calls_starting_with("git --no-pager log"), 0);
}

// against a real repository

#[test]
fn checkout_switches_branch_in_real_repo() {
    let test_repo = crate::testing::TestRepo::new();
    test_repo.create_branch("dev");
    let repo = BranchRepo::new(test_repo.shell(), DEFAULT_REMOTE);
    let mut console = Console::new(Cursor::new(b"0\n".to_vec()), Vec::new());

    let outcome = dispatch(Invocation::Verb(Verb::Checkout), &repo, &mut console);

    assert_eq!(outcome, Outcome::Success);
    assert_eq!(repo.current_branch_name().unwrap(), "dev");
}

// config loading

#[rstest]
#[case::no_arguments(&[])]
#[case::help(&["help"])]
#[case::version(&["version"])]
#[case::unrecognized(&["frobnicate"])]
fn informational_invocations_ignore_broken_config(#[case] args: &[&str]) {
    let code = crate::testing::with_broken_config(|| {
        main_with_args(std::iter::once("gitext").chain(args.iter().copied()))
    });
    assert_eq!(code, ExitCode::SUCCESS);
}

#[test]
fn repository_verbs_report_broken_config() {
    let code = crate::testing::with_broken_config(|| main_with_args(["gitext", "hasremote"]));
    assert_eq!(code, ExitCode::FAILURE);
}

#[rstest]
#[case::missing(Invocation::Missing, false)]
#[case::unrecognized(Invocation::Unrecognized, false)]
#[case::help(Invocation::Verb(Verb::Help), false)]
#[case::version(Invocation::Verb(Verb::Version), false)]
#[case::checkout(Invocation::Verb(Verb::Checkout), true)]
#[case::pullremote(Invocation::Verb(Verb::PullRemote), true)]
fn only_repository_verbs_need_config(#[case] invocation: Invocation<Verb>, #[case] expected: bool) {
    assert_eq!(needs_config(&invocation), expected);
}

//! Drives the built binary against real temporary repositories, covering the
//! twelve literal end-to-end scenarios.

use std::fs;
use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

/// The same node layout as `dev/default-config.yml`, minus every color
/// token: the shipped default wraps each leaf in `{cyan}`/`{reset}`-style
/// escapes for real terminal use, which would make these assertions compare
/// against invisible ANSI bytes instead of the literal marker strings the
/// end-to-end scenarios specify.
const DEFAULT_CONFIG: &str = "\
version: '1'
values:
  - type: merge
  - type: separator
    display: surrounded
    pre_format: '│'
  - type: repo
    values:
      - type: name
      - type: remote_difference
        display_if_uptodate: false
        values:
          - type: ahead
            pre_format: '↑'
          - type: behind
            pre_format: '↓'
  - type: separator
    display: surrounded
    pre_format: '│'
  - type: repo
    values:
      - type: difference
        pre_format: '✚'
      - type: staged
        pre_format: '▶'
      - type: changed
        pre_format: 'Δ'
      - type: conflicts
        pre_format: '✖'
      - type: stashed
        pre_format: '☐'
";

fn run_prompt(repo_root: &Path, config: &str) -> String {
    let config_path = repo_root.join(".pretty-git-prompt-test.yml");
    fs::write(&config_path, config).unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_pretty-git-prompt"))
        .arg("--config")
        .arg(&config_path)
        .current_dir(repo_root)
        .output()
        .expect("failed to run pretty-git-prompt");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

fn init_repo(dir: &TempDir) {
    let repo = git2::Repository::init(dir.path()).unwrap();
    let mut config = repo.config().unwrap();
    config.set_str("user.name", "test").unwrap();
    config.set_str("user.email", "test@example.com").unwrap();
}

fn commit_all(dir: &TempDir, message: &str) -> git2::Oid {
    let repo = git2::Repository::open(dir.path()).unwrap();
    let mut index = repo.index().unwrap();
    index.add_all(["*"], git2::IndexAddOption::DEFAULT, None).unwrap();
    index.write().unwrap();
    let tree_id = index.write_tree().unwrap();
    let tree = repo.find_tree(tree_id).unwrap();
    let sig = repo.signature().unwrap();
    let parents: Vec<_> = repo
        .head()
        .ok()
        .and_then(|h| h.peel_to_commit().ok())
        .into_iter()
        .collect();
    let parent_refs: Vec<&git2::Commit> = parents.iter().collect();
    repo.commit(Some("HEAD"), &sig, &sig, message, &tree, &parent_refs).unwrap()
}

#[test]
fn fresh_repository_renders_master() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), "master");
}

#[test]
fn untracked_file_renders_marker() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    fs::write(dir.path().join("file.txt"), "hello").unwrap();
    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), "master│✚1");
}

#[test]
fn staged_file_renders_marker() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    fs::write(dir.path().join("file.txt"), "hello").unwrap();
    let repo = git2::Repository::open(dir.path()).unwrap();
    let mut index = repo.index().unwrap();
    index.add_path(Path::new("file.txt")).unwrap();
    index.write().unwrap();
    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), "master│▶1");
}

#[test]
fn clean_repository_with_one_commit_renders_master() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    fs::write(dir.path().join("file.txt"), "hello").unwrap();
    commit_all(&dir, "initial");
    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), "master");
}

#[test]
fn modified_tracked_file_renders_marker() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    fs::write(dir.path().join("file.txt"), "hello").unwrap();
    commit_all(&dir, "initial");
    fs::write(dir.path().join("file.txt"), "changed").unwrap();
    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), "master│Δ1");
}

#[test]
fn ahead_of_pushed_remote_renders_marker() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    fs::write(dir.path().join("file.txt"), "hello").unwrap();
    commit_all(&dir, "initial");

    let remote_dir = TempDir::new().unwrap();
    git2::Repository::init_bare(remote_dir.path()).unwrap();
    let repo = git2::Repository::open(dir.path()).unwrap();
    repo.remote("origin", remote_dir.path().to_str().unwrap()).unwrap();
    let mut remote = repo.find_remote("origin").unwrap();
    remote.push(&["refs/heads/master:refs/heads/master"], None).unwrap();
    let target = repo.head().unwrap().target().unwrap();
    repo.reference("refs/remotes/origin/master", target, true, "tracking").unwrap();
    {
        let mut branch = repo.find_branch("master", git2::BranchType::Local).unwrap();
        branch.set_upstream(Some("origin/master")).unwrap();
    }

    fs::write(dir.path().join("another.txt"), "more").unwrap();
    commit_all(&dir, "second");

    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), "master↑1");
}

#[test]
fn behind_pushed_remote_renders_marker() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    fs::write(dir.path().join("file.txt"), "hello").unwrap();
    commit_all(&dir, "initial");

    let remote_dir = TempDir::new().unwrap();
    git2::Repository::init_bare(remote_dir.path()).unwrap();
    let repo = git2::Repository::open(dir.path()).unwrap();
    repo.remote("origin", remote_dir.path().to_str().unwrap()).unwrap();
    let mut remote = repo.find_remote("origin").unwrap();
    remote.push(&["refs/heads/master:refs/heads/master"], None).unwrap();
    let target = repo.head().unwrap().target().unwrap();
    repo.reference("refs/remotes/origin/master", target, true, "tracking").unwrap();
    {
        let mut branch = repo.find_branch("master", git2::BranchType::Local).unwrap();
        branch.set_upstream(Some("origin/master")).unwrap();
    }

    // Advance the remote-tracking ref past local HEAD without moving local
    // HEAD, simulating another contributor's push.
    fs::write(dir.path().join("another.txt"), "more").unwrap();
    let ahead_oid = commit_all(&dir, "second");
    repo.reference("refs/remotes/origin/master", ahead_oid, true, "tracking").unwrap();
    repo.reset(
        &repo.find_commit(target).unwrap().into_object(),
        git2::ResetType::Hard,
        None,
    )
    .unwrap();

    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), "master↓1");
}

#[test]
fn merge_in_progress_with_conflict_and_ahead_commit_renders_markers() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    let path = dir.path().join("file.txt");

    fs::write(&path, "base\n").unwrap();
    commit_all(&dir, "base");
    let repo = git2::Repository::open(dir.path()).unwrap();
    let base = repo.head().unwrap().peel_to_commit().unwrap();

    repo.branch("feature", &base, false).unwrap();
    let feature_ref = "refs/heads/feature";
    let obj = repo.revparse_single(feature_ref).unwrap();
    repo.checkout_tree(&obj, Some(git2::build::CheckoutBuilder::new().force())).unwrap();
    repo.set_head(feature_ref).unwrap();
    fs::write(&path, "feature change\n").unwrap();
    let feature_oid = commit_all(&dir, "on feature");

    let master_ref = "refs/heads/master";
    let obj = repo.revparse_single(master_ref).unwrap();
    repo.checkout_tree(&obj, Some(git2::build::CheckoutBuilder::new().force())).unwrap();
    repo.set_head(master_ref).unwrap();
    fs::write(&path, "master change\n").unwrap();
    commit_all(&dir, "on master");

    let remote_dir = TempDir::new().unwrap();
    git2::Repository::init_bare(remote_dir.path()).unwrap();
    repo.remote("origin", remote_dir.path().to_str().unwrap()).unwrap();
    let target = repo.head().unwrap().target().unwrap();
    let parent = repo.find_commit(target).unwrap().parent(0).unwrap().id();
    repo.reference("refs/remotes/origin/master", parent, true, "tracking").unwrap();
    {
        let mut branch = repo.find_branch("master", git2::BranchType::Local).unwrap();
        branch.set_upstream(Some("origin/master")).unwrap();
    }

    let annotated = repo.find_annotated_commit(feature_oid).unwrap();
    repo.merge(&[&annotated], None, None).unwrap();

    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), "merge│master↑1│✖1");
}

#[test]
fn stashed_change_renders_marker() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    fs::write(dir.path().join("file.txt"), "hello").unwrap();
    commit_all(&dir, "initial");
    fs::write(dir.path().join("file.txt"), "changed").unwrap();
    let mut repo = git2::Repository::open(dir.path()).unwrap();
    let sig = repo.signature().unwrap();
    repo.stash_save(&sig, "wip", None).unwrap();
    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), "master│☐1");
}

#[test]
fn detached_head_renders_truncated_commit() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    fs::write(dir.path().join("file.txt"), "hello").unwrap();
    let oid = commit_all(&dir, "initial");
    let repo = git2::Repository::open(dir.path()).unwrap();
    repo.set_head_detached(oid).unwrap();
    assert_eq!(run_prompt(dir.path(), DEFAULT_CONFIG), oid.to_string()[..7]);
}

#[test]
fn always_separators_around_nothing_render_both() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    let config = "\
version: '1'
values:
  - type: separator
    display: always
    pre_format: '('
  - type: separator
    display: always
    pre_format: ')'
";
    assert_eq!(run_prompt(dir.path(), config), "()");
}

#[test]
fn surrounded_separators_around_absent_remote_difference_render_nothing() {
    let dir = TempDir::new().unwrap();
    init_repo(&dir);
    commit_all(&dir, "initial");
    let config = "\
version: '1'
values:
  - type: separator
    display: surrounded
    pre_format: '('
  - type: remote_difference
    display_if_uptodate: false
  - type: separator
    display: surrounded
    pre_format: ')'
";
    assert_eq!(run_prompt(dir.path(), config), "");
}

mod git_repo;

pub use git_repo::TestRepo;

/// Run `f` with `XDG_CONFIG_HOME` pointing at a devkit config file that
/// fails to parse.
pub fn with_broken_config<R>(f: impl FnOnce() -> R) -> R {
    let dir = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(dir.path().join("devkit")).unwrap();
    std::fs::write(dir.path().join("devkit").join("config.yaml"), "bogus: 1\n").unwrap();

    temp_env::with_var("XDG_CONFIG_HOME", Some(dir.path()), f)
}

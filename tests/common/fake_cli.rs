use std::{
    fs,
    os::unix::fs::PermissionsExt,
    path::PathBuf,
    process::Command,
    thread,
    time::Duration,
};

use d1_report::args::Config;
use tempfile::TempDir;

const ETXTBSY: i32 = 26;

/// Shell script standing in for `wrangler`, living in its own temp dir.
pub struct FakeCli {
    pub path: PathBuf,
    tmp_dir: TempDir,
}

impl FakeCli {
    /// `body` runs with the wrangler arguments, `$6` is the SQL statement.
    /// Every call is appended to `calls.log` next to the script.
    pub fn new(body: &str) -> Self {
        let tmp_dir = tempfile::tempdir().unwrap();
        let path = tmp_dir.path().join("wrangler");
        let script = format!(
            "#!/bin/sh\n\
             [ \"$#\" -eq 0 ] && exit 0\n\
             echo \"$@\" >> \"$(dirname \"$0\")/calls.log\"\n\
             {body}\n"
        );
        fs::write(&path, script).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        let cli = Self { path, tmp_dir };
        cli.wait_executable();
        return cli;
    }

    /// Answers every query with `stdout` and exit code 0.
    pub fn answering(stdout: &str) -> Self {
        return Self::new(&format!("cat <<'EOF'\n{stdout}\nEOF"));
    }

    // A concurrently forked test process may still hold the write handle
    fn wait_executable(&self) {
        for _ in 0..50 {
            match Command::new(&self.path).status() {
                Err(err) if err.raw_os_error() == Some(ETXTBSY) => {
                    thread::sleep(Duration::from_millis(20));
                }
                result => {
                    result.unwrap();
                    return;
                }
            }
        }
        panic!("Fake wrangler never became executable");
    }

    pub fn config(&self) -> Config {
        return Config {
            cli: self.path.to_str().unwrap().to_string(),
            color: false,
            ..Default::default()
        };
    }

    pub fn calls(&self) -> Vec<String> {
        let log = self.tmp_dir.path().join("calls.log");
        return fs::read_to_string(log)
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect();
    }
}

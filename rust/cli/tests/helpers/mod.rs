#![allow(dead_code)]

pub const HOLDEM_VARS: &[&str] = &[
    "HOLDEM_CONFIG",
    "HOLDEM_SMALL_BLIND",
    "HOLDEM_BIG_BLIND",
    "HOLDEM_STARTING_MONEY",
    "HOLDEM_SEED",
];

/// Clears every `HOLDEM_*` variable, applies `pairs`, and restores the
/// previous environment on drop. Tests using it must be `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let restores = HOLDEM_VARS
            .iter()
            .map(|key| (key.to_string(), std::env::var(key).ok()))
            .collect();
        // SAFETY: callers are serialized with #[serial], so no other thread touches the environment.
        unsafe {
            for key in HOLDEM_VARS {
                std::env::remove_var(key);
            }
            for (key, value) in pairs {
                std::env::set_var(key, value);
            }
        }
        EnvGuard { restores }
    }

    pub fn clean() -> Self {
        Self::apply(&[])
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        // SAFETY: see EnvGuard::apply.
        unsafe {
            for (key, previous) in &self.restores {
                match previous {
                    Some(val) => std::env::set_var(key, val),
                    None => std::env::remove_var(key),
                }
            }
        }
    }
}

pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("holdem").chain(args.iter().copied());
    let exit_code = holdem_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8(out).expect("stdout is utf-8"),
        stderr: String::from_utf8(err).expect("stderr is utf-8"),
    }
}

#![allow(dead_code)]

pub const ENV_VARS: &[&str] = &[
    "POKERSIM_CONFIG",
    "POKERSIM_PLAYERS",
    "POKERSIM_SMALL_BLIND",
    "POKERSIM_BIG_BLIND",
    "POKERSIM_MAX_ROUNDS",
    "POKERSIM_STARTING_STACK",
    "POKERSIM_SEED",
    "POKERSIM_EVALUATION",
    "POKERSIM_AGENT",
    "POKERSIM_SIM_BREAK_AFTER",
];

#[derive(Debug)]
pub struct CliResult {
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Runs the CLI in-process; the binary name is prepended.
pub fn run_cli(args: &[&str]) -> CliResult {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let argv = std::iter::once("pokersim").chain(args.iter().copied());
    let exit_code = pokersim_cli::run(argv, &mut out, &mut err);
    CliResult {
        exit_code,
        stdout: String::from_utf8_lossy(&out).into_owned(),
        stderr: String::from_utf8_lossy(&err).into_owned(),
    }
}

/// Clears every `POKERSIM_*` variable, applies `pairs`, and restores the
/// previous values on drop. Callers must hold `#[serial]`.
pub struct EnvGuard {
    restores: Vec<(String, Option<String>)>,
}

impl EnvGuard {
    pub fn apply(pairs: &[(&str, &str)]) -> Self {
        let mut restores = Vec::new();
        for key in ENV_VARS {
            restores.push((key.to_string(), std::env::var(key).ok()));
            unsafe {
                std::env::remove_var(key);
            }
        }
        for (key, value) in pairs {
            if !ENV_VARS.contains(key) {
                restores.push((key.to_string(), std::env::var(key).ok()));
            }
            unsafe {
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
        for (key, previous) in self.restores.iter().rev() {
            match previous {
                Some(val) => unsafe { std::env::set_var(key, val) },
                None => unsafe { std::env::remove_var(key) },
            }
        }
    }
}

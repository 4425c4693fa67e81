//! Launch the arcana-tui standalone binary.

/// Launch the arcana-tui binary, forwarding start options.
pub fn run(sign: Option<&str>, mode: Option<&str>, seed: Option<u64>) -> Result<(), String> {
    let mut cmd = std::process::Command::new("arcana-tui");
    if let Some(sign) = sign {
        cmd.arg("--sign").arg(sign);
    }
    if let Some(mode) = mode {
        cmd.arg("--mode").arg(mode);
    }
    if let Some(seed) = seed {
        cmd.arg("--seed").arg(seed.to_string());
    }

    match cmd.status() {
        Ok(s) if s.success() => Ok(()),
        Ok(s) => Err(format!("arcana-tui exited with {s}")),
        Err(_) => Err(
            "arcana-tui binary not found. Install with: cargo install --path crates/arcana-tui"
                .into(),
        ),
    }
}

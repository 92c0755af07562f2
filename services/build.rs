//! Build metadata the email service logs at startup.

use std::{env, process::Command};

fn main() {
    println!(
        "cargo:rustc-env=BUILD_DATE={}",
        chrono::Utc::now().to_rfc3339()
    );

    let stamps = [
        ("BUILD_COMMIT", "EYESENTRY_BUILD_COMMIT", &["rev-parse", "--short", "HEAD"]),
        ("BUILD_BRANCH", "EYESENTRY_BUILD_BRANCH", &["rev-parse", "--abbrev-ref", "HEAD"]),
    ];
    for (name, override_var, git_args) in stamps {
        // CI sets the override when the checkout is shallow or detached.
        let value = env::var(override_var)
            .ok()
            .filter(|value| !value.is_empty())
            .or_else(|| git(git_args))
            .unwrap_or_else(|| "unknown".to_owned());
        println!("cargo:rustc-env={name}={value}");
        println!("cargo:rerun-if-env-changed={override_var}");
    }

    println!("cargo:rerun-if-changed=../.git/HEAD");
}

fn git(args: &[&str]) -> Option<String> {
    let output = Command::new("git").args(args).output().ok()?;
    if !output.status.success() {
        return None;
    }
    let text = String::from_utf8(output.stdout).ok()?;
    Some(text.trim().to_owned()).filter(|text| !text.is_empty())
}

use std::{
    env,
    io::Result,
    process::{Command, Output},
};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    set_compiler_version_env();
}

fn set_compiler_version_env() {
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_owned());
    set_env_from_output(
        "DOCEX_COMPILER_VERSION",
        Command::new(rustc).arg("-V").output(),
    );
}

fn set_env_from_output(name: &str, result: Result<Output>) {
    let val = match result {
        Ok(output) if output.status.success() => String::from_utf8(output.stdout)
            .map(|val| val.trim().to_owned())
            .unwrap_or_default(),
        Ok(output) => {
            println!("cargo:warning=command run error: {:?}", output.status);
            String::new()
        }
        Err(err) => {
            println!("cargo:warning=fatal error executing command: {err}");
            String::new()
        }
    };
    let val = if val.is_empty() {
        "unknown compiler".to_owned()
    } else {
        val
    };
    println!("cargo:rustc-env={name}={val}");
}

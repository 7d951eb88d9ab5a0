/// Get the version string for harbor and libharbor
pub fn get_version_string() -> String {
    format!(
        "harbor {}\nlibharbor {}",
        env!("CARGO_PKG_VERSION"),
        libharbor::version()
    )
}

/// Print version information to stdout
pub fn print_version() {
    println!("{}", get_version_string());
}

#[cfg(test)]
#[path = "version_tests.rs"]
mod tests;

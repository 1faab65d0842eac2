// Desktop builds on Linux link against libxdo; fail early with install hints.

fn main() {
    let desktop = std::env::var("CARGO_FEATURE_DESKTOP").is_ok();
    let linux = std::env::var("CARGO_CFG_TARGET_OS").as_deref() == Ok("linux");
    if desktop && linux && !has_libxdo() {
        eprintln!();
        eprintln!("  error: the desktop events grid needs libxdo on Linux.");
        eprintln!("    Fedora/RHEL:   sudo dnf install libxdo-devel");
        eprintln!("    Debian/Ubuntu: sudo apt install libxdo-dev");
        eprintln!("  Or build for the browser instead: dx serve");
        eprintln!();
        std::process::exit(1);
    }
}

fn has_libxdo() -> bool {
    let pkg_config = std::process::Command::new("pkg-config")
        .args(["--exists", "libxdo"])
        .status();
    match pkg_config {
        Ok(status) if status.success() => true,
        // libxdo often ships without a .pc file
        _ => std::process::Command::new("ldconfig")
            .arg("-p")
            .output()
            .map(|o| String::from_utf8_lossy(&o.stdout).contains("libxdo"))
            .unwrap_or(false),
    }
}

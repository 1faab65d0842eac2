//! Events grid - Dioxus app.
//! Default: web (cargo run, or dx serve). Desktop: cargo run --features desktop.

#[cfg(all(feature = "dioxus", any(feature = "desktop", target_arch = "wasm32")))]
fn main() {
    use events_grid_frontend::app::App;
    dioxus::launch(App);
}

#[cfg(all(feature = "web", not(feature = "desktop"), not(target_arch = "wasm32")))]
fn main() {
    // A native `cargo run` of the web build hands over to the Dioxus CLI, which
    // compiles for wasm32 and serves the page.
    let status = std::process::Command::new("dx").arg("serve").status();
    match status {
        Ok(s) => std::process::exit(s.code().unwrap_or(1)),
        Err(e) => {
            eprintln!("Could not run 'dx serve': {}", e);
            eprintln!("Install the Dioxus CLI: cargo install dioxus-cli");
            std::process::exit(1);
        }
    }
}

#[cfg(not(any(feature = "web", feature = "desktop")))]
fn main() {
    eprintln!("Build with --features web or --features desktop to run the events grid.");
}

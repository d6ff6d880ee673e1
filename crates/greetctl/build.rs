// Build script for greetctl - embeds version and endpoint at compile time

const DEFAULT_API_URL: &str = "http://127.0.0.1:7866/";

fn main() {
    // Get version from environment (set by CI) or Cargo.toml
    let version =
        std::env::var("GREETER_VERSION").unwrap_or_else(|_| env!("CARGO_PKG_VERSION").to_string());

    // The endpoint the form talks to is fixed when the binary is built
    let api_url = std::env::var("GREETER_API_URL")
        .ok()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    println!("cargo:rustc-env=GREETER_VERSION={}", version);
    println!("cargo:rustc-env=GREETER_API_URL={}", api_url);

    println!("cargo:rerun-if-changed=Cargo.toml");
    println!("cargo:rerun-if-env-changed=GREETER_VERSION");
    println!("cargo:rerun-if-env-changed=GREETER_API_URL");
}

//! Binary entrypoint for the browser-hosted `site_app_two` application.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site_app_two::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `site_app_two_bin` for wasm32 with the `csr` feature."
    );
}

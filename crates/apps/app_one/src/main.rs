//! Binary entrypoint for the browser-hosted `site_app_one` application.

#[cfg(all(target_arch = "wasm32", feature = "csr"))]
fn main() {
    site_app_one::mount();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!(
        "This binary is intended for the browser/WASM workflow. Build `site_app_one_bin` for wasm32 with the `csr` feature."
    );
}

//! Entry point for generating Swift/Kotlin bindings via `cargo run --bin uniffi-bindgen`.

fn main() {
    uniffi::uniffi_bindgen_main()
}

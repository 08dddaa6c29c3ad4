//! Entry point for the WASM application

pub fn main() {
    upload_portal_frontend::start();
}

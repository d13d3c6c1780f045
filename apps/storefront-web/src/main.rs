//! Storefront web app.
//!
//! Client-side only: the catalog is bundled into the binary, the cart lives
//! in a signal owned by the root component.

mod app;

fn main() {
    console_error_panic_hook::set_once();
    leptos::mount::mount_to_body(app::App);
}

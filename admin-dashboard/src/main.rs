//! Entry point of the admin dashboard when built as a standalone CSR app.

/// Mounts the application to the document body.
fn main() {
	admin_dashboard::init_logging();
	leptos::mount_to_body(admin_dashboard::render);
}

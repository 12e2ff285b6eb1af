//! # Cart Page Entry Point
//!
//! Binary wrapper around [`cart_page::run`]. The actual setup lives in
//! lib.rs so the integration tests can build the same router without a
//! socket.

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    cart_page::init_tracing();
    cart_page::run().await
}

use std::net::SocketAddr;

use log::info;
use server::{handlers, store};

#[tokio::main]
async fn main() {
    env_logger::init();

    let store = store::shared();
    // one visible record on a fresh start
    store.lock().save(
        "Example Item".to_string(),
        9.99,
        Some("This is an example description".to_string()),
    );

    let app = handlers::create_app(store);
    let addr = SocketAddr::from(([127, 0, 0, 1], 3000));

    info!("listening on http://{}", addr);
    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server failed");
}

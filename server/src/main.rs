#[tokio::main]
async fn main() {
    docket::start_server().await;
}

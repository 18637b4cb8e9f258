#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();
    stayhub::run().await;
}

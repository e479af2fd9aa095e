use clap::Parser;
use reqwest::redirect::Policy;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(default_value = "http://localhost:1111")]
    base_url: String,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let client = reqwest::Client::builder()
        .redirect(Policy::none())
        .build()
        .unwrap();

    let response = client.get(&args.base_url).send().await.unwrap();
    println!(
        "GET / -> {} location: {:?}",
        response.status(),
        response.headers().get("location")
    );

    let response = client
        .get(format!("{}/login", args.base_url))
        .send()
        .await
        .unwrap();
    let status = response.status();
    let body = response.text().await.unwrap();
    println!("GET /login -> {} ({} bytes)", status, body.len());
}

use oci_status_error::{ensure_success, ErrorContext};
use reqwest::{header, Method};

const MANIFEST_ACCEPT: &str = "application/vnd.oci.image.index.v1+json, \
    application/vnd.oci.image.manifest.v1+json, \
    application/vnd.docker.distribution.manifest.list.v2+json, \
    application/vnd.docker.distribution.manifest.v2+json";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url = std::env::args().nth(1).unwrap_or_else(|| {
        "https://registry-1.docker.io/v2/library/does-not-exist/manifests/latest".to_owned()
    });

    let ctx = ErrorContext::default();
    let response = reqwest::Client::new()
        .get(&url)
        .header(header::ACCEPT, MANIFEST_ACCEPT)
        .send()
        .await?;

    match ensure_success(&ctx, response, &Method::GET).await {
        Ok(response) => {
            let body = response.text().await?;
            println!("{body}");
        }
        Err(err) => {
            println!("{err}");
            println!("status code: {}", err.status_code());
            println!("message:     {:?}", err.message());
            println!("body bytes:  {}", err.body().len());
        }
    }

    Ok(())
}

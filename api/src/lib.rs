use gloo_net::http::Request;
use serde::Serialize;

pub mod contact;

// post a json body and treat any 2xx as success
//
// the portfolio endpoints never return a body that the client consumes, so unlike a
// typical json api we only surface the status (and the error text, if there is one)
pub(crate) async fn post_json<T: Serialize>(url: &str, body: &T) -> anyhow::Result<()> {
    let resp = Request::post(url).json(body)?.send().await?;

    if resp.ok() {
        Ok(())
    } else {
        let status = resp.status();
        let text = resp.text().await.unwrap_or_default();
        Err(anyhow::Error::msg(format!("{url} returned {status}: {text}")))
    }
}

use std::collections::HashMap;

use futures_util::TryStreamExt;
use warp::hyper::body::Buf;
use warp::multipart::FormData;

use crate::rejections::InputError;

pub mod analytics;
pub mod export;
pub mod home;
pub mod homework;
pub mod quizzes;
pub mod survey;

pub(crate) struct Upload {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Drain a browser multipart form into the uploaded file plus its text
/// fields. Field values are passed through to the platform as-is.
pub(crate) async fn read_upload(
    form: FormData,
) -> Result<(Option<Upload>, HashMap<String, String>), warp::Rejection> {
    let mut file = None;
    let mut fields = HashMap::new();

    let mut form = Box::pin(form);
    while let Some(part) = form.try_next().await.map_err(|e| {
        tracing::error!("could not read multipart form: {e}");
        warp::reject::custom(InputError)
    })? {
        let name = part.name().to_string();
        if name == "file" {
            let file_name = part.filename().unwrap_or("upload.pdf").to_string();
            let bytes = collect_part(part).await?;
            file = Some(Upload { file_name, bytes });
        } else {
            let bytes = collect_part(part).await?;
            fields.insert(name, String::from_utf8_lossy(&bytes).into_owned());
        }
    }

    Ok((file, fields))
}

async fn collect_part(part: warp::multipart::Part) -> Result<Vec<u8>, warp::Rejection> {
    let mut out = Vec::new();
    let mut stream = Box::pin(part.stream());
    while let Some(mut buf) = stream.try_next().await.map_err(|e| {
        tracing::error!("could not read multipart part: {e}");
        warp::reject::custom(InputError)
    })? {
        while buf.has_remaining() {
            let chunk = buf.chunk();
            out.extend_from_slice(chunk);
            let advance = chunk.len();
            buf.advance(advance);
        }
    }
    Ok(out)
}

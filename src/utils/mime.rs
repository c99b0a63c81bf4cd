use url::Url;

const DATA_URL_DEFAULT_TYPE: &str = "text/plain";

/// Guess a MIME type from the lexical form of a file name, path or URL.
///
/// Only the extension is consulted; nothing is read from disk or the network.
/// URLs are reduced to their path first, and `data:` URLs report the media
/// type they declare.
pub fn guess_type(source: &str) -> Option<String> {
    match Url::parse(source) {
        // Single-letter schemes are Windows drive letters, not URLs.
        Ok(url) if url.scheme().len() > 1 => {
            if url.scheme() == "data" {
                data_url_type(url.path())
            } else {
                guess_from_path(url.path())
            }
        }
        _ => guess_from_path(source),
    }
}

fn guess_from_path(path: &str) -> Option<String> {
    mime_guess::from_path(path).first_raw().map(str::to_string)
}

/// `data:[<mediatype>][;base64],<data>`
fn data_url_type(body: &str) -> Option<String> {
    let (header, _) = body.split_once(',')?;
    let media_type = header.split(';').next().unwrap_or_default().trim();

    if media_type.contains('=') || !media_type.contains('/') {
        return Some(DATA_URL_DEFAULT_TYPE.to_string());
    }
    Some(media_type.to_ascii_lowercase())
}

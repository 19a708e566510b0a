use axum::body::Bytes;

const BOUNDARY: &str = "----tubely-test-boundary";

/// Hand-built multipart/form-data body, so tests control every part header
#[derive(Default)]
pub struct MultipartBody {
    body: Vec<u8>,
}

impl MultipartBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn content_type() -> String {
        format!("multipart/form-data; boundary={}", BOUNDARY)
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{}\r\nContent-Disposition: form-data; name=\"{}\"\r\n\r\n{}\r\n",
                BOUNDARY, name, value
            )
            .as_bytes(),
        );
        self
    }

    /// File part; `content_type: None` omits the part's Content-Type header
    pub fn file(
        mut self,
        name: &str,
        file_name: &str,
        content_type: Option<&str>,
        data: &[u8],
    ) -> Self {
        let mut headers = format!(
            "--{}\r\nContent-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
            BOUNDARY, name, file_name
        );
        if let Some(ct) = content_type {
            headers.push_str(&format!("Content-Type: {}\r\n", ct));
        }
        headers.push_str("\r\n");

        self.body.extend_from_slice(headers.as_bytes());
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    pub fn thumbnail(self, content_type: &str, data: &[u8]) -> Self {
        self.file("thumbnail", "thumbnail.png", Some(content_type), data)
    }

    /// Complete body with the closing boundary
    pub fn finish(mut self) -> Bytes {
        self.body
            .extend_from_slice(format!("--{}--\r\n", BOUNDARY).as_bytes());
        Bytes::from(self.body)
    }

    /// Body cut off partway through the last part's content
    pub fn truncated(mut self, drop_bytes: usize) -> Bytes {
        let keep = self.body.len().saturating_sub(drop_bytes);
        self.body.truncate(keep);
        Bytes::from(self.body)
    }
}

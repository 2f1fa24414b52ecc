//! src/services/object_store.rs
//!
//! ObjectStore — binary storage for uploaded images with public URL issuance.
//! `DiskObjectStore` keeps payloads on local disk sharded beneath
//! `base_path/{bucket}/{shard}/{shard}/{path}` and hands out URLs of the form
//! `{public_base}/storage/v1/object/public/{bucket}/{path}`, which the storage
//! handler serves back.

use async_trait::async_trait;
use bytes::Bytes;
use chrono::{DateTime, Utc};
use std::{
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};
use thiserror::Error;
use tokio::{
    fs::{self, File},
    io::{AsyncReadExt, AsyncSeekExt, AsyncWriteExt},
};
use tracing::debug;
use uuid::Uuid;

/// URL segment that precedes `{bucket}/{path}` in every public URL.
pub const PUBLIC_URL_PREFIX: &str = "/storage/v1/object/public/";

const MAX_OBJECT_PATH_LEN: usize = 1024;

#[derive(Debug, Error)]
pub enum ObjectStoreError {
    #[error("object `{0}` not found")]
    NotFound(String),
    #[error("object `{0}` already exists")]
    AlreadyExists(String),
    #[error("invalid object path `{0}`")]
    InvalidPath(String),
    #[error("object is empty")]
    Empty,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type ObjectResult<T> = Result<T, ObjectStoreError>;

/// What the store knows about an object it holds.
#[derive(Debug, Clone)]
pub struct StoredObject {
    /// Path within the bucket, e.g. `Wedding/1718000000000.jpg`.
    pub path: String,
    pub size_bytes: u64,
    pub content_type: String,
    /// Hex MD5 of the payload.
    pub etag: Option<String>,
    pub last_modified: DateTime<Utc>,
}

/// Client boundary for object storage.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Name of the bucket all paths live in.
    fn bucket(&self) -> &str;

    /// Public URL for `path`. Does not check that the object exists.
    fn public_url(&self, path: &str) -> String;

    /// Store `bytes` under `path`. Fails if the path is taken.
    async fn upload(
        &self,
        path: &str,
        bytes: Bytes,
        content_type: Option<&str>,
    ) -> ObjectResult<StoredObject>;

    async fn remove(&self, path: &str) -> ObjectResult<()>;

    /// Metadata plus an open handle for streaming the payload out.
    async fn open(&self, path: &str) -> ObjectResult<(StoredObject, File)>;

    /// Write/read/delete round-trip used by the readiness probe.
    async fn probe(&self) -> ObjectResult<()>;
}

/// Recover the in-bucket path from a public URL by splitting on `/{bucket}/`.
///
/// Returns `None` when the URL does not contain the bucket segment.
pub fn storage_path_from_url(url: &str, bucket: &str) -> Option<String> {
    let marker = format!("/{bucket}/");
    let (_, rest) = url.split_once(&marker)?;
    let rest = rest.split(['?', '#']).next().unwrap_or(rest);
    if rest.is_empty() {
        return None;
    }
    Some(percent_decode(rest))
}

/// Percent-encode each `/`-separated segment of an object path.
pub fn encode_object_path(path: &str) -> String {
    path.split('/')
        .map(|segment| {
            segment
                .bytes()
                .map(|b| match b {
                    b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                        String::from(b as char)
                    }
                    _ => format!("%{b:02X}"),
                })
                .collect::<String>()
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Decode `%XX` escapes. Malformed escapes are kept verbatim.
pub fn percent_decode(input: &str) -> String {
    let bytes = input.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            let decoded = std::str::from_utf8(&bytes[i + 1..i + 3])
                .ok()
                .and_then(|hex| u8::from_str_radix(hex, 16).ok());
            if let Some(value) = decoded {
                out.push(value);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8_lossy(&out).into_owned()
}

#[derive(Clone, Debug)]
pub struct DiskObjectStore {
    /// Base directory on disk where payloads are stored.
    pub base_path: PathBuf,

    bucket: String,

    /// Scheme and authority the public URLs are issued under, no trailing slash.
    public_base_url: String,
}

impl DiskObjectStore {
    pub fn new(
        base_path: impl Into<PathBuf>,
        bucket: impl Into<String>,
        public_base_url: impl Into<String>,
    ) -> Self {
        let public_base_url: String = public_base_url.into();
        Self {
            base_path: base_path.into(),
            bucket: bucket.into(),
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Reject paths that could escape the bucket directory.
    fn ensure_path_safe(&self, path: &str) -> ObjectResult<()> {
        let invalid = || ObjectStoreError::InvalidPath(path.to_string());
        if path.is_empty() || path.len() > MAX_OBJECT_PATH_LEN {
            return Err(invalid());
        }
        if path.starts_with('/') || path.split('/').any(|seg| seg.is_empty() || seg == "..") {
            return Err(invalid());
        }
        if path
            .bytes()
            .any(|b| b.is_ascii_control() || b == b'\\' || b == b'\0')
        {
            return Err(invalid());
        }
        Ok(())
    }

    fn bucket_root(&self) -> PathBuf {
        self.base_path.join(&self.bucket)
    }

    /// Two-level shard from MD5(bucket/path), keeping directories small.
    fn object_shards(&self, path: &str) -> (String, String) {
        let digest = md5::compute(format!("{}/{}", self.bucket, path));
        (format!("{:02x}", digest[0]), format!("{:02x}", digest[1]))
    }

    fn object_path(&self, path: &str) -> PathBuf {
        let (shard_a, shard_b) = self.object_shards(path);
        let mut full = self.bucket_root();
        full.push(shard_a);
        full.push(shard_b);
        full.push(path);
        full
    }

    /// Remove empty directories from `start` up to (not including) `stop`.
    async fn prune_empty_dirs(&self, start: &Path, stop: &Path) {
        let mut current = start.to_path_buf();
        while current.starts_with(stop) && current != stop {
            match fs::remove_dir(&current).await {
                Ok(_) => match current.parent() {
                    Some(parent) => current = parent.to_path_buf(),
                    None => break,
                },
                Err(err) if err.kind() == ErrorKind::NotFound => break,
                Err(err) if err.kind() == ErrorKind::DirectoryNotEmpty => break,
                Err(err) => {
                    debug!("failed to prune directory {}: {}", current.display(), err);
                    break;
                }
            }
        }
    }
}

/// MD5 of the whole file, leaving the cursor back at the start.
async fn md5_hex(file: &mut File) -> io::Result<String> {
    let mut context = md5::Context::new();
    let mut buf = vec![0u8; 64 * 1024];
    loop {
        let read = file.read(&mut buf).await?;
        if read == 0 {
            break;
        }
        context.consume(&buf[..read]);
    }
    file.rewind().await?;
    Ok(format!("{:x}", context.compute()))
}

fn guess_content_type(path: &str) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

#[async_trait]
impl ObjectStore for DiskObjectStore {
    fn bucket(&self) -> &str {
        &self.bucket
    }

    fn public_url(&self, path: &str) -> String {
        format!(
            "{}{}{}/{}",
            self.public_base_url,
            PUBLIC_URL_PREFIX,
            self.bucket,
            encode_object_path(path)
        )
    }

    /// Writes to a temp file, fsyncs, then renames into place.
    async fn upload(
        &self,
        path: &str,
        bytes: Bytes,
        content_type: Option<&str>,
    ) -> ObjectResult<StoredObject> {
        self.ensure_path_safe(path)?;
        if bytes.is_empty() {
            return Err(ObjectStoreError::Empty);
        }

        let file_path = self.object_path(path);
        if fs::try_exists(&file_path).await? {
            return Err(ObjectStoreError::AlreadyExists(path.to_string()));
        }
        let parent = file_path.parent().map(Path::to_path_buf).ok_or_else(|| {
            ObjectStoreError::Io(io::Error::new(
                ErrorKind::Other,
                "object path missing parent directory",
            ))
        })?;
        fs::create_dir_all(&parent).await?;

        let tmp_path = parent.join(format!(".tmp-{}", Uuid::new_v4()));
        let written = async {
            let mut file = File::create(&tmp_path).await?;
            file.write_all(&bytes).await?;
            file.flush().await?;
            file.sync_all().await?;
            fs::rename(&tmp_path, &file_path).await
        }
        .await;
        if let Err(err) = written {
            let _ = fs::remove_file(&tmp_path).await;
            return Err(ObjectStoreError::Io(err));
        }

        let etag = format!("{:x}", md5::compute(&bytes));
        debug!(path, size = bytes.len(), etag = %etag, "stored object");

        Ok(StoredObject {
            path: path.to_string(),
            size_bytes: bytes.len() as u64,
            content_type: content_type
                .map(str::to_string)
                .unwrap_or_else(|| guess_content_type(path)),
            etag: Some(etag),
            last_modified: Utc::now(),
        })
    }

    async fn remove(&self, path: &str) -> ObjectResult<()> {
        self.ensure_path_safe(path)?;
        let file_path = self.object_path(path);
        match fs::remove_file(&file_path).await {
            Ok(_) => debug!("removed object file {}", file_path.display()),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                return Err(ObjectStoreError::NotFound(path.to_string()));
            }
            Err(err) => return Err(ObjectStoreError::Io(err)),
        }

        if let Some(parent) = file_path.parent() {
            self.prune_empty_dirs(parent, &self.bucket_root()).await;
        }
        Ok(())
    }

    async fn open(&self, path: &str) -> ObjectResult<(StoredObject, File)> {
        self.ensure_path_safe(path)?;
        let file_path = self.object_path(path);
        let mut file = File::open(&file_path).await.map_err(|err| {
            if err.kind() == ErrorKind::NotFound {
                ObjectStoreError::NotFound(path.to_string())
            } else {
                ObjectStoreError::Io(err)
            }
        })?;
        let meta = file.metadata().await?;
        let etag = md5_hex(&mut file).await?;
        let last_modified = meta
            .modified()
            .map(DateTime::<Utc>::from)
            .unwrap_or_else(|_| Utc::now());

        Ok((
            StoredObject {
                path: path.to_string(),
                size_bytes: meta.len(),
                content_type: guess_content_type(path),
                etag: Some(etag),
                last_modified,
            },
            file,
        ))
    }

    async fn probe(&self) -> ObjectResult<()> {
        let root = self.bucket_root();
        fs::create_dir_all(&root).await?;
        let tmp_path = root.join(format!(".readyz-{}", Uuid::new_v4()));
        fs::write(&tmp_path, b"readyz").await?;
        let read = fs::read(&tmp_path).await;
        let _ = fs::remove_file(&tmp_path).await;
        if read? != b"readyz" {
            return Err(ObjectStoreError::Io(io::Error::new(
                ErrorKind::InvalidData,
                "file content mismatch",
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use tokio::io::AsyncReadExt;

    fn test_store() -> (DiskObjectStore, TempDir) {
        let dir = TempDir::new().unwrap();
        let store = DiskObjectStore::new(dir.path(), "portfolio", "http://localhost:3000/");
        (store, dir)
    }

    #[tokio::test]
    async fn upload_then_open_returns_the_same_bytes() {
        let (store, _dir) = test_store();
        let stored = store
            .upload("Wedding/1.jpg", Bytes::from_static(b"jpeg-bytes"), None)
            .await
            .unwrap();
        assert_eq!(stored.content_type, "image/jpeg");
        assert_eq!(stored.size_bytes, 10);

        let (meta, mut file) = store.open("Wedding/1.jpg").await.unwrap();
        let mut buf = Vec::new();
        file.read_to_end(&mut buf).await.unwrap();
        assert_eq!(buf, b"jpeg-bytes");
        assert_eq!(meta.size_bytes, 10);
        assert_eq!(meta.etag, stored.etag);
        assert_eq!(
            meta.etag,
            Some(format!("{:x}", md5::compute(b"jpeg-bytes")))
        );
    }

    #[tokio::test]
    async fn uploading_to_a_taken_path_fails() {
        let (store, _dir) = test_store();
        store
            .upload("a/b.png", Bytes::from_static(b"1"), None)
            .await
            .unwrap();
        assert!(matches!(
            store.upload("a/b.png", Bytes::from_static(b"2"), None).await,
            Err(ObjectStoreError::AlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn remove_deletes_payload_and_reports_missing_objects() {
        let (store, _dir) = test_store();
        store
            .upload("Portrait/9.jpg", Bytes::from_static(b"x"), None)
            .await
            .unwrap();
        store.remove("Portrait/9.jpg").await.unwrap();

        assert!(matches!(
            store.open("Portrait/9.jpg").await,
            Err(ObjectStoreError::NotFound(_))
        ));
        assert!(matches!(
            store.remove("Portrait/9.jpg").await,
            Err(ObjectStoreError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn traversal_paths_are_rejected() {
        let (store, _dir) = test_store();
        for path in ["../etc/passwd", "/abs.jpg", "a//b.jpg", ""] {
            assert!(matches!(
                store.upload(path, Bytes::from_static(b"x"), None).await,
                Err(ObjectStoreError::InvalidPath(_))
            ));
        }
    }

    #[test]
    fn public_urls_round_trip_through_path_extraction() {
        let (store, _dir) = test_store();
        let url = store.public_url("Baby Shower/1718000000000.jpg");
        assert_eq!(
            url,
            "http://localhost:3000/storage/v1/object/public/portfolio/Baby%20Shower/1718000000000.jpg"
        );
        assert_eq!(
            storage_path_from_url(&url, "portfolio").as_deref(),
            Some("Baby Shower/1718000000000.jpg")
        );
    }

    #[test]
    fn urls_outside_the_bucket_yield_no_path() {
        assert_eq!(
            storage_path_from_url("https://images.example.com/photo.jpg", "portfolio"),
            None
        );
        assert_eq!(
            storage_path_from_url("https://cdn/x/portfolio/", "portfolio"),
            None
        );
    }

    #[test]
    fn malformed_escapes_are_kept() {
        assert_eq!(percent_decode("a%2"), "a%2");
        assert_eq!(percent_decode("100%zz"), "100%zz");
        assert_eq!(percent_decode("a%20b"), "a b");
    }

    #[tokio::test]
    async fn probe_succeeds_on_a_writable_directory() {
        let (store, _dir) = test_store();
        store.probe().await.unwrap();
    }
}

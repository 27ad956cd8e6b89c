/*!
 * Common test utilities for the medtrans test suite
 */

use anyhow::Result;
use lopdf::content::{Content, Operation};
use lopdf::{Document, Object, Stream, dictionary};
use parking_lot::Mutex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use medtrans::app_config::Config;
use medtrans::pipeline::{Pane, RevealBuffer, RevealSurface, RunOutcome};

/// Route library logs through env_logger; safe to call from every test
pub fn init_test_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files
pub fn create_temp_dir() -> Result<TempDir> {
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content in the specified directory
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// Write a PDF with one page per entry; `None` pages have no content stream
pub fn create_test_pdf(dir: &Path, filename: &str, pages: &[Option<&str>]) -> Result<PathBuf> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();
    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Courier",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! { "F1" => font_id },
    });

    let mut kids: Vec<Object> = Vec::new();
    for text in pages {
        let mut page = dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Resources" => resources_id,
        };
        if let Some(text) = text {
            let content = Content {
                operations: vec![
                    Operation::new("BT", vec![]),
                    Operation::new("Tf", vec!["F1".into(), 12.into()]),
                    Operation::new("Td", vec![72.into(), 720.into()]),
                    Operation::new("Tj", vec![Object::string_literal(*text)]),
                    Operation::new("ET", vec![]),
                ],
            };
            let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
            page.set("Contents", content_id);
        }
        kids.push(doc.add_object(page).into());
    }

    let count = kids.len() as i64;
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
            "Resources" => resources_id,
            "MediaBox" => vec![0.into(), 0.into(), 595.into(), 842.into()],
        }),
    );
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let path = dir.join(filename);
    doc.save(&path)?;
    Ok(path)
}

/// Config that animates nothing and only probes `download_dirs`
pub fn test_config(download_dirs: Vec<String>) -> Config {
    let mut config = Config::default();
    config.presentation = config.presentation.instant();
    config.download_dirs = download_dirs;
    config
}

/// Everything a surface was asked to do, in order
#[derive(Debug, Clone, PartialEq)]
pub enum SurfaceEvent {
    Reveal(Pane, char),
    Progress(f64),
    Finished(RunOutcome),
}

#[derive(Debug, Default)]
struct Recording {
    events: Vec<SurfaceEvent>,
    source: String,
    translation: String,
}

/// Surface that records every callback; clones share the recording
#[derive(Debug, Clone, Default)]
pub struct RecordingSurface {
    inner: Arc<Mutex<Recording>>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<SurfaceEvent> {
        self.inner.lock().events.clone()
    }

    pub fn progress_values(&self) -> Vec<f64> {
        self.inner
            .lock()
            .events
            .iter()
            .filter_map(|event| match event {
                SurfaceEvent::Progress(value) => Some(*value),
                _ => None,
            })
            .collect()
    }

    pub fn outcome(&self) -> Option<RunOutcome> {
        self.inner.lock().events.iter().find_map(|event| match event {
            SurfaceEvent::Finished(outcome) => Some(outcome.clone()),
            _ => None,
        })
    }

    /// Latest buffer contents of the source pane
    pub fn source_text(&self) -> String {
        self.inner.lock().source.clone()
    }

    /// Latest buffer contents of the translation pane
    pub fn translation_text(&self) -> String {
        self.inner.lock().translation.clone()
    }
}

impl RevealSurface for RecordingSurface {
    fn reveal(&mut self, pane: Pane, ch: char, buffer: &RevealBuffer) {
        let mut recording = self.inner.lock();
        recording.events.push(SurfaceEvent::Reveal(pane, ch));
        match pane {
            Pane::Source => recording.source = buffer.as_str().to_string(),
            Pane::Translation => recording.translation = buffer.as_str().to_string(),
        }
    }

    fn progress(&mut self, percent: f64) {
        self.inner.lock().events.push(SurfaceEvent::Progress(percent));
    }

    fn finished(&mut self, outcome: &RunOutcome) {
        self.inner.lock().events.push(SurfaceEvent::Finished(outcome.clone()));
    }
}

/// Local HTTP server answering every request with a fixed response
pub struct HttpStub {
    /// Endpoint URL to configure the client with
    pub endpoint: String,
    /// Request lines received so far
    pub requests: Arc<Mutex<Vec<String>>>,
}

/// Serve `status` with `body` to every request
pub async fn spawn_http_stub(status: u16, body: &'static str) -> Result<HttpStub> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;
    let requests = Arc::new(Mutex::new(Vec::new()));
    let recorded = requests.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let recorded = recorded.clone();
            tokio::spawn(async move {
                let request = read_request_head(&mut socket).await;
                if let Some(line) = request.lines().next() {
                    recorded.lock().push(line.to_string());
                }

                let response = format!(
                    "HTTP/1.1 {} Stub\r\nContent-Type: application/json; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    body.len(),
                    body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    Ok(HttpStub {
        endpoint: format!("http://{}/translate_a/single", address),
        requests,
    })
}

/// Accept connections and never answer them
pub async fn spawn_silent_stub() -> Result<String> {
    let listener = TcpListener::bind("127.0.0.1:0").await?;
    let address = listener.local_addr()?;

    tokio::spawn(async move {
        let mut held = Vec::new();
        while let Ok((socket, _)) = listener.accept().await {
            held.push(socket);
        }
    });

    Ok(format!("http://{}/translate_a/single", address))
}

async fn read_request_head(socket: &mut tokio::net::TcpStream) -> String {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    loop {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => {
                head.extend_from_slice(&chunk[..n]);
                if head.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }
        }
    }
    String::from_utf8_lossy(&head).to_string()
}
